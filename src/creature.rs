//! The creature: spine, gait and follow target driven one frame at a time.

use crate::chain::SpineChain;
use crate::config::CreatureConfig;
use crate::error::WyrmError;
use crate::float::Float;
use crate::observer::FrameObserver;
use crate::oscillator::Gait;
use crate::render::{Scene, SkeletonRenderer};
use crate::surface::{Palette, Surface};
use crate::viewport::Viewport;
use crate::vec::Vec2;

/// A single skeletal creature chasing a target point.
pub struct Creature<F: Float> {
    config: CreatureConfig<F>,
    chain: SpineChain<F>,
    gait: Gait<F>,
    target: Vec2<F>,
    size: Vec2<F>,
    palette: Palette,
    frame: u64,
}

impl<F: Float> Creature<F> {
    /// Validate `config` and create a creature with no spine yet.
    ///
    /// The spine appears on the first [`resize`](Self::resize).
    pub fn new(config: CreatureConfig<F>) -> Result<Self, WyrmError> {
        config.validate()?;
        Ok(Creature {
            config,
            chain: SpineChain::new(),
            gait: Gait::new(),
            target: Vec2::zero(),
            size: Vec2::zero(),
            palette: Palette::default(),
            frame: 0,
        })
    }

    /// Adopt a new viewport: recenter head and target and rebuild the spine.
    ///
    /// The previous pose is discarded; gait phases carry over.
    pub fn resize<O: FrameObserver>(&mut self, viewport: &Viewport, observer: &mut O) {
        self.size = viewport.logical_size();
        let center = viewport.center();
        self.target = center;
        self.chain.rebuild(center, &self.config);
        observer.on_rebuild(self.chain.len());
    }

    pub fn set_target(&mut self, target: Vec2<F>) {
        self.target = target;
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// One simulation step: ease the head, relax the spine, advance the phases.
    pub fn update<O: FrameObserver>(&mut self, observer: &mut O) {
        self.frame += 1;
        self.chain.step(self.target, &self.config);
        let movement = (self.target - self.chain.head()).manhattan();
        let walked = self.gait.advance(movement, &self.config.gait);
        observer.on_update(self.frame, walked);
    }

    /// Paint the current state.
    pub fn render<S: Surface<F>, O: FrameObserver>(&self, surface: &mut S, observer: &mut O) {
        let scene = Scene { chain: &self.chain, gait: &self.gait, size: self.size };
        SkeletonRenderer::new(&self.config, self.palette.color()).draw(scene, surface, observer);
        observer.on_frame_complete(self.frame);
    }

    pub fn config(&self) -> &CreatureConfig<F> {
        &self.config
    }

    pub fn chain(&self) -> &SpineChain<F> {
        &self.chain
    }

    pub fn gait(&self) -> &Gait<F> {
        &self.gait
    }

    pub fn head(&self) -> Vec2<F> {
        self.chain.head()
    }

    pub fn target(&self) -> Vec2<F> {
        self.target
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Frames updated since creation.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
