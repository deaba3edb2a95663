//! Skeleton renderer: composes the creature into surface calls, back to front.

use crate::chain::SpineChain;
use crate::config::CreatureConfig;
use crate::float::Float;
use crate::leg::{articulate, LegPose, Side};
use crate::observer::FrameObserver;
use crate::oscillator::Gait;
use crate::surface::{Color, Surface};
use crate::vec::Vec2;

/// Drawing layers in paint order. Later layers cover earlier ones.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Layer {
    Background,
    Spine,
    Ribs,
    Legs,
    Tail,
    Vertebrae,
    Head,
}

impl Layer {
    pub const ORDER: [Layer; 7] = [
        Layer::Background,
        Layer::Spine,
        Layer::Ribs,
        Layer::Legs,
        Layer::Tail,
        Layer::Vertebrae,
        Layer::Head,
    ];
}

const SPINE_ALPHA: f32 = 0.95;
const RIB_ALPHA: f32 = 0.85;
const LEG_ALPHA: f32 = 0.9;
const TAIL_ALPHA: f32 = 0.85;
const HEAD_ALPHA: f32 = 0.95;

/// Line widths per body part.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StrokeWidths<F: Float> {
    pub spine: F,
    pub rib: F,
    pub bone: F,
    pub toe: F,
}

impl<F: Float> Default for StrokeWidths<F> {
    fn default() -> Self {
        StrokeWidths {
            spine: F::two(),
            rib: F::from_f32(1.5),
            bone: F::from_f32(1.8),
            toe: F::one(),
        }
    }
}

/// Skull ornament dimensions, in the head's local frame (+x is forward).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SkullConfig<F: Float> {
    pub width: F,
    pub height: F,
    pub jaw_len: F,
    pub teeth: usize,
    pub tooth_spacing: F,
}

impl<F: Float> Default for SkullConfig<F> {
    fn default() -> Self {
        SkullConfig {
            width: F::from_f32(18.0),
            height: F::from_f32(14.0),
            jaw_len: F::from_f32(16.0),
            teeth: 6,
            tooth_spacing: F::from_f32(2.5),
        }
    }
}

/// Rib cage span and shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RibConfig<F: Float> {
    /// First spine index carrying ribs. Default: 11.
    pub start: usize,
    /// One past the last rib-carrying index. Default: 54.
    pub end: usize,
    /// Forward sweep of a rib tip, radians. Default: 0.7.
    pub curve: F,
    /// How much of the sweep is lost toward the back of the cage. Default: 0.3.
    pub curve_taper: F,
    /// Ribs thinner than this after breathing are not drawn. Default: 8.
    pub min_radius: F,
    pub tip_radius: F,
}

impl<F: Float> Default for RibConfig<F> {
    fn default() -> Self {
        RibConfig {
            start: 11,
            end: 54,
            curve: F::from_f32(0.7),
            curve_taper: F::from_f32(0.3),
            min_radius: F::from_f32(8.0),
            tip_radius: F::from_f32(1.5),
        }
    }
}

/// Tapered tail stroke.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TailConfig<F: Float> {
    /// First spine index of the taper; must not precede the rib cage end. Default: 59.
    pub start: usize,
    /// Width added at the root of the taper. Default: 8.
    pub taper_width: F,
    /// Width at the tip. Default: 1.
    pub min_width: F,
}

impl<F: Float> Default for TailConfig<F> {
    fn default() -> Self {
        TailConfig { start: 59, taper_width: F::from_f32(8.0), min_width: F::one() }
    }
}

/// Vertebra markers along the spine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VertebraConfig<F: Float> {
    pub first: usize,
    pub stride: usize,
    pub radius: F,
}

impl<F: Float> Default for VertebraConfig<F> {
    fn default() -> Self {
        VertebraConfig { first: 2, stride: 3, radius: F::from_f32(2.5) }
    }
}

/// Settled state for one frame, as the renderer sees it.
#[derive(Copy, Clone)]
pub struct Scene<'a, F: Float> {
    pub chain: &'a SpineChain<F>,
    pub gait: &'a Gait<F>,
    /// Logical viewport size.
    pub size: Vec2<F>,
}

/// Paints a [`Scene`] with a fixed foreground on a black background.
pub struct SkeletonRenderer<'a, F: Float> {
    config: &'a CreatureConfig<F>,
    foreground: Color,
    background: Color,
}

impl<'a, F: Float> SkeletonRenderer<'a, F> {
    pub fn new(config: &'a CreatureConfig<F>, foreground: Color) -> Self {
        SkeletonRenderer { config, foreground, background: Color::BLACK }
    }

    /// Draw every layer in [`Layer::ORDER`]. An empty spine only clears the background.
    pub fn draw<S: Surface<F>, O: FrameObserver>(
        &self,
        scene: Scene<'_, F>,
        surface: &mut S,
        observer: &mut O,
    ) {
        observer.on_layer(Layer::Background);
        surface.set_alpha(F::one());
        surface.set_fill_color(self.background);
        surface.fill_rect(Vec2::zero(), scene.size);

        if scene.chain.is_empty() {
            return;
        }

        surface.set_stroke_color(self.foreground);
        surface.set_fill_color(self.foreground);
        surface.set_round_caps();

        observer.on_layer(Layer::Spine);
        self.draw_spine(scene.chain, surface);
        observer.on_layer(Layer::Ribs);
        self.draw_ribs(scene.chain, scene.gait, surface);
        observer.on_layer(Layer::Legs);
        self.draw_legs(scene.chain, scene.gait, surface, observer);
        observer.on_layer(Layer::Tail);
        self.draw_tail(scene.chain, surface);
        observer.on_layer(Layer::Vertebrae);
        self.draw_vertebrae(scene.chain, surface);
        observer.on_layer(Layer::Head);
        self.draw_head(scene.chain, surface);
    }

    fn draw_spine<S: Surface<F>>(&self, chain: &SpineChain<F>, surface: &mut S) {
        surface.set_alpha(F::from_f32(SPINE_ALPHA));
        surface.set_line_width(self.config.strokes.spine);
        surface.begin_path();
        surface.move_to(chain.head());
        for p in chain.points() {
            surface.line_to(p.pos);
        }
        surface.stroke();
    }

    fn draw_ribs<S: Surface<F>>(&self, chain: &SpineChain<F>, gait: &Gait<F>, surface: &mut S) {
        let ribs = &self.config.ribs;
        surface.set_alpha(F::from_f32(RIB_ALPHA));
        surface.set_line_width(self.config.strokes.rib);

        let breathing = gait.breathing(&self.config.gait);
        let quarter = F::pi() * F::half();
        let span = F::from_usize(ribs.end.saturating_sub(ribs.start).max(1));
        let end = ribs.end.min(chain.len());

        for i in (ribs.start..end).step_by(2) {
            let (spine, angle) = match (chain.point(i), chain.tangent_angle(i)) {
                (Some(p), Some(a)) => (*p, a),
                _ => continue,
            };
            let r = spine.radius * breathing;
            if r < ribs.min_radius {
                continue;
            }

            let progress = F::from_usize(i - ribs.start) / span;
            let curve = ribs.curve * (F::one() - progress * ribs.curve_taper);
            let forward = Vec2::from_angle(angle).scale(r * F::from_f32(0.3));
            let flare = r * F::from_f32(1.1);
            let p = spine.pos;

            let right_ctrl = p + Vec2::from_angle(angle - quarter).scale(r);
            let right_tip = p + Vec2::from_angle(angle - quarter + curve).scale(flare) + forward;
            let left_ctrl = p + Vec2::from_angle(angle + quarter).scale(r);
            let left_tip = p + Vec2::from_angle(angle + quarter - curve).scale(flare) + forward;

            for (ctrl, tip) in [(right_ctrl, right_tip), (left_ctrl, left_tip)] {
                surface.begin_path();
                surface.move_to(p);
                surface.quadratic_curve_to(ctrl, tip);
                surface.stroke();
            }

            surface.begin_path();
            surface.circle(right_tip, ribs.tip_radius);
            surface.circle(left_tip, ribs.tip_radius);
            surface.fill();
        }
    }

    fn draw_legs<S: Surface<F>, O: FrameObserver>(
        &self,
        chain: &SpineChain<F>,
        gait: &Gait<F>,
        surface: &mut S,
        observer: &mut O,
    ) {
        surface.set_alpha(F::from_f32(LEG_ALPHA));
        for leg in &self.config.legs {
            if leg.spine_index >= chain.len() {
                observer.on_leg_skipped(leg.spine_index);
                continue;
            }
            for side in Side::BOTH {
                if let Some(pose) =
                    articulate(chain, leg.spine_index, side, gait.walk_phase(), &self.config.limb)
                {
                    self.draw_leg(&pose, surface);
                }
            }
        }
    }

    fn draw_leg<S: Surface<F>>(&self, pose: &LegPose<F>, surface: &mut S) {
        let knuckle = F::from_f32(2.5);

        surface.set_line_width(self.config.strokes.bone);
        let [anchor, rest @ ..] = pose.polyline();
        surface.begin_path();
        surface.move_to(anchor);
        for p in rest {
            surface.line_to(p);
        }
        surface.stroke();

        for joint in pose.knuckles() {
            surface.begin_path();
            surface.circle(joint, knuckle);
            surface.fill();
        }

        surface.set_line_width(self.config.strokes.toe);
        for toe in pose.toes(&self.config.limb) {
            surface.segment(toe.from, toe.to);
        }

        surface.begin_path();
        surface.circle(pose.foot, F::two());
        surface.fill();
    }

    fn draw_tail<S: Surface<F>>(&self, chain: &SpineChain<F>, surface: &mut S) {
        let tail = &self.config.tail;
        let points = chain.points();
        let n = points.len();
        surface.set_alpha(F::from_f32(TAIL_ALPHA));

        for i in tail.start..n.saturating_sub(1) {
            let t = F::from_usize(i - tail.start) / F::from_usize(n - tail.start);
            surface.set_line_width((F::one() - t) * tail.taper_width + tail.min_width);
            surface.segment(points[i].pos, points[i + 1].pos);
        }
    }

    fn draw_vertebrae<S: Surface<F>>(&self, chain: &SpineChain<F>, surface: &mut S) {
        let v = &self.config.vertebrae;
        surface.set_alpha(F::one());
        surface.set_fill_color(self.foreground);
        for p in chain.points().iter().skip(v.first).step_by(v.stride.max(1)) {
            surface.begin_path();
            surface.circle(p.pos, v.radius);
            surface.fill();
        }
    }

    fn draw_head<S: Surface<F>>(&self, chain: &SpineChain<F>, surface: &mut S) {
        let skull = &self.config.skull;
        let f = F::from_f32;

        surface.set_alpha(f(HEAD_ALPHA));
        surface.save();
        surface.translate(chain.head());
        surface.rotate(chain.heading());

        surface.set_line_width(f(2.5));
        surface.set_stroke_color(self.foreground);
        surface.begin_path();
        surface.oval(Vec2::zero(), Vec2::new(skull.width, skull.height), F::zero());
        surface.stroke();

        // sockets are punched out in the background color, then outlined
        let socket = Vec2::new(f(4.0), f(5.0));
        let sockets = [
            (Vec2::new(f(-6.0), f(-5.0)), f(-0.2)),
            (Vec2::new(f(-6.0), f(5.0)), f(0.2)),
        ];
        surface.set_fill_color(self.background);
        surface.begin_path();
        for (center, tilt) in sockets {
            surface.oval(center, socket, tilt);
        }
        surface.fill();

        surface.set_stroke_color(self.foreground);
        surface.set_line_width(f(1.5));
        surface.begin_path();
        for (center, tilt) in sockets {
            surface.oval(center, socket, tilt);
        }
        surface.stroke();

        surface.set_fill_color(self.background);
        surface.begin_path();
        surface.oval(Vec2::new(skull.width - F::two(), F::zero()), Vec2::new(F::two(), f(3.0)), F::zero());
        surface.fill();

        let hinge = skull.width * f(0.8);
        surface.set_stroke_color(self.foreground);
        surface.set_line_width(F::two());
        surface.begin_path();
        surface.move_to(Vec2::new(hinge, f(-3.0)));
        surface.line_to(Vec2::new(skull.jaw_len, -F::one()));
        surface.move_to(Vec2::new(hinge, f(3.0)));
        surface.line_to(Vec2::new(skull.jaw_len, F::one()));
        surface.stroke();

        surface.set_line_width(F::one());
        for k in 0..skull.teeth {
            let x = skull.width * f(0.7) + F::from_usize(k) * skull.tooth_spacing;
            surface.segment(Vec2::new(x, f(-3.0)), Vec2::new(x, -F::one()));
            surface.segment(Vec2::new(x, f(3.0)), Vec2::new(x, F::one()));
        }

        surface.restore();
        surface.set_alpha(F::one());
        surface.set_fill_color(self.foreground);
    }
}
