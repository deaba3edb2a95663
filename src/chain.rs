//! The spine: a head point trailed by fixed-length links relaxed head-to-tail.

use crate::config::CreatureConfig;
use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// One vertebra on the spine with its resting body radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpinePoint<F: Float> {
    pub pos: Vec2<F>,
    /// Resting radius from the profile; fixed until the next rebuild.
    pub radius: F,
}

/// Head point plus an ordered head-to-tail buffer of spine points.
#[derive(Clone, Debug, Default)]
pub struct SpineChain<F: Float> {
    head: Vec2<F>,
    points: AllocVec<SpinePoint<F>>,
}

impl<F: Float> SpineChain<F> {
    /// An empty chain with the head at the origin. Nothing is drawn until [`rebuild`](Self::rebuild).
    pub fn new() -> Self {
        SpineChain { head: Vec2::zero(), points: AllocVec::new() }
    }

    /// Build a chain from explicit points.
    pub fn from_points(head: Vec2<F>, points: AllocVec<SpinePoint<F>>) -> Self {
        SpineChain { head, points }
    }

    /// Discard the current pose and lay the spine out behind `center`.
    ///
    /// Point `i` sits `(i + 1)` links to the left of the head on a gentle sine
    /// wave, so the result depends only on `center` and the config.
    pub fn rebuild(&mut self, center: Vec2<F>, config: &CreatureConfig<F>) {
        self.head = center;
        self.points.clear();
        self.points.reserve(config.seg_count);

        let total = config.seg_count + 1;
        for i in 0..config.seg_count {
            let along = F::from_usize(i + 1) * config.seg_len;
            let wave = (F::from_usize(i) * config.rest_wave_frequency).sin() * config.rest_wave_amplitude;
            self.points.push(SpinePoint {
                pos: Vec2::new(center.x - along, center.y + wave),
                radius: config.profile.radius_at(i + 1, total),
            });
        }
    }

    /// Ease the head toward `target` by `move_speed` of the remaining distance.
    pub fn advance_head(&mut self, target: Vec2<F>, move_speed: F) {
        self.head = self.head + (target - self.head).scale(move_speed);
    }

    /// One head-to-tail pass of the max-length constraint.
    ///
    /// Point `i` is only pulled once point `i - 1` is final for this frame.
    /// Links at or under `seg_len` are left alone, so the body can bunch up on tight turns.
    pub fn relax(&mut self, seg_len: F) {
        let mut follow = self.head;
        for p in self.points.iter_mut() {
            let delta = follow - p.pos;
            let dist = delta.length();
            if dist > seg_len {
                p.pos = follow - delta.scale(seg_len / dist);
            }
            follow = p.pos;
        }
    }

    /// Advance the head then relax the whole spine.
    pub fn step(&mut self, target: Vec2<F>, config: &CreatureConfig<F>) {
        self.advance_head(target, config.move_speed);
        self.relax(config.seg_len);
    }

    /// Position of the point before `index`, the head standing in for index 0.
    pub fn leader(&self, index: usize) -> Vec2<F> {
        match index.checked_sub(1).and_then(|i| self.points.get(i)) {
            Some(p) => p.pos,
            None => self.head,
        }
    }

    /// Direction of the spine at `index` from the secant through its neighbours.
    ///
    /// The head substitutes for the missing neighbour at the front, the point
    /// itself at the tail tip.
    pub fn tangent_angle(&self, index: usize) -> Option<F> {
        let here = self.points.get(index)?.pos;
        let prev = self.leader(index);
        let next = self.points.get(index + 1).map_or(here, |p| p.pos);
        Some((next - prev).angle())
    }

    /// Angle the skull faces: away from the first spine point.
    pub fn heading(&self) -> F {
        match self.points.first() {
            Some(p) => (p.pos - self.head).angle() + F::pi(),
            None => F::zero(),
        }
    }

    pub fn head(&self) -> Vec2<F> {
        self.head
    }

    pub fn points(&self) -> &[SpinePoint<F>] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Option<&SpinePoint<F>> {
        self.points.get(index)
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.points.iter().map(|p| p.pos).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Length of the longest link, head included.
    pub fn max_link(&self) -> F {
        let mut follow = self.head;
        let mut longest = F::zero();
        for p in &self.points {
            longest = longest.max(follow.distance(p.pos));
            follow = p.pos;
        }
        longest
    }
}
