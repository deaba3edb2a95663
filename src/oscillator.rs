//! Breathing and walking phase accumulators.

use crate::float::Float;

/// Rates and gating for the two gait oscillators.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GaitConfig<F: Float> {
    /// Radians added to the walk phase on frames where the creature is moving. Default: 0.03.
    pub walk_rate: F,
    /// Cycles added to the breathe phase every frame. Default: 0.003.
    pub breathe_rate: F,
    /// Manhattan head-to-target distance above which the legs animate. Default: 1.0.
    pub walk_threshold: F,
    /// Peak fractional swell of the ribs while breathing. Default: 0.05.
    pub breathe_depth: F,
}

impl<F: Float> Default for GaitConfig<F> {
    fn default() -> Self {
        GaitConfig {
            walk_rate: F::from_f32(0.03),
            breathe_rate: F::from_f32(0.003),
            walk_threshold: F::one(),
            breathe_depth: F::from_f32(0.05),
        }
    }
}

/// A phase that advances by fixed increments and wraps at `period`.
///
/// Only `sin`/`cos` of the phase are ever read, so wrapping every step keeps
/// precision without changing the motion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Oscillator<F: Float> {
    phase: F,
    period: F,
}

impl<F: Float> Oscillator<F> {
    pub fn new(period: F) -> Self {
        Oscillator { phase: F::zero(), period }
    }

    /// An oscillator measured in radians.
    pub fn radians() -> Self {
        Self::new(F::tau())
    }

    /// An oscillator measured in whole cycles.
    pub fn cycles() -> Self {
        Self::new(F::one())
    }

    pub fn advance(&mut self, by: F) {
        self.phase = (self.phase + by).wrap(self.period);
    }

    pub fn phase(&self) -> F {
        self.phase
    }

    /// Phase as an angle in radians.
    pub fn angle(&self) -> F {
        self.phase / self.period * F::tau()
    }
}

/// The walk (radians) and breathe (cycles) oscillators.
///
/// Survives chain rebuilds; only the pose is reset on resize.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gait<F: Float> {
    walk: Oscillator<F>,
    breathe: Oscillator<F>,
}

impl<F: Float> Gait<F> {
    pub fn new() -> Self {
        Gait { walk: Oscillator::radians(), breathe: Oscillator::cycles() }
    }

    /// Advance both phases for one frame. Returns whether the legs stepped.
    ///
    /// `movement` is the Manhattan distance still separating head and target.
    pub fn advance(&mut self, movement: F, config: &GaitConfig<F>) -> bool {
        self.breathe.advance(config.breathe_rate);
        let walking = movement > config.walk_threshold;
        if walking {
            self.walk.advance(config.walk_rate);
        }
        walking
    }

    /// Walk phase in radians.
    pub fn walk_phase(&self) -> F {
        self.walk.phase()
    }

    /// Breathe phase in cycles.
    pub fn breathe_phase(&self) -> F {
        self.breathe.phase()
    }

    /// Rib radius multiplier, `1 ± breathe_depth`.
    pub fn breathing(&self, config: &GaitConfig<F>) -> F {
        F::one() + self.breathe.angle().sin() * config.breathe_depth
    }
}

impl<F: Float> Default for Gait<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oscillator_wraps_at_period() {
        let mut o = Oscillator::<f64>::cycles();
        for _ in 0..7 {
            o.advance(0.25);
        }
        assert!((o.phase() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn breathing_stays_within_depth() {
        let config = GaitConfig::<f64>::default();
        let mut gait = Gait::new();
        for _ in 0..2000 {
            gait.advance(0.0, &config);
            let b = gait.breathing(&config);
            assert!((b - 1.0).abs() <= config.breathe_depth + 1e-12);
        }
    }

    #[test]
    fn walk_gated_by_threshold() {
        let config = GaitConfig::<f32>::default();
        let mut gait = Gait::new();
        assert!(!gait.advance(1.0, &config));
        assert_eq!(gait.walk_phase(), 0.0);
        assert!(gait.advance(1.5, &config));
        assert!((gait.walk_phase() - 0.03).abs() < 1e-7);
    }
}
