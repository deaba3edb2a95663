//! Creature configuration: built once, then shared read-only by every subsystem.

use crate::error::WyrmError;
use crate::float::Float;
use crate::leg::{LegSpec, LimbConfig, DEFAULT_LEGS};
use crate::oscillator::GaitConfig;
use crate::profile::RadiusProfile;
use crate::render::{RibConfig, SkullConfig, StrokeWidths, TailConfig, VertebraConfig};
use alloc::vec::Vec as AllocVec;

/// Everything that shapes the creature: spine length, body profile, limbs, gait and drawing.
///
/// # Builder Pattern
/// ```
/// use wyrm::config::CreatureConfig;
///
/// let config: CreatureConfig<f32> = CreatureConfig::new()
///     .with_move_speed(0.06)
///     .with_tail_start(60);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct CreatureConfig<F: Float> {
    /// Number of spine points behind the head. Default: 84.
    pub seg_count: usize,
    /// Maximum distance between consecutive spine points. Default: 8.
    pub seg_len: F,
    /// Fraction of the remaining head-to-target distance covered per frame. Default: 0.04.
    pub move_speed: F,
    /// Amplitude of the sine wave the spine is laid out on at rebuild. Default: 15.
    pub rest_wave_amplitude: F,
    /// Per-index frequency of that wave. Default: 0.1.
    pub rest_wave_frequency: F,
    pub profile: RadiusProfile<F>,
    pub strokes: StrokeWidths<F>,
    pub skull: SkullConfig<F>,
    pub ribs: RibConfig<F>,
    pub legs: AllocVec<LegSpec>,
    pub limb: LimbConfig<F>,
    pub gait: GaitConfig<F>,
    pub tail: TailConfig<F>,
    pub vertebrae: VertebraConfig<F>,
}

impl<F: Float> CreatureConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        CreatureConfig {
            seg_count: 84,
            seg_len: F::from_f32(8.0),
            move_speed: F::from_f32(0.04),
            rest_wave_amplitude: F::from_f32(15.0),
            rest_wave_frequency: F::from_f32(0.1),
            profile: RadiusProfile::default(),
            strokes: StrokeWidths::default(),
            skull: SkullConfig::default(),
            ribs: RibConfig::default(),
            legs: DEFAULT_LEGS.to_vec(),
            limb: LimbConfig::default(),
            gait: GaitConfig::default(),
            tail: TailConfig::default(),
            vertebrae: VertebraConfig::default(),
        }
    }

    /// Set the spine point count and link length.
    pub fn with_segments(mut self, count: usize, len: F) -> Self {
        self.seg_count = count;
        self.seg_len = len;
        self
    }

    /// Set the head easing fraction.
    pub fn with_move_speed(mut self, move_speed: F) -> Self {
        self.move_speed = move_speed;
        self
    }

    /// Set the radius profile.
    pub fn with_profile(mut self, profile: RadiusProfile<F>) -> Self {
        self.profile = profile;
        self
    }

    /// Set the rib index range `[start, end)`.
    pub fn with_ribs(mut self, start: usize, end: usize) -> Self {
        self.ribs.start = start;
        self.ribs.end = end;
        self
    }

    /// Set the first spine index of the tapered tail.
    pub fn with_tail_start(mut self, start: usize) -> Self {
        self.tail.start = start;
        self
    }

    /// Replace the leg attachment points.
    pub fn with_legs(mut self, legs: AllocVec<LegSpec>) -> Self {
        self.legs = legs;
        self
    }

    /// Set the gait rates.
    pub fn with_gait(mut self, gait: GaitConfig<F>) -> Self {
        self.gait = gait;
        self
    }

    /// Check the cross-field invariants.
    ///
    /// The tail taper must begin at or after `ribs.end` and inside the spine,
    /// so changing `seg_count` forces the rib, tail and leg indices to be
    /// revisited together.
    pub fn validate(&self) -> Result<(), WyrmError> {
        let count = self.seg_count;
        if count == 0 {
            return Err(WyrmError::EmptyChain);
        }
        if !self.seg_len.is_finite() || self.seg_len <= F::zero() {
            return Err(WyrmError::InvalidSegmentLength);
        }
        if !(self.move_speed > F::zero() && self.move_speed < F::one()) {
            return Err(WyrmError::InvalidMoveSpeed);
        }
        if self.ribs.start >= self.ribs.end || self.ribs.end > count {
            return Err(WyrmError::RibRangeInvalid {
                start: self.ribs.start,
                end: self.ribs.end,
                count,
            });
        }
        if self.tail.start < self.ribs.end {
            return Err(WyrmError::TailOverlapsRibs {
                tail_start: self.tail.start,
                rib_end: self.ribs.end,
            });
        }
        if self.tail.start >= count {
            return Err(WyrmError::TailOutOfRange { tail_start: self.tail.start, count });
        }
        if let Some(leg) = self.legs.iter().find(|leg| leg.spine_index >= count) {
            return Err(WyrmError::LegOutOfRange { index: leg.spine_index, count });
        }
        Ok(())
    }
}

impl<F: Float> Default for CreatureConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leg::LegRole;
    use alloc::vec;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(CreatureConfig::<f32>::new().validate(), Ok(()));
        assert_eq!(CreatureConfig::<f64>::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_chain() {
        let c = CreatureConfig::<f32>::new().with_segments(0, 8.0);
        assert_eq!(c.validate(), Err(WyrmError::EmptyChain));
    }

    #[test]
    fn rejects_bad_segment_length() {
        let c = CreatureConfig::<f32>::new().with_segments(84, 0.0);
        assert_eq!(c.validate(), Err(WyrmError::InvalidSegmentLength));
        let c = CreatureConfig::<f32>::new().with_segments(84, f32::NAN);
        assert_eq!(c.validate(), Err(WyrmError::InvalidSegmentLength));
    }

    #[test]
    fn rejects_move_speed_outside_unit_interval() {
        for speed in [0.0f64, 1.0, -0.2, 1.5] {
            let c = CreatureConfig::new().with_move_speed(speed);
            assert_eq!(c.validate(), Err(WyrmError::InvalidMoveSpeed));
        }
    }

    #[test]
    fn rejects_tail_before_rib_end() {
        let c = CreatureConfig::<f32>::new().with_tail_start(40);
        assert_eq!(
            c.validate(),
            Err(WyrmError::TailOverlapsRibs { tail_start: 40, rib_end: 54 })
        );
    }

    #[test]
    fn rejects_tail_past_spine() {
        let c = CreatureConfig::<f32>::new().with_tail_start(84);
        assert_eq!(c.validate(), Err(WyrmError::TailOutOfRange { tail_start: 84, count: 84 }));
    }

    #[test]
    fn rejects_ribs_past_spine() {
        let c = CreatureConfig::<f32>::new().with_segments(50, 8.0);
        assert_eq!(
            c.validate(),
            Err(WyrmError::RibRangeInvalid { start: 11, end: 54, count: 50 })
        );
    }

    #[test]
    fn rejects_leg_past_spine() {
        let c = CreatureConfig::<f32>::new()
            .with_legs(vec![LegSpec { spine_index: 90, role: LegRole::Back }]);
        assert_eq!(c.validate(), Err(WyrmError::LegOutOfRange { index: 90, count: 84 }));
    }
}
