//! Body thickness along the spine: skull, neck, shoulders, chest, belly, hips, tail.

use crate::float::Float;

/// Named anatomical landmarks with their own resting radius.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BodyPart {
    Head,
    Neck,
    Shoulder,
    Chest,
    Belly,
    Hip,
    TailBase,
    TailMid,
    TailEnd,
}

/// One contiguous slice of the normalized spine `[start, end)`.
///
/// A plateau has `from == to`; otherwise the radius eases from `from` to `to`.
#[derive(Copy, Clone, Debug)]
pub struct Band {
    pub start: f32,
    pub end: f32,
    pub from: BodyPart,
    pub to: BodyPart,
}

const fn band(start: f32, end: f32, from: BodyPart, to: BodyPart) -> Band {
    Band { start, end, from, to }
}

/// Bands covering `[0, 1)` in head-to-tail order, each starting where the last ended.
///
/// The head plateau stops at 0.06 rather than 0.08 so that segment 6 of 85
/// (t ≈ 0.07) is already narrowing toward the neck. Moving it back to 0.08
/// flattens the first twelve segments and breaks that guarantee.
pub static BANDS: [Band; 10] = [
    band(0.0, 0.06, BodyPart::Head, BodyPart::Head),
    band(0.06, 0.15, BodyPart::Head, BodyPart::Neck),
    band(0.15, 0.2, BodyPart::Neck, BodyPart::Shoulder),
    band(0.2, 0.35, BodyPart::Shoulder, BodyPart::Chest),
    band(0.35, 0.5, BodyPart::Chest, BodyPart::Chest),
    band(0.5, 0.6, BodyPart::Chest, BodyPart::Belly),
    band(0.6, 0.7, BodyPart::Belly, BodyPart::Hip),
    band(0.7, 0.75, BodyPart::Hip, BodyPart::TailBase),
    band(0.75, 0.85, BodyPart::TailBase, BodyPart::TailMid),
    band(0.85, 1.0, BodyPart::TailMid, BodyPart::TailEnd),
];

/// Cubic Hermite easing `t²(3 − 2t)`; zero slope at both ends.
pub fn smoothstep<F: Float>(t: F) -> F {
    t * t * (F::from_f32(3.0) - F::two() * t)
}

/// Resting radius for each [`BodyPart`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RadiusProfile<F: Float> {
    pub head: F,
    pub neck: F,
    pub shoulder: F,
    pub chest: F,
    pub belly: F,
    pub hip: F,
    pub tail_base: F,
    pub tail_mid: F,
    pub tail_end: F,
}

impl<F: Float> Default for RadiusProfile<F> {
    fn default() -> Self {
        RadiusProfile {
            head: F::from_f32(10.0),
            neck: F::from_f32(8.0),
            shoulder: F::from_f32(14.0),
            chest: F::from_f32(20.0),
            belly: F::from_f32(18.0),
            hip: F::from_f32(14.0),
            tail_base: F::from_f32(10.0),
            tail_mid: F::from_f32(6.0),
            tail_end: F::from_f32(2.0),
        }
    }
}

impl<F: Float> RadiusProfile<F> {
    pub fn radius(&self, part: BodyPart) -> F {
        match part {
            BodyPart::Head => self.head,
            BodyPart::Neck => self.neck,
            BodyPart::Shoulder => self.shoulder,
            BodyPart::Chest => self.chest,
            BodyPart::Belly => self.belly,
            BodyPart::Hip => self.hip,
            BodyPart::TailBase => self.tail_base,
            BodyPart::TailMid => self.tail_mid,
            BodyPart::TailEnd => self.tail_end,
        }
    }

    /// Thickness at 1-based segment `index` out of `total` positions.
    ///
    /// The head occupies position 0, so a spine of `n` points is sampled with
    /// `radius_at(i + 1, n + 1)`.
    pub fn radius_at(&self, index: usize, total: usize) -> F {
        if total == 0 {
            return self.head;
        }
        self.radius_at_t(F::from_usize(index) / F::from_usize(total))
    }

    /// Thickness at normalized spine position `t`.
    pub fn radius_at_t(&self, t: F) -> F {
        let last = BANDS.len() - 1;
        let band = BANDS
            .iter()
            .find(|b| t < F::from_f32(b.end))
            .unwrap_or(&BANDS[last]);

        let from = self.radius(band.from);
        let to = self.radius(band.to);
        if band.from == band.to {
            return from;
        }
        let start = F::from_f32(band.start);
        let width = F::from_f32(band.end - band.start);
        let local = ((t - start) / width).clamp(F::zero(), F::one());
        from.lerp(to, smoothstep(local))
    }
}
