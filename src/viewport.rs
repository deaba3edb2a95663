//! Logical canvas size and device pixel ratio.

use crate::float::Float;
use crate::vec::Vec2;

/// Highest pixel ratio the backing store is scaled to.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// A canvas measured in CSS pixels plus the ratio used for its backing store.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
    pixel_ratio: f64,
}

impl Viewport {
    /// Pixel ratios that are non-finite or non-positive count as 1; anything above 2 is capped.
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        let pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(MAX_PIXEL_RATIO)
        } else {
            1.0
        };
        Viewport { width: width.max(0.0), height: height.max(0.0), pixel_ratio }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// Backing-store size in device pixels, never smaller than 1×1.
    pub fn backing_size(&self) -> (u32, u32) {
        let scale = |css: f64| libm::floor(css * self.pixel_ratio).max(1.0) as u32;
        (scale(self.width), scale(self.height))
    }

    pub fn logical_size<F: Float>(&self) -> Vec2<F> {
        Vec2::new(F::from_f64(self.width), F::from_f64(self.height))
    }

    /// Where the creature is recentred on resize.
    pub fn center<F: Float>(&self) -> Vec2<F> {
        self.logical_size::<F>().scale(F::half())
    }
}
