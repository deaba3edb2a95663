//! Error types for creature configuration.

use core::fmt;

/// Ways a [`CreatureConfig`](crate::config::CreatureConfig) can be inconsistent.
///
/// Nothing on the per-frame path fails; these only surface when a creature is built.
#[derive(Debug, Clone, PartialEq)]
pub enum WyrmError {
    /// The spine needs at least one point.
    EmptyChain,
    /// Link length must be positive and finite.
    InvalidSegmentLength,
    /// Head easing fraction must be in (0, 1).
    InvalidMoveSpeed,
    /// Rib range must be non-empty and inside the spine.
    RibRangeInvalid { start: usize, end: usize, count: usize },
    /// The tapered tail would start before the last rib.
    TailOverlapsRibs { tail_start: usize, rib_end: usize },
    /// The tapered tail starts past the end of the spine.
    TailOutOfRange { tail_start: usize, count: usize },
    /// A leg is rooted past the end of the spine.
    LegOutOfRange { index: usize, count: usize },
}

impl fmt::Display for WyrmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WyrmError::EmptyChain => write!(f, "spine needs at least one segment"),
            WyrmError::InvalidSegmentLength => write!(f, "segment length must be positive and finite"),
            WyrmError::InvalidMoveSpeed => write!(f, "move speed must be in (0, 1)"),
            WyrmError::RibRangeInvalid { start, end, count } => {
                write!(f, "rib range {}..{} invalid for {} segments", start, end, count)
            }
            WyrmError::TailOverlapsRibs { tail_start, rib_end } => {
                write!(f, "tail start {} precedes rib end {}", tail_start, rib_end)
            }
            WyrmError::TailOutOfRange { tail_start, count } => {
                write!(f, "tail start {} out of bounds (count: {})", tail_start, count)
            }
            WyrmError::LegOutOfRange { index, count } => {
                write!(f, "leg spine index {} out of bounds (count: {})", index, count)
            }
        }
    }
}
