//! Procedural legs: a three-bone limb hung off the body surface and swung by the walk phase.

use crate::chain::SpineChain;
use crate::float::Float;
use crate::vec::Vec2;

/// Descriptive role of a leg pair. Does not affect geometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LegRole {
    Front,
    Mid,
    Back,
}

/// Where a leg pair is rooted on the spine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LegSpec {
    /// 0-based index into the spine points.
    pub spine_index: usize,
    pub role: LegRole,
}

/// Four leg pairs spaced twelve links apart along the torso.
pub const DEFAULT_LEGS: [LegSpec; 4] = [
    LegSpec { spine_index: 15, role: LegRole::Front },
    LegSpec { spine_index: 27, role: LegRole::Mid },
    LegSpec { spine_index: 39, role: LegRole::Mid },
    LegSpec { spine_index: 51, role: LegRole::Back },
];

/// Which flank a leg hangs from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Right,
    Left,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Right, Side::Left];

    /// Multiplier on the spine normal.
    pub fn sign<F: Float>(self) -> F {
        match self {
            Side::Right => F::one(),
            Side::Left => -F::one(),
        }
    }

    /// Left legs step half a cycle behind the right ones.
    pub fn phase_offset<F: Float>(self) -> F {
        match self {
            Side::Right => F::zero(),
            Side::Left => F::pi(),
        }
    }
}

/// Limb proportions and stepping motion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LimbConfig<F: Float> {
    /// Upper, lower and foot bone lengths. Default: 20, 16, 10.
    pub bones: [F; 3],
    /// Fraction of each bone projected outward along the spine normal.
    pub reach: [F; 3],
    /// Tangential swing per joint at full stride.
    pub swing: [F; 3],
    /// Screen-down offset per joint as a fraction of its bone.
    pub drop: [F; 3],
    /// Stride amplitude applied to `sin(phase)`. Default: 0.5.
    pub step_amp: F,
    /// Extra phase per spine index, giving a travelling wave down the body. Default: 0.15.
    pub phase_stride: F,
    /// Length of the middle toe. Default: 5.
    pub toe_len: F,
    /// Angle of the outer toes off the foot direction. Default: 0.15.
    pub toe_spread: F,
    /// Outer toe length relative to the middle one. Default: 0.9.
    pub outer_toe_scale: F,
}

impl<F: Float> Default for LimbConfig<F> {
    fn default() -> Self {
        LimbConfig {
            bones: [F::from_f32(20.0), F::from_f32(16.0), F::from_f32(10.0)],
            reach: [F::from_f32(0.8), F::from_f32(0.6), F::from_f32(0.4)],
            swing: [F::from_f32(8.0), F::from_f32(5.0), F::zero()],
            drop: [F::from_f32(0.25), F::from_f32(0.5), F::from_f32(0.6)],
            step_amp: F::from_f32(0.5),
            phase_stride: F::from_f32(0.15),
            toe_len: F::from_f32(5.0),
            toe_spread: F::from_f32(0.15),
            outer_toe_scale: F::from_f32(0.9),
        }
    }
}

/// A short stroke fanned out from the foot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Toe<F: Float> {
    pub from: Vec2<F>,
    pub to: Vec2<F>,
}

/// One frame's pose of a single leg.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LegPose<F: Float> {
    /// Root on the spine centreline.
    pub anchor: Vec2<F>,
    /// Where the leg leaves the body surface.
    pub base: Vec2<F>,
    pub joint1: Vec2<F>,
    pub joint2: Vec2<F>,
    pub foot: Vec2<F>,
}

impl<F: Float> LegPose<F> {
    /// Anchor through foot, in drawing order.
    pub fn polyline(&self) -> [Vec2<F>; 5] {
        [self.anchor, self.base, self.joint1, self.joint2, self.foot]
    }

    /// Joints that get a knuckle dot.
    pub fn knuckles(&self) -> [Vec2<F>; 3] {
        [self.base, self.joint1, self.joint2]
    }

    /// Direction the foot points, from the last joint.
    pub fn foot_angle(&self) -> F {
        (self.foot - self.joint2).angle()
    }

    /// Middle toe first, then the two outer toes.
    pub fn toes(&self, limb: &LimbConfig<F>) -> [Toe<F>; 3] {
        let angle = self.foot_angle();
        let outer = limb.toe_len * limb.outer_toe_scale;
        let toe = |offset: F, len: F| Toe {
            from: self.foot,
            to: self.foot + Vec2::from_angle(angle + offset).scale(len),
        };
        [
            toe(F::zero(), limb.toe_len),
            toe(-limb.toe_spread, outer),
            toe(limb.toe_spread, outer),
        ]
    }
}

/// Pose the leg rooted at `spine_index` on `side` for the current walk phase.
///
/// Returns `None` if the index is past the end of the spine.
pub fn articulate<F: Float>(
    chain: &SpineChain<F>,
    spine_index: usize,
    side: Side,
    walk_phase: F,
    limb: &LimbConfig<F>,
) -> Option<LegPose<F>> {
    let spine = *chain.point(spine_index)?;
    let angle = chain.tangent_angle(spine_index)?;

    let tangent = Vec2::from_angle(angle);
    let normal = tangent.perp().scale(side.sign());
    let down = Vec2::new(F::zero(), F::one());

    let phase = walk_phase + side.phase_offset() + F::from_usize(spine_index) * limb.phase_stride;
    let stride = phase.sin() * limb.step_amp;

    let base = spine.pos + normal.scale(spine.radius);
    let mut joints = [base; 3];
    let mut prev = base;
    for (k, joint) in joints.iter_mut().enumerate() {
        let bone = limb.bones[k];
        *joint = prev
            + normal.scale(bone * limb.reach[k])
            + tangent.scale(stride * limb.swing[k])
            + down.scale(bone * limb.drop[k]);
        prev = *joint;
    }

    Some(LegPose {
        anchor: spine.pos,
        base,
        joint1: joints[0],
        joint2: joints[1],
        foot: joints[2],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_are_opposite() {
        assert_eq!(Side::Right.sign::<f32>(), 1.0);
        assert_eq!(Side::Left.sign::<f32>(), -1.0);
        assert_eq!(Side::Left.phase_offset::<f64>(), core::f64::consts::PI);
    }

    #[test]
    fn default_legs_are_ordered_front_to_back() {
        assert!(DEFAULT_LEGS.windows(2).all(|w| w[0].spine_index < w[1].spine_index));
        assert_eq!(DEFAULT_LEGS[0].role, LegRole::Front);
        assert_eq!(DEFAULT_LEGS[3].role, LegRole::Back);
    }
}
