//! Chain-follow kinematics and skeletal rendering for a procedural creature.
//!
//! `wyrm` animates a serpentine skeleton that chases a target point: a head
//! eases toward the target, a fixed-length spine relaxes behind it, legs step
//! on a phase oscillator and the ribs breathe. Everything is drawn through a
//! small [`Surface`] trait so any 2D canvas can host it.
//!
//! # Features
//!
//! - **Chain solver**: exponential head easing plus a head-to-tail max-length pass
//! - **Radius profile**: smoothstep-blended skull-to-tail silhouette
//! - **Leg articulation**: three-bone limbs with a travelling-wave gait
//! - **Layered renderer**: spine, ribs, legs, tail, vertebrae and skull, back to front
//! - **Observable**: watch rebuilds, updates and layers via `FrameObserver`
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod profile;
pub mod chain;
pub mod oscillator;
pub mod leg;
pub mod surface;
pub mod render;
pub mod creature;
pub mod frame;
pub mod input;
pub mod viewport;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use profile::{smoothstep, BodyPart, RadiusProfile};
pub use chain::{SpineChain, SpinePoint};
pub use oscillator::{Gait, GaitConfig, Oscillator};
pub use leg::{articulate, LegPose, LegRole, LegSpec, LimbConfig, Side, Toe, DEFAULT_LEGS};
pub use surface::{Color, CommandRecorder, DrawCommand, Palette, Surface};
pub use render::{Layer, Scene, SkeletonRenderer};
pub use creature::Creature;
pub use frame::{FrameLoop, LoopState};
pub use input::{FollowInput, PointerKind};
pub use viewport::Viewport;
pub use config::CreatureConfig;
pub use observer::{FrameObserver, NoOpFrameObserver};
pub use error::WyrmError;
