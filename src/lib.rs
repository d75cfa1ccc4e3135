//! First-person character locomotion: mouse look, ground sensing, gravity
//! and variable-height jumps, and capped horizontal steering, advanced in a
//! fixed per-tick stage order by [`CharacterController`].
//!
//! The crate simulates a single character and nothing else. Terrain queries
//! go through the [`GroundProbe`] seam and collision response through the
//! [`MoveResolver`] seam, so any world representation can sit on the other
//! side.

pub mod logging;
pub mod math;

// MVC-style split: data in model, per-tick logic in controller
pub mod controller;
pub mod model;

pub use controller::{
    CharacterController, GroundHit, GroundProbe, GroundSample, InputCollector, InputEvent,
    InputSnapshot, MoveResolver, PassthroughResolver, TickOutput,
};
pub use model::{
    CharacterConfig, CharacterState, ConfigError, FlatGround, GroundState, Heightfield,
    MovementMode,
};
