use super::input::InputSnapshot;
use crate::model::{CharacterConfig, MovementMode};

/// Maps held inputs to the movement mode used by the next locomotion pass.
/// Crouch wins over slide, slide over walking; exactly one mode results.
pub fn classify(snapshot: &InputSnapshot) -> MovementMode {
    if snapshot.crouch_held {
        MovementMode::Crouching
    } else if snapshot.slide_held {
        MovementMode::Sliding
    } else {
        MovementMode::Walking
    }
}

impl MovementMode {
    /// Target horizontal speed while this mode is active.
    ///
    /// Sliding currently holds its entry speed as a flat target; the
    /// friction-driven decay toward `slide_end_speed` is an unimplemented
    /// extension point, which is why `slide_friction` has no reader yet.
    pub fn target_speed(self, config: &CharacterConfig) -> f32 {
        match self {
            MovementMode::Walking => config.walk_speed,
            MovementMode::Crouching => config.crouch_speed,
            MovementMode::Sliding => config.slide_start_speed,
        }
    }

    /// Stance height while this mode is active; doubles as the ground probe
    /// reach and is reported to the stance collaborator each tick.
    pub fn stance_height(self, config: &CharacterConfig) -> f32 {
        match self {
            MovementMode::Walking => config.walk_height,
            MovementMode::Crouching | MovementMode::Sliding => config.crouch_height,
        }
    }
}
