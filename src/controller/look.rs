use glam::Vec2;

use crate::model::{CharacterConfig, CharacterState};

/// Applies one tick of look input to yaw and pitch.
///
/// Yaw accumulates without bounds and wraps naturally in the rotation it
/// feeds. Pitch accumulates first and is clamped after, so no input
/// magnitude can push it past the configured bounds within a tick. The
/// vertical component is negated unless Y inversion is enabled.
pub fn apply_look(state: &mut CharacterState, look_delta: Vec2, config: &CharacterConfig, dt: f32) {
    let mut scaled = look_delta * config.look_sensitivity * dt;
    if !config.invert_look_y {
        scaled.y = -scaled.y;
    }

    state.yaw += scaled.x;
    state.pitch = (state.pitch + scaled.y).clamp(config.min_look_angle, config.max_look_angle);
}
