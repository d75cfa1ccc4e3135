use tracing::debug;

use crate::model::{CharacterConfig, CharacterState, GroundState};

/// One tick of gravity, jump, and ground-rest integration.
///
/// The step order is load-bearing:
/// 1. effective gravity (sustain multiplier only while held and ascending)
/// 2. Euler step of vertical velocity
/// 3. landing edge (InAir -> Grounded) clears the jump latch
/// 4. takeoff consumes a pending jump and sets the latch
/// 5. rest clamp zeroes vertical velocity when grounded and not latched
/// 6. previous ground state is recorded for the next tick's edge detection
///
/// Running the takeoff before the clamp lets the latch shield a same-tick
/// takeoff from being zeroed; clearing the latch on the landing edge before
/// the takeoff lets a buffered jump re-latch on the landing tick.
pub fn integrate(
    state: &mut CharacterState,
    pending_jump: &mut bool,
    jump_held: bool,
    config: &CharacterConfig,
    dt: f32,
) {
    let mut effective_gravity = config.gravity;
    if jump_held && state.velocity.y > 0.0 {
        effective_gravity *= config.jump_sustain_gravity;
    }
    state.velocity.y += effective_gravity * dt;

    let landed = state.ground_state == GroundState::Grounded
        && state.previous_ground_state == GroundState::InAir;
    if landed {
        state.left_ground_because_of_jump = false;
        debug!(vertical_speed = state.velocity.y, "landed");
    }

    if *pending_jump && state.ground_state == GroundState::Grounded {
        let takeoff_speed = state.velocity.y.max(config.jump_takeoff_speed);
        debug!(takeoff_speed, "jump takeoff");
        state.velocity.y = takeoff_speed;
        *pending_jump = false;
        state.left_ground_because_of_jump = true;
    }

    if state.ground_state == GroundState::Grounded && !state.left_ground_because_of_jump {
        state.velocity.y = 0.0;
    }

    state.previous_ground_state = state.ground_state;
}
