use glam::{Quat, Vec2, Vec3};

use super::ground::GroundSample;
use crate::math::{horizontal, move_towards};
use crate::model::{CharacterConfig, CharacterState};

/// One tick of horizontal steering.
///
/// The wish vector is the move axis scaled by responsiveness and dt, rotated
/// into world space by the current heading, tilted into the ground plane
/// when grounded so slopes are followed, and finally projected back to the
/// horizontal plane. A non-zero wish steers the horizontal velocity toward
/// the active mode's target speed with a step bounded by responsiveness x
/// dt; a zero wish hands over to [`dampen`]. Vertical velocity is never
/// touched here.
pub fn steer(
    state: &mut CharacterState,
    move_axis: Vec2,
    sample: &GroundSample,
    config: &CharacterConfig,
    dt: f32,
) {
    let scaled = move_axis * config.walk_response * dt;
    let mut wish = state.body_rotation() * Vec3::new(scaled.x, 0.0, scaled.y);

    if sample.grounded() {
        wish = Quat::from_rotation_arc(Vec3::Y, sample.normal) * wish;
    }

    let wish_flat = horizontal(wish);

    if wish_flat.length_squared() > 0.0 {
        let target_speed = state.movement_mode.target_speed(config);
        let target = wish_flat.normalize() * target_speed;
        let stepped = move_towards(
            horizontal(state.velocity),
            target,
            config.walk_response * dt,
        );
        state.velocity.x = stepped.x;
        state.velocity.z = stepped.z;
    } else {
        dampen(state, config, dt);
    }
}

/// Bleeds horizontal speed by `walk_damping` per second, snapping to exactly
/// zero when a step would reverse the direction of travel.
pub fn dampen(state: &mut CharacterState, config: &CharacterConfig, dt: f32) {
    let flat = horizontal(state.velocity);
    let speed = flat.length();
    if speed <= 0.0 {
        return;
    }

    let direction = flat / speed;
    let damped = flat - direction * (config.walk_damping * dt);
    if damped.dot(direction) <= 0.0 {
        state.velocity.x = 0.0;
        state.velocity.z = 0.0;
    } else {
        state.velocity.x = damped.x;
        state.velocity.z = damped.z;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GroundState, MovementMode};
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn flat_sample() -> GroundSample {
        GroundSample {
            state: GroundState::Grounded,
            normal: Vec3::Y,
        }
    }

    fn grounded_state() -> CharacterState {
        let mut state = CharacterState::new(Vec3::ZERO);
        state.ground_state = GroundState::Grounded;
        state.previous_ground_state = GroundState::Grounded;
        state
    }

    #[test]
    fn approach_step_is_bounded_by_response() {
        let config = CharacterConfig::default();
        let mut state = grounded_state();

        steer(&mut state, Vec2::new(1.0, 0.0), &flat_sample(), &config, 0.1);

        // One step toward (15, 0, 0), capped at 15 * 0.1.
        assert_relative_eq!(state.velocity.x, 1.5, epsilon = 1e-6);
        assert_relative_eq!(state.velocity.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn velocity_converges_to_target_speed() {
        let config = CharacterConfig::default();
        let mut state = grounded_state();

        for _ in 0..20 {
            steer(&mut state, Vec2::new(0.0, 1.0), &flat_sample(), &config, 0.1);
        }

        assert_relative_eq!(state.velocity.z, config.walk_speed, epsilon = 1e-4);
        assert!(
            horizontal(state.velocity).length() <= config.walk_speed + 1e-4,
            "approach must not overshoot the target speed"
        );
    }

    #[test]
    fn wish_direction_follows_yaw() {
        let config = CharacterConfig::default();
        let mut state = grounded_state();
        state.yaw = FRAC_PI_2;

        // Forward input while facing +x.
        steer(&mut state, Vec2::new(0.0, 1.0), &flat_sample(), &config, 0.1);

        assert!(state.velocity.x > 0.0);
        assert_relative_eq!(state.velocity.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn vertical_velocity_is_left_alone() {
        let config = CharacterConfig::default();
        let mut state = grounded_state();
        state.velocity.y = -7.0;

        steer(&mut state, Vec2::new(1.0, 0.0), &flat_sample(), &config, 0.1);
        assert_eq!(state.velocity.y, -7.0);

        steer(&mut state, Vec2::ZERO, &flat_sample(), &config, 0.1);
        assert_eq!(state.velocity.y, -7.0);
    }

    #[test]
    fn slope_tilt_preserves_horizontal_heading() {
        let config = CharacterConfig::default();
        let mut state = grounded_state();
        let sloped = GroundSample {
            state: GroundState::Grounded,
            // 30 degree incline rising along -x.
            normal: Vec3::new(0.5, 3f32.sqrt() / 2.0, 0.0).normalize(),
        };

        steer(&mut state, Vec2::new(1.0, 0.0), &sloped, &config, 0.1);

        assert!(state.velocity.x > 0.0);
        assert_relative_eq!(state.velocity.z, 0.0, epsilon = 1e-5);
        assert_eq!(state.velocity.y, 0.0, "tilt must not leak into y");
    }

    #[test]
    fn crouch_mode_caps_at_crouch_speed() {
        let config = CharacterConfig::default();
        let mut state = grounded_state();
        state.movement_mode = MovementMode::Crouching;

        for _ in 0..30 {
            steer(&mut state, Vec2::new(0.0, 1.0), &flat_sample(), &config, 0.1);
        }

        assert_relative_eq!(state.velocity.z, config.crouch_speed, epsilon = 1e-4);
    }

    #[test]
    fn damping_converges_to_exact_zero_without_reversal() {
        let config = CharacterConfig::default();
        let mut state = grounded_state();
        state.velocity = Vec3::new(0.2, 0.0, 0.1);
        let direction = horizontal(state.velocity).normalize();

        let mut ticks = 0;
        while horizontal(state.velocity) != Vec3::ZERO {
            dampen(&mut state, &config, 0.1);
            let remaining = horizontal(state.velocity);
            assert!(
                remaining.dot(direction) >= 0.0,
                "damping must never reverse the direction of travel"
            );
            ticks += 1;
            assert!(ticks < 100, "damping must converge in finite ticks");
        }

        assert_eq!(state.velocity.x, 0.0);
        assert_eq!(state.velocity.z, 0.0);
    }

    #[test]
    fn damping_is_a_no_op_at_rest() {
        let config = CharacterConfig::default();
        let mut state = grounded_state();
        state.velocity = Vec3::new(0.0, 3.0, 0.0);

        dampen(&mut state, &config, 0.1);

        assert_eq!(state.velocity, Vec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn zero_input_with_speed_dampens() {
        let config = CharacterConfig::default();
        let mut state = grounded_state();
        state.velocity = Vec3::new(10.0, 0.0, 0.0);

        steer(&mut state, Vec2::ZERO, &flat_sample(), &config, 0.1);

        let expected = 10.0 - config.walk_damping * 0.1;
        assert_relative_eq!(state.velocity.x, expected, epsilon = 1e-5);
    }
}
