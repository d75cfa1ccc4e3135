//! Tunable parameters for the locomotion pipeline.

use glam::Vec2;
use std::f32::consts::FRAC_PI_2;
use thiserror::Error;

/// Reason a [`CharacterConfig`] failed validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("look bounds reversed: min {min} exceeds max {max}")]
    ReversedLookBounds { min: f32, max: f32 },
    #[error("{name} must be finite (got {value})")]
    NonFinite { name: &'static str, value: f32 },
    #[error("{name} must not be negative (got {value})")]
    Negative { name: &'static str, value: f32 },
    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f32 },
    #[error("jump_sustain_gravity must lie in [0, 1] (got {0})")]
    SustainOutOfRange(f32),
}

/// All tunables of the controller. Plain data: read and written freely
/// between ticks, validated once wherever a controller is built from it.
///
/// Angles are radians, distances meters, speeds meters per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterConfig {
    // === Look ===
    /// Grab the cursor when the embedding shell starts.
    pub lock_cursor_on_start: bool,
    /// When enabled, pushing the mouse forward looks down.
    pub invert_look_y: bool,
    /// Per-axis turn rate, radians per second per unit of look input.
    pub look_sensitivity: Vec2,
    /// Lower pitch bound, radians.
    pub min_look_angle: f32,
    /// Upper pitch bound, radians.
    pub max_look_angle: f32,

    // === Walk ===
    /// Target horizontal speed while walking.
    pub walk_speed: f32,
    /// Acceleration bound for the capped approach toward the target speed.
    pub walk_response: f32,
    /// Speed bled per second when no move input is present.
    pub walk_damping: f32,
    /// Stance height while walking; also the ground probe reach.
    pub walk_height: f32,

    // === Crouch ===
    pub crouch_speed: f32,
    pub crouch_height: f32,

    // === Slide ===
    /// Target speed on slide entry. Friction-driven decay toward
    /// `slide_end_speed` is an unimplemented extension point.
    pub slide_start_speed: f32,
    pub slide_end_speed: f32,
    pub slide_friction: f32,

    // === Jump & gravity ===
    /// Vertical speed granted by a takeoff. An existing higher upward speed
    /// is kept instead.
    pub jump_takeoff_speed: f32,
    /// Vertical acceleration, negative pulls down.
    pub gravity: f32,
    /// Gravity multiplier in [0, 1] applied while ascending with the jump
    /// button held, extending airtime.
    pub jump_sustain_gravity: f32,

    // === Ground sensing ===
    /// Extra probe reach beyond the stance height.
    pub ground_probe_margin: f32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            // Look
            lock_cursor_on_start: true,
            invert_look_y: false,
            look_sensitivity: Vec2::splat(20f32.to_radians()),
            min_look_angle: -FRAC_PI_2,
            max_look_angle: FRAC_PI_2,

            // Walk
            walk_speed: 15.0,
            walk_response: 15.0,
            walk_damping: 0.9,
            walk_height: 1.0,

            // Crouch
            crouch_speed: 10.0,
            crouch_height: 0.5,

            // Slide
            slide_start_speed: 20.0,
            slide_end_speed: 10.0,
            slide_friction: 0.9,

            // Jump & gravity
            jump_takeoff_speed: 7.5,
            gravity: -19.62,
            jump_sustain_gravity: 0.5,

            // Ground sensing
            ground_probe_margin: 0.05,
        }
    }
}

impl CharacterConfig {
    /// Checks every tunable once. A controller built from a config that
    /// fails here never runs its pipeline.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_finite("min_look_angle", self.min_look_angle)?;
        check_finite("max_look_angle", self.max_look_angle)?;
        if self.min_look_angle > self.max_look_angle {
            return Err(ConfigError::ReversedLookBounds {
                min: self.min_look_angle,
                max: self.max_look_angle,
            });
        }
        check_non_negative("look_sensitivity.x", self.look_sensitivity.x)?;
        check_non_negative("look_sensitivity.y", self.look_sensitivity.y)?;

        check_non_negative("walk_speed", self.walk_speed)?;
        check_non_negative("walk_response", self.walk_response)?;
        check_non_negative("walk_damping", self.walk_damping)?;
        check_positive("walk_height", self.walk_height)?;

        check_non_negative("crouch_speed", self.crouch_speed)?;
        check_positive("crouch_height", self.crouch_height)?;

        check_non_negative("slide_start_speed", self.slide_start_speed)?;
        check_non_negative("slide_end_speed", self.slide_end_speed)?;
        check_non_negative("slide_friction", self.slide_friction)?;

        check_non_negative("jump_takeoff_speed", self.jump_takeoff_speed)?;
        check_finite("gravity", self.gravity)?;
        if !self.jump_sustain_gravity.is_finite()
            || !(0.0..=1.0).contains(&self.jump_sustain_gravity)
        {
            return Err(ConfigError::SustainOutOfRange(self.jump_sustain_gravity));
        }

        check_non_negative("ground_probe_margin", self.ground_probe_margin)?;
        Ok(())
    }

    /// Builder: set the pitch bounds.
    pub fn with_look_bounds(mut self, min: f32, max: f32) -> Self {
        self.min_look_angle = min;
        self.max_look_angle = max;
        self
    }

    /// Builder: set per-axis look sensitivity.
    pub fn with_look_sensitivity(mut self, sensitivity: Vec2) -> Self {
        self.look_sensitivity = sensitivity;
        self
    }

    /// Builder: set walking speed and responsiveness together.
    pub fn with_walk(mut self, speed: f32, response: f32) -> Self {
        self.walk_speed = speed;
        self.walk_response = response;
        self
    }

    /// Builder: set takeoff speed, gravity, and sustain multiplier together.
    pub fn with_jump(mut self, takeoff_speed: f32, gravity: f32, sustain: f32) -> Self {
        self.jump_takeoff_speed = takeoff_speed;
        self.gravity = gravity;
        self.jump_sustain_gravity = sustain;
        self
    }

    /// Builder: keep the cursor free at startup.
    pub fn without_cursor_lock(mut self) -> Self {
        self.lock_cursor_on_start = false;
        self
    }
}

fn check_finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

fn check_non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    check_finite(name, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative { name, value });
    }
    Ok(())
}

fn check_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    check_finite(name, value)?;
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(CharacterConfig::default().validate(), Ok(()));
    }

    #[test]
    fn reversed_look_bounds_are_rejected() {
        let config = CharacterConfig::default().with_look_bounds(1.0, -1.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ReversedLookBounds { min: 1.0, max: -1.0 })
        );
    }

    #[rstest]
    #[case(f32::NAN)]
    #[case(f32::INFINITY)]
    #[case(f32::NEG_INFINITY)]
    fn non_finite_gravity_is_rejected(#[case] gravity: f32) {
        let config = CharacterConfig {
            gravity,
            ..CharacterConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { name: "gravity", .. })
        ));
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.5)]
    #[case(f32::NAN)]
    fn sustain_multiplier_outside_unit_range_is_rejected(#[case] sustain: f32) {
        let config = CharacterConfig {
            jump_sustain_gravity: sustain,
            ..CharacterConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SustainOutOfRange(_))
        ));
    }

    #[test]
    fn zero_stance_height_is_rejected() {
        let config = CharacterConfig {
            walk_height: 0.0,
            ..CharacterConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { name: "walk_height", .. })
        ));
    }

    #[test]
    fn negative_speed_is_rejected() {
        let config = CharacterConfig::default().with_walk(-1.0, 15.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { name: "walk_speed", .. })
        ));
    }

    #[test]
    fn builders_compose() {
        let config = CharacterConfig::default()
            .with_walk(8.0, 20.0)
            .with_jump(5.0, -9.81, 0.4)
            .without_cursor_lock();
        assert_eq!(config.walk_speed, 8.0);
        assert_eq!(config.walk_response, 20.0);
        assert_eq!(config.jump_takeoff_speed, 5.0);
        assert_eq!(config.gravity, -9.81);
        assert_eq!(config.jump_sustain_gravity, 0.4);
        assert!(!config.lock_cursor_on_start);
        assert_eq!(config.validate(), Ok(()));
    }
}
