use glam::Vec3;

use crate::model::{CharacterConfig, CharacterState, GroundState};

/// A downward ray hit reported by a terrain collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundHit {
    /// Distance from the ray origin to the surface.
    pub distance: f32,
    /// Surface normal at the hit point. Need not be unit length; the sensor
    /// normalizes defensively.
    pub normal: Vec3,
}

/// Downward raycast capability supplied by the embedding world.
pub trait GroundProbe {
    /// Casts from `origin` straight down and reports the first surface
    /// within `max_distance`, if any.
    fn cast_down(&self, origin: Vec3, max_distance: f32) -> Option<GroundHit>;
}

/// Result of one ground sensing pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundSample {
    pub state: GroundState,
    /// Unit surface normal when grounded, world up otherwise.
    pub normal: Vec3,
}

impl GroundSample {
    pub fn airborne() -> Self {
        Self {
            state: GroundState::InAir,
            normal: Vec3::Y,
        }
    }

    pub fn grounded(&self) -> bool {
        self.state == GroundState::Grounded
    }
}

/// Classifies ground contact with a single downward probe.
///
/// The probe reach is the active stance height plus the configured margin,
/// so a crouching character senses a correspondingly shorter range. One
/// missed frame flips the classification immediately; there is no
/// hysteresis.
pub fn sense(
    probe: &dyn GroundProbe,
    state: &CharacterState,
    config: &CharacterConfig,
) -> GroundSample {
    let reach = state.movement_mode.stance_height(config) + config.ground_probe_margin;
    match probe.cast_down(state.position, reach) {
        Some(hit) => {
            let normal = hit.normal.normalize_or_zero();
            GroundSample {
                state: GroundState::Grounded,
                normal: if normal == Vec3::ZERO { Vec3::Y } else { normal },
            }
        }
        None => GroundSample::airborne(),
    }
}
