use glam::Vec3;
use tracing::{debug, error};

use super::ground::{self, GroundProbe};
use super::input::InputSnapshot;
use super::{locomotion, look, mode, vertical};
use crate::model::{CharacterConfig, CharacterState, ConfigError, GroundState, MovementMode};

/// Applies per-tick displacements to a position. Implementations resolve
/// collisions; the controller itself never does.
pub trait MoveResolver {
    /// Resolves `position + delta` against the world and returns the final
    /// position.
    fn resolve(&mut self, position: Vec3, delta: Vec3) -> Vec3;
}

/// Resolver that applies the displacement unmodified.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughResolver;

impl MoveResolver for PassthroughResolver {
    fn resolve(&mut self, position: Vec3, delta: Vec3) -> Vec3 {
        position + delta
    }
}

/// Values produced by one tick for camera, stance, and rendering
/// collaborators.
#[derive(Debug, Clone, Copy)]
pub struct TickOutput {
    /// World heading, unbounded. Applied by a camera collaborator as the
    /// body's world rotation.
    pub yaw: f32,
    /// Clamped elevation. Applied by a camera collaborator as a local
    /// rotation on top of the yaw.
    pub pitch: f32,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Displacement submitted to the move resolver this tick.
    pub displacement: Vec3,
    pub mode: MovementMode,
    pub grounded: bool,
    /// Stance height of the freshly classified mode, for a stance/scale
    /// collaborator.
    pub stance_height: f32,
}

/// First-person locomotion controller stepping one character through a
/// fixed per-tick stage order: look, ground sensing, vertical integration,
/// horizontal steering, mode classification, position update.
///
/// The controller owns its [`CharacterState`] outright. Collaborators feed
/// it an [`InputSnapshot`] and receive a [`TickOutput`]; terrain and
/// collision stay behind the [`GroundProbe`] and [`MoveResolver`] seams.
pub struct CharacterController {
    config: CharacterConfig,
    state: CharacterState,
    /// Jump edge carried until a grounded tick consumes it in a takeoff.
    pending_jump: bool,
    enabled: bool,
}

impl CharacterController {
    /// Builds a controller after validating the configuration.
    pub fn try_new(config: CharacterConfig, position: Vec3) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: CharacterState::new(position),
            pending_jump: false,
            enabled: true,
        })
    }

    /// Builds a controller, falling back to a permanently disabled one if
    /// the configuration is invalid. The failure is logged once; a disabled
    /// controller ignores every tick instead of crashing its caller.
    pub fn new(config: CharacterConfig, position: Vec3) -> Self {
        Self::try_new(config, position).unwrap_or_else(|err| {
            error!(%err, "invalid configuration, controller disabled");
            Self {
                config,
                state: CharacterState::new(position),
                pending_jump: false,
                enabled: false,
            }
        })
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    pub fn config(&self) -> &CharacterConfig {
        &self.config
    }

    /// Swaps in a new configuration for subsequent ticks. An invalid one is
    /// rejected and the active configuration stays in place. A controller
    /// disabled at construction stays disabled.
    pub fn set_config(&mut self, config: CharacterConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Advances the simulation by one tick of `dt` seconds.
    ///
    /// Every stage sees the same `dt`. The mode classified at the end of
    /// the tick parameterizes the next tick's sensing and steering, so a
    /// crouch or slide press becomes effective one tick later. A disabled
    /// controller skips the whole tick and reports its unchanged state.
    pub fn tick(
        &mut self,
        snapshot: &InputSnapshot,
        probe: &dyn GroundProbe,
        resolver: &mut dyn MoveResolver,
        dt: f32,
    ) -> TickOutput {
        if !self.enabled {
            return self.output(Vec3::ZERO);
        }

        self.pending_jump |= snapshot.jump_pressed;

        look::apply_look(&mut self.state, snapshot.look_delta, &self.config, dt);

        let sample = ground::sense(probe, &self.state, &self.config);
        if sample.state != self.state.ground_state {
            debug!(from = ?self.state.ground_state, to = ?sample.state, "ground state change");
        }
        self.state.ground_state = sample.state;

        vertical::integrate(
            &mut self.state,
            &mut self.pending_jump,
            snapshot.jump_held,
            &self.config,
            dt,
        );

        locomotion::steer(&mut self.state, snapshot.move_axis, &sample, &self.config, dt);

        let next_mode = mode::classify(snapshot);
        if next_mode != self.state.movement_mode {
            debug!(from = ?self.state.movement_mode, to = ?next_mode, "movement mode change");
        }
        self.state.movement_mode = next_mode;

        let displacement = self.state.velocity * dt;
        self.state.position = resolver.resolve(self.state.position, displacement);

        self.output(displacement)
    }

    fn output(&self, displacement: Vec3) -> TickOutput {
        TickOutput {
            yaw: self.state.yaw,
            pitch: self.state.pitch,
            position: self.state.position,
            velocity: self.state.velocity,
            displacement,
            mode: self.state.movement_mode,
            grounded: self.state.ground_state == GroundState::Grounded,
            stance_height: self.state.movement_mode.stance_height(&self.config),
        }
    }
}
