use glam::{Quat, Vec3};

/// Ground contact classification from the most recent sensing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundState {
    Grounded,
    InAir,
}

/// Mutually exclusive locomotion mode, recomputed from held inputs each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementMode {
    Walking,
    Crouching,
    Sliding,
}

/// Pose and motion state of the character. Owned by the controller and
/// mutated exactly once per tick; collaborators only read it between ticks.
#[derive(Debug, Clone)]
pub struct CharacterState {
    pub position: Vec3,
    /// Heading around the world up axis, radians, unbounded.
    pub yaw: f32,
    /// Camera elevation, radians, positive looks up. Held inside the
    /// configured look bounds at all times.
    pub pitch: f32,
    /// Persistent across ticks. The y component carries gravity and jumps,
    /// x/z carry horizontal locomotion.
    pub velocity: Vec3,
    pub ground_state: GroundState,
    /// Last tick's ground state, kept for landing edge detection.
    pub previous_ground_state: GroundState,
    pub movement_mode: MovementMode,
    /// Set on jump takeoff, cleared on the next InAir -> Grounded edge.
    /// While set, the grounded rest clamp leaves vertical velocity alone.
    pub left_ground_because_of_jump: bool,
}

impl CharacterState {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            velocity: Vec3::ZERO,
            ground_state: GroundState::InAir,
            previous_ground_state: GroundState::InAir,
            movement_mode: MovementMode::Walking,
            left_ground_because_of_jump: false,
        }
    }

    /// Body rotation. Yaw only; pitch never tilts the body.
    pub fn body_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    /// Combined rotation for a camera collaborator: world yaw, then pitch as
    /// a local rotation around the right axis.
    pub fn look_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(-self.pitch)
    }

    /// Direction the camera looks along.
    pub fn look_direction(&self) -> Vec3 {
        self.look_rotation() * Vec3::Z
    }

    /// Horizontal facing direction.
    pub fn forward(&self) -> Vec3 {
        self.body_rotation() * Vec3::Z
    }

    pub fn right(&self) -> Vec3 {
        self.body_rotation() * Vec3::X
    }

    pub fn grounded(&self) -> bool {
        self.ground_state == GroundState::Grounded
    }
}
