use glam::Vec3;

/// Moves `current` toward `target` by at most `max_step`, landing exactly on
/// `target` once it is within reach. Never overshoots.
pub fn move_towards(current: Vec3, target: Vec3, max_step: f32) -> Vec3 {
    let to_target = target - current;
    let distance = to_target.length();
    if distance <= max_step || distance <= f32::EPSILON {
        target
    } else {
        current + to_target / distance * max_step
    }
}

/// Strips the vertical component of a vector.
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}
