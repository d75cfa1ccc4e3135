use glam::Vec3;

use crate::controller::ground::{GroundHit, GroundProbe};

/// Infinite horizontal plane at a fixed height.
pub struct FlatGround {
    pub height: f32,
}

impl FlatGround {
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl GroundProbe for FlatGround {
    fn cast_down(&self, origin: Vec3, max_distance: f32) -> Option<GroundHit> {
        let distance = origin.y - self.height;
        if distance < 0.0 || distance > max_distance {
            return None;
        }
        Some(GroundHit {
            distance,
            normal: Vec3::Y,
        })
    }
}

/// Terrain described by a height function over the XZ plane. Surface normals
/// come from central differences of the height function.
pub struct Heightfield<F> {
    height_fn: F,
    normal_step: f32,
}

impl<F: Fn(f32, f32) -> f32> Heightfield<F> {
    pub fn new(height_fn: F) -> Self {
        Self {
            height_fn,
            normal_step: 0.05,
        }
    }

    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        (self.height_fn)(x, z)
    }

    fn normal_at(&self, x: f32, z: f32) -> Vec3 {
        let step = self.normal_step;
        let slope_x = (self.height_at(x + step, z) - self.height_at(x - step, z)) / (2.0 * step);
        let slope_z = (self.height_at(x, z + step) - self.height_at(x, z - step)) / (2.0 * step);
        Vec3::new(-slope_x, 1.0, -slope_z).normalize_or_zero()
    }
}

impl<F: Fn(f32, f32) -> f32> GroundProbe for Heightfield<F> {
    fn cast_down(&self, origin: Vec3, max_distance: f32) -> Option<GroundHit> {
        let distance = origin.y - self.height_at(origin.x, origin.z);
        if distance < 0.0 || distance > max_distance {
            return None;
        }
        Some(GroundHit {
            distance,
            normal: self.normal_at(origin.x, origin.z),
        })
    }
}
