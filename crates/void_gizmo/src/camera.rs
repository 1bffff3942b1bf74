//! Camera access for widgets.

use void_math::{Ray, Vec3};

/// View information widgets need while building drag planes.
pub trait Camera {
    /// Eye position in world space
    fn position(&self) -> Vec3;

    /// Unit view direction in world space
    fn forward(&self) -> Vec3;

    /// Pointer ray from the eye through a world point
    fn ray_through(&self, point: Vec3) -> Ray {
        Ray::toward(self.position(), point)
    }
}

/// Camera defined by an eye position and a look-at target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LookAtCamera {
    pub position: Vec3,
    pub target: Vec3,
}

impl LookAtCamera {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Distance from the eye to the look-at target
    pub fn distance(&self) -> f32 {
        (self.target - self.position).length()
    }
}

impl Camera for LookAtCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_is_normalized() {
        let camera = LookAtCamera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        assert!(camera.forward().abs_diff_eq(Vec3::NEG_Z, 1e-6));
        assert!((camera.distance() - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_ray_through_point() {
        let camera = LookAtCamera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let ray = camera.ray_through(Vec3::new(3.0, 0.0, 6.0));
        assert!(ray.distance_to_point(Vec3::new(3.0, 0.0, 6.0)) < 1e-5);
    }
}
