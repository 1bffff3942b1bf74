//! Oriented coordinate frames
//!
//! A frame is an origin plus an orientation. Widgets snapshot frames at
//! the start of a drag and write modified copies back to their targets.

use crate::axis::Axis;
use crate::intersect::ray_plane_point;
use crate::ray::Ray;
use glam::{Quat, Vec3};

/// Origin and orientation in 3D space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame3 {
    pub origin: Vec3,
    pub rotation: Quat,
}

impl Frame3 {
    /// World-aligned frame at the origin
    pub const IDENTITY: Self = Self {
        origin: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Create a frame, normalizing the rotation
    #[inline]
    pub fn new(origin: Vec3, rotation: Quat) -> Self {
        Self {
            origin,
            rotation: rotation.normalize(),
        }
    }

    /// Axis-aligned frame at `origin`
    #[inline]
    pub fn from_origin(origin: Vec3) -> Self {
        Self {
            origin,
            rotation: Quat::IDENTITY,
        }
    }

    /// Frame at `origin` whose Z axis is `normal`.
    ///
    /// Treat it as a plane: Z is the plane normal, X and Y span the plane.
    pub fn from_normal(origin: Vec3, normal: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        let rotation = if normal == Vec3::ZERO {
            Quat::IDENTITY
        } else {
            Quat::from_rotation_arc(Vec3::Z, normal)
        };
        Self { origin, rotation }
    }

    /// World direction of one of the frame axes
    #[inline]
    pub fn axis(&self, axis: Axis) -> Vec3 {
        self.rotation * axis.unit()
    }

    #[inline]
    pub fn x(&self) -> Vec3 {
        self.axis(Axis::X)
    }

    #[inline]
    pub fn y(&self) -> Vec3 {
        self.axis(Axis::Y)
    }

    #[inline]
    pub fn z(&self) -> Vec3 {
        self.axis(Axis::Z)
    }

    /// Copy of the frame with its origin moved by `offset`
    #[inline]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            origin: self.origin + offset,
            rotation: self.rotation,
        }
    }

    /// Copy of the frame moved `distance` along one of its own axes
    #[inline]
    pub fn translated_along(&self, axis: Axis, distance: f32) -> Self {
        self.translated(self.axis(axis) * distance)
    }

    /// Set origin (builder pattern)
    #[inline]
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    /// Set rotation (builder pattern)
    #[inline]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation.normalize();
        self
    }

    /// Map a point given in this frame (scaled uniformly by `scale`) to
    /// the space the frame lives in
    #[inline]
    pub fn point_to_parent(&self, point: Vec3, scale: f32) -> Vec3 {
        self.origin + self.rotation * (point * scale)
    }

    /// Inverse of [`Frame3::point_to_parent`]
    #[inline]
    pub fn point_from_parent(&self, point: Vec3, scale: f32) -> Vec3 {
        (self.rotation.inverse() * (point - self.origin)) / scale
    }

    /// Express `child`, given relative to this frame, in the parent space
    pub fn frame_to_parent(&self, child: &Frame3, scale: f32) -> Frame3 {
        Frame3 {
            origin: self.point_to_parent(child.origin, scale),
            rotation: (self.rotation * child.rotation).normalize(),
        }
    }

    /// Express a parent-space frame relative to this frame
    pub fn frame_from_parent(&self, frame: &Frame3, scale: f32) -> Frame3 {
        Frame3 {
            origin: self.point_from_parent(frame.origin, scale),
            rotation: (self.rotation.inverse() * frame.rotation).normalize(),
        }
    }

    /// Intersect a ray with the plane through the origin whose normal is
    /// the given frame axis. The full line through the ray is used.
    #[inline]
    pub fn ray_plane_intersection(&self, ray: &Ray, normal_axis: Axis) -> Option<Vec3> {
        ray_plane_point(ray, self.origin, self.axis(normal_axis))
    }

    /// Approximate equality; `q` and `-q` are the same orientation
    pub fn abs_diff_eq(&self, other: &Frame3, max_abs_diff: f32) -> bool {
        self.origin.abs_diff_eq(other.origin, max_abs_diff)
            && (self.rotation.abs_diff_eq(other.rotation, max_abs_diff)
                || self.rotation.abs_diff_eq(-other.rotation, max_abs_diff))
    }
}

impl Default for Frame3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_from_normal_sets_z() {
        let n = Vec3::new(1.0, 1.0, 0.0).normalize();
        let frame = Frame3::from_normal(Vec3::ONE, n);
        assert!(frame.z().abs_diff_eq(n, 1e-5));
        assert_abs_diff_eq!(frame.x().dot(n), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_from_normal_opposite_z() {
        let frame = Frame3::from_normal(Vec3::ZERO, Vec3::NEG_Z);
        assert!(frame.z().abs_diff_eq(Vec3::NEG_Z, 1e-5));
    }

    #[test]
    fn test_rotated_axes() {
        let frame = Frame3::new(Vec3::ZERO, Quat::from_rotation_z(core::f32::consts::FRAC_PI_2));
        assert!(frame.x().abs_diff_eq(Vec3::Y, 1e-5));
        assert!(frame.y().abs_diff_eq(Vec3::NEG_X, 1e-5));
        assert!(frame.z().abs_diff_eq(Vec3::Z, 1e-5));
    }

    #[test]
    fn test_translated_along_local_axis() {
        let frame = Frame3::new(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::from_rotation_y(core::f32::consts::FRAC_PI_2),
        );
        let moved = frame.translated_along(Axis::X, 2.0);
        // +X rotated a quarter turn about Y points along -Z
        assert!(moved.origin.abs_diff_eq(Vec3::new(1.0, 2.0, 1.0), 1e-5));
        assert_eq!(moved.rotation, frame.rotation);
    }

    #[test]
    fn test_parent_roundtrip() {
        let parent = Frame3::new(Vec3::new(0.0, 1.0, 0.0), Quat::from_rotation_x(0.7));
        let child = Frame3::new(Vec3::new(2.0, 0.0, -1.0), Quat::from_rotation_y(0.3));
        let world = parent.frame_to_parent(&child, 2.0);
        let back = parent.frame_from_parent(&world, 2.0);
        assert!(back.abs_diff_eq(&child, 1e-5));
    }

    #[test]
    fn test_ray_plane_intersection_uses_axis_normal() {
        let plane = Frame3::from_origin(Vec3::new(0.0, 0.0, 4.0));
        let ray = Ray::new(Vec3::new(1.0, 1.0, 0.0), Vec3::Z);
        let hit = plane.ray_plane_intersection(&ray, Axis::Z).unwrap();
        assert!(hit.abs_diff_eq(Vec3::new(1.0, 1.0, 4.0), 1e-5));
        assert!(plane.ray_plane_intersection(&ray, Axis::X).is_none());
    }
}
