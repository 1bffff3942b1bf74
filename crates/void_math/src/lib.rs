//! # void_math - Frames, Rays and Line Queries
//!
//! Geometry used by the editor's manipulation widgets: oriented frames,
//! rays, closed intervals and the closest-point / ray-plane queries the
//! widgets build their drag math on. Vector and quaternion storage comes
//! from `glam`.

pub mod axis;
pub mod frame;
pub mod interval;
pub mod intersect;
pub mod ray;

pub use axis::Axis;
pub use frame::Frame3;
pub use glam::{Quat, Vec3};
pub use interval::Interval1;
pub use intersect::*;
pub use ray::Ray;

/// Common math constants
pub mod consts {
    pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;
    /// Below this a length or denominator is treated as zero
    pub const ZERO_TOLERANCE: f32 = 1e-6;
}

/// Convert degrees to radians
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * consts::DEG_TO_RAD
}

/// Unit vector perpendicular to `v`.
///
/// Returns `Vec3::X` for a zero-length input.
pub fn any_perpendicular(v: Vec3) -> Vec3 {
    let v = v.normalize_or_zero();
    if v.length_squared() < consts::ZERO_TOLERANCE {
        return Vec3::X;
    }

    // Pick a helper that is not parallel to v
    let helper = if v.abs().dot(Vec3::Y) < 0.9 { Vec3::Y } else { Vec3::X };
    v.cross(helper).normalize()
}

pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::frame::Frame3;
    pub use crate::interval::Interval1;
    pub use crate::intersect::{
        closest_point_on_line, closest_point_on_line_t, ray_plane, ray_plane_point,
        ray_segment_closest,
    };
    pub use crate::ray::Ray;
    pub use crate::{any_perpendicular, radians};
    pub use glam::{Quat, Vec3};
}
