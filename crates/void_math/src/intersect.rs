//! Line and plane queries for drag gestures and handle picking
//!
//! - Closest point on an infinite line (parametric form)
//! - Ray / plane intersection over the full line through the ray
//! - Closest approach between a ray and a segment

use crate::consts::ZERO_TOLERANCE;
use crate::ray::Ray;
use glam::Vec3;

/// Parametric position of the projection of `point` onto the infinite
/// line `line_origin + t * line_direction`.
///
/// `t` is measured in units of `line_direction`, so a unit direction gives
/// a signed distance from `line_origin`. A zero-length direction yields 0.
#[inline]
pub fn closest_point_on_line_t(line_origin: Vec3, line_direction: Vec3, point: Vec3) -> f32 {
    let len_sq = line_direction.length_squared();
    if len_sq < ZERO_TOLERANCE {
        return 0.0;
    }
    (point - line_origin).dot(line_direction) / len_sq
}

/// Closest point to `point` on the infinite line through `line_origin`
#[inline]
pub fn closest_point_on_line(line_origin: Vec3, line_direction: Vec3, point: Vec3) -> Vec3 {
    line_origin + line_direction * closest_point_on_line_t(line_origin, line_direction, point)
}

/// Ray-Plane intersection
///
/// Returns the signed distance along the ray. The whole line through the
/// ray is tested, so `t` may be negative when the plane lies behind the
/// origin. `None` only when the ray is parallel to the plane.
pub fn ray_plane(ray: &Ray, plane_point: Vec3, plane_normal: Vec3) -> Option<f32> {
    let denom = plane_normal.dot(ray.direction);

    if denom.abs() < ZERO_TOLERANCE {
        return None;
    }

    Some((plane_point - ray.origin).dot(plane_normal) / denom)
}

/// Ray-Plane intersection point, see [`ray_plane`]
#[inline]
pub fn ray_plane_point(ray: &Ray, plane_point: Vec3, plane_normal: Vec3) -> Option<Vec3> {
    ray_plane(ray, plane_point, plane_normal).map(|t| ray.at(t))
}

/// Closest approach between a ray and a segment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentApproach {
    /// Distance along the ray (never negative)
    pub ray_t: f32,
    /// Position along the segment, 0 at `a` and 1 at `b`
    pub segment_s: f32,
    /// Distance between the two closest points
    pub distance: f32,
}

/// Closest points between a ray and the segment `[a, b]`.
pub fn ray_segment_closest(ray: &Ray, a: Vec3, b: Vec3) -> SegmentApproach {
    let d1 = ray.direction;
    let d2 = b - a;
    let r = ray.origin - a;

    let dd1 = d1.dot(d1).max(ZERO_TOLERANCE);
    let e = d2.dot(d2);
    let c = d1.dot(r);

    let (t, s) = if e < ZERO_TOLERANCE {
        // Segment degenerates to a point
        ((-c / dd1).max(0.0), 0.0)
    } else {
        let f = d2.dot(r);
        let bb = d1.dot(d2);
        let denom = dd1 * e - bb * bb;

        let t = if denom > ZERO_TOLERANCE {
            ((bb * f - c * e) / denom).max(0.0)
        } else {
            0.0
        };

        let s = (bb * t + f) / e;
        if s < 0.0 {
            ((-c / dd1).max(0.0), 0.0)
        } else if s > 1.0 {
            (((bb - c) / dd1).max(0.0), 1.0)
        } else {
            (t, s)
        }
    };

    let on_ray = ray.at(t);
    let on_segment = a + d2 * s;

    SegmentApproach {
        ray_t: t,
        segment_s: s,
        distance: (on_ray - on_segment).length(),
    }
}
