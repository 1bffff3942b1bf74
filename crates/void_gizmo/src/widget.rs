//! Widget trait and common types.

use void_math::{Axis, Frame3, Ray, Vec3};

use crate::camera::Camera;
use crate::error::Result;
use crate::target::Transformable;

/// Where the pointer ray hit a widget handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// World-space hit position
    pub position: Vec3,
    /// Distance along the pointer ray
    pub distance: f32,
}

impl RayHit {
    pub fn new(position: Vec3, distance: f32) -> Self {
        Self { position, distance }
    }

    /// Hit at distance `t` along `ray`
    pub fn along(ray: &Ray, t: f32) -> Self {
        Self::new(ray.at(t), t)
    }
}

/// Scene geometry drawn for a widget, owned by the widget.
pub trait WidgetVisual: Send + Sync {
    /// Remove the geometry from the scene.
    fn destroy(&mut self);
}

/// Multiplier applied to every drag distance.
pub type ScaleFn = Box<dyn Fn() -> f32 + Send + Sync>;

/// Adjusts a scaled drag distance before it is applied.
///
/// Receives the target's frame at the start of the drag, the constrained
/// axis and the distance.
pub type DeltaConstraintFn = Box<dyn Fn(&Frame3, Axis, f32) -> f32 + Send + Sync>;

/// Scale provider that leaves drags at 1:1, so the grabbed point stays
/// under the cursor.
pub fn unit_scale() -> ScaleFn {
    Box::new(|| 1.0)
}

/// Apply snapping to a value.
pub fn snap_value(value: f32, snap: f32) -> f32 {
    if snap > 0.0 {
        (value / snap).round() * snap
    } else {
        value
    }
}

/// Constraint rounding drag distances to multiples of `step`.
pub fn snap_constraint(step: f32) -> DeltaConstraintFn {
    Box::new(move |_: &Frame3, _: Axis, delta: f32| snap_value(delta, step))
}

/// Constraint keeping drag distances within `[min, max]`.
pub fn clamp_constraint(min: f32, max: f32) -> DeltaConstraintFn {
    Box::new(move |_: &Frame3, _: Axis, delta: f32| delta.clamp(min, max))
}

/// Trait for click-drag manipulation widgets.
///
/// A widget is idle until `begin_capture`, then receives any number of
/// `update_capture` calls and finally `end_capture`. Calls out of that
/// order return an error and change nothing.
pub trait TransformWidget: Send + Sync {
    /// Start a drag. `hit` is where the pointer ray hit the widget.
    fn begin_capture(
        &mut self,
        target: &dyn Transformable,
        camera: &dyn Camera,
        ray: &Ray,
        hit: &RayHit,
    ) -> Result<()>;

    /// Move the target for the current pointer ray.
    fn update_capture(&mut self, target: &mut dyn Transformable, ray: &Ray) -> Result<()>;

    /// Finish the drag.
    fn end_capture(&mut self, target: &dyn Transformable) -> Result<()>;

    /// Release scene resources owned by the widget.
    fn disconnect(&mut self);

    /// Whether the widget should be shown and pickable for a target with
    /// world frame `frame_w`, seen from `eye`.
    fn check_visibility(&self, frame_w: &Frame3, eye: Vec3) -> bool;

    /// Whether a capture is active.
    fn is_capturing(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_value() {
        assert_eq!(snap_value(0.74, 0.5), 0.5);
        assert_eq!(snap_value(0.76, 0.5), 1.0);
        assert_eq!(snap_value(-1.3, 0.5), -1.5);
        assert_eq!(snap_value(0.3, 0.0), 0.3);
    }

    #[test]
    fn test_constraints() {
        let snap = snap_constraint(0.25);
        assert_eq!(snap(&Frame3::IDENTITY, Axis::X, 0.3), 0.25);

        let clamp = clamp_constraint(-1.0, 2.0);
        assert_eq!(clamp(&Frame3::IDENTITY, Axis::Y, 3.0), 2.0);
        assert_eq!(clamp(&Frame3::IDENTITY, Axis::Y, -4.0), -1.0);
        assert_eq!(clamp(&Frame3::IDENTITY, Axis::Y, 0.5), 0.5);
    }

    #[test]
    fn test_ray_hit_along() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let hit = RayHit::along(&ray, 2.0);
        assert_eq!(hit.position, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(hit.distance, 2.0);
    }
}
