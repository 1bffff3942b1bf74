//! Translation constrained to one axis of the target's frame.
//!
//! At the start of a drag the widget builds a plane that contains the
//! world-space axis and faces the camera as much as it can. Each pointer
//! ray is intersected with that plane and the hit is projected back onto
//! the axis line. The difference between that position and the one at the
//! start of the drag is the translation.

use std::fmt;

use void_math::consts::ZERO_TOLERANCE;
use void_math::{any_perpendicular, closest_point_on_line_t, Axis, Frame3, Interval1, Ray, Vec3};

use crate::camera::Camera;
use crate::config::VisibilityConfig;
use crate::error::{GizmoError, Result};
use crate::target::{CoordSpace, Transformable};
use crate::widget::{
    unit_scale, DeltaConstraintFn, RayHit, ScaleFn, TransformWidget, WidgetVisual,
};

/// Values captured when a drag starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptureSession {
    frame_local: Frame3,
    frame_world: Frame3,
    axis_world: Vec3,
    start_t: f32,
    raycast_plane: Frame3,
    current_delta: f32,
}

impl CaptureSession {
    /// Target frame in object space at drag start
    pub fn start_frame(&self) -> &Frame3 {
        &self.frame_local
    }

    /// Target frame in world space at drag start
    pub fn start_frame_world(&self) -> &Frame3 {
        &self.frame_world
    }

    /// World direction of the constrained axis
    pub fn axis_world(&self) -> Vec3 {
        self.axis_world
    }

    /// Position of the grab point along the world axis line
    pub fn start_t(&self) -> f32 {
        self.start_t
    }

    /// Drag plane; its Z axis is the plane normal
    pub fn raycast_plane(&self) -> &Frame3 {
        &self.raycast_plane
    }

    /// Distance applied by the latest update, after scale and constraint
    pub fn current_delta(&self) -> f32 {
        self.current_delta
    }
}

/// Whether a drag is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum CaptureState {
    #[default]
    Idle,
    Capturing(CaptureSession),
}

/// Normal of the plane containing `axis` that faces along `view_forward`
/// as much as possible.
///
/// Falls back to an arbitrary plane containing the axis when the view is
/// parallel to it.
pub fn drag_plane_normal(axis: Vec3, view_forward: Vec3) -> Vec3 {
    let mut make_up = view_forward.cross(axis).normalize_or_zero();
    if make_up == Vec3::ZERO {
        make_up = any_perpendicular(axis);
    }
    make_up.cross(axis).normalize_or_zero()
}

/// Widget translating its target along one local axis.
pub struct AxisTranslationWidget {
    axis: Axis,
    translation_scale: ScaleFn,
    delta_constraint: Option<DeltaConstraintFn>,
    visibility: Interval1,
    visual: Option<Box<dyn WidgetVisual>>,
    state: CaptureState,
}

impl AxisTranslationWidget {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            translation_scale: unit_scale(),
            delta_constraint: None,
            visibility: VisibilityConfig::default().cos_range(),
            visual: None,
            state: CaptureState::Idle,
        }
    }

    /// Use the given visibility dead zones (builder pattern)
    pub fn with_visibility(mut self, visibility: &VisibilityConfig) -> Self {
        self.visibility = visibility.cos_range();
        self
    }

    /// Attach the geometry drawn for this widget (builder pattern)
    pub fn with_visual(mut self, visual: Box<dyn WidgetVisual>) -> Self {
        self.visual = Some(visual);
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    /// Active drag values, `None` while idle
    pub fn session(&self) -> Option<&CaptureSession> {
        match &self.state {
            CaptureState::Capturing(session) => Some(session),
            CaptureState::Idle => None,
        }
    }

    pub fn has_visual(&self) -> bool {
        self.visual.is_some()
    }

    pub fn set_visual(&mut self, visual: Box<dyn WidgetVisual>) {
        self.visual = Some(visual);
    }

    pub fn set_visibility(&mut self, visibility: &VisibilityConfig) {
        self.visibility = visibility.cos_range();
    }

    /// Multiply drag distances by `scale()`.
    ///
    /// Returning less than 1 slows the drag down. Returning the inverse of
    /// the parent's scale keeps the grabbed point under the cursor for
    /// nested objects.
    pub fn set_translation_scale<F>(&mut self, scale: F)
    where
        F: Fn() -> f32 + Send + Sync + 'static,
    {
        self.translation_scale = Box::new(scale);
    }

    /// Pass scaled drag distances through `constraint` before applying
    /// them, e.g. for snapping or limits.
    pub fn set_delta_constraint<F>(&mut self, constraint: F)
    where
        F: Fn(&Frame3, Axis, f32) -> f32 + Send + Sync + 'static,
    {
        self.delta_constraint = Some(Box::new(constraint));
    }

    /// Install an already boxed constraint, or remove it with `None`
    pub fn set_boxed_constraint(&mut self, constraint: Option<DeltaConstraintFn>) {
        self.delta_constraint = constraint;
    }

    pub fn clear_delta_constraint(&mut self) {
        self.delta_constraint = None;
    }
}

impl fmt::Debug for AxisTranslationWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisTranslationWidget")
            .field("axis", &self.axis)
            .field("has_constraint", &self.delta_constraint.is_some())
            .field("visibility", &self.visibility)
            .field("has_visual", &self.visual.is_some())
            .field("state", &self.state)
            .finish()
    }
}

impl TransformWidget for AxisTranslationWidget {
    fn begin_capture(
        &mut self,
        target: &dyn Transformable,
        camera: &dyn Camera,
        _ray: &Ray,
        hit: &RayHit,
    ) -> Result<()> {
        if self.is_capturing() {
            log::warn!("Axis {} widget: capture begun while one is already active", self.axis);
            return Err(GizmoError::AlreadyCapturing(self.axis));
        }

        let frame_local = target.local_frame(CoordSpace::Object);
        let frame_world = target.local_frame(CoordSpace::World);
        let axis_world = frame_world.axis(self.axis);

        // Measure the grab point along the axis so updates can work in deltas
        let start_t = closest_point_on_line_t(frame_world.origin, axis_world, hit.position);

        let normal = drag_plane_normal(axis_world, camera.forward());
        let raycast_plane = Frame3::from_normal(hit.position, normal);

        log::debug!(
            "Axis {} widget: begin capture at t = {:.4}, plane normal {:?}",
            self.axis,
            start_t,
            normal
        );

        self.state = CaptureState::Capturing(CaptureSession {
            frame_local,
            frame_world,
            axis_world,
            start_t,
            raycast_plane,
            current_delta: 0.0,
        });

        Ok(())
    }

    fn update_capture(&mut self, target: &mut dyn Transformable, ray: &Ray) -> Result<()> {
        let session = match &mut self.state {
            CaptureState::Capturing(session) => session,
            CaptureState::Idle => {
                log::warn!("Axis {} widget: update without an active capture", self.axis);
                return Err(GizmoError::NotCapturing);
            }
        };

        let Some(plane_hit) = session.raycast_plane.ray_plane_intersection(ray, Axis::Z) else {
            log::trace!("Axis {} widget: pointer ray parallel to drag plane", self.axis);
            return Ok(());
        };

        let t = closest_point_on_line_t(session.frame_world.origin, session.axis_world, plane_hit);

        let mut delta = t - session.start_t;
        delta *= (self.translation_scale)();
        if let Some(constraint) = &self.delta_constraint {
            delta = constraint(&session.frame_local, self.axis, delta);
        }
        session.current_delta = delta;

        let new_frame = session.frame_local.translated_along(self.axis, delta);
        target.set_local_frame(new_frame, CoordSpace::Object);

        log::trace!("Axis {} widget: delta {:.4}", self.axis, delta);
        Ok(())
    }

    fn end_capture(&mut self, _target: &dyn Transformable) -> Result<()> {
        match std::mem::take(&mut self.state) {
            CaptureState::Capturing(session) => {
                log::debug!(
                    "Axis {} widget: end capture, final delta {:.4}",
                    self.axis,
                    session.current_delta
                );
                Ok(())
            }
            CaptureState::Idle => {
                log::warn!("Axis {} widget: end without an active capture", self.axis);
                Err(GizmoError::NotCapturing)
            }
        }
    }

    fn disconnect(&mut self) {
        if self.is_capturing() {
            log::warn!("Axis {} widget: disconnected during a capture", self.axis);
            self.state = CaptureState::Idle;
        }
        if let Some(mut visual) = self.visual.take() {
            visual.destroy();
        }
    }

    fn check_visibility(&self, frame_w: &Frame3, eye: Vec3) -> bool {
        let axis = frame_w.axis(self.axis);
        let eye_dir = (eye - frame_w.origin).normalize_or_zero();
        self.visibility.contains_within(axis.dot(eye_dir), ZERO_TOLERANCE)
    }

    fn is_capturing(&self) -> bool {
        matches!(self.state, CaptureState::Capturing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::LookAtCamera;
    use crate::target::SceneObject;

    fn camera() -> LookAtCamera {
        LookAtCamera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO)
    }

    #[test]
    fn test_drag_plane_contains_axis() {
        let normal = drag_plane_normal(Vec3::X, Vec3::NEG_Z);
        assert!(normal.dot(Vec3::X).abs() < 1e-6);
        // Faces the camera
        assert!(normal.dot(Vec3::NEG_Z).abs() > 0.999);
    }

    #[test]
    fn test_drag_plane_oblique_view() {
        let forward = Vec3::new(1.0, -1.0, -1.0).normalize();
        let normal = drag_plane_normal(Vec3::Y, forward);
        assert!(normal.dot(Vec3::Y).abs() < 1e-6);
        assert!((normal.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_drag_plane_view_along_axis() {
        let normal = drag_plane_normal(Vec3::Z, Vec3::NEG_Z);
        assert!((normal.length() - 1.0).abs() < 1e-5);
        assert!(normal.dot(Vec3::Z).abs() < 1e-6);
    }

    #[test]
    fn test_begin_records_session() {
        let object = SceneObject::new(Frame3::from_origin(Vec3::new(1.0, 0.0, 0.0)));
        let mut widget = AxisTranslationWidget::new(Axis::X);
        let ray = Ray::new(Vec3::new(3.0, 0.0, 10.0), Vec3::NEG_Z);
        let hit = RayHit::along(&ray, 10.0);

        assert!(widget.session().is_none());
        widget.begin_capture(&object, &camera(), &ray, &hit).unwrap();

        let session = widget.session().unwrap();
        assert!((session.start_t() - 2.0).abs() < 1e-5);
        assert!(session.axis_world().abs_diff_eq(Vec3::X, 1e-6));
        assert!(session.raycast_plane().origin.abs_diff_eq(hit.position, 1e-6));
        assert_eq!(session.current_delta(), 0.0);
    }

    #[test]
    fn test_parallel_ray_leaves_target() {
        let mut object = SceneObject::default();
        let mut widget = AxisTranslationWidget::new(Axis::X);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        widget
            .begin_capture(&object, &camera(), &ray, &RayHit::along(&ray, 10.0))
            .unwrap();

        // Plane normal is Z; this ray runs inside the plane
        let sideways = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        widget.update_capture(&mut object, &sideways).unwrap();
        assert_eq!(object.frame, Frame3::IDENTITY);
    }

    #[test]
    fn test_debug_output_names_axis() {
        let widget = AxisTranslationWidget::new(Axis::Y);
        assert!(format!("{:?}", widget).contains("axis: Y"));
    }
}
