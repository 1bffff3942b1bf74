//! Translate gizmo with one arrow handle per axis.
//!
//! Owns the three axis widgets, picks the handle under the pointer and
//! routes a drag to exactly one of them.

use void_math::{ray_segment_closest, Axis, Frame3, Ray, SegmentApproach, Vec3};

use crate::axis_translate::AxisTranslationWidget;
use crate::camera::Camera;
use crate::config::{GizmoConfig, SnapSettings};
use crate::error::{GizmoError, Result};
use crate::target::{CoordSpace, Transformable};
use crate::widget::{snap_constraint, RayHit, TransformWidget, WidgetVisual};

/// State for the translate gizmo.
#[derive(Debug)]
pub struct TranslateGizmo {
    config: GizmoConfig,
    handles: [AxisTranslationWidget; 3],
    /// Handle under the pointer after the last hit test
    hovered: Option<Axis>,
    /// Handle receiving the current drag
    active: Option<Axis>,
    /// Gizmo scale (based on camera distance)
    gizmo_scale: f32,
}

impl Default for TranslateGizmo {
    fn default() -> Self {
        Self::new(GizmoConfig::default())
    }
}

impl TranslateGizmo {
    /// Create a gizmo. The configuration is expected to be validated.
    pub fn new(config: GizmoConfig) -> Self {
        let handles = Axis::ALL
            .map(|axis| AxisTranslationWidget::new(axis).with_visibility(&config.visibility));

        let mut gizmo = Self {
            config,
            handles,
            hovered: None,
            active: None,
            gizmo_scale: 1.0,
        };
        gizmo.apply_snap();
        gizmo
    }

    pub fn config(&self) -> &GizmoConfig {
        &self.config
    }

    pub fn handle(&self, axis: Axis) -> &AxisTranslationWidget {
        &self.handles[axis.index()]
    }

    pub fn handle_mut(&mut self, axis: Axis) -> &mut AxisTranslationWidget {
        &mut self.handles[axis.index()]
    }

    pub fn hovered(&self) -> Option<Axis> {
        self.hovered
    }

    pub fn active(&self) -> Option<Axis> {
        self.active
    }

    pub fn gizmo_scale(&self) -> f32 {
        self.gizmo_scale
    }

    /// Check if currently interacting with a handle.
    pub fn is_interacting(&self) -> bool {
        self.active.is_some()
    }

    /// Turn snapping on with the given increment, or off with `None`.
    ///
    /// A non-positive increment is rejected and leaves snapping unchanged.
    pub fn set_snap(&mut self, step: Option<f32>) -> Result<()> {
        match step {
            Some(step) => self.config.snap = SnapSettings::with_step(step)?,
            None => self.config.snap.enabled = false,
        }
        self.apply_snap();
        Ok(())
    }

    fn apply_snap(&mut self) {
        let step = self.config.snap.step();
        for handle in &mut self.handles {
            handle.set_boxed_constraint(step.map(snap_constraint));
        }
    }

    /// Use `scale` as the translation scale of every handle.
    pub fn set_translation_scale<F>(&mut self, scale: F)
    where
        F: Fn() -> f32 + Clone + Send + Sync + 'static,
    {
        for handle in &mut self.handles {
            handle.set_translation_scale(scale.clone());
        }
    }

    pub fn set_visual(&mut self, axis: Axis, visual: Box<dyn WidgetVisual>) {
        self.handle_mut(axis).set_visual(visual);
    }

    /// Update gizmo scale based on camera distance.
    pub fn update_scale(&mut self, camera_pos: Vec3, target_pos: Vec3) {
        let distance = (camera_pos - target_pos).length();
        self.gizmo_scale = self.config.screen_scale.scale_for_distance(distance);
    }

    /// Handles drawn for a target at `frame_w` seen from `eye`
    pub fn visible_axes(&self, frame_w: &Frame3, eye: Vec3) -> Vec<Axis> {
        Axis::ALL
            .into_iter()
            .filter(|axis| self.handle(*axis).check_visibility(frame_w, eye))
            .collect()
    }

    /// Hit test the visible handles and update the hovered handle.
    ///
    /// Returns the nearest handle along the ray and the hit distance.
    pub fn hit_test(&mut self, frame_w: &Frame3, ray: &Ray) -> Option<(Axis, f32)> {
        let radius = self.config.handle.radius_ratio * self.gizmo_scale;

        let mut closest: Option<(Axis, f32)> = None;

        for axis in self.visible_axes(frame_w, ray.origin) {
            let approach = self.handle_approach(frame_w, axis, ray);

            if approach.distance < radius
                && closest.map_or(true, |(_, best)| approach.ray_t < best)
            {
                closest = Some((axis, approach.ray_t));
            }
        }

        self.hovered = closest.map(|(axis, _)| axis);
        closest
    }

    /// End of the arrow handle for `axis`
    fn handle_tip(&self, frame_w: &Frame3, axis: Axis) -> Vec3 {
        frame_w.origin + frame_w.axis(axis) * self.config.handle.length_ratio * self.gizmo_scale
    }

    fn handle_approach(&self, frame_w: &Frame3, axis: Axis, ray: &Ray) -> SegmentApproach {
        ray_segment_closest(ray, frame_w.origin, self.handle_tip(frame_w, axis))
    }

    /// Begin dragging the hovered handle.
    ///
    /// Returns `Ok(false)` when nothing is hovered.
    pub fn begin_interaction(
        &mut self,
        target: &dyn Transformable,
        camera: &dyn Camera,
        ray: &Ray,
    ) -> Result<bool> {
        if let Some(active) = self.active {
            return Err(GizmoError::AlreadyCapturing(active));
        }
        let Some(axis) = self.hovered else {
            return Ok(false);
        };

        // Grab point is where the ray passes closest to the handle
        let frame_w = target.local_frame(CoordSpace::World);
        let approach = self.handle_approach(&frame_w, axis, ray);
        let hit = RayHit::along(ray, approach.ray_t);

        self.handle_mut(axis).begin_capture(target, camera, ray, &hit)?;
        self.active = Some(axis);
        Ok(true)
    }

    /// Update the current drag. Returns the applied distance.
    pub fn update_interaction(&mut self, target: &mut dyn Transformable, ray: &Ray) -> Result<f32> {
        let axis = self.active.ok_or(GizmoError::NotCapturing)?;
        let handle = self.handle_mut(axis);
        handle.update_capture(target, ray)?;
        Ok(handle.session().map_or(0.0, |session| session.current_delta()))
    }

    /// End the current drag. Returns the axis that was dragged.
    pub fn end_interaction(&mut self, target: &dyn Transformable) -> Result<Axis> {
        let axis = self.active.take().ok_or(GizmoError::NotCapturing)?;
        self.handle_mut(axis).end_capture(target)?;
        Ok(axis)
    }

    /// Tear down every handle.
    pub fn disconnect(&mut self) {
        self.active = None;
        self.hovered = None;
        for handle in &mut self.handles {
            handle.disconnect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_scale() {
        let mut gizmo = TranslateGizmo::default();
        gizmo.update_scale(Vec3::new(0.0, 0.0, 20.0), Vec3::ZERO);
        assert!((gizmo.gizmo_scale() - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_snap_toggle_reaches_handles() {
        let mut gizmo = TranslateGizmo::default();
        assert!(!format!("{:?}", gizmo.handle(Axis::X)).contains("has_constraint: true"));

        gizmo.set_snap(Some(0.25)).unwrap();
        assert_eq!(gizmo.config().snap.step(), Some(0.25));
        assert!(format!("{:?}", gizmo.handle(Axis::X)).contains("has_constraint: true"));

        gizmo.set_snap(None).unwrap();
        assert_eq!(gizmo.config().snap.step(), None);
        assert!(format!("{:?}", gizmo.handle(Axis::Z)).contains("has_constraint: false"));
    }

    #[test]
    fn test_set_snap_rejects_bad_step() {
        let mut gizmo = TranslateGizmo::default();
        gizmo.set_snap(Some(0.25)).unwrap();

        for step in [-1.0, 0.0, f32::NAN] {
            let result = gizmo.set_snap(Some(step));
            assert!(matches!(result, Err(GizmoError::InvalidConfig(_))));
        }
        assert_eq!(gizmo.config().snap.step(), Some(0.25));
        assert!(format!("{:?}", gizmo.handle(Axis::X)).contains("has_constraint: true"));
    }

    #[test]
    fn test_handle_tip_follows_scale() {
        let mut gizmo = TranslateGizmo::default();
        gizmo.update_scale(Vec3::new(0.0, 0.0, 20.0), Vec3::ZERO);

        let frame = Frame3::from_origin(Vec3::new(1.0, 0.0, 0.0));
        let tip = gizmo.handle_tip(&frame, Axis::Y);
        assert!(tip.abs_diff_eq(Vec3::new(1.0, 3.0, 0.0), 1e-5));
    }

    #[test]
    fn test_unvalidated_scale_range_does_not_panic() {
        let mut config = GizmoConfig::default();
        config.screen_scale.min = 5.0;
        config.screen_scale.max = 1.0;
        let mut gizmo = TranslateGizmo::new(config);

        gizmo.update_scale(Vec3::new(0.0, 0.0, 20.0), Vec3::ZERO);
        assert_eq!(gizmo.gizmo_scale(), 5.0);
    }

    #[test]
    fn test_hit_test_picks_axis() {
        let mut gizmo = TranslateGizmo::default();
        let eye = Vec3::new(2.0, 3.0, 10.0);
        let ray = Ray::toward(eye, Vec3::new(0.5, 0.0, 0.0));

        let (axis, _) = gizmo.hit_test(&Frame3::IDENTITY, &ray).unwrap();
        assert_eq!(axis, Axis::X);
        assert_eq!(gizmo.hovered(), Some(Axis::X));
    }

    #[test]
    fn test_hit_test_miss_clears_hover() {
        let mut gizmo = TranslateGizmo::default();
        let eye = Vec3::new(2.0, 3.0, 10.0);
        gizmo.hit_test(&Frame3::IDENTITY, &Ray::toward(eye, Vec3::new(0.5, 0.0, 0.0)));

        let miss = Ray::toward(eye, Vec3::new(5.0, 5.0, 0.0));
        assert!(gizmo.hit_test(&Frame3::IDENTITY, &miss).is_none());
        assert_eq!(gizmo.hovered(), None);
    }
}
