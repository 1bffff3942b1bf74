//! Void Gizmo - Manipulation Widgets
//!
//! Click-drag widgets that move scene objects from the editor viewport.
//!
//! # Features
//!
//! - Translation constrained to one local axis of the target
//! - Pluggable drag scale and delta constraints (snapping, limits)
//! - View-dependent handle visibility
//! - A three-handle translate gizmo with picking and drag routing
//! - TOML configuration
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                TranslateGizmo                │
//! │   hit test ─► hovered axis ─► active axis    │
//! │  ┌────────────┐┌────────────┐┌────────────┐  │
//! │  │ AxisWidget ││ AxisWidget ││ AxisWidget │  │
//! │  │     X      ││     Y      ││     Z      │  │
//! │  └────────────┘└────────────┘└────────────┘  │
//! └──────────────────────────────────────────────┘
//!          │ reads / writes frames
//!          ▼
//!    ┌──────────────┐     ┌────────┐
//!    │ Transformable│     │ Camera │
//!    └──────────────┘     └────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use void_gizmo::prelude::*;
//!
//! let mut object = SceneObject::default();
//! let camera = LookAtCamera::new(Vec3::new(0.0, 2.0, 10.0), Vec3::ZERO);
//! let mut widget = AxisTranslationWidget::new(Axis::X);
//!
//! let ray = camera.ray_through(Vec3::new(0.5, 0.0, 0.0));
//! widget.begin_capture(&object, &camera, &ray, &RayHit::along(&ray, 10.0))?;
//! widget.update_capture(&mut object, &camera.ray_through(Vec3::new(1.5, 0.0, 0.0)))?;
//! widget.end_capture(&object)?;
//! ```

pub mod axis_translate;
pub mod camera;
pub mod config;
pub mod error;
pub mod target;
pub mod translate_gizmo;
pub mod widget;

pub use axis_translate::{drag_plane_normal, AxisTranslationWidget, CaptureSession, CaptureState};
pub use camera::{Camera, LookAtCamera};
pub use config::{GizmoConfig, HandleConfig, ScreenScaleConfig, SnapSettings, VisibilityConfig};
pub use error::{GizmoError, Result};
pub use target::{CoordSpace, SceneObject, Transformable};
pub use translate_gizmo::TranslateGizmo;
pub use widget::{
    clamp_constraint, snap_constraint, snap_value, unit_scale, DeltaConstraintFn, RayHit,
    ScaleFn, TransformWidget, WidgetVisual,
};

pub mod prelude {
    pub use crate::axis_translate::AxisTranslationWidget;
    pub use crate::camera::{Camera, LookAtCamera};
    pub use crate::config::GizmoConfig;
    pub use crate::error::{GizmoError, Result};
    pub use crate::target::{CoordSpace, SceneObject, Transformable};
    pub use crate::translate_gizmo::TranslateGizmo;
    pub use crate::widget::{RayHit, TransformWidget, WidgetVisual};
    pub use void_math::{Axis, Frame3, Quat, Ray, Vec3};
}
