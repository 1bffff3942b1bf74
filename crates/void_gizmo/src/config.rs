//! Gizmo configuration
//!
//! Loaded from the `[gizmo]`-style TOML the editor keeps next to its
//! preferences. Every section has defaults, so a partial file is fine.

use std::path::Path;

use serde::{Deserialize, Serialize};
use void_math::{radians, Interval1};

use crate::error::{GizmoError, Result};

/// When an axis handle is drawn, based on the angle between the axis and
/// the direction from the widget to the eye.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    /// Hide the handle while the axis points within this many degrees of
    /// the eye (seen edge-on)
    pub facing_dead_zone_deg: f32,

    /// Hide the handle while the axis points within this many degrees of
    /// straight away from the eye
    pub away_dead_zone_deg: f32,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            facing_dead_zone_deg: 15.0,
            away_dead_zone_deg: 45.0,
        }
    }
}

impl VisibilityConfig {
    /// Allowed range of `dot(axis, eye_direction)`, endpoints included
    pub fn cos_range(&self) -> Interval1 {
        Interval1::new(
            -radians(self.away_dead_zone_deg).cos(),
            radians(self.facing_dead_zone_deg).cos(),
        )
    }

    fn validate(&self) -> Result<()> {
        let in_range = |deg: f32| (0.0..180.0).contains(&deg);
        if !in_range(self.facing_dead_zone_deg) || !in_range(self.away_dead_zone_deg) {
            return Err(GizmoError::InvalidConfig(format!(
                "visibility dead zones must be within [0, 180) degrees, got {} and {}",
                self.facing_dead_zone_deg, self.away_dead_zone_deg
            )));
        }
        if self.facing_dead_zone_deg + self.away_dead_zone_deg >= 180.0 {
            return Err(GizmoError::InvalidConfig(
                "visibility dead zones cover every view direction".to_string(),
            ));
        }
        Ok(())
    }
}

/// Handle geometry, relative to the gizmo's screen scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleConfig {
    /// Arrow length
    pub length_ratio: f32,
    /// Pick radius around the arrow
    pub radius_ratio: f32,
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self {
            length_ratio: 1.0,
            radius_ratio: 0.1,
        }
    }
}

impl HandleConfig {
    fn validate(&self) -> Result<()> {
        let positive = |ratio: f32| ratio.is_finite() && ratio > 0.0;
        if !(positive(self.length_ratio) && positive(self.radius_ratio)) {
            return Err(GizmoError::InvalidConfig(format!(
                "handle ratios must be positive, got length {} radius {}",
                self.length_ratio, self.radius_ratio
            )));
        }
        Ok(())
    }
}

/// Keeps the gizmo a constant size on screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenScaleConfig {
    /// World size per unit of camera distance
    pub distance_factor: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for ScreenScaleConfig {
    fn default() -> Self {
        Self {
            distance_factor: 0.15,
            min: 0.1,
            max: 10.0,
        }
    }
}

impl ScreenScaleConfig {
    /// Gizmo scale for a camera at `distance` from the target
    ///
    /// The result never goes below `min`, even for a range with `min > max`.
    pub fn scale_for_distance(&self, distance: f32) -> f32 {
        (distance * self.distance_factor).min(self.max).max(self.min)
    }

    fn validate(&self) -> Result<()> {
        let usable = self.distance_factor.is_finite()
            && self.distance_factor > 0.0
            && self.min > 0.0
            && self.min <= self.max
            && self.max.is_finite();
        if !usable {
            return Err(GizmoError::InvalidConfig(format!(
                "screen scale needs a positive factor and 0 < min <= max, \
                 got factor {} min {} max {}",
                self.distance_factor, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Snap settings for translation drags
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    /// Enable snap
    pub enabled: bool,
    /// Translation snap value (units)
    pub translate: f32,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            translate: 0.5,
        }
    }
}

impl SnapSettings {
    /// Snap increment if snapping is on
    pub fn step(&self) -> Option<f32> {
        (self.enabled && self.translate > 0.0).then_some(self.translate)
    }

    /// Snapping on with increment `translate`
    pub fn with_step(translate: f32) -> Result<Self> {
        let snap = Self {
            enabled: true,
            translate,
        };
        snap.validate()?;
        Ok(snap)
    }

    fn validate(&self) -> Result<()> {
        if !(self.translate.is_finite() && self.translate > 0.0) {
            return Err(GizmoError::InvalidConfig(format!(
                "snap increment must be positive, got {}",
                self.translate
            )));
        }
        Ok(())
    }
}

/// Translate gizmo configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GizmoConfig {
    pub visibility: VisibilityConfig,
    pub handle: HandleConfig,
    pub screen_scale: ScreenScaleConfig,
    pub snap: SnapSettings,
}

impl GizmoConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        log::info!("Loaded gizmo configuration from {:?}", path);
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<()> {
        self.visibility.validate()?;
        self.handle.validate()?;
        self.screen_scale.validate()?;
        self.snap.validate()
    }

    /// Enable snapping with the given increment (builder pattern)
    pub fn with_snap(mut self, translate: f32) -> Self {
        self.snap = SnapSettings {
            enabled: true,
            translate,
        };
        self
    }

    /// Set visibility dead zones in degrees (builder pattern)
    pub fn with_dead_zones(mut self, facing_deg: f32, away_deg: f32) -> Self {
        self.visibility = VisibilityConfig {
            facing_dead_zone_deg: facing_deg,
            away_dead_zone_deg: away_deg,
        };
        self
    }
}
