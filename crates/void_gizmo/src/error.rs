//! Error types for manipulation widgets

use thiserror::Error;
use void_math::Axis;

/// Widget and gizmo errors
///
/// Capture operations only fail on out-of-order calls. Degenerate drag
/// geometry is not an error.
#[derive(Debug, Error)]
pub enum GizmoError {
    /// Update or end requested while no capture is active
    #[error("No capture in progress")]
    NotCapturing,

    /// Begin requested while a capture is active
    #[error("Capture already in progress on axis {0}")]
    AlreadyCapturing(Axis),

    /// Configuration values out of range
    #[error("Invalid gizmo configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text is not valid TOML for `GizmoConfig`
    #[error("Failed to parse gizmo configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be written as TOML
    #[error("Failed to serialize gizmo configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Configuration file could not be read
    #[error("Failed to read gizmo configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for gizmo operations
pub type Result<T> = std::result::Result<T, GizmoError>;
