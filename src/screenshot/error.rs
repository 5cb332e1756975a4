use thiserror::Error;

use crate::scene::error::SceneError;

/// Screenshot pipeline errors.
#[derive(Debug, Error)]
pub enum ScreenshotError {
    /// No camera resolvable without a name: no designated main camera, no
    /// object tagged as main camera, and no active camera in the scene.
    #[error(
        "no camera available: the scene has no main camera and no active camera; \
         tag a camera 'MainCamera' or pass a camera name"
    )]
    MainCameraNotFound,

    /// A camera was requested by name and the scene has no match.
    #[error("camera '{0}' not found in the scene")]
    CameraNotFound(String),

    #[error("capture failed: {0}")]
    Capture(#[from] SceneError),

    #[error("image encoding failed: {0}")]
    Encode(String),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, ScreenshotError>;
