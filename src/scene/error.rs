use thiserror::Error;

/// Faults raised by the host scene backend.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene query failed: {0}")]
    Query(String),

    #[error("camera not found in scene: {0}")]
    UnknownCamera(String),

    #[error("render target creation failed: {0}")]
    TargetCreation(String),

    #[error("render failed: {0}")]
    Render(String),

    #[error("pixel readback failed: {0}")]
    Readback(String),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, SceneError>;
