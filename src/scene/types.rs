use serde::Serialize;
use std::fmt;

/// Tag the host engine reserves for the primary rendering viewpoint.
pub const MAIN_CAMERA_TAG: &str = "MainCamera";

/// Stable identifier for a camera inside the host scene.
///
/// The host assigns these; the crate only passes them back to the host and
/// never interprets the contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CameraId(String);

impl CameraId {
    /// Create a new `CameraId` from a raw string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return the inner string representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CameraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle to a host-owned offscreen render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(u64);

impl TargetId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Read-only snapshot of one camera, queried transiently per request.
///
/// `pixel_width`/`pixel_height` mirror the host and may be non-positive when
/// the camera has no valid viewport; callers must fall back to a default
/// resolution in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraInfo {
    pub id: CameraId,
    pub name: String,
    /// Whether the containing scene object carries [`MAIN_CAMERA_TAG`].
    pub is_main: bool,
    /// Whether the containing scene object is active in the hierarchy.
    pub is_active: bool,
    pub pixel_width: i32,
    pub pixel_height: i32,
    /// Rendering order priority within the host.
    pub depth: f32,
    pub rendering_path: String,
}
