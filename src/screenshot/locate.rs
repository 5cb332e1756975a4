use crate::scene::backend::SceneBackend;
use crate::scene::types::{CameraInfo, MAIN_CAMERA_TAG};
use crate::screenshot::error::{Result, ScreenshotError};

/// Resolve exactly one camera from an optional name.
///
/// Without a name (or with an empty one) the default chain applies: the
/// host's designated main camera, then any camera on an object tagged
/// `MainCamera`, then the first camera whose object is active. With a name,
/// an exact object-name match is tried first, then a case-insensitive scan
/// over all camera names.
pub fn resolve_camera(scene: &dyn SceneBackend, name: Option<&str>) -> Result<CameraInfo> {
    match name {
        Some(name) if !name.is_empty() => resolve_named(scene, name),
        _ => resolve_default(scene),
    }
}

fn resolve_default(scene: &dyn SceneBackend) -> Result<CameraInfo> {
    if let Some(camera) = scene.main_camera()? {
        return Ok(camera);
    }
    if let Some(camera) = scene.find_camera_by_tag(MAIN_CAMERA_TAG)? {
        return Ok(camera);
    }
    scene
        .list_cameras()?
        .into_iter()
        .find(|c| c.is_active)
        .ok_or(ScreenshotError::MainCameraNotFound)
}

fn resolve_named(scene: &dyn SceneBackend, name: &str) -> Result<CameraInfo> {
    if let Some(camera) = scene.find_camera_by_object_name(name)? {
        return Ok(camera);
    }
    scene
        .list_cameras()?
        .into_iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ScreenshotError::CameraNotFound(name.to_string()))
}
