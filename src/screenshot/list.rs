use serde::Serialize;

use crate::scene::backend::SceneBackend;
use crate::scene::types::CameraInfo;
use crate::screenshot::error::Result;

/// Discovery metadata for one camera, snapshotted at enumeration time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraListEntry {
    pub name: String,
    pub is_main_camera: bool,
    pub is_active: bool,
    /// Native pixel size as "WxH".
    pub resolution: String,
    pub rendering_path: String,
    pub depth: f32,
}

impl CameraListEntry {
    fn from_info(info: &CameraInfo) -> Self {
        Self {
            name: info.name.clone(),
            is_main_camera: info.is_main,
            is_active: info.is_active,
            resolution: format!("{}x{}", info.pixel_width, info.pixel_height),
            rendering_path: info.rendering_path.clone(),
            depth: info.depth,
        }
    }
}

/// Result of enumerating the scene's cameras.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraInventory {
    pub cameras: Vec<CameraListEntry>,
    pub total_count: usize,
    pub main_camera_found: bool,
}

/// Enumerate every camera in the scene, main camera(s) first, then by name.
///
/// An empty scene is a success with an empty list.
pub fn list_scene_cameras(scene: &dyn SceneBackend) -> Result<CameraInventory> {
    let mut cameras: Vec<CameraListEntry> = scene
        .list_cameras()?
        .iter()
        .map(CameraListEntry::from_info)
        .collect();

    cameras.sort_by(|a, b| {
        b.is_main_camera
            .cmp(&a.is_main_camera)
            .then_with(|| a.name.cmp(&b.name))
    });

    let main_camera_found = cameras.iter().any(|c| c.is_main_camera);
    let total_count = cameras.len();
    Ok(CameraInventory {
        cameras,
        total_count,
        main_camera_found,
    })
}
