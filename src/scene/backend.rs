use crate::scene::error::Result;
use crate::scene::types::{CameraId, CameraInfo, TargetId};

/// Host-engine capability trait.
///
/// The screenshot pipeline never touches concrete engine types; everything it
/// needs from the scene — camera discovery and the render-to-texture
/// primitive — goes through this interface. Rendering is synchronous: when
/// [`render`](SceneBackend::render) returns, the frame is complete and
/// readable.
///
/// The active render destination is engine-global shared state. Every caller
/// that changes it must snapshot the prior value before writing and restore
/// it afterwards; see `screenshot::capture` for the enforcing guard.
pub trait SceneBackend: Send + Sync {
    /// The host's designated main camera, if one exists.
    fn main_camera(&self) -> Result<Option<CameraInfo>>;

    /// First camera attached to a scene object carrying `tag`, active or not.
    fn find_camera_by_tag(&self, tag: &str) -> Result<Option<CameraInfo>>;

    /// Camera attached to the scene object with exactly this name.
    fn find_camera_by_object_name(&self, name: &str) -> Result<Option<CameraInfo>>;

    /// Every camera in the scene, inactive ones included, in scene order.
    fn list_cameras(&self) -> Result<Vec<CameraInfo>>;

    /// Create an offscreen render target with the given depth-buffer size.
    fn create_target(&self, width: u32, height: u32, depth_bits: u32) -> Result<TargetId>;

    /// Destroy an offscreen render target. Idempotent.
    fn release_target(&self, target: TargetId);

    /// The engine-global active render destination.
    fn active_target(&self) -> Option<TargetId>;

    /// Set or clear the engine-global active render destination.
    fn set_active_target(&self, target: Option<TargetId>);

    /// The camera's own render destination (`None` means the screen).
    fn camera_target(&self, camera: &CameraId) -> Result<Option<TargetId>>;

    /// Redirect the camera to render into `target`.
    fn set_camera_target(&self, camera: &CameraId, target: Option<TargetId>) -> Result<()>;

    /// Render exactly one frame from the camera into its current destination.
    fn render(&self, camera: &CameraId) -> Result<()>;

    /// Read back the full `width`×`height` rect from the active target as
    /// tightly packed RGB24 bytes (row-major, no mipmaps, no alpha).
    fn read_pixels(&self, width: u32, height: u32) -> Result<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::error::SceneError;

    /// Backend over a scene with no cameras and no render support.
    struct EmptyScene;

    impl SceneBackend for EmptyScene {
        fn main_camera(&self) -> Result<Option<CameraInfo>> {
            Ok(None)
        }

        fn find_camera_by_tag(&self, _tag: &str) -> Result<Option<CameraInfo>> {
            Ok(None)
        }

        fn find_camera_by_object_name(&self, _name: &str) -> Result<Option<CameraInfo>> {
            Ok(None)
        }

        fn list_cameras(&self) -> Result<Vec<CameraInfo>> {
            Ok(vec![])
        }

        fn create_target(&self, _width: u32, _height: u32, _depth_bits: u32) -> Result<TargetId> {
            Err(SceneError::TargetCreation("no renderer".to_string()))
        }

        fn release_target(&self, _target: TargetId) {}

        fn active_target(&self) -> Option<TargetId> {
            None
        }

        fn set_active_target(&self, _target: Option<TargetId>) {}

        fn camera_target(&self, camera: &CameraId) -> Result<Option<TargetId>> {
            Err(SceneError::UnknownCamera(camera.to_string()))
        }

        fn set_camera_target(&self, camera: &CameraId, _target: Option<TargetId>) -> Result<()> {
            Err(SceneError::UnknownCamera(camera.to_string()))
        }

        fn render(&self, camera: &CameraId) -> Result<()> {
            Err(SceneError::UnknownCamera(camera.to_string()))
        }

        fn read_pixels(&self, _width: u32, _height: u32) -> Result<Vec<u8>> {
            Err(SceneError::Readback("no active target".to_string()))
        }
    }

    #[test]
    fn empty_scene_lists_no_cameras() {
        let scene = EmptyScene;
        assert!(scene.list_cameras().unwrap().is_empty());
        assert!(scene.main_camera().unwrap().is_none());
    }

    #[test]
    fn empty_scene_rejects_render_ops() {
        let scene = EmptyScene;
        assert!(scene.create_target(320, 180, 24).is_err());
        assert!(scene.render(&CameraId::new("cam-0")).is_err());
    }

    #[test]
    fn trait_object_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn SceneBackend>>();
    }
}
