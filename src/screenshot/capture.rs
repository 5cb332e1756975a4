use parking_lot::Mutex;
use tracing::{info, warn};

use crate::scene::backend::SceneBackend;
use crate::scene::error::SceneError;
use crate::scene::types::{CameraId, CameraInfo, TargetId};
use crate::screenshot::bitmap::Bitmap;
use crate::screenshot::error::{Result, ScreenshotError};

/// Fallback capture width when neither the request nor the camera supplies
/// a positive dimension.
pub const DEFAULT_WIDTH: u32 = 1920;
/// Fallback capture height.
pub const DEFAULT_HEIGHT: u32 = 1080;

const DEPTH_BUFFER_BITS: u32 = 24;

/// The active render destination is engine-global, so captures must not
/// interleave; two concurrent captures would restore each other's state.
static CAPTURE_LOCK: Mutex<()> = Mutex::new(());

/// Scoped ownership of one offscreen capture.
///
/// Holds the camera's saved render destination and the offscreen target.
/// Dropping the guard restores the camera's destination, clears the
/// engine-global active destination, and releases the target — on normal
/// return and error paths alike.
struct TargetGuard<'a> {
    scene: &'a dyn SceneBackend,
    camera: CameraId,
    target: TargetId,
    saved_camera_target: Option<TargetId>,
}

impl Drop for TargetGuard<'_> {
    fn drop(&mut self) {
        if let Err(e) = self
            .scene
            .set_camera_target(&self.camera, self.saved_camera_target)
        {
            warn!(
                "failed to restore render destination for camera '{}': {e}",
                self.camera
            );
        }
        self.scene.set_active_target(None);
        self.scene.release_target(self.target);
    }
}

/// Requested dimension if positive, else the camera's native dimension if
/// positive, else the fixed default. Never an error.
fn resolve_dimensions(camera: &CameraInfo, width: Option<u32>, height: Option<u32>) -> (u32, u32) {
    let native_w = u32::try_from(camera.pixel_width).ok().filter(|&w| w > 0);
    let native_h = u32::try_from(camera.pixel_height).ok().filter(|&h| h > 0);
    let width = width.filter(|&w| w > 0).or(native_w).unwrap_or(DEFAULT_WIDTH);
    let height = height
        .filter(|&h| h > 0)
        .or(native_h)
        .unwrap_or(DEFAULT_HEIGHT);
    (width, height)
}

/// Render one frame from the camera into an offscreen target and read it
/// back as a [`Bitmap`] of exactly the resolved size.
///
/// The camera's render-destination state is snapshot before the capture and
/// restored on every exit path, and the offscreen target never outlives the
/// call.
pub fn capture_frame(
    scene: &dyn SceneBackend,
    camera: &CameraInfo,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<Bitmap> {
    let _serialized = CAPTURE_LOCK.lock();

    let (width, height) = resolve_dimensions(camera, width, height);
    info!(
        "capturing {width}x{height} frame from camera '{}'",
        camera.name
    );

    // Snapshot before anything is mutated; the guard restores this value
    let saved_camera_target = scene.camera_target(&camera.id)?;
    let target = scene.create_target(width, height, DEPTH_BUFFER_BITS)?;
    let _guard = TargetGuard {
        scene,
        camera: camera.id.clone(),
        target,
        saved_camera_target,
    };

    scene.set_active_target(Some(target));
    scene.set_camera_target(&camera.id, Some(target))?;
    scene.render(&camera.id)?;
    let data = scene.read_pixels(width, height)?;

    Bitmap::from_raw(width, height, data).ok_or_else(|| {
        ScreenshotError::Capture(SceneError::Readback(format!(
            "host returned a mis-sized pixel buffer for {width}x{height}"
        )))
    })
}
