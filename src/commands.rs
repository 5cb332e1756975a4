use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::scene::backend::SceneBackend;
use crate::screenshot::capture::capture_frame;
use crate::screenshot::encode::{self, ImageFormat};
use crate::screenshot::error::ScreenshotError;
use crate::screenshot::list::list_scene_cameras;
use crate::screenshot::locate::resolve_camera;
use crate::screenshot::resample::{thumbnail, THUMB_HEIGHT, THUMB_WIDTH};

/// Decoded screenshot request, as handed over by the transport layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotRequest {
    /// `capture` or `list_cameras`, case-insensitive.
    #[serde(default = "default_action")]
    pub action: String,
    pub camera_name: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// `PNG`, `JPG` or `JPEG`, case-insensitive; PNG when absent.
    pub format: Option<String>,
}

fn default_action() -> String {
    "capture".to_string()
}

impl Default for ScreenshotRequest {
    fn default() -> Self {
        Self {
            action: default_action(),
            camera_name: None,
            width: None,
            height: None,
            format: None,
        }
    }
}

/// Response envelope returned for every request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    pub fn ok(message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
            data: Some(data),
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(message.into()),
            data: None,
        }
    }
}

/// Handle one screenshot command and package the outcome.
///
/// Every failure comes back as an error response; nothing escapes to the
/// host. A panic anywhere in the flow is contained, logged, and reported —
/// resource guards in the pipeline have already run by the time the unwind
/// reaches this frame.
pub fn handle_command(scene: &dyn SceneBackend, request: &ScreenshotRequest) -> CommandResponse {
    let outcome =
        std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| dispatch(scene, request)));
    match outcome {
        Ok(response) => response,
        Err(payload) => {
            let cause = panic_message(payload.as_ref());
            error!("panic while handling '{}': {cause}", request.action);
            CommandResponse::err(format!(
                "internal error handling '{}': {cause}",
                request.action
            ))
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn dispatch(scene: &dyn SceneBackend, request: &ScreenshotRequest) -> CommandResponse {
    match request.action.to_ascii_lowercase().as_str() {
        "capture" => capture_command(scene, request),
        "list_cameras" => list_command(scene),
        other => CommandResponse::err(format!(
            "unknown action '{other}': expected 'capture' or 'list_cameras'"
        )),
    }
}

fn capture_command(scene: &dyn SceneBackend, request: &ScreenshotRequest) -> CommandResponse {
    match try_capture(scene, request) {
        Ok(response) => response,
        Err(e) => {
            error!("capture failed: {e}");
            CommandResponse::err(e.to_string())
        }
    }
}

fn try_capture(
    scene: &dyn SceneBackend,
    request: &ScreenshotRequest,
) -> Result<CommandResponse, ScreenshotError> {
    let camera = resolve_camera(scene, request.camera_name.as_deref())?;
    let frame = capture_frame(scene, &camera, request.width, request.height)?;
    let thumb = thumbnail(&frame);
    let format = ImageFormat::from_token(request.format.as_deref());
    let encoded = encode::encode(&thumb, format)?;

    let message = format!(
        "Screenshot captured from camera '{}' at {THUMB_WIDTH}x{THUMB_HEIGHT} resolution \
         (original: {}x{}) in {} format.",
        camera.name,
        frame.width(),
        frame.height(),
        format.tag()
    );
    let data = json!({
        "cameraName": camera.name,
        "width": frame.width(),
        "height": frame.height(),
        "format": format.tag(),
        "mimeType": encoded.mime_type(),
        "imageData": encoded.to_base64(),
    });
    Ok(CommandResponse::ok(message, data))
}

fn list_command(scene: &dyn SceneBackend) -> CommandResponse {
    let inventory = match list_scene_cameras(scene) {
        Ok(inventory) => inventory,
        Err(e) => {
            error!("camera enumeration failed: {e}");
            return CommandResponse::err(e.to_string());
        }
    };

    let message = if inventory.total_count == 0 {
        "No cameras found in the current scene.".to_string()
    } else {
        format!("Found {} camera(s) in the scene.", inventory.total_count)
    };
    let data = json!({
        "cameras": inventory.cameras,
        "totalCount": inventory.total_count,
        "mainCameraFound": inventory.main_camera_found,
    });
    CommandResponse::ok(message, data)
}
