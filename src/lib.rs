//! Camera screenshot capture for a hosted 3D scene.
//!
//! The host engine is reached through the [`scene::backend::SceneBackend`]
//! trait; everything else — camera resolution, offscreen capture, bilinear
//! downsampling to a 320×180 thumbnail, PNG/JPEG encoding and the base64
//! response payload — lives in this crate. [`handle_command`] is the single
//! entry point: it dispatches `capture` and `list_cameras` requests and
//! always returns a response envelope, never a raw failure.

pub mod commands;
pub mod scene;
pub mod screenshot;

pub use commands::{handle_command, CommandResponse, ScreenshotRequest};
pub use scene::backend::SceneBackend;
