use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::scene::backend::SceneBackend;
use crate::scene::error::{Result, SceneError};
use crate::scene::types::{CameraId, CameraInfo, TargetId, MAIN_CAMERA_TAG};

/// Camera definition for the simulated scene.
#[derive(Debug, Clone)]
pub struct DummyCamera {
    pub name: String,
    pub is_main: bool,
    pub is_active: bool,
    pub pixel_width: i32,
    pub pixel_height: i32,
    pub depth: f32,
    pub rendering_path: String,
}

impl DummyCamera {
    /// Create an active, untagged 1920×1080 forward-path camera.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_main: false,
            is_active: true,
            pixel_width: 1920,
            pixel_height: 1080,
            depth: 0.0,
            rendering_path: "Forward".to_string(),
        }
    }

    /// Tag the camera's object with [`MAIN_CAMERA_TAG`].
    pub fn main(mut self) -> Self {
        self.is_main = true;
        self
    }

    /// Deactivate the camera's object in the hierarchy.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn with_resolution(mut self, width: i32, height: i32) -> Self {
        self.pixel_width = width;
        self.pixel_height = height;
        self
    }

    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }
}

struct Target {
    width: u32,
    height: u32,
    /// RGB24 contents, present once a camera has rendered into the target.
    frame: Option<Vec<u8>>,
}

#[derive(Default)]
struct RenderState {
    next_target: u64,
    targets: HashMap<TargetId, Target>,
    active: Option<TargetId>,
    camera_targets: HashMap<CameraId, TargetId>,
}

/// A fake scene backend for testing without a host engine.
///
/// Cameras are configured up front and never change during a run. Rendering
/// fills the bound target with a deterministic gradient, and all target
/// bookkeeping is observable so tests can assert that captures clean up
/// after themselves.
pub struct DummyScene {
    cameras: Vec<DummyCamera>,
    state: Mutex<RenderState>,
    fail_render: AtomicBool,
}

impl DummyScene {
    /// Create a scene with no cameras.
    pub fn new() -> Self {
        Self {
            cameras: Vec::new(),
            state: Mutex::new(RenderState::default()),
            fail_render: AtomicBool::new(false),
        }
    }

    /// Add a camera; scene order is insertion order.
    pub fn with_camera(mut self, camera: DummyCamera) -> Self {
        self.cameras.push(camera);
        self
    }

    /// Make every subsequent render call fail, to exercise cleanup paths.
    pub fn set_fail_render(&self, fail: bool) {
        self.fail_render.store(fail, Ordering::Relaxed);
    }

    /// Number of offscreen targets currently alive.
    pub fn live_targets(&self) -> usize {
        self.state.lock().targets.len()
    }

    fn id_for(index: usize) -> CameraId {
        CameraId::new(format!("cam-{index}"))
    }

    fn info_for(&self, index: usize) -> CameraInfo {
        let cam = &self.cameras[index];
        CameraInfo {
            id: Self::id_for(index),
            name: cam.name.clone(),
            is_main: cam.is_main,
            is_active: cam.is_active,
            pixel_width: cam.pixel_width,
            pixel_height: cam.pixel_height,
            depth: cam.depth,
            rendering_path: cam.rendering_path.clone(),
        }
    }

    fn index_of(&self, camera: &CameraId) -> Result<usize> {
        (0..self.cameras.len())
            .find(|&i| Self::id_for(i) == *camera)
            .ok_or_else(|| SceneError::UnknownCamera(camera.to_string()))
    }
}

impl Default for DummyScene {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic RGB24 test frame: red ramps left→right, green top→bottom.
fn gradient_frame(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push((x * 255 / width.saturating_sub(1).max(1)) as u8);
            data.push((y * 255 / height.saturating_sub(1).max(1)) as u8);
            data.push(128);
        }
    }
    data
}

impl SceneBackend for DummyScene {
    fn main_camera(&self) -> Result<Option<CameraInfo>> {
        // The host only designates a main camera that is active in the scene
        Ok((0..self.cameras.len())
            .find(|&i| self.cameras[i].is_main && self.cameras[i].is_active)
            .map(|i| self.info_for(i)))
    }

    fn find_camera_by_tag(&self, tag: &str) -> Result<Option<CameraInfo>> {
        if tag != MAIN_CAMERA_TAG {
            return Ok(None);
        }
        Ok((0..self.cameras.len())
            .find(|&i| self.cameras[i].is_main)
            .map(|i| self.info_for(i)))
    }

    fn find_camera_by_object_name(&self, name: &str) -> Result<Option<CameraInfo>> {
        Ok((0..self.cameras.len())
            .find(|&i| self.cameras[i].name == name)
            .map(|i| self.info_for(i)))
    }

    fn list_cameras(&self) -> Result<Vec<CameraInfo>> {
        Ok((0..self.cameras.len()).map(|i| self.info_for(i)).collect())
    }

    fn create_target(&self, width: u32, height: u32, _depth_bits: u32) -> Result<TargetId> {
        if width == 0 || height == 0 {
            return Err(SceneError::TargetCreation(format!(
                "invalid target size {width}x{height}"
            )));
        }
        let mut state = self.state.lock();
        state.next_target += 1;
        let id = TargetId::new(state.next_target);
        state.targets.insert(
            id,
            Target {
                width,
                height,
                frame: None,
            },
        );
        Ok(id)
    }

    fn release_target(&self, target: TargetId) {
        self.state.lock().targets.remove(&target);
    }

    fn active_target(&self) -> Option<TargetId> {
        self.state.lock().active
    }

    fn set_active_target(&self, target: Option<TargetId>) {
        self.state.lock().active = target;
    }

    fn camera_target(&self, camera: &CameraId) -> Result<Option<TargetId>> {
        self.index_of(camera)?;
        Ok(self.state.lock().camera_targets.get(camera).copied())
    }

    fn set_camera_target(&self, camera: &CameraId, target: Option<TargetId>) -> Result<()> {
        self.index_of(camera)?;
        let mut state = self.state.lock();
        match target {
            Some(t) => {
                state.camera_targets.insert(camera.clone(), t);
            }
            None => {
                state.camera_targets.remove(camera);
            }
        }
        Ok(())
    }

    fn render(&self, camera: &CameraId) -> Result<()> {
        self.index_of(camera)?;
        if self.fail_render.load(Ordering::Relaxed) {
            return Err(SceneError::Render("simulated render failure".to_string()));
        }
        let mut state = self.state.lock();
        let target_id = state.camera_targets.get(camera).copied().ok_or_else(|| {
            SceneError::Render(format!("camera '{camera}' has no render destination bound"))
        })?;
        let target = state
            .targets
            .get_mut(&target_id)
            .ok_or_else(|| SceneError::Render("render destination was released".to_string()))?;
        target.frame = Some(gradient_frame(target.width, target.height));
        Ok(())
    }

    fn read_pixels(&self, width: u32, height: u32) -> Result<Vec<u8>> {
        let state = self.state.lock();
        let active = state
            .active
            .ok_or_else(|| SceneError::Readback("no active render target".to_string()))?;
        let target = state
            .targets
            .get(&active)
            .ok_or_else(|| SceneError::Readback("active target was released".to_string()))?;
        if (width, height) != (target.width, target.height) {
            return Err(SceneError::Readback(format!(
                "requested rect {width}x{height} does not match target {}x{}",
                target.width, target.height
            )));
        }
        target
            .frame
            .clone()
            .ok_or_else(|| SceneError::Readback("target has no rendered frame".to_string()))
    }
}
