//! Orbital camera and camera control strategies
//!
//! The control strategy is chosen once at startup and never swapped:
//! [`OrbitController`] is the full damped controller, [`BasicController`]
//! the minimal drag/zoom substitute selected via `PHYS_CAMERA=basic`.
//! Both drive the same [`Camera3D`].

use glam::{Mat4, Vec3};

/// 3D perspective camera with orbital parameters
#[derive(Debug, Clone)]
pub struct Camera3D {
    pub target: Vec3,
    pub up: Vec3,
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera3D {
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: 75.0f32.to_radians(),
            aspect_ratio,
            near: 0.1,
            far: 10_000.0,
            distance: 25.0,
            yaw: 0.8,
            pitch: 0.4,
        }
    }

    /// Camera position derived from the orbital parameters
    pub fn position(&self) -> Vec3 {
        self.target
            + Vec3::new(
                self.distance * self.pitch.cos() * self.yaw.sin(),
                self.distance * self.pitch.sin(),
                self.distance * self.pitch.cos() * self.yaw.cos(),
            )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect_ratio, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn update_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }
}

/// Camera uniform data for shaders
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 4],
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera3D) -> Self {
        let pos = camera.position();
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            position: [pos.x, pos.y, pos.z, 1.0],
        }
    }
}

const MIN_DISTANCE: f32 = 5.0;
const MAX_DISTANCE: f32 = 100.0;
const PITCH_LIMIT: f32 = 1.5;

/// A camera control strategy, selected once at startup and never swapped.
pub trait CameraController {
    /// Apply a mouse drag, in screen-pixel deltas.
    fn drag(&mut self, camera: &mut Camera3D, dx: f32, dy: f32);
    /// Apply a scroll-wheel zoom.
    fn scroll(&mut self, camera: &mut Camera3D, delta: f32);
    /// Per-frame update (auto-rotation, damping).
    fn update(&mut self, camera: &mut Camera3D, dt: f32);
}

/// Full orbit controller with damping and auto-rotation
pub struct OrbitController {
    pub damping_factor: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,
}

impl OrbitController {
    pub fn new() -> Self {
        Self {
            damping_factor: 0.05,
            auto_rotate: true,
            auto_rotate_speed: 0.5,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
        }
    }
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController for OrbitController {
    fn drag(&mut self, _camera: &mut Camera3D, dx: f32, dy: f32) {
        self.yaw_velocity += dx * 0.01;
        self.pitch_velocity += dy * 0.01;
    }

    fn scroll(&mut self, camera: &mut Camera3D, delta: f32) {
        camera.distance = (camera.distance - delta * 2.0).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    fn update(&mut self, camera: &mut Camera3D, dt: f32) {
        if self.auto_rotate {
            camera.yaw += self.auto_rotate_speed * dt * 0.1;
        }

        camera.yaw += self.yaw_velocity;
        camera.pitch = (camera.pitch + self.pitch_velocity).clamp(-PITCH_LIMIT, PITCH_LIMIT);

        // Exponential damping toward rest
        let decay = 1.0 - self.damping_factor;
        self.yaw_velocity *= decay;
        self.pitch_velocity *= decay;
    }
}

/// Minimal fallback controller: direct drag-to-orbit, scroll-to-zoom,
/// auto-rotate. No damping.
pub struct BasicController {
    pub auto_rotate_speed: f32,
}

impl BasicController {
    pub fn new() -> Self {
        Self {
            auto_rotate_speed: 0.5,
        }
    }
}

impl Default for BasicController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController for BasicController {
    fn drag(&mut self, camera: &mut Camera3D, dx: f32, dy: f32) {
        camera.yaw += dx * 0.01;
        camera.pitch = (camera.pitch + dy * 0.01).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    fn scroll(&mut self, camera: &mut Camera3D, delta: f32) {
        camera.distance = (camera.distance - delta * 2.0).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    fn update(&mut self, camera: &mut Camera3D, dt: f32) {
        camera.yaw += self.auto_rotate_speed * dt * 0.1;
    }
}

/// Which controller variant to use, decided once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerKind {
    Orbit,
    Basic,
}

impl ControllerKind {
    /// Read the `PHYS_CAMERA` environment variable; anything other than
    /// "basic" selects the full orbit controller.
    pub fn from_env() -> Self {
        match std::env::var("PHYS_CAMERA").as_deref() {
            Ok("basic") => ControllerKind::Basic,
            _ => ControllerKind::Orbit,
        }
    }

    pub fn build(self) -> Box<dyn CameraController> {
        match self {
            ControllerKind::Orbit => Box::new(OrbitController::new()),
            ControllerKind::Basic => {
                log::warn!("using basic camera controls (drag/zoom only)");
                Box::new(BasicController::new())
            }
        }
    }
}
