use glam::Vec3;
use serde::Deserialize;

use crate::api::types::NodeId;
use crate::core::scene::Scene;
use crate::core::time::FrameTime;
use crate::input::queue::InputQueue;
use crate::renderer::camera::{PerspectiveCamera, Viewport};

/// Engine configuration, provided by the app and optionally overridden by a
/// JSON blob from the host page before init.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
    /// Initial camera position in world space.
    pub camera_pos: [f32; 3],
    /// Number of stars in the background point cloud.
    pub star_count: usize,
    /// Starfield extent on X and Y (stars span ±spread/2) and depth on -Z.
    pub star_spread: f32,
    /// Maximum mesh instances in the wire buffer.
    pub max_meshes: usize,
    /// Maximum packed lights in the wire buffer.
    pub max_lights: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fov_y_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            camera_pos: [0.0, 0.0, 15.0],
            star_count: 10_000,
            star_spread: 2000.0,
            max_meshes: 64,
            max_lights: 8,
        }
    }
}

impl AppConfig {
    /// Parse a config override from a JSON string. Missing fields keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The contract every demo app must fulfill.
pub trait App {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    /// Build the initial scene: spawn nodes, position the camera.
    fn init(&mut self, ctx: &mut AppContext);

    /// Per-frame update. Runs once per display refresh with the pending
    /// input events for this frame.
    fn update(&mut self, ctx: &mut AppContext, frame: FrameTime, input: &InputQueue);
}

/// All mutable engine state, owned in one place and passed to the app.
/// Replaces the ambient module-level globals a script would use.
pub struct AppContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub viewport: Viewport,
    /// The effective config (after any JSON override).
    pub config: AppConfig,
    next_id: u32,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        let viewport = Viewport::default();
        let camera = PerspectiveCamera::new(
            config.fov_y_deg,
            viewport.aspect(),
            config.near,
            config.far,
        )
        .with_position(Vec3::from_array(config.camera_pos));

        Self {
            scene: Scene::new(),
            camera,
            viewport,
            config: config.clone(),
            next_id: 1,
        }
    }

    /// Generate the next unique node ID.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Viewport-size change: recompute the camera aspect ratio and resize
    /// the output surface extent to match.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.camera.set_aspect(self.viewport.aspect());
    }
}
