pub mod api;
pub mod bridge;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::app::{App, AppConfig, AppContext};
pub use api::types::{Color, NodeId};
pub use bridge::protocol::ProtocolLayout;
pub use components::light::Light;
pub use components::mesh::SphereMesh;
pub use components::node::{NodeKind, SceneNode};
pub use components::points::PointCloud;
pub use core::scene::Scene;
pub use core::time::{FrameClock, FrameTime};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::{CameraUniform, PerspectiveCamera, Viewport};
pub use renderer::instance::{MeshBuffer, MeshInstance, PackedLight};
pub use renderer::raycast::{Ray, RayHit};
pub use systems::highlight::HOVER_EMISSIVE;
pub use systems::orbit::CircularOrbit;
pub use systems::rng::Rng;
pub use systems::starfield::StarfieldParams;
