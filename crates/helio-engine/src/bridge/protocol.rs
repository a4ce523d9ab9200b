//! Shared buffer layout between Rust and the host renderer.
//! Must stay in sync with the TypeScript `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Stars: star_count × 3 floats]           (written once at init)
//! [Meshes: max_meshes × 12 floats]         (rebuilt every frame)
//! [Lights: max_lights × 12 floats]
//! [Camera: 16 floats — column-major view-projection]
//! ```
//!
//! Capacities are written once into the header at init; the host reads
//! them to compute section offsets dynamically.

use crate::api::app::AppConfig;
use crate::renderer::instance::{MeshInstance, PackedLight};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_STAR_COUNT: usize = 1;
pub const HEADER_MESH_COUNT: usize = 2;
pub const HEADER_LIGHT_COUNT: usize = 3;
pub const HEADER_VIEWPORT_W: usize = 4;
pub const HEADER_VIEWPORT_H: usize = 5;
pub const HEADER_MAX_MESHES: usize = 6;
pub const HEADER_MAX_LIGHTS: usize = 7;
pub const HEADER_PROTOCOL_VERSION: usize = 8;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per star position (wire format — never changes).
pub const STAR_FLOATS: usize = 3;

/// Floats in the camera section: one column-major 4×4 matrix.
pub const CAMERA_FLOATS: usize = 16;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub star_count: usize,
    pub max_meshes: usize,
    pub max_lights: usize,

    /// Offset (in floats) where star data begins.
    pub star_data_offset: usize,
    /// Offset (in floats) where mesh instance data begins.
    pub mesh_data_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,
    /// Offset (in floats) where the camera matrix begins.
    pub camera_offset: usize,
    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
}

impl ProtocolLayout {
    pub fn from_config(config: &AppConfig) -> Self {
        let star_data_floats = config.star_count * STAR_FLOATS;
        let mesh_data_floats = config.max_meshes * MeshInstance::FLOATS;
        let light_data_floats = config.max_lights * PackedLight::FLOATS;

        let star_data_offset = HEADER_FLOATS;
        let mesh_data_offset = star_data_offset + star_data_floats;
        let light_data_offset = mesh_data_offset + mesh_data_floats;
        let camera_offset = light_data_offset + light_data_floats;
        let buffer_total_floats = camera_offset + CAMERA_FLOATS;

        Self {
            star_count: config.star_count,
            max_meshes: config.max_meshes,
            max_lights: config.max_lights,
            star_data_offset,
            mesh_data_offset,
            light_data_offset,
            camera_offset,
            buffer_total_floats,
        }
    }
}
