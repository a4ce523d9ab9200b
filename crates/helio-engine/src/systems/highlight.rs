use glam::Vec2;

use crate::api::types::Color;
use crate::core::scene::Scene;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::raycast::{intersect_scene, Ray};

/// Emissive color applied to meshes under the pointer.
pub const HOVER_EMISSIVE: u32 = 0x555555;

/// Hover-highlight pass for one pointer position (already normalized to
/// NDC). Every mesh's emissive is reset to black first, so a ray that
/// hits nothing leaves the whole scene unhighlighted.
pub fn highlight_hover(scene: &mut Scene, camera: &PerspectiveCamera, ndc: Vec2) {
    for node in scene.iter_mut() {
        if let Some(mesh) = node.as_mesh_mut() {
            mesh.emissive = Color::BLACK;
        }
    }

    let ray = Ray::from_camera(ndc, camera);
    for hit in intersect_scene(scene, &ray) {
        if let Some(mesh) = scene.get_mut(hit.id).and_then(|n| n.as_mesh_mut()) {
            mesh.emissive = Color::from_hex(HOVER_EMISSIVE);
        }
    }
}
