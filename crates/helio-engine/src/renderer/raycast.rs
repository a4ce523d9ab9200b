use glam::{Vec2, Vec3};

use crate::api::types::NodeId;
use crate::components::node::NodeKind;
use crate::core::scene::Scene;
use crate::renderer::camera::PerspectiveCamera;

/// A ray in world space. Direction is always unit length.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// One mesh intersected by a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub id: NodeId,
    /// Distance from the ray origin to the entry point.
    pub distance: f32,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize(),
        }
    }

    /// Cast a ray from the camera through a pointer position given in
    /// normalized device coordinates ([-1, 1] on both axes, Y up).
    pub fn from_camera(ndc: Vec2, camera: &PerspectiveCamera) -> Self {
        let inv = camera.view_proj().inverse();
        // Unproject a point on the near plane (depth 0 in WebGPU clip
        // space) and one on the far plane (depth 1).
        let near = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Self::new(camera.position, far - near)
    }

    /// Distance along the ray to a sphere, or None on a miss.
    /// Returns the nearest non-negative root; a ray starting inside the
    /// sphere hits the back face.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let half_b = oc.dot(self.dir);
        let c = oc.length_squared() - radius * radius;
        let discriminant = half_b * half_b - c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        let t = -half_b - sqrt_d;
        if t >= 0.0 {
            return Some(t);
        }
        let t = -half_b + sqrt_d;
        (t >= 0.0).then_some(t)
    }
}

/// All meshes intersected by the ray, nearest first.
/// Non-mesh nodes (lights, point clouds) never produce hits.
pub fn intersect_scene(scene: &Scene, ray: &Ray) -> Vec<RayHit> {
    let mut hits: Vec<RayHit> = scene
        .iter()
        .filter_map(|node| match &node.kind {
            NodeKind::Mesh(mesh) => ray
                .intersect_sphere(node.position, mesh.radius)
                .map(|distance| RayHit {
                    id: node.id,
                    distance,
                }),
            _ => None,
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}
