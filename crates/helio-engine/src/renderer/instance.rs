use bytemuck::{Pod, Zeroable};

use crate::components::node::NodeKind;
use crate::core::scene::Scene;

/// One sphere mesh, in the wire format the host renderer consumes.
///
/// Wire format (12 floats / 48 bytes):
/// `[x, y, z, radius, rotation_y, r, g, b, er, eg, eb, shininess]`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct MeshInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
    pub rotation_y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub emissive_r: f32,
    pub emissive_g: f32,
    pub emissive_b: f32,
    pub shininess: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 12;
}

/// One light, in the wire format the host renderer consumes.
///
/// Wire format (12 floats / 48 bytes):
/// `[kind, x, y, z, r, g, b, intensity, range, pad, pad, pad]`
/// where kind is 0.0 for ambient and 1.0 for point.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct PackedLight {
    pub kind: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    pub range: f32,
    pub _pad: [f32; 3],
}

impl PackedLight {
    pub const FLOATS: usize = 12;
    pub const KIND_AMBIENT: f32 = 0.0;
    pub const KIND_POINT: f32 = 1.0;
}

/// Capacity-bounded buffer of mesh instances, rebuilt every frame.
pub struct MeshBuffer {
    instances: Vec<MeshInstance>,
    capacity: usize,
}

impl MeshBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: MeshInstance) {
        if self.instances.len() < self.capacity {
            self.instances.push(instance);
        } else {
            log::warn!("mesh buffer full ({} instances), dropping", self.capacity);
        }
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }
}

/// Build the mesh instance buffer from the scene.
/// Instance order follows scene order; only mesh nodes are emitted.
pub fn build_mesh_buffer(scene: &Scene, buffer: &mut MeshBuffer) {
    buffer.clear();
    for node in scene.iter() {
        let mesh = match &node.kind {
            NodeKind::Mesh(m) => m,
            _ => continue,
        };
        buffer.push(MeshInstance {
            x: node.position.x,
            y: node.position.y,
            z: node.position.z,
            radius: mesh.radius,
            rotation_y: node.rotation_y,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            emissive_r: mesh.emissive.r,
            emissive_g: mesh.emissive.g,
            emissive_b: mesh.emissive.b,
            shininess: mesh.shininess,
        });
    }
}

/// Pack all lights in the scene, clamped to `max_lights`.
/// Ambient lights carry no position; point lights use their node's.
pub fn pack_lights(scene: &Scene, max_lights: usize) -> Vec<PackedLight> {
    use crate::components::light::Light;

    let mut packed = Vec::new();
    for node in scene.iter() {
        let light = match &node.kind {
            NodeKind::Light(l) => l,
            _ => continue,
        };
        if packed.len() >= max_lights {
            log::warn!("light buffer full ({max_lights} lights), dropping");
            break;
        }
        let color = light.color();
        packed.push(match *light {
            Light::Ambient { intensity, .. } => PackedLight {
                kind: PackedLight::KIND_AMBIENT,
                r: color.r,
                g: color.g,
                b: color.b,
                intensity,
                ..Default::default()
            },
            Light::Point {
                intensity, range, ..
            } => PackedLight {
                kind: PackedLight::KIND_POINT,
                x: node.position.x,
                y: node.position.y,
                z: node.position.z,
                r: color.r,
                g: color.g,
                b: color.b,
                intensity,
                range,
                ..Default::default()
            },
        });
    }
    packed
}

/// Flatten point-cloud positions into `[x, y, z, ...]` floats.
/// Written once at init — the starfield is static.
pub fn pack_point_positions(points: &crate::components::points::PointCloud) -> Vec<f32> {
    let mut floats = Vec::with_capacity(points.len() * 3);
    for p in &points.positions {
        floats.extend_from_slice(&[p.x, p.y, p.z]);
    }
    floats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{Color, NodeId};
    use crate::components::light::Light;
    use crate::components::mesh::SphereMesh;
    use crate::components::node::SceneNode;
    use crate::components::points::PointCloud;
    use glam::Vec3;

    #[test]
    fn mesh_instance_is_twelve_floats() {
        assert_eq!(
            std::mem::size_of::<MeshInstance>(),
            MeshInstance::FLOATS * 4
        );
        assert_eq!(std::mem::size_of::<PackedLight>(), PackedLight::FLOATS * 4);
    }

    #[test]
    fn build_buffer_emits_only_meshes() {
        let mut scene = Scene::new();
        scene.spawn(
            SceneNode::new(NodeId(1), NodeKind::Mesh(SphereMesh::new(5.0, Color::from_hex(0xFFFF00))))
                .with_position(Vec3::new(0.0, 0.0, -20.0)),
        );
        scene.spawn(SceneNode::new(
            NodeId(2),
            NodeKind::Light(Light::ambient(Color::WHITE, 1.0)),
        ));
        scene.spawn(SceneNode::new(
            NodeId(3),
            NodeKind::Points(PointCloud::new(vec![Vec3::ZERO], Color::WHITE)),
        ));

        let mut buffer = MeshBuffer::with_capacity(8);
        build_mesh_buffer(&scene, &mut buffer);
        assert_eq!(buffer.instance_count(), 1);
    }

    #[test]
    fn buffer_clamps_at_capacity() {
        let mut buffer = MeshBuffer::with_capacity(2);
        for _ in 0..5 {
            buffer.push(MeshInstance::default());
        }
        assert_eq!(buffer.instance_count(), 2);
    }

    #[test]
    fn pack_lights_kinds_and_position() {
        let mut scene = Scene::new();
        scene.spawn(SceneNode::new(
            NodeId(1),
            NodeKind::Light(Light::ambient(Color::from_hex(0x404040), 1.0)),
        ));
        scene.spawn(
            SceneNode::new(NodeId(2), NodeKind::Light(Light::point(Color::WHITE, 1.0, 100.0)))
                .with_position(Vec3::new(0.0, 0.0, -20.0)),
        );

        let lights = pack_lights(&scene, 8);
        assert_eq!(lights.len(), 2);
        assert_eq!(lights[0].kind, PackedLight::KIND_AMBIENT);
        assert_eq!(lights[1].kind, PackedLight::KIND_POINT);
        assert_eq!(lights[1].z, -20.0);
        assert_eq!(lights[1].range, 100.0);
    }

    #[test]
    fn pack_lights_clamps_at_capacity() {
        let mut scene = Scene::new();
        for i in 0..4 {
            scene.spawn(SceneNode::new(
                NodeId(i),
                NodeKind::Light(Light::ambient(Color::WHITE, 1.0)),
            ));
        }
        assert_eq!(pack_lights(&scene, 2).len(), 2);
    }

    #[test]
    fn pack_point_positions_interleaves_xyz() {
        let points = PointCloud::new(
            vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)],
            Color::WHITE,
        );
        assert_eq!(
            pack_point_positions(&points),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
        );
    }
}
