use glam::Vec3;

use crate::api::types::NodeId;
use crate::components::light::Light;
use crate::components::mesh::SphereMesh;
use crate::components::points::PointCloud;

/// What a scene node is. One closed set of kinds instead of string type
/// tags, so dispatch is a match rather than a comparison.
#[derive(Debug, Clone)]
pub enum NodeKind {
    Mesh(SphereMesh),
    Points(PointCloud),
    Light(Light),
}

/// A scene graph member: shared transform plus a kind-specific payload.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Unique identifier.
    pub id: NodeId,
    /// String tag for finding nodes by name.
    pub tag: String,
    /// Position in world space.
    pub position: Vec3,
    /// Rotation around the Y axis in radians.
    pub rotation_y: f32,
    pub kind: NodeKind,
}

impl SceneNode {
    /// Create a new node with the given ID and payload at the origin.
    pub fn new(id: NodeId, kind: NodeKind) -> Self {
        Self {
            id,
            tag: String::new(),
            position: Vec3::ZERO,
            rotation_y: 0.0,
            kind,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    // -- Kind accessors --

    pub fn is_mesh(&self) -> bool {
        matches!(self.kind, NodeKind::Mesh(_))
    }

    pub fn as_mesh(&self) -> Option<&SphereMesh> {
        match &self.kind {
            NodeKind::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    pub fn as_mesh_mut(&mut self) -> Option<&mut SphereMesh> {
        match &mut self.kind {
            NodeKind::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    pub fn as_points(&self) -> Option<&PointCloud> {
        match &self.kind {
            NodeKind::Points(points) => Some(points),
            _ => None,
        }
    }

    pub fn as_light(&self) -> Option<&Light> {
        match &self.kind {
            NodeKind::Light(light) => Some(light),
            _ => None,
        }
    }
}
