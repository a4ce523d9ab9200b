use glam::Vec3;

use crate::api::types::Color;

/// A point-cloud primitive: many positions drawn with one material.
/// Static after creation — the starfield never moves.
#[derive(Debug, Clone)]
pub struct PointCloud {
    pub positions: Vec<Vec3>,
    pub color: Color,
}

impl PointCloud {
    pub fn new(positions: Vec<Vec3>, color: Color) -> Self {
        Self { positions, color }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
