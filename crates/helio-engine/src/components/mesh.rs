use crate::api::types::Color;

/// A sphere mesh with a Phong-style material.
///
/// `emissive` is the hover-highlight channel: black when idle, set to a
/// fixed gray while a pointer ray intersects the sphere.
#[derive(Debug, Clone, Copy)]
pub struct SphereMesh {
    pub radius: f32,
    pub color: Color,
    pub emissive: Color,
    /// Phong specular exponent.
    pub shininess: f32,
}

impl SphereMesh {
    pub fn new(radius: f32, color: Color) -> Self {
        Self {
            radius,
            color,
            emissive: Color::BLACK,
            shininess: 30.0,
        }
    }
}
