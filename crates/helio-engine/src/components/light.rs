use crate::api::types::Color;

/// A light source. Ambient lights have no position of their own; point
/// lights use the position of the node that carries them.
#[derive(Debug, Clone, Copy)]
pub enum Light {
    Ambient {
        color: Color,
        intensity: f32,
    },
    Point {
        color: Color,
        intensity: f32,
        /// Falloff distance in world units.
        range: f32,
    },
}

impl Light {
    pub fn ambient(color: Color, intensity: f32) -> Self {
        Light::Ambient { color, intensity }
    }

    pub fn point(color: Color, intensity: f32, range: f32) -> Self {
        Light::Point {
            color,
            intensity,
            range,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Light::Ambient { color, .. } | Light::Point { color, .. } => *color,
        }
    }

    pub fn intensity(&self) -> f32 {
        match self {
            Light::Ambient { intensity, .. } | Light::Point { intensity, .. } => *intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_cover_both_kinds() {
        let ambient = Light::ambient(Color::from_hex(0x404040), 1.0);
        let point = Light::point(Color::WHITE, 1.0, 100.0);
        assert_eq!(ambient.color().to_hex(), 0x404040);
        assert_eq!(point.intensity(), 1.0);
        match point {
            Light::Point { range, .. } => assert_eq!(range, 100.0),
            Light::Ambient { .. } => panic!("expected point light"),
        }
    }
}
