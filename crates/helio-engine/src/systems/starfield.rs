use glam::Vec3;

use crate::api::types::Color;
use crate::components::points::PointCloud;
use crate::systems::rng::Rng;

/// Parameters for the background starfield.
#[derive(Debug, Clone, Copy)]
pub struct StarfieldParams {
    pub count: usize,
    /// Stars span ±spread/2 on X and Y.
    pub spread: f32,
    /// Stars span [-depth, 0] on Z — all in front of the default camera.
    pub depth: f32,
    pub color: Color,
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            count: 10_000,
            spread: 2000.0,
            depth: 2000.0,
            color: Color::WHITE,
        }
    }
}

/// Generate a randomly distributed starfield point cloud.
pub fn generate_starfield(rng: &mut Rng, params: &StarfieldParams) -> PointCloud {
    let mut positions = Vec::with_capacity(params.count);
    for _ in 0..params.count {
        let x = (rng.next_f32() - 0.5) * params.spread;
        let y = (rng.next_f32() - 0.5) * params.spread;
        let z = -rng.next_f32() * params.depth;
        positions.push(Vec3::new(x, y, z));
    }
    PointCloud::new(positions, params.color)
}
