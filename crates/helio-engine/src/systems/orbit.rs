use glam::Vec3;

use crate::components::node::SceneNode;

/// A circular orbit in the XZ plane around a fixed center, plus a
/// per-frame spin around the body's own Y axis.
///
/// The orbital angle is a function of absolute wall-clock time, so the
/// path is frame-rate independent. The spin is not: it advances by
/// `spin_step` radians once per animation frame, reproducing the way the
/// scene has always looked.
#[derive(Debug, Clone, Copy)]
pub struct CircularOrbit {
    pub radius: f32,
    /// Angular speed in radians per (scaled) second.
    pub angular_speed: f32,
    /// Orbit center. Y is carried through unchanged — a body spawned off
    /// the ecliptic keeps orbiting at that height.
    pub center: Vec3,
    /// Y-axis rotation applied per frame, in radians.
    pub spin_step: f32,
}

impl CircularOrbit {
    /// Position on the orbit at wall-clock time `t` seconds.
    pub fn position_at(&self, t: f64) -> Vec3 {
        let angle = t * self.angular_speed as f64;
        Vec3::new(
            angle.cos() as f32 * self.radius + self.center.x,
            self.center.y,
            angle.sin() as f32 * self.radius + self.center.z,
        )
    }

    /// Advance a node by one frame: move it along the orbit and apply the
    /// per-frame spin.
    pub fn advance(&self, node: &mut SceneNode, t: f64) {
        node.position = self.position_at(t);
        node.rotation_y += self.spin_step;
    }
}
