//! Scene constants: body sizes, colors, orbits, lights.

use glam::Vec3;
use helio_engine::CircularOrbit;

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 5.0;
pub const SUN_COLOR: u32 = 0xFFFF00;
pub const SUN_POS: Vec3 = Vec3::new(0.0, 0.0, -20.0);

// ── Planets ──────────────────────────────────────────────────────────

pub const EARTH_RADIUS: f32 = 1.0;
pub const EARTH_COLOR: u32 = 0x0000FF;

pub const MARS_RADIUS: f32 = 0.8;
pub const MARS_COLOR: u32 = 0xFF0000;

/// Earth: circle of radius 10 centered at z = -20, 0.3 rad/s, spinning
/// 0.01 rad per frame.
pub fn earth_orbit() -> CircularOrbit {
    CircularOrbit {
        radius: 10.0,
        angular_speed: 0.3,
        center: Vec3::new(0.0, 0.0, -20.0),
        spin_step: 0.01,
    }
}

/// Mars: circle of radius 8 centered at z = -18, 0.2 rad/s, spinning
/// 0.008 rad per frame. Spawned at y = 2 and stays there.
pub fn mars_orbit() -> CircularOrbit {
    CircularOrbit {
        radius: 8.0,
        angular_speed: 0.2,
        center: Vec3::new(0.0, 2.0, -18.0),
        spin_step: 0.008,
    }
}

// ── Lights ───────────────────────────────────────────────────────────

pub const AMBIENT_COLOR: u32 = 0x404040;
pub const AMBIENT_INTENSITY: f32 = 1.0;

pub const SUN_LIGHT_INTENSITY: f32 = 1.0;
pub const SUN_LIGHT_RANGE: f32 = 100.0;

// ── Starfield ────────────────────────────────────────────────────────

pub const STAR_SEED: u64 = 42;
