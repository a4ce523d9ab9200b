//! The orrery scene: a starfield, the sun, and two planets circling it,
//! with hover highlighting under the pointer.

use glam::Vec3;
use helio_engine::systems::highlight::highlight_hover;
use helio_engine::systems::starfield::{generate_starfield, StarfieldParams};
use helio_engine::{
    App, AppContext, CircularOrbit, Color, FrameTime, InputEvent, InputQueue, Light, NodeId,
    NodeKind, Rng, SceneNode, SphereMesh,
};

use crate::bodies;

pub struct Orrery {
    earth: Option<NodeId>,
    mars: Option<NodeId>,
    earth_orbit: CircularOrbit,
    mars_orbit: CircularOrbit,
}

impl Orrery {
    pub fn new() -> Self {
        Self {
            earth: None,
            mars: None,
            earth_orbit: bodies::earth_orbit(),
            mars_orbit: bodies::mars_orbit(),
        }
    }

    /// Parameterized planet constructor: sphere mesh at a radius, color,
    /// and position, added to the scene.
    fn spawn_planet(
        ctx: &mut AppContext,
        tag: &str,
        radius: f32,
        color_hex: u32,
        position: Vec3,
    ) -> NodeId {
        let id = ctx.next_id();
        ctx.scene.spawn(
            SceneNode::new(
                id,
                NodeKind::Mesh(SphereMesh::new(radius, Color::from_hex(color_hex))),
            )
            .with_tag(tag)
            .with_position(position),
        );
        id
    }
}

impl Default for Orrery {
    fn default() -> Self {
        Self::new()
    }
}

impl App for Orrery {
    fn init(&mut self, ctx: &mut AppContext) {
        // ── Starfield background ─────────────────────────────────────
        let mut rng = Rng::new(bodies::STAR_SEED);
        let stars = generate_starfield(
            &mut rng,
            &StarfieldParams {
                count: ctx.config.star_count,
                spread: ctx.config.star_spread,
                depth: ctx.config.star_spread,
                color: Color::WHITE,
            },
        );
        let id = ctx.next_id();
        ctx.scene
            .spawn(SceneNode::new(id, NodeKind::Points(stars)).with_tag("stars"));

        // ── Sun and planets ──────────────────────────────────────────
        Self::spawn_planet(ctx, "sun", bodies::SUN_RADIUS, bodies::SUN_COLOR, bodies::SUN_POS);
        self.earth = Some(Self::spawn_planet(
            ctx,
            "earth",
            bodies::EARTH_RADIUS,
            bodies::EARTH_COLOR,
            self.earth_orbit.position_at(0.0),
        ));
        self.mars = Some(Self::spawn_planet(
            ctx,
            "mars",
            bodies::MARS_RADIUS,
            bodies::MARS_COLOR,
            self.mars_orbit.position_at(0.0),
        ));

        // ── Lights ───────────────────────────────────────────────────
        let id = ctx.next_id();
        ctx.scene.spawn(SceneNode::new(
            id,
            NodeKind::Light(Light::ambient(
                Color::from_hex(bodies::AMBIENT_COLOR),
                bodies::AMBIENT_INTENSITY,
            )),
        ));
        let id = ctx.next_id();
        ctx.scene.spawn(
            SceneNode::new(
                id,
                NodeKind::Light(Light::point(
                    Color::WHITE,
                    bodies::SUN_LIGHT_INTENSITY,
                    bodies::SUN_LIGHT_RANGE,
                )),
            )
            .with_tag("sunlight")
            .with_position(bodies::SUN_POS),
        );
    }

    fn update(&mut self, ctx: &mut AppContext, frame: FrameTime, input: &InputQueue) {
        // Hover highlighting, once per pointer-move event
        for event in input.iter() {
            if let InputEvent::PointerMove { x, y } = *event {
                let ndc = ctx.viewport.to_ndc(x, y);
                highlight_hover(&mut ctx.scene, &ctx.camera, ndc);
            }
        }

        // Orbital motion + per-frame spin
        for (id, orbit) in [(self.earth, self.earth_orbit), (self.mars, self.mars_orbit)] {
            if let Some(node) = id.and_then(|id| ctx.scene.get_mut(id)) {
                orbit.advance(node, frame.now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helio_engine::systems::highlight::HOVER_EMISSIVE;

    fn init_demo() -> (Orrery, AppContext) {
        let mut demo = Orrery::new();
        let mut ctx = AppContext::new(&demo.config());
        demo.init(&mut ctx);
        (demo, ctx)
    }

    fn frame_at(now: f64, frame: u64) -> FrameTime {
        FrameTime {
            now,
            dt: 1.0 / 60.0,
            frame,
        }
    }

    fn emissive_of(ctx: &AppContext, tag: &str) -> Color {
        ctx.scene
            .find_by_tag(tag)
            .and_then(|n| n.as_mesh())
            .unwrap()
            .emissive
    }

    #[test]
    fn startup_scene_contents() {
        let (_, ctx) = init_demo();
        assert_eq!(ctx.scene.point_cloud_count(), 1);
        assert_eq!(ctx.scene.mesh_count(), 3);
        assert_eq!(ctx.scene.light_count(), 2);
        let stars = ctx.scene.find_by_tag("stars").unwrap().as_points().unwrap();
        assert_eq!(stars.len(), 10_000);
    }

    #[test]
    fn earth_stays_on_its_orbit_circle() {
        let (mut demo, mut ctx) = init_demo();
        let empty = InputQueue::new();
        for i in 0..200 {
            demo.update(&mut ctx, frame_at(i as f64 * 0.137, i), &empty);
            let p = ctx.scene.find_by_tag("earth").unwrap().position;
            let z_rel = p.z + 20.0;
            let r2 = p.x * p.x + z_rel * z_rel;
            assert!((r2 - 100.0).abs() < 1e-2, "frame {i}: r² = {r2}");
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn mars_stays_on_its_orbit_circle_at_y_two() {
        let (mut demo, mut ctx) = init_demo();
        let empty = InputQueue::new();
        for i in 0..200 {
            demo.update(&mut ctx, frame_at(i as f64 * 0.311, i), &empty);
            let p = ctx.scene.find_by_tag("mars").unwrap().position;
            let z_rel = p.z + 18.0;
            let r2 = p.x * p.x + z_rel * z_rel;
            assert!((r2 - 64.0).abs() < 1e-2, "frame {i}: r² = {r2}");
            assert_eq!(p.y, 2.0);
        }
    }

    #[test]
    fn spin_counts_frames_not_seconds() {
        let (mut demo, mut ctx) = init_demo();
        let empty = InputQueue::new();
        // Deliberately irregular frame times
        for (i, now) in [0.0, 0.9, 0.91, 2.5].into_iter().enumerate() {
            demo.update(&mut ctx, frame_at(now, i as u64), &empty);
        }
        let earth = ctx.scene.find_by_tag("earth").unwrap();
        let mars = ctx.scene.find_by_tag("mars").unwrap();
        assert!((earth.rotation_y - 4.0 * 0.01).abs() < 1e-6);
        assert!((mars.rotation_y - 4.0 * 0.008).abs() < 1e-6);
    }

    #[test]
    fn hovering_the_sun_highlights_only_the_sun() {
        let (mut demo, mut ctx) = init_demo();
        // Screen center maps to NDC (0, 0): straight at the static sun.
        // At t = 0 earth sits at (10, 0, -20), mars at (-8, 2, -18).
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerMove { x: 400.0, y: 300.0 });
        demo.update(&mut ctx, frame_at(0.0, 0), &input);

        assert_eq!(emissive_of(&ctx, "sun").to_hex(), HOVER_EMISSIVE);
        assert_eq!(emissive_of(&ctx, "earth"), Color::BLACK);
        assert_eq!(emissive_of(&ctx, "mars"), Color::BLACK);
    }

    #[test]
    fn hovering_empty_space_clears_all_highlights() {
        let (mut demo, mut ctx) = init_demo();
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerMove { x: 400.0, y: 300.0 });
        demo.update(&mut ctx, frame_at(0.0, 0), &input);
        assert_eq!(emissive_of(&ctx, "sun").to_hex(), HOVER_EMISSIVE);

        // Top-left corner: the ray leaves every sphere far behind
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerMove { x: 0.0, y: 0.0 });
        demo.update(&mut ctx, frame_at(0.016, 1), &input);

        assert_eq!(emissive_of(&ctx, "sun"), Color::BLACK);
        assert_eq!(emissive_of(&ctx, "earth"), Color::BLACK);
        assert_eq!(emissive_of(&ctx, "mars"), Color::BLACK);
    }
}
