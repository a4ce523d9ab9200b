use helio_engine::renderer::instance::{
    build_mesh_buffer, pack_lights, pack_point_positions,
};
use helio_engine::{
    App, AppConfig, AppContext, CameraUniform, FrameClock, InputEvent, InputQueue, MeshBuffer,
    NodeKind, PackedLight, ProtocolLayout,
};

/// Generic app runner that wires up the engine loop.
///
/// Each concrete demo creates a `thread_local!` AppRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly. The host's requestAnimationFrame loop calls
/// `frame()` once per display refresh and keeps scheduling itself for as
/// long as `frame()` returns true.
pub struct AppRunner<A: App> {
    app: A,
    ctx: AppContext,
    input: InputQueue,
    clock: FrameClock,
    config: AppConfig,
    layout: ProtocolLayout,
    initialized: bool,
    running: bool,
    /// Flat star positions, packed once at init (the starfield is static).
    star_buffer: Vec<f32>,
    mesh_buffer: MeshBuffer,
    lights: Vec<PackedLight>,
    ambient: [f32; 3],
    camera_uniform: CameraUniform,
}

impl<A: App> AppRunner<A> {
    pub fn new(app: A) -> Self {
        let config = app.config();
        let layout = ProtocolLayout::from_config(&config);
        let ctx = AppContext::new(&config);
        let mesh_buffer = MeshBuffer::with_capacity(config.max_meshes);
        let camera_uniform = ctx.camera.uniform();

        Self {
            app,
            ctx,
            input: InputQueue::new(),
            clock: FrameClock::new(),
            config,
            layout,
            initialized: false,
            running: true,
            star_buffer: Vec::new(),
            mesh_buffer,
            lights: Vec::new(),
            ambient: [0.0; 3],
            camera_uniform,
        }
    }

    /// Override the app's config from a JSON blob. Call before `init`.
    /// A parse failure keeps the current config.
    pub fn load_config(&mut self, json: &str) {
        match AppConfig::from_json(json) {
            Ok(config) => {
                self.layout = ProtocolLayout::from_config(&config);
                self.config = config;
            }
            Err(err) => log::warn!("config JSON rejected: {err}"),
        }
    }

    /// Initialize the app. Call once after construction.
    pub fn init(&mut self) {
        self.ctx = AppContext::new(&self.config);
        self.mesh_buffer = MeshBuffer::with_capacity(self.config.max_meshes);
        self.app.init(&mut self.ctx);

        // Star positions are written once; the point cloud never mutates.
        self.star_buffer = self
            .ctx
            .scene
            .iter()
            .find_map(|node| match &node.kind {
                NodeKind::Points(points) => Some(pack_point_positions(points)),
                _ => None,
            })
            .unwrap_or_default();

        self.rebuild_frame_buffers();
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Request a clean stop: the next `frame()` call returns false and the
    /// host stops rescheduling the animation loop.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Run one frame at the given wall-clock time in seconds.
    /// Returns false once stopped.
    pub fn frame(&mut self, now_seconds: f64) -> bool {
        if !self.running {
            return false;
        }
        if !self.initialized {
            return true;
        }

        // Viewport changes are an engine concern; pointer events stay in
        // the queue for the app to handle in arrival order.
        for event in self.input.iter() {
            if let InputEvent::Resize { width, height } = *event {
                self.ctx.resize(width, height);
            }
        }

        let frame = self.clock.tick(now_seconds);
        self.app.update(&mut self.ctx, frame, &self.input);
        self.input.drain();

        self.rebuild_frame_buffers();
        true
    }

    fn rebuild_frame_buffers(&mut self) {
        build_mesh_buffer(&self.ctx.scene, &mut self.mesh_buffer);
        self.lights = pack_lights(&self.ctx.scene, self.config.max_lights);
        self.camera_uniform = self.ctx.camera.uniform();

        self.ambient = [0.0; 3];
        for node in self.ctx.scene.iter() {
            if let NodeKind::Light(helio_engine::Light::Ambient { color, intensity }) = &node.kind {
                self.ambient = [
                    color.r * intensity,
                    color.g * intensity,
                    color.b * intensity,
                ];
            }
        }
    }

    /// Shared access for apps' own integration tests.
    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn stars_ptr(&self) -> *const f32 {
        self.star_buffer.as_ptr()
    }

    pub fn star_count(&self) -> u32 {
        (self.star_buffer.len() / 3) as u32
    }

    pub fn mesh_instances_ptr(&self) -> *const f32 {
        self.mesh_buffer.instances_ptr()
    }

    pub fn mesh_instance_count(&self) -> u32 {
        self.mesh_buffer.instance_count()
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }

    pub fn light_count(&self) -> u32 {
        self.lights.len() as u32
    }

    pub fn camera_ptr(&self) -> *const f32 {
        self.camera_uniform.view_proj.as_ptr() as *const f32
    }

    pub fn ambient_r(&self) -> f32 {
        self.ambient[0]
    }

    pub fn ambient_g(&self) -> f32 {
        self.ambient[1]
    }

    pub fn ambient_b(&self) -> f32 {
        self.ambient[2]
    }

    pub fn viewport_width(&self) -> f32 {
        self.ctx.viewport.width
    }

    pub fn viewport_height(&self) -> f32 {
        self.ctx.viewport.height
    }

    pub fn frame_count(&self) -> u32 {
        self.clock.frames() as u32
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_meshes(&self) -> u32 {
        self.layout.max_meshes as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use helio_engine::{Color, FrameTime, Light, PointCloud, SceneNode, SphereMesh};

    struct TestApp;

    impl App for TestApp {
        fn config(&self) -> AppConfig {
            AppConfig {
                star_count: 10,
                ..AppConfig::default()
            }
        }

        fn init(&mut self, ctx: &mut AppContext) {
            let id = ctx.next_id();
            ctx.scene.spawn(SceneNode::new(
                id,
                NodeKind::Points(PointCloud::new(vec![Vec3::ZERO; 10], Color::WHITE)),
            ));
            let id = ctx.next_id();
            ctx.scene.spawn(
                SceneNode::new(id, NodeKind::Mesh(SphereMesh::new(5.0, Color::WHITE)))
                    .with_position(Vec3::new(0.0, 0.0, -20.0)),
            );
            let id = ctx.next_id();
            ctx.scene.spawn(SceneNode::new(
                id,
                NodeKind::Light(Light::ambient(Color::from_hex(0x404040), 1.0)),
            ));
        }

        fn update(&mut self, _ctx: &mut AppContext, _frame: FrameTime, _input: &InputQueue) {}
    }

    #[test]
    fn init_packs_static_star_buffer() {
        let mut runner = AppRunner::new(TestApp);
        runner.init();
        assert_eq!(runner.star_count(), 10);
        assert_eq!(runner.mesh_instance_count(), 1);
        assert_eq!(runner.light_count(), 1);
    }

    #[test]
    fn resize_event_updates_camera_and_viewport() {
        let mut runner = AppRunner::new(TestApp);
        runner.init();
        runner.push_input(InputEvent::Resize {
            width: 1024.0,
            height: 512.0,
        });
        assert!(runner.frame(0.016));
        assert_eq!(runner.viewport_width(), 1024.0);
        assert_eq!(runner.viewport_height(), 512.0);
        assert!((runner.context().camera.aspect - 2.0).abs() < 1e-6);
    }

    #[test]
    fn resize_applies_before_pointer_normalization() {
        struct PointerApp {
            seen: std::rc::Rc<std::cell::RefCell<Vec<(f32, f32)>>>,
        }

        impl App for PointerApp {
            fn init(&mut self, _ctx: &mut AppContext) {}

            fn update(&mut self, ctx: &mut AppContext, _frame: FrameTime, input: &InputQueue) {
                for event in input.iter() {
                    if let InputEvent::PointerMove { x, y } = *event {
                        let ndc = ctx.viewport.to_ndc(x, y);
                        self.seen.borrow_mut().push((ndc.x, ndc.y));
                    }
                }
            }
        }

        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut runner = AppRunner::new(PointerApp { seen: seen.clone() });
        runner.init();
        // Pointer arrives before the resize, but within one frame the new
        // viewport wins: the pointer is normalized against 1024x512.
        runner.push_input(InputEvent::PointerMove { x: 512.0, y: 256.0 });
        runner.push_input(InputEvent::Resize {
            width: 1024.0,
            height: 512.0,
        });
        assert!(runner.frame(0.016));
        let (nx, ny) = seen.borrow()[0];
        assert!(nx.abs() < 1e-6);
        assert!(ny.abs() < 1e-6);
    }

    #[test]
    fn stop_ends_the_loop() {
        let mut runner = AppRunner::new(TestApp);
        runner.init();
        assert!(runner.frame(0.0));
        runner.stop();
        assert!(!runner.frame(0.016));
    }

    #[test]
    fn frame_count_advances_per_frame() {
        let mut runner = AppRunner::new(TestApp);
        runner.init();
        assert_eq!(runner.frame_count(), 0);
        runner.frame(0.0);
        runner.frame(0.016);
        runner.frame(0.033);
        assert_eq!(runner.frame_count(), 3);
    }

    #[test]
    fn bad_config_json_keeps_previous_config() {
        let mut runner = AppRunner::new(TestApp);
        let before = runner.buffer_total_floats();
        runner.load_config("{ nope");
        assert_eq!(runner.buffer_total_floats(), before);

        runner.load_config(r#"{ "max_meshes": 2 }"#);
        assert_eq!(runner.max_meshes(), 2);
    }

    #[test]
    fn ambient_accessor_scales_by_intensity() {
        let mut runner = AppRunner::new(TestApp);
        runner.init();
        let expected = Color::from_hex(0x404040).r;
        assert!((runner.ambient_r() - expected).abs() < 1e-6);
        assert!((runner.ambient_g() - expected).abs() < 1e-6);
    }
}
