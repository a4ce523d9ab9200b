pub mod runner;

pub use runner::AppRunner;

/// Generate all `#[wasm_bindgen]` exports for an app.
///
/// Generates:
/// - `thread_local!` storage for the AppRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (app_init, app_frame, input handlers,
///   data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use helio_web::AppRunner;
///
/// mod demo;
/// use demo::MyDemo;
///
/// helio_web::export_app!(MyDemo, "my-demo");
/// ```
///
/// # Arguments
///
/// - `$app_type`: The app struct type that implements `helio_engine::App`
/// - `$app_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_app {
    ($app_type:ty, $app_name:literal) => {
        use std::cell::RefCell;

        use helio_engine::InputEvent;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::AppRunner<$app_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::AppRunner<$app_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("App not initialized. Call app_init() first.");
                f(runner)
            })
        }

        fn create_runner() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let app = <$app_type>::new();
            let runner = $crate::AppRunner::new(app);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
        }

        #[wasm_bindgen]
        pub fn app_init() {
            create_runner();
            with_runner(|r| r.init());
            log::info!("{}: initialized", $app_name);
        }

        /// Like `app_init`, but with a JSON config override applied before
        /// the scene is built. A malformed blob is logged and ignored.
        #[wasm_bindgen]
        pub fn app_init_with_config(json: &str) {
            create_runner();
            with_runner(|r| {
                r.load_config(json);
                r.init();
            });
            log::info!("{}: initialized", $app_name);
        }

        /// One animation frame at the given wall-clock time (seconds).
        /// Returns false once the app has been stopped; the host must then
        /// stop scheduling further frames.
        #[wasm_bindgen]
        pub fn app_frame(now_seconds: f64) -> bool {
            with_runner(|r| r.frame(now_seconds))
        }

        #[wasm_bindgen]
        pub fn app_stop() {
            with_runner(|r| r.stop());
        }

        #[wasm_bindgen]
        pub fn app_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn app_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_stars_ptr() -> *const f32 {
            with_runner(|r| r.stars_ptr())
        }

        #[wasm_bindgen]
        pub fn get_star_count() -> u32 {
            with_runner(|r| r.star_count())
        }

        #[wasm_bindgen]
        pub fn get_mesh_instances_ptr() -> *const f32 {
            with_runner(|r| r.mesh_instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_mesh_instance_count() -> u32 {
            with_runner(|r| r.mesh_instance_count())
        }

        #[wasm_bindgen]
        pub fn get_lights_ptr() -> *const f32 {
            with_runner(|r| r.lights_ptr())
        }

        #[wasm_bindgen]
        pub fn get_light_count() -> u32 {
            with_runner(|r| r.light_count())
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr())
        }

        #[wasm_bindgen]
        pub fn get_ambient_r() -> f32 {
            with_runner(|r| r.ambient_r())
        }

        #[wasm_bindgen]
        pub fn get_ambient_g() -> f32 {
            with_runner(|r| r.ambient_g())
        }

        #[wasm_bindgen]
        pub fn get_ambient_b() -> f32 {
            with_runner(|r| r.ambient_b())
        }

        #[wasm_bindgen]
        pub fn get_viewport_width() -> f32 {
            with_runner(|r| r.viewport_width())
        }

        #[wasm_bindgen]
        pub fn get_viewport_height() -> f32 {
            with_runner(|r| r.viewport_height())
        }

        #[wasm_bindgen]
        pub fn get_frame_count() -> u32 {
            with_runner(|r| r.frame_count())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_meshes() -> u32 {
            with_runner(|r| r.max_meshes())
        }

        #[wasm_bindgen]
        pub fn get_max_lights() -> u32 {
            with_runner(|r| r.max_lights())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
