//! Decorative particle trail that follows pointer and touch movement,
//! drawn on a full-viewport canvas behind the page content.
//!
//! The particle model ([`Trail`], [`Particle`]) is plain Rust and runs on any
//! target; the browser glue is only compiled for `wasm32`.

mod config;
mod error;
mod particle;
mod surface;
mod trail;

pub use config::TrailConfig;
pub use error::TrailError;
pub use particle::{Particle, Rgba};
pub use surface::{Point, Surface, Viewport};
pub use trail::Trail;

#[cfg(target_arch = "wasm32")]
pub use wasm::{start_trail, stop_trail, TrailHandle};

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use crate::{Trail, TrailConfig, TrailError};

    mod dom;
    mod input;
    mod render;

    thread_local! {
        static ACTIVE: RefCell<Option<TrailHandle>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let document = dom::document()?;
        if document.ready_state() == "loading" {
            let on_ready = Closure::once_into_js(move || install());
            document
                .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        } else {
            install();
        }
        Ok(())
    }

    /// Installs the page's trail, replacing (and stopping) any earlier one.
    fn install() {
        match start_trail() {
            Ok(handle) => {
                ACTIVE.with(|active| active.borrow_mut().replace(handle));
            }
            Err(err) => log::error!("particle trail disabled: {:?}", err),
        }
    }

    /// Stops the trail installed at page load, if any.
    #[wasm_bindgen(js_name = stopTrail)]
    pub fn stop_trail() {
        if let Some(mut handle) = ACTIVE.with(|active| active.borrow_mut().take()) {
            handle.stop();
        }
    }

    /// Creates a backdrop canvas and starts a trail on it.
    ///
    /// The trail runs until [`TrailHandle::stop`] is called or the handle is
    /// dropped.
    #[wasm_bindgen(js_name = startTrail)]
    pub fn start_trail() -> Result<TrailHandle, JsValue> {
        Ok(TrailHandle::start()?)
    }

    /// Owns a running trail: its frame loop, listeners and canvas.
    #[wasm_bindgen]
    pub struct TrailHandle {
        trail: Rc<RefCell<Trail<SmallRng>>>,
        frames: render::FrameLoop,
        listeners: Vec<dom::Listener>,
        canvas: HtmlCanvasElement,
    }

    impl TrailHandle {
        fn start() -> Result<Self, TrailError> {
            let window = dom::window()?;
            let document = dom::document()?;
            let (canvas, ctx) = dom::create_canvas(&document)?;

            let viewport = dom::viewport(&window)?;
            dom::fit_canvas(&canvas, viewport);

            let seed = js_sys::Date::now().to_bits()
                ^ (js_sys::Math::random() * u64::MAX as f64) as u64;
            let trail = Rc::new(RefCell::new(Trail::new(
                TrailConfig::default(),
                viewport,
                SmallRng::seed_from_u64(seed),
            )));

            let resize = {
                let canvas = canvas.clone();
                let trail = trail.clone();
                let win = window.clone();
                dom::Listener::new(&window, "resize", move |_| match dom::viewport(&win) {
                    Ok(viewport) => {
                        log::debug!("resize to {}x{}", viewport.width, viewport.height);
                        dom::fit_canvas(&canvas, viewport);
                        trail.borrow_mut().resize(viewport.width, viewport.height);
                    }
                    Err(err) => log::error!("cannot read viewport: {}", err),
                })?
            };
            let mut listeners = input::listen(&document, &trail)?;
            listeners.push(resize);

            let frames = render::FrameLoop::start(trail.clone(), render::CanvasSurface::new(ctx))?;
            log::info!(
                "particle trail started at {}x{}",
                viewport.width,
                viewport.height
            );

            Ok(Self {
                trail,
                frames,
                listeners,
                canvas,
            })
        }
    }

    #[wasm_bindgen]
    impl TrailHandle {
        /// Halts the frame loop and detaches the input and resize listeners.
        /// The canvas keeps its last frame.
        pub fn stop(&mut self) {
            let was_running = self.frames.is_running();
            self.frames.stop();
            self.listeners.clear();
            if was_running {
                log::info!("particle trail stopped");
            }
        }

        #[wasm_bindgen(js_name = isRunning)]
        pub fn is_running(&self) -> bool {
            self.frames.is_running()
        }

        #[wasm_bindgen(js_name = particleCount)]
        pub fn particle_count(&self) -> usize {
            self.trail.borrow().len()
        }

        #[wasm_bindgen(getter)]
        pub fn canvas(&self) -> HtmlCanvasElement {
            self.canvas.clone()
        }
    }
}
