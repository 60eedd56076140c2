use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::Rng;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::CanvasRenderingContext2d;

use super::dom;
use crate::error::TrailError;
use crate::particle::Rgba;
use crate::surface::{Point, Surface, Viewport};
use crate::trail::Trail;

/// [`Surface`] over a 2D canvas context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.begin_path();
        if let Err(err) = self
            .ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)
        {
            log::warn!("arc failed: {:?}", err);
            return;
        }
        self.ctx.fill();
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running `requestAnimationFrame` loop. It reschedules itself every frame
/// until [`FrameLoop::stop`] is called or the loop is dropped.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start<R: Rng + 'static>(
        trail: Rc<RefCell<Trail<R>>>,
        mut surface: CanvasSurface,
    ) -> Result<Self, TrailError> {
        let running = Rc::new(Cell::new(true));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        // `f` holds the frame closure so it can pass itself back to
        // `request_animation_frame` each time it runs.
        let f: FrameCallback = Rc::new(RefCell::new(None));
        let g = f.clone();
        {
            let running = running.clone();
            let pending = pending.clone();
            *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                pending.set(None);
                if !running.get() {
                    return;
                }
                trail.borrow_mut().frame(&mut surface);

                let next = f
                    .borrow()
                    .as_ref()
                    .ok_or_else(|| TrailError::Dom("frame callback released".into()))
                    .and_then(|cb| request_frame(cb));
                match next {
                    Ok(id) => pending.set(Some(id)),
                    Err(err) => {
                        log::error!("cannot schedule next frame: {}", err);
                        running.set(false);
                    }
                }
            }) as Box<dyn FnMut()>));
        }

        let id = request_frame(
            g.borrow()
                .as_ref()
                .ok_or_else(|| TrailError::Dom("frame callback released".into()))?,
        )?;
        pending.set(Some(id));

        Ok(Self {
            running,
            pending,
            callback: g,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Cancels the pending frame and releases the frame closure.
    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            if let Ok(window) = dom::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, TrailError> {
    Ok(dom::window()?.request_animation_frame(callback.as_ref().unchecked_ref())?)
}
