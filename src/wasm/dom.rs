use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    CanvasRenderingContext2d, Document, Event, EventTarget, HtmlCanvasElement, Window,
};

use crate::error::TrailError;
use crate::surface::Viewport;

pub fn window() -> Result<Window, TrailError> {
    web_sys::window().ok_or(TrailError::NoWindow)
}

pub fn document() -> Result<Document, TrailError> {
    window()?.document().ok_or(TrailError::NoDocument)
}

/// Current `innerWidth` x `innerHeight`.
pub fn viewport(window: &Window) -> Result<Viewport, TrailError> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or(TrailError::Viewport("width"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or(TrailError::Viewport("height"))?;
    Ok(Viewport::new(width, height))
}

/// Creates the backdrop canvas as the first child of `<body>`, fixed over
/// the whole viewport and stacked behind the page content.
pub fn create_canvas(
    document: &Document,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), TrailError> {
    let body = document.body().ok_or(TrailError::NoBody)?;
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| TrailError::Dom("created element is not a canvas".into()))?;
    body.prepend_with_node_1(&canvas)?;

    let style = canvas.style();
    for (name, value) in [
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("z-index", "-1"),
        ("pointer-events", "none"),
    ] {
        style.set_property(name, value)?;
    }

    let ctx = canvas
        .get_context("2d")?
        .ok_or(TrailError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| TrailError::NoContext)?;
    Ok((canvas, ctx))
}

/// Sizes the drawing buffer; this also wipes whatever was drawn.
pub fn fit_canvas(canvas: &HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width(viewport.width as u32);
    canvas.set_height(viewport.height as u32);
}

/// An attached event listener, detached again on drop.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        kind: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self, TrailError> {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}
