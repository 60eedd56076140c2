use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent, TouchEvent};

use super::dom::Listener;
use crate::error::TrailError;
use crate::surface::Point;
use crate::trail::Trail;

/// Subscribes the trail to pointer and touch movement over the document.
pub fn listen<R: Rng + 'static>(
    document: &Document,
    trail: &Rc<RefCell<Trail<R>>>,
) -> Result<Vec<Listener>, TrailError> {
    let mouse = {
        let trail = trail.clone();
        Listener::new(document, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                trail
                    .borrow_mut()
                    .pointer_moved(event.client_x() as f64, event.client_y() as f64);
            }
        })?
    };

    let touch = {
        let trail = trail.clone();
        Listener::new(document, "touchmove", move |event| {
            if let Some(event) = event.dyn_ref::<TouchEvent>() {
                let first = event
                    .touches()
                    .get(0)
                    .map(|t| Point::new(t.client_x() as f64, t.client_y() as f64));
                trail.borrow_mut().touch_moved(first);
            }
        })?
    };

    Ok(vec![mouse, touch])
}
