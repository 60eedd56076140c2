#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use web_sys::{MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mouse_move(x: i32, y: i32) {
    let init = MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
    document().dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn canvas_is_first_child_behind_content() {
    let mut handle = particle_trail::start_trail().unwrap();
    let canvas = handle.canvas();

    let body = document().body().unwrap();
    let first = body.first_element_child().unwrap();
    let node: &web_sys::Node = canvas.as_ref();
    assert!(first.is_same_node(Some(node)));
    assert_eq!(first.tag_name().to_lowercase(), "canvas");

    let style = canvas.style();
    assert_eq!(style.get_property_value("position").unwrap(), "fixed");
    assert_eq!(style.get_property_value("z-index").unwrap(), "-1");

    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap();
    assert_eq!(canvas.width(), width as u32);

    handle.stop();
}

#[wasm_bindgen_test]
fn pointer_move_adds_one_particle() {
    let mut handle = particle_trail::start_trail().unwrap();
    let before = handle.particle_count();
    mouse_move(100, 100);
    assert_eq!(handle.particle_count(), before + 1);
    handle.stop();
}

#[wasm_bindgen_test]
fn stop_detaches_input_and_halts_loop() {
    let mut handle = particle_trail::start_trail().unwrap();
    assert!(handle.is_running());
    handle.stop();
    assert!(!handle.is_running());

    let before = handle.particle_count();
    mouse_move(10, 10);
    assert_eq!(handle.particle_count(), before);

    // a second stop is a no-op
    handle.stop();
    assert!(!handle.is_running());
}
