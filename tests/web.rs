// Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use rust_wasm_starfield::app::{slowdown_starter, App};
use rust_wasm_starfield::config::StarfieldConfig;
use rust_wasm_starfield::dom_helpers;
use rust_wasm_starfield::error::StarfieldError;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn add_canvas(id: &str) -> HtmlCanvasElement {
    let document = dom_helpers::document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        dom_helpers::set_timeout(&resolve, ms).unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn missing_canvas_is_reported() {
    let err = dom_helpers::canvas_by_id("no-such-canvas").unwrap_err();
    assert!(matches!(err, StarfieldError::CanvasNotFound(_)));
    assert!(rust_wasm_starfield::start("no-such-canvas").is_err());
}

#[wasm_bindgen_test]
fn non_canvas_element_is_rejected() {
    let document = dom_helpers::document().unwrap();
    let div = document.create_element("div").unwrap();
    div.set_id("not-a-canvas");
    document.body().unwrap().append_child(&div).unwrap();

    let err = dom_helpers::canvas_by_id("not-a-canvas").unwrap_err();
    assert!(matches!(err, StarfieldError::NotACanvas(_)));
}

#[wasm_bindgen_test]
fn start_sizes_canvas_to_the_window() {
    let canvas = add_canvas("starsCanvas");
    rust_wasm_starfield::start("starsCanvas").unwrap();

    let (width, height) = dom_helpers::viewport_size().unwrap();
    assert_eq!(canvas.width(), width as u32);
    assert_eq!(canvas.height(), height as u32);
}

#[wasm_bindgen_test]
fn start_with_config_rejects_bad_config() {
    add_canvas("configuredCanvas");
    let result = rust_wasm_starfield::start_with_config("configuredCanvas", "[stars]\ncount = 0");
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn app_boosts_and_slows_down() {
    add_canvas("appCanvas");
    let mut app = rust_wasm_starfield::app::App::new(
        "appCanvas",
        rust_wasm_starfield::config::StarfieldConfig::default(),
    )
    .unwrap();
    let noop = js_sys::Function::new_no_args("");

    app.key_pressed("a", &noop).unwrap();
    app.frame(0.0).unwrap();
    let boosted = app.starfield().particles();
    assert!(boosted.iter().all(|p| p.speed_multiplier >= 1.5));

    app.start_slowdown().unwrap();
    app.frame(dom_helpers::now().unwrap() + 20_000.0).unwrap();
    let settled = app.starfield().particles();
    assert!(settled.iter().all(|p| p.speed_multiplier == 1.0));
}

#[wasm_bindgen_test]
async fn second_keypress_restarts_inactivity_timer() {
    add_canvas("timerCanvas");
    let config = StarfieldConfig::from_toml("[boost]\ninactivity_delay_ms = 200").unwrap();
    let app = Rc::new(RefCell::new(App::new("timerCanvas", config).unwrap()));
    let start_slowdown = slowdown_starter(app.clone());

    app.borrow_mut().key_pressed("a", &start_slowdown).unwrap();
    sleep(120).await;
    app.borrow_mut().key_pressed("b", &start_slowdown).unwrap();
    sleep(120).await;

    // past the first press's delay, but not the second's
    assert_eq!(app.borrow().active_slowdowns(), 0);
    assert!(app.borrow().slowdown_pending());

    sleep(200).await;
    assert_eq!(app.borrow().active_slowdowns(), 1);
    assert!(!app.borrow().slowdown_pending());
}
