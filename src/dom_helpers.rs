// Helper functions for dealing with the host page: looking up the window,
// document and canvas, reading the viewport size, and scheduling callbacks

use crate::error::StarfieldError;
use js_sys::Function;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

pub fn window() -> Result<Window, StarfieldError> {
    web_sys::window().ok_or(StarfieldError::NoWindow)
}

pub fn document() -> Result<Document, StarfieldError> {
    window()?.document().ok_or(StarfieldError::NoDocument)
}

pub fn canvas_by_id(id: &str) -> Result<HtmlCanvasElement, StarfieldError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| StarfieldError::CanvasNotFound(id.to_owned()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| StarfieldError::NotACanvas(id.to_owned()))
}

// Inner size of the window in CSS pixels
pub fn viewport_size() -> Result<(f64, f64), StarfieldError> {
    let window = window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

// Milliseconds on the same clock animation frames are stamped with
pub fn now() -> Result<f64, StarfieldError> {
    let performance = window()?
        .performance()
        .ok_or_else(|| StarfieldError::Js("window.performance is unavailable".to_owned()))?;
    Ok(performance.now())
}

pub fn request_animation_frame(callback: &Function) -> Result<i32, StarfieldError> {
    Ok(window()?.request_animation_frame(callback)?)
}

pub fn set_timeout(callback: &Function, delay_ms: i32) -> Result<i32, StarfieldError> {
    Ok(window()?.set_timeout_with_callback_and_timeout_and_arguments_0(callback, delay_ms)?)
}

pub fn clear_timeout(handle: i32) -> Result<(), StarfieldError> {
    window()?.clear_timeout_with_handle(handle);
    Ok(())
}

pub fn add_window_listener(event: &str, callback: &Function) -> Result<(), StarfieldError> {
    Ok(window()?.add_event_listener_with_callback(event, callback)?)
}
