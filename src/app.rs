// Ties the starfield to the page: the animation loop, window resizes,
// keydown boosts and the inactivity timer that starts a slowdown.
// All callbacks share one App and live for as long as the page does.

use crate::config::StarfieldConfig;
use crate::dom_helpers;
use crate::error::StarfieldError;
use crate::renderer::Renderer;
use crate::slowdown::Decay;
use crate::starfield::Starfield;
use crate::utils::Timer;
use js_sys::Function;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, KeyboardEvent};

pub struct App {
    config: StarfieldConfig,
    canvas: HtmlCanvasElement,
    renderer: Renderer,
    starfield: Starfield,
    decay: Decay,
    slowdown_timer: Option<i32>,
}

impl App {
    pub fn new(canvas_id: &str, config: StarfieldConfig) -> Result<App, StarfieldError> {
        let canvas = dom_helpers::canvas_by_id(canvas_id)?;
        let (width, height) = dom_helpers::viewport_size()?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        let renderer = Renderer::new(&canvas)?;

        let mut rng = rand::thread_rng();
        let starfield = Starfield::new(
            &mut rng,
            width,
            height,
            &config.stars,
            config.boost.speed_increment,
        );
        let decay = Decay::new(config.boost.slowdown_duration_ms);
        console_log!(
            "starfield: {} stars on {}x{} canvas '{}'",
            starfield.particles().len(),
            width,
            height,
            canvas_id
        );

        Ok(App {
            config,
            canvas,
            renderer,
            starfield,
            decay,
            slowdown_timer: None,
        })
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn active_slowdowns(&self) -> usize {
        self.decay.active_runs()
    }

    // True while a keypress timer is waiting to start a slowdown
    pub fn slowdown_pending(&self) -> bool {
        self.slowdown_timer.is_some()
    }

    pub fn frame(&mut self, timestamp: f64) -> Result<(), JsValue> {
        let _timer = if self.config.debug.profile_frames {
            Some(Timer::new("App::frame"))
        } else {
            None
        };
        self.decay.advance(&mut self.starfield, timestamp);
        self.renderer
            .clear_screen(self.starfield.width(), self.starfield.height());
        self.starfield.step();
        self.renderer.render_particles(self.starfield.particles())
    }

    pub fn resize(&mut self) -> Result<(), StarfieldError> {
        let (width, height) = dom_helpers::viewport_size()?;
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.starfield.resize(width, height);
        console_log!("starfield: resized to {}x{}", width, height);
        Ok(())
    }

    // Speeds every star up and pushes the slowdown back by the full delay
    pub fn key_pressed(&mut self, key: &str, start_slowdown: &Function) -> Result<(), StarfieldError> {
        self.starfield.boost();
        if self.config.debug.log_events {
            console_log!("starfield: boost from key '{}'", key);
        }

        if let Some(handle) = self.slowdown_timer.take() {
            dom_helpers::clear_timeout(handle)?;
        }
        let delay = self.config.boost.inactivity_delay_ms as i32;
        self.slowdown_timer = Some(dom_helpers::set_timeout(start_slowdown, delay)?);
        Ok(())
    }

    pub fn start_slowdown(&mut self) -> Result<(), StarfieldError> {
        self.slowdown_timer = None;
        let now = dom_helpers::now()?;
        self.decay.start(now);
        if self.config.debug.log_events {
            console_log!(
                "starfield: slowing down ({} runs active)",
                self.decay.active_runs()
            );
        }
        Ok(())
    }
}

pub fn run(canvas_id: &str, config: StarfieldConfig) -> Result<(), StarfieldError> {
    config.validate()?;
    let app = Rc::new(RefCell::new(App::new(canvas_id, config)?));

    listen_for_resize(app.clone())?;
    listen_for_keys(app.clone())?;
    start_animation_loop(app)
}

fn listen_for_resize(app: Rc<RefCell<App>>) -> Result<(), StarfieldError> {
    let on_resize = Closure::wrap(Box::new(move || {
        if let Err(err) = app.borrow_mut().resize() {
            console_warn!("starfield: resize failed: {}", err);
        }
    }) as Box<dyn FnMut()>);
    dom_helpers::add_window_listener("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}

// The callback the inactivity timer fires. Created once and handed to
// setTimeout again on every keypress.
pub fn slowdown_starter(app: Rc<RefCell<App>>) -> Function {
    let start_slowdown = Closure::wrap(Box::new(move || {
        if let Err(err) = app.borrow_mut().start_slowdown() {
            console_warn!("starfield: slowdown failed to start: {}", err);
        }
    }) as Box<dyn FnMut()>);
    let callback: Function = start_slowdown.as_ref().unchecked_ref::<Function>().clone();
    start_slowdown.forget();
    callback
}

fn listen_for_keys(app: Rc<RefCell<App>>) -> Result<(), StarfieldError> {
    let start_slowdown_fn = slowdown_starter(app.clone());

    let on_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if let Err(err) = app
            .borrow_mut()
            .key_pressed(&event.key(), &start_slowdown_fn)
        {
            console_warn!("starfield: keypress not handled: {}", err);
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    dom_helpers::add_window_listener("keydown", on_keydown.as_ref().unchecked_ref())?;
    on_keydown.forget();
    Ok(())
}

fn start_animation_loop(app: Rc<RefCell<App>>) -> Result<(), StarfieldError> {
    // The frame closure has to reschedule itself, so it holds a handle to
    // the slot it lives in
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next_frame = slot.clone();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if let Err(err) = app.borrow_mut().frame(timestamp) {
            console_warn!("starfield: frame failed: {:?}", err);
        }
        if let Some(callback) = next_frame.borrow().as_ref() {
            if let Err(err) = dom_helpers::request_animation_frame(callback.as_ref().unchecked_ref()) {
                console_warn!("starfield: animation stopped: {}", err);
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let scheduled = slot
        .borrow()
        .as_ref()
        .map(|callback| dom_helpers::request_animation_frame(callback.as_ref().unchecked_ref()));
    match scheduled {
        Some(result) => result.map(|_| ()),
        None => Err(StarfieldError::Js("animation callback missing".to_owned())),
    }
}
