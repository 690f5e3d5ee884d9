// Renderer struct that handles 2D canvas calls: clearing the surface and
// drawing every star as a filled circle in its own color

use crate::error::StarfieldError;
use crate::particle::Particle;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct Renderer {
    pub context: CanvasRenderingContext2d,
}

impl Renderer {
    // Grabs the 2D context from the canvas on the DOM
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, StarfieldError> {
        let context = canvas
            .get_context("2d")?
            .ok_or(StarfieldError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| StarfieldError::ContextUnavailable)?;

        Ok(Renderer { context })
    }

    pub fn clear_screen(&self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    pub fn render_particles(&self, particles: &[Particle]) -> Result<(), JsValue> {
        for p in particles {
            self.context
                .set_fill_style(&JsValue::from_str(&p.color.to_css()));
            self.context.begin_path();
            self.context.arc(p.pos.x, p.pos.y, p.size, 0.0, PI * 2.0)?;
            self.context.fill();
        }
        Ok(())
    }
}
