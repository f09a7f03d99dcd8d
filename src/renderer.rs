// Canvas renderer backing the Surface trait: white particle dots and
// violet link strokes over a freshly cleared backing store. Holds on to
// the canvas element so resizes and clears can read the current size.

use crate::color::Color;
use crate::surface::Surface;
use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    const PARTICLE_COLOR: Color = Color::from_rgb(0xffffff);
    const LINK_COLOR: Color = Color::from_rgb(0x8b5cf6);
    const LINK_WIDTH: f64 = 1.0;

    // Grabs the 2d context from the canvas on the DOM
    pub fn new(canvas: HtmlCanvasElement) -> Result<CanvasSurface, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas did not yield a 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        Ok(CanvasSurface { canvas, context })
    }

    // Swapping the backing store size also resets all context state, which
    // is why the draw calls below set their style every time
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, pos: Vector2<f64>, radius: f64, alpha: f64) -> Result<(), JsValue> {
        let style = JsValue::from_str(&CanvasSurface::PARTICLE_COLOR.rgba(alpha));
        self.context.set_fill_style(&style);
        self.context.begin_path();
        self.context
            .arc(pos[0], pos[1], radius, 0.0, std::f64::consts::PI * 2.0)?;
        self.context.fill();
        Ok(())
    }

    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, alpha: f64) {
        let style = JsValue::from_str(&CanvasSurface::LINK_COLOR.rgba(alpha));
        self.context.set_stroke_style(&style);
        self.context.set_line_width(CanvasSurface::LINK_WIDTH);
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
    }
}
