mod animation;
mod color;
mod driver;
mod field;
mod links;
mod particle;
mod renderer;
mod surface;
mod utils;

use driver::Driver;
use wasm_bindgen::prelude::*;
use web_sys::{console, HtmlCanvasElement};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

// Handle the frontend keeps for the lifetime of its canvas: `start` on
// mount, `stop` (or letting wasm-bindgen free it) on unmount.
#[wasm_bindgen]
pub struct ConstellationCanvas {
    driver: Option<Driver>,
}

#[wasm_bindgen]
impl ConstellationCanvas {
    pub fn new() -> ConstellationCanvas {
        ConstellationCanvas { driver: None }
    }

    // Returns false and stays idle when the canvas ref is not mounted yet
    // or its context is unavailable, so the frontend can retry on its next
    // effect run instead of catching an exception
    pub fn start(&mut self, canvas: Option<HtmlCanvasElement>) -> bool {
        if self.driver.is_some() {
            return true;
        }
        let canvas = match canvas {
            Some(canvas) => canvas,
            None => {
                console::warn_1(&"no canvas to animate yet, staying idle".into());
                return false;
            }
        };
        match Driver::launch(canvas) {
            Ok(driver) => {
                self.driver = Some(driver);
                true
            }
            Err(err) => {
                console::error_1(&err);
                false
            }
        }
    }

    pub fn stop(&mut self) {
        self.driver.take();
    }

    pub fn is_running(&self) -> bool {
        match &self.driver {
            Some(driver) => driver.is_live(),
            None => false,
        }
    }

    pub fn particle_count(&self) -> u32 {
        match &self.driver {
            Some(driver) => driver.particle_count(),
            None => 0,
        }
    }
}
