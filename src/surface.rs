// Minimal drawing boundary between the simulation and whatever it renders
// to. Only the arc call can fail on a real canvas, so only the circle
// method is fallible.

use vecmath::Vector2;
use wasm_bindgen::JsValue;

pub trait Surface {
    fn clear(&mut self);

    fn fill_circle(&mut self, pos: Vector2<f64>, radius: f64, alpha: f64) -> Result<(), JsValue>;

    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, alpha: f64);
}
