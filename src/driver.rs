// Browser side of the animator: sizes the canvas to the viewport, seeds
// the field, and drives it with the self-rescheduling requestAnimationFrame
// closure. Teardown has to run on every exit path, so all of it lives in
// `shut_down` and `Drop` just delegates there.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::animation::Animation;
use crate::field::ParticleField;
use crate::log;
use crate::renderer::CanvasSurface;
use crate::utils::Timer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlCanvasElement, Window};

type FrameHook = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct Driver {
    animation: Rc<RefCell<Animation>>,
    frame_hook: FrameHook,
    pending_frame: Rc<Cell<Option<i32>>>,
    resize_hook: Option<Closure<dyn FnMut()>>,
}

impl Driver {
    // The canvas runs a fifth taller than the viewport so the field bleeds
    // past the fold
    const HEIGHT_SCALE: f64 = 1.2;

    pub fn launch(canvas: HtmlCanvasElement) -> Result<Driver, JsValue> {
        let _timer = Timer::new("Driver::launch");
        let window =
            web_sys::window().ok_or_else(|| JsValue::from_str("no window to animate in"))?;
        let (width, height) = surface_size(&window)?;

        let surface = CanvasSurface::new(canvas)?;
        surface.resize(width as u32, height as u32);

        let population = ParticleField::population_for_width(width);
        let mut rng = rand::thread_rng();
        let field = ParticleField::new(width, height, population, &mut rng);
        log!(
            "constellation field running: {} particles over {:.0}x{:.0}",
            population,
            width,
            height
        );

        let animation = Rc::new(RefCell::new(Animation::new(field)));
        let surface = Rc::new(RefCell::new(surface));
        let pending_frame = Rc::new(Cell::new(None));
        let frame_hook: FrameHook = Rc::new(RefCell::new(None));

        let resize_hook = {
            let animation = Rc::clone(&animation);
            let surface = Rc::clone(&surface);
            Closure::wrap(Box::new(move || {
                let size = web_sys::window()
                    .ok_or_else(|| JsValue::from_str("no window to measure"))
                    .and_then(|window| surface_size(&window));
                let (width, height) = match size {
                    Ok(size) => size,
                    Err(err) => {
                        console::warn_1(&err);
                        return;
                    }
                };
                surface.borrow().resize(width as u32, height as u32);
                animation.borrow_mut().resize(width, height);
            }) as Box<dyn FnMut()>)
        };
        window.add_event_listener_with_callback("resize", resize_hook.as_ref().unchecked_ref())?;

        {
            let animation = Rc::clone(&animation);
            let surface = Rc::clone(&surface);
            let pending = Rc::clone(&pending_frame);
            let hook = Rc::clone(&frame_hook);
            *frame_hook.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                pending.set(None);
                if !animation.borrow().is_live() {
                    return;
                }
                let outcome = {
                    let mut surface = surface.borrow_mut();
                    animation.borrow_mut().frame(&mut *surface)
                };
                if let Err(err) = outcome {
                    console::error_1(&err);
                    animation.borrow_mut().shut_down();
                    return;
                }
                match request_frame(&hook) {
                    Ok(handle) => pending.set(Some(handle)),
                    Err(err) => console::error_1(&err),
                }
            }) as Box<dyn FnMut()>));
        }

        let driver = Driver {
            animation,
            frame_hook,
            pending_frame,
            resize_hook: Some(resize_hook),
        };
        driver.schedule_frame()?;
        Ok(driver)
    }

    pub fn is_live(&self) -> bool {
        self.animation.borrow().is_live()
    }

    pub fn particle_count(&self) -> u32 {
        self.animation.borrow().field().population() as u32
    }

    fn schedule_frame(&self) -> Result<(), JsValue> {
        let handle = request_frame(&self.frame_hook)?;
        self.pending_frame.set(Some(handle));
        Ok(())
    }

    // Safe to call more than once. Order matters: dead flag first so an
    // in-flight callback draws nothing, cancel before the closure is
    // dropped so the browser never calls into a freed closure.
    pub fn shut_down(&mut self) {
        self.animation.borrow_mut().shut_down();
        let window = web_sys::window();
        if let Some(handle) = self.pending_frame.take() {
            if let Some(window) = &window {
                if window.cancel_animation_frame(handle).is_err() {
                    console::warn_1(&"failed to cancel the pending frame".into());
                }
            }
        }
        self.frame_hook.borrow_mut().take();
        if let Some(hook) = self.resize_hook.take() {
            if let Some(window) = &window {
                let listener: &js_sys::Function = hook.as_ref().unchecked_ref();
                if window
                    .remove_event_listener_with_callback("resize", listener)
                    .is_err()
                {
                    console::warn_1(&"failed to remove the resize listener".into());
                }
            }
        }
    }
}

impl Drop for Driver {
    fn drop(&mut self) {
        self.shut_down();
    }
}

// Viewport-derived surface size, width as-is and height stretched by the
// overdraw factor
fn surface_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
    Ok((width, height * Driver::HEIGHT_SCALE))
}

fn request_frame(hook: &RefCell<Option<Closure<dyn FnMut()>>>) -> Result<i32, JsValue> {
    let window =
        web_sys::window().ok_or_else(|| JsValue::from_str("no window to schedule frames on"))?;
    let hook = hook.borrow();
    let callback: &js_sys::Function = match hook.as_ref() {
        Some(closure) => closure.as_ref().unchecked_ref(),
        None => return Err(JsValue::from_str("frame callback is gone")),
    };
    window.request_animation_frame(callback)
}
