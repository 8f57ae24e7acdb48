use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handle to a running interval timer. Animations that reach their end state
/// clear themselves; `cancel` stops one early. Dropping the handle does
/// nothing, matching the fire-and-forget effects on the page.
#[derive(Clone, Copy, Debug)]
pub struct IntervalHandle {
    id: i32,
}

impl IntervalHandle {
    pub fn new(id: i32) -> Self {
        Self { id }
    }

    pub fn cancel(self) {
        if let Some(window) = web::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}

/// One-shot timer; the closure is leaked, which is fine for page-lifetime
/// effects.
pub fn set_timeout(ms: i32, mut f: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || f()) as Box<dyn FnMut()>);
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            );
        closure.forget();
    }
}
