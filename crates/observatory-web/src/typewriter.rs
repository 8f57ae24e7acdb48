//! Hero title typewriter: empties the title shortly after load and retypes
//! it one character per tick.

use crate::constants::{TYPEWRITER_CHAR_MS, TYPEWRITER_START_DELAY_MS};
use crate::timers::{self, IntervalHandle};
use observatory_core::Typewriter;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Arm the effect on `.hero-title` after a short delay so the original text
/// is still what gets retyped.
pub fn wire_hero_title(document: &web::Document) {
    let Ok(Some(title)) = document.query_selector(".hero-title") else {
        return;
    };
    let Some(text) = title.text_content() else {
        return;
    };
    timers::set_timeout(TYPEWRITER_START_DELAY_MS, move || {
        start(title.clone(), &text);
    });
}

/// Type `text` into `element`. Self-clearing once the full text is out; the
/// handle stops it early, leaving the partial text in place.
pub fn start(element: web::Element, text: &str) -> Option<IntervalHandle> {
    let window = web::window()?;
    element.set_text_content(Some(""));
    let mut frames = Typewriter::new(text);
    let interval_id = Rc::new(Cell::new(None::<i32>));

    let id_for_tick = interval_id.clone();
    let closure = Closure::wrap(Box::new(move || {
        let visible = frames.step();
        element.set_text_content(Some(&visible));
        if frames.is_done() {
            if let (Some(w), Some(id)) = (web::window(), id_for_tick.get()) {
                w.clear_interval_with_handle(id);
            }
        }
    }) as Box<dyn FnMut()>);

    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TYPEWRITER_CHAR_MS,
        )
        .ok()?;
    interval_id.set(Some(id));
    closure.forget();
    Some(IntervalHandle::new(id))
}
