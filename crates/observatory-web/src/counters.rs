//! Statistic counter animation: each `.stat-number` counts from 0 to its
//! `data-count` target on a fixed-tick interval.

use crate::dom;
use crate::timers::IntervalHandle;
use observatory_core::{parse_counter_target, CounterAnimation, COUNTER_TICK_MS};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

// Attribute marking a counter that has already started; makes re-triggering
// a no-op.
const STARTED_ATTR: &str = "data-counting";

/// Start every idle `.stat-number` counter in the document.
pub fn animate_all(document: &web::Document) -> Vec<IntervalHandle> {
    let mut handles = Vec::new();
    for element in dom::query_all(document, ".stat-number") {
        if element.get_attribute(STARTED_ATTR).is_some() {
            continue;
        }
        let Some(target) = element
            .get_attribute("data-count")
            .as_deref()
            .and_then(parse_counter_target)
        else {
            log::warn!("stat counter without a numeric data-count, skipping");
            continue;
        };
        let _ = element.set_attribute(STARTED_ATTR, "1");
        if let Some(handle) = animate(element, target) {
            handles.push(handle);
        }
    }
    handles
}

/// Drive one counter to `target`. The interval clears itself on the final
/// frame; the returned handle allows stopping it early.
pub fn animate(element: web::Element, target: f64) -> Option<IntervalHandle> {
    let window = web::window()?;
    let mut frames = CounterAnimation::new(target);
    let interval_id = Rc::new(Cell::new(None::<i32>));

    let id_for_tick = interval_id.clone();
    let closure = Closure::wrap(Box::new(move || {
        let text = frames.step();
        element.set_text_content(Some(&text));
        if frames.is_done() {
            if let (Some(w), Some(id)) = (web::window(), id_for_tick.get()) {
                w.clear_interval_with_handle(id);
            }
        }
    }) as Box<dyn FnMut()>);

    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            COUNTER_TICK_MS as i32,
        )
        .ok()?;
    interval_id.set(Some(id));
    closure.forget();
    Some(IntervalHandle::new(id))
}
