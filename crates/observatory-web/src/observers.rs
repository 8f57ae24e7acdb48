//! IntersectionObserver wiring: counters arm once when the stats section is
//! half visible, timeline items reveal at 30%, and lazily loaded images swap
//! in their real source.

use crate::constants::{
    STATS_VISIBILITY_THRESHOLD, TIMELINE_SLIDE_PX, TIMELINE_VISIBILITY_THRESHOLD,
};
use crate::{counters, dom};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Build an observer that calls `on_enter` for every entry crossing the
/// visibility threshold.
fn intersection_observer(
    threshold: f64,
    mut on_enter: impl FnMut(web::Element, web::IntersectionObserver) + 'static,
) -> Option<web::IntersectionObserver> {
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_enter(entry.target(), observer.clone());
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
            .ok()?;
    closure.forget();
    Some(observer)
}

/// Start the statistic counters the first time the stats section becomes
/// half visible. The section is unobserved right away, and the counters
/// themselves are re-trigger guarded, so repeated visibility events are
/// no-ops.
pub fn wire_stat_counters(document: &web::Document) {
    let Ok(Some(section)) = document.query_selector(".stats-section") else {
        return;
    };
    let doc = document.clone();
    let Some(observer) = intersection_observer(STATS_VISIBILITY_THRESHOLD, move |target, obs| {
        counters::animate_all(&doc);
        obs.unobserve(&target);
    }) else {
        return;
    };
    observer.observe(&section);
}

/// Slide timeline items in from alternating sides as they scroll into view.
pub fn wire_timeline_reveal(document: &web::Document) {
    let items = dom::query_all(document, ".timeline-item");
    if items.is_empty() {
        return;
    }
    let Some(observer) = intersection_observer(TIMELINE_VISIBILITY_THRESHOLD, |target, _| {
        if let Some(el) = target.dyn_ref::<web::HtmlElement>() {
            let style = el.style();
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("transform", "translateX(0)");
        }
    }) else {
        return;
    };
    for (index, item) in items.iter().enumerate() {
        if let Some(el) = item.dyn_ref::<web::HtmlElement>() {
            let style = el.style();
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("transition", "all 0.6s ease-in-out");
            let offset = if index % 2 == 0 {
                -TIMELINE_SLIDE_PX
            } else {
                TIMELINE_SLIDE_PX
            };
            let _ = style.set_property("transform", &format!("translateX({offset}px)"));
        }
        observer.observe(item);
    }
}

/// Swap `data-src` into `src` once an image scrolls into view.
pub fn wire_lazy_images(document: &web::Document) {
    let images = dom::query_all(document, "img[data-src]");
    if images.is_empty() {
        return;
    }
    let Some(observer) = intersection_observer(0.0, |target, obs| {
        if let Some(img) = target.dyn_ref::<web::HtmlImageElement>() {
            if let Some(src) = img.get_attribute("data-src") {
                img.set_src(&src);
            }
            let _ = img.class_list().remove_1("lazy");
        }
        obs.unobserve(&target);
    }) else {
        return;
    };
    for image in &images {
        observer.observe(image);
    }
}
