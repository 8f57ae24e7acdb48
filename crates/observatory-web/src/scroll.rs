//! Scroll-linked effects: navbar restyle, smooth anchor navigation and the
//! hero parallax.

use crate::constants::{NAV_SCROLL_THRESHOLD_PX, PARALLAX_MAX_OFFSET_PX, PARALLAX_SPEED};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Toggle the `scrolled` class on `.cosmic-nav` past the threshold depth.
pub fn wire_navbar(document: &web::Document) {
    let Ok(Some(nav)) = document.query_selector(".cosmic-nav") else {
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    dom::add_simple_listener(&window, "scroll", move || {
        let Some(w) = web::window() else {
            return;
        };
        let y = w.scroll_y().unwrap_or(0.0);
        let classes = nav.class_list();
        if y > NAV_SCROLL_THRESHOLD_PX {
            let _ = classes.add_1("scrolled");
        } else {
            let _ = classes.remove_1("scrolled");
        }
    });
}

/// Smooth-scroll in-page anchor links to their target section.
pub fn wire_smooth_anchors(document: &web::Document) {
    for anchor in dom::query_all(document, "a[href^='#']") {
        let doc = document.clone();
        let anchor_for_click = anchor.clone();
        dom::add_listener(&anchor, "click", move |ev| {
            ev.prevent_default();
            let Some(href) = anchor_for_click.get_attribute("href") else {
                return;
            };
            if let Ok(Some(target)) = doc.query_selector(&href) {
                let options = web::ScrollIntoViewOptions::new();
                options.set_behavior(web::ScrollBehavior::Smooth);
                options.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
    }
}

/// Translate `.stars-background` layers at half scroll speed. The offset is
/// clamped so a long page cannot push the background out of its section.
pub fn wire_parallax(document: &web::Document) {
    let layers: Vec<web::HtmlElement> = dom::query_all(document, ".stars-background")
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect();
    if layers.is_empty() {
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    dom::add_simple_listener(&window, "scroll", move || {
        let Some(w) = web::window() else {
            return;
        };
        let scrolled = w.scroll_y().unwrap_or(0.0);
        let offset = (scrolled * PARALLAX_SPEED).clamp(0.0, PARALLAX_MAX_OFFSET_PX);
        for layer in &layers {
            let _ = layer
                .style()
                .set_property("transform", &format!("translateY({offset}px)"));
        }
    });
}
