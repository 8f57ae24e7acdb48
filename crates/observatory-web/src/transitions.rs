//! Page transition fades. The fade is applied through a module-owned
//! overlay element instead of mutating body styles, so no other code shares
//! the transition state.

use crate::constants::PAGE_FADE_MS;
use crate::{dom, timers};
use web_sys as web;

const OVERLAY_ID: &str = "page-transition-overlay";

/// Create the overlay covering the page, wire the fade-out on internal page
/// links, and fade the overlay away now that the page is up.
pub fn wire(document: &web::Document) {
    let Some(overlay) = ensure_overlay(document) else {
        return;
    };
    fade_in_page(&overlay);
    wire_page_links(document, overlay);
}

fn ensure_overlay(document: &web::Document) -> Option<web::Element> {
    if let Some(existing) = document.get_element_by_id(OVERLAY_ID) {
        return Some(existing);
    }
    let overlay = document.create_element("div").ok()?;
    overlay.set_id(OVERLAY_ID);
    // starts opaque so the page can fade in from it
    let _ = overlay.set_attribute(
        "style",
        "position: fixed; inset: 0; background: #0a0a14; opacity: 1; \
         pointer-events: none; transition: opacity 0.3s ease; z-index: 9999;",
    );
    let body = document.body()?;
    body.append_child(&overlay).ok()?;
    Some(overlay)
}

/// Fade the overlay out on the next tick; the CSS transition does the rest.
fn fade_in_page(overlay: &web::Element) {
    let overlay = overlay.clone();
    timers::set_timeout(30, move || {
        set_opacity(&overlay, "0", false);
    });
}

/// Internal `pages/` links fade the overlay back in, then navigate.
fn wire_page_links(document: &web::Document, overlay: web::Element) {
    for link in dom::query_all(document, "a[href^='pages/']") {
        let link_for_click = link.clone();
        let overlay_for_click = overlay.clone();
        dom::add_listener(&link, "click", move |ev| {
            ev.prevent_default();
            let Some(href) = link_for_click.get_attribute("href") else {
                return;
            };
            set_opacity(&overlay_for_click, "1", true);
            timers::set_timeout(PAGE_FADE_MS, move || {
                if let Some(window) = web::window() {
                    let _ = window.location().set_href(&href);
                }
            });
        });
    }
}

fn set_opacity(overlay: &web::Element, opacity: &str, block_input: bool) {
    let pointer_events = if block_input { "auto" } else { "none" };
    let _ = overlay.set_attribute(
        "style",
        &format!(
            "position: fixed; inset: 0; background: #0a0a14; opacity: {opacity}; \
             pointer-events: {pointer_events}; transition: opacity 0.3s ease; z-index: 9999;"
        ),
    );
}
