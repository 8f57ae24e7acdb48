//! Small one-off interactions: feature-card hover lift, loading
//! placeholders, and the search box stub.

use crate::constants::LOADING_HIDE_DELAY_MS;
use crate::{dom, timers};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Lift and tilt feature cards on hover.
pub fn wire_feature_cards(document: &web::Document) {
    for card in dom::query_all(document, ".feature-card") {
        let card_enter = card.clone();
        dom::add_simple_listener(&card, "mouseenter", move || {
            if let Some(el) = card_enter.dyn_ref::<web::HtmlElement>() {
                let _ = el
                    .style()
                    .set_property("transform", "translateY(-10px) rotateX(5deg)");
            }
        });
        let card_leave = card.clone();
        dom::add_simple_listener(&card, "mouseleave", move || {
            if let Some(el) = card_leave.dyn_ref::<web::HtmlElement>() {
                let _ = el
                    .style()
                    .set_property("transform", "translateY(0) rotateX(0)");
            }
        });
    }
}

/// Hide `.loading` placeholders once the page has had time to settle.
pub fn hide_loading_after_delay(document: &web::Document) {
    let placeholders = dom::query_all(document, ".loading");
    if placeholders.is_empty() {
        return;
    }
    timers::set_timeout(LOADING_HIDE_DELAY_MS, move || {
        for el in &placeholders {
            let _ = el.set_attribute("style", "display:none");
        }
    });
}

/// Search box stub; only logs the query for now.
// TODO: hook this up to the article index once the content pages ship one.
pub fn wire_search(document: &web::Document) {
    let Some(input) = document
        .get_element_by_id("search-input")
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        return;
    };
    let input_for_event = input.clone();
    dom::add_simple_listener(&input, "input", move || {
        let query = input_for_event.value().to_lowercase();
        log::debug!("searching for: {query}");
    });
}
