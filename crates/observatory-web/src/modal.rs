//! Escape-key dismissal for modal overlays.

use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Close every open modal when Escape is pressed.
pub fn wire_escape_dismiss(document: &web::Document) {
    let doc = document.clone();
    dom::add_listener(document, "keydown", move |ev| {
        let Some(key_event) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if key_event.key() == "Escape" {
            dismiss_open_modals(&doc);
        }
    });
}

/// Hide anything currently shown as `.modal.show`.
pub fn dismiss_open_modals(document: &web::Document) {
    for modal in dom::query_all(document, ".modal.show") {
        let _ = modal.class_list().remove_1("show");
        let _ = modal.set_attribute("style", "display:none");
        let _ = modal.set_attribute("aria-hidden", "true");
    }
}
