//! Size-comparison row: five celestial bodies on a shared logarithmic scale.

use crate::dom;
use observatory_core::{scaled_size, COMPARISON_OBJECTS, SIZE_BASE_UNIT};
use wasm_bindgen::JsCast;
use web_sys as web;

const ITEM_STYLE: &str = "display: inline-block; \
     margin: 10px; \
     text-align: center; \
     cursor: pointer; \
     transition: transform 0.3s ease;";

/// Mount the comparison row under `#sizeComparison`, in dataset order.
pub fn mount(document: &web::Document) {
    let Some(container) = document.get_element_by_id("sizeComparison") else {
        return;
    };
    for object in COMPARISON_OBJECTS {
        let Ok(item) = document.create_element("div") else {
            continue;
        };
        item.set_class_name("size-comparison-item");
        let _ = item.set_attribute("style", ITEM_STYLE);

        let Ok(circle) = document.create_element("div") else {
            continue;
        };
        let size = scaled_size(object.magnitude, SIZE_BASE_UNIT);
        let _ = circle.set_attribute(
            "style",
            &format!(
                "width: {size:.1}px; height: {size:.1}px; \
                 background: {color}; border-radius: 50%; \
                 margin: 0 auto 10px; box-shadow: 0 0 20px {color}50;",
                color = object.color,
            ),
        );

        let Ok(label) = document.create_element("div") else {
            continue;
        };
        label.set_text_content(Some(object.name));
        let _ = label.set_attribute(
            "style",
            "color: #ffffff; font-size: 12px; font-weight: 600;",
        );

        let _ = item.append_child(&circle);
        let _ = item.append_child(&label);
        wire_hover(&item, &circle, object.color);
        let _ = container.append_child(&item);
    }
}

fn wire_hover(item: &web::Element, circle: &web::Element, color: &'static str) {
    let item_enter = item.clone();
    let circle_enter = circle.clone();
    dom::add_simple_listener(item, "mouseenter", move || {
        if let Some(el) = item_enter.dyn_ref::<web::HtmlElement>() {
            let _ = el.style().set_property("transform", "scale(1.1)");
        }
        if let Some(el) = circle_enter.dyn_ref::<web::HtmlElement>() {
            let _ = el
                .style()
                .set_property("box-shadow", &format!("0 0 30px {color}"));
        }
    });

    let item_leave = item.clone();
    let circle_leave = circle.clone();
    dom::add_simple_listener(item, "mouseleave", move || {
        if let Some(el) = item_leave.dyn_ref::<web::HtmlElement>() {
            let _ = el.style().set_property("transform", "scale(1)");
        }
        if let Some(el) = circle_leave.dyn_ref::<web::HtmlElement>() {
            let _ = el
                .style()
                .set_property("box-shadow", &format!("0 0 20px {color}50"));
        }
    });
}
