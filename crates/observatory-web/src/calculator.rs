//! Distance calculator widget: a numeric input that re-renders its result
//! block on every input event.

use crate::dom;
use observatory_core::{convert, format_exponential, format_grouped, INVALID_DISTANCE_MESSAGE};
use wasm_bindgen::JsCast;
use web_sys as web;

const INPUT_STYLE: &str = "background: rgba(26, 26, 46, 0.8); \
     border: 1px solid rgba(108, 92, 231, 0.3); \
     color: #ffffff; \
     border-radius: 10px; \
     padding: 12px;";

const RESULT_STYLE: &str = "background: rgba(26, 26, 46, 0.8); \
     border: 1px solid rgba(108, 92, 231, 0.3); \
     border-radius: 10px; \
     padding: 20px; \
     margin-top: 15px; \
     color: #ffffff;";

/// Mount the calculator under `#distanceCalculator`.
pub fn mount(document: &web::Document) {
    let Some(mount_point) = document.get_element_by_id("distanceCalculator") else {
        return;
    };
    let Ok(input) = document
        .create_element("input")
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().map_err(Into::into))
    else {
        return;
    };
    input.set_type("number");
    input.set_placeholder("Enter distance in light-years");
    input.set_class_name("form-control mb-3");
    let _ = input.set_attribute("style", INPUT_STYLE);

    let Ok(result) = document.create_element("div") else {
        return;
    };
    result.set_class_name("calculation-result");
    let _ = result.set_attribute("style", RESULT_STYLE);

    let input_for_event = input.clone();
    let result_for_event = result.clone();
    dom::add_simple_listener(&input, "input", move || {
        render_result(&input_for_event, &result_for_event);
    });

    let _ = mount_point.append_child(&input);
    let _ = mount_point.append_child(&result);
}

fn render_result(input: &web::HtmlInputElement, result: &web::Element) {
    let conversion = input
        .value()
        .trim()
        .parse::<f64>()
        .ok()
        .and_then(|distance| convert(distance).ok());
    match conversion {
        None => {
            result.set_inner_html(&format!("<p>{INVALID_DISTANCE_MESSAGE}</p>"));
        }
        Some(c) => {
            result.set_inner_html(&format!(
                "<h5 style=\"color: #6c5ce7; margin-bottom: 15px;\">Distance Conversion</h5>\
                 <p><strong>Kilometers:</strong> {km} km</p>\
                 <p><strong>Miles:</strong> {miles} miles</p>\
                 <p><strong>Travel time at light speed:</strong> {light} years</p>\
                 <p><strong>Travel time by Space Shuttle:</strong> {shuttle} years</p>",
                km = format_exponential(c.kilometers),
                miles = format_exponential(c.miles),
                light = format_grouped(c.light_speed_years),
                shuttle = format_grouped(c.shuttle_years),
            ));
        }
    }
}
