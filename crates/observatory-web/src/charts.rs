//! Canvas chart painting. Datasets and layout math live in
//! `observatory_core::charts`; this module only pushes pixels.

use crate::constants::CHART_SETTLE_DELAY_MS;
use crate::{dom, timers};
use observatory_core::charts::{
    bar_layout, bubble_layout, doughnut_segments, PlotArea, GALAXY_DIAMETERS, PLANETS,
    STELLAR_POPULATIONS,
};
use observatory_core::format_grouped;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

const GRID_COLOR: &str = "rgba(108, 92, 231, 0.2)";
const AXIS_TEXT_COLOR: &str = "#b2bec3";
const LEGEND_TEXT_COLOR: &str = "#ffffff";
const BUBBLE_FILL: &str = "rgba(108, 92, 231, 0.6)";
const BUBBLE_STROKE: &str = "rgba(108, 92, 231, 1)";
const LABEL_FONT: &str = "12px sans-serif";

const GRID_LINES: usize = 5;

/// Paint all three charts once the page has settled. Each mount is optional.
pub fn wire(document: &web::Document) {
    let doc = document.clone();
    timers::set_timeout(CHART_SETTLE_DELAY_MS, move || {
        draw_galaxy_sizes(&doc);
        draw_stellar_populations(&doc);
        draw_planet_bubbles(&doc);
    });
}

fn context_for(
    document: &web::Document,
    id: &str,
) -> Option<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
    let canvas = document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    dom::sync_canvas_backing_size(&canvas);
    let context = canvas.get_context("2d").ok().flatten()?;
    let context: web::CanvasRenderingContext2d = context.unchecked_into();
    Some((canvas, context))
}

/// Bar chart of galaxy diameters on `#galaxySizeChart`.
pub fn draw_galaxy_sizes(document: &web::Document) {
    let Some((canvas, ctx)) = context_for(document, "galaxySizeChart") else {
        return;
    };
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    let plot = PlotArea {
        x: 64.0,
        y: 16.0,
        width: (width - 80.0).max(1.0),
        height: (height - 56.0).max(1.0),
    };
    let values: Vec<f64> = GALAXY_DIAMETERS.iter().map(|d| d.value).collect();
    let max = values.iter().cloned().fold(0.0_f64, f64::max);

    // horizontal gridlines with tick labels
    ctx.set_font(LABEL_FONT);
    for i in 0..=GRID_LINES {
        let frac = i as f64 / GRID_LINES as f64;
        let y = plot.y + plot.height * frac;
        ctx.set_stroke_style_str(GRID_COLOR);
        ctx.begin_path();
        ctx.move_to(plot.x, y);
        ctx.line_to(plot.x + plot.width, y);
        ctx.stroke();

        ctx.set_fill_style_str(AXIS_TEXT_COLOR);
        ctx.set_text_align("right");
        let tick = max * (1.0 - frac);
        let _ = ctx.fill_text(&format_grouped(tick.round()), plot.x - 6.0, y + 4.0);
    }

    for (datum, rect) in GALAXY_DIAMETERS.iter().zip(bar_layout(&values, plot)) {
        ctx.set_fill_style_str(datum.fill);
        ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
        ctx.set_stroke_style_str(datum.stroke);
        ctx.set_line_width(2.0);
        ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);

        ctx.set_fill_style_str(AXIS_TEXT_COLOR);
        ctx.set_text_align("center");
        let _ = ctx.fill_text(
            datum.label,
            rect.x + rect.width / 2.0,
            plot.y + plot.height + 18.0,
        );
    }
}

/// Doughnut chart of stellar population shares on `#stellarMassChart`.
pub fn draw_stellar_populations(document: &web::Document) {
    let Some((canvas, ctx)) = context_for(document, "stellarMassChart") else {
        return;
    };
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    let center_x = width / 2.0;
    let center_y = (height - 32.0) / 2.0;
    let outer = (width.min(height - 32.0) * 0.38).max(1.0);
    let inner = outer * 0.55;

    let values: Vec<f64> = STELLAR_POPULATIONS.iter().map(|d| d.value).collect();
    for (datum, segment) in STELLAR_POPULATIONS.iter().zip(doughnut_segments(&values)) {
        ctx.begin_path();
        ctx.move_to(center_x, center_y);
        let _ = ctx.arc(
            center_x,
            center_y,
            outer,
            segment.start_angle,
            segment.end_angle,
        );
        ctx.close_path();
        ctx.set_fill_style_str(datum.fill);
        ctx.fill();
        ctx.set_stroke_style_str(datum.stroke);
        ctx.set_line_width(2.0);
        ctx.stroke();
    }

    // punch out the hole
    let _ = ctx.set_global_composite_operation("destination-out");
    ctx.begin_path();
    let _ = ctx.arc(center_x, center_y, inner, 0.0, TAU);
    ctx.fill();
    let _ = ctx.set_global_composite_operation("source-over");

    // single-row legend along the bottom
    let slot = width / STELLAR_POPULATIONS.len() as f64;
    ctx.set_font(LABEL_FONT);
    for (index, datum) in STELLAR_POPULATIONS.iter().enumerate() {
        let x = slot * index as f64 + slot / 2.0;
        let y = height - 14.0;
        ctx.set_fill_style_str(datum.fill);
        ctx.fill_rect(x - 7.0, y - 9.0, 10.0, 10.0);
        ctx.set_fill_style_str(LEGEND_TEXT_COLOR);
        ctx.set_text_align("center");
        let _ = ctx.fill_text(datum.label, x, y + 12.0);
    }
}

/// Bubble chart of planet distance versus mass on `#planetSizeChart`.
pub fn draw_planet_bubbles(document: &web::Document) {
    let Some((canvas, ctx)) = context_for(document, "planetSizeChart") else {
        return;
    };
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    let plot = PlotArea {
        x: 56.0,
        y: 16.0,
        width: (width - 80.0).max(1.0),
        height: (height - 72.0).max(1.0),
    };

    // frame and gridlines
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);
    ctx.stroke_rect(plot.x, plot.y, plot.width, plot.height);
    for i in 1..GRID_LINES {
        let frac = i as f64 / GRID_LINES as f64;
        ctx.begin_path();
        ctx.move_to(plot.x + plot.width * frac, plot.y);
        ctx.line_to(plot.x + plot.width * frac, plot.y + plot.height);
        ctx.stroke();
        ctx.begin_path();
        ctx.move_to(plot.x, plot.y + plot.height * frac);
        ctx.line_to(plot.x + plot.width, plot.y + plot.height * frac);
        ctx.stroke();
    }

    ctx.set_font(LABEL_FONT);
    for (datum, point) in PLANETS.iter().zip(bubble_layout(PLANETS, plot)) {
        ctx.begin_path();
        let _ = ctx.arc(point.x, point.y, point.radius, 0.0, TAU);
        ctx.set_fill_style_str(BUBBLE_FILL);
        ctx.fill();
        ctx.set_stroke_style_str(BUBBLE_STROKE);
        ctx.set_line_width(2.0);
        ctx.stroke();

        ctx.set_fill_style_str(AXIS_TEXT_COLOR);
        ctx.set_text_align("center");
        let _ = ctx.fill_text(datum.label, point.x, point.y - point.radius - 4.0);
    }

    // axis titles
    ctx.set_fill_style_str(AXIS_TEXT_COLOR);
    ctx.set_text_align("center");
    let _ = ctx.fill_text(
        "Distance from Sun (AU)",
        plot.x + plot.width / 2.0,
        height - 10.0,
    );
    let _ = ctx.fill_text("Mass (Earth = 1)", plot.x, plot.y - 4.0);
}
