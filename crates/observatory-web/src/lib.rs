#![cfg(target_arch = "wasm32")]
//! Wasm entry point: wires every effect and widget to the DOM. Each feature
//! locates its own mount and is a no-op when the page does not carry it, so
//! the same bundle works on pages with any subset of the widgets.

// Feature modules are public so other bundles can re-wire individual
// widgets.
pub mod calculator;
pub mod charts;
pub mod comparison;
pub mod constants;
pub mod counters;
pub mod dom;
pub mod modal;
pub mod observers;
pub mod particles;
pub mod scroll;
pub mod timers;
pub mod transitions;
pub mod typewriter;
pub mod ui;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    banner();

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // scroll-linked effects
    scroll::wire_navbar(&document);
    scroll::wire_smooth_anchors(&document);
    scroll::wire_parallax(&document);

    // visibility-triggered effects
    observers::wire_stat_counters(&document);
    observers::wire_timeline_reveal(&document);
    observers::wire_lazy_images(&document);

    // hero decorations
    particles::spawn(&document);
    typewriter::wire_hero_title(&document);

    // widgets
    charts::wire(&document);
    comparison::mount(&document);
    calculator::mount(&document);

    // page chrome
    ui::wire_feature_cards(&document);
    ui::wire_search(&document);
    ui::hide_loading_after_delay(&document);
    modal::wire_escape_dismiss(&document);
    transitions::wire(&document);

    log::info!("observatory-web wired");
    Ok(())
}

fn banner() {
    log::info!(
        "\n🌌 Welcome to Cosmic Observatory! 🌌\n\
         Explore the infinite wonders of the universe.\n\n\
         Built with Rust, WebAssembly and web-sys.\n\
         © 2024 Cosmic Observatory"
    );
}
