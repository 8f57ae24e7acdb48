//! Decorative particle field inside the hero section.

use observatory_core::{particles, PARTICLE_COUNT};
use web_sys as web;

/// Append the fixed number of particle divs to `.hero-section`. Placement
/// comes from the core generator, so origins stay inside the container.
pub fn spawn(document: &web::Document) {
    let Ok(Some(hero)) = document.query_selector(".hero-section") else {
        return;
    };
    let mut rng = rand::thread_rng();
    for spec in particles::generate(&mut rng, PARTICLE_COUNT) {
        let Ok(particle) = document.create_element("div") else {
            continue;
        };
        particle.set_class_name("cosmic-particle");
        let style = format!(
            "position: absolute; \
             width: {size:.2}px; height: {size:.2}px; \
             background: rgba(108, 92, 231, {opacity:.2}); \
             border-radius: 50%; \
             left: {left:.2}%; top: {top:.2}%; \
             animation: float {duration:.2}s ease-in-out infinite; \
             animation-delay: {delay:.2}s;",
            size = spec.size_px,
            opacity = spec.opacity,
            left = spec.left_pct,
            top = spec.top_pct,
            duration = spec.duration_sec,
            delay = spec.delay_sec,
        );
        let _ = particle.set_attribute("style", &style);
        let _ = hero.append_child(&particle);
    }
}
