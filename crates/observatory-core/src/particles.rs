use crate::constants::{
    PARTICLE_DURATION_SPAN_SEC, PARTICLE_MAX_DELAY_SEC, PARTICLE_MAX_ORIGIN_PCT,
    PARTICLE_MIN_DURATION_SEC, PARTICLE_MIN_OPACITY, PARTICLE_MIN_SIZE_PX, PARTICLE_OPACITY_SPAN,
    PARTICLE_SIZE_SPAN_PX,
};
use rand::Rng;

/// Placement and animation parameters for one decorative particle.
///
/// `left_pct`/`top_pct` are percentages of the container and never exceed
/// [`PARTICLE_MAX_ORIGIN_PCT`], so no particle origin spills past the
/// container edge.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub size_px: f64,
    pub opacity: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_sec: f64,
    pub delay_sec: f64,
}

/// Generate exactly `count` particle specs from the given rng. Deterministic
/// for a fixed seed, which is what the tests rely on.
pub fn generate(rng: &mut impl Rng, count: usize) -> Vec<ParticleSpec> {
    (0..count)
        .map(|_| ParticleSpec {
            size_px: rng.gen::<f64>() * PARTICLE_SIZE_SPAN_PX + PARTICLE_MIN_SIZE_PX,
            opacity: rng.gen::<f64>() * PARTICLE_OPACITY_SPAN + PARTICLE_MIN_OPACITY,
            left_pct: rng.gen::<f64>() * PARTICLE_MAX_ORIGIN_PCT,
            top_pct: rng.gen::<f64>() * PARTICLE_MAX_ORIGIN_PCT,
            duration_sec: rng.gen::<f64>() * PARTICLE_DURATION_SPAN_SEC + PARTICLE_MIN_DURATION_SEC,
            delay_sec: rng.gen::<f64>() * PARTICLE_MAX_DELAY_SEC,
        })
        .collect()
}
