use crate::constants::SIZE_CAP_PX;

/// Map a linear magnitude to a bounded display size in pixels.
///
/// `base * ln(m + 1)` keeps wildly different magnitudes on one screen; the
/// `+ 1` avoids the singularity at zero and the cap bounds the largest
/// rendered element. Monotonic non-decreasing in `magnitude`.
pub fn scaled_size(magnitude: f64, base: f64) -> f64 {
    (base * (magnitude.max(0.0) + 1.0).ln()).min(SIZE_CAP_PX)
}

/// A celestial body in the size-comparison row, sized relative to Earth.
#[derive(Clone, Copy, Debug)]
pub struct ComparisonObject {
    pub name: &'static str,
    pub magnitude: f64,
    pub color: &'static str,
}

// Fixed display set, smallest to largest.
pub const COMPARISON_OBJECTS: &[ComparisonObject] = &[
    ComparisonObject {
        name: "Earth",
        magnitude: 1.0,
        color: "#4facfe",
    },
    ComparisonObject {
        name: "Jupiter",
        magnitude: 11.0,
        color: "#fd79a8",
    },
    ComparisonObject {
        name: "Sun",
        magnitude: 109.0,
        color: "#fdcb6e",
    },
    ComparisonObject {
        name: "Betelgeuse",
        magnitude: 700.0,
        color: "#e17055",
    },
    ComparisonObject {
        name: "VY Canis Majoris",
        magnitude: 1420.0,
        color: "#a29bfe",
    },
];
