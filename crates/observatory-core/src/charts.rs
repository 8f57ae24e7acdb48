//! Fixed chart datasets and the pure geometry that lays them out on a
//! canvas. Painting happens in the web crate; everything here is testable
//! natively.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Axis-aligned region of the canvas the data is drawn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

// ---------------- Datasets ----------------

#[derive(Clone, Copy, Debug)]
pub struct BarDatum {
    pub label: &'static str,
    pub value: f64,
    pub fill: &'static str,
    pub stroke: &'static str,
}

/// Galaxy diameters in light-years.
pub const GALAXY_DIAMETERS: &[BarDatum] = &[
    BarDatum {
        label: "Milky Way",
        value: 100_000.0,
        fill: "rgba(108, 92, 231, 0.8)",
        stroke: "rgba(108, 92, 231, 1)",
    },
    BarDatum {
        label: "Andromeda",
        value: 220_000.0,
        fill: "rgba(162, 155, 254, 0.8)",
        stroke: "rgba(162, 155, 254, 1)",
    },
    BarDatum {
        label: "Triangulum",
        value: 60_000.0,
        fill: "rgba(253, 121, 168, 0.8)",
        stroke: "rgba(253, 121, 168, 1)",
    },
    BarDatum {
        label: "Large Magellanic Cloud",
        value: 14_000.0,
        fill: "rgba(116, 75, 162, 0.8)",
        stroke: "rgba(116, 75, 162, 1)",
    },
    BarDatum {
        label: "Small Magellanic Cloud",
        value: 7_000.0,
        fill: "rgba(103, 58, 183, 0.8)",
        stroke: "rgba(103, 58, 183, 1)",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct DoughnutDatum {
    pub label: &'static str,
    pub value: f64,
    pub fill: &'static str,
    pub stroke: &'static str,
}

/// Stellar population shares in percent.
pub const STELLAR_POPULATIONS: &[DoughnutDatum] = &[
    DoughnutDatum {
        label: "Main Sequence",
        value: 76.0,
        fill: "rgba(108, 92, 231, 0.8)",
        stroke: "rgba(108, 92, 231, 1)",
    },
    DoughnutDatum {
        label: "Red Giants",
        value: 12.0,
        fill: "rgba(253, 121, 168, 0.8)",
        stroke: "rgba(253, 121, 168, 1)",
    },
    DoughnutDatum {
        label: "White Dwarfs",
        value: 6.0,
        fill: "rgba(162, 155, 254, 0.8)",
        stroke: "rgba(162, 155, 254, 1)",
    },
    DoughnutDatum {
        label: "Neutron Stars",
        value: 4.0,
        fill: "rgba(116, 75, 162, 0.8)",
        stroke: "rgba(116, 75, 162, 1)",
    },
    DoughnutDatum {
        label: "Brown Dwarfs",
        value: 2.0,
        fill: "rgba(103, 58, 183, 0.8)",
        stroke: "rgba(103, 58, 183, 1)",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct BubbleDatum {
    pub label: &'static str,
    /// Distance from the Sun in astronomical units.
    pub x_au: f64,
    /// Mass in Earth masses.
    pub y_earth_masses: f64,
    /// Rendered bubble radius in pixels.
    pub r_px: f64,
}

pub const PLANETS: &[BubbleDatum] = &[
    BubbleDatum {
        label: "Mercury",
        x_au: 0.39,
        y_earth_masses: 0.055,
        r_px: 5.0,
    },
    BubbleDatum {
        label: "Venus",
        x_au: 0.72,
        y_earth_masses: 0.815,
        r_px: 8.0,
    },
    BubbleDatum {
        label: "Earth",
        x_au: 1.00,
        y_earth_masses: 1.000,
        r_px: 10.0,
    },
    BubbleDatum {
        label: "Mars",
        x_au: 1.52,
        y_earth_masses: 0.107,
        r_px: 7.0,
    },
    BubbleDatum {
        label: "Jupiter",
        x_au: 5.20,
        y_earth_masses: 317.8,
        r_px: 25.0,
    },
    BubbleDatum {
        label: "Saturn",
        x_au: 9.58,
        y_earth_masses: 95.2,
        r_px: 22.0,
    },
    BubbleDatum {
        label: "Uranus",
        x_au: 19.2,
        y_earth_masses: 14.5,
        r_px: 15.0,
    },
    BubbleDatum {
        label: "Neptune",
        x_au: 30.1,
        y_earth_masses: 17.1,
        r_px: 16.0,
    },
];

// ---------------- Layout ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay out vertical bars inside `plot`, heights normalized against the
/// largest value. Each bar fills 60% of its slot, centered.
pub fn bar_layout(values: &[f64], plot: PlotArea) -> Vec<BarRect> {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    if values.is_empty() || max <= 0.0 {
        return Vec::new();
    }
    let slot = plot.width / values.len() as f64;
    let bar_width = slot * 0.6;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let height = (v.max(0.0) / max) * plot.height;
            BarRect {
                x: plot.x + slot * i as f64 + (slot - bar_width) / 2.0,
                y: plot.y + plot.height - height,
                width: bar_width,
                height,
            }
        })
        .collect()
}

/// Angle range of one doughnut wedge, in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Split a full turn into contiguous wedges proportional to `values`,
/// starting at twelve o'clock. Non-positive values get a zero-width wedge so
/// indices keep lining up with the dataset.
pub fn doughnut_segments(values: &[f64]) -> Vec<Segment> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return values
            .iter()
            .map(|_| Segment {
                start_angle: -FRAC_PI_2,
                end_angle: -FRAC_PI_2,
            })
            .collect();
    }
    let mut angle = -FRAC_PI_2;
    values
        .iter()
        .map(|v| {
            let span = v.max(0.0) / total * TAU;
            let seg = Segment {
                start_angle: angle,
                end_angle: angle + span,
            };
            angle += span;
            seg
        })
        .collect()
}

/// Canvas position of one bubble.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubblePoint {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

// Headroom keeps the outermost bubbles off the plot border.
const BUBBLE_AXIS_HEADROOM: f64 = 1.1;

/// Map bubble data onto `plot` with linear axes. The y axis grows upward,
/// so heavier planets land closer to the top of the plot.
pub fn bubble_layout(data: &[BubbleDatum], plot: PlotArea) -> Vec<BubblePoint> {
    let x_max = data.iter().map(|d| d.x_au).fold(0.0_f64, f64::max) * BUBBLE_AXIS_HEADROOM;
    let y_max = data
        .iter()
        .map(|d| d.y_earth_masses)
        .fold(0.0_f64, f64::max)
        * BUBBLE_AXIS_HEADROOM;
    if x_max <= 0.0 || y_max <= 0.0 {
        return Vec::new();
    }
    data.iter()
        .map(|d| BubblePoint {
            x: plot.x + (d.x_au / x_max) * plot.width,
            y: plot.y + plot.height - (d.y_earth_masses / y_max) * plot.height,
            radius: d.r_px,
        })
        .collect()
}
