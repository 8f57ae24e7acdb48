use observatory_core::charts::*;
use std::f64::consts::{FRAC_PI_2, TAU};

const PLOT: PlotArea = PlotArea {
    x: 10.0,
    y: 20.0,
    width: 500.0,
    height: 300.0,
};

#[test]
fn galaxy_dataset_matches_the_published_figures() {
    let expected = [
        ("Milky Way", 100_000.0),
        ("Andromeda", 220_000.0),
        ("Triangulum", 60_000.0),
        ("Large Magellanic Cloud", 14_000.0),
        ("Small Magellanic Cloud", 7_000.0),
    ];
    assert_eq!(GALAXY_DIAMETERS.len(), expected.len());
    for (datum, (label, value)) in GALAXY_DIAMETERS.iter().zip(expected) {
        assert_eq!(datum.label, label);
        assert_eq!(datum.value, value);
    }
}

#[test]
fn stellar_population_shares_sum_to_one_hundred() {
    let total: f64 = STELLAR_POPULATIONS.iter().map(|d| d.value).sum();
    assert_eq!(total, 100.0);
    assert_eq!(STELLAR_POPULATIONS.len(), 5);
}

#[test]
fn planet_dataset_covers_all_eight_planets() {
    assert_eq!(PLANETS.len(), 8);
    let earth = PLANETS.iter().find(|p| p.label == "Earth").unwrap();
    assert_eq!(earth.x_au, 1.0);
    assert_eq!(earth.y_earth_masses, 1.0);
    // dataset is ordered by distance from the Sun
    for pair in PLANETS.windows(2) {
        assert!(pair[0].x_au < pair[1].x_au);
    }
}

#[test]
fn bar_layout_normalizes_against_the_largest_value() {
    let values = [50.0, 100.0, 25.0];
    let rects = bar_layout(&values, PLOT);
    assert_eq!(rects.len(), 3);
    assert_eq!(rects[1].height, PLOT.height);
    assert_eq!(rects[1].y, PLOT.y);
    assert!((rects[0].height - PLOT.height / 2.0).abs() < 1e-9);
    assert!((rects[2].height - PLOT.height / 4.0).abs() < 1e-9);
}

#[test]
fn bar_layout_keeps_bars_inside_the_plot() {
    let values: Vec<f64> = GALAXY_DIAMETERS.iter().map(|d| d.value).collect();
    for rect in bar_layout(&values, PLOT) {
        assert!(rect.x >= PLOT.x);
        assert!(rect.x + rect.width <= PLOT.x + PLOT.width + 1e-9);
        assert!(rect.y >= PLOT.y - 1e-9);
        assert!(rect.y + rect.height <= PLOT.y + PLOT.height + 1e-9);
    }
}

#[test]
fn bar_layout_handles_degenerate_input() {
    assert!(bar_layout(&[], PLOT).is_empty());
    assert!(bar_layout(&[0.0, 0.0], PLOT).is_empty());
}

#[test]
fn doughnut_segments_are_contiguous_and_cover_a_full_turn() {
    let values: Vec<f64> = STELLAR_POPULATIONS.iter().map(|d| d.value).collect();
    let segments = doughnut_segments(&values);
    assert_eq!(segments.len(), values.len());
    assert_eq!(segments[0].start_angle, -FRAC_PI_2);
    for pair in segments.windows(2) {
        assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-12);
    }
    let last = segments.last().unwrap();
    assert!((last.end_angle - (-FRAC_PI_2 + TAU)).abs() < 1e-9);
}

#[test]
fn doughnut_segment_spans_are_proportional_to_values() {
    let segments = doughnut_segments(&[76.0, 12.0, 6.0, 4.0, 2.0]);
    let span = |s: &Segment| s.end_angle - s.start_angle;
    assert!((span(&segments[0]) - 0.76 * TAU).abs() < 1e-9);
    assert!((span(&segments[4]) - 0.02 * TAU).abs() < 1e-9);
}

#[test]
fn doughnut_segments_with_no_positive_values_are_empty_wedges() {
    for segment in doughnut_segments(&[0.0, -3.0]) {
        assert_eq!(segment.start_angle, segment.end_angle);
    }
}

#[test]
fn bubble_layout_maps_points_into_the_plot() {
    let points = bubble_layout(PLANETS, PLOT);
    assert_eq!(points.len(), PLANETS.len());
    for point in &points {
        assert!(point.x >= PLOT.x && point.x <= PLOT.x + PLOT.width);
        assert!(point.y >= PLOT.y && point.y <= PLOT.y + PLOT.height);
        assert!(point.radius > 0.0);
    }
}

#[test]
fn bubble_layout_inverts_the_mass_axis() {
    let points = bubble_layout(PLANETS, PLOT);
    let jupiter = PLANETS.iter().position(|p| p.label == "Jupiter").unwrap();
    // heaviest planet sits highest on the canvas (smallest y)
    for (i, point) in points.iter().enumerate() {
        if i != jupiter {
            assert!(points[jupiter].y < point.y);
        }
    }
    let neptune = PLANETS.iter().position(|p| p.label == "Neptune").unwrap();
    for (i, point) in points.iter().enumerate() {
        if i != neptune {
            assert!(points[neptune].x > point.x);
        }
    }
}
