use observatory_core::*;

#[test]
fn scaled_size_is_bounded_for_all_magnitudes() {
    for m in [0.0, 0.1, 1.0, 11.0, 109.0, 700.0, 1420.0, 1e6, 1e12, 1e300] {
        let size = scaled_size(m, SIZE_BASE_UNIT);
        assert!(
            (0.0..=SIZE_CAP_PX).contains(&size),
            "size {size} out of bounds for magnitude {m}"
        );
    }
}

#[test]
fn scaled_size_is_monotonic_non_decreasing() {
    let mut prev = scaled_size(0.0, SIZE_BASE_UNIT);
    for i in 1..=2000 {
        let m = i as f64 * 2.5;
        let size = scaled_size(m, SIZE_BASE_UNIT);
        assert!(size >= prev, "size decreased at magnitude {m}");
        prev = size;
    }
}

#[test]
fn scaled_size_is_zero_at_zero_magnitude() {
    assert_eq!(scaled_size(0.0, SIZE_BASE_UNIT), 0.0);
}

#[test]
fn scaled_size_matches_log_formula_below_the_cap() {
    let expected = SIZE_BASE_UNIT * (109.0_f64 + 1.0).ln();
    assert!((scaled_size(109.0, SIZE_BASE_UNIT) - expected).abs() < 1e-12);
    assert!(expected < SIZE_CAP_PX);
}

#[test]
fn scaled_size_caps_out_for_huge_magnitudes() {
    assert_eq!(scaled_size(1e9, SIZE_BASE_UNIT), SIZE_CAP_PX);
}

#[test]
fn comparison_dataset_is_exactly_the_five_bodies_in_order() {
    let expected = [
        ("Earth", 1.0),
        ("Jupiter", 11.0),
        ("Sun", 109.0),
        ("Betelgeuse", 700.0),
        ("VY Canis Majoris", 1420.0),
    ];
    assert_eq!(COMPARISON_OBJECTS.len(), expected.len());
    for (object, (name, magnitude)) in COMPARISON_OBJECTS.iter().zip(expected) {
        assert_eq!(object.name, name);
        assert_eq!(object.magnitude, magnitude);
        assert!(object.color.starts_with('#'));
    }
}
