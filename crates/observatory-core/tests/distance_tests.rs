use observatory_core::*;

#[test]
fn convert_rejects_non_positive_and_non_finite_input() {
    for bad in [0.0, -0.5, -1e12, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(
            convert(bad),
            Err(ConversionError::InvalidInput),
            "expected rejection for {bad}"
        );
    }
}

#[test]
fn conversion_factors_apply_exactly() {
    for d in [0.001, 0.5, 1.0, 4.24, 1000.0, 2.5e6] {
        let c = convert(d).expect("positive distance must convert");
        assert_eq!(c.kilometers, d * 9.461e12);
        assert_eq!(c.miles, d * 5.879e12);
        assert_eq!(c.light_speed_years, d);
        assert_eq!(c.shuttle_years, d * 37_000.0);
    }
}

#[test]
fn kilometers_always_exceed_miles() {
    for d in [0.01, 1.0, 42.0, 9.9e9] {
        let c = convert(d).unwrap();
        assert!(c.kilometers > c.miles);
    }
}

#[test]
fn proxima_centauri_example() {
    // 4.24 light-years, the distance to Proxima Centauri
    let c = convert(4.24).unwrap();
    assert_eq!(format_exponential(c.kilometers), "4.01e13");
    assert!((c.shuttle_years - 156_880.0).abs() < 1e-6);
    assert_eq!(format_grouped(c.shuttle_years), "156,880");
}

#[test]
fn huge_distances_still_render_clean_numbers() {
    // Shuttle years outgrow exact integer range long before the input does;
    // the grouped formatter must not emit saturated digits.
    let c = convert(1e15).unwrap();
    assert_eq!(format_grouped(c.shuttle_years), "3.70e19");
    assert_eq!(format_exponential(c.kilometers), "9.46e27");
}

#[test]
fn validation_message_is_fixed() {
    assert_eq!(
        INVALID_DISTANCE_MESSAGE,
        "Please enter a valid distance in light-years."
    );
}
