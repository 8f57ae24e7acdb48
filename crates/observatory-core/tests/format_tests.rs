use observatory_core::*;

#[test]
fn group_thousands_inserts_commas_every_three_digits() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(156_880), "156,880");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}

#[test]
fn format_grouped_keeps_short_fractions() {
    assert_eq!(format_grouped(4.24), "4.24");
    assert_eq!(format_grouped(0.125), "0.125");
    assert_eq!(format_grouped(1234.5), "1,234.5");
}

#[test]
fn format_grouped_trims_trailing_zeros() {
    assert_eq!(format_grouped(5.0), "5");
    assert_eq!(format_grouped(2.50), "2.5");
    assert_eq!(format_grouped(3.10), "3.1");
}

#[test]
fn format_grouped_handles_negative_values() {
    assert_eq!(format_grouped(-1234.5), "-1,234.5");
    assert_eq!(format_grouped(-7.0), "-7");
}

#[test]
fn format_grouped_falls_back_to_exponential_past_exact_integer_range() {
    assert_eq!(format_grouped(3.7e19), "3.70e19");
    assert_eq!(format_grouped(-3.7e19), "-3.70e19");
    assert_eq!(format_grouped(f64::INFINITY), "inf");
    // Just inside the exact range still groups.
    assert_eq!(format_grouped(9_007_199_254_740_000.0), "9,007,199,254,740,000");
}

#[test]
fn format_exponential_uses_two_fractional_digits() {
    assert_eq!(format_exponential(40_114_640_000_000.0), "4.01e13");
    assert_eq!(format_exponential(1234.0), "1.23e3");
    assert_eq!(format_exponential(0.00123), "1.23e-3");
}
