//! Tests for display-value parsing, easing and bar-width math.

use lapacho::numeric::{
    compute_bar_width, compute_eased_value, ease_out_cubic, extract_numeric, format_value,
    DEFAULT_BAR_FLOOR,
};

#[test]
fn extracts_currency_with_thousands_separator() {
    let parsed = extract_numeric("$1,200").expect("has digits");
    assert_eq!(parsed.prefix, "$");
    assert_eq!(parsed.numeric, 1200.0);
    assert_eq!(parsed.suffix, "");
    assert!(!parsed.has_decimal);
}

#[test]
fn extracts_first_number_of_a_range() {
    // Only the first contiguous number is extracted; the rest of the range
    // stays in the suffix. Documented behavior, not a bug.
    let parsed = extract_numeric("25-35%").expect("has digits");
    assert_eq!(parsed.prefix, "");
    assert_eq!(parsed.numeric, 25.0);
    assert_eq!(parsed.suffix, "-35%");
    assert!(!parsed.has_decimal);
}

#[test]
fn extracts_decimal_value() {
    let parsed = extract_numeric("0.05").expect("has digits");
    assert_eq!(parsed.numeric, 0.05);
    assert!(parsed.has_decimal);
    assert_eq!(format_value(parsed.numeric, "", "", true), "0.05");
}

#[test]
fn extracts_prefix_and_unit_suffix() {
    let parsed = extract_numeric("$0.05/kWh").expect("has digits");
    assert_eq!(parsed.prefix, "$");
    assert_eq!(parsed.numeric, 0.05);
    assert_eq!(parsed.suffix, "/kWh");
    assert!(parsed.has_decimal);
}

#[test]
fn extracts_plain_integer() {
    let parsed = extract_numeric("28").expect("has digits");
    assert_eq!(parsed.prefix, "");
    assert_eq!(parsed.numeric, 28.0);
    assert_eq!(parsed.suffix, "");
}

#[test]
fn extracts_trailing_plus() {
    let parsed = extract_numeric("$800+").expect("has digits");
    assert_eq!(parsed.prefix, "$");
    assert_eq!(parsed.numeric, 800.0);
    assert_eq!(parsed.suffix, "+");
}

#[test]
fn digitless_strings_are_unparseable() {
    for s in ["", "N/A", "BB", "—", "..."] {
        assert!(extract_numeric(s).is_none(), "expected None for {:?}", s);
    }
}

#[test]
fn any_string_with_a_digit_parses_finitely() {
    for s in ["#1", "a7b", "9,,", "x0.5y", "12.", "€3/mo", "v2.0.1"] {
        let parsed = extract_numeric(s).unwrap_or_else(|| panic!("expected Some for {:?}", s));
        assert!(parsed.numeric.is_finite(), "non-finite for {:?}", s);
    }
}

#[test]
fn easing_is_exact_at_endpoints() {
    for target in [0.0, 1.0, 25.0, 1200.0, 0.05, 1e9] {
        assert_eq!(compute_eased_value(target, 0.0), 0.0);
        assert_eq!(compute_eased_value(target, 1.0), target);
    }
}

#[test]
fn easing_is_monotone_and_clamped() {
    let mut prev = -1.0;
    for i in 0..=100 {
        let eased = ease_out_cubic(i as f64 / 100.0);
        assert!(eased >= prev, "decreased at step {}", i);
        assert!((0.0..=1.0).contains(&eased));
        prev = eased;
    }
    // Out-of-range progress clamps rather than extrapolating.
    assert_eq!(ease_out_cubic(-0.5), 0.0);
    assert_eq!(ease_out_cubic(1.5), 1.0);
}

#[test]
fn integer_formatting_truncates() {
    assert_eq!(format_value(87.5, "", "", false), "87");
    assert_eq!(format_value(1199.97, "$", "", false), "$1199");
    assert_eq!(format_value(25.0, "", "-35%", false), "25-35%");
}

#[test]
fn decimal_formatting_uses_two_places() {
    assert_eq!(format_value(0.04375, "$", "/kWh", true), "$0.04/kWh");
    assert_eq!(format_value(0.05, "$", "/kWh", true), "$0.05/kWh");
}

#[test]
fn bar_width_matches_proportional_example() {
    let w = compute_bar_width(10.0, 35.0, 8.0);
    assert!((w - 28.571428).abs() < 1e-4);
    assert!((8.0..=100.0).contains(&w));
}

#[test]
fn bar_width_floors_small_values() {
    assert_eq!(compute_bar_width(0.0, 35.0, 8.0), 8.0);
    assert_eq!(compute_bar_width(1.0, 1000.0, 8.0), 8.0);
}

#[test]
fn bar_width_clamps_overflow_to_full() {
    assert_eq!(compute_bar_width(50.0, 35.0, 8.0), 100.0);
}

#[test]
fn bar_width_stays_in_range() {
    for x in [0.0, 0.001, 5.0, 34.9, 35.0, 36.0, 1e6] {
        let w = compute_bar_width(x, 35.0, DEFAULT_BAR_FLOOR);
        assert!(
            (DEFAULT_BAR_FLOOR..=100.0).contains(&w),
            "out of range for x={}: {}",
            x,
            w
        );
    }
}

#[test]
fn bar_width_is_monotone_in_magnitude() {
    let mut prev = 0.0;
    for i in 0..=50 {
        let w = compute_bar_width(i as f64, 35.0, 8.0);
        assert!(w >= prev, "decreased at magnitude {}", i);
        prev = w;
    }
}
