//! Display-value parsing and numeric normalization.
//!
//! Deck content stores statistics as human-authored display strings such as
//! `"$1,200"`, `"25-35%"` or `"0.05"`. This module extracts the numeric core
//! of such a string so it can be animated and compared, while preserving the
//! decoration (currency symbol, unit) for final rendering. It also provides
//! the easing curve used by count-up animations and the clamped
//! percentage-width formula used by comparison charts.

use once_cell::sync::Lazy;
use regex::Regex;

/// Default visibility floor for comparison bars, in percent.
pub const DEFAULT_BAR_FLOOR: f64 = 8.0;

/// Leading run of decoration characters before the first digit.
static LEADING_DECORATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^0-9]*").expect("valid regex"));

/// The numeric run: digits with optional thousands separators and at most
/// one fractional part.
static NUMERIC_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9][0-9,]*(\.[0-9]+)?").expect("valid regex"));

/// A display string split into its numeric core and surrounding decoration.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedValue {
    /// Decoration before the number, e.g. `"$"`.
    pub prefix: String,
    /// The numeric magnitude of the first number in the string.
    pub numeric: f64,
    /// Everything after the number, e.g. `"%"` or `"/kWh"`.
    pub suffix: String,
    /// Whether the source number carried a decimal point. Governs output
    /// precision: integer truncation without, two decimals with.
    pub has_decimal: bool,
}

/// Extract the numeric core of a display string.
///
/// Returns `None` when the string contains no digits; callers must then
/// treat the original string as an opaque literal and display it unchanged.
///
/// Only the first contiguous number is extracted. A range like `"25-35%"`
/// yields `25` with suffix `"-35%"`; the comparison-bar width then reflects
/// the lower bound while the rendered text still shows the full range.
pub fn extract_numeric(display: &str) -> Option<ParsedValue> {
    let prefix = LEADING_DECORATION
        .find(display)
        .map(|m| m.as_str())
        .unwrap_or("");
    let rest = &display[prefix.len()..];

    let run = NUMERIC_RUN.find(rest)?.as_str();
    let suffix = &rest[run.len()..];

    // Thousands separators are display-only.
    let numeric: f64 = run.replace(',', "").parse().ok()?;
    if !numeric.is_finite() {
        return None;
    }

    Some(ParsedValue {
        prefix: prefix.to_string(),
        numeric,
        suffix: suffix.to_string(),
        has_decimal: run.contains('.'),
    })
}

/// Cubic ease-out: `1 - (1 - p)^3`, with `p` clamped to `[0, 1]`.
///
/// Exact at the endpoints (`0 -> 0`, `1 -> 1`) and monotonically
/// non-decreasing in between.
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Interpolate from zero to `target` along the cubic ease-out curve.
pub fn compute_eased_value(target: f64, progress: f64) -> f64 {
    target * ease_out_cubic(progress)
}

/// Render a magnitude with its decoration.
///
/// Values from sources without a decimal point are truncated to an integer;
/// values from decimal sources are fixed to two places. Thousands separators
/// are not re-inserted: `"$1,200"` renders as `"$1200"` at the end of its
/// animation.
pub fn format_value(value: f64, prefix: &str, suffix: &str, has_decimal: bool) -> String {
    if has_decimal {
        format!("{}{:.2}{}", prefix, value, suffix)
    } else {
        format!("{}{}{}", prefix, value.trunc() as i64, suffix)
    }
}

/// Map a magnitude to a bar-fill percentage relative to `max_value`.
///
/// The result is clamped to `[floor_percent, 100]` so that every bar stays
/// visible, even for near-zero values, and overflow is truncated rather than
/// treated as an error. `max_value` must be positive; a non-positive maximum
/// still yields a value inside the clamp range, but which one is unspecified.
pub fn compute_bar_width(numeric: f64, max_value: f64, floor_percent: f64) -> f64 {
    let pct = (numeric / max_value) * 100.0;
    if pct.is_nan() {
        return floor_percent;
    }
    pct.max(floor_percent).min(100.0)
}
