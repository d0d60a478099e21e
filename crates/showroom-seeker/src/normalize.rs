//! Numeric extraction from display-formatted strings.
//!
//! Listings keep prices, distances and engine figures in the form they are
//! shown to buyers: `"₹12.5 Lakh"`, `"45,000 km"`, `"1,498 cc"`. Every
//! comparison goes through [`normalize`], which turns such text into a plain
//! magnitude.
//!
//! ```
//! use showroom_seeker::normalize;
//!
//! assert_eq!(normalize("₹12.5 Lakh"), 1_250_000.0);
//! assert_eq!(normalize("45,000 km"), 45_000.0);
//! assert_eq!(normalize(""), 0.0);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Scale words and their multipliers, largest first.
///
/// Each marker must stand on its own: `"45k"` scales, `"45 km"` does not.
static UNIT_MARKERS: Lazy<Vec<(Regex, f64)>> = Lazy::new(|| {
    [
        (r"(?i)(?:^|[^a-z])(?:crores?|cr)\b", 10_000_000.0),
        (r"(?i)(?:^|[^a-z])(?:lakhs?|lacs?)\b", 100_000.0),
        (r"(?i)(?:^|[^a-z])(?:thousand|k)\b", 1_000.0),
    ]
    .into_iter()
    .map(|(pattern, scale)| (Regex::new(pattern).expect("unit marker pattern"), scale))
    .collect()
});

/// Extracts a comparable magnitude from a display string.
///
/// Every character that is not an ASCII digit or a decimal point is
/// dropped, and the remainder is parsed as a decimal number. When the
/// original text carries a scale word (thousand, lakh, crore) the parsed
/// value is multiplied by that scale.
///
/// Text with no parseable digits yields `0.0`. That is not an error: a
/// zero sorts below every non-zero range bound, which is how unpriced or
/// unmeasured listings are meant to behave.
pub fn normalize(display: &str) -> f64 {
    let digits: String = display
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    // "Rs. 5,00,000" leaves a stray leading point behind.
    let digits = digits.trim_matches('.');

    let magnitude = match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => return 0.0,
    };

    let scale = unit_scale(display);
    if scale == 1.0 {
        return magnitude;
    }
    // Scaled figures are whole units; this drops float noise like 980000.0000000001.
    let scaled = (magnitude * scale).round();
    if scaled.is_finite() {
        scaled
    } else {
        0.0
    }
}

/// Returns the multiplier for the first scale word found in `display`.
fn unit_scale(display: &str) -> f64 {
    UNIT_MARKERS
        .iter()
        .find(|(marker, _)| marker.is_match(display))
        .map_or(1.0, |(_, scale)| *scale)
}
