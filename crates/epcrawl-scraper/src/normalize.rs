//! Numeric text normalization for prices, areas and room counts.
//!
//! The source site formats numbers for French readers: thousands grouped
//! with (non-breaking) spaces, a comma as decimal separator, and a currency
//! or unit glyph glued to the value. Everything here is total: unreadable
//! input yields zero instead of an error.

use std::sync::LazyLock;

use regex::Regex;

static NON_NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.,]").expect("valid regex"));

/// Unit and currency glyphs removed before the character filter runs.
///
/// `m2` must go as a whole: the filter alone would keep its `2` and glue it
/// onto the value (`"85 m2"` would read as `852`).
const UNIT_GLYPHS: [&str; 4] = ["m²", "m2", "€", "²"];

/// Converts a raw text fragment such as `"1 234,56 €"` or `"85 m²"` into a
/// floating-point value.
///
/// Whitespace (including U+00A0 and U+202F) and unit glyphs are stripped,
/// every remaining character other than a digit, `.` or `,` is dropped, and
/// commas become periods. If more than one separator survives (`"1,234,56"`)
/// the string does not parse and the result is `0.0`.
///
/// Never fails and never returns a negative or non-finite value.
#[must_use]
pub fn normalize_decimal(text: &str) -> f64 {
    let mut compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    for glyph in UNIT_GLYPHS {
        if compact.contains(glyph) {
            compact = compact.replace(glyph, "");
        }
    }

    let cleaned = NON_NUMERIC_RE.replace_all(&compact, "").replace(',', ".");
    if cleaned.is_empty() {
        return 0.0;
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Extracts an integer count from text such as `"3 pièces"`.
///
/// Every non-digit character is dropped and the remainder parsed; an empty
/// remainder or a value that overflows `u32` yields `0`.
#[must_use]
pub fn normalize_count(text: &str) -> u32 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<u32>().unwrap_or(0)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
