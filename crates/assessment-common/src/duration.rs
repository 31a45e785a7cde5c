//! Minute extraction from free-text assessment lengths.
use std::sync::LazyLock;

use regex::Regex;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

/// Returns the first run of decimal digits in `text` as a number of minutes.
///
/// Units are not interpreted: "2 hours" yields `Some(2)`. Text without digits, or a
/// digit run that overflows `u32`, yields `None`.
pub fn extract_minutes(text: &str) -> Option<u32> {
    DIGIT_RUN.find(text)?.as_str().parse().ok()
}
