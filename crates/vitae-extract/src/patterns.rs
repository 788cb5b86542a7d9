//! Shared regex sources and context-window helpers.
//!
//! Field values are verbatim matched substrings; no calendar or name
//! normalization happens here.

use once_cell::sync::Lazy;
use regex::Regex;

/// Degree phrase: level, connector, then a recognized field name.
pub(crate) const DEGREE: &str = r"(?i)(?:Bachelor|BS|BA|Master|MS|MA|PhD|Doctorate|Associate)(?:\s+of\s+|\s+in\s+|\s+)(?:Science|Arts|Engineering|Business|Administration|Computer Science|Information Technology|Financial Technology|Data Science)";

/// Date range grammar: `<Month> <Year> - <Month> <Year>`, `<Month> <Year> - Present`,
/// `<Year> - <Year>`, or `<Year> - Present`.
pub(crate) const DATE_RANGE: &str = r"(?i)(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]* \d{4} - (?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]* \d{4}|(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]* \d{4} - Present|\d{4} - \d{4}|\d{4} - Present";

/// GPA spellings: `GPA: 3.5` / `GPA 3.5` or `3.5/4.0 GPA`.
pub(crate) const GPA: &str = r"GPA:? \d+\.\d+|\d+\.\d+/\d+\.\d+ GPA";

/// First decimal number inside a GPA expression.
pub(crate) const DECIMAL: &str = r"\d+\.\d+";

// Shared compiled matchers. The sources are fixed literals verified by the
// `shared_patterns_compile` test, so the expects cannot fire at runtime.
pub(crate) static DEGREE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEGREE).expect("degree pattern compiles"));
pub(crate) static DATE_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(DATE_RANGE).expect("date range pattern compiles"));
pub(crate) static GPA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(GPA).expect("gpa pattern compiles"));
pub(crate) static DECIMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(DECIMAL).expect("decimal pattern compiles"));

/// Slice a context window of `[start - before, end + after]` bytes around a
/// match, clamped to the text and widened to char boundaries so multi-byte
/// input never panics.
pub(crate) fn context_window(
    text: &str,
    start: usize,
    end: usize,
    before: usize,
    after: usize,
) -> &str {
    let mut lo = start.saturating_sub(before);
    let mut hi = end.saturating_add(after).min(text.len());
    while !text.is_char_boundary(lo) {
        lo -= 1;
    }
    while !text.is_char_boundary(hi) {
        hi += 1;
    }
    &text[lo..hi]
}

/// Split a matched date range on the literal `" - "` separator. Returns the
/// verbatim halves only when the split yields exactly two parts.
pub(crate) fn split_date_range(range: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = range.split(" - ").collect();
    match parts.as_slice() {
        [start, end] => Some((start.to_string(), end.to_string())),
        _ => None,
    }
}
