//! Shared placeholder values
//!
//! Every "no value" in a result goes through these constants so that a
//! no-match can be detected downstream by simple comparison.

/// Placeholder for any descriptive field without a value
pub const UNKNOWN: &str = "Unknown";

/// Code used when no reference condition was selected ("does not exist")
pub const NO_MATCH_CODE: &str = "DNE";

/// Use the trimmed value when present and non-empty, otherwise [`UNKNOWN`]
#[must_use]
pub fn or_unknown(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

/// Whether a code is the no-match sentinel
#[must_use]
pub fn is_no_match(code: &str) -> bool {
    code == NO_MATCH_CODE
}
