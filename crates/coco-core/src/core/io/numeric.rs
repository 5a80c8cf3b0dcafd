//! Lenient numeric conversions for report cells.
//!
//! Every function here answers `None` for "no value" instead of erroring, leaving the
//! choice of default to the caller.

/// Returns the leading number of a cell shaped like `"<number> / <anything>"`.
///
/// The number is the run of ASCII digits and `.` at the very start of the cell; it must be
/// followed, after optional whitespace, by a `/`.
pub fn leading_number_token(value: &str) -> Option<&str> {
    let end = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());
    if end == 0 {
        return None;
    }
    let rest = value[end..].trim_start();
    rest.starts_with('/').then(|| &value[..end])
}

/// [`leading_number_token`] converted to `f64`; a token such as `"1.2.3"` yields `None`.
pub fn leading_number(value: &str) -> Option<f64> {
    leading_number_token(value)?.parse().ok()
}

pub fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}
