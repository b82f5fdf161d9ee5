//! Label-anchored integer field location in a line of text.
//!
//! A field line looks like `VERSION_BUILD { 1045 };` where the label is
//! everything up to and including the space after the opening brace. The
//! integer payload is the run of ASCII digits starting right after the
//! label; scanning stops at the first non-digit, so the trailing ` };`
//! (or any other closing punctuation) never participates in parsing.

/// Byte offsets of an integer payload within a line.
///
/// `start` is the first digit, `end` is one past the last digit. An empty
/// span (`start == end`) means the label was found but no digits follow
/// it; callers treat the subsequent parse failure as a malformed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpan {
    pub start: usize,
    pub end: usize,
}

/// Locates the integer payload following `label` in `line`.
///
/// Returns `None` when the label does not occur in the line. Absence is
/// the expected outcome for most lines of a scanned file, so it is a
/// sentinel rather than an error.
///
/// # Example
/// ```ignore
/// let span = field_span("VERSION_BUILD { ", "VERSION_BUILD { 4 };").unwrap();
/// assert_eq!(span, FieldSpan { start: 16, end: 17 });
/// ```
pub fn field_span(label: &str, line: &str) -> Option<FieldSpan> {
    let start = line.find(label)? + label.len();

    let digits = line[start..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();

    Some(FieldSpan {
        start,
        end: start + digits,
    })
}

/// Extracts the integer that follows `label` in `line`.
///
/// Composition of [`field_span`] and a decimal parse. Returns `None` for
/// an absent label or a payload that is not a valid non-negative integer.
///
/// # Example
/// ```ignore
/// assert_eq!(extract_int("VERSION_BUILD { ", "VERSION_BUILD { 4 };"), Some(4));
/// assert_eq!(extract_int("VERSION_BUILD { ", "int x = 0;"), None);
/// ```
pub fn extract_int(label: &str, line: &str) -> Option<u32> {
    let span = field_span(label, line)?;
    line[span.start..span.end].parse::<u32>().ok()
}
