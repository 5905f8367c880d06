use std::fmt::Display;

use crate::SEPARATOR;

/// Split a dotted path into borrowed segments.
///
/// Always yields at least one segment: the empty string is the single
/// segment `""`.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split(SEPARATOR).collect()
}

/// Label for an element reached from `parent`, e.g. `servers.0` or
/// `servers.primary`.
pub fn child_path(parent: &str, step: impl Display) -> String {
    format!("{parent}{SEPARATOR}{step}")
}

/// Split off the last segment: `"a.b.c"` becomes `(Some("a.b"), "c")` and
/// `"a"` becomes `(None, "a")`.
pub fn split_last(path: &str) -> (Option<&str>, &str) {
    match path.rsplit_once(SEPARATOR) {
        Some((parent, last)) => (Some(parent), last),
        None => (None, path),
    }
}

/// Parse a segment as a signed base-10 integer.
///
/// An optional leading sign is accepted so that `-1` parses and can be
/// reported as out of range rather than malformed.
pub fn parse_index(step: &str) -> Option<i64> {
    step.parse().ok()
}

/// Convert a parsed index into a position within a sequence of `len`
/// elements.
pub fn index_within(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}
