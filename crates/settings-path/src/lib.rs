//! Dotted path utilities.
//!
//! A path is a string of segments joined by `.`. Each segment is either a
//! mapping key or, when the addressed container is a sequence, a base-10
//! index. Segments are never escaped, so a key containing `.` cannot be
//! addressed.
//!
//! # Example
//!
//! ```
//! use settings_path::{child_path, parse_index, split_last, split_path};
//!
//! assert_eq!(split_path("a.b.1"), vec!["a", "b", "1"]);
//! assert_eq!(split_last("a.b.1"), (Some("a.b"), "1"));
//! assert_eq!(child_path("servers", 2), "servers.2");
//! assert_eq!(parse_index("1"), Some(1));
//! assert_eq!(parse_index("one"), None);
//! ```

pub mod util;
pub use util::{child_path, index_within, parse_index, split_last, split_path};

/// Segment separator.
pub const SEPARATOR: char = '.';
