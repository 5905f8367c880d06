//! Textual unit parsers.
//!
//! Settings files commonly spell quantities as `128mb` or `5m`. These
//! functions turn such strings into numbers; they know nothing about trees.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use settings_units::{parse_duration, parse_size};
//!
//! assert_eq!(parse_size("14k").unwrap(), 14 * 1024);
//! assert_eq!(parse_duration("5m").unwrap(), Duration::from_secs(300));
//! ```

use thiserror::Error;

pub mod duration;
pub mod size;

pub use duration::parse_duration;
pub use size::parse_size;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("invalid size: {0:?}")]
    InvalidSize(String),
    #[error("size overflows i64: {0:?}")]
    SizeOverflow(String),
    #[error("invalid duration {input:?}: {reason}")]
    InvalidDuration { input: String, reason: String },
}
