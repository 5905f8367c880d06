use thiserror::Error;

/// Failure kinds reported by tree navigation, typed access and mutation.
///
/// Every variant is terminal for the call that produced it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsError {
    /// A mapping key or sequence index did not resolve on the read path.
    #[error("key not found")]
    KeyNotFound,
    /// A value was found but cannot be interpreted as the requested kind.
    #[error("invalid type conversion")]
    TypeMismatch,
    /// A container on the path was neither a mapping nor a sequence.
    #[error("invalid object")]
    WrongObject,
    /// A sequence segment is not an integer.
    #[error("invalid index")]
    InvalidIndex,
    /// A sequence index is outside the sequence (write path only).
    #[error("index out of range")]
    OutOfRange,
}

pub type Result<T> = std::result::Result<T, SettingsError>;
