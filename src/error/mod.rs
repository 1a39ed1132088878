//! Error types for bytejoin.

use std::collections::TryReserveError;
use std::fmt;

/// Which argument of [`join`](crate::join) an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The leading sequence (`s1`).
    First,
    /// The trailing sequence (`s2`).
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

/// Errors that can occur while joining two sequences.
#[derive(Debug)]
pub enum JoinError {
    /// One of the inputs was absent.
    MissingInput {
        /// The absent argument. `First` wins when both are absent.
        side: Side,
    },

    /// The result buffer could not be allocated.
    Alloc(TryReserveError),
}

impl fmt::Display for JoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinError::MissingInput { side } => write!(f, "missing {} input", side),
            JoinError::Alloc(e) => write!(f, "allocation failed: {}", e),
        }
    }
}

impl std::error::Error for JoinError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JoinError::Alloc(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TryReserveError> for JoinError {
    fn from(e: TryReserveError) -> Self {
        JoinError::Alloc(e)
    }
}
