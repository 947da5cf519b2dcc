use std::fmt::{Display, Formatter};

/// Errors raised by the checked operations of [`Sequence`](crate::Sequence)
/// and the adapters built on top of it.
///
/// Every failing call aborts before it mutates anything, so the container is
/// left exactly as it was.
///
/// A missing capability (e.g. searching an `Opaque` container by value) is
/// not an error; such searches simply report "not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The operation needs at least one element and the container has none.
    EmptyContainer,

    /// Position outside the legal range of `insert` (`[0, size]`) or
    /// `erase` (`[0, size)`).
    IndexOutOfBounds {
        /// Requested position.
        index: isize,
        /// Size of the container at the time of the call.
        size: usize,
    },

    /// Position outside `[0, size)` for checked element access.
    IndexOutOfRange {
        /// Requested position.
        index: isize,
        /// Size of the container at the time of the call.
        size: usize,
    },

    /// `resize` was called with a negative target size.
    NegativeSize {
        /// Requested size.
        requested: isize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyContainer => write!(f, "Operation requires at least one element but the container is empty."),
            Error::IndexOutOfBounds { index, size } => {
                write!(f, "Index {} out of bounds for sequence of size {}.", index, size)
            }
            Error::IndexOutOfRange { index, size } => {
                write!(f, "Index {} out of range for sequence of size {}.", index, size)
            }
            Error::NegativeSize { requested } => {
                write!(f, "Cannot resize to negative size {}.", requested)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
