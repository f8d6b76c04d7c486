//! # Error reporting for container operations
//!
//! Every fallible operation on the containers in this crate signals its
//! failure through the [`Error`] enum defined here. Each variant carries the
//! values that caused the failure, so callers can report them without having
//! to reconstruct context.
use std::error;
use std::fmt;

/// All errors returned by this crate.
///
/// Sizes and indices are `usize` throughout, so the "negative size" and
/// "negative index" failure modes of similar containers in other hosts are
/// unrepresentable here; only the upper bounds are checked at run time.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// A requested container size exceeds the build-time maximum.
    InvalidSize {
        /// The size the caller asked for.
        requested: usize,
        /// The bound it violated, [`crate::MAX_VECTOR_SIZE`] or
        /// [`crate::MAX_MATRIX_SIZE`].
        max: usize,
    },
    /// An element or row index is out of range for the container.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The container's current length along the indexed axis.
        len: usize,
    },
    /// Elementwise arithmetic was attempted between containers of different
    /// sizes.
    SizeMismatch {
        /// Size of the left operand.
        left: usize,
        /// Size of the right operand.
        right: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidSize { requested, max } => {
                write!(f, "invalid size {requested}: maximum is {max}")
            }
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Error::SizeMismatch { left, right } => {
                write!(f, "size mismatch between operands: {left} versus {right}")
            }
        }
    }
}

impl error::Error for Error {}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
