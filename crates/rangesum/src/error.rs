//! Error types for rangesum

use std::fmt;

/// Result type alias for range-sum operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for array, tree and cache operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Index outside the valid positions for a structure of length `len`
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Number of elements
        len: usize,
    },

    /// Range whose start lies after its end
    InvalidRange {
        /// Range start
        start: usize,
        /// Range end
        end: usize,
    },

    /// Value count handed to `build` differs from the tree size
    SizeMismatch {
        /// Tree size
        expected: usize,
        /// Values supplied
        actual: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Index out of range: {} (len {})", index, len)
            }
            Error::InvalidRange { start, end } => {
                write!(f, "Invalid range: start {} is after end {}", start, end)
            }
            Error::SizeMismatch { expected, actual } => {
                write!(f, "Size mismatch: expected {} values, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::IndexOutOfRange { index: 7, len: 5 };
        assert_eq!(err.to_string(), "Index out of range: 7 (len 5)");

        let err = Error::InvalidRange { start: 3, end: 1 };
        assert_eq!(err.to_string(), "Invalid range: start 3 is after end 1");

        let err = Error::SizeMismatch { expected: 4, actual: 2 };
        assert_eq!(err.to_string(), "Size mismatch: expected 4 values, got 2");
    }
}
