//! The error type returned by fallible constructors and checked accessors.

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A precondition on the shape or contents of an argument was violated.
    InvalidArgument,
    /// An element index was outside of the valid range.
    OutOfRange,
}

/// Errors produced by this crate.
///
/// Values are never partially constructed: an operation that fails returns one of these instead
/// of a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("expected {expected} rows, got {actual}")]
    RowCountMismatch { expected: usize, actual: usize },

    #[error("row {row} has {len} elements, but a {rows}x{cols} matrix needs {cols}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        row: usize,
        len: usize,
    },

    #[error("result of combining vectors must have {expected} elements, not {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("cannot average an empty list")]
    EmptyInput,

    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
}

impl Error {
    /// Returns the [`ErrorKind`] this error belongs to.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmath::*;
    /// let err = Vec2I::try_from_slice(&[1, 2, 3]).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    ///
    /// let err = vec2(1, 2).get(2).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::OutOfRange);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::OutOfRange { .. } => ErrorKind::OutOfRange,
            Error::LengthMismatch { .. }
            | Error::RowCountMismatch { .. }
            | Error::ShapeMismatch { .. }
            | Error::SizeMismatch { .. }
            | Error::EmptyInput => ErrorKind::InvalidArgument,
        }
    }
}

/// Result alias using this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(
            Error::OutOfRange { index: 2, len: 2 }.kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(Error::EmptyInput.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            Error::SizeMismatch {
                expected: 4,
                actual: 3
            }
            .kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            Error::LengthMismatch {
                expected: 3,
                actual: 2
            }
            .to_string(),
            "expected 3 elements, got 2"
        );
        assert_eq!(
            Error::ShapeMismatch {
                rows: 2,
                cols: 3,
                row: 1,
                len: 2
            }
            .to_string(),
            "row 1 has 2 elements, but a 2x3 matrix needs 3"
        );
        assert_eq!(
            Error::OutOfRange { index: 5, len: 4 }.to_string(),
            "index 5 out of range for length 4"
        );
    }
}
