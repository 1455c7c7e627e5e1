//! Error types for lineal operations.
//!
//! Dimensions are const generics, so shape mismatches between operands are
//! compile-time errors and never show up here. What remains fallible at
//! runtime is checked element access and construction from a slice whose
//! length the type cannot verify statically.

use std::fmt;

/// Error type for all fallible lineal operations.
///
/// # Examples
///
/// ```
/// use lineal::LinealError;
///
/// let err = LinealError::index_out_of_bounds(10, 5);
/// assert_eq!(err.to_string(), "index 10 out of bounds (len=5)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinealError {
    /// Checked flat access with an index past the end of the storage.
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of elements in the container.
        len: usize,
    },

    /// Checked two-dimensional access with a column or row outside the grid.
    EntryOutOfBounds {
        /// Requested column.
        col: usize,
        /// Requested row.
        row: usize,
        /// Number of columns.
        ncols: usize,
        /// Number of rows.
        nrows: usize,
    },

    /// Construction from a slice whose length does not match the
    /// container's element count.
    LengthMismatch {
        /// Element count required by the container's dimensions.
        expected: usize,
        /// Element count actually provided.
        actual: usize,
    },
}

impl fmt::Display for LinealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds (len={len})")
            }
            Self::EntryOutOfBounds {
                col,
                row,
                ncols,
                nrows,
            } => {
                write!(
                    f,
                    "entry ({col},{row}) out of bounds (cols={ncols}, rows={nrows})"
                )
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "length mismatch: expected {expected} elements, got {actual}")
            }
        }
    }
}

impl std::error::Error for LinealError {}

impl LinealError {
    /// Creates a [`LinealError::IndexOutOfBounds`] error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Creates a [`LinealError::EntryOutOfBounds`] error.
    #[must_use]
    pub fn entry_out_of_bounds(col: usize, row: usize, ncols: usize, nrows: usize) -> Self {
        Self::EntryOutOfBounds {
            col,
            row,
            ncols,
            nrows,
        }
    }

    /// Creates a [`LinealError::LengthMismatch`] error.
    #[must_use]
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }
}

/// Result type alias for lineal operations.
pub type Result<T> = std::result::Result<T, LinealError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_bounds_display() {
        let err = LinealError::index_out_of_bounds(7, 3);
        assert_eq!(err.to_string(), "index 7 out of bounds (len=3)");
    }

    #[test]
    fn test_entry_out_of_bounds_display() {
        let err = LinealError::entry_out_of_bounds(4, 1, 3, 2);
        assert_eq!(err.to_string(), "entry (4,1) out of bounds (cols=3, rows=2)");
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = LinealError::length_mismatch(6, 5);
        assert_eq!(err.to_string(), "length mismatch: expected 6 elements, got 5");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            LinealError::index_out_of_bounds(1, 2),
            LinealError::IndexOutOfBounds { index: 1, len: 2 }
        );
        assert_ne!(
            LinealError::index_out_of_bounds(1, 2),
            LinealError::index_out_of_bounds(2, 1)
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&LinealError::length_mismatch(3, 4));
    }
}
