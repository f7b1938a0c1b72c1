//! Error types for rowstep.

use thiserror::Error;

/// Result type alias using rowstep's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by field arithmetic and matrix access.
///
/// All of these are caller precondition violations. Nothing in the crate
/// retries or substitutes a default after producing one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A zero denominator, a division by zero, or the inverse of zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A cell index outside the matrix.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// The entry grid does not have the declared shape.
    #[error("entry grid does not match {rows}x{cols}: {detail}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        detail: String,
    },
}
