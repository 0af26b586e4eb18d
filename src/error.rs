//! Error taxonomy shared by every layer of the engine (spec §7).

use thiserror::Error;

/// Every fallible operation in this crate returns this `Result` alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the field, matrix, coder, queue and harness layers.
///
/// Propagation policy: every fallible operation returns an explicit status;
/// nothing here retries on the caller's behalf.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// `m` out of range, `g` of the wrong degree, or `k`/`p` chosen such
    /// that `n = k + p` exceeds the field's order.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A checked allocation (`try_reserve`) failed.
    #[error("allocation failed")]
    OutOfMemory,

    /// A matrix operation was given operands of incompatible shape.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Inversion was requested on a non-square matrix.
    #[error("matrix is not square")]
    NonSquare,

    /// Gauss-Jordan elimination could not find a non-zero pivot.
    #[error("matrix is singular")]
    Singular,

    /// The k×k submatrix selected for decoding is singular. With a
    /// correctly constructed generator matrix this only happens when the
    /// caller passes duplicate indices.
    #[error("decode matrix is singular (duplicate indices?)")]
    DecodeSingular,

    /// A blocking queue operation's deadline elapsed before an entry
    /// became available.
    #[error("operation timed out")]
    Timeout,
}
