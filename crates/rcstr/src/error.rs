//! Errors for operations that require a bound value.

/// Error type for fallible [`RcStr`](crate::RcStr) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The operation needs a bound value, but the handle is unbound.
    #[error("string is unbound")]
    Unbound,
}

/// Result type for `RcStr` operations.
pub type Result<T> = std::result::Result<T, Error>;
