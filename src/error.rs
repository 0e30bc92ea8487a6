//! The crate's error type.

use thiserror::Error;

/// Errors surfaced while assembling a [`GraphBuilder`](crate::GraphBuilder).
///
/// Every transformation is total over a well-formed builder, so this only
/// ever comes out of construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A value, handle or pre-set linkage does not fit the node sequence it
    /// was handed in with.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
