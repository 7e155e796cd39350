//! Error types for extraction, building, and accumulation.

use thiserror::Error;

/// Errors raised while building endpoint documentation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocError {
    /// The provided shape is not a struct with named fields
    #[error("unsupported shape `{label}`: expected a struct with named fields")]
    UnsupportedShape { label: String },

    /// The endpoint path is empty
    #[error("endpoint path must not be empty")]
    InvalidPath,

    /// The endpoint declares no HTTP methods
    #[error("endpoint `{path}` declares no HTTP methods")]
    EmptyMethods { path: String },
}
