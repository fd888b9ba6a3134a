//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `NrError` as one variant
//! where they need to surface it.

use thiserror::Error;

/// The top-level error type for `nr-core`.
#[derive(Debug, Error)]
pub enum NrError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `nr-core`.
pub type NrResult<T> = Result<T, NrError>;
