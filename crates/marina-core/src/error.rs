//! Core error type.
//!
//! Downstream crates wrap `CoreError` as one variant of their own enums via a
//! `From` impl.

use thiserror::Error;

/// Errors raised while validating core inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid configuration: {field} must be positive, got {value}")]
    InvalidConfiguration {
        field: &'static str,
        value: u32,
    },
}

/// Shorthand result type for `marina-core`.
pub type CoreResult<T> = Result<T, CoreError>;
