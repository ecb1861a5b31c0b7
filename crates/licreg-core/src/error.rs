//! # Error Types
//!
//! All fallible operations in this crate return [`LicregError`]. Errors are
//! raised synchronously at construction or parse time and are never retried
//! internally; the caller decides whether to reject the license data or fall
//! back to a default.

use thiserror::Error;

/// Top-level error type for license registration handling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LicregError {
    /// A supplied value does not match any accepted form: an unknown
    /// licensing mode, or an unparsable or out-of-range timestamp.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
