//! Error types for article metadata operations.
//!
//! This module provides the [`ArticleMetaError`] type for all library operations
//! and the [`Result`] convenience type.
//!
//! Missing optional data (a title, an author, a citation date) is never an
//! error: fingerprinting and field extraction simply omit what they cannot
//! derive. Errors are reserved for records that do not have the expected shape
//! and are rejected at the boundary.

use thiserror::Error;

/// Error type for all article metadata operations.
#[derive(Error, Debug)]
pub enum ArticleMetaError {
    /// The input is not a structured article record at all.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// A required field is missing or has an unusable value.
    #[error("Invalid field `{field}`: {reason}")]
    InvalidField {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// JSON decoding or encoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendering an index document to XML failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience type alias for [`std::result::Result`] with [`ArticleMetaError`].
pub type Result<T> = std::result::Result<T, ArticleMetaError>;
