//! Configuration options for IAHx export.
//!
//! This module provides the [`ExportConfig`] struct which controls the few
//! formatting choices the field pipes make. The defaults reproduce the IAHx
//! ingest format.

/// Configuration for building index documents.
///
/// # Examples
///
/// ```
/// use articlemeta::{ExportConfig, Pipeline};
///
/// // Default configuration (`art-` identifiers, abstracts included)
/// let pipeline = Pipeline::iahx(&ExportConfig::default());
///
/// // Leaner documents without abstracts
/// let config = ExportConfig {
///     include_abstracts: false,
///     ..Default::default()
/// };
/// let lean = Pipeline::iahx(&config);
/// assert_eq!(lean.len() + 1, pipeline.len());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Prefix of the `id` and `ur` fields (`{prefix}-{code}`).
    pub id_prefix: String,

    /// Separator between the components of the issue label (`fo`).
    pub label_separator: String,

    /// Separator between given names and surname in the author field (`au`).
    pub author_separator: String,

    /// Emit per-language abstract fields (`ab_{lang}`).
    ///
    /// Abstracts are the bulkiest fields of a document; turning them off
    /// shrinks the index considerably.
    pub include_abstracts: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            id_prefix: "art".to_string(),
            label_separator: "; ".to_string(),
            author_separator: ", ".to_string(),
            include_abstracts: true,
        }
    }
}
