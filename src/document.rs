//! Flat, field-oriented documents for search-index ingest.
//!
//! An [`IndexDocument`] is an ordered list of `(name, value)` pairs. Field
//! names may repeat: a multi-valued field (authors, sponsors, ...) is stored as
//! one occurrence per value. Documents are append-only; pipes never remove or
//! reorder what earlier pipes produced.

use serde::{Deserialize, Serialize};

/// One named value in an [`IndexDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexField {
    /// Field name, e.g. `au` or `ti_pt`
    pub name: String,
    /// Field value
    pub value: String,
}

/// An ordered collection of index fields for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexDocument {
    fields: Vec<IndexField>,
}

impl IndexDocument {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        IndexDocument::default()
    }

    /// Append a field occurrence.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push(IndexField {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Append one occurrence of `name` per value, in iteration order.
    pub fn push_all<I, V>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        for value in values {
            self.push(name, value);
        }
    }

    /// All fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[IndexField] {
        &self.fields
    }

    /// First value of the named field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// All values of the named field, in insertion order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.name == name)
            .map(|f| f.value.as_str())
            .collect()
    }

    /// Whether the named field occurs at least once.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Number of field occurrences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the document has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a IndexDocument {
    type Item = &'a IndexField;
    type IntoIter = std::slice::Iter<'a, IndexField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
