//! Article record structures and boundary validation.
//!
//! This module provides the read-only view over a document's metadata that
//! every other part of the crate consumes:
//! - [`Article`]: the bibliographic record (titles, authors, dates, citations)
//! - [`Journal`]: metadata of the journal the article was published in
//! - [`Author`] and [`Affiliation`]: people and institutions
//!
//! Records arrive as JSON. [`Article::from_json`] and [`Article::from_value`]
//! reject anything that is not an article-shaped object before any derivation
//! runs; once an `Article` exists, missing optional data is a normal case.
//!
//! # Examples
//!
//! ```
//! use articlemeta::{Article, Author};
//!
//! let article = Article::builder("S0034-89102010000400007", "scl")
//!     .publication_date("2010-08")
//!     .original_title("Health care after 60th")
//!     .author(Author::new("John", "Smith"))
//!     .build();
//!
//! assert_eq!(article.original_title(), Some("Health care after 60th"));
//! assert_eq!(article.publication_year(), "2010");
//! ```

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::citation::Citation;
use crate::error::{ArticleMetaError, Result};
use crate::normalize::year_prefix;

lazy_static! {
    static ref YEAR_PREFIX: Regex = Regex::new(r"^\d{4}").expect("static pattern");
}

/// Treat empty strings as absent.
pub(crate) fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// A bibliographic article record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Publisher identifier (PID), e.g. `S0034-89102010000400007`
    pub code: String,
    /// Acronym of the collection the article belongs to, e.g. `scl`
    pub collection: String,
    /// Document type, e.g. `research-article`
    pub document_type: Option<String>,
    /// Language code of the original text
    pub original_language: Option<String>,
    /// Publication date, year first (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`)
    pub publication_date: String,
    /// Date the record was last processed
    pub processing_date: Option<String>,
    /// Title in the original language
    pub original_title: Option<String>,
    /// Translated titles keyed by language code
    #[serde(default)]
    pub translated_titles: IndexMap<String, String>,
    /// Abstract in the original language
    pub original_abstract: Option<String>,
    /// Translated abstracts keyed by language code
    #[serde(default)]
    pub translated_abstracts: IndexMap<String, String>,
    /// Authors in byline order
    #[serde(default)]
    pub authors: Vec<Author>,
    /// First page
    pub start_page: Option<String>,
    /// Last page
    pub end_page: Option<String>,
    /// Journal volume
    pub volume: Option<String>,
    /// Journal issue number
    pub issue: Option<String>,
    /// Code of the research center that registered the article
    pub center_code: Option<String>,
    /// Author affiliations
    #[serde(default)]
    pub affiliations: Vec<Affiliation>,
    /// Funding sponsors
    #[serde(default)]
    pub sponsors: Vec<String>,
    /// Journal metadata
    #[serde(default)]
    pub journal: Journal,
    /// Reference list
    #[serde(default)]
    pub citations: Vec<Citation>,
}

/// Journal-level metadata embedded in an article record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    /// Full journal title
    pub title: Option<String>,
    /// Abbreviated journal title, e.g. `Rev. Saúde Pública`
    pub abbreviated_title: Option<String>,
    /// Print ISSN
    pub print_issn: Option<String>,
    /// Electronic ISSN
    pub electronic_issn: Option<String>,
    /// Knowledge areas (e.g. `Health Sciences`)
    #[serde(default)]
    pub knowledge_areas: Vec<String>,
    /// Web of Science citation indexes (e.g. `SCIE`, `SSCI`)
    #[serde(default)]
    pub wos_citation_indexes: Vec<String>,
    /// Web of Science subject categories
    #[serde(default)]
    pub wos_subject_areas: Vec<String>,
}

/// A person credited as author.
///
/// Either part of the name may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Given names
    pub given_names: Option<String>,
    /// Surname
    pub surname: Option<String>,
}

/// An institution an author is affiliated with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affiliation {
    /// Institution name
    pub institution: Option<String>,
    /// Country name
    pub country: Option<String>,
}

impl Author {
    /// Create an author with both name parts present.
    #[must_use]
    pub fn new(given_names: impl Into<String>, surname: impl Into<String>) -> Self {
        Author {
            given_names: Some(given_names.into()),
            surname: Some(surname.into()),
        }
    }

    /// Given names followed directly by surname, used as fingerprint material.
    ///
    /// Missing parts contribute nothing.
    #[must_use]
    pub fn name_key_material(&self) -> String {
        let given = self.given_names.as_deref().unwrap_or_default();
        let surname = self.surname.as_deref().unwrap_or_default();
        format!("{given}{surname}")
    }

    /// Display form `"{given_names}{separator}{surname}"`.
    ///
    /// Returns `None` when the author has no name at all; if only one part is
    /// present it is returned alone.
    #[must_use]
    pub fn display_name(&self, separator: &str) -> Option<String> {
        match (
            non_empty(self.given_names.as_ref()),
            non_empty(self.surname.as_ref()),
        ) {
            (Some(given), Some(surname)) => Some(format!("{given}{separator}{surname}")),
            (Some(part), None) | (None, Some(part)) => Some(part.to_string()),
            (None, None) => None,
        }
    }
}

impl Journal {
    /// Distinct ISSNs, electronic first.
    #[must_use]
    pub fn issns(&self) -> Vec<&str> {
        let mut issns: Vec<&str> = Vec::with_capacity(2);
        for issn in [
            non_empty(self.electronic_issn.as_ref()),
            non_empty(self.print_issn.as_ref()),
        ]
        .into_iter()
        .flatten()
        {
            if !issns.contains(&issn) {
                issns.push(issn);
            }
        }
        issns
    }
}

impl Article {
    /// Create a builder for fluently constructing articles.
    #[must_use]
    pub fn builder(code: impl Into<String>, collection: impl Into<String>) -> ArticleBuilder {
        ArticleBuilder {
            article: Article {
                code: code.into(),
                collection: collection.into(),
                ..Default::default()
            },
        }
    }

    /// Parse and validate an article from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON, is not a JSON object,
    /// does not match the article structure, or fails [`Article::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build and validate an article from a decoded JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleMetaError::MalformedRecord`] if the value is not an
    /// object or does not match the article structure, and
    /// [`ArticleMetaError::InvalidField`] if validation fails.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            let found = json_kind(&value);
            warn!(found, "rejected non-object article record");
            return Err(ArticleMetaError::MalformedRecord(format!(
                "expected a JSON object, found {found}"
            )));
        }

        let article: Article = serde_json::from_value(value).map_err(|e| {
            warn!(error = %e, "rejected malformed article record");
            ArticleMetaError::MalformedRecord(e.to_string())
        })?;
        article.validate()?;
        Ok(article)
    }

    /// Check the fields every derivation relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleMetaError::InvalidField`] if `code` or `collection` is
    /// blank or `publication_date` does not start with a four-digit year.
    pub fn validate(&self) -> Result<()> {
        let failure = if self.code.trim().is_empty() {
            Some(("code", "must not be blank".to_string()))
        } else if self.collection.trim().is_empty() {
            Some(("collection", "must not be blank".to_string()))
        } else if !YEAR_PREFIX.is_match(&self.publication_date) {
            Some((
                "publication_date",
                format!("expected a leading 4-digit year, got {:?}", self.publication_date),
            ))
        } else {
            None
        };

        match failure {
            Some((field, reason)) => {
                warn!(code = %self.code, field, %reason, "article failed validation");
                Err(ArticleMetaError::InvalidField { field, reason })
            },
            None => Ok(()),
        }
    }

    /// Title in the original language, if present and non-empty.
    #[must_use]
    pub fn original_title(&self) -> Option<&str> {
        non_empty(self.original_title.as_ref())
    }

    /// Non-empty translated titles as `(language, title)` pairs in record order.
    pub fn translated_titles(&self) -> impl Iterator<Item = (&str, &str)> {
        localized(&self.translated_titles)
    }

    /// Abstract in the original language, if present and non-empty.
    #[must_use]
    pub fn original_abstract(&self) -> Option<&str> {
        non_empty(self.original_abstract.as_ref())
    }

    /// Non-empty translated abstracts as `(language, abstract)` pairs.
    pub fn translated_abstracts(&self) -> impl Iterator<Item = (&str, &str)> {
        localized(&self.translated_abstracts)
    }

    /// Original language code, if present and non-empty.
    #[must_use]
    pub fn original_language(&self) -> Option<&str> {
        non_empty(self.original_language.as_ref())
    }

    /// Year part of the publication date.
    #[must_use]
    pub fn publication_year(&self) -> &str {
        year_prefix(&self.publication_date)
    }

    /// Page range `start-end`; a missing side is left empty.
    ///
    /// Returns `None` when neither page is known.
    #[must_use]
    pub fn page_range(&self) -> Option<String> {
        let start = non_empty(self.start_page.as_ref());
        let end = non_empty(self.end_page.as_ref());
        if start.is_none() && end.is_none() {
            return None;
        }
        Some(format!(
            "{}-{}",
            start.unwrap_or_default(),
            end.unwrap_or_default()
        ))
    }
}

fn localized(map: &IndexMap<String, String>) -> impl Iterator<Item = (&str, &str)> {
    map.iter()
        .filter(|(lang, text)| !lang.is_empty() && !text.is_empty())
        .map(|(lang, text)| (lang.as_str(), text.as_str()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Builder for [`Article`].
#[derive(Debug)]
pub struct ArticleBuilder {
    article: Article,
}

impl ArticleBuilder {
    /// Set the document type.
    #[must_use]
    pub fn document_type(mut self, document_type: impl Into<String>) -> Self {
        self.article.document_type = Some(document_type.into());
        self
    }

    /// Set the original language code.
    #[must_use]
    pub fn original_language(mut self, language: impl Into<String>) -> Self {
        self.article.original_language = Some(language.into());
        self
    }

    /// Set the publication date.
    #[must_use]
    pub fn publication_date(mut self, date: impl Into<String>) -> Self {
        self.article.publication_date = date.into();
        self
    }

    /// Set the processing date.
    #[must_use]
    pub fn processing_date(mut self, date: impl Into<String>) -> Self {
        self.article.processing_date = Some(date.into());
        self
    }

    /// Set the original title.
    #[must_use]
    pub fn original_title(mut self, title: impl Into<String>) -> Self {
        self.article.original_title = Some(title.into());
        self
    }

    /// Add a translated title.
    #[must_use]
    pub fn translated_title(mut self, language: impl Into<String>, title: impl Into<String>) -> Self {
        self.article
            .translated_titles
            .insert(language.into(), title.into());
        self
    }

    /// Set the original abstract.
    #[must_use]
    pub fn original_abstract(mut self, text: impl Into<String>) -> Self {
        self.article.original_abstract = Some(text.into());
        self
    }

    /// Add a translated abstract.
    #[must_use]
    pub fn translated_abstract(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.article
            .translated_abstracts
            .insert(language.into(), text.into());
        self
    }

    /// Append an author.
    #[must_use]
    pub fn author(mut self, author: Author) -> Self {
        self.article.authors.push(author);
        self
    }

    /// Set the page range.
    #[must_use]
    pub fn pages(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.article.start_page = Some(start.into());
        self.article.end_page = Some(end.into());
        self
    }

    /// Set volume and issue numbers.
    #[must_use]
    pub fn volume_issue(mut self, volume: impl Into<String>, issue: impl Into<String>) -> Self {
        self.article.volume = Some(volume.into());
        self.article.issue = Some(issue.into());
        self
    }

    /// Set the research center code.
    #[must_use]
    pub fn center_code(mut self, code: impl Into<String>) -> Self {
        self.article.center_code = Some(code.into());
        self
    }

    /// Append an affiliation.
    #[must_use]
    pub fn affiliation(mut self, institution: impl Into<String>, country: impl Into<String>) -> Self {
        self.article.affiliations.push(Affiliation {
            institution: Some(institution.into()),
            country: Some(country.into()),
        });
        self
    }

    /// Append a sponsor.
    #[must_use]
    pub fn sponsor(mut self, sponsor: impl Into<String>) -> Self {
        self.article.sponsors.push(sponsor.into());
        self
    }

    /// Set the journal metadata.
    #[must_use]
    pub fn journal(mut self, journal: Journal) -> Self {
        self.article.journal = journal;
        self
    }

    /// Append a citation.
    #[must_use]
    pub fn citation(mut self, citation: Citation) -> Self {
        self.article.citations.push(citation);
        self
    }

    /// Build the article.
    #[must_use]
    pub fn build(self) -> Article {
        self.article
    }
}
