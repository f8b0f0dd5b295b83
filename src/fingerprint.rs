//! Deduplication fingerprints for articles and their citations.
//!
//! Two independent key sets are derived from an [`Article`]:
//!
//! - **Title keys** identify the article itself. Every available title
//!   (original, then translations) yields a plain normalized key; when the
//!   article has authors, each title also yields a key disambiguated by the
//!   first author's name and the publication year.
//! - **Citation keys** identify the works the article cites. Each citation with
//!   a resolvable title yields up to three keys: the plain title, the title
//!   plus page range, and (when dated and attributed) the title plus first
//!   author plus year.
//!
//! A key set that cannot be derived is absent (`None`), never an empty list.
//! The generator does not decide what a matching key means; it only produces
//! candidates.
//!
//! # Examples
//!
//! ```
//! use articlemeta::{Article, Author, Fingerprint};
//!
//! let article = Article::builder("S0034-89102010000400007", "scl")
//!     .publication_date("2010-08")
//!     .original_title("Health care after 60th")
//!     .author(Author::new("John", "Smith"))
//!     .build();
//!
//! let fingerprint = Fingerprint::generate(&article);
//! let title_keys = fingerprint.title_keys.expect("article has a title");
//! assert!(title_keys.contains(&"healthcareafterth".to_string()));
//! assert!(title_keys.contains(&"healthcareafterthjohnsmith2010".to_string()));
//! assert!(fingerprint.citations_keys.is_none());
//! ```

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::article::{Article, Author};
use crate::normalize::{normalize, year_prefix};

/// Metadata key under which title keys are stored.
pub const TITLE_KEYS_FIELD: &str = "title_keys";
/// Metadata key under which citation keys are stored.
pub const CITATIONS_KEYS_FIELD: &str = "citations_keys";

/// Fingerprint key sets of one article.
///
/// Serializes as a mapping holding only the key sets that were produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    /// Keys derived from the article's own titles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_keys: Option<Vec<String>>,
    /// Keys derived from the article's citations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations_keys: Option<Vec<String>>,
}

impl Fingerprint {
    /// Derive both key sets for `article`.
    #[must_use]
    pub fn generate(article: &Article) -> Self {
        let fingerprint = Fingerprint {
            title_keys: title_keys(article),
            citations_keys: citation_keys(article),
        };
        debug!(
            code = %article.code,
            title_keys = fingerprint.title_keys.as_ref().map_or(0, Vec::len),
            citations_keys = fingerprint.citations_keys.as_ref().map_or(0, Vec::len),
            "fingerprint generated"
        );
        fingerprint
    }

    /// True when neither key set was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title_keys.is_none() && self.citations_keys.is_none()
    }

    /// Merge the produced key sets into a metadata object.
    ///
    /// Existing entries under the same names are replaced; absent key sets
    /// leave the metadata untouched.
    pub fn merge_into(&self, metadata: &mut Map<String, Value>) {
        if let Some(keys) = &self.title_keys {
            metadata.insert(TITLE_KEYS_FIELD.to_string(), string_array(keys));
        }
        if let Some(keys) = &self.citations_keys {
            metadata.insert(CITATIONS_KEYS_FIELD.to_string(), string_array(keys));
        }
    }
}

fn string_array(keys: &[String]) -> Value {
    Value::Array(keys.iter().cloned().map(Value::String).collect())
}

/// Derive the title keys of `article`.
///
/// Plain title keys come first, followed by the title+author+year keys (only
/// when the article has at least one author). Returns `None` when the article
/// has no title at all.
#[must_use]
pub fn title_keys(article: &Article) -> Option<Vec<String>> {
    let titles: Vec<&str> = article
        .original_title()
        .into_iter()
        .chain(article.translated_titles().map(|(_, title)| title))
        .collect();

    if titles.is_empty() {
        return None;
    }

    let plain: Vec<String> = titles.iter().map(|title| normalize(title)).collect();

    let author_year: Vec<String> = match article.authors.first() {
        Some(author) => {
            let author = normalize(&author.name_key_material());
            let year = article.publication_year();
            plain
                .iter()
                .map(|title| format!("{title}{author}{year}"))
                .collect()
        },
        None => Vec::new(),
    };

    let mut keys = plain;
    keys.extend(author_year);
    Some(keys)
}

/// Derive the citation keys of `article`.
///
/// Members of the plain-title set come first, then the title+pages set, then
/// the title+author+year set. Each set is deduplicated in first-seen order.
/// Citations without a resolvable title contribute to none of them. Returns
/// `None` when no citation has a title.
#[must_use]
pub fn citation_keys(article: &Article) -> Option<Vec<String>> {
    let mut plain: IndexSet<String> = IndexSet::new();
    let mut with_pages: IndexSet<String> = IndexSet::new();
    let mut with_author_year: IndexSet<String> = IndexSet::new();

    for (index, citation) in article.citations.iter().enumerate() {
        let Some(title) = citation.title() else {
            trace!(code = %article.code, index, "citation without title skipped");
            continue;
        };

        let normalized = normalize(title);
        with_pages.insert(format!(
            "{normalized}{}{}",
            citation.start_page(),
            citation.end_page()
        ));
        plain.insert(normalized);

        let Some(date) = citation.date() else {
            continue;
        };
        let author = citation
            .first_author()
            .map(Author::name_key_material)
            .unwrap_or_default();
        if author.is_empty() {
            continue;
        }

        let key = format!("{}{}", normalize(&format!("{title}{author}")), year_prefix(date));
        with_author_year.insert(key);
    }

    if plain.is_empty() {
        return None;
    }

    Some(
        plain
            .into_iter()
            .chain(with_pages)
            .chain(with_author_year)
            .collect(),
    )
}

/// Generate fingerprints for a batch of articles in parallel.
///
/// Each article is independent; results are returned in input order.
#[must_use]
pub fn generate_batch_parallel(articles: &[Article]) -> Vec<Fingerprint> {
    use rayon::prelude::*;

    articles.par_iter().map(Fingerprint::generate).collect()
}
