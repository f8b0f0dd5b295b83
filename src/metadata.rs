//! Pre-storage enrichment of raw article and journal metadata.
//!
//! Before a record is handed to the document store it is validated and
//! extended with derived lookup fields: issue and journal codes, publication
//! year, workflow status flags and the fingerprint key sets. The store itself
//! is an external collaborator; this module only produces the enriched JSON
//! object it receives.
//!
//! # Examples
//!
//! ```
//! use articlemeta::metadata::enrich_article_metadata;
//! use serde_json::json;
//!
//! let enriched = enrich_article_metadata(json!({
//!     "code": "S0034-89102010000400007",
//!     "collection": "scl",
//!     "publication_date": "2010-08",
//!     "original_title": "Health care after 60th",
//! }))?;
//!
//! assert_eq!(enriched["publication_year"], "2010");
//! assert_eq!(enriched["code_issue"], "0034-891020100004");
//! assert_eq!(enriched["title_keys"], json!(["healthcareafterth"]));
//! # Ok::<(), articlemeta::ArticleMetaError>(())
//! ```

use serde_json::{Map, Value};
use tracing::debug;

use crate::article::{Article, Journal};
use crate::error::{ArticleMetaError, Result};
use crate::fingerprint::Fingerprint;

/// Workflow flags initialised on every stored article.
pub const STATUS_FLAGS: [&str; 5] = [
    "validated_scielo",
    "validated_wos",
    "sent_wos",
    "sent_doaj",
    "applicable",
];

/// Value the workflow flags are initialised with.
pub const STATUS_UNSET: &str = "False";

/// Issue code: characters 1 to 17 of the publisher id
/// (`S0034-89102010000400007` → `0034-891020100004`).
#[must_use]
pub fn issue_code(code: &str) -> String {
    code.chars().skip(1).take(17).collect()
}

/// Validate a raw article object and add the derived fields.
///
/// Adds `code_issue`, `code_title` (distinct ISSNs, electronic first),
/// `collection`, `document_type`, `publication_year`, the [`STATUS_FLAGS`]
/// set to [`STATUS_UNSET`], `processing_date` when known, and whichever
/// fingerprint key sets could be derived. All other entries of the input are
/// kept as they are.
///
/// # Errors
///
/// Returns an error if the value is not an object or is not a valid article;
/// nothing is partially applied.
pub fn enrich_article_metadata(metadata: Value) -> Result<Value> {
    let mut map = into_object(metadata)?;
    let article = Article::from_value(Value::Object(map.clone()))?;

    map.insert("code_issue".to_string(), Value::String(issue_code(&article.code)));
    map.insert("code_title".to_string(), issn_array(&article.journal));
    map.insert(
        "collection".to_string(),
        Value::String(article.collection.clone()),
    );
    map.insert(
        "document_type".to_string(),
        article
            .document_type
            .clone()
            .map_or(Value::Null, Value::String),
    );
    map.insert(
        "publication_year".to_string(),
        Value::String(article.publication_year().to_string()),
    );
    for flag in STATUS_FLAGS {
        map.insert(flag.to_string(), Value::String(STATUS_UNSET.to_string()));
    }
    if let Some(date) = &article.processing_date {
        map.insert("processing_date".to_string(), Value::String(date.clone()));
    }

    let fingerprint = Fingerprint::generate(&article);
    fingerprint.merge_into(&mut map);

    debug!(
        code = %article.code,
        collection = %article.collection,
        fingerprinted = !fingerprint.is_empty(),
        "article metadata enriched"
    );
    Ok(Value::Object(map))
}

/// Validate a raw journal object and add its lookup fields.
///
/// Adds `code` (distinct ISSNs, electronic first) and keeps `collection`.
///
/// # Errors
///
/// Returns an error if the value is not an object, does not match the journal
/// structure, or has no collection.
pub fn enrich_journal_metadata(metadata: Value) -> Result<Value> {
    let mut map = into_object(metadata)?;

    let collection = map
        .get("collection")
        .and_then(Value::as_str)
        .filter(|c| !c.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| ArticleMetaError::InvalidField {
            field: "collection",
            reason: "must be a non-blank string".to_string(),
        })?;

    let journal: Journal = serde_json::from_value(Value::Object(map.clone()))
        .map_err(|e| ArticleMetaError::MalformedRecord(e.to_string()))?;

    map.insert("code".to_string(), issn_array(&journal));
    map.insert("collection".to_string(), Value::String(collection));
    Ok(Value::Object(map))
}

fn into_object(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ArticleMetaError::MalformedRecord(format!(
            "expected a JSON object, found {other}"
        ))),
    }
}

fn issn_array(journal: &Journal) -> Value {
    Value::Array(
        journal
            .issns()
            .into_iter()
            .map(|issn| Value::String(issn.to_string()))
            .collect(),
    )
}
