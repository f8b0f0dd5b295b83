//! IAHx XML rendering of index documents.
//!
//! The search engine ingests documents as
//!
//! ```text
//! <add>
//!   <doc>
//!     <field name="id">art-S0034-89102010000400007-scl</field>
//!     <field name="au">Ricardo, Sesso</field>
//!     ...
//!   </doc>
//! </add>
//! ```
//!
//! Field order inside each `<doc>` is the document's field order.
//!
//! # Examples
//!
//! ```
//! use articlemeta::{iahx, IndexDocument};
//!
//! let mut doc = IndexDocument::new();
//! doc.push("in", "scl");
//!
//! let xml = iahx::to_iahx_xml(&[doc])?;
//! assert!(xml.contains(r#"<field name="in">scl</field>"#));
//! # Ok::<(), articlemeta::ArticleMetaError>(())
//! ```

use quick_xml::se::to_string as xml_to_string;
use serde::Serialize;

use crate::document::IndexDocument;
use crate::error::{ArticleMetaError, Result};

/// `<add>` root holding one `<doc>` per document.
#[derive(Debug, Serialize)]
#[serde(rename = "add")]
struct IahxAdd<'a> {
    #[serde(rename = "doc")]
    docs: Vec<IahxDoc<'a>>,
}

/// One `<doc>` element.
#[derive(Debug, Serialize)]
struct IahxDoc<'a> {
    #[serde(rename = "field")]
    fields: Vec<IahxField<'a>>,
}

/// One `<field name="...">value</field>` element.
#[derive(Debug, Serialize)]
struct IahxField<'a> {
    #[serde(rename = "@name")]
    name: &'a str,
    #[serde(rename = "$value")]
    value: &'a str,
}

/// Render documents as an IAHx `<add>` element (without XML declaration).
///
/// # Errors
///
/// Returns [`ArticleMetaError::Serialization`] if the XML writer fails.
pub fn to_iahx_xml(docs: &[IndexDocument]) -> Result<String> {
    let add = IahxAdd {
        docs: docs
            .iter()
            .map(|doc| IahxDoc {
                fields: doc
                    .fields()
                    .iter()
                    .map(|f| IahxField {
                        name: &f.name,
                        value: &f.value,
                    })
                    .collect(),
            })
            .collect(),
    };

    xml_to_string(&add)
        .map_err(|e| ArticleMetaError::Serialization(format!("Failed to serialize to IAHx XML: {e}")))
}

/// Render documents as a complete IAHx XML file, with XML declaration.
///
/// # Errors
///
/// Returns [`ArticleMetaError::Serialization`] if the XML writer fails.
pub fn to_iahx_xml_document(docs: &[IndexDocument]) -> Result<String> {
    let body = to_iahx_xml(docs)?;
    Ok(format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>{body}"))
}
