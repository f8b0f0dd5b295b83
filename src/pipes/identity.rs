//! Single-valued identity and classification fields.

use crate::article::{non_empty, Article};
use crate::document::IndexDocument;
use crate::pipes::{field, FieldPipe};

/// `id`: `{prefix}-{code}-{collection}`.
#[derive(Debug, Clone)]
pub struct DocumentIdPipe {
    prefix: String,
}

impl DocumentIdPipe {
    /// Create the pipe with the given identifier prefix (IAHx uses `art`).
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        DocumentIdPipe {
            prefix: prefix.into(),
        }
    }
}

impl FieldPipe for DocumentIdPipe {
    fn name(&self) -> &'static str {
        "document_id"
    }

    fn precondition(&self, article: &Article) -> bool {
        !article.code.is_empty() && !article.collection.is_empty()
    }

    fn append_fields(&self, article: &Article, doc: &mut IndexDocument) {
        doc.push(
            field::ID,
            format!("{}-{}-{}", self.prefix, article.code, article.collection),
        );
    }
}

/// `ur`: `{prefix}-{code}`.
#[derive(Debug, Clone)]
pub struct UrlPipe {
    prefix: String,
}

impl UrlPipe {
    /// Create the pipe with the given identifier prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        UrlPipe {
            prefix: prefix.into(),
        }
    }
}

impl FieldPipe for UrlPipe {
    fn name(&self) -> &'static str {
        "url"
    }

    fn precondition(&self, article: &Article) -> bool {
        !article.code.is_empty()
    }

    fn append_fields(&self, article: &Article, doc: &mut IndexDocument) {
        doc.push(field::URL, format!("{}-{}", self.prefix, article.code));
    }
}

/// `in`: collection acronym.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionPipe;

impl FieldPipe for CollectionPipe {
    fn name(&self) -> &'static str {
        "collection"
    }

    fn precondition(&self, article: &Article) -> bool {
        !article.collection.is_empty()
    }

    fn append_fields(&self, article: &Article, doc: &mut IndexDocument) {
        doc.push(field::COLLECTION, article.collection.as_str());
    }
}

/// `cc`: research center code.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterPipe;

impl FieldPipe for CenterPipe {
    fn name(&self) -> &'static str {
        "center"
    }

    fn precondition(&self, article: &Article) -> bool {
        non_empty(article.center_code.as_ref()).is_some()
    }

    fn append_fields(&self, article: &Article, doc: &mut IndexDocument) {
        if let Some(code) = non_empty(article.center_code.as_ref()) {
            doc.push(field::CENTER, code);
        }
    }
}

/// `type`: document type.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTypePipe;

impl FieldPipe for DocumentTypePipe {
    fn name(&self) -> &'static str {
        "document_type"
    }

    fn precondition(&self, article: &Article) -> bool {
        non_empty(article.document_type.as_ref()).is_some()
    }

    fn append_fields(&self, article: &Article, doc: &mut IndexDocument) {
        if let Some(document_type) = non_empty(article.document_type.as_ref()) {
            doc.push(field::DOCUMENT_TYPE, document_type);
        }
    }
}

/// `la`: original language code.
#[derive(Debug, Clone, Copy, Default)]
pub struct OriginalLanguagePipe;

impl FieldPipe for OriginalLanguagePipe {
    fn name(&self) -> &'static str {
        "original_language"
    }

    fn precondition(&self, article: &Article) -> bool {
        article.original_language().is_some()
    }

    fn append_fields(&self, article: &Article, doc: &mut IndexDocument) {
        if let Some(language) = article.original_language() {
            doc.push(field::LANGUAGE, language);
        }
    }
}

/// `da`: publication date as given (`YYYY-MM`).
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicationDatePipe;

impl FieldPipe for PublicationDatePipe {
    fn name(&self) -> &'static str {
        "publication_date"
    }

    fn precondition(&self, article: &Article) -> bool {
        !article.publication_date.is_empty()
    }

    fn append_fields(&self, article: &Article, doc: &mut IndexDocument) {
        doc.push(field::PUBLICATION_DATE, article.publication_date.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article::builder("S0034-89102010000400007", "scl")
            .publication_date("2010-08")
            .document_type("research-article")
            .original_language("pt")
            .center_code("br1.1")
            .build()
    }

    #[test]
    fn test_document_id() {
        let doc = DocumentIdPipe::new("art").transform(&article(), IndexDocument::new());
        assert_eq!(doc.get(field::ID), Some("art-S0034-89102010000400007-scl"));
    }

    #[test]
    fn test_url() {
        let doc = UrlPipe::new("art").transform(&article(), IndexDocument::new());
        assert_eq!(doc.get(field::URL), Some("art-S0034-89102010000400007"));
    }

    #[test]
    fn test_single_valued_fields() {
        let article = article();
        let doc = [
            &CollectionPipe as &dyn FieldPipe,
            &CenterPipe,
            &DocumentTypePipe,
            &OriginalLanguagePipe,
            &PublicationDatePipe,
        ]
        .iter()
        .fold(IndexDocument::new(), |doc, pipe| pipe.transform(&article, doc));

        assert_eq!(doc.get(field::COLLECTION), Some("scl"));
        assert_eq!(doc.get(field::CENTER), Some("br1.1"));
        assert_eq!(doc.get(field::DOCUMENT_TYPE), Some("research-article"));
        assert_eq!(doc.get(field::LANGUAGE), Some("pt"));
        assert_eq!(doc.get(field::PUBLICATION_DATE), Some("2010-08"));
    }

    #[test]
    fn test_optional_fields_absent() {
        let article = Article::builder("S1", "scl").publication_date("2010").build();
        let doc = CenterPipe.transform(&article, IndexDocument::new());
        let doc = DocumentTypePipe.transform(&article, doc);
        let doc = OriginalLanguagePipe.transform(&article, doc);
        assert!(doc.is_empty());
    }
}
