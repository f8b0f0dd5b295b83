//! Field pipes: conditional extraction steps that build an index document.
//!
//! Each pipe looks at one part of an [`Article`] and, when that part is
//! present, appends one or more fields to an [`IndexDocument`]. When the data
//! is absent the pipe is a no-op; missing data is never an error.
//!
//! Pipes are independent of each other: they read only from the article and
//! only append to the document. New pipes are added by implementing
//! [`FieldPipe`] and handing an instance to a
//! [`PipelineBuilder`](crate::pipeline::PipelineBuilder); the runner itself
//! never changes.
//!
//! # Examples
//!
//! ```
//! use articlemeta::pipes::{CollectionPipe, FieldPipe, KnowledgeAreaPipe};
//! use articlemeta::{Article, IndexDocument};
//!
//! let article = Article::builder("S0034-89102010000400007", "scl")
//!     .publication_date("2010-08")
//!     .build();
//!
//! let doc = CollectionPipe.transform(&article, IndexDocument::new());
//! assert_eq!(doc.get("in"), Some("scl"));
//!
//! // No knowledge areas on this record: the document is left untouched.
//! let doc = KnowledgeAreaPipe.transform(&article, doc);
//! assert_eq!(doc.len(), 1);
//! ```

mod content;
mod identity;
mod journal;

use std::fmt;

use tracing::trace;

use crate::article::Article;
use crate::document::IndexDocument;

pub use content::{
    AbstractPipe, AffiliationCountryPipe, AffiliationInstitutionPipe, AuthorsPipe, PagesPipe,
    SponsorPipe, TitlePipe,
};
pub use identity::{
    CenterPipe, CollectionPipe, DocumentIdPipe, DocumentTypePipe, OriginalLanguagePipe,
    PublicationDatePipe, UrlPipe,
};
pub use journal::{
    IssueLabelPipe, JournalTitlePipe, KnowledgeAreaPipe, WokCitationIndexPipe,
    WokSubjectCategoriesPipe,
};

/// IAHx field names.
pub mod field {
    /// Document identifier
    pub const ID: &str = "id";
    /// Collection acronym
    pub const COLLECTION: &str = "in";
    /// Knowledge area
    pub const KNOWLEDGE_AREA: &str = "ac";
    /// Research center code
    pub const CENTER: &str = "cc";
    /// Document type
    pub const DOCUMENT_TYPE: &str = "type";
    /// URL fragment
    pub const URL: &str = "ur";
    /// Author
    pub const AUTHOR: &str = "au";
    /// Title prefix; localized titles are `ti_{lang}`
    pub const TITLE: &str = "ti";
    /// Page range
    pub const PAGES: &str = "pg";
    /// Web of Science citation index
    pub const WOK_CITATION_INDEX: &str = "wok_citation_index";
    /// Web of Science subject category
    pub const WOK_SUBJECT_CATEGORIES: &str = "wok_subject_categories";
    /// Issue label
    pub const ISSUE_LABEL: &str = "fo";
    /// Journal title
    pub const JOURNAL_TITLE: &str = "ta";
    /// Original language
    pub const LANGUAGE: &str = "la";
    /// Publication date
    pub const PUBLICATION_DATE: &str = "da";
    /// Abstract prefix; localized abstracts are `ab_{lang}`
    pub const ABSTRACT: &str = "ab";
    /// Affiliation country
    pub const AFFILIATION_COUNTRY: &str = "aff_country";
    /// Affiliation institution
    pub const AFFILIATION_INSTITUTION: &str = "aff_institution";
    /// Sponsor
    pub const SPONSOR: &str = "sponsor";
}

/// A single conditional field-extraction step.
///
/// Implementations declare when they apply ([`precondition`](Self::precondition))
/// and what they append ([`append_fields`](Self::append_fields)). Callers use
/// [`transform`](Self::transform), which checks the precondition and threads
/// the document through.
///
/// # Contract
///
/// - Never mutates the article.
/// - Only appends to the document; never removes or reorders fields.
/// - Multi-valued data yields one field occurrence per value, in source order.
/// - No I/O and no shared state, so pipes are `Send + Sync`.
pub trait FieldPipe: fmt::Debug + Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Whether the article carries the data this pipe extracts.
    fn precondition(&self, article: &Article) -> bool;

    /// Append this pipe's fields. Only called when the precondition holds.
    fn append_fields(&self, article: &Article, doc: &mut IndexDocument);

    /// Apply the pipe: append fields if the precondition holds, otherwise
    /// return the document unchanged.
    fn transform(&self, article: &Article, mut doc: IndexDocument) -> IndexDocument {
        if self.precondition(article) {
            self.append_fields(article, &mut doc);
            trace!(pipe = self.name(), fields = doc.len(), "pipe applied");
        } else {
            trace!(pipe = self.name(), "precondition not met, pipe skipped");
        }
        doc
    }
}

/// Localized field name, `{prefix}_{language}`.
pub(crate) fn localized_name(prefix: &str, language: &str) -> String {
    format!("{prefix}_{language}")
}
