//! Pipeline runner: applies an ordered list of field pipes to an article.
//!
//! A [`Pipeline`] owns its pipes as trait objects, assembled by the caller with
//! [`Pipeline::builder`]. [`Pipeline::run`] starts from an empty
//! [`IndexDocument`] and threads it through every pipe in order. Pipes that do
//! not apply leave the document untouched, so the runner has no failure mode.
//!
//! [`Pipeline::iahx`] assembles the standard IAHx export.
//!
//! # Examples
//!
//! ```
//! use articlemeta::pipes::{AuthorsPipe, CollectionPipe, DocumentIdPipe};
//! use articlemeta::{Article, Author, Pipeline};
//!
//! let pipeline = Pipeline::builder()
//!     .pipe(DocumentIdPipe::new("art"))
//!     .pipe(CollectionPipe)
//!     .pipe(AuthorsPipe::default())
//!     .build();
//!
//! let article = Article::builder("S0034-89102010000400007", "scl")
//!     .publication_date("2010-08")
//!     .author(Author::new("Ricardo", "Sesso"))
//!     .build();
//!
//! let doc = pipeline.run(&article);
//! assert_eq!(doc.get("id"), Some("art-S0034-89102010000400007-scl"));
//! assert_eq!(doc.get("au"), Some("Ricardo, Sesso"));
//! ```

use tracing::{debug, info_span};

use crate::article::Article;
use crate::config::ExportConfig;
use crate::document::IndexDocument;
use crate::pipes::{
    AbstractPipe, AffiliationCountryPipe, AffiliationInstitutionPipe, AuthorsPipe, CenterPipe,
    CollectionPipe, DocumentIdPipe, DocumentTypePipe, FieldPipe, IssueLabelPipe,
    JournalTitlePipe, KnowledgeAreaPipe, OriginalLanguagePipe, PagesPipe, PublicationDatePipe,
    SponsorPipe, TitlePipe, UrlPipe, WokCitationIndexPipe, WokSubjectCategoriesPipe,
};

/// An ordered sequence of field pipes.
#[derive(Debug, Default)]
pub struct Pipeline {
    pipes: Vec<Box<dyn FieldPipe>>,
}

impl Pipeline {
    /// Create a builder for assembling a pipeline.
    #[must_use]
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder { pipes: Vec::new() }
    }

    /// The standard IAHx export pipeline.
    ///
    /// Order: `id`, `in`, `ac`, `cc`, `type`, `ur`, `au`, `ti_*`, `pg`,
    /// `wok_citation_index`, `wok_subject_categories`, `fo`, `ta`, `la`, `da`,
    /// `ab_*` (unless disabled), `aff_country`, `aff_institution`, `sponsor`.
    #[must_use]
    pub fn iahx(config: &ExportConfig) -> Self {
        let builder = Pipeline::builder()
            .pipe(DocumentIdPipe::new(config.id_prefix.as_str()))
            .pipe(CollectionPipe)
            .pipe(KnowledgeAreaPipe)
            .pipe(CenterPipe)
            .pipe(DocumentTypePipe)
            .pipe(UrlPipe::new(config.id_prefix.as_str()))
            .pipe(AuthorsPipe::new(config.author_separator.as_str()))
            .pipe(TitlePipe)
            .pipe(PagesPipe)
            .pipe(WokCitationIndexPipe)
            .pipe(WokSubjectCategoriesPipe)
            .pipe(IssueLabelPipe::new(config.label_separator.as_str()))
            .pipe(JournalTitlePipe)
            .pipe(OriginalLanguagePipe)
            .pipe(PublicationDatePipe);

        let builder = if config.include_abstracts {
            builder.pipe(AbstractPipe)
        } else {
            builder
        };

        builder
            .pipe(AffiliationCountryPipe)
            .pipe(AffiliationInstitutionPipe)
            .pipe(SponsorPipe)
            .build()
    }

    /// Run every pipe over `article`, starting from an empty document.
    #[must_use]
    pub fn run(&self, article: &Article) -> IndexDocument {
        self.run_with(article, IndexDocument::new())
    }

    /// Run every pipe over `article`, appending to an existing document.
    #[must_use]
    pub fn run_with(&self, article: &Article, doc: IndexDocument) -> IndexDocument {
        let span = info_span!("pipeline.run", code = %article.code, pipes = self.pipes.len());
        let _guard = span.enter();

        let doc = self
            .pipes
            .iter()
            .fold(doc, |doc, pipe| pipe.transform(article, doc));

        debug!(fields = doc.len(), "index document built");
        doc
    }

    /// Run the pipeline over a batch of articles in parallel.
    ///
    /// Articles are independent; documents are returned in input order.
    #[must_use]
    pub fn run_batch_parallel(&self, articles: &[Article]) -> Vec<IndexDocument> {
        use rayon::prelude::*;

        articles.par_iter().map(|article| self.run(article)).collect()
    }

    /// Names of the pipes in execution order.
    #[must_use]
    pub fn pipe_names(&self) -> Vec<&'static str> {
        self.pipes.iter().map(|pipe| pipe.name()).collect()
    }

    /// Number of pipes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    /// True when the pipeline has no pipes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }
}

/// Builder for [`Pipeline`].
#[derive(Debug)]
pub struct PipelineBuilder {
    pipes: Vec<Box<dyn FieldPipe>>,
}

impl PipelineBuilder {
    /// Append a pipe; pipes run in the order they are added.
    #[must_use]
    pub fn pipe(mut self, pipe: impl FieldPipe + 'static) -> Self {
        self.pipes.push(Box::new(pipe));
        self
    }

    /// Append an already boxed pipe.
    #[must_use]
    pub fn boxed_pipe(mut self, pipe: Box<dyn FieldPipe>) -> Self {
        self.pipes.push(pipe);
        self
    }

    /// Build the pipeline.
    #[must_use]
    pub fn build(self) -> Pipeline {
        Pipeline { pipes: self.pipes }
    }
}
