//! Fields taken from the journal the article was published in.

use crate::article::{non_empty, Article};
use crate::document::IndexDocument;
use crate::pipes::{field, FieldPipe};

fn non_empty_values(values: &[String]) -> impl Iterator<Item = &str> {
    values.iter().filter(|v| !v.is_empty()).map(String::as_str)
}

/// `ac`: one occurrence per knowledge area.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnowledgeAreaPipe;

impl FieldPipe for KnowledgeAreaPipe {
    fn name(&self) -> &'static str {
        "knowledge_area"
    }

    fn precondition(&self, article: &Article) -> bool {
        non_empty_values(&article.journal.knowledge_areas)
            .next()
            .is_some()
    }

    fn append_fields(&self, article: &Article, doc: &mut IndexDocument) {
        doc.push_all(
            field::KNOWLEDGE_AREA,
            non_empty_values(&article.journal.knowledge_areas),
        );
    }
}

/// `wok_citation_index`: one occurrence per Web of Science citation index.
#[derive(Debug, Clone, Copy, Default)]
pub struct WokCitationIndexPipe;

impl FieldPipe for WokCitationIndexPipe {
    fn name(&self) -> &'static str {
        "wok_citation_index"
    }

    fn precondition(&self, article: &Article) -> bool {
        non_empty_values(&article.journal.wos_citation_indexes)
            .next()
            .is_some()
    }

    fn append_fields(&self, article: &Article, doc: &mut IndexDocument) {
        doc.push_all(
            field::WOK_CITATION_INDEX,
            non_empty_values(&article.journal.wos_citation_indexes),
        );
    }
}

/// `wok_subject_categories`: one occurrence per Web of Science subject category.
#[derive(Debug, Clone, Copy, Default)]
pub struct WokSubjectCategoriesPipe;

impl FieldPipe for WokSubjectCategoriesPipe {
    fn name(&self) -> &'static str {
        "wok_subject_categories"
    }

    fn precondition(&self, article: &Article) -> bool {
        non_empty_values(&article.journal.wos_subject_areas)
            .next()
            .is_some()
    }

    fn append_fields(&self, article: &Article, doc: &mut IndexDocument) {
        doc.push_all(
            field::WOK_SUBJECT_CATEGORIES,
            non_empty_values(&article.journal.wos_subject_areas),
        );
    }
}

/// `ta`: full journal title.
#[derive(Debug, Clone, Copy, Default)]
pub struct JournalTitlePipe;

impl FieldPipe for JournalTitlePipe {
    fn name(&self) -> &'static str {
        "journal_title"
    }

    fn precondition(&self, article: &Article) -> bool {
        non_empty(article.journal.title.as_ref()).is_some()
    }

    fn append_fields(&self, article: &Article, doc: &mut IndexDocument) {
        if let Some(title) = non_empty(article.journal.title.as_ref()) {
            doc.push(field::JOURNAL_TITLE, title);
        }
    }
}

/// `fo`: human-readable issue label.
///
/// Composed as `{abbreviated title}; {volume}({issue}); {pages}; {date}`.
/// Components that are unknown are left out together with their separator;
/// the pipe applies only when the journal has an abbreviated title.
#[derive(Debug, Clone)]
pub struct IssueLabelPipe {
    separator: String,
}

impl IssueLabelPipe {
    /// Create the pipe with the separator placed between label components.
    #[must_use]
    pub fn new(separator: impl Into<String>) -> Self {
        IssueLabelPipe {
            separator: separator.into(),
        }
    }

    /// Build the label, or `None` without an abbreviated title.
    #[must_use]
    pub fn label(&self, article: &Article) -> Option<String> {
        let abbreviated = non_empty(article.journal.abbreviated_title.as_ref())?;

        let volume = non_empty(article.volume.as_ref());
        let issue = non_empty(article.issue.as_ref());
        let numbering = match (volume, issue) {
            (Some(volume), Some(issue)) => Some(format!("{volume}({issue})")),
            (Some(volume), None) => Some(volume.to_string()),
            (None, Some(issue)) => Some(format!("({issue})")),
            (None, None) => None,
        };

        let date = Some(article.publication_date.as_str()).filter(|d| !d.is_empty());

        let parts: Vec<String> = [
            Some(abbreviated.to_string()),
            numbering,
            article.page_range(),
            date.map(str::to_string),
        ]
        .into_iter()
        .flatten()
        .collect();

        Some(parts.join(&self.separator))
    }
}

impl Default for IssueLabelPipe {
    fn default() -> Self {
        IssueLabelPipe::new("; ")
    }
}

impl FieldPipe for IssueLabelPipe {
    fn name(&self) -> &'static str {
        "issue_label"
    }

    fn precondition(&self, article: &Article) -> bool {
        non_empty(article.journal.abbreviated_title.as_ref()).is_some()
    }

    fn append_fields(&self, article: &Article, doc: &mut IndexDocument) {
        if let Some(label) = self.label(article) {
            doc.push(field::ISSUE_LABEL, label);
        }
    }
}
