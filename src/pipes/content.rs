//! Descriptive fields: people, titles, abstracts, pages, funding.

use indexmap::IndexSet;

use crate::article::{non_empty, Article};
use crate::document::IndexDocument;
use crate::pipes::{field, localized_name, FieldPipe};

/// `au`: one occurrence per author, `"{given_names}, {surname}"`.
#[derive(Debug, Clone)]
pub struct AuthorsPipe {
    separator: String,
}

impl AuthorsPipe {
    /// Create the pipe with the separator placed between given names and surname.
    #[must_use]
    pub fn new(separator: impl Into<String>) -> Self {
        AuthorsPipe {
            separator: separator.into(),
        }
    }
}

impl Default for AuthorsPipe {
    fn default() -> Self {
        AuthorsPipe::new(", ")
    }
}

impl FieldPipe for AuthorsPipe {
    fn name(&self) -> &'static str {
        "authors"
    }

    fn precondition(&self, article: &Article) -> bool {
        !article.authors.is_empty()
    }

    fn append_fields(&self, article: &Article, doc: &mut IndexDocument) {
        doc.push_all(
            field::AUTHOR,
            article
                .authors
                .iter()
                .filter_map(|author| author.display_name(&self.separator)),
        );
    }
}

/// `ti_{lang}`: original title under the original language, then each
/// translated title under its own language.
///
/// An original title with no known language is emitted as plain `ti`. A
/// translation in the original language is not repeated.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitlePipe;

impl FieldPipe for TitlePipe {
    fn name(&self) -> &'static str {
        "title"
    }

    fn precondition(&self, article: &Article) -> bool {
        article.original_title().is_some() || article.translated_titles().next().is_some()
    }

    fn append_fields(&self, article: &Article, doc: &mut IndexDocument) {
        append_localized(
            doc,
            field::TITLE,
            article.original_language(),
            article.original_title(),
            article.translated_titles(),
        );
    }
}

/// `ab_{lang}`: original abstract, then translations, like [`TitlePipe`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AbstractPipe;

impl FieldPipe for AbstractPipe {
    fn name(&self) -> &'static str {
        "abstract"
    }

    fn precondition(&self, article: &Article) -> bool {
        article.original_abstract().is_some() || article.translated_abstracts().next().is_some()
    }

    fn append_fields(&self, article: &Article, doc: &mut IndexDocument) {
        append_localized(
            doc,
            field::ABSTRACT,
            article.original_language(),
            article.original_abstract(),
            article.translated_abstracts(),
        );
    }
}

fn append_localized<'a>(
    doc: &mut IndexDocument,
    prefix: &str,
    original_language: Option<&str>,
    original: Option<&str>,
    translations: impl Iterator<Item = (&'a str, &'a str)>,
) {
    if let Some(text) = original {
        match original_language {
            Some(language) => doc.push(localized_name(prefix, language), text),
            None => doc.push(prefix, text),
        }
    }

    for (language, text) in translations {
        if original.is_some() && original_language == Some(language) {
            continue;
        }
        doc.push(localized_name(prefix, language), text);
    }
}

/// `pg`: `start-end`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PagesPipe;

impl FieldPipe for PagesPipe {
    fn name(&self) -> &'static str {
        "pages"
    }

    fn precondition(&self, article: &Article) -> bool {
        article.page_range().is_some()
    }

    fn append_fields(&self, article: &Article, doc: &mut IndexDocument) {
        if let Some(pages) = article.page_range() {
            doc.push(field::PAGES, pages);
        }
    }
}

/// `aff_country`: distinct affiliation countries in first-seen order.
#[derive(Debug, Clone, Copy, Default)]
pub struct AffiliationCountryPipe;

impl FieldPipe for AffiliationCountryPipe {
    fn name(&self) -> &'static str {
        "affiliation_country"
    }

    fn precondition(&self, article: &Article) -> bool {
        article
            .affiliations
            .iter()
            .any(|aff| non_empty(aff.country.as_ref()).is_some())
    }

    fn append_fields(&self, article: &Article, doc: &mut IndexDocument) {
        let countries: IndexSet<&str> = article
            .affiliations
            .iter()
            .filter_map(|aff| non_empty(aff.country.as_ref()))
            .collect();
        doc.push_all(field::AFFILIATION_COUNTRY, countries);
    }
}

/// `aff_institution`: distinct affiliation institutions in first-seen order.
#[derive(Debug, Clone, Copy, Default)]
pub struct AffiliationInstitutionPipe;

impl FieldPipe for AffiliationInstitutionPipe {
    fn name(&self) -> &'static str {
        "affiliation_institution"
    }

    fn precondition(&self, article: &Article) -> bool {
        article
            .affiliations
            .iter()
            .any(|aff| non_empty(aff.institution.as_ref()).is_some())
    }

    fn append_fields(&self, article: &Article, doc: &mut IndexDocument) {
        let institutions: IndexSet<&str> = article
            .affiliations
            .iter()
            .filter_map(|aff| non_empty(aff.institution.as_ref()))
            .collect();
        doc.push_all(field::AFFILIATION_INSTITUTION, institutions);
    }
}

/// `sponsor`: one occurrence per funding sponsor.
#[derive(Debug, Clone, Copy, Default)]
pub struct SponsorPipe;

impl FieldPipe for SponsorPipe {
    fn name(&self) -> &'static str {
        "sponsor"
    }

    fn precondition(&self, article: &Article) -> bool {
        article.sponsors.iter().any(|s| !s.is_empty())
    }

    fn append_fields(&self, article: &Article, doc: &mut IndexDocument) {
        doc.push_all(
            field::SPONSOR,
            article
                .sponsors
                .iter()
                .filter(|s| !s.is_empty())
                .map(String::as_str),
        );
    }
}
