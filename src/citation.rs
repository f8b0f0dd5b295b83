//! Citation (reference list entry) structures.
//!
//! A [`Citation`] carries up to five typed title fields. Which one is "the"
//! title of the citation is decided by a fixed priority table,
//! [`TITLE_PRIORITY`], evaluated left to right: the first non-empty field wins.
//! Every code path that needs a citation title goes through
//! [`Citation::title`], so the priority is defined in exactly one place.

use serde::{Deserialize, Serialize};

use crate::article::{non_empty, Author};

/// The kind of title a citation's resolved title came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CitationTitleKind {
    /// Title of a journal article
    Article,
    /// Title of a book chapter
    Chapter,
    /// Title of a thesis or dissertation
    Thesis,
    /// Title of a conference
    Conference,
    /// Title of a linked web resource
    Link,
}

/// Accessor for one title field of a citation.
pub type TitleAccessor = fn(&Citation) -> Option<&str>;

/// Title fields in resolution order.
pub const TITLE_PRIORITY: [(CitationTitleKind, TitleAccessor); 5] = [
    (CitationTitleKind::Article, article_title),
    (CitationTitleKind::Chapter, chapter_title),
    (CitationTitleKind::Thesis, thesis_title),
    (CitationTitleKind::Conference, conference_title),
    (CitationTitleKind::Link, link_title),
];

fn article_title(citation: &Citation) -> Option<&str> {
    non_empty(citation.article_title.as_ref())
}

fn chapter_title(citation: &Citation) -> Option<&str> {
    non_empty(citation.chapter_title.as_ref())
}

fn thesis_title(citation: &Citation) -> Option<&str> {
    non_empty(citation.thesis_title.as_ref())
}

fn conference_title(citation: &Citation) -> Option<&str> {
    non_empty(citation.conference_title.as_ref())
}

fn link_title(citation: &Citation) -> Option<&str> {
    non_empty(citation.link_title.as_ref())
}

/// A reference entry cited by an article.
///
/// All fields are optional; an empty string is treated the same as an absent
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Title of a cited journal article
    pub article_title: Option<String>,
    /// Title of a cited book chapter
    pub chapter_title: Option<String>,
    /// Title of a cited thesis
    pub thesis_title: Option<String>,
    /// Title of a cited conference
    pub conference_title: Option<String>,
    /// Title of a cited web resource
    pub link_title: Option<String>,
    /// First page of the cited work
    pub start_page: Option<String>,
    /// Last page of the cited work
    pub end_page: Option<String>,
    /// Publication date, year first (`"2012-01"`)
    pub date: Option<String>,
    /// Authors of the cited entry itself
    #[serde(default)]
    pub authors: Vec<Author>,
    /// Authors of the containing work (e.g. the book a chapter belongs to)
    #[serde(default)]
    pub monographic_authors: Vec<Author>,
}

impl Citation {
    /// Resolve the citation title together with the field it came from.
    #[must_use]
    pub fn title_with_kind(&self) -> Option<(CitationTitleKind, &str)> {
        TITLE_PRIORITY
            .iter()
            .find_map(|(kind, accessor)| accessor(self).map(|title| (*kind, title)))
    }

    /// Resolve the citation title: the first non-empty of article, chapter,
    /// thesis, conference and link title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title_with_kind().map(|(_, title)| title)
    }

    /// Start page, or `""` when absent.
    #[must_use]
    pub fn start_page(&self) -> &str {
        self.start_page.as_deref().unwrap_or_default()
    }

    /// End page, or `""` when absent.
    #[must_use]
    pub fn end_page(&self) -> &str {
        self.end_page.as_deref().unwrap_or_default()
    }

    /// Citation date, if present and non-empty.
    #[must_use]
    pub fn date(&self) -> Option<&str> {
        non_empty(self.date.as_ref())
    }

    /// First author used for fingerprinting.
    ///
    /// Individual authors take precedence; monographic authors are consulted
    /// only when the citation lists no individual author.
    #[must_use]
    pub fn first_author(&self) -> Option<&Author> {
        self.authors
            .first()
            .or_else(|| self.monographic_authors.first())
    }
}
