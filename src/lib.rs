#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # articlemeta
//!
//! Derivation of search-index documents and deduplication keys from
//! scholarly article metadata.
//!
//! ## Quick Start
//!
//! ### Building an index document
//!
//! ```
//! use articlemeta::{Article, Author, ExportConfig, Pipeline};
//!
//! let article = Article::builder("S0034-89102010000400007", "scl")
//!     .publication_date("2010-08")
//!     .original_language("pt")
//!     .original_title("Cuidados de saúde")
//!     .author(Author::new("Ricardo", "Sesso"))
//!     .build();
//!
//! let doc = Pipeline::iahx(&ExportConfig::default()).run(&article);
//! assert_eq!(doc.get("id"), Some("art-S0034-89102010000400007-scl"));
//! assert_eq!(doc.get("ti_pt"), Some("Cuidados de saúde"));
//! ```
//!
//! ### Fingerprinting
//!
//! ```
//! use articlemeta::{Article, Author, Fingerprint};
//!
//! let article = Article::builder("S1", "scl")
//!     .publication_date("2010")
//!     .original_title("Health care after 60th")
//!     .author(Author::new("John", "Smith"))
//!     .build();
//!
//! let fingerprint = Fingerprint::generate(&article);
//! assert_eq!(
//!     fingerprint.title_keys,
//!     Some(vec![
//!         "healthcareafterth".to_string(),
//!         "healthcareafterthjohnsmith2010".to_string(),
//!     ])
//! );
//! ```
//!
//! ## Modules
//!
//! - [`article`]: Article, journal and author records
//! - [`citation`]: Cited references and their title resolution
//! - [`normalize`]: Text normalization used by every key
//! - [`fingerprint`]: Title and citation deduplication keys
//! - [`pipes`]: The [`FieldPipe`] trait and the IAHx field pipes
//! - [`pipeline`]: Ordered execution of field pipes
//! - [`document`]: The flat index document produced by a pipeline
//! - [`iahx`]: IAHx XML rendering
//! - [`metadata`]: Pre-storage enrichment of raw records
//! - [`config`]: Export configuration
//! - [`error`]: Error types and result type

pub mod article;
pub mod citation;
pub mod config;
pub mod document;
pub mod error;
pub mod fingerprint;
pub mod iahx;
pub mod metadata;
pub mod normalize;
pub mod pipeline;
pub mod pipes;

pub use article::{Affiliation, Article, ArticleBuilder, Author, Journal};
pub use citation::{Citation, CitationTitleKind};
pub use config::ExportConfig;
pub use document::{IndexDocument, IndexField};
pub use error::{ArticleMetaError, Result};
pub use fingerprint::Fingerprint;
pub use normalize::normalize;
pub use pipeline::{Pipeline, PipelineBuilder};
pub use pipes::FieldPipe;
