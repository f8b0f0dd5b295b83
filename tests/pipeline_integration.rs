//! Integration tests for the IAHx export pipeline.

mod common;

use articlemeta::pipes::{field, AuthorsPipe, FieldPipe, KnowledgeAreaPipe};
use articlemeta::{iahx, Article, ExportConfig, IndexDocument, Pipeline};
use common::{create_raw_article, create_test_article};

fn field_names(doc: &IndexDocument) -> Vec<&str> {
    doc.fields().iter().map(|f| f.name.as_str()).collect()
}

#[test]
fn test_full_document_field_order() {
    let doc = Pipeline::iahx(&ExportConfig::default()).run(&create_test_article());

    let mut expected = vec!["id", "in", "ac", "cc", "type", "ur"];
    expected.extend(std::iter::repeat("au").take(10));
    expected.extend(["ti_pt", "ti_en", "ti_es"]);
    expected.extend([
        "pg",
        "wok_citation_index",
        "wok_subject_categories",
        "fo",
        "ta",
        "la",
        "da",
        "ab_pt",
        "ab_en",
        "ab_es",
        "aff_country",
        "aff_institution",
        "aff_institution",
    ]);
    expected.extend(std::iter::repeat("sponsor").take(3));

    assert_eq!(field_names(&doc), expected);
}

#[test]
fn test_full_document_values() {
    let doc = Pipeline::iahx(&ExportConfig::default()).run(&create_test_article());

    assert_eq!(doc.get(field::ID), Some("art-S0034-89102010000400007-scl"));
    assert_eq!(doc.get(field::COLLECTION), Some("scl"));
    assert_eq!(doc.get(field::KNOWLEDGE_AREA), Some("Health Sciences"));
    assert_eq!(doc.get(field::CENTER), Some("br1.1"));
    assert_eq!(doc.get(field::DOCUMENT_TYPE), Some("research-article"));
    assert_eq!(doc.get(field::URL), Some("art-S0034-89102010000400007"));
    assert_eq!(doc.get(field::PAGES), Some("639-649"));
    assert_eq!(doc.get(field::WOK_CITATION_INDEX), Some("SCIE"));
    assert_eq!(
        doc.get(field::WOK_SUBJECT_CATEGORIES),
        Some("PUBLIC, ENVIRONMENTAL & OCCUPATIONAL HEALTH")
    );
    assert_eq!(
        doc.get(field::ISSUE_LABEL),
        Some("Rev. Saúde Pública; 44(4); 639-649; 2010-08")
    );
    assert_eq!(doc.get(field::JOURNAL_TITLE), Some("Revista de Saúde Pública"));
    assert_eq!(doc.get(field::LANGUAGE), Some("pt"));
    assert_eq!(doc.get(field::PUBLICATION_DATE), Some("2010-08"));
    assert_eq!(doc.get_all(field::AFFILIATION_COUNTRY), vec!["BRAZIL"]);
    assert_eq!(
        doc.get_all(field::AFFILIATION_INSTITUTION),
        vec![
            "Universidade Federal de Minas Gerais",
            "Universidade Federal de São Paulo"
        ]
    );
    assert_eq!(doc.get_all(field::SPONSOR).len(), 3);
}

#[test]
fn test_authors_keep_byline_order() {
    let doc = Pipeline::iahx(&ExportConfig::default()).run(&create_test_article());
    let authors = doc.get_all(field::AUTHOR);

    assert_eq!(authors.len(), 10);
    assert_eq!(authors.first(), Some(&"Mário M, Rodrigues"));
    assert_eq!(authors.get(1), Some(&"Maria Inês, Schmidt"));
    assert_eq!(authors.last(), Some(&"Ricardo, Sesso"));
}

#[test]
fn test_missing_data_leaves_fields_out() {
    let mut article = create_test_article();
    article.journal.knowledge_areas.clear();
    article.sponsors.clear();

    let doc = Pipeline::iahx(&ExportConfig::default()).run(&article);
    assert!(!doc.contains(field::KNOWLEDGE_AREA));
    assert!(!doc.contains(field::SPONSOR));
    assert_eq!(doc.get(field::CENTER), Some("br1.1"));
}

#[test]
fn test_single_pipe_in_isolation() {
    let mut article = create_test_article();
    article.journal.knowledge_areas.clear();

    assert!(!KnowledgeAreaPipe.precondition(&article));
    let doc = KnowledgeAreaPipe.transform(&article, IndexDocument::new());
    assert!(doc.is_empty());

    let doc = AuthorsPipe::default().transform(&article, doc);
    assert_eq!(doc.len(), 10);
}

#[test]
fn test_without_abstracts() {
    let config = ExportConfig {
        include_abstracts: false,
        ..Default::default()
    };
    let doc = Pipeline::iahx(&config).run(&create_test_article());
    assert!(field_names(&doc).iter().all(|name| !name.starts_with("ab")));
}

#[test]
fn test_run_is_idempotent() {
    let pipeline = Pipeline::iahx(&ExportConfig::default());
    let article = create_test_article();
    assert_eq!(pipeline.run(&article), pipeline.run(&article));
}

#[test]
fn test_batch_preserves_input_order() {
    let pipeline = Pipeline::iahx(&ExportConfig::default());
    let first = create_test_article();
    let mut second = create_test_article();
    second.code = "S0034-89102010000400008".to_string();

    let docs = pipeline.run_batch_parallel(&[first, second]);
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].get(field::ID), Some("art-S0034-89102010000400007-scl"));
    assert_eq!(docs[1].get(field::ID), Some("art-S0034-89102010000400008-scl"));
}

#[test]
fn test_json_record_to_xml() {
    let json = create_raw_article().to_string();
    let article = Article::from_json(&json).expect("valid record");

    let doc = Pipeline::iahx(&ExportConfig::default()).run(&article);
    assert_eq!(doc.get("ti_pt"), Some("Cuidados de saúde"));
    assert_eq!(doc.get("ti_en"), Some("Health care"));
    assert_eq!(doc.get_all(field::AUTHOR), vec!["Ricardo, Sesso", "Maria, Silva"]);
    assert_eq!(doc.get(field::ISSUE_LABEL), Some("Rev. Saúde Pública; 2010-08"));

    let xml = iahx::to_iahx_xml_document(&[doc]).expect("serializable");
    assert!(xml.starts_with("<?xml"));
    assert!(xml.contains(r#"<field name="id">art-S0034-89102010000400007-scl</field>"#));
    assert!(xml.contains(r#"<field name="au">Ricardo, Sesso</field>"#));
}
