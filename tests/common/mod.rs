//! Common test fixtures shared across the integration test suite.

use articlemeta::{Article, Author, Citation, Journal};
use serde_json::{json, Value};

/// Journal of the fixture article.
pub fn create_test_journal() -> Journal {
    Journal {
        title: Some("Revista de Saúde Pública".to_string()),
        abbreviated_title: Some("Rev. Saúde Pública".to_string()),
        print_issn: Some("0034-8910".to_string()),
        electronic_issn: Some("1518-8787".to_string()),
        knowledge_areas: vec!["Health Sciences".to_string()],
        wos_citation_indexes: vec!["SCIE".to_string()],
        wos_subject_areas: vec!["PUBLIC, ENVIRONMENTAL & OCCUPATIONAL HEALTH".to_string()],
    }
}

/// Creates a realistic research article with translations, ten authors,
/// affiliations, sponsors and a small reference list.
pub fn create_test_article() -> Article {
    let authors = [
        ("Mário M", "Rodrigues"),
        ("Maria Inês", "Schmidt"),
        ("Sandhi M", "Barreto"),
        ("Bruce B", "Duncan"),
        ("Rosane H", "Griep"),
        ("Dóra", "Chor"),
        ("Paulo A", "Lotufo"),
        ("Rosane", "Härter"),
        ("Alexandre C", "Pereira"),
        ("Ricardo", "Sesso"),
    ];

    let mut builder = Article::builder("S0034-89102010000400007", "scl")
        .document_type("research-article")
        .original_language("pt")
        .publication_date("2010-08")
        .processing_date("2010-08-30")
        .original_title("Perfil epidemiológico dos pacientes em terapia renal substitutiva no Brasil, 2000-2004")
        .translated_title("en", "Epidemiological profile of patients on renal replacement therapy in Brazil, 2000-2004")
        .translated_title("es", "Perfil epidemiológico de los pacientes en terapia renal substitutiva en Brasil, 2000-2004")
        .original_abstract("OBJETIVO: Descrever o perfil epidemiológico dos pacientes em terapia renal substitutiva.")
        .translated_abstract("en", "OBJECTIVE: To describe the epidemiological profile of patients on renal replacement therapy.")
        .translated_abstract("es", "OBJETIVO: Describir el perfil epidemiológico de los pacientes en terapia renal substitutiva.")
        .pages("639", "649")
        .volume_issue("44", "4")
        .center_code("br1.1")
        .affiliation("Universidade Federal de Minas Gerais", "BRAZIL")
        .affiliation("Universidade Federal de São Paulo", "BRAZIL")
        .affiliation("Universidade Federal de Minas Gerais", "BRAZIL")
        .sponsor("Ministério da Saúde")
        .sponsor("Conselho Nacional de Desenvolvimento Científico e Tecnológico")
        .sponsor("Fundação de Amparo à Pesquisa do Estado de Minas Gerais")
        .journal(create_test_journal());

    for (given, surname) in authors {
        builder = builder.author(Author::new(given, surname));
    }

    for citation in create_test_citations() {
        builder = builder.citation(citation);
    }

    builder.build()
}

/// Reference list of the fixture article.
pub fn create_test_citations() -> Vec<Citation> {
    vec![
        Citation {
            article_title: Some("End-stage renal disease in Brazil".to_string()),
            start_page: Some("10".to_string()),
            end_page: Some("20".to_string()),
            date: Some("2004".to_string()),
            authors: vec![Author::new("Ricardo", "Sesso")],
            ..Default::default()
        },
        Citation {
            chapter_title: Some("Diálise no Brasil".to_string()),
            date: Some("2001-05".to_string()),
            monographic_authors: vec![Author::new("Maria", "Silva")],
            ..Default::default()
        },
        Citation {
            link_title: Some("Censo da Sociedade Brasileira de Nefrologia".to_string()),
            ..Default::default()
        },
        Citation {
            start_page: Some("1".to_string()),
            ..Default::default()
        },
    ]
}

/// A minimal article record as it arrives from the store.
#[allow(dead_code)]
pub fn create_raw_article() -> Value {
    json!({
        "code": "S0034-89102010000400007",
        "collection": "scl",
        "document_type": "research-article",
        "original_language": "pt",
        "publication_date": "2010-08",
        "original_title": "Cuidados de saúde",
        "translated_titles": {"en": "Health care"},
        "authors": [
            {"given_names": "Ricardo", "surname": "Sesso"},
            {"given_names": "Maria", "surname": "Silva"}
        ],
        "journal": {
            "abbreviated_title": "Rev. Saúde Pública",
            "print_issn": "0034-8910",
            "electronic_issn": "1518-8787"
        }
    })
}
