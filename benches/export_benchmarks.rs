#![allow(missing_docs)]
//! Benchmarks for fingerprinting and IAHx export.
//!
//! Uses Criterion.rs over a synthetic batch of realistic article records.

use articlemeta::fingerprint::generate_batch_parallel;
use articlemeta::{iahx, Article, Author, Citation, ExportConfig, Fingerprint, Pipeline};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Build an article with translations, authors and a reference list.
fn make_article(index: usize) -> Article {
    let mut builder = Article::builder(format!("S0034-8910201000040{index:04}"), "scl")
        .document_type("research-article")
        .original_language("pt")
        .publication_date("2010-08")
        .original_title(format!("Perfil epidemiológico dos pacientes em terapia renal {index}"))
        .translated_title("en", "Epidemiological profile of patients on renal replacement therapy")
        .translated_title("es", "Perfil epidemiológico de los pacientes en terapia renal")
        .original_abstract("OBJETIVO: Descrever o perfil epidemiológico dos pacientes.")
        .translated_abstract("en", "OBJECTIVE: To describe the epidemiological profile of patients.")
        .pages("639", "649")
        .volume_issue("44", "4")
        .affiliation("Universidade Federal de Minas Gerais", "BRAZIL")
        .sponsor("Ministério da Saúde");

    for author in 0..10 {
        builder = builder.author(Author::new(format!("Given {author}"), "Sesso"));
    }
    for citation in 0..30 {
        builder = builder.citation(Citation {
            article_title: Some(format!("Doença renal crônica no Brasil, parte {citation}")),
            start_page: Some("10".to_string()),
            end_page: Some("20".to_string()),
            date: Some("2004-01".to_string()),
            authors: vec![Author::new("Ricardo", "Sesso")],
            ..Default::default()
        });
    }
    builder.build()
}

fn make_batch(size: usize) -> Vec<Article> {
    (0..size).map(make_article).collect()
}

/// Benchmark fingerprinting a single article.
fn benchmark_fingerprint_single(c: &mut Criterion) {
    let article = make_article(0);

    c.bench_function("fingerprint_single", |b| {
        b.iter(|| Fingerprint::generate(black_box(&article)));
    });
}

/// Benchmark fingerprinting 1,000 articles sequentially and in parallel.
fn benchmark_fingerprint_1k(c: &mut Criterion) {
    let articles = make_batch(1_000);

    c.bench_function("fingerprint_1k_sequential", |b| {
        b.iter(|| {
            black_box(&articles)
                .iter()
                .map(Fingerprint::generate)
                .collect::<Vec<_>>()
        });
    });

    c.bench_function("fingerprint_1k_parallel", |b| {
        b.iter(|| generate_batch_parallel(black_box(&articles)));
    });
}

/// Benchmark running the IAHx pipeline over 1,000 articles.
fn benchmark_pipeline_1k(c: &mut Criterion) {
    let articles = make_batch(1_000);
    let pipeline = Pipeline::iahx(&ExportConfig::default());

    c.bench_function("pipeline_1k_sequential", |b| {
        b.iter(|| {
            black_box(&articles)
                .iter()
                .map(|article| pipeline.run(article))
                .collect::<Vec<_>>()
        });
    });

    c.bench_function("pipeline_1k_parallel", |b| {
        b.iter(|| pipeline.run_batch_parallel(black_box(&articles)));
    });
}

/// Benchmark rendering 1,000 documents as IAHx XML.
fn benchmark_xml_1k(c: &mut Criterion) {
    let pipeline = Pipeline::iahx(&ExportConfig::default());
    let docs = pipeline.run_batch_parallel(&make_batch(1_000));

    c.bench_function("iahx_xml_1k", |b| {
        b.iter(|| iahx::to_iahx_xml(black_box(&docs)));
    });
}

criterion_group!(
    benches,
    benchmark_fingerprint_single,
    benchmark_fingerprint_1k,
    benchmark_pipeline_1k,
    benchmark_xml_1k,
);
criterion_main!(benches);
