// Criterion benchmarks for Intern Match

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use intern_match::core::{calculate_match_score, parse_tokens, Catalog, Recommender};
use intern_match::models::{CatalogItem, QueryTokens};

const TAGS: [&str; 8] = ["rust", "python", "react", "sql", "docker", "figma", "kotlin", "linux"];

fn create_catalog(size: usize) -> Catalog {
    (0..size)
        .map(|i| {
            let skills = [TAGS[i % TAGS.len()], TAGS[(i + 3) % TAGS.len()]];
            CatalogItem::new(&format!("int{}", i), &format!("Intern {}", i), &skills, "engineering")
        })
        .collect::<Vec<_>>()
        .into()
}

fn bench_parse_tokens(c: &mut Criterion) {
    c.bench_function("parse_tokens", |b| {
        b.iter(|| parse_tokens(black_box(Some("JavaScript, React, node.js , SQL, machine learning"))));
    });
}

fn bench_match_score(c: &mut Criterion) {
    let item = CatalogItem::new(
        "int1",
        "Full Stack Web Developer",
        &["javascript", "react", "node.js", "mongodb"],
        "web development",
    );
    let query = QueryTokens::new(Some("javascript, react, python"), Some("web, design"));

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| calculate_match_score(black_box(&item), black_box(&query)));
    });
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    for catalog_size in [8, 100, 1000, 10000].iter() {
        let recommender = Recommender::new(create_catalog(*catalog_size));

        group.bench_with_input(
            BenchmarkId::new("recommend", catalog_size),
            catalog_size,
            |b, _| {
                b.iter(|| {
                    recommender.recommend(
                        black_box(Some("rust, react, sql")),
                        black_box(Some("engineering")),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_tokens,
    bench_match_score,
    bench_recommend
);

criterion_main!(benches);
