//! Benchmarks for similar-movie lookup
//!
//! Run with: cargo bench --package recommender
//!
//! Uses a synthetic catalog so no data files are needed.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{Catalog, MovieId, MovieRecord};
use recommender::Recommender;
use std::sync::Arc;

const CATALOG_SIZE: usize = 5000;

fn build_catalog() -> Arc<Catalog> {
    let movies = (0..CATALOG_SIZE)
        .map(|i| MovieRecord::new(i as MovieId, format!("Movie {}", i)))
        .collect();
    let rows = (0..CATALOG_SIZE)
        .map(|i| {
            (0..CATALOG_SIZE)
                .map(|j| ((i * 31 + j * 17) % 1000) as f32 / 1000.0)
                .collect()
        })
        .collect();
    Arc::new(Catalog::from_parts(movies, rows).expect("Failed to build catalog"))
}

fn bench_recommend(c: &mut Criterion) {
    let recommender = Recommender::new(build_catalog());

    c.bench_function("recommend_top_5", |b| {
        b.iter(|| {
            let recs = recommender.recommend(black_box("Movie 2500")).unwrap();
            black_box(recs)
        })
    });
}

fn bench_title_lookup(c: &mut Criterion) {
    let catalog = build_catalog();

    c.bench_function("find_index_by_title", |b| {
        b.iter(|| black_box(catalog.find_index_by_title(black_box("movie 4999"))))
    });
}

criterion_group!(benches, bench_recommend, bench_title_lookup);
criterion_main!(benches);
