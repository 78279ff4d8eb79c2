// Rebuild and query benchmarks over synthetic catalogs
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use recsim::prelude::*;

const CATEGORIES: &[&str] = &["Kitchen", "Office", "Garden", "Sports", "Toys", "Electronics"];
const COUNTRIES: &[&str] = &["Italy", "France", "Germany", "Japan", "Brazil"];

fn generate_catalog(size: usize) -> Vec<Product> {
    let mut rng = rand::rng();
    (0..size)
        .map(|i| {
            Product::new(i as u64, format!("Product {}", i))
                .with_category(*CATEGORIES.choose(&mut rng).unwrap())
                .with_country(*COUNTRIES.choose(&mut rng).unwrap())
                .with_price(rng.random_range(1.0f64..500.0))
                .with_rating(rng.random_range(1.0f64..5.0))
        })
        .collect()
}

fn benchmark_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    group.sample_size(10);

    for size in [100, 500, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("recsim", size), size, |b, &size| {
            let records = generate_catalog(size);
            b.iter(|| {
                let engine = Recommender::new(FeatureSchema::default()).unwrap();
                engine.load(black_box(records.clone())).unwrap();
            });
        });
    }

    group.finish();
}

fn benchmark_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild");
    group.sample_size(10);

    for size in [100, 500, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("recsim", size), size, |b, &size| {
            let catalog = Catalog::load(generate_catalog(size)).unwrap();
            let encoder = FeatureEncoder::new(FeatureSchema::default()).unwrap();
            let features = encoder.fit(&catalog);
            b.iter(|| black_box(SimilarityMatrix::from_features(&features)));
        });
    }

    group.finish();
}

fn benchmark_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    for size in [100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("recsim", size), size, |b, &size| {
            let engine = Recommender::new(FeatureSchema::default()).unwrap();
            engine.load(generate_catalog(size)).unwrap();
            b.iter(|| black_box(engine.recommend("Product 0", 10).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_load, benchmark_rebuild, benchmark_recommend);
criterion_main!(benches);
