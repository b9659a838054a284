//! Benchmark suite for basket-algo
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use basket_algo::mining::FrequentItemsetMiner;
use basket_algo::{sanitize, EngineConfig, RecommendationEngine};

/// Deterministic synthetic order history with overlapping item clusters.
fn synthetic_orders(n: usize) -> Vec<Vec<String>> {
    (0..n)
        .map(|i| {
            vec![
                format!("sku{}", i % 7),
                format!("sku{}", (i * 3 + 1) % 7),
                format!("bundle{}", (i * 5 + 2) % 11),
            ]
        })
        .collect()
}

fn bench_mining(c: &mut Criterion) {
    let transactions = sanitize::normalize_transactions(&synthetic_orders(500));
    let miner = FrequentItemsetMiner::new(0.05).unwrap();

    c.bench_function("FrequentItemsetMiner::mine/500", |b| {
        b.iter(|| miner.mine(black_box(&transactions)))
    });
}

fn bench_train(c: &mut Criterion) {
    let orders = synthetic_orders(500);
    let engine = RecommendationEngine::new(EngineConfig::default()).unwrap();

    c.bench_function("RecommendationEngine::train/500", |b| {
        b.iter(|| engine.train(black_box(&orders)))
    });
}

fn bench_recommend_with_report(c: &mut Criterion) {
    let orders = synthetic_orders(500);
    let engine = RecommendationEngine::new(EngineConfig::default()).unwrap();
    let report = engine.train(&orders);
    let cart = vec!["sku0".to_string(), "sku3".to_string()];

    c.bench_function("RecommendationEngine::recommend_with_report/500", |b| {
        b.iter(|| engine.recommend_with_report(black_box(&report), black_box(&cart), 5))
    });
}

criterion_group!(benches, bench_mining, bench_train, bench_recommend_with_report);
criterion_main!(benches);
