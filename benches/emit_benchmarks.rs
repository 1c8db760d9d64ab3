//! Criterion benchmarks for linelog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use linelog::prelude::*;
use serde_json::json;
use std::io;

fn discard_config() -> LogConfig {
    let config = LogConfig::new();
    config.set_sink(WriterSink::new(io::sink()));
    config
}

// ============================================================================
// Factory Benchmarks
// ============================================================================

fn bench_factory(c: &mut Criterion) {
    let mut group = c.benchmark_group("factory");
    group.throughput(Throughput::Elements(1));

    let config = discard_config();
    let root = Logger::create(&config, ("root", json!({"service": "bench"}))).unwrap();

    group.bench_function("create_named", |b| {
        b.iter(|| {
            let logger = Logger::create(&config, black_box("name")).unwrap();
            black_box(logger)
        });
    });

    group.bench_function("derive_with_context", |b| {
        b.iter(|| {
            let child = root
                .derive(black_box(("child", json!({"request_id": "r-1"}))))
                .unwrap();
            black_box(child)
        });
    });

    group.finish();
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let config = discard_config();
    let log = Logger::create(&config, ("bench", json!({"service": "bench"}))).unwrap();

    group.bench_function("message", |b| {
        b.iter(|| {
            log.info(black_box("a benchmark message"));
        });
    });

    group.bench_function("message_with_fields", |b| {
        b.iter(|| {
            log.info(black_box((
                "a benchmark message",
                json!({"count": 3, "flag": true}),
            )));
        });
    });

    group.bench_function("error_value", |b| {
        b.iter(|| {
            log.warn(black_box(ErrorValue::new("Error", "benchmark error")));
        });
    });

    group.finish();
}

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatters");
    group.throughput(Throughput::Elements(1));

    let config = discard_config();
    config.set_formatter("password", |_| json!("[redacted]"));
    let log = Logger::create(&config, "bench").unwrap();

    group.bench_function("one_formatted_field", |b| {
        b.iter(|| {
            log.info(black_box(("login", json!({"password": "hunter2"}))));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_factory, bench_emission, bench_formatters);
criterion_main!(benches);
