//! Criterion benchmarks for whole-observation encoding.

use criterion::{criterion_group, criterion_main, Criterion};
use nletext_bench::{crowded_dungeon, reference_dungeon};
use nletext_engine::{BatchedEncoder, EncoderConfig, ObservationEncoder};

fn bench_encode_reference(c: &mut Criterion) {
    let obs = reference_dungeon(42);
    let raw = obs.view().unwrap();
    let encoder = ObservationEncoder::new(EncoderConfig::default()).unwrap();

    c.bench_function("encode_reference", |b| {
        b.iter(|| {
            let text = encoder.encode(&raw).unwrap();
            std::hint::black_box(&text);
        });
    });
}

fn bench_encode_crowded(c: &mut Criterion) {
    let obs = crowded_dungeon(42);
    let raw = obs.view().unwrap();
    let encoder = ObservationEncoder::new(EncoderConfig::default()).unwrap();

    c.bench_function("encode_crowded", |b| {
        b.iter(|| {
            let text = encoder.encode(&raw).unwrap();
            std::hint::black_box(&text);
        });
    });
}

/// 16 environments, one observation each: sequential vs worker pool.
fn bench_batch_16(c: &mut Criterion) {
    let owned: Vec<_> = (0..16).map(reference_dungeon).collect();
    let raw: Vec<_> = owned.iter().map(|o| o.view().unwrap()).collect();
    let batched = BatchedEncoder::new(EncoderConfig::default()).unwrap();

    c.bench_function("encode_batch_16_sequential", |b| {
        b.iter(|| {
            let texts = batched.encode_all(&raw).unwrap();
            std::hint::black_box(&texts);
        });
    });

    c.bench_function("encode_batch_16_parallel", |b| {
        b.iter(|| {
            let texts = batched.encode_all_parallel(&raw).unwrap();
            std::hint::black_box(&texts);
        });
    });
}

criterion_group!(
    benches,
    bench_encode_reference,
    bench_encode_crowded,
    bench_batch_16
);
criterion_main!(benches);
