//! Criterion micro-benchmarks for the individual text sections.

use criterion::{criterion_group, criterion_main, Criterion};
use nletext_bench::crowded_dungeon;
use nletext_core::StatusVector;
use nletext_glyph::GlyphCatalog;
use nletext_obs::{ScreenTextExtractor, SpatialDescriber, StatsFormatter, SurroundingsConfig};
use nletext_space::CompassResolver;
use nletext_test_utils::fixtures::MONK_BLSTATS;

/// Build the catalog from scratch; this is the one-time startup cost.
fn bench_catalog_build(c: &mut Criterion) {
    c.bench_function("catalog_build", |b| {
        b.iter(|| {
            let catalog = GlyphCatalog::nethack_3_6();
            std::hint::black_box(&catalog);
        });
    });
}

fn bench_classify_all(c: &mut Criterion) {
    let catalog = GlyphCatalog::shared();
    let max = catalog.len() as i32;

    c.bench_function("classify_all_glyphs", |b| {
        b.iter(|| {
            for code in 0..max {
                std::hint::black_box(catalog.classify(code).unwrap());
            }
        });
    });
}

/// Resolve a heading for every offset on a 21x79 map.
fn bench_compass_sweep(c: &mut Criterion) {
    let compass = CompassResolver::default();

    c.bench_function("compass_sweep_map", |b| {
        b.iter(|| {
            for d_row in -20i64..=20 {
                for d_col in -78i64..=78 {
                    if let Ok(heading) = compass.resolve(d_row, d_col) {
                        std::hint::black_box(heading);
                    }
                }
            }
        });
    });
}

fn bench_surroundings_crowded(c: &mut Criterion) {
    let obs = crowded_dungeon(42);
    let raw = obs.view().unwrap();
    let player = raw.blstats.player_pos().unwrap();
    let describer =
        SpatialDescriber::new(GlyphCatalog::shared(), &SurroundingsConfig::default()).unwrap();

    c.bench_function("surroundings_crowded", |b| {
        b.iter(|| {
            let text = describer.describe(&raw.glyphs, player).unwrap();
            std::hint::black_box(&text);
        });
    });
}

fn bench_message_and_stats(c: &mut Criterion) {
    let obs = crowded_dungeon(42);
    let raw = obs.view().unwrap();
    let extractor = ScreenTextExtractor::default();
    let stats = StatsFormatter::new();
    let blstats = StatusVector::new(&MONK_BLSTATS);

    c.bench_function("message_extract", |b| {
        b.iter(|| std::hint::black_box(extractor.extract(&raw.tty_chars)));
    });

    c.bench_function("stats_format", |b| {
        b.iter(|| std::hint::black_box(stats.format(&blstats).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_catalog_build,
    bench_classify_all,
    bench_compass_sweep,
    bench_surroundings_crowded,
    bench_message_and_stats
);
criterion_main!(benches);
