//! Credit Index Build and Lookup Performance Benchmark
//!
//! Measures index construction cost and query throughput as the catalog grows.
//!
//! **Goal:** Lookups return borrowed sets, so query cost is the map descent only
//! **Target:** <1us per lookup on a 10,000-album catalog

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trackdex::{CreditIndex, TrackCredit};

const TRACKS_PER_ALBUM: u32 = 12;

/// Seeded catalog with a shared artist pool, so artists repeat across albums
fn synthetic_catalog(albums: usize, seed: u64) -> Vec<TrackCredit> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut credits = Vec::with_capacity(albums * TRACKS_PER_ALBUM as usize);

    for album in 0..albums {
        let album_title = format!("Album {:05}", album);
        for track in 1..=TRACKS_PER_ALBUM {
            let artist = format!("Artist {:03}", rng.gen_range(0..500));
            credits.push(TrackCredit::new(album_title.clone(), track, artist));
        }
    }
    credits
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for albums in [100usize, 1_000, 10_000] {
        let credits = synthetic_catalog(albums, 42);
        group.bench_function(BenchmarkId::new("build", albums), |b| {
            b.iter(|| {
                let index = CreditIndex::build(black_box(credits.clone())).unwrap();
                black_box(index);
            });
        });
    }

    group.finish();
}

fn bench_index_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_lookup");

    for albums in [100usize, 1_000, 10_000] {
        let index = CreditIndex::build(synthetic_catalog(albums, 42)).unwrap();
        let present = format!("Album {:05}", albums / 2);

        group.bench_function(BenchmarkId::new("album", albums), |b| {
            b.iter(|| {
                let artists = index.artists_for(black_box(&present), None);
                black_box(artists);
            });
        });

        group.bench_function(BenchmarkId::new("album_track", albums), |b| {
            b.iter(|| {
                let artists = index.artists_for(black_box(&present), Some(7));
                black_box(artists);
            });
        });

        group.bench_function(BenchmarkId::new("album_missing", albums), |b| {
            b.iter(|| {
                let artists = index.artists_for(black_box("No Such Album"), None);
                black_box(artists);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_index_build, bench_index_lookup);
criterion_main!(benches);
