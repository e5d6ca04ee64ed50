// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use talpa::testing::synthetic_sequence;
use talpa::{search, EsaIndex};

const SEQUENCE_LEN: usize = 100_000;
const SEED: u64 = 0x5EED;

fn bench_build(c: &mut Criterion) {
    let sequence = synthetic_sequence(SEQUENCE_LEN, SEED);
    c.bench_function("build_100k", |b| {
        b.iter(|| EsaIndex::build(black_box(&sequence)).unwrap());
    });
}

fn bench_search(c: &mut Criterion) {
    let sequence = synthetic_sequence(SEQUENCE_LEN, SEED);
    let index = EsaIndex::build(&sequence).unwrap();

    // A pattern lifted from the sequence always hits; the synthetic
    // generator never emits N, so an N-run never does.
    let hit: Vec<u8> = sequence[5_000..5_020].to_vec();
    let miss = vec![b'N'; 20];

    c.bench_function("search_hit_20mer", |b| {
        b.iter(|| index.occurrences(black_box(&hit)).unwrap());
    });
    c.bench_function("search_miss_20mer", |b| {
        b.iter(|| index.occurrences(black_box(&miss)).unwrap());
    });
    c.bench_function("search_both_strands_20mer", |b| {
        b.iter(|| search(&index, black_box(&hit), true).unwrap());
    });
}

criterion_group!(benches, bench_build, bench_search);
criterion_main!(benches);
