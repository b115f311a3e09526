#[macro_use]
extern crate criterion;
extern crate libfraction;

use criterion::{black_box, Criterion};
use libfraction::{_euclidean_gcd, gcd};

const INPUT: [(u64, u64); 4] = [
    (288_481, 22_783),
    (939_841_321, 28_847_717),
    (48_812, 284_829),
    (9_223_372_036_854_775_807, 1_000_000),
];

fn bench_euclidean_gcd(c: &mut Criterion) {
    c.bench_function("euclidean_gcd", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                _euclidean_gcd(black_box(*u), black_box(*v));
            }
        })
    });
}

fn bench_gcd_u32(c: &mut Criterion) {
    c.bench_function("gcd_u32", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter().take(3) {
                gcd(black_box(*u as u32), black_box(*v as u32));
            }
        })
    });
}

criterion_group!(gcd_benches, bench_euclidean_gcd, bench_gcd_u32);
criterion_main!(gcd_benches);
