#[macro_use]
extern crate criterion;
extern crate libfraction;

use criterion::{black_box, Criterion};
use libfraction::Fraction;

const INPUT: [f64; 5] = [0.5, -1.5, 3.141_592_653_589_793, 123_456.000_000_1, -0.000_42];

fn bench_from_float(c: &mut Criterion) {
    c.bench_function("from_float", |b| {
        b.iter(|| {
            for value in INPUT.iter() {
                Fraction::from_float(black_box(*value));
            }
        })
    });
}

fn bench_new(c: &mut Criterion) {
    c.bench_function("new", |b| {
        b.iter(|| {
            for value in INPUT.iter() {
                let _ = Fraction::new(black_box((*value * 1e6) as i64), black_box(1_000_000));
            }
        })
    });
}

criterion_group!(convert_benches, bench_from_float, bench_new);
criterion_main!(convert_benches);
