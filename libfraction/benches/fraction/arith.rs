#[macro_use]
extern crate criterion;
extern crate lazy_static;
extern crate libfraction;

use criterion::{black_box, Criterion};
use lazy_static::lazy_static;
use libfraction::Fraction;

lazy_static! {
    static ref INPUT: [(Fraction, Fraction); 4] = [
        (Fraction::new(3, 4).unwrap(), Fraction::new(15, 2).unwrap()),
        (Fraction::new(-288_481, 22_783).unwrap(), Fraction::new(48_812, 284_829).unwrap()),
        (Fraction::new(939_841_321, 2).unwrap(), Fraction::new(-1, 28_847_717).unwrap()),
        (Fraction::new(1, 1_000_000).unwrap(), Fraction::new(999_999, 1_000_000).unwrap()),
    ];
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("add", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                black_box(*u).add(black_box(*v));
            }
        })
    });
}

fn bench_multiply(c: &mut Criterion) {
    c.bench_function("multiply", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                black_box(*u).multiply(black_box(*v));
            }
        })
    });
}

fn bench_divide(c: &mut Criterion) {
    c.bench_function("divide", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                let _ = black_box(*u).divide(black_box(*v));
            }
        })
    });
}

fn bench_checked_add(c: &mut Criterion) {
    c.bench_function("checked_add", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                black_box(*u).checked_add(black_box(*v));
            }
        })
    });
}

criterion_group!(arith_benches, bench_add, bench_multiply, bench_divide, bench_checked_add);
criterion_main!(arith_benches);
