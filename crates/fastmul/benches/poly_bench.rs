//! Benchmarks for fast multiplication and powering.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use fastmul::prelude::*;

/// Dense univariate polynomial of the given degree with small coefficients.
fn dense_univariate(degree: u32) -> Poly<Q> {
    let pairs = (0..=degree).map(|i| (vec![i], Q::from_integer(i64::from(i % 100) - 50)));
    Poly::from_pairs(pairs, PolyRing::univariate())
}

/// Dense bivariate polynomial with all monomials x^i y^j, i, j <= degree.
fn dense_bivariate(degree: u32) -> Poly<Q> {
    let ring = PolyRing::new(2, MonomialOrder::Grevlex);
    let pairs = (0..=degree).flat_map(|i| {
        (0..=degree).map(move |j| (vec![i, j], Q::from_integer(i64::from((i * 7 + j) % 19) - 9)))
    });
    Poly::from_pairs(pairs, ring)
}

fn bench_univariate_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("univariate_mul");

    for degree in [16, 64, 256] {
        let f = dense_univariate(degree);
        let g = dense_univariate(degree);

        group.bench_with_input(BenchmarkId::new("schoolbook", degree), &degree, |b, _| {
            b.iter(|| black_box(f.mul_naive(&g)))
        });

        group.bench_with_input(BenchmarkId::new("dispatcher", degree), &degree, |b, _| {
            b.iter(|| {
                let mut m = FastMultiplier::new(PolyRing::univariate());
                black_box(m.multiply(&f, &g))
            })
        });

        group.bench_with_input(BenchmarkId::new("unifast", degree), &degree, |b, _| {
            b.iter(|| {
                let mut m = FastMultiplier::new(PolyRing::univariate());
                black_box(m.unifast_mult(&f, &g))
            })
        });
    }

    group.finish();
}

fn bench_bivariate_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("bivariate_mul");

    for degree in [4, 8, 16] {
        let f = dense_bivariate(degree);
        let ring = f.ring();

        group.bench_with_input(BenchmarkId::new("schoolbook", degree), &degree, |b, _| {
            b.iter(|| black_box(f.mul_naive(&f)))
        });

        group.bench_with_input(BenchmarkId::new("dispatcher", degree), &degree, |b, _| {
            b.iter(|| {
                let mut m = FastMultiplier::new(ring);
                black_box(m.multiply(&f, &f))
            })
        });
    }

    group.finish();
}

fn bench_powers(c: &mut Criterion) {
    let mut group = c.benchmark_group("power");

    let ring = PolyRing::new(3, MonomialOrder::Grevlex);
    let trinomial = Poly::from_pairs(
        [
            (vec![1, 0, 0], Q::from_integer(1)),
            (vec![0, 1, 0], Q::from_integer(2)),
            (vec![0, 0, 1], Q::from_integer(3)),
        ],
        ring,
    );

    for n in [4, 8, 16] {
        group.bench_with_input(BenchmarkId::new("repeated_squaring", n), &n, |b, &n| {
            b.iter(|| {
                let mut m = FastMultiplier::new(ring);
                black_box(m.repeated_squaring(&trinomial, n))
            })
        });

        group.bench_with_input(BenchmarkId::new("multinomial", n), &n, |b, &n| {
            b.iter(|| black_box(multinomial_power(&trinomial, n)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_univariate_multiplication,
    bench_bivariate_multiplication,
    bench_powers,
);
criterion_main!(benches);
