//! Benchmarks for the dot product and both matrix-vector product
//! orientations.
//!
//! Dimensions are const generics, so each size is its own instantiation
//! rather than a runtime parameter.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lineal::prelude::*;

fn bench_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_dot");

    macro_rules! bench_size {
        ($($n:literal),*) => {$({
            let a = Vector::<f32, $n>::from_fn(|i| i as f32 * 0.5);
            let b = Vector::<f32, $n>::from_fn(|i| ($n - i) as f32);

            group.bench_with_input(BenchmarkId::from_parameter($n), &$n, |bench, _| {
                bench.iter(|| black_box(&a).dot(black_box(&b)));
            });
        })*};
    }

    bench_size!(4, 16, 64, 256, 1024);
    group.finish();
}

fn bench_matrix_times_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_times_vector");

    macro_rules! bench_size {
        ($($n:literal),*) => {$({
            let m = Matrix::<f32, $n, $n>::from_fn(|i, j| (i + j) as f32);
            let v = Vector::<f32, $n>::from_fn(|i| 1.0 + i as f32);

            group.bench_with_input(BenchmarkId::from_parameter($n), &$n, |bench, _| {
                bench.iter(|| black_box(&m) * black_box(&v));
            });
        })*};
    }

    bench_size!(4, 16, 64, 128);
    group.finish();
}

fn bench_vector_times_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_times_matrix");

    macro_rules! bench_size {
        ($($n:literal),*) => {$({
            let m = Matrix::<f32, $n, $n>::from_fn(|i, j| (i + j) as f32);
            let v = Vector::<f32, $n>::from_fn(|i| 1.0 + i as f32);

            group.bench_with_input(BenchmarkId::from_parameter($n), &$n, |bench, _| {
                bench.iter(|| black_box(&v) * black_box(&m));
            });
        })*};
    }

    bench_size!(4, 16, 64, 128);
    group.finish();
}

criterion_group!(
    benches,
    bench_dot,
    bench_matrix_times_vector,
    bench_vector_times_matrix
);
criterion_main!(benches);
