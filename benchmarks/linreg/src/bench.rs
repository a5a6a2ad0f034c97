//! Linear regression benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of fitting and scoring (1K to 100K points)
//! - Polyline sampling resolution
//! - Synthetic data generation
//! - Pathological inputs (outliers, clustered x)

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use linreg::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate points around y = 8x + 40 with Gaussian noise.
fn generate_linear_data(size: usize, seed: u64) -> Vec<Point<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 5.0).unwrap();

    (0..size)
        .map(|i| {
            let x = i as f64 * 10.0 / size as f64;
            Point::new(x, 8.0 * x + 40.0 + noise_dist.sample(&mut rng))
        })
        .collect()
}

/// Generate data with outliers (5% of points are extreme).
fn generate_outlier_data(size: usize, seed: u64) -> Vec<Point<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let outlier_dist = Uniform::new(-500.0, 500.0).unwrap();
    let mut points = generate_linear_data(size, seed);

    for _ in 0..size / 20 {
        let idx = rng.random_range(0..size);
        points[idx].y += outlier_dist.sample(&mut rng);
    }
    points
}

/// Generate x-values packed into a few tight clusters.
fn generate_clustered_data(size: usize, seed: u64) -> Vec<Point<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let jitter = Normal::new(0.0, 1e-6).unwrap();

    (0..size)
        .map(|i| {
            let x = (i % 4) as f64 + jitter.sample(&mut rng);
            Point::new(x, 8.0 * x + 40.0)
        })
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(50);

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        let points = generate_linear_data(size, 42);
        let line = fit_line(&points).unwrap();

        group.bench_with_input(BenchmarkId::new("fit", size), &size, |b, _| {
            b.iter(|| fit_line(black_box(&points)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("score", size), &size, |b, _| {
            b.iter(|| score_fit(black_box(&points), black_box(&line)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("report", size), &size, |b, _| {
            let model = LinearRegression::new().build().unwrap();
            b.iter(|| model.report(black_box(&points)).unwrap())
        });
    }
    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    group.sample_size(100);

    let line = RegressionResult::<f64>::new(8.0, 40.0);
    for steps in [10, 100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(steps as u64 + 1));
        group.bench_with_input(BenchmarkId::new("polyline", steps), &steps, |b, &steps| {
            b.iter(|| sample_polyline(black_box(&line), 1.0, 8.0, steps).unwrap())
        });
    }
    group.finish();
}

fn bench_synthetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthetic");
    group.sample_size(100);

    for count in [8, 1_000, 10_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("generate", count), &count, |b, &count| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| {
                generate_synthetic_points(&mut rng, count, (1.0, 8.0), (40.0, 100.0), 20.0)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(50);

    let outliers = generate_outlier_data(10_000, 42);
    group.bench_function("extreme_outliers", |b| {
        b.iter(|| fit_line(black_box(&outliers)).unwrap())
    });

    let clustered = generate_clustered_data(10_000, 42);
    group.bench_function("clustered", |b| {
        b.iter(|| fit_line(black_box(&clustered)).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_sampling,
    bench_synthetic,
    bench_pathological
);
criterion_main!(benches);
