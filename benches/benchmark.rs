//! Kernel regression benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of the kernel mean smoother (500 to 5K points)
//! - Bandwidth sensitivity of the mean-variance smoother
//! - Local linear fits in 1D, 2D and 3D
//! - Cross-validation over a bandwidth grid (k-fold and leave-one-out)
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use krs_rs::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate sinusoidal data on [0, 10] with Gaussian noise.
fn generate_sine_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.2).unwrap();

    let x: Vec<f64> = (0..size).map(|i| i as f64 * 10.0 / size as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| xi.sin() + noise_dist.sample(&mut rng))
        .collect();
    (x, y)
}

/// Generate data whose noise level grows along x.
fn generate_heteroscedastic_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 1.0).unwrap();

    let x: Vec<f64> = (0..size).map(|i| i as f64 * 10.0 / size as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| xi.sin() + 0.05 * (1.0 + xi) * noise_dist.sample(&mut rng))
        .collect();
    (x, y)
}

/// Generate uniformly scattered locations in `[0, 1]^dims` with a smooth response.
fn generate_design_data(size: usize, dims: usize, seed: u64) -> DesignSample<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.1).unwrap();
    let loc_dist = Uniform::new(0.0, 1.0).unwrap();

    let locations: Vec<f64> = (0..size * dims).map(|_| loc_dist.sample(&mut rng)).collect();
    let y: Vec<f64> = locations
        .chunks_exact(dims)
        .map(|p| {
            let r2: f64 = p.iter().map(|v| (v - 0.5) * (v - 0.5)).sum();
            (-4.0 * r2).exp() + noise_dist.sample(&mut rng)
        })
        .collect();
    DesignSample::with_intercept(&y, &locations, dims).unwrap()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(30);

    for size in [500, 1_000, 2_000, 5_000] {
        group.throughput(Throughput::Elements(size as u64));

        let (x, y) = generate_sine_data(size, 42);

        group.bench_with_input(BenchmarkId::new("mean", size), &size, |b, _| {
            b.iter(|| {
                KernelRegression::new()
                    .bandwidth(0.2)
                    .build()
                    .unwrap()
                    .fit(black_box(&x), black_box(&y))
                    .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("mean_variance", size), &size, |b, _| {
            b.iter(|| {
                KernelRegression::new()
                    .bandwidth(0.2)
                    .method(MeanVariance)
                    .build()
                    .unwrap()
                    .fit(black_box(&x), black_box(&y))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_bandwidth(c: &mut Criterion) {
    let mut group = c.benchmark_group("bandwidth");
    group.sample_size(50);

    let (x, y) = generate_heteroscedastic_data(2_000, 42);

    for bw in [0.05, 0.2, 0.5, 1.0] {
        group.bench_with_input(BenchmarkId::new("mean_variance", bw), &bw, |b, &bw| {
            b.iter(|| {
                KernelRegression::new()
                    .bandwidth(bw)
                    .method(MeanVariance)
                    .build()
                    .unwrap()
                    .fit(black_box(&x), black_box(&y))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_residual_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("residual_mode");
    group.sample_size(50);

    let (x, y) = generate_heteroscedastic_data(2_000, 7);

    group.bench_function("in_sample", |b| {
        b.iter(|| {
            KernelRegression::new()
                .bandwidth(0.3)
                .method(MeanVariance)
                .residual_mode(InSample)
                .build()
                .unwrap()
                .fit(black_box(&x), black_box(&y))
                .unwrap()
        })
    });

    group.bench_function("leave_one_out", |b| {
        b.iter(|| {
            KernelRegression::new()
                .bandwidth(0.3)
                .method(MeanVariance)
                .residual_mode(LeaveOneOut)
                .build()
                .unwrap()
                .fit(black_box(&x), black_box(&y))
                .unwrap()
        })
    });
    group.finish();
}

fn bench_dimensions(c: &mut Criterion) {
    let mut group = c.benchmark_group("dimensions");
    group.sample_size(20);

    for dims in [1, 2, 3] {
        let sample = generate_design_data(500, dims, 42);
        let h = BandwidthMatrix::isotropic(0.02, dims).unwrap();

        group.bench_with_input(BenchmarkId::new("local_linear", dims), &dims, |b, _| {
            b.iter(|| {
                LocalLinearRegression::new()
                    .bandwidth(h.clone())
                    .build()
                    .unwrap()
                    .fit(black_box(&sample))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_cross_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross_validation");
    group.sample_size(20);

    let (x, y) = generate_sine_data(1_000, 42);
    let grid = [0.05, 0.1, 0.2, 0.5, 1.0];

    for k in [5, 10] {
        group.bench_with_input(BenchmarkId::new("kfold", k), &k, |b, &k| {
            b.iter(|| {
                KernelRegression::new()
                    .cross_validate(KFold(k, &grid).seed(42))
                    .build()
                    .unwrap()
                    .fit(black_box(&x), black_box(&y))
                    .unwrap()
            })
        });
    }

    let (x_small, y_small) = generate_sine_data(200, 42);
    group.bench_function("loocv", |b| {
        b.iter(|| {
            KernelRegression::new()
                .cross_validate(LOOCV(&grid))
                .build()
                .unwrap()
                .fit(black_box(&x_small), black_box(&y_small))
                .unwrap()
        })
    });

    let sample = generate_design_data(300, 2, 42);
    let matrices: Vec<BandwidthMatrix<f64>> = [0.01, 0.03, 0.1]
        .iter()
        .map(|&h| BandwidthMatrix::isotropic(h, 2).unwrap())
        .collect();
    group.bench_function("local_linear_kfold", |b| {
        b.iter(|| {
            LocalLinearRegression::new()
                .cross_validate(KFold(5, &matrices).seed(42))
                .build()
                .unwrap()
                .fit(black_box(&sample))
                .unwrap()
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_bandwidth,
    bench_residual_mode,
    bench_dimensions,
    bench_cross_validation,
);

criterion_main!(benches);
