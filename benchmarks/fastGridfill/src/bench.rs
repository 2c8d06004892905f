//! Grid filling benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of the relaxation fill (64x64 to 512x256 cells)
//! - Hole patterns (scattered cells, large gaps, polar caps)
//! - LOESS half windows
//!
//! For sequential execution, use `FASTGRIDFILL_THREADS=1 cargo bench`.
//! Any other value sets the worker count; unset or 0 uses every core.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastGridfill::prelude::*;
use ndarray::{Array2, s};
use rand::prelude::*;
use rand_distr::Normal;
use std::env;
use std::f64::consts::PI;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (usize, String) {
    let num_threads = env::var("FASTGRIDFILL_THREADS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(0);
    let mode_name = match num_threads {
        0 => "all_cores".to_string(),
        1 => "serial".to_string(),
        n => format!("{n}_threads"),
    };
    (num_threads, mode_name)
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a smooth global field (longitude x latitude) with Gaussian noise.
fn generate_field(nx: usize, ny: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.05).unwrap();

    Array2::from_shape_fn((nx, ny), |(ix, iy)| {
        let lon = 2.0 * PI * ix as f64 / nx as f64;
        let lat = PI * (iy as f64 / (ny - 1) as f64 - 0.5);
        lat.cos() * (3.0 * lon).sin() + 0.5 * (2.0 * lat).sin() + noise_dist.sample(&mut rng)
    })
}

/// Remove a random fraction of the cells.
fn scatter_holes(field: &mut Array2<f64>, fraction: f64, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    field.mapv_inplace(|value| if rng.random_bool(fraction) { f64::NAN } else { value });
}

/// Generate a field with 20% scattered holes.
fn generate_scattered(nx: usize, ny: usize, seed: u64) -> Array2<f64> {
    let mut field = generate_field(nx, ny, seed);
    scatter_holes(&mut field, 0.2, seed + 1);
    field
}

/// Generate a field with one large rectangular gap.
fn generate_gap(nx: usize, ny: usize, seed: u64) -> Array2<f64> {
    let mut field = generate_field(nx, ny, seed);
    field
        .slice_mut(s![nx / 4..nx / 2, ny / 3..2 * ny / 3])
        .fill(f64::NAN);
    field
}

/// Generate a field whose polar caps are missing.
fn generate_polar_caps(nx: usize, ny: usize, seed: u64) -> Array2<f64> {
    let mut field = generate_field(nx, ny, seed);
    let cap = ny / 8;
    field.slice_mut(s![.., ..cap]).fill(f64::NAN);
    field.slice_mut(s![.., ny - cap..]).fill(f64::NAN);
    field
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let (num_threads, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{}", mode_name));
    group.sample_size(20);

    for (nx, ny) in [(64, 64), (128, 96), (256, 128), (512, 256)] {
        group.throughput(Throughput::Elements((nx * ny) as u64));

        let field = generate_scattered(nx, ny, 42);
        let fill = Fill::<f64>::new()
            .first_guess(ZonalAverage)
            .circular(true)
            .max_iterations(200)
            .epsilon(1e-6)
            .num_threads(num_threads)
            .adapter(GaussSeidel)
            .build()
            .unwrap();

        group.bench_with_input(
            BenchmarkId::new("gauss_seidel", format!("{nx}x{ny}")),
            &field,
            |b, field| {
                b.iter(|| {
                    let mut grid = field.clone();
                    fill.fill(black_box(&mut grid)).unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_patterns(c: &mut Criterion) {
    let (num_threads, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("patterns_{}", mode_name));
    group.sample_size(20);

    let (nx, ny) = (256, 128);
    let fill = Fill::<f64>::new()
        .first_guess(ZonalAverage)
        .circular(true)
        .max_iterations(500)
        .epsilon(1e-4)
        .num_threads(num_threads)
        .adapter(GaussSeidel)
        .build()
        .unwrap();

    let cases = [
        ("scattered", generate_scattered(nx, ny, 42)),
        ("large_gap", generate_gap(nx, ny, 42)),
        ("polar_caps", generate_polar_caps(nx, ny, 42)),
    ];
    for (name, field) in &cases {
        group.bench_function(*name, |b| {
            b.iter(|| {
                let mut grid = field.clone();
                fill.fill(black_box(&mut grid)).unwrap()
            })
        });
    }
    group.finish();
}

fn bench_first_guess(c: &mut Criterion) {
    let (num_threads, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("first_guess_{}", mode_name));
    group.sample_size(20);

    let field = generate_gap(192, 96, 7);
    for first_guess in [Zero, ZonalAverage] {
        let fill = Fill::<f64>::new()
            .first_guess(first_guess)
            .max_iterations(1000)
            .epsilon(1e-5)
            .num_threads(num_threads)
            .adapter(GaussSeidel)
            .build()
            .unwrap();

        group.bench_with_input(
            BenchmarkId::new("gauss_seidel", first_guess),
            &field,
            |b, field| {
                b.iter(|| {
                    let mut grid = field.clone();
                    fill.fill(black_box(&mut grid)).unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_loess_window(c: &mut Criterion) {
    let (num_threads, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("loess_window_{}", mode_name));
    group.sample_size(20);

    let (nx, ny) = (180, 90);
    let values = generate_scattered(nx, ny, 42);
    let lon = RegularAxis::new(0.0, 2.0, nx).unwrap().circular(true);
    let lat = RegularAxis::new(-89.0, 2.0, ny).unwrap();
    let grid = Grid2D::new(lon, lat, &values).unwrap();

    for half_window in [1, 3, 5, 8] {
        let fill = Fill::<f64>::new()
            .half_window(half_window, half_window)
            .num_threads(num_threads)
            .adapter(Loess)
            .build()
            .unwrap();

        group.bench_with_input(
            BenchmarkId::new("loess", half_window),
            &half_window,
            |b, _| b.iter(|| fill.fill(black_box(&grid)).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_patterns,
    bench_first_guess,
    bench_loess_window,
);

criterion_main!(benches);
