use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linalg_lib::{matrix::Matrix, vector::Vector};
use rand::{thread_rng, Rng};
use std::time::Duration;

fn random_matrix(nrows: usize, ncols: usize) -> Matrix<f64> {
    let mut rng = thread_rng();
    let data = (0..nrows * ncols).map(|_| rng.gen_range(-1.0..1.0)).collect();
    Matrix::new(data, nrows, ncols).expect("consistent dimensions")
}

fn random_vector(len: usize) -> Vector<f64> {
    let mut rng = thread_rng();
    Vector::new((0..len).map(|_| rng.gen_range(-1.0..1.0)).collect())
}

fn run_matmul_bench(c: &mut Criterion) {
    let left = random_matrix(64, 64);
    let right = random_matrix(64, 64);
    c.bench_function("64x64 matrix product", |b| {
        b.iter(|| (black_box(&left) * black_box(&right)))
    });
}

fn run_dot_bench(c: &mut Criterion) {
    let left = random_vector(1024);
    let right = random_vector(1024);
    c.bench_function("1024 element dot product", |b| {
        b.iter(|| black_box(&left).dot(black_box(&right)))
    });
}

criterion_group!(
    name = linalg_benches;
    config = Criterion::default().significance_level(0.1).sample_size(10).measurement_time(Duration::from_secs(2));
    targets = run_matmul_bench, run_dot_bench
);

criterion_main!(linalg_benches);
