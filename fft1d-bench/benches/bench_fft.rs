use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fft1d::{Executor, ExecutorConfig, Plan};
use rustfft::num_complex::Complex;
use rustfft::FftPlanner as RustFftPlanner;

fn signal(n: usize) -> Vec<f64> {
    (0..2 * n)
        .map(|i| ((i * 37) % 101) as f64 / 101.0 - 0.5)
        .collect()
}

fn bench_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward");
    // power of two, smooth composite, large prime residual
    let sizes = [64usize, 1024, 4096, 65536, 60, 1000, 3600, 997, 10007];
    let exec = Executor::sequential();
    let mut rust_planner = RustFftPlanner::<f64>::new();
    for &n in &sizes {
        let plan = Plan::with_executor(n, exec.clone()).unwrap();
        let input = signal(n);
        let mut scratch = vec![0.0; plan.scratch_len()];
        group.bench_with_input(BenchmarkId::new("fft1d", n), &n, |b, _| {
            let mut data = input.clone();
            b.iter(|| {
                data.copy_from_slice(&input);
                plan.forward_with_scratch(black_box(&mut data), 0, &mut scratch)
                    .unwrap();
            });
        });

        let fft = rust_planner.plan_fft_forward(n);
        let complex: Vec<Complex<f64>> = input
            .chunks_exact(2)
            .map(|c| Complex::new(c[0], c[1]))
            .collect();
        group.bench_with_input(BenchmarkId::new("rustfft", n), &n, |b, _| {
            let mut data = complex.clone();
            b.iter(|| {
                data.copy_from_slice(&complex);
                fft.process(black_box(&mut data));
            });
        });
    }
    group.finish();
}

fn bench_threads(c: &mut Criterion) {
    let mut group = c.benchmark_group("threads");
    let n = 1 << 18;
    let input = signal(n);
    for threads in [1usize, 2, 4] {
        let exec = Executor::new(ExecutorConfig::default().with_threads(threads));
        let plan = Plan::with_executor(n, exec).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, _| {
            let mut data = input.clone();
            b.iter(|| {
                data.copy_from_slice(&input);
                plan.forward(black_box(&mut data), 0).unwrap();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sizes, bench_threads);
criterion_main!(benches);
