use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fft1d::{Algorithm, Executor, Plan};

struct CountingAlloc;

static ALLOC: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            ALLOC.fetch_add(1, Ordering::Relaxed);
        }
        ptr
    }
    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn reset_alloc() {
    ALLOC.store(0, Ordering::Relaxed);
}
fn allocs() -> usize {
    ALLOC.load(Ordering::Relaxed)
}

fn bench_bluestein(c: &mut Criterion) {
    let mut group = c.benchmark_group("bluestein_scratch");
    let sizes = [211usize, 223, 422, 997, 1999, 4099];
    for &size in &sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &n| {
            let plan = Plan::with_executor(n, Executor::sequential()).unwrap();
            assert_eq!(plan.algorithm(), Algorithm::Bluestein);
            let input: Vec<f64> = (0..2 * n).map(|i| (i as f64 * 0.1).sin()).collect();
            let mut scratch = vec![0.0; plan.scratch_len()];
            b.iter_custom(|iters| {
                let mut data = input.clone();
                reset_alloc();
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    data.copy_from_slice(&input);
                    let start = Instant::now();
                    plan.forward_with_scratch(&mut data, 0, &mut scratch).unwrap();
                    total += start.elapsed();
                    assert_eq!(allocs(), 0);
                }
                total
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bluestein);
criterion_main!(benches);
