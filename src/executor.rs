//! Worker pool and fan-out/join for large transforms.
//!
//! An [`Executor`] owns a fixed-size rayon pool, created on first use and
//! shared by every plan holding a clone of the executor. A transform call
//! partitions its work into disjoint contiguous ranges, hands one task per
//! range to the pool and blocks until all of them have finished. Anything
//! that runs after the join (bit reversal, the next convolution step) runs on
//! the calling thread, so the arithmetic does not depend on the worker count.

use core::fmt;
use core::ops::Range;
use std::sync::{Arc, OnceLock};

use log::{debug, trace, warn};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::fft::FftError;

/// Default size above which two workers are used.
pub const TWO_THREAD_THRESHOLD: usize = 8192;
/// Default size above which four workers are used.
pub const FOUR_THREAD_THRESHOLD: usize = 65536;

/// Pool size and the size thresholds that decide how many workers a call uses.
///
/// The split-radix path compares its length in doubles against the
/// thresholds, the Bluestein pointwise phases compare the complex length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutorConfig {
    pub threads: usize,
    pub two_thread_threshold: usize,
    pub four_thread_threshold: usize,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            threads: num_cpus::get().max(1),
            two_thread_threshold: TWO_THREAD_THRESHOLD,
            four_thread_threshold: FOUR_THREAD_THRESHOLD,
        }
    }
}

impl ExecutorConfig {
    /// Single-threaded configuration; never creates a pool.
    pub fn sequential() -> Self {
        Self {
            threads: 1,
            ..Self::default()
        }
    }

    /// Defaults overridden by `FFT1D_THREADS`, `FFT1D_TWO_THREAD_THRESHOLD`
    /// and `FFT1D_FOUR_THREAD_THRESHOLD`. Unparsable values are ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let threads = std::env::var("FFT1D_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&t| t > 0)
            .unwrap_or(defaults.threads);
        let two_thread_threshold = std::env::var("FFT1D_TWO_THREAD_THRESHOLD")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(defaults.two_thread_threshold);
        let four_thread_threshold = std::env::var("FFT1D_FOUR_THREAD_THRESHOLD")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(defaults.four_thread_threshold);
        Self {
            threads,
            two_thread_threshold,
            four_thread_threshold,
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    pub fn with_thresholds(mut self, two_threads: usize, four_threads: usize) -> Self {
        self.two_thread_threshold = two_threads;
        self.four_thread_threshold = four_threads;
        self
    }

    /// Number of workers (1, 2 or 4) for a unit of work of the given size.
    pub fn workers_for(&self, size: usize) -> usize {
        if self.threads > 1 && size > self.two_thread_threshold {
            if self.threads >= 4 && size > self.four_thread_threshold {
                4
            } else {
                2
            }
        } else {
            1
        }
    }
}

struct Inner {
    config: ExecutorConfig,
    pool: OnceLock<Option<ThreadPool>>,
}

/// Handle to a worker pool. Cloning is cheap and shares the pool.
#[derive(Clone)]
pub struct Executor {
    inner: Arc<Inner>,
}

impl fmt::Debug for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Executor")
            .field("config", &self.inner.config)
            .field("pool_started", &self.inner.pool.get().is_some())
            .finish()
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(ExecutorConfig::default())
    }
}

impl Executor {
    pub fn new(config: ExecutorConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                pool: OnceLock::new(),
            }),
        }
    }

    pub fn sequential() -> Self {
        Self::new(ExecutorConfig::sequential())
    }

    /// Process-wide default executor configured from the environment.
    pub fn shared() -> &'static Executor {
        static SHARED: OnceLock<Executor> = OnceLock::new();
        SHARED.get_or_init(|| Executor::new(ExecutorConfig::from_env()))
    }

    /// Executor whose pool can never be created. Every parallel dispatch fails.
    #[cfg(any(test, feature = "internal-tests"))]
    #[doc(hidden)]
    pub fn __test_unavailable(config: ExecutorConfig) -> Self {
        let pool = OnceLock::new();
        let _ = pool.set(None);
        Self {
            inner: Arc::new(Inner { config, pool }),
        }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.inner.config
    }

    pub fn workers_for(&self, size: usize) -> usize {
        self.inner.config.workers_for(size)
    }

    fn pool(&self) -> Result<&ThreadPool, FftError> {
        let threads = self.inner.config.threads;
        self.inner
            .pool
            .get_or_init(|| {
                match ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("fft1d-worker-{i}"))
                    .build()
                {
                    Ok(pool) => {
                        debug!("started worker pool with {threads} threads");
                        Some(pool)
                    }
                    Err(err) => {
                        warn!("could not start worker pool with {threads} threads: {err}");
                        None
                    }
                }
            })
            .as_ref()
            .ok_or(FftError::ResourceExhausted { threads })
    }

    /// Create the pool now if the configuration allows more than one thread.
    pub fn ready(&self) -> Result<(), FftError> {
        if self.inner.config.threads > 1 {
            self.pool()?;
        }
        Ok(())
    }

    /// Run `task(index, item)` for every item and return once all have finished.
    ///
    /// A single item runs on the calling thread. Several items go to the pool,
    /// one task each; failure to obtain the pool is reported, never replaced
    /// by a sequential run.
    pub fn join<T, F>(&self, items: Vec<T>, task: F) -> Result<(), FftError>
    where
        T: Send,
        F: Fn(usize, T) + Sync,
    {
        if items.len() <= 1 {
            for (i, item) in items.into_iter().enumerate() {
                task(i, item);
            }
            return Ok(());
        }
        let pool = self.pool()?;
        let count = items.len();
        trace!("dispatching {count} tasks");
        pool.scope(|s| {
            let task = &task;
            for (i, item) in items.into_iter().enumerate() {
                s.spawn(move |_| task(i, item));
            }
        });
        trace!("joined {count} tasks");
        Ok(())
    }
}

/// Split `0..len` into `parts` contiguous ranges of equal size, the last one
/// absorbing the remainder.
pub fn partition(len: usize, parts: usize) -> Vec<Range<usize>> {
    let parts = parts.max(1);
    let k = len / parts;
    (0..parts)
        .map(|i| {
            let start = i * k;
            let end = if i == parts - 1 { len } else { start + k };
            start..end
        })
        .collect()
}

/// Cut `data` into the given contiguous, ascending ranges, each scaled by
/// `stride` elements.
pub fn split_ranges<'a, T>(
    mut data: &'a mut [T],
    ranges: &[Range<usize>],
    stride: usize,
) -> Vec<&'a mut [T]> {
    let mut out = Vec::with_capacity(ranges.len());
    let mut consumed = 0;
    for r in ranges {
        debug_assert_eq!(r.start, consumed);
        let (head, tail) = data.split_at_mut((r.end - r.start) * stride);
        out.push(head);
        data = tail;
        consumed = r.end;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn partition_last_range_takes_remainder() {
        assert_eq!(partition(10, 4), vec![0..2, 2..4, 4..6, 6..10]);
        assert_eq!(partition(8, 2), vec![0..4, 4..8]);
        assert_eq!(partition(3, 1), vec![0..3]);
    }

    #[test]
    fn split_ranges_are_disjoint() {
        let mut data: Vec<u32> = (0..20).collect();
        let ranges = partition(10, 3);
        let parts = split_ranges(&mut data, &ranges, 2);
        let lens: Vec<usize> = parts.iter().map(|p| p.len()).collect();
        assert_eq!(lens, vec![6, 6, 8]);
        assert_eq!(parts[2][0], 12);
    }

    #[test]
    fn worker_tiers() {
        let cfg = ExecutorConfig::default()
            .with_threads(8)
            .with_thresholds(100, 1000);
        assert_eq!(cfg.workers_for(100), 1);
        assert_eq!(cfg.workers_for(101), 2);
        assert_eq!(cfg.workers_for(1000), 2);
        assert_eq!(cfg.workers_for(1001), 4);
        let two = cfg.with_threads(3);
        assert_eq!(two.workers_for(5000), 2);
        let one = cfg.with_threads(1);
        assert_eq!(one.workers_for(usize::MAX), 1);
    }

    #[test]
    fn default_thresholds() {
        let cfg = ExecutorConfig::default();
        assert_eq!(cfg.two_thread_threshold, 8192);
        assert_eq!(cfg.four_thread_threshold, 65536);
        assert!(cfg.threads >= 1);
    }

    #[test]
    fn join_runs_every_item() {
        let exec = Executor::new(ExecutorConfig::default().with_threads(4));
        let hits = AtomicUsize::new(0);
        let mut data = vec![0usize; 16];
        let chunks: Vec<&mut [usize]> = data.chunks_mut(4).collect();
        exec.join(chunks, |i, chunk| {
            for v in chunk.iter_mut() {
                *v = i;
            }
            hits.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();
        assert_eq!(hits.load(Ordering::Relaxed), 4);
        assert_eq!(&data[12..], &[3, 3, 3, 3]);
    }

    #[test]
    fn unavailable_pool_reports_resource_error() {
        let exec = Executor::__test_unavailable(ExecutorConfig::default().with_threads(2));
        let err = exec.join(vec![1, 2], |_, _| {}).unwrap_err();
        assert_eq!(err, FftError::ResourceExhausted { threads: 2 });
        // a single task never needs the pool
        assert!(exec.join(vec![1], |_, _| {}).is_ok());
    }
}
