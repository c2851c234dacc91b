//! Transform plans and the public entry points.
//!
//! A [`Plan`] fixes the transform length, picks one of three algorithms and
//! owns every table that algorithm needs. Plans are immutable after
//! construction and can be shared between threads; a [`FftPlanner`] caches
//! them by length.
//!
//! Buffers are interleaved `[re0, im0, re1, im1, ...]` doubles and are
//! transformed in place starting at a caller-chosen offset. The forward
//! transform uses `exp(-2*pi*i*j*k/n)`, the inverse `exp(+2*pi*i*j*k/n)`
//! without normalization; [`Plan::inverse_scaled`] divides by `n`.

use core::fmt;
use std::sync::Arc;

use hashbrown::HashMap;
use log::debug;

use crate::bluestein::Bluestein;
use crate::executor::Executor;
use crate::mixed_radix::{residual, MixedRadix};
use crate::num::{as_interleaved_mut, Complex64};
use crate::split_radix::SplitRadix;

/// Lengths whose residual after removing factors 2, 3 and 5 reaches this
/// value use Bluestein instead of mixed radix.
pub const BLUESTEIN_RESIDUAL: usize = 211;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    /// Sign of the exponent: `-1.0` forward, `+1.0` inverse.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    SplitRadix,
    MixedRadix,
    Bluestein,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// Transform length of zero.
    InvalidLength,
    /// Sample or scratch buffer shorter than required, in doubles.
    BufferTooSmall { required: usize, available: usize },
    /// The worker pool could not be created.
    ResourceExhausted { threads: usize },
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::InvalidLength => write!(f, "transform length must be at least 1"),
            FftError::BufferTooSmall {
                required,
                available,
            } => write!(
                f,
                "buffer too small: need {required} doubles, {available} available"
            ),
            FftError::ResourceExhausted { threads } => {
                write!(f, "could not obtain a worker pool of {threads} threads")
            }
        }
    }
}

impl std::error::Error for FftError {}

/// Algorithm a plan of length `n` uses.
pub fn select_algorithm(n: usize) -> Result<Algorithm, FftError> {
    if n == 0 {
        Err(FftError::InvalidLength)
    } else if n.is_power_of_two() {
        Ok(Algorithm::SplitRadix)
    } else if residual(n) >= BLUESTEIN_RESIDUAL {
        Ok(Algorithm::Bluestein)
    } else {
        Ok(Algorithm::MixedRadix)
    }
}

#[derive(Debug, Clone)]
enum Kernel {
    SplitRadix(SplitRadix),
    MixedRadix(MixedRadix),
    Bluestein(Bluestein),
}

/// Precomputed transform of a fixed length.
#[derive(Debug, Clone)]
pub struct Plan {
    n: usize,
    kernel: Kernel,
    executor: Executor,
}

impl Plan {
    /// Plan bound to the process-wide [`Executor::shared`].
    pub fn new(n: usize) -> Result<Self, FftError> {
        Self::with_executor(n, Executor::shared().clone())
    }

    pub fn with_executor(n: usize, executor: Executor) -> Result<Self, FftError> {
        let kernel = match select_algorithm(n)? {
            Algorithm::SplitRadix => Kernel::SplitRadix(SplitRadix::new(n)),
            Algorithm::MixedRadix => Kernel::MixedRadix(MixedRadix::new(n)),
            Algorithm::Bluestein => Kernel::Bluestein(Bluestein::new(n)?),
        };
        let plan = Self {
            n,
            kernel,
            executor,
        };
        match &plan.kernel {
            Kernel::SplitRadix(_) => debug!("plan n={n}: split radix"),
            Kernel::MixedRadix(p) => debug!("plan n={n}: mixed radix, factors {:?}", p.factors()),
            Kernel::Bluestein(p) => debug!("plan n={n}: bluestein, padded to {}", p.padded_len()),
        }
        Ok(plan)
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn algorithm(&self) -> Algorithm {
        match self.kernel {
            Kernel::SplitRadix(_) => Algorithm::SplitRadix,
            Kernel::MixedRadix(_) => Algorithm::MixedRadix,
            Kernel::Bluestein(_) => Algorithm::Bluestein,
        }
    }

    /// Factors in pass order, for mixed-radix plans.
    pub fn factors(&self) -> Option<&[usize]> {
        match &self.kernel {
            Kernel::MixedRadix(p) => Some(p.factors()),
            _ => None,
        }
    }

    /// Convolution length, for Bluestein plans.
    pub fn padded_len(&self) -> Option<usize> {
        match &self.kernel {
            Kernel::Bluestein(p) => Some(p.padded_len()),
            _ => None,
        }
    }

    /// Doubles of scratch a transform call needs.
    pub fn scratch_len(&self) -> usize {
        match &self.kernel {
            Kernel::SplitRadix(_) => 0,
            Kernel::MixedRadix(p) => p.scratch_len(),
            Kernel::Bluestein(p) => p.scratch_len(),
        }
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Forward transform of `2n` doubles starting at `offset`.
    pub fn forward(&self, buf: &mut [f64], offset: usize) -> Result<(), FftError> {
        self.run(buf, offset, None, Direction::Forward)
    }

    /// Unnormalized inverse transform of `2n` doubles starting at `offset`.
    pub fn inverse(&self, buf: &mut [f64], offset: usize) -> Result<(), FftError> {
        self.run(buf, offset, None, Direction::Inverse)
    }

    /// Inverse transform divided by `n`, the exact inverse of [`forward`](Self::forward).
    pub fn inverse_scaled(&self, buf: &mut [f64], offset: usize) -> Result<(), FftError> {
        self.run(buf, offset, None, Direction::Inverse)?;
        let scale = 1.0 / self.n as f64;
        for v in &mut buf[offset..offset + 2 * self.n] {
            *v *= scale;
        }
        Ok(())
    }

    /// Forward transform using caller-owned scratch of at least
    /// [`scratch_len`](Self::scratch_len) doubles. Does not allocate.
    pub fn forward_with_scratch(
        &self,
        buf: &mut [f64],
        offset: usize,
        scratch: &mut [f64],
    ) -> Result<(), FftError> {
        self.run(buf, offset, Some(scratch), Direction::Forward)
    }

    pub fn inverse_with_scratch(
        &self,
        buf: &mut [f64],
        offset: usize,
        scratch: &mut [f64],
    ) -> Result<(), FftError> {
        self.run(buf, offset, Some(scratch), Direction::Inverse)
    }

    /// Forward transform of the first `n` values of a complex slice.
    pub fn forward_complex(&self, data: &mut [Complex64]) -> Result<(), FftError> {
        self.forward(as_interleaved_mut(data), 0)
    }

    pub fn inverse_complex(&self, data: &mut [Complex64]) -> Result<(), FftError> {
        self.inverse(as_interleaved_mut(data), 0)
    }

    fn run(
        &self,
        buf: &mut [f64],
        offset: usize,
        scratch: Option<&mut [f64]>,
        dir: Direction,
    ) -> Result<(), FftError> {
        let required = 2 * self.n;
        let available = buf.len().saturating_sub(offset);
        if available < required {
            return Err(FftError::BufferTooSmall {
                required,
                available,
            });
        }
        if let Some(s) = scratch.as_deref() {
            if s.len() < self.scratch_len() {
                return Err(FftError::BufferTooSmall {
                    required: self.scratch_len(),
                    available: s.len(),
                });
            }
        }
        if self.n == 1 {
            return Ok(());
        }
        // pool failures surface before the buffer is touched
        if self.dispatches() {
            self.executor.ready()?;
        }

        let a = &mut buf[offset..offset + required];
        match (&self.kernel, scratch) {
            (Kernel::SplitRadix(p), _) => p.transform(a, dir, &self.executor),
            (Kernel::MixedRadix(p), Some(s)) => {
                p.transform(a, s, dir);
                Ok(())
            }
            (Kernel::MixedRadix(p), None) => {
                let mut s = vec![0.0; p.scratch_len()];
                p.transform(a, &mut s, dir);
                Ok(())
            }
            (Kernel::Bluestein(p), Some(s)) => p.transform(a, s, dir, &self.executor),
            (Kernel::Bluestein(p), None) => {
                let mut s = vec![0.0; p.scratch_len()];
                p.transform(a, &mut s, dir, &self.executor)
            }
        }
    }

    /// Whether a transform call will hand work to the pool.
    fn dispatches(&self) -> bool {
        let exec = &self.executor;
        let split = |nd: usize| nd > 512 && exec.workers_for(nd) > 1;
        match &self.kernel {
            Kernel::SplitRadix(_) => split(2 * self.n),
            Kernel::MixedRadix(_) => false,
            Kernel::Bluestein(p) => exec.workers_for(self.n) > 1 || split(2 * p.padded_len()),
        }
    }
}

/// Build a plan bound to the shared executor.
pub fn build_plan(n: usize) -> Result<Plan, FftError> {
    Plan::new(n)
}

pub fn forward(plan: &Plan, buf: &mut [f64], offset: usize) -> Result<(), FftError> {
    plan.forward(buf, offset)
}

pub fn inverse(plan: &Plan, buf: &mut [f64], offset: usize) -> Result<(), FftError> {
    plan.inverse(buf, offset)
}

/// Cache of plans keyed by length, all bound to one executor.
#[derive(Debug)]
pub struct FftPlanner {
    executor: Executor,
    cache: HashMap<usize, Arc<Plan>>,
}

impl Default for FftPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl FftPlanner {
    pub fn new() -> Self {
        Self::with_executor(Executor::shared().clone())
    }

    pub fn with_executor(executor: Executor) -> Self {
        Self {
            executor,
            cache: HashMap::new(),
        }
    }

    /// Plan for `n`, built on first request and shared afterwards.
    pub fn plan(&mut self, n: usize) -> Result<Arc<Plan>, FftError> {
        if let Some(plan) = self.cache.get(&n) {
            return Ok(Arc::clone(plan));
        }
        let plan = Arc::new(Plan::with_executor(n, self.executor.clone())?);
        self.cache.insert(n, Arc::clone(&plan));
        Ok(plan)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
