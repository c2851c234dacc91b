//! # fft1d - one-dimensional complex DFT engine
//!
//! Computes the discrete Fourier transform of `n` complex samples for any
//! `n >= 1`, in place on an interleaved `[re, im, re, im, ...]` buffer of
//! doubles.
//!
//! ## Algorithms
//!
//! - **Split radix** for powers of two, with unrolled radix-8/16 leaves.
//! - **Mixed radix** for lengths whose residual after removing factors 2, 3
//!   and 5 is below 211 (radix 2/3/4/5 passes plus a general odd-prime pass).
//! - **Bluestein** (chirp-z) for everything else, via a padded power-of-two
//!   convolution.
//!
//! The choice is made once when a [`Plan`] is built; every table the plan
//! needs is computed at that point and never changes afterwards.
//!
//! ## Threads
//!
//! Large split-radix transforms and the Bluestein pointwise phases are split
//! over 2 or 4 workers of an [`Executor`] pool. The split never changes the
//! arithmetic, so results are bit-identical for any worker count. Sizes and
//! pool width are set through [`ExecutorConfig`] or the `FFT1D_THREADS`,
//! `FFT1D_TWO_THREAD_THRESHOLD` and `FFT1D_FOUR_THREAD_THRESHOLD`
//! environment variables.
//!
//! ## Example
//!
//! ```
//! use fft1d::{build_plan, Algorithm};
//!
//! let plan = build_plan(12).unwrap();
//! assert_eq!(plan.algorithm(), Algorithm::MixedRadix);
//!
//! let mut buf = vec![0.0; 24];
//! buf[0] = 1.0;
//! plan.forward(&mut buf, 0).unwrap();
//! assert!(buf.chunks(2).all(|c| (c[0] - 1.0).abs() < 1e-12 && c[1].abs() < 1e-12));
//!
//! plan.inverse_scaled(&mut buf, 0).unwrap();
//! assert!((buf[0] - 1.0).abs() < 1e-12);
//! ```

/// Plans, errors and the public transform entry points.
pub mod fft;
/// `Complex64` and interleaved buffer helpers.
pub mod num;

/// Twiddle tables and the Bluestein chirp.
pub mod twiddle;

pub mod bitrev;

/// Unrolled split-radix kernels.
pub mod fft_kernels;
/// Butterfly passes for the mixed-radix driver.
pub mod radix;

pub mod split_radix;
pub mod mixed_radix;
/// Chirp-z transform for lengths with large prime factors.
pub mod bluestein;

/// Worker pool configuration and fan-out/join.
pub mod executor;

pub use executor::{Executor, ExecutorConfig};
pub use fft::{
    build_plan, forward, inverse, select_algorithm, Algorithm, Direction, FftError, FftPlanner,
    Plan,
};
pub use num::Complex64;
