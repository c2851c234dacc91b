//! Chirp-z (Bluestein) transform for lengths with a large prime residual.
//!
//! A length-`n` DFT is rewritten as a circular convolution of length
//! `nb = next_pow2(2n - 1)`: multiply by the conjugate chirp, convolve with
//! the chirp through two power-of-two transforms, multiply by the conjugate
//! chirp again. The chirp and the spectrum of the convolution kernel are
//! computed once per plan.

use log::trace;

use crate::executor::{partition, split_ranges, Executor};
use crate::fft::{Direction, FftError};
use crate::split_radix::SplitRadix;
use crate::twiddle::chirp;

#[derive(Debug, Clone)]
pub struct Bluestein {
    n: usize,
    padded: usize,
    chirp: Vec<f64>,
    kernel: Vec<f64>,
    sub: SplitRadix,
}

impl Bluestein {
    pub fn new(n: usize) -> Result<Self, FftError> {
        let padded = (2 * n - 1).next_power_of_two();
        let sub = SplitRadix::new(padded);
        let chirp = chirp(n);

        let scale = 1.0 / padded as f64;
        let mut kernel = vec![0.0; 2 * padded];
        kernel[0] = chirp[0] * scale;
        kernel[1] = chirp[1] * scale;
        for i in 1..n {
            let re = chirp[2 * i] * scale;
            let im = chirp[2 * i + 1] * scale;
            kernel[2 * i] = re;
            kernel[2 * i + 1] = im;
            kernel[2 * (padded - i)] = re;
            kernel[2 * (padded - i) + 1] = im;
        }
        sub.transform(&mut kernel, Direction::Forward, &Executor::sequential())?;

        Ok(Self {
            n,
            padded,
            chirp,
            kernel,
            sub,
        })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    /// Power-of-two length of the convolution.
    pub fn padded_len(&self) -> usize {
        self.padded
    }

    pub fn scratch_len(&self) -> usize {
        2 * self.padded
    }

    /// Transform `a` (exactly `2n` doubles) in place. The `1/nb` factor of
    /// the convolution is folded into the kernel, so the result is the
    /// unnormalized DFT.
    pub fn transform(
        &self,
        a: &mut [f64],
        scratch: &mut [f64],
        dir: Direction,
        exec: &Executor,
    ) -> Result<(), FftError> {
        let n = self.n;
        debug_assert_eq!(a.len(), 2 * n);
        let ak = &mut scratch[..2 * self.padded];
        ak[2 * n..].fill(0.0);
        let workers = exec.workers_for(n);
        trace!("bluestein n={n} padded={}: {workers} workers", self.padded);

        let bk1 = &self.chirp;
        let bk2 = &self.kernel;
        let input: &[f64] = a;
        match dir {
            Direction::Forward => for_each_range(exec, workers, ak, n, |start, chunk| {
                for (c, out) in chunk.chunks_exact_mut(2).enumerate() {
                    let i = 2 * (start + c);
                    let (ar, ai) = (input[i], input[i + 1]);
                    let (br, bi) = (bk1[i], bk1[i + 1]);
                    out[0] = ar * br + ai * bi;
                    out[1] = -ar * bi + ai * br;
                }
            })?,
            Direction::Inverse => for_each_range(exec, workers, ak, n, |start, chunk| {
                for (c, out) in chunk.chunks_exact_mut(2).enumerate() {
                    let i = 2 * (start + c);
                    let (ar, ai) = (input[i], input[i + 1]);
                    let (br, bi) = (bk1[i], bk1[i + 1]);
                    out[0] = ar * br - ai * bi;
                    out[1] = ar * bi + ai * br;
                }
            })?,
        }

        self.sub.transform(ak, Direction::Forward, exec)?;

        let padded = self.padded;
        match dir {
            Direction::Forward => for_each_range(exec, workers, ak, padded, |start, chunk| {
                for (c, v) in chunk.chunks_exact_mut(2).enumerate() {
                    let i = 2 * (start + c);
                    let (br, bi) = (bk2[i], bk2[i + 1]);
                    let im = v[0] * bi + v[1] * br;
                    v[0] = v[0] * br - v[1] * bi;
                    v[1] = im;
                }
            })?,
            Direction::Inverse => for_each_range(exec, workers, ak, padded, |start, chunk| {
                for (c, v) in chunk.chunks_exact_mut(2).enumerate() {
                    let i = 2 * (start + c);
                    let (br, bi) = (bk2[i], bk2[i + 1]);
                    let im = -v[0] * bi + v[1] * br;
                    v[0] = v[0] * br + v[1] * bi;
                    v[1] = im;
                }
            })?,
        }

        self.sub.transform(ak, Direction::Inverse, exec)?;

        let conv: &[f64] = ak;
        match dir {
            Direction::Forward => for_each_range(exec, workers, a, n, |start, chunk| {
                for (c, out) in chunk.chunks_exact_mut(2).enumerate() {
                    let i = 2 * (start + c);
                    let (br, bi) = (bk1[i], bk1[i + 1]);
                    let (kr, ki) = (conv[i], conv[i + 1]);
                    out[0] = br * kr + bi * ki;
                    out[1] = -bi * kr + br * ki;
                }
            })?,
            Direction::Inverse => for_each_range(exec, workers, a, n, |start, chunk| {
                for (c, out) in chunk.chunks_exact_mut(2).enumerate() {
                    let i = 2 * (start + c);
                    let (br, bi) = (bk1[i], bk1[i + 1]);
                    let (kr, ki) = (conv[i], conv[i + 1]);
                    out[0] = br * kr - bi * ki;
                    out[1] = bi * kr + br * ki;
                }
            })?,
        }
        Ok(())
    }
}

/// Apply `f(first_index, chunk)` over the first `len` complex values of
/// `data`, split into `workers` contiguous chunks.
fn for_each_range<F>(
    exec: &Executor,
    workers: usize,
    data: &mut [f64],
    len: usize,
    f: F,
) -> Result<(), FftError>
where
    F: Fn(usize, &mut [f64]) + Sync,
{
    if workers <= 1 {
        f(0, &mut data[..2 * len]);
        return Ok(());
    }
    let ranges = partition(len, workers);
    let chunks = split_ranges(&mut data[..2 * len], &ranges, 2);
    let items: Vec<(usize, &mut [f64])> = ranges.iter().map(|r| r.start).zip(chunks).collect();
    exec.join(items, |_, (start, chunk)| f(start, chunk))
}
