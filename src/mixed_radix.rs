//! Mixed-radix transform for lengths whose prime factors are small.
//!
//! The length is factored into 4s, 2s, 3s, 5s and then successive odd trial
//! divisors. Each factor is one pass; passes ping-pong between the caller's
//! buffer and a scratch buffer of the same size, and the result is copied
//! back when it ends up in scratch.

use crate::fft::Direction;
use crate::radix::{Landing, Radix};
use crate::twiddle::StageTwiddles;

const TRIAL_FACTORS: [usize; 4] = [4, 2, 3, 5];

/// Factor `n` in pass order.
///
/// Trial divisors are 4, 2, 3, 5, then 7, 9, 11, ... Each divisor is taken as
/// often as it divides. A factor 2 found after other factors is moved to the
/// front. Returns an empty list for `n <= 1`.
pub fn factorize(n: usize) -> Vec<usize> {
    let mut factors = Vec::new();
    if n <= 1 {
        return factors;
    }
    let mut rest = n;
    let mut trial = 0;
    let mut ntry = 0;
    while rest != 1 {
        ntry = match TRIAL_FACTORS.get(trial) {
            Some(&f) => f,
            None => ntry + 2,
        };
        trial += 1;
        while rest % ntry == 0 {
            rest /= ntry;
            if ntry == 2 && !factors.is_empty() {
                factors.insert(0, 2);
            } else {
                factors.push(ntry);
            }
        }
    }
    factors
}

/// Strip every factor of 4, 2, 3 and 5 from `n` and return what remains.
pub fn residual(n: usize) -> usize {
    let mut rest = n;
    if rest == 0 {
        return 0;
    }
    for f in TRIAL_FACTORS {
        while rest % f == 0 {
            rest /= f;
        }
    }
    rest
}

#[derive(Debug, Clone)]
pub struct MixedRadix {
    n: usize,
    factors: Vec<usize>,
    twiddles: StageTwiddles,
}

impl MixedRadix {
    pub fn new(n: usize) -> Self {
        let factors = factorize(n);
        let twiddles = StageTwiddles::new(n, &factors);
        Self {
            n,
            factors,
            twiddles,
        }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn factors(&self) -> &[usize] {
        &self.factors
    }

    /// Doubles of scratch needed by [`transform`](Self::transform).
    pub fn scratch_len(&self) -> usize {
        2 * self.n
    }

    /// Transform `a` (exactly `2n` doubles) in place.
    pub fn transform(&self, a: &mut [f64], scratch: &mut [f64], dir: Direction) {
        let twon = 2 * self.n;
        debug_assert_eq!(a.len(), twon);
        let scratch = &mut scratch[..twon];
        let sign = dir.sign();

        let mut in_scratch = false;
        let mut l1 = 1;
        let mut offset = 0;
        for &ip in &self.factors {
            let l2 = ip * l1;
            let ido = 2 * (self.n / l2);
            let (src, dst): (&mut [f64], &mut [f64]) = if in_scratch {
                (&mut *scratch, &mut *a)
            } else {
                (&mut *a, &mut *scratch)
            };
            let w = self.twiddles.stage(offset);
            if Radix::from(ip).pass(ido, l1, src, dst, w, sign) == Landing::Output {
                in_scratch = !in_scratch;
            }
            l1 = l2;
            offset += (ip - 1) * ido;
        }
        if in_scratch {
            a.copy_from_slice(scratch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::TAU;

    #[test]
    fn factor_order() {
        assert_eq!(factorize(12), vec![4, 3]);
        assert_eq!(factorize(6), vec![2, 3]);
        assert_eq!(factorize(24), vec![2, 4, 3]);
        assert_eq!(factorize(60), vec![4, 3, 5]);
        assert_eq!(factorize(7 * 7 * 3), vec![3, 7, 7]);
        assert_eq!(factorize(2 * 13 * 9), vec![2, 3, 3, 13]);
        assert_eq!(factorize(997), vec![997]);
        assert!(factorize(1).is_empty());
    }

    #[test]
    fn residual_strips_small_primes() {
        assert_eq!(residual(12), 1);
        assert_eq!(residual(997), 997);
        assert_eq!(residual(2 * 211), 211);
        assert_eq!(residual(3 * 7 * 7), 49);
    }

    fn naive(input: &[f64], sign: f64) -> Vec<f64> {
        let n = input.len() / 2;
        let mut out = vec![0.0; 2 * n];
        for k in 0..n {
            let (mut re, mut im) = (0.0, 0.0);
            for j in 0..n {
                let ang = sign * TAU * ((j * k) % n) as f64 / n as f64;
                let (s, c) = ang.sin_cos();
                re += input[2 * j] * c - input[2 * j + 1] * s;
                im += input[2 * j] * s + input[2 * j + 1] * c;
            }
            out[2 * k] = re;
            out[2 * k + 1] = im;
        }
        out
    }

    #[test]
    fn matches_naive_dft() {
        for n in [2, 3, 5, 6, 7, 12, 14, 15, 18, 21, 30, 45, 49, 77, 100, 120, 143] {
            let plan = MixedRadix::new(n);
            let input: Vec<f64> = (0..2 * n).map(|i| (i as f64 * 0.37).sin()).collect();
            for dir in [Direction::Forward, Direction::Inverse] {
                let mut a = input.clone();
                let mut scratch = vec![0.0; plan.scratch_len()];
                plan.transform(&mut a, &mut scratch, dir);
                let want = naive(&input, dir.sign());
                for (g, w) in a.iter().zip(&want) {
                    assert!((g - w).abs() < 1e-9 * n as f64, "n={n} {dir:?}: {g} vs {w}");
                }
            }
        }
    }
}
