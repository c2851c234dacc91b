//! Split-radix transform for power-of-two lengths.
//!
//! Lengths up to 16 points are handled by a single unrolled kernel. Larger
//! transforms run a radix-4 first pass over the whole buffer, then a
//! depth-first recursion whose leaves are 256 or 512 doubles, and finally a
//! bit-reversal permutation. Above the configured thresholds the recursion is
//! cut into 2 or 4 contiguous regions that run on the worker pool; each
//! region performs exactly the kernel calls the sequential recursion would
//! perform on it, so the result is independent of the worker count.

use log::trace;

use crate::bitrev::{BitReversal, Permutation};
use crate::executor::Executor;
use crate::fft::{Direction, FftError};
use crate::fft_kernels::{
    first_stage, middle_even, middle_odd, radix16, radix2, radix4, radix8, Leaf,
};
use crate::twiddle::SplitRadixTwiddles;

/// Largest block the recursion hands to a leaf.
const LEAF_MAX: usize = 512;

#[derive(Debug, Clone)]
pub struct SplitRadix {
    n: usize,
    twiddles: SplitRadixTwiddles,
    bitrev: BitReversal,
}

impl SplitRadix {
    /// Tables for `n` complex points. `n` must be a power of two.
    pub fn new(n: usize) -> Self {
        debug_assert!(n.is_power_of_two());
        Self {
            n,
            twiddles: SplitRadixTwiddles::new(n),
            bitrev: BitReversal::new(n),
        }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn twiddles(&self) -> &SplitRadixTwiddles {
        &self.twiddles
    }

    /// Transform `a` (exactly `2n` doubles) in place, unnormalized.
    pub fn transform(
        &self,
        a: &mut [f64],
        dir: Direction,
        exec: &Executor,
    ) -> Result<(), FftError> {
        let nd = 2 * self.n;
        debug_assert_eq!(a.len(), nd);
        let tw = &self.twiddles;
        match nd {
            0..=2 => {}
            4 => radix2(a),
            8 => radix4(a, dir.sign()),
            16 | 32 => {
                if nd == 32 {
                    radix16(a, tw.radix16());
                } else {
                    radix8(a, tw.radix8());
                }
                let perm = match dir {
                    Direction::Forward => Permutation::Mirror,
                    Direction::Inverse => Permutation::Plain,
                };
                self.bitrev.apply(a, perm);
            }
            _ => {
                let conj = match dir {
                    Direction::Forward => -1.0,
                    Direction::Inverse => 1.0,
                };
                first_stage(a, tw.first_stage(nd), conj);
                let workers = exec.workers_for(nd);
                if workers > 1 && nd > LEAF_MAX {
                    trace!("split radix n={}: {workers} regions", self.n);
                    let leading = if workers == 4 { 1 } else { 0 };
                    let regions: Vec<&mut [f64]> = a.chunks_mut(nd / workers).collect();
                    exec.join(regions, |i, region| recurse(region, nd, i == leading, tw))?;
                } else if nd > LEAF_MAX {
                    recurse(a, nd, false, tw);
                } else if nd > 128 {
                    leaf(a, true, tw);
                } else {
                    fx41(a, tw);
                }
                let perm = match dir {
                    Direction::Forward => Permutation::Conjugate,
                    Direction::Inverse => Permutation::Plain,
                };
                self.bitrev.apply(a, perm);
            }
        }
        Ok(())
    }
}

/// Depth-first recursion over `region`, the slice of a `span`-double
/// transform assigned to one worker (the whole buffer when sequential).
///
/// The leading region of a four-way split starts with even-form middle
/// passes and an odd tree counter; every other region starts odd.
fn recurse(region: &mut [f64], span: usize, leading: bool, tw: &SplitRadixTwiddles) {
    let len = region.len();
    let mut m = span;
    let mut k = usize::from(leading);
    while m > LEAF_MAX {
        m >>= 2;
        let tail = &mut region[len - m..];
        if leading {
            k <<= 2;
            middle_even(tail, tw.middle_even(m));
        } else {
            middle_odd(tail, tw.middle_odd(m));
        }
    }
    leaf(&mut region[len - m..], !leading, tw);
    if leading {
        k >>= 1;
    }
    let mut j = len - m;
    while j > 0 {
        k += 1;
        let odd = tree(region, m, j, k, tw);
        leaf(&mut region[j - m..j], odd, tw);
        j -= m;
    }
}

/// Middle passes that precede the leaf ending at `j`. Returns whether that
/// leaf takes the odd form.
fn tree(a: &mut [f64], n: usize, j: usize, k: usize, tw: &SplitRadixTwiddles) -> bool {
    if k & 3 != 0 {
        let odd = k & 1 != 0;
        middle(&mut a[j - n..j], odd, tw);
        return odd;
    }
    let mut m = n;
    let mut i = k;
    while i & 3 == 0 {
        m <<= 2;
        i >>= 2;
    }
    let odd = i & 1 != 0;
    while m > 128 {
        middle(&mut a[j - m..j], odd, tw);
        m >>= 2;
    }
    odd
}

#[inline]
fn middle(block: &mut [f64], odd: bool, tw: &SplitRadixTwiddles) {
    let m = block.len();
    if odd {
        middle_odd(block, tw.middle_odd(m));
    } else {
        middle_even(block, tw.middle_even(m));
    }
}

/// Leaf of 512 or 256 doubles: four middle passes of a quarter each, every
/// quarter finished by four unrolled kernels.
fn leaf(a: &mut [f64], odd: bool, tw: &SplitRadixTwiddles) {
    let (quarter, plain, twisted) = if a.len() == 512 {
        (128, Leaf::Radix16, Leaf::Radix16Twisted)
    } else {
        (64, Leaf::Radix8, Leaf::Radix8Twisted)
    };
    let s = plain.span();
    let run = |a: &mut [f64], at: usize, kind: Leaf| kind.run(&mut a[at..at + s], tw);

    middle(&mut a[..quarter], true, tw);
    run(a, 0, plain);
    run(a, s, twisted);
    run(a, 2 * s, plain);
    run(a, 3 * s, plain);

    let q = quarter;
    middle(&mut a[q..2 * q], false, tw);
    run(a, q, plain);
    run(a, q + s, twisted);
    run(a, q + 2 * s, plain);
    run(a, q + 3 * s, twisted);

    let q = 2 * quarter;
    middle(&mut a[q..q + quarter], true, tw);
    run(a, q, plain);
    run(a, q + s, twisted);
    run(a, q + 2 * s, plain);
    run(a, q + 3 * s, plain);

    let q = 3 * quarter;
    middle(&mut a[q..q + quarter], odd, tw);
    run(a, q + 3 * s, if odd { plain } else { twisted });
    run(a, q, plain);
    run(a, q + s, twisted);
    run(a, q + 2 * s, plain);
}

/// Whole transform of 128 or 64 doubles after the first pass.
fn fx41(a: &mut [f64], tw: &SplitRadixTwiddles) {
    let (plain, twisted) = if a.len() == 128 {
        (Leaf::Radix16, Leaf::Radix16Twisted)
    } else {
        (Leaf::Radix8, Leaf::Radix8Twisted)
    };
    let s = plain.span();
    for (i, kind) in [plain, twisted, plain, plain].into_iter().enumerate() {
        kind.run(&mut a[i * s..(i + 1) * s], tw);
    }
}
