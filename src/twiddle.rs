//! Trigonometric tables.
//!
//! Every entry is computed once with `cos`/`sin` in double precision when a
//! plan is built. The tables are read-only afterwards and shared freely
//! between threads.

use core::f64::consts::{FRAC_PI_4, PI, TAU};

/// Twiddle table for the split-radix driver.
///
/// The table holds `n/2` doubles for a transform of `n` complex points. It is
/// organised as a chain of sub-tables, one per recursion level, each at the
/// tail end of the previous one. Kernels never index it directly: they ask
/// for the slice that belongs to them through the named accessors.
#[derive(Debug, Clone)]
pub struct SplitRadixTwiddles {
    w: Vec<f64>,
}

impl SplitRadixTwiddles {
    /// Build the table for a power-of-two transform of `n` complex points.
    pub fn new(n: usize) -> Self {
        let mut w = vec![0.0; n >> 1];
        fill_split_radix(&mut w);
        Self { w }
    }

    #[inline]
    fn tail(&self, len: usize) -> &[f64] {
        &self.w[self.w.len().saturating_sub(len)..]
    }

    /// Table for the first pass over a block of `len` doubles.
    #[inline]
    pub fn first_stage(&self, len: usize) -> &[f64] {
        self.tail(len >> 2)
    }

    /// Table for an odd-form middle pass over `len` doubles.
    #[inline]
    pub fn middle_odd(&self, len: usize) -> &[f64] {
        self.tail(len >> 1)
    }

    /// Table for an even-form middle pass over `len` doubles.
    #[inline]
    pub fn middle_even(&self, len: usize) -> &[f64] {
        self.tail(len)
    }

    #[inline]
    pub fn radix16(&self) -> &[f64] {
        self.tail(8)
    }

    #[inline]
    pub fn radix16_twisted(&self) -> &[f64] {
        self.tail(32)
    }

    #[inline]
    pub fn radix8(&self) -> &[f64] {
        self.tail(8)
    }

    pub fn len(&self) -> usize {
        self.w.len()
    }

    pub fn is_empty(&self) -> bool {
        self.w.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.w
    }
}

fn fill_split_radix(w: &mut [f64]) {
    let nw = w.len();
    if nw <= 2 {
        return;
    }
    let mut nwh = nw >> 1;
    let delta = FRAC_PI_4 / nwh as f64;
    let delta2 = delta * 2.0;
    let wn4r = (delta * nwh as f64).cos();
    w[0] = 1.0;
    w[1] = wn4r;
    if nwh == 4 {
        w[2] = delta2.cos();
        w[3] = delta2.sin();
    } else if nwh > 4 {
        w[2] = 0.5 / delta2.cos();
        w[3] = 0.5 / (delta * 6.0).cos();
        for j in (4..nwh).step_by(4) {
            let deltaj = delta * j as f64;
            let deltaj3 = 3.0 * deltaj;
            w[j] = deltaj.cos();
            w[j + 1] = deltaj.sin();
            w[j + 2] = deltaj3.cos();
            w[j + 3] = -deltaj3.sin();
        }
    }

    // each level keeps every other entry of its parent
    let mut nw0 = 0;
    while nwh > 2 {
        let nw1 = nw0 + nwh;
        nwh >>= 1;
        w[nw1] = 1.0;
        w[nw1 + 1] = wn4r;
        if nwh == 4 {
            w[nw1 + 2] = w[nw0 + 4];
            w[nw1 + 3] = w[nw0 + 5];
        } else if nwh > 4 {
            w[nw1 + 2] = 0.5 / w[nw0 + 4];
            w[nw1 + 3] = 0.5 / w[nw0 + 6];
            for j in (4..nwh).step_by(4) {
                let src = nw0 + 2 * j;
                w.copy_within(src..src + 4, nw1 + j);
            }
        }
        nw0 = nw1;
    }
}

/// Per-stage twiddles for the mixed-radix driver.
///
/// For every factor `p` (applied in order, with `l1` the product of the
/// factors before it and `ido = n / (l1 * p)`), the table holds `p - 1`
/// blocks of `ido` complex values. Block `j` entry `m` is
/// `exp(i * 2pi * m * j * l1 / n)`. For factors above 5 the first entry of
/// each block is replaced with `exp(i * 2pi * j / p)`, the rotation the
/// general-radix pass needs.
#[derive(Debug, Clone)]
pub struct StageTwiddles {
    table: Vec<f64>,
}

impl StageTwiddles {
    pub fn new(n: usize, factors: &[usize]) -> Self {
        let mut table = vec![0.0; 2 * n.max(1)];
        let argh = TAU / n as f64;
        // one-based cursor, each block starts on the last entry of the previous one
        let mut i = 1;
        let mut l1 = 1;
        for &ip in factors {
            let l2 = l1 * ip;
            let ido = n / l2;
            let idot = ido + ido + 2;
            let mut ld = 0;
            for _ in 1..ip {
                let i1 = i;
                table[i - 1] = 1.0;
                table[i] = 0.0;
                ld += l1;
                let argld = ld as f64 * argh;
                let mut fi = 0.0;
                for _ in (4..=idot).step_by(2) {
                    i += 2;
                    fi += 1.0;
                    let arg = fi * argld;
                    table[i - 1] = arg.cos();
                    table[i] = arg.sin();
                }
                if ip > 5 {
                    table[i1 - 1] = table[i - 1];
                    table[i1] = table[i];
                }
            }
            l1 = l2;
        }
        Self { table }
    }

    /// Twiddles starting at `offset` doubles into the table.
    #[inline]
    pub fn stage(&self, offset: usize) -> &[f64] {
        &self.table[offset..]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.table
    }
}

/// Chirp `exp(i * pi * k^2 / n)` for `k` in `0..n`, interleaved.
///
/// `k^2` is accumulated modulo `2n` so the argument stays small and exact for
/// large `n`.
pub fn chirp(n: usize) -> Vec<f64> {
    let mut out = vec![0.0; 2 * n];
    out[0] = 1.0;
    out[1] = 0.0;
    let pi_n = PI / n as f64;
    let mut k = 0usize;
    for i in 1..n {
        k += 2 * i - 1;
        if k >= 2 * n {
            k -= 2 * n;
        }
        let arg = pi_n * k as f64;
        out[2 * i] = arg.cos();
        out[2 * i + 1] = arg.sin();
    }
    out
}
