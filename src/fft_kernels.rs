//! Unrolled split-radix kernels.
//!
//! Every kernel works on an interleaved `[re, im, ...]` block and a twiddle
//! slice handed out by [`SplitRadixTwiddles`](crate::twiddle::SplitRadixTwiddles).
//! The kernels compute the `exp(+i)` orientation; the forward transform is
//! obtained by conjugating on the way in ([`first_stage`] with `conj = -1.0`)
//! and on the way out (the conjugating bit reversal).

use crate::twiddle::SplitRadixTwiddles;

/// Fixed-size leaf kernels used by the recursive driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leaf {
    /// 16 complex points, plain twiddles.
    Radix16,
    /// 16 complex points with the odd-quarter twiddles applied on input.
    Radix16Twisted,
    /// 8 complex points, plain twiddles.
    Radix8,
    /// 8 complex points with the odd-quarter twiddles applied on input.
    Radix8Twisted,
}

impl Leaf {
    /// Number of doubles one leaf consumes.
    pub const fn span(self) -> usize {
        match self {
            Leaf::Radix16 | Leaf::Radix16Twisted => 32,
            Leaf::Radix8 | Leaf::Radix8Twisted => 16,
        }
    }

    #[inline]
    pub fn run(self, a: &mut [f64], tw: &SplitRadixTwiddles) {
        match self {
            Leaf::Radix16 => radix16(a, tw.radix16()),
            Leaf::Radix16Twisted => radix16_twisted(a, tw.radix16_twisted()),
            Leaf::Radix8 => radix8(a, tw.radix8()),
            Leaf::Radix8Twisted => radix8_twisted(a, tw.radix8()),
        }
    }
}

/// First radix-4 pass over the whole transform.
///
/// `conj` is `1.0` for the inverse orientation and `-1.0` for the forward
/// one; it negates every imaginary input, which turns this pass into the
/// conjugated-input variant without changing any other arithmetic.
pub fn first_stage(a: &mut [f64], w: &[f64], conj: f64) {
    let n = a.len();
    let mh = n >> 3;
    let m = 2 * mh;
    let (j1, j2, j3) = (m, 2 * m, 3 * m);
    let x0r = a[0] + a[j2];
    let x0i = conj * (a[1] + a[j2 + 1]);
    let x1r = a[0] - a[j2];
    let x1i = conj * (a[1] - a[j2 + 1]);
    let x2r = a[j1] + a[j3];
    let x2i = conj * (a[j1 + 1] + a[j3 + 1]);
    let x3r = a[j1] - a[j3];
    let x3i = conj * (a[j1 + 1] - a[j3 + 1]);
    a[0] = x0r + x2r;
    a[1] = x0i + x2i;
    a[j1] = x0r - x2r;
    a[j1 + 1] = x0i - x2i;
    a[j2] = x1r - x3i;
    a[j2 + 1] = x1i + x3r;
    a[j3] = x1r + x3i;
    a[j3 + 1] = x1i - x3r;

    let wn4r = w[1];
    let csc1 = w[2];
    let csc3 = w[3];
    let (mut wd1r, mut wd1i, mut wd3r, mut wd3i) = (1.0, 0.0, 1.0, 0.0);
    let mut k = 0;
    let mut j = 2;
    while j + 2 < mh {
        k += 4;
        let wk1r = csc1 * (wd1r + w[k]);
        let wk1i = csc1 * (wd1i + w[k + 1]);
        let wk3r = csc3 * (wd3r + w[k + 2]);
        let wk3i = csc3 * (wd3i + w[k + 3]);
        wd1r = w[k];
        wd1i = w[k + 1];
        wd3r = w[k + 2];
        wd3i = w[k + 3];

        let j0 = j;
        let j1 = j0 + m;
        let j2 = j1 + m;
        let j3 = j2 + m;
        let x0r = a[j0] + a[j2];
        let x0i = conj * (a[j0 + 1] + a[j2 + 1]);
        let x1r = a[j0] - a[j2];
        let x1i = conj * (a[j0 + 1] - a[j2 + 1]);
        let y0r = a[j0 + 2] + a[j2 + 2];
        let y0i = conj * (a[j0 + 3] + a[j2 + 3]);
        let y1r = a[j0 + 2] - a[j2 + 2];
        let y1i = conj * (a[j0 + 3] - a[j2 + 3]);
        let x2r = a[j1] + a[j3];
        let x2i = conj * (a[j1 + 1] + a[j3 + 1]);
        let x3r = a[j1] - a[j3];
        let x3i = conj * (a[j1 + 1] - a[j3 + 1]);
        let y2r = a[j1 + 2] + a[j3 + 2];
        let y2i = conj * (a[j1 + 3] + a[j3 + 3]);
        let y3r = a[j1 + 2] - a[j3 + 2];
        let y3i = conj * (a[j1 + 3] - a[j3 + 3]);
        a[j0] = x0r + x2r;
        a[j0 + 1] = x0i + x2i;
        a[j0 + 2] = y0r + y2r;
        a[j0 + 3] = y0i + y2i;
        a[j1] = x0r - x2r;
        a[j1 + 1] = x0i - x2i;
        a[j1 + 2] = y0r - y2r;
        a[j1 + 3] = y0i - y2i;
        let x0r = x1r - x3i;
        let x0i = x1i + x3r;
        a[j2] = wk1r * x0r - wk1i * x0i;
        a[j2 + 1] = wk1r * x0i + wk1i * x0r;
        let x0r = y1r - y3i;
        let x0i = y1i + y3r;
        a[j2 + 2] = wd1r * x0r - wd1i * x0i;
        a[j2 + 3] = wd1r * x0i + wd1i * x0r;
        let x0r = x1r + x3i;
        let x0i = x1i - x3r;
        a[j3] = wk3r * x0r + wk3i * x0i;
        a[j3 + 1] = wk3r * x0i - wk3i * x0r;
        let x0r = y1r + y3i;
        let x0i = y1i - y3r;
        a[j3 + 2] = wd3r * x0r + wd3i * x0i;
        a[j3 + 3] = wd3r * x0i - wd3i * x0r;

        // mirrored block walking down from the quarter point
        let j0 = m - j;
        let j1 = j0 + m;
        let j2 = j1 + m;
        let j3 = j2 + m;
        let x0r = a[j0] + a[j2];
        let x0i = conj * (a[j0 + 1] + a[j2 + 1]);
        let x1r = a[j0] - a[j2];
        let x1i = conj * (a[j0 + 1] - a[j2 + 1]);
        let y0r = a[j0 - 2] + a[j2 - 2];
        let y0i = conj * (a[j0 - 1] + a[j2 - 1]);
        let y1r = a[j0 - 2] - a[j2 - 2];
        let y1i = conj * (a[j0 - 1] - a[j2 - 1]);
        let x2r = a[j1] + a[j3];
        let x2i = conj * (a[j1 + 1] + a[j3 + 1]);
        let x3r = a[j1] - a[j3];
        let x3i = conj * (a[j1 + 1] - a[j3 + 1]);
        let y2r = a[j1 - 2] + a[j3 - 2];
        let y2i = conj * (a[j1 - 1] + a[j3 - 1]);
        let y3r = a[j1 - 2] - a[j3 - 2];
        let y3i = conj * (a[j1 - 1] - a[j3 - 1]);
        a[j0] = x0r + x2r;
        a[j0 + 1] = x0i + x2i;
        a[j0 - 2] = y0r + y2r;
        a[j0 - 1] = y0i + y2i;
        a[j1] = x0r - x2r;
        a[j1 + 1] = x0i - x2i;
        a[j1 - 2] = y0r - y2r;
        a[j1 - 1] = y0i - y2i;
        let x0r = x1r - x3i;
        let x0i = x1i + x3r;
        a[j2] = wk1i * x0r - wk1r * x0i;
        a[j2 + 1] = wk1i * x0i + wk1r * x0r;
        let x0r = y1r - y3i;
        let x0i = y1i + y3r;
        a[j2 - 2] = wd1i * x0r - wd1r * x0i;
        a[j2 - 1] = wd1i * x0i + wd1r * x0r;
        let x0r = x1r + x3i;
        let x0i = x1i - x3r;
        a[j3] = wk3i * x0r + wk3r * x0i;
        a[j3 + 1] = wk3i * x0i - wk3r * x0r;
        let x0r = y1r + y3i;
        let x0i = y1i - y3r;
        a[j3 - 2] = wd3i * x0r + wd3r * x0i;
        a[j3 - 1] = wd3i * x0i - wd3r * x0r;

        j += 4;
    }

    let wk1r = csc1 * (wd1r + wn4r);
    let wk1i = csc1 * (wd1i + wn4r);
    let wk3r = csc3 * (wd3r - wn4r);
    let wk3i = csc3 * (wd3i - wn4r);
    let j0 = mh;
    let j1 = j0 + m;
    let j2 = j1 + m;
    let j3 = j2 + m;
    let x0r = a[j0 - 2] + a[j2 - 2];
    let x0i = conj * (a[j0 - 1] + a[j2 - 1]);
    let x1r = a[j0 - 2] - a[j2 - 2];
    let x1i = conj * (a[j0 - 1] - a[j2 - 1]);
    let x2r = a[j1 - 2] + a[j3 - 2];
    let x2i = conj * (a[j1 - 1] + a[j3 - 1]);
    let x3r = a[j1 - 2] - a[j3 - 2];
    let x3i = conj * (a[j1 - 1] - a[j3 - 1]);
    a[j0 - 2] = x0r + x2r;
    a[j0 - 1] = x0i + x2i;
    a[j1 - 2] = x0r - x2r;
    a[j1 - 1] = x0i - x2i;
    let x0r = x1r - x3i;
    let x0i = x1i + x3r;
    a[j2 - 2] = wk1r * x0r - wk1i * x0i;
    a[j2 - 1] = wk1r * x0i + wk1i * x0r;
    let x0r = x1r + x3i;
    let x0i = x1i - x3r;
    a[j3 - 2] = wk3r * x0r + wk3i * x0i;
    a[j3 - 1] = wk3r * x0i - wk3i * x0r;

    let x0r = a[j0] + a[j2];
    let x0i = conj * (a[j0 + 1] + a[j2 + 1]);
    let x1r = a[j0] - a[j2];
    let x1i = conj * (a[j0 + 1] - a[j2 + 1]);
    let x2r = a[j1] + a[j3];
    let x2i = conj * (a[j1 + 1] + a[j3 + 1]);
    let x3r = a[j1] - a[j3];
    let x3i = conj * (a[j1 + 1] - a[j3 + 1]);
    a[j0] = x0r + x2r;
    a[j0 + 1] = x0i + x2i;
    a[j1] = x0r - x2r;
    a[j1 + 1] = x0i - x2i;
    let x0r = x1r - x3i;
    let x0i = x1i + x3r;
    a[j2] = wn4r * (x0r - x0i);
    a[j2 + 1] = wn4r * (x0i + x0r);
    let x0r = x1r + x3i;
    let x0i = x1i - x3r;
    a[j3] = -wn4r * (x0r + x0i);
    a[j3 + 1] = -wn4r * (x0i - x0r);

    let x0r = a[j0 + 2] + a[j2 + 2];
    let x0i = conj * (a[j0 + 3] + a[j2 + 3]);
    let x1r = a[j0 + 2] - a[j2 + 2];
    let x1i = conj * (a[j0 + 3] - a[j2 + 3]);
    let x2r = a[j1 + 2] + a[j3 + 2];
    let x2i = conj * (a[j1 + 3] + a[j3 + 3]);
    let x3r = a[j1 + 2] - a[j3 + 2];
    let x3i = conj * (a[j1 + 3] - a[j3 + 3]);
    a[j0 + 2] = x0r + x2r;
    a[j0 + 3] = x0i + x2i;
    a[j1 + 2] = x0r - x2r;
    a[j1 + 3] = x0i - x2i;
    let x0r = x1r - x3i;
    let x0i = x1i + x3r;
    a[j2 + 2] = wk1i * x0r - wk1r * x0i;
    a[j2 + 3] = wk1i * x0i + wk1r * x0r;
    let x0r = x1r + x3i;
    let x0i = x1i - x3r;
    a[j3 + 2] = wk3i * x0r + wk3r * x0i;
    a[j3 + 3] = wk3i * x0i - wk3r * x0r;
}

/// Radix-4 middle pass, odd-twiddle form.
pub fn middle_odd(a: &mut [f64], w: &[f64]) {
    let n = a.len();
    let mh = n >> 3;
    let m = 2 * mh;
    let (j1, j2, j3) = (m, 2 * m, 3 * m);
    let x0r = a[0] + a[j2];
    let x0i = a[1] + a[j2 + 1];
    let x1r = a[0] - a[j2];
    let x1i = a[1] - a[j2 + 1];
    let x2r = a[j1] + a[j3];
    let x2i = a[j1 + 1] + a[j3 + 1];
    let x3r = a[j1] - a[j3];
    let x3i = a[j1 + 1] - a[j3 + 1];
    a[0] = x0r + x2r;
    a[1] = x0i + x2i;
    a[j1] = x0r - x2r;
    a[j1 + 1] = x0i - x2i;
    a[j2] = x1r - x3i;
    a[j2 + 1] = x1i + x3r;
    a[j3] = x1r + x3i;
    a[j3 + 1] = x1i - x3r;

    let wn4r = w[1];
    let mut k = 0;
    let mut j = 2;
    while j < mh {
        k += 4;
        let wk1r = w[k];
        let wk1i = w[k + 1];
        let wk3r = w[k + 2];
        let wk3i = w[k + 3];

        let j0 = j;
        let j1 = j0 + m;
        let j2 = j1 + m;
        let j3 = j2 + m;
        let x0r = a[j0] + a[j2];
        let x0i = a[j0 + 1] + a[j2 + 1];
        let x1r = a[j0] - a[j2];
        let x1i = a[j0 + 1] - a[j2 + 1];
        let x2r = a[j1] + a[j3];
        let x2i = a[j1 + 1] + a[j3 + 1];
        let x3r = a[j1] - a[j3];
        let x3i = a[j1 + 1] - a[j3 + 1];
        a[j0] = x0r + x2r;
        a[j0 + 1] = x0i + x2i;
        a[j1] = x0r - x2r;
        a[j1 + 1] = x0i - x2i;
        let x0r = x1r - x3i;
        let x0i = x1i + x3r;
        a[j2] = wk1r * x0r - wk1i * x0i;
        a[j2 + 1] = wk1r * x0i + wk1i * x0r;
        let x0r = x1r + x3i;
        let x0i = x1i - x3r;
        a[j3] = wk3r * x0r + wk3i * x0i;
        a[j3 + 1] = wk3r * x0i - wk3i * x0r;

        let j0 = m - j;
        let j1 = j0 + m;
        let j2 = j1 + m;
        let j3 = j2 + m;
        let x0r = a[j0] + a[j2];
        let x0i = a[j0 + 1] + a[j2 + 1];
        let x1r = a[j0] - a[j2];
        let x1i = a[j0 + 1] - a[j2 + 1];
        let x2r = a[j1] + a[j3];
        let x2i = a[j1 + 1] + a[j3 + 1];
        let x3r = a[j1] - a[j3];
        let x3i = a[j1 + 1] - a[j3 + 1];
        a[j0] = x0r + x2r;
        a[j0 + 1] = x0i + x2i;
        a[j1] = x0r - x2r;
        a[j1 + 1] = x0i - x2i;
        let x0r = x1r - x3i;
        let x0i = x1i + x3r;
        a[j2] = wk1i * x0r - wk1r * x0i;
        a[j2 + 1] = wk1i * x0i + wk1r * x0r;
        let x0r = x1r + x3i;
        let x0i = x1i - x3r;
        a[j3] = wk3i * x0r + wk3r * x0i;
        a[j3 + 1] = wk3i * x0i - wk3r * x0r;

        j += 2;
    }

    let j0 = mh;
    let j1 = j0 + m;
    let j2 = j1 + m;
    let j3 = j2 + m;
    let x0r = a[j0] + a[j2];
    let x0i = a[j0 + 1] + a[j2 + 1];
    let x1r = a[j0] - a[j2];
    let x1i = a[j0 + 1] - a[j2 + 1];
    let x2r = a[j1] + a[j3];
    let x2i = a[j1 + 1] + a[j3 + 1];
    let x3r = a[j1] - a[j3];
    let x3i = a[j1 + 1] - a[j3 + 1];
    a[j0] = x0r + x2r;
    a[j0 + 1] = x0i + x2i;
    a[j1] = x0r - x2r;
    a[j1 + 1] = x0i - x2i;
    let x0r = x1r - x3i;
    let x0i = x1i + x3r;
    a[j2] = wn4r * (x0r - x0i);
    a[j2 + 1] = wn4r * (x0i + x0r);
    let x0r = x1r + x3i;
    let x0i = x1i - x3r;
    a[j3] = -wn4r * (x0r + x0i);
    a[j3 + 1] = -wn4r * (x0i - x0r);
}

/// Radix-4 middle pass, even-twiddle form (input pre-rotated by the odd quarter).
pub fn middle_even(a: &mut [f64], w: &[f64]) {
    let n = a.len();
    let mh = n >> 3;
    let m = 2 * mh;
    let wn4r = w[1];
    let (j1, j2, j3) = (m, 2 * m, 3 * m);
    let x0r = a[0] - a[j2 + 1];
    let x0i = a[1] + a[j2];
    let x1r = a[0] + a[j2 + 1];
    let x1i = a[1] - a[j2];
    let x2r = a[j1] - a[j3 + 1];
    let x2i = a[j1 + 1] + a[j3];
    let x3r = a[j1] + a[j3 + 1];
    let x3i = a[j1 + 1] - a[j3];
    let y0r = wn4r * (x2r - x2i);
    let y0i = wn4r * (x2i + x2r);
    a[0] = x0r + y0r;
    a[1] = x0i + y0i;
    a[j1] = x0r - y0r;
    a[j1 + 1] = x0i - y0i;
    let y0r = wn4r * (x3r - x3i);
    let y0i = wn4r * (x3i + x3r);
    a[j2] = x1r - y0i;
    a[j2 + 1] = x1i + y0r;
    a[j3] = x1r + y0i;
    a[j3 + 1] = x1i - y0r;

    let mut k = 0;
    let mut kr = 2 * m;
    let mut j = 2;
    while j < mh {
        k += 4;
        let wk1r = w[k];
        let wk1i = w[k + 1];
        let wk3r = w[k + 2];
        let wk3i = w[k + 3];
        kr -= 4;
        let wd1i = w[kr];
        let wd1r = w[kr + 1];
        let wd3i = w[kr + 2];
        let wd3r = w[kr + 3];

        let j0 = j;
        let j1 = j0 + m;
        let j2 = j1 + m;
        let j3 = j2 + m;
        let x0r = a[j0] - a[j2 + 1];
        let x0i = a[j0 + 1] + a[j2];
        let x1r = a[j0] + a[j2 + 1];
        let x1i = a[j0 + 1] - a[j2];
        let x2r = a[j1] - a[j3 + 1];
        let x2i = a[j1 + 1] + a[j3];
        let x3r = a[j1] + a[j3 + 1];
        let x3i = a[j1 + 1] - a[j3];
        let y0r = wk1r * x0r - wk1i * x0i;
        let y0i = wk1r * x0i + wk1i * x0r;
        let y2r = wd1r * x2r - wd1i * x2i;
        let y2i = wd1r * x2i + wd1i * x2r;
        a[j0] = y0r + y2r;
        a[j0 + 1] = y0i + y2i;
        a[j1] = y0r - y2r;
        a[j1 + 1] = y0i - y2i;
        let y0r = wk3r * x1r + wk3i * x1i;
        let y0i = wk3r * x1i - wk3i * x1r;
        let y2r = wd3r * x3r + wd3i * x3i;
        let y2i = wd3r * x3i - wd3i * x3r;
        a[j2] = y0r + y2r;
        a[j2 + 1] = y0i + y2i;
        a[j3] = y0r - y2r;
        a[j3 + 1] = y0i - y2i;

        let j0 = m - j;
        let j1 = j0 + m;
        let j2 = j1 + m;
        let j3 = j2 + m;
        let x0r = a[j0] - a[j2 + 1];
        let x0i = a[j0 + 1] + a[j2];
        let x1r = a[j0] + a[j2 + 1];
        let x1i = a[j0 + 1] - a[j2];
        let x2r = a[j1] - a[j3 + 1];
        let x2i = a[j1 + 1] + a[j3];
        let x3r = a[j1] + a[j3 + 1];
        let x3i = a[j1 + 1] - a[j3];
        let y0r = wd1i * x0r - wd1r * x0i;
        let y0i = wd1i * x0i + wd1r * x0r;
        let y2r = wk1i * x2r - wk1r * x2i;
        let y2i = wk1i * x2i + wk1r * x2r;
        a[j0] = y0r + y2r;
        a[j0 + 1] = y0i + y2i;
        a[j1] = y0r - y2r;
        a[j1 + 1] = y0i - y2i;
        let y0r = wd3i * x1r + wd3r * x1i;
        let y0i = wd3i * x1i - wd3r * x1r;
        let y2r = wk3i * x3r + wk3r * x3i;
        let y2i = wk3i * x3i - wk3r * x3r;
        a[j2] = y0r + y2r;
        a[j2 + 1] = y0i + y2i;
        a[j3] = y0r - y2r;
        a[j3 + 1] = y0i - y2i;

        j += 2;
    }

    let wk1r = w[m];
    let wk1i = w[m + 1];
    let j0 = mh;
    let j1 = j0 + m;
    let j2 = j1 + m;
    let j3 = j2 + m;
    let x0r = a[j0] - a[j2 + 1];
    let x0i = a[j0 + 1] + a[j2];
    let x1r = a[j0] + a[j2 + 1];
    let x1i = a[j0 + 1] - a[j2];
    let x2r = a[j1] - a[j3 + 1];
    let x2i = a[j1 + 1] + a[j3];
    let x3r = a[j1] + a[j3 + 1];
    let x3i = a[j1 + 1] - a[j3];
    let y0r = wk1r * x0r - wk1i * x0i;
    let y0i = wk1r * x0i + wk1i * x0r;
    let y2r = wk1i * x2r - wk1r * x2i;
    let y2i = wk1i * x2i + wk1r * x2r;
    a[j0] = y0r + y2r;
    a[j0 + 1] = y0i + y2i;
    a[j1] = y0r - y2r;
    a[j1 + 1] = y0i - y2i;
    let y0r = wk1i * x1r - wk1r * x1i;
    let y0i = wk1i * x1i + wk1r * x1r;
    let y2r = wk1r * x3r - wk1i * x3i;
    let y2i = wk1r * x3i + wk1i * x3r;
    a[j2] = y0r - y2r;
    a[j2 + 1] = y0i - y2i;
    a[j3] = y0r + y2r;
    a[j3 + 1] = y0i + y2i;
}

/// 16-point leaf.
pub fn radix16(a: &mut [f64], w: &[f64]) {
    debug_assert!(a.len() >= 32);
    let wn4r = w[1];
    let wk1r = w[2];
    let wk1i = w[3];

    let x0r = a[0] + a[16];
    let x0i = a[1] + a[17];
    let x1r = a[0] - a[16];
    let x1i = a[1] - a[17];
    let x2r = a[8] + a[24];
    let x2i = a[9] + a[25];
    let x3r = a[8] - a[24];
    let x3i = a[9] - a[25];
    let y0r = x0r + x2r;
    let y0i = x0i + x2i;
    let y4r = x0r - x2r;
    let y4i = x0i - x2i;
    let y8r = x1r - x3i;
    let y8i = x1i + x3r;
    let y12r = x1r + x3i;
    let y12i = x1i - x3r;

    let x0r = a[2] + a[18];
    let x0i = a[3] + a[19];
    let x1r = a[2] - a[18];
    let x1i = a[3] - a[19];
    let x2r = a[10] + a[26];
    let x2i = a[11] + a[27];
    let x3r = a[10] - a[26];
    let x3i = a[11] - a[27];
    let y1r = x0r + x2r;
    let y1i = x0i + x2i;
    let y5r = x0r - x2r;
    let y5i = x0i - x2i;
    let x0r = x1r - x3i;
    let x0i = x1i + x3r;
    let y9r = wk1r * x0r - wk1i * x0i;
    let y9i = wk1r * x0i + wk1i * x0r;
    let x0r = x1r + x3i;
    let x0i = x1i - x3r;
    let y13r = wk1i * x0r - wk1r * x0i;
    let y13i = wk1i * x0i + wk1r * x0r;

    let x0r = a[4] + a[20];
    let x0i = a[5] + a[21];
    let x1r = a[4] - a[20];
    let x1i = a[5] - a[21];
    let x2r = a[12] + a[28];
    let x2i = a[13] + a[29];
    let x3r = a[12] - a[28];
    let x3i = a[13] - a[29];
    let y2r = x0r + x2r;
    let y2i = x0i + x2i;
    let y6r = x0r - x2r;
    let y6i = x0i - x2i;
    let x0r = x1r - x3i;
    let x0i = x1i + x3r;
    let y10r = wn4r * (x0r - x0i);
    let y10i = wn4r * (x0i + x0r);
    let x0r = x1r + x3i;
    let x0i = x1i - x3r;
    let y14r = wn4r * (x0r + x0i);
    let y14i = wn4r * (x0i - x0r);

    let x0r = a[6] + a[22];
    let x0i = a[7] + a[23];
    let x1r = a[6] - a[22];
    let x1i = a[7] - a[23];
    let x2r = a[14] + a[30];
    let x2i = a[15] + a[31];
    let x3r = a[14] - a[30];
    let x3i = a[15] - a[31];
    let y3r = x0r + x2r;
    let y3i = x0i + x2i;
    let y7r = x0r - x2r;
    let y7i = x0i - x2i;
    let x0r = x1r - x3i;
    let x0i = x1i + x3r;
    let y11r = wk1i * x0r - wk1r * x0i;
    let y11i = wk1i * x0i + wk1r * x0r;
    let x0r = x1r + x3i;
    let x0i = x1i - x3r;
    let y15r = wk1r * x0r - wk1i * x0i;
    let y15i = wk1r * x0i + wk1i * x0r;

    let x0r = y12r - y14r;
    let x0i = y12i - y14i;
    let x1r = y12r + y14r;
    let x1i = y12i + y14i;
    let x2r = y13r - y15r;
    let x2i = y13i - y15i;
    let x3r = y13r + y15r;
    let x3i = y13i + y15i;
    a[24] = x0r + x2r;
    a[25] = x0i + x2i;
    a[26] = x0r - x2r;
    a[27] = x0i - x2i;
    a[28] = x1r - x3i;
    a[29] = x1i + x3r;
    a[30] = x1r + x3i;
    a[31] = x1i - x3r;

    let x0r = y8r + y10r;
    let x0i = y8i + y10i;
    let x1r = y8r - y10r;
    let x1i = y8i - y10i;
    let x2r = y9r + y11r;
    let x2i = y9i + y11i;
    let x3r = y9r - y11r;
    let x3i = y9i - y11i;
    a[16] = x0r + x2r;
    a[17] = x0i + x2i;
    a[18] = x0r - x2r;
    a[19] = x0i - x2i;
    a[20] = x1r - x3i;
    a[21] = x1i + x3r;
    a[22] = x1r + x3i;
    a[23] = x1i - x3r;

    let x0r = y5r - y7i;
    let x0i = y5i + y7r;
    let x2r = wn4r * (x0r - x0i);
    let x2i = wn4r * (x0i + x0r);
    let x0r = y5r + y7i;
    let x0i = y5i - y7r;
    let x3r = wn4r * (x0r - x0i);
    let x3i = wn4r * (x0i + x0r);
    let x0r = y4r - y6i;
    let x0i = y4i + y6r;
    let x1r = y4r + y6i;
    let x1i = y4i - y6r;
    a[8] = x0r + x2r;
    a[9] = x0i + x2i;
    a[10] = x0r - x2r;
    a[11] = x0i - x2i;
    a[12] = x1r - x3i;
    a[13] = x1i + x3r;
    a[14] = x1r + x3i;
    a[15] = x1i - x3r;

    let x0r = y0r + y2r;
    let x0i = y0i + y2i;
    let x1r = y0r - y2r;
    let x1i = y0i - y2i;
    let x2r = y1r + y3r;
    let x2i = y1i + y3i;
    let x3r = y1r - y3r;
    let x3i = y1i - y3i;
    a[0] = x0r + x2r;
    a[1] = x0i + x2i;
    a[2] = x0r - x2r;
    a[3] = x0i - x2i;
    a[4] = x1r - x3i;
    a[5] = x1i + x3r;
    a[6] = x1r + x3i;
    a[7] = x1i - x3r;
}

/// 16-point leaf for blocks that sit on an odd quarter of their parent.
pub fn radix16_twisted(a: &mut [f64], w: &[f64]) {
    debug_assert!(a.len() >= 32);
    let wn4r = w[1];
    let wk1r = w[4];
    let wk1i = w[5];
    let wk3r = w[6];
    let wk3i = -w[7];
    let wk2r = w[8];
    let wk2i = w[9];

    let x1r = a[0] - a[17];
    let x1i = a[1] + a[16];
    let x0r = a[8] - a[25];
    let x0i = a[9] + a[24];
    let x2r = wn4r * (x0r - x0i);
    let x2i = wn4r * (x0i + x0r);
    let y0r = x1r + x2r;
    let y0i = x1i + x2i;
    let y4r = x1r - x2r;
    let y4i = x1i - x2i;
    let x1r = a[0] + a[17];
    let x1i = a[1] - a[16];
    let x0r = a[8] + a[25];
    let x0i = a[9] - a[24];
    let x2r = wn4r * (x0r - x0i);
    let x2i = wn4r * (x0i + x0r);
    let y8r = x1r - x2i;
    let y8i = x1i + x2r;
    let y12r = x1r + x2i;
    let y12i = x1i - x2r;

    let x0r = a[2] - a[19];
    let x0i = a[3] + a[18];
    let x1r = wk1r * x0r - wk1i * x0i;
    let x1i = wk1r * x0i + wk1i * x0r;
    let x0r = a[10] - a[27];
    let x0i = a[11] + a[26];
    let x2r = wk3i * x0r - wk3r * x0i;
    let x2i = wk3i * x0i + wk3r * x0r;
    let y1r = x1r + x2r;
    let y1i = x1i + x2i;
    let y5r = x1r - x2r;
    let y5i = x1i - x2i;
    let x0r = a[2] + a[19];
    let x0i = a[3] - a[18];
    let x1r = wk3r * x0r - wk3i * x0i;
    let x1i = wk3r * x0i + wk3i * x0r;
    let x0r = a[10] + a[27];
    let x0i = a[11] - a[26];
    let x2r = wk1r * x0r + wk1i * x0i;
    let x2i = wk1r * x0i - wk1i * x0r;
    let y9r = x1r - x2r;
    let y9i = x1i - x2i;
    let y13r = x1r + x2r;
    let y13i = x1i + x2i;

    let x0r = a[4] - a[21];
    let x0i = a[5] + a[20];
    let x1r = wk2r * x0r - wk2i * x0i;
    let x1i = wk2r * x0i + wk2i * x0r;
    let x0r = a[12] - a[29];
    let x0i = a[13] + a[28];
    let x2r = wk2i * x0r - wk2r * x0i;
    let x2i = wk2i * x0i + wk2r * x0r;
    let y2r = x1r + x2r;
    let y2i = x1i + x2i;
    let y6r = x1r - x2r;
    let y6i = x1i - x2i;
    let x0r = a[4] + a[21];
    let x0i = a[5] - a[20];
    let x1r = wk2i * x0r - wk2r * x0i;
    let x1i = wk2i * x0i + wk2r * x0r;
    let x0r = a[12] + a[29];
    let x0i = a[13] - a[28];
    let x2r = wk2r * x0r - wk2i * x0i;
    let x2i = wk2r * x0i + wk2i * x0r;
    let y10r = x1r - x2r;
    let y10i = x1i - x2i;
    let y14r = x1r + x2r;
    let y14i = x1i + x2i;

    let x0r = a[6] - a[23];
    let x0i = a[7] + a[22];
    let x1r = wk3r * x0r - wk3i * x0i;
    let x1i = wk3r * x0i + wk3i * x0r;
    let x0r = a[14] - a[31];
    let x0i = a[15] + a[30];
    let x2r = wk1i * x0r - wk1r * x0i;
    let x2i = wk1i * x0i + wk1r * x0r;
    let y3r = x1r + x2r;
    let y3i = x1i + x2i;
    let y7r = x1r - x2r;
    let y7i = x1i - x2i;
    let x0r = a[6] + a[23];
    let x0i = a[7] - a[22];
    let x1r = wk1i * x0r + wk1r * x0i;
    let x1i = wk1i * x0i - wk1r * x0r;
    let x0r = a[14] + a[31];
    let x0i = a[15] - a[30];
    let x2r = wk3i * x0r - wk3r * x0i;
    let x2i = wk3i * x0i + wk3r * x0r;
    let y11r = x1r + x2r;
    let y11i = x1i + x2i;
    let y15r = x1r - x2r;
    let y15i = x1i - x2i;

    let x1r = y0r + y2r;
    let x1i = y0i + y2i;
    let x2r = y1r + y3r;
    let x2i = y1i + y3i;
    a[0] = x1r + x2r;
    a[1] = x1i + x2i;
    a[2] = x1r - x2r;
    a[3] = x1i - x2i;
    let x1r = y0r - y2r;
    let x1i = y0i - y2i;
    let x2r = y1r - y3r;
    let x2i = y1i - y3i;
    a[4] = x1r - x2i;
    a[5] = x1i + x2r;
    a[6] = x1r + x2i;
    a[7] = x1i - x2r;

    let x1r = y4r - y6i;
    let x1i = y4i + y6r;
    let x0r = y5r - y7i;
    let x0i = y5i + y7r;
    let x2r = wn4r * (x0r - x0i);
    let x2i = wn4r * (x0i + x0r);
    a[8] = x1r + x2r;
    a[9] = x1i + x2i;
    a[10] = x1r - x2r;
    a[11] = x1i - x2i;
    let x1r = y4r + y6i;
    let x1i = y4i - y6r;
    let x0r = y5r + y7i;
    let x0i = y5i - y7r;
    let x2r = wn4r * (x0r - x0i);
    let x2i = wn4r * (x0i + x0r);
    a[12] = x1r - x2i;
    a[13] = x1i + x2r;
    a[14] = x1r + x2i;
    a[15] = x1i - x2r;

    let x1r = y8r + y10r;
    let x1i = y8i + y10i;
    let x2r = y9r - y11r;
    let x2i = y9i - y11i;
    a[16] = x1r + x2r;
    a[17] = x1i + x2i;
    a[18] = x1r - x2r;
    a[19] = x1i - x2i;
    let x1r = y8r - y10r;
    let x1i = y8i - y10i;
    let x2r = y9r + y11r;
    let x2i = y9i + y11i;
    a[20] = x1r - x2i;
    a[21] = x1i + x2r;
    a[22] = x1r + x2i;
    a[23] = x1i - x2r;

    let x1r = y12r - y14i;
    let x1i = y12i + y14r;
    let x0r = y13r + y15i;
    let x0i = y13i - y15r;
    let x2r = wn4r * (x0r - x0i);
    let x2i = wn4r * (x0i + x0r);
    a[24] = x1r + x2r;
    a[25] = x1i + x2i;
    a[26] = x1r - x2r;
    a[27] = x1i - x2i;
    let x1r = y12r + y14i;
    let x1i = y12i - y14r;
    let x0r = y13r - y15i;
    let x0i = y13i + y15r;
    let x2r = wn4r * (x0r - x0i);
    let x2i = wn4r * (x0i + x0r);
    a[28] = x1r - x2i;
    a[29] = x1i + x2r;
    a[30] = x1r + x2i;
    a[31] = x1i - x2r;
}

/// 8-point leaf.
pub fn radix8(a: &mut [f64], w: &[f64]) {
    debug_assert!(a.len() >= 16);
    let wn4r = w[1];
    let x0r = a[0] + a[8];
    let x0i = a[1] + a[9];
    let x1r = a[0] - a[8];
    let x1i = a[1] - a[9];
    let x2r = a[4] + a[12];
    let x2i = a[5] + a[13];
    let x3r = a[4] - a[12];
    let x3i = a[5] - a[13];
    let y0r = x0r + x2r;
    let y0i = x0i + x2i;
    let y2r = x0r - x2r;
    let y2i = x0i - x2i;
    let y1r = x1r - x3i;
    let y1i = x1i + x3r;
    let y3r = x1r + x3i;
    let y3i = x1i - x3r;

    let x0r = a[2] + a[10];
    let x0i = a[3] + a[11];
    let x1r = a[2] - a[10];
    let x1i = a[3] - a[11];
    let x2r = a[6] + a[14];
    let x2i = a[7] + a[15];
    let x3r = a[6] - a[14];
    let x3i = a[7] - a[15];
    let y4r = x0r + x2r;
    let y4i = x0i + x2i;
    let y6r = x0r - x2r;
    let y6i = x0i - x2i;
    let x0r = x1r - x3i;
    let x0i = x1i + x3r;
    let x2r = x1r + x3i;
    let x2i = x1i - x3r;
    let y5r = wn4r * (x0r - x0i);
    let y5i = wn4r * (x0r + x0i);
    let y7r = wn4r * (x2r - x2i);
    let y7i = wn4r * (x2r + x2i);

    a[8] = y1r + y5r;
    a[9] = y1i + y5i;
    a[10] = y1r - y5r;
    a[11] = y1i - y5i;
    a[12] = y3r - y7i;
    a[13] = y3i + y7r;
    a[14] = y3r + y7i;
    a[15] = y3i - y7r;
    a[0] = y0r + y4r;
    a[1] = y0i + y4i;
    a[2] = y0r - y4r;
    a[3] = y0i - y4i;
    a[4] = y2r - y6i;
    a[5] = y2i + y6r;
    a[6] = y2r + y6i;
    a[7] = y2i - y6r;
}

/// 8-point leaf for blocks that sit on an odd quarter of their parent.
pub fn radix8_twisted(a: &mut [f64], w: &[f64]) {
    debug_assert!(a.len() >= 16);
    let wn4r = w[1];
    let wk1r = w[2];
    let wk1i = w[3];
    let y0r = a[0] - a[9];
    let y0i = a[1] + a[8];
    let y1r = a[0] + a[9];
    let y1i = a[1] - a[8];
    let x0r = a[4] - a[13];
    let x0i = a[5] + a[12];
    let y2r = wn4r * (x0r - x0i);
    let y2i = wn4r * (x0i + x0r);
    let x0r = a[4] + a[13];
    let x0i = a[5] - a[12];
    let y3r = wn4r * (x0r - x0i);
    let y3i = wn4r * (x0i + x0r);
    let x0r = a[2] - a[11];
    let x0i = a[3] + a[10];
    let y4r = wk1r * x0r - wk1i * x0i;
    let y4i = wk1r * x0i + wk1i * x0r;
    let x0r = a[2] + a[11];
    let x0i = a[3] - a[10];
    let y5r = wk1i * x0r - wk1r * x0i;
    let y5i = wk1i * x0i + wk1r * x0r;
    let x0r = a[6] - a[15];
    let x0i = a[7] + a[14];
    let y6r = wk1i * x0r - wk1r * x0i;
    let y6i = wk1i * x0i + wk1r * x0r;
    let x0r = a[6] + a[15];
    let x0i = a[7] - a[14];
    let y7r = wk1r * x0r - wk1i * x0i;
    let y7i = wk1r * x0i + wk1i * x0r;

    let x0r = y0r + y2r;
    let x0i = y0i + y2i;
    let x1r = y4r + y6r;
    let x1i = y4i + y6i;
    a[0] = x0r + x1r;
    a[1] = x0i + x1i;
    a[2] = x0r - x1r;
    a[3] = x0i - x1i;
    let x0r = y0r - y2r;
    let x0i = y0i - y2i;
    let x1r = y4r - y6r;
    let x1i = y4i - y6i;
    a[4] = x0r - x1i;
    a[5] = x0i + x1r;
    a[6] = x0r + x1i;
    a[7] = x0i - x1r;
    let x0r = y1r - y3i;
    let x0i = y1i + y3r;
    let x1r = y5r - y7r;
    let x1i = y5i - y7i;
    a[8] = x0r + x1r;
    a[9] = x0i + x1i;
    a[10] = x0r - x1r;
    a[11] = x0i - x1i;
    let x0r = y1r + y3i;
    let x0i = y1i - y3r;
    let x1r = y5r + y7r;
    let x1i = y5i + y7i;
    a[12] = x0r - x1i;
    a[13] = x0i + x1r;
    a[14] = x0r + x1i;
    a[15] = x0i - x1r;
}

/// Complete 4-point transform. `sign` is `-1.0` for the forward orientation.
pub fn radix4(a: &mut [f64], sign: f64) {
    debug_assert!(a.len() >= 8);
    let x0r = a[0] + a[4];
    let x0i = a[1] + a[5];
    let x1r = a[0] - a[4];
    let x1i = a[1] - a[5];
    let x2r = a[2] + a[6];
    let x2i = a[3] + a[7];
    let x3r = a[2] - a[6];
    let x3i = a[3] - a[7];
    a[0] = x0r + x2r;
    a[1] = x0i + x2i;
    a[2] = x1r - sign * x3i;
    a[3] = x1i + sign * x3r;
    a[4] = x0r - x2r;
    a[5] = x0i - x2i;
    a[6] = x1r + sign * x3i;
    a[7] = x1i - sign * x3r;
}

/// Complete 2-point transform, identical in both orientations.
#[inline(always)]
pub fn radix2(a: &mut [f64]) {
    debug_assert!(a.len() >= 4);
    let x0r = a[0] - a[2];
    let x0i = a[1] - a[3];
    a[0] += a[2];
    a[1] += a[3];
    a[2] = x0r;
    a[3] = x0i;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(input: &[f64], sign: f64) -> Vec<f64> {
        let n = input.len() / 2;
        let mut out = vec![0.0; input.len()];
        for k in 0..n {
            let (mut re, mut im) = (0.0, 0.0);
            for j in 0..n {
                let ang = sign * 2.0 * core::f64::consts::PI * (j * k) as f64 / n as f64;
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
    fn radix2_matches_naive() {
        let mut a = [1.0, 2.0, -3.0, 0.5];
        let expected = naive(&a, -1.0);
        radix2(&mut a);
        for (x, y) in a.iter().zip(expected.iter()) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn radix4_both_orientations() {
        let input = [1.0, 0.0, 2.0, -1.0, 0.5, 0.25, -1.0, 3.0];
        for sign in [-1.0, 1.0] {
            let mut a = input;
            radix4(&mut a, sign);
            let expected = naive(&input, sign);
            for (x, y) in a.iter().zip(expected.iter()) {
                assert!((x - y).abs() < 1e-12, "sign {sign}: {x} vs {y}");
            }
        }
    }

    #[test]
    fn leaf_spans() {
        assert_eq!(Leaf::Radix16.span(), 32);
        assert_eq!(Leaf::Radix16Twisted.span(), 32);
        assert_eq!(Leaf::Radix8.span(), 16);
        assert_eq!(Leaf::Radix8Twisted.span(), 16);
    }
}
