/// Double precision complex value laid out as `[re, im]`.
///
/// The `#[repr(C)]` layout matches the interleaved sample buffer used by
/// [`Plan`](crate::fft::Plan), so a `&mut [Complex64]` can be viewed as a
/// `&mut [f64]` of twice the length with [`as_interleaved_mut`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex64 {
    pub re: f64,
    pub im: f64,
}

impl Complex64 {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub const fn zero() -> Self {
        Self { re: 0.0, im: 0.0 }
    }

    /// `exp(i * theta)`
    pub fn expi(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { re: cos, im: sin }
    }

    #[inline(always)]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    #[inline(always)]
    pub fn scale(self, k: f64) -> Self {
        Self {
            re: self.re * k,
            im: self.im * k,
        }
    }

    /// Squared magnitude.
    #[inline(always)]
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    #[inline(always)]
    pub fn norm(self) -> f64 {
        self.norm_sqr().sqrt()
    }
}

impl core::ops::Neg for Complex64 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl core::ops::Add for Complex64 {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl core::ops::Sub for Complex64 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
}

impl core::ops::Mul for Complex64 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

impl core::ops::Mul<f64> for Complex64 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, k: f64) -> Self {
        self.scale(k)
    }
}

/// View a complex slice as interleaved `[re0, im0, re1, im1, ...]` doubles.
pub fn as_interleaved_mut(data: &mut [Complex64]) -> &mut [f64] {
    let len = data.len() * 2;
    // SAFETY: Complex64 is #[repr(C)] with exactly two f64 fields and no
    // padding, so the memory is a valid [f64] of twice the length with the
    // same alignment. The returned borrow keeps `data` exclusively borrowed.
    unsafe { core::slice::from_raw_parts_mut(data.as_mut_ptr() as *mut f64, len) }
}

/// Copy interleaved doubles into complex values. Trailing odd doubles are ignored.
pub fn from_interleaved(data: &[f64]) -> Vec<Complex64> {
    data.chunks_exact(2)
        .map(|c| Complex64::new(c[0], c[1]))
        .collect()
}

/// Flatten complex values into interleaved doubles.
pub fn to_interleaved(data: &[Complex64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(data.len() * 2);
    for c in data {
        out.push(c.re);
        out.push(c.im);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_two_doubles() {
        assert_eq!(core::mem::size_of::<Complex64>(), 16);
        assert_eq!(core::mem::align_of::<Complex64>(), core::mem::align_of::<f64>());
    }

    #[test]
    fn interleaved_view_aliases_fields() {
        let mut data = [Complex64::new(1.0, 2.0), Complex64::new(3.0, 4.0)];
        {
            let flat = as_interleaved_mut(&mut data);
            assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0]);
            flat[3] = -4.0;
        }
        assert_eq!(data[1], Complex64::new(3.0, -4.0));
    }

    #[test]
    fn arithmetic() {
        let a = Complex64::new(1.0, 2.0);
        let b = Complex64::new(3.0, -1.0);
        assert_eq!(a + b, Complex64::new(4.0, 1.0));
        assert_eq!(a - b, Complex64::new(-2.0, 3.0));
        assert_eq!(a * b, Complex64::new(5.0, 5.0));
        assert_eq!(a.conj(), Complex64::new(1.0, -2.0));
        assert_eq!(-a, Complex64::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Complex64::new(2.0, 4.0));
        assert_eq!(Complex64::new(3.0, 4.0).norm(), 5.0);
    }

    #[test]
    fn interleave_round_trip() {
        let data = vec![Complex64::new(0.5, -0.5), Complex64::new(2.0, 1.0)];
        let flat = to_interleaved(&data);
        assert_eq!(flat, vec![0.5, -0.5, 2.0, 1.0]);
        assert_eq!(from_interleaved(&flat), data);
    }
}
