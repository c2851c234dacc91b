//! Butterfly passes for the mixed-radix driver.
//!
//! A pass of factor `p` reads `l1 * p` groups of `ido` doubles from `input`
//! and writes `p` groups of `l1 * ido` doubles to `output`, multiplying every
//! output value except the first of each group by its stage twiddle. `sign`
//! is `-1.0` for the forward transform and `+1.0` for the inverse; it
//! conjugates the twiddles and the internal rotations.

/// Factor handled by a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Two,
    Three,
    Four,
    Five,
    /// Any other factor, always an odd prime of at least 7.
    Generic(usize),
}

impl From<usize> for Radix {
    fn from(p: usize) -> Self {
        match p {
            2 => Radix::Two,
            3 => Radix::Three,
            4 => Radix::Four,
            5 => Radix::Five,
            p => Radix::Generic(p),
        }
    }
}

/// Which buffer holds the result of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Output,
    /// The general pass used the output as scratch and finished in `input`.
    Input,
}

impl Radix {
    pub fn size(self) -> usize {
        match self {
            Radix::Two => 2,
            Radix::Three => 3,
            Radix::Four => 4,
            Radix::Five => 5,
            Radix::Generic(p) => p,
        }
    }

    /// Run one pass. `ido` counts doubles, `w` starts at this stage's twiddles.
    pub fn pass(
        self,
        ido: usize,
        l1: usize,
        input: &mut [f64],
        output: &mut [f64],
        w: &[f64],
        sign: f64,
    ) -> Landing {
        match self {
            Radix::Two => pass2(ido, l1, input, output, w, sign),
            Radix::Three => pass3(ido, l1, input, output, w, sign),
            Radix::Four => pass4(ido, l1, input, output, w, sign),
            Radix::Five => pass5(ido, l1, input, output, w, sign),
            Radix::Generic(p) => return pass_general(p, ido, l1, input, output, w, sign),
        }
        Landing::Output
    }
}

#[inline(always)]
fn twiddle(w: &[f64], at: usize, sign: f64) -> (f64, f64) {
    (w[at], sign * w[at + 1])
}

fn pass2(ido: usize, l1: usize, input: &[f64], out: &mut [f64], w: &[f64], sign: f64) {
    let stride = ido * l1;
    if ido <= 2 {
        for k in 0..l1 {
            let x = 2 * k * ido;
            let (r1, i1) = (input[x], input[x + 1]);
            let (r2, i2) = (input[x + ido], input[x + ido + 1]);
            let o = k * ido;
            out[o] = r1 + r2;
            out[o + 1] = i1 + i2;
            out[o + stride] = r1 - r2;
            out[o + stride + 1] = i1 - i2;
        }
        return;
    }
    for k in 0..l1 {
        for i in (0..ido).step_by(2) {
            let x = 2 * k * ido + i;
            let (r1, i1) = (input[x], input[x + 1]);
            let (r2, i2) = (input[x + ido], input[x + ido + 1]);
            let (w1r, w1i) = twiddle(w, i, sign);
            let tr = r1 - r2;
            let ti = i1 - i2;
            let o = k * ido + i;
            out[o] = r1 + r2;
            out[o + 1] = i1 + i2;
            out[o + stride] = w1r * tr - w1i * ti;
            out[o + stride + 1] = w1r * ti + w1i * tr;
        }
    }
}

const TAUR: f64 = -0.5;
const TAUI: f64 = 0.866025403784438707610604524234076962;

fn pass3(ido: usize, l1: usize, input: &[f64], out: &mut [f64], w: &[f64], sign: f64) {
    let stride = l1 * ido;
    for k in 0..l1 {
        let base = 3 * k * ido;
        let obase = k * ido;
        for i in (0..ido).step_by(2) {
            let x = base + i;
            let (r0, i0) = (input[x], input[x + 1]);
            let (r1, i1) = (input[x + ido], input[x + ido + 1]);
            let (r2, i2) = (input[x + 2 * ido], input[x + 2 * ido + 1]);

            let tr2 = r1 + r2;
            let cr2 = r0 + TAUR * tr2;
            let ti2 = i1 + i2;
            let ci2 = i0 + TAUR * ti2;
            let cr3 = sign * TAUI * (r1 - r2);
            let ci3 = sign * TAUI * (i1 - i2);

            let o1 = obase + i;
            let o2 = o1 + stride;
            let o3 = o2 + stride;
            out[o1] = r0 + tr2;
            out[o1 + 1] = i0 + ti2;
            if ido == 2 {
                out[o2] = cr2 - ci3;
                out[o2 + 1] = ci2 + cr3;
                out[o3] = cr2 + ci3;
                out[o3 + 1] = ci2 - cr3;
            } else {
                let dr2 = cr2 - ci3;
                let dr3 = cr2 + ci3;
                let di2 = ci2 + cr3;
                let di3 = ci2 - cr3;
                let (w1r, w1i) = twiddle(w, i, sign);
                let (w2r, w2i) = twiddle(w, i + ido, sign);
                out[o2] = w1r * dr2 - w1i * di2;
                out[o2 + 1] = w1r * di2 + w1i * dr2;
                out[o3] = w2r * dr3 - w2i * di3;
                out[o3 + 1] = w2r * di3 + w2i * dr3;
            }
        }
    }
}

fn pass4(ido: usize, l1: usize, input: &[f64], out: &mut [f64], w: &[f64], sign: f64) {
    let stride = l1 * ido;
    for k in 0..l1 {
        let base = 4 * k * ido;
        let obase = k * ido;
        for i in (0..ido).step_by(2) {
            let x = base + i;
            let (r1, i1) = (input[x], input[x + 1]);
            let (r2, i2) = (input[x + ido], input[x + ido + 1]);
            let (r3, i3) = (input[x + 2 * ido], input[x + 2 * ido + 1]);
            let (r4, i4) = (input[x + 3 * ido], input[x + 3 * ido + 1]);

            let ti1 = i1 - i3;
            let ti2 = i1 + i3;
            let tr4 = i4 - i2;
            let ti3 = i2 + i4;
            let tr1 = r1 - r3;
            let tr2 = r1 + r3;
            let ti4 = r2 - r4;
            let tr3 = r2 + r4;

            let o1 = obase + i;
            let o2 = o1 + stride;
            let o3 = o2 + stride;
            let o4 = o3 + stride;
            out[o1] = tr2 + tr3;
            out[o1 + 1] = ti2 + ti3;
            if ido == 2 {
                out[o2] = tr1 + sign * tr4;
                out[o2 + 1] = ti1 + sign * ti4;
                out[o3] = tr2 - tr3;
                out[o3 + 1] = ti2 - ti3;
                out[o4] = tr1 - sign * tr4;
                out[o4 + 1] = ti1 - sign * ti4;
            } else {
                let cr3 = tr2 - tr3;
                let ci3 = ti2 - ti3;
                let cr2 = tr1 + sign * tr4;
                let cr4 = tr1 - sign * tr4;
                let ci2 = ti1 + sign * ti4;
                let ci4 = ti1 - sign * ti4;
                let (w1r, w1i) = twiddle(w, i, sign);
                let (w2r, w2i) = twiddle(w, i + ido, sign);
                let (w3r, w3i) = twiddle(w, i + 2 * ido, sign);
                out[o2] = w1r * cr2 - w1i * ci2;
                out[o2 + 1] = w1r * ci2 + w1i * cr2;
                out[o3] = w2r * cr3 - w2i * ci3;
                out[o3 + 1] = w2r * ci3 + w2i * cr3;
                out[o4] = w3r * cr4 - w3i * ci4;
                out[o4 + 1] = w3r * ci4 + w3i * cr4;
            }
        }
    }
}

const TR11: f64 = 0.309016994374947451262869435595348477;
const TI11: f64 = 0.951056516295153531181938433292089030;
const TR12: f64 = -0.809016994374947340240566973079694435;
const TI12: f64 = 0.587785252292473248125759255344746634;

fn pass5(ido: usize, l1: usize, input: &[f64], out: &mut [f64], w: &[f64], sign: f64) {
    let stride = l1 * ido;
    for k in 0..l1 {
        let base = 5 * k * ido;
        let obase = k * ido;
        for i in (0..ido).step_by(2) {
            let x = base + i;
            let (r0, i0) = (input[x], input[x + 1]);
            let (r1, i1) = (input[x + ido], input[x + ido + 1]);
            let (r2, i2) = (input[x + 2 * ido], input[x + 2 * ido + 1]);
            let (r3, i3) = (input[x + 3 * ido], input[x + 3 * ido + 1]);
            let (r4, i4) = (input[x + 4 * ido], input[x + 4 * ido + 1]);

            let ti5 = i1 - i4;
            let ti2 = i1 + i4;
            let ti4 = i2 - i3;
            let ti3 = i2 + i3;
            let tr5 = r1 - r4;
            let tr2 = r1 + r4;
            let tr4 = r2 - r3;
            let tr3 = r2 + r3;
            let cr2 = r0 + TR11 * tr2 + TR12 * tr3;
            let ci2 = i0 + TR11 * ti2 + TR12 * ti3;
            let cr3 = r0 + TR12 * tr2 + TR11 * tr3;
            let ci3 = i0 + TR12 * ti2 + TR11 * ti3;
            let cr5 = sign * (TI11 * tr5 + TI12 * tr4);
            let ci5 = sign * (TI11 * ti5 + TI12 * ti4);
            let cr4 = sign * (TI12 * tr5 - TI11 * tr4);
            let ci4 = sign * (TI12 * ti5 - TI11 * ti4);

            let o1 = obase + i;
            let o2 = o1 + stride;
            let o3 = o2 + stride;
            let o4 = o3 + stride;
            let o5 = o4 + stride;
            out[o1] = r0 + tr2 + tr3;
            out[o1 + 1] = i0 + ti2 + ti3;
            let dr2 = cr2 - ci5;
            let di2 = ci2 + cr5;
            let dr3 = cr3 - ci4;
            let di3 = ci3 + cr4;
            let dr4 = cr3 + ci4;
            let di4 = ci3 - cr4;
            let dr5 = cr2 + ci5;
            let di5 = ci2 - cr5;
            if ido == 2 {
                out[o2] = dr2;
                out[o2 + 1] = di2;
                out[o3] = dr3;
                out[o3 + 1] = di3;
                out[o4] = dr4;
                out[o4 + 1] = di4;
                out[o5] = dr5;
                out[o5 + 1] = di5;
            } else {
                let (w1r, w1i) = twiddle(w, i, sign);
                let (w2r, w2i) = twiddle(w, i + ido, sign);
                let (w3r, w3i) = twiddle(w, i + 2 * ido, sign);
                let (w4r, w4i) = twiddle(w, i + 3 * ido, sign);
                out[o2] = w1r * dr2 - w1i * di2;
                out[o2 + 1] = w1r * di2 + w1i * dr2;
                out[o3] = w2r * dr3 - w2i * di3;
                out[o3 + 1] = w2r * di3 + w2i * dr3;
                out[o4] = w3r * dr4 - w3i * di4;
                out[o4 + 1] = w3r * di4 + w3i * dr4;
                out[o5] = w4r * dr5 - w4i * di5;
                out[o5 + 1] = w4r * di5 + w4i * dr5;
            }
        }
    }
}

/// Pass for an odd prime factor `ip >= 7`.
///
/// Works on symmetric pairs `j`, `ip - j` so that each rotation is applied
/// once per pair. The first entry of every twiddle block holds the root
/// `exp(i * 2pi * j / ip)`. With a single complex value per group the
/// result ends in `out`; otherwise the trailing twiddle multiply writes it
/// back into `input`.
fn pass_general(
    ip: usize,
    ido: usize,
    l1: usize,
    input: &mut [f64],
    out: &mut [f64],
    w: &[f64],
    sign: f64,
) -> Landing {
    let idl1 = ido * l1;
    let ipph = (ip + 1) / 2;
    let idp = ip * ido;

    for j in 1..ipph {
        let jc = ip - j;
        for k in 0..l1 {
            let src = k * ido * ip;
            let dst = k * ido;
            for i in 0..ido {
                let a = input[src + j * ido + i];
                let b = input[src + jc * ido + i];
                out[dst + j * l1 * ido + i] = a + b;
                out[dst + jc * l1 * ido + i] = a - b;
            }
        }
    }
    for k in 0..l1 {
        let dst = k * ido;
        let src = dst * ip;
        out[dst..dst + ido].copy_from_slice(&input[src..src + ido]);
    }

    let last = (ip - 1) * idl1;
    for l in 1..ipph {
        let lc = ip - l;
        let t1 = l * idl1;
        let t2 = lc * idl1;
        let idl = 2 + (l - 1) * ido;
        let (w1r, w1i) = twiddle(w, idl - 2, sign);
        for ik in 0..idl1 {
            input[ik + t1] = out[ik] + w1r * out[ik + idl1];
            input[ik + t2] = w1i * out[ik + last];
        }
        // rotation index j * l taken modulo ip
        let inc = l * ido;
        let mut idlj = idl;
        for j in 2..ipph {
            let jc = ip - j;
            idlj += inc;
            if idlj > idp {
                idlj -= idp;
            }
            let (w2r, w2i) = twiddle(w, idlj - 2, sign);
            let t5 = j * idl1;
            let t6 = jc * idl1;
            for ik in 0..idl1 {
                input[ik + t1] += w2r * out[ik + t5];
                input[ik + t2] += w2i * out[ik + t6];
            }
        }
    }
    for j in 1..ipph {
        let t = j * idl1;
        for ik in 0..idl1 {
            let v = out[ik + t];
            out[ik] += v;
        }
    }
    for j in 1..ipph {
        let jc = ip - j;
        let t1 = j * idl1;
        let t2 = jc * idl1;
        for ik in (1..idl1).step_by(2) {
            let x1 = ik + t1;
            let x2 = ik + t2;
            let (a_re, a_im) = (input[x1 - 1], input[x1]);
            let (b_re, b_im) = (input[x2 - 1], input[x2]);
            out[x1 - 1] = a_re - b_im;
            out[x2 - 1] = a_re + b_im;
            out[x1] = a_im + b_re;
            out[x2] = a_im - b_re;
        }
    }

    if ido == 2 {
        return Landing::Output;
    }

    input[..idl1].copy_from_slice(&out[..idl1]);
    let group = l1 * ido;
    for j in 1..ip {
        for k in 0..l1 {
            let x = k * ido + j * group;
            input[x] = out[x];
            input[x + 1] = out[x + 1];
        }
    }
    for j in 1..ip {
        let block = (j - 1) * ido;
        for k in 0..l1 {
            let row = k * ido + j * group;
            for i in (3..ido).step_by(2) {
                let (w1r, w1i) = twiddle(w, block + i - 1, sign);
                let x = row + i;
                let (o_re, o_im) = (out[x - 1], out[x]);
                input[x - 1] = w1r * o_re - w1i * o_im;
                input[x] = w1r * o_im + w1i * o_re;
            }
        }
    }
    Landing::Input
}
