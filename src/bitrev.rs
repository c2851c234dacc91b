//! Bit-reversal permutation for the split-radix output.

/// How the permutation treats the values it moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permutation {
    /// Plain bit reversal.
    Plain,
    /// Bit reversal followed by negating every imaginary part.
    Conjugate,
    /// Bit reversal followed by mapping index `k` to `n - k`.
    Mirror,
}

/// Bit-reversal table for `n` complex points (`n` a power of two).
///
/// Built by recursive doubling: the table for `2m` points is the table for
/// `m` points with every entry doubled, followed by the same entries plus one.
#[derive(Debug, Clone)]
pub struct BitReversal {
    table: Vec<usize>,
}

impl BitReversal {
    pub fn new(n: usize) -> Self {
        let mut table = Vec::with_capacity(n.max(1));
        table.push(0);
        while table.len() < n {
            let len = table.len();
            for r in table.iter_mut() {
                *r <<= 1;
            }
            for i in 0..len {
                let r = table[i] + 1;
                table.push(r);
            }
        }
        Self { table }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.table
    }

    /// Reorder the interleaved block `a` (exactly `2 * len()` doubles).
    pub fn apply(&self, a: &mut [f64], mode: Permutation) {
        let n = self.table.len();
        debug_assert_eq!(a.len(), 2 * n);
        for (i, &j) in self.table.iter().enumerate() {
            if i < j {
                a.swap(2 * i, 2 * j);
                a.swap(2 * i + 1, 2 * j + 1);
            }
        }
        match mode {
            Permutation::Plain => {}
            Permutation::Conjugate => {
                for im in a.iter_mut().skip(1).step_by(2) {
                    *im = -*im;
                }
            }
            Permutation::Mirror => {
                if n > 2 {
                    let (_, tail) = a.split_at_mut(2);
                    tail.reverse();
                    // reversing doubles swapped re/im inside each pair
                    for pair in tail.chunks_exact_mut(2) {
                        pair.swap(0, 1);
                    }
                }
            }
        }
    }
}
