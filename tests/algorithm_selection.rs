// Test intent: plan building picks the documented algorithm per length and all paths agree numerically.

use fft1d::{build_plan, select_algorithm, Algorithm, Executor, FftError, Plan};

#[test]
fn representative_lengths() {
    assert_eq!(build_plan(16).unwrap().algorithm(), Algorithm::SplitRadix);
    assert_eq!(build_plan(12).unwrap().algorithm(), Algorithm::MixedRadix);
    assert_eq!(build_plan(997).unwrap().algorithm(), Algorithm::Bluestein);
}

#[test]
fn residual_threshold() {
    // 5 * 199: residual 199 stays mixed radix, 5 * 211 does not
    assert_eq!(select_algorithm(995), Ok(Algorithm::MixedRadix));
    assert_eq!(select_algorithm(1055), Ok(Algorithm::Bluestein));
    // 11 * 13 * 2 = 286 but residual 143
    assert_eq!(select_algorithm(286), Ok(Algorithm::MixedRadix));
    assert_eq!(select_algorithm(0), Err(FftError::InvalidLength));
}

#[test]
fn plan_tables_match_algorithm() {
    let exec = Executor::sequential();
    let s = Plan::with_executor(16, exec.clone()).unwrap();
    assert_eq!((s.factors(), s.padded_len(), s.scratch_len()), (None, None, 0));

    let m = Plan::with_executor(12, exec.clone()).unwrap();
    assert_eq!(m.factors(), Some(&[4, 3][..]));
    assert_eq!(m.padded_len(), None);

    let b = Plan::with_executor(997, exec).unwrap();
    assert_eq!(b.padded_len(), Some(2048));
    assert_eq!(b.factors(), None);
}

/// One signal per path, checked bin by bin against the DFT definition.
#[test]
fn paths_agree_on_shared_reference() {
    let reference = |x: &[f64], k: usize| -> (f64, f64) {
        let n = x.len() / 2;
        let (mut re, mut im) = (0.0, 0.0);
        for j in 0..n {
            let angle = -2.0 * std::f64::consts::PI * ((j * k) % n) as f64 / n as f64;
            let (s, c) = angle.sin_cos();
            re += x[2 * j] * c - x[2 * j + 1] * s;
            im += x[2 * j] * s + x[2 * j + 1] * c;
        }
        (re, im)
    };
    let exec = Executor::sequential();
    for n in [256, 240, 251] {
        let plan = Plan::with_executor(n, exec.clone()).unwrap();
        let x: Vec<f64> = (0..2 * n).map(|i| ((i * 31) % 23) as f64 - 11.0).collect();
        let mut buf = x.clone();
        plan.forward(&mut buf, 0).unwrap();
        for k in [0, 1, 7, n / 2, n - 1] {
            let (re, im) = reference(&x, k);
            assert!((buf[2 * k] - re).abs() < 1e-8, "n={n} k={k}");
            assert!((buf[2 * k + 1] - im).abs() < 1e-8, "n={n} k={k}");
        }
    }
    assert_eq!(select_algorithm(256), Ok(Algorithm::SplitRadix));
    assert_eq!(select_algorithm(240), Ok(Algorithm::MixedRadix));
    assert_eq!(select_algorithm(251), Ok(Algorithm::Bluestein));
}
