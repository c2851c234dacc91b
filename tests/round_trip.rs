// Test intent: inverse_scaled(forward(x)) recovers x and forward is linear, for every algorithm.

use fft1d::{Executor, Plan};
use proptest::prelude::*;

fn plan(n: usize) -> Plan {
    Plan::with_executor(n, Executor::sequential()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip(n in 1usize..=420, ref signal in proptest::collection::vec(-1.0f64..1.0, 840)) {
        let x: Vec<f64> = signal.iter().take(2 * n).cloned().collect();
        let plan = plan(n);
        let mut buf = x.clone();
        plan.forward(&mut buf, 0).unwrap();
        plan.inverse_scaled(&mut buf, 0).unwrap();
        for (i, (a, b)) in buf.iter().zip(&x).enumerate() {
            prop_assert!((a - b).abs() < 1e-9, "n={} [{}]: {} vs {}", n, i, a, b);
        }
    }

    #[test]
    fn prop_linearity(
        n in 1usize..=300,
        a in -2.0f64..2.0,
        b in -2.0f64..2.0,
        ref xs in proptest::collection::vec(-1.0f64..1.0, 600),
        ref ys in proptest::collection::vec(-1.0f64..1.0, 600),
    ) {
        let x: Vec<f64> = xs.iter().take(2 * n).cloned().collect();
        let y: Vec<f64> = ys.iter().take(2 * n).cloned().collect();
        let plan = plan(n);

        let mut mix: Vec<f64> = x.iter().zip(&y).map(|(x, y)| a * x + b * y).collect();
        plan.forward(&mut mix, 0).unwrap();
        let mut fx = x.clone();
        plan.forward(&mut fx, 0).unwrap();
        let mut fy = y.clone();
        plan.forward(&mut fy, 0).unwrap();

        let tol = 1e-10 * n as f64 + 1e-12;
        for i in 0..2 * n {
            let want = a * fx[i] + b * fy[i];
            prop_assert!((mix[i] - want).abs() < tol, "n={} [{}]: {} vs {}", n, i, mix[i], want);
        }
    }
}

#[test]
fn round_trip_large_sizes() {
    for n in [1 << 12, 1 << 16, 3 * 5 * 7 * 11 * 13, 4099, 65537] {
        let plan = plan(n);
        let x: Vec<f64> = (0..2 * n).map(|i| ((i * 2654435761) % 1000) as f64 / 500.0 - 1.0).collect();
        let mut buf = x.clone();
        plan.forward(&mut buf, 0).unwrap();
        plan.inverse_scaled(&mut buf, 0).unwrap();
        let err = buf
            .iter()
            .zip(&x)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        assert!(err < 1e-9, "n={n}: max error {err}");
    }
}

#[test]
fn unscaled_inverse_multiplies_by_n() {
    let n = 30;
    let plan = plan(n);
    let x: Vec<f64> = (0..2 * n).map(|i| (i as f64).sqrt()).collect();
    let mut buf = x.clone();
    plan.forward(&mut buf, 0).unwrap();
    plan.inverse(&mut buf, 0).unwrap();
    for (a, b) in buf.iter().zip(&x) {
        assert!((a - n as f64 * b).abs() < 1e-9);
    }
}
