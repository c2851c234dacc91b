// Test intent: caller scratch, complex-slice entry points and the planner cache give the same results as the plain API.

use std::sync::Arc;

use fft1d::{Complex64, Executor, FftPlanner, Plan};

fn signal(n: usize) -> Vec<f64> {
    (0..2 * n).map(|i| (i as f64 * 0.73).cos()).collect()
}

#[test]
fn scratch_path_matches_allocating_path() {
    for n in [512, 360, 997] {
        let plan = Plan::with_executor(n, Executor::sequential()).unwrap();
        let x = signal(n);
        let mut scratch = vec![f64::NAN; plan.scratch_len() + 3];

        let mut a = x.clone();
        plan.forward(&mut a, 0).unwrap();
        let mut b = x.clone();
        plan.forward_with_scratch(&mut b, 0, &mut scratch).unwrap();
        assert_eq!(a, b, "forward n={n}");

        plan.inverse(&mut a, 0).unwrap();
        plan.inverse_with_scratch(&mut b, 0, &mut scratch).unwrap();
        assert_eq!(a, b, "inverse n={n}");
    }
}

#[test]
fn complex_slices_match_interleaved() {
    let n = 45;
    let plan = Plan::with_executor(n, Executor::sequential()).unwrap();
    let x = signal(n);
    let mut flat = x.clone();
    plan.forward(&mut flat, 0).unwrap();

    let mut data = fft1d::num::from_interleaved(&x);
    plan.forward_complex(&mut data).unwrap();
    assert_eq!(fft1d::num::to_interleaved(&data), flat);

    plan.inverse_complex(&mut data).unwrap();
    for (c, orig) in data.iter().zip(x.chunks_exact(2)) {
        let want = Complex64::new(orig[0], orig[1]) * n as f64;
        assert!((*c - want).norm() < 1e-9);
    }
}

#[test]
fn longer_complex_slice_only_touches_first_n() {
    let plan = Plan::with_executor(4, Executor::sequential()).unwrap();
    let mut data = vec![Complex64::new(1.0, 1.0); 6];
    plan.forward_complex(&mut data).unwrap();
    assert_eq!(data[0], Complex64::new(4.0, 4.0));
    assert_eq!(data[4], Complex64::new(1.0, 1.0));
    assert_eq!(data[5], Complex64::new(1.0, 1.0));
}

#[test]
fn planner_caches_by_length() {
    let exec = Executor::sequential();
    let mut planner = FftPlanner::with_executor(exec);
    let a = planner.plan(997).unwrap();
    let b = planner.plan(12).unwrap();
    let c = planner.plan(997).unwrap();
    assert!(Arc::ptr_eq(&a, &c));
    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(planner.len(), 2);
    assert_eq!(a.executor().config().threads, 1);
}

#[test]
fn default_planner_uses_shared_executor() {
    let mut planner = FftPlanner::default();
    let plan = planner.plan(8).unwrap();
    assert_eq!(plan.executor().config(), Executor::shared().config());
}
