// Test intent: invalid lengths and short buffers are rejected with typed errors and leave data untouched.

use fft1d::{build_plan, Complex64, Executor, FftError, FftPlanner, Plan};

#[test]
fn zero_length_plan() {
    assert_eq!(build_plan(0).unwrap_err(), FftError::InvalidLength);
    assert_eq!(
        Plan::with_executor(0, Executor::sequential()).unwrap_err(),
        FftError::InvalidLength
    );
    let mut planner = FftPlanner::with_executor(Executor::sequential());
    assert!(planner.plan(0).is_err());
    assert!(planner.is_empty());
}

#[test]
fn buffer_shorter_than_two_n() {
    for n in [16, 12, 997] {
        let plan = Plan::with_executor(n, Executor::sequential()).unwrap();
        let mut buf: Vec<f64> = (0..2 * n - 1).map(|i| i as f64).collect();
        let before = buf.clone();
        assert_eq!(
            plan.forward(&mut buf, 0),
            Err(FftError::BufferTooSmall {
                required: 2 * n,
                available: 2 * n - 1
            })
        );
        assert!(plan.inverse(&mut buf, 0).is_err());
        assert!(plan.inverse_scaled(&mut buf, 0).is_err());
        assert_eq!(buf, before);
    }
}

#[test]
fn offset_past_the_end() {
    let plan = Plan::with_executor(4, Executor::sequential()).unwrap();
    let mut buf = vec![0.0; 8];
    assert_eq!(
        plan.forward(&mut buf, 1),
        Err(FftError::BufferTooSmall {
            required: 8,
            available: 7
        })
    );
    assert_eq!(
        plan.forward(&mut buf, 100),
        Err(FftError::BufferTooSmall {
            required: 8,
            available: 0
        })
    );
}

#[test]
fn complex_slice_too_short() {
    let plan = Plan::with_executor(8, Executor::sequential()).unwrap();
    let mut data = vec![Complex64::new(1.0, 0.0); 7];
    assert!(matches!(
        plan.forward_complex(&mut data),
        Err(FftError::BufferTooSmall { .. })
    ));
    assert!(data.iter().all(|c| *c == Complex64::new(1.0, 0.0)));
}

#[test]
fn errors_are_std_errors() {
    let err: Box<dyn std::error::Error> = Box::new(FftError::ResourceExhausted { threads: 4 });
    assert_eq!(err.to_string(), "could not obtain a worker pool of 4 threads");
}
