// Test intent: FFT1D_* environment variables reach ExecutorConfig::from_env, and bad values fall back to defaults.

use std::process::Command;

use fft1d::executor::{FOUR_THREAD_THRESHOLD, TWO_THREAD_THRESHOLD};
use fft1d::ExecutorConfig;

#[test]
fn print_config() {
    let c = ExecutorConfig::from_env();
    println!(
        "config={} {} {}",
        c.threads, c.two_thread_threshold, c.four_thread_threshold
    );
}

fn config_with_env(vars: &[(&str, &str)]) -> (usize, usize, usize) {
    let exe = std::env::current_exe().unwrap();
    let mut cmd = Command::new(&exe);
    cmd.env_remove("FFT1D_THREADS")
        .env_remove("FFT1D_TWO_THREAD_THRESHOLD")
        .env_remove("FFT1D_FOUR_THREAD_THRESHOLD");
    for (k, v) in vars {
        cmd.env(k, v);
    }
    let output = cmd
        .args(["--exact", "print_config", "--nocapture", "--test-threads=1"])
        .output()
        .expect("run print_config");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let line = stdout
        .split("config=")
        .nth(1)
        .and_then(|rest| rest.lines().next())
        .expect("config line");
    let values: Vec<usize> = line
        .split_whitespace()
        .map(|v| v.parse().unwrap())
        .collect();
    (values[0], values[1], values[2])
}

#[test]
fn overrides_are_applied() {
    let got = config_with_env(&[
        ("FFT1D_THREADS", "3"),
        ("FFT1D_TWO_THREAD_THRESHOLD", "128"),
        ("FFT1D_FOUR_THREAD_THRESHOLD", "1024"),
    ]);
    assert_eq!(got, (3, 128, 1024));
}

#[test]
fn unset_variables_use_defaults() {
    let got = config_with_env(&[]);
    assert_eq!(
        got,
        (
            num_cpus::get().max(1),
            TWO_THREAD_THRESHOLD,
            FOUR_THREAD_THRESHOLD
        )
    );
}

#[test]
fn invalid_values_fall_back() {
    let got = config_with_env(&[
        ("FFT1D_THREADS", "0"),
        ("FFT1D_TWO_THREAD_THRESHOLD", "lots"),
        ("FFT1D_FOUR_THREAD_THRESHOLD", "-5"),
    ]);
    assert_eq!(
        got,
        (
            num_cpus::get().max(1),
            TWO_THREAD_THRESHOLD,
            FOUR_THREAD_THRESHOLD
        )
    );
}
