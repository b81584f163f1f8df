use std::process::{Command, Output};

fn run_with_args(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_stretch-timer"))
        .args(args)
        .output()
        .expect("failed to spawn stretch-timer")
}

#[test]
fn missing_argument_prints_usage_and_exits_nonzero() {
    let output = run_with_args(&[]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Usage: stretch-timer"),
        "stderr was: {}",
        stderr
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn non_numeric_argument_exits_nonzero() {
    let output = run_with_args(&["abc"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid duration"), "stderr was: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn negative_argument_exits_nonzero() {
    let output = run_with_args(&["-5"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("negative"), "stderr was: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn extra_arguments_print_usage_and_exit_nonzero() {
    let output = run_with_args(&["5", "10"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Usage: stretch-timer"),
        "stderr was: {}",
        stderr
    );
}
