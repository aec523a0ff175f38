use std::{
    fs,
    process::{Command, Output},
};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sciexpr")).args(args)
                                               .env_remove("RUST_LOG")
                                               .env_remove("SCIEXPR_ANGLE_MODE")
                                               .env_remove("SCIEXPR_MAX_DEPTH")
                                               .output()
                                               .expect("Failed to run the sciexpr binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn evaluates_expressions_starting_with_minus() {
    for (expression, expected) in [("-2+3", "1"), ("-3!", "-6"), ("-cos(pi)", "1")] {
        let output = run(&[expression]);
        assert!(output.status.success(), "'{expression}' was rejected: {output:?}");
        assert_eq!(stdout(&output), expected);
    }
}

#[test]
fn angle_mode_option_applies() {
    let output = run(&["--angle-mode", "degrees", "-sin(90)"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "-1");
}

#[test]
fn failures_are_reported_once_and_exit_nonzero() {
    let output = run(&["1/0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Division by zero.").count(), 1, "stderr was: {stderr}");
    assert_eq!(stdout(&output), "");
}

#[test]
fn file_mode_evaluates_each_line() {
    let path = std::env::temp_dir().join(format!("sciexpr-cli-{}.txt", std::process::id()));
    fs::write(&path, "# comment\n2+3*4\n\n-2^2\n").unwrap();

    let output = run(&["--file", path.to_str().unwrap()]);
    fs::remove_file(&path).ok();

    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout(&output), "14\n-4");
}
