//! Runs the `switchboard` binary and checks what it prints.

use std::process::{Command, Output};

const REFERENCE_LINES: [&str; 12] = [
    "Living room Lamp is ON",
    "Living room Lamp is OFF",
    "Bedroom Ceiling Fan is ON",
    "Bedroom Ceiling Fan is OFF",
    "Undoing last command...",
    "Bedroom Ceiling Fan is ON",
    "Undoing last command...",
    "Bedroom Ceiling Fan is OFF",
    "Undoing last command...",
    "Living room Lamp is ON",
    "Undoing last command...",
    "Living room Lamp is OFF",
];

fn run_with_trace_logging() -> Output {
    Command::new(env!("CARGO_BIN_EXE_switchboard"))
        .env("RUST_LOG", "trace")
        .output()
        .expect("switchboard binary should start")
}

#[test]
fn binary_exits_successfully() {
    let output = run_with_trace_logging();
    assert!(output.status.success(), "status: {:?}", output.status);
}

#[test]
fn stdout_is_exactly_the_reference_lines() {
    let output = run_with_trace_logging();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, REFERENCE_LINES);
}

#[test]
fn tracing_output_stays_off_stdout() {
    let output = run_with_trace_logging();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    for marker in ["TRACE", "DEBUG", "INFO", "WARN", "ERROR", "switchboard::"] {
        assert!(!stdout.contains(marker), "stdout carries {marker}: {stdout}");
    }
    assert!(
        stderr.contains("command executed"),
        "trace logging should reach stderr: {stderr}"
    );
}
