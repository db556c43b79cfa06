#![cfg(feature = "cli")]

use clap::Parser;
use std::process::Command;
use termlog::cli::{Cli, CliValue, LogLevel};

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_termlog"))
        .args(args)
        .output()
        .expect("failed to run termlog")
}

#[test]
fn parse_arguments() {
    let cli = Cli::try_parse_from(["termlog", "--log-level", "w", "info", "count=%d", "5"]).unwrap();
    assert_eq!(cli.log_level, "w");
    assert_eq!(cli.level, LogLevel::Info);
    assert_eq!(
        cli.values(),
        [CliValue::Str("count=%d".into()), CliValue::Int(5)]
    );
}

#[test]
fn template_stays_text_even_if_numeric() {
    let cli = Cli::try_parse_from(["termlog", "debug", "42", "7"]).unwrap();
    assert_eq!(cli.values(), [CliValue::Str("42".into()), CliValue::Int(7)]);
}

#[test]
fn unknown_level_is_rejected() {
    assert!(Cli::try_parse_from(["termlog", "loud", "x"]).is_err());
}

#[test]
fn info_line_on_stdout() {
    let output = run(&["--color", "never", "info", "count=%d", "5"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.ends_with(": [INFO] count=5\n"), "{stdout:?}");
    assert!(stdout.contains("termlog.rs:"), "{stdout:?}");
}

#[test]
fn filtered_line_prints_nothing() {
    let output = run(&["--log-level", "warn", "info", "dropped"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn stderr_target() {
    let output = run(&["--stderr", "--color", "never", "warning", "careful"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.ends_with("[WARNING] careful\n"));
}

#[test]
fn fatal_exits_with_status_one() {
    let output = run(&["--color", "never", "fatal", "config missing: %s", "app.toml"]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.ends_with("[ERROR] config missing: app.toml\n"), "{stdout:?}");
}

#[test]
fn forced_colors() {
    let output = run(&["--color", "always", "error", "bad"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.ends_with("\x1b[31m[ERROR] bad\x1b[0m\n"), "{stdout:?}");
}
