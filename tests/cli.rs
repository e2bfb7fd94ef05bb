//! End-to-end tests for the ana-smoke binary
//!
//! Each test runs the built binary and checks its standard streams.

use std::process::{Command, Output};

const TRANSCRIPT: &str = "\
Bonjour Alain! Ana SUPERIA 2025
Calcul: 42 + 58 = 100
Langages supportes:
   1. JavaScript
   2. Python
   3. TypeScript
   4. Java
GPU: RTX 3070 avec 8GB VRAM

Tous les tests Java ont reussi!
";

/// Run the binary with the given arguments and a clean logging environment
fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ana-smoke"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run ana-smoke")
}

#[test]
fn test_nominal_run() {
    let output = run(&[]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), TRANSCRIPT);
}

#[test]
fn test_arguments_are_ignored() {
    let plain = run(&[]);
    for args in [&["--help", "foo"][..], &["--version"], &["-h"], &["a", "--", "-b"]] {
        let output = run(args);
        assert!(output.status.success(), "args {args:?} failed");
        assert_eq!(output.stdout, plain.stdout, "args {args:?} changed the transcript");
    }
}

#[test]
fn test_stderr_is_silent() {
    let output = run(&[]);
    assert!(output.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn test_runs_are_byte_identical() {
    assert_eq!(run(&[]).stdout, run(&[]).stdout);
}
