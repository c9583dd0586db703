use std::process::Command;

fn binary_output(path: &str, args: &[&str]) -> std::process::Output {
    Command::new(path)
        .args(args)
        .output()
        .unwrap_or_else(|error| panic!("failed to run {}: {}", path, error))
}

fn combined_utf8(output: &std::process::Output) -> String {
    let mut data = output.stdout.clone();
    data.extend_from_slice(&output.stderr);
    String::from_utf8(data).expect("binary output should be valid UTF-8")
}

#[test]
fn nsgrep_help_lists_usage() {
    let output = binary_output(env!("CARGO_BIN_EXE_nsgrep"), &["--help"]);
    assert!(output.status.success(), "--help should succeed");
    assert!(
        output.stderr.is_empty(),
        "help output should not write to stderr"
    );
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("nsgrep"));
    assert!(stdout.contains("--max-depth"));
}

#[test]
fn nsgrep_without_operands_shows_usage() {
    let output = binary_output(env!("CARGO_BIN_EXE_nsgrep"), &[]);
    assert_eq!(
        output.status.code(),
        Some(2),
        "running without operands should fail so the caller sees the usage"
    );
    let combined = combined_utf8(&output);
    assert!(combined.contains("Usage:"));
}

#[test]
fn nsgrep_version_matches_package() {
    let output = binary_output(env!("CARGO_BIN_EXE_nsgrep"), &["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert_eq!(stdout.trim(), format!("nsgrep {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn nsgrep_rejects_unknown_flag() {
    let output = binary_output(env!("CARGO_BIN_EXE_nsgrep"), &["--definitely-not-a-flag"]);
    assert_eq!(output.status.code(), Some(2));
    let combined = combined_utf8(&output);
    assert!(combined.contains("--definitely-not-a-flag"));
}
