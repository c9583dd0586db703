//! Exit statuses of the `nsgrep` binary.
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! |  0   | At least one match                        |
//! |  1   | Search finished without matches           |
//! |  2   | Invalid command line                      |
//! |  3   | Namespace root could not be loaded        |
//! |  4   | Skip set could not be built               |
//! |  5   | Graph inconsistent during the walk        |
//! |  6   | Results could not be written              |

use assert_cmd::Command;
use predicates::prelude::*;
use test_support::{SCENARIO_MANIFEST, manifest_dir, write_manifest};

fn nsgrep() -> Command {
    Command::new(env!("CARGO_BIN_EXE_nsgrep"))
}

#[test]
fn matches_exit_zero_and_stream_paths() {
    let dir = manifest_dir("lib", SCENARIO_MANIFEST).expect("manifest");
    nsgrep()
        .arg("-m")
        .arg(dir.path())
        .args(["-d", "2", "token", "lib"])
        .assert()
        .code(0)
        .stdout("alpha.token_x\n");
}

#[test]
fn ignore_case_widens_results() {
    let dir = manifest_dir("lib", SCENARIO_MANIFEST).expect("manifest");
    nsgrep()
        .arg("-m")
        .arg(dir.path())
        .args(["TOKEN", "lib"])
        .assert()
        .code(1);
    nsgrep()
        .arg("-m")
        .arg(dir.path())
        .args(["-i", "TOKEN", "lib"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("alpha.token_x"));
}

#[test]
fn json_output_lists_name_arrays() {
    let dir = manifest_dir("lib", SCENARIO_MANIFEST).expect("manifest");
    nsgrep()
        .arg("-m")
        .arg(dir.path())
        .args(["--json", "--skip-name", "alpha", "alpha", "lib"])
        .assert()
        .code(0)
        .stdout("[[\"alpha\"],[\"alpha_beta\"]]\n");
}

#[test]
fn missing_root_exits_three() {
    let dir = tempfile::tempdir().expect("tempdir");
    nsgrep()
        .arg("-m")
        .arg(dir.path())
        .args(["token", "absent"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no namespace root named 'absent'"));
}

#[test]
fn dangling_alias_exits_three() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_manifest(
        dir.path(),
        "lib",
        r#"{"kind": "namespace", "members": {"link": {"kind": "alias", "target": ["nowhere"]}}}"#,
    )
    .expect("manifest");
    nsgrep()
        .arg("-m")
        .arg(dir.path())
        .args(["token", "lib"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("alias 'link'"));
}

#[test]
fn unreadable_skip_dir_exits_four() {
    let dir = manifest_dir("lib", SCENARIO_MANIFEST).expect("manifest");
    nsgrep()
        .arg("-m")
        .arg(dir.path())
        .arg("--skip-package-dir")
        .arg(dir.path().join("site-packages"))
        .args(["token", "lib"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("failed to read skip directory"));
}

#[test]
fn info_statistics_go_to_stderr() {
    let dir = manifest_dir("lib", SCENARIO_MANIFEST).expect("manifest");
    nsgrep()
        .arg("-m")
        .arg(dir.path())
        .args(["--info", "stats", "token", "lib"])
        .assert()
        .code(0)
        .stdout("alpha.token_x\n")
        .stderr(predicate::str::starts_with("[stats] 1 matches"));
}
