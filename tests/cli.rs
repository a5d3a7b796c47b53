//! End-to-end tests driving the `model-signing` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn model_signing() -> Command {
    Command::cargo_bin("model-signing").unwrap()
}

fn model_fixture(dir: &Path) {
    fs::create_dir(dir.join("model")).unwrap();
    fs::write(dir.join("model").join("weights.bin"), b"\x00\x01\x02").unwrap();
    fs::write(dir.join("key.pem"), "PRIVATE KEY").unwrap();
    fs::write(dir.join("key.pub"), "PUBLIC KEY").unwrap();
    fs::write(dir.join("model.sig"), "SIGNATURE").unwrap();
}

#[test]
fn help_lists_the_four_subcommands() {
    model_signing()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sign"))
        .stdout(predicate::str::contains("verify"))
        .stdout(predicate::str::contains("version"))
        .stdout(predicate::str::contains("completion"))
        .stdout(predicate::str::contains("Global Options"))
        .stdout(predicate::str::contains("--output-file"));
}

#[test]
fn bare_invocation_prints_help_and_succeeds() {
    model_signing()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("completion"));
}

#[test]
fn list_flags_accept_the_model_path_afterwards() {
    let dir = tempfile::tempdir().unwrap();
    model_fixture(dir.path());

    model_signing()
        .args(["sign", "key", "--ignore-paths", "README.md"])
        .arg(dir.path().join("model"))
        .arg("--private-key")
        .arg(dir.path().join("absent.pem"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("private key not found"));
}

#[test]
fn subcommand_help_shows_global_options() {
    model_signing()
        .args(["verify", "key", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--public-key"))
        .stdout(predicate::str::contains("--log-level"));
}

#[test]
fn version_prints_banner_to_stdout() {
    model_signing()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("GitVersion:"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_json() {
    let output = model_signing()
        .args(["version", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["gitVersion"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn output_file_captures_command_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");

    model_signing()
        .arg(format!("--output_file={}", out.display()))
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let captured = fs::read_to_string(&out).unwrap();
    assert!(captured.contains("GitVersion:"));
}

#[test]
fn output_file_flag_after_subcommand() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.json");

    model_signing()
        .args(["version", "--json", "--output-file"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["compiler"], "rustc");
}

#[test]
fn unwritable_output_file_fails_before_running() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing").join("out.txt");

    model_signing()
        .arg("--output-file")
        .arg(&out)
        .arg("version")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error creating output file"))
        .stderr(predicate::str::contains("out.txt"));

    assert!(!out.exists());
}

#[test]
fn debug_logs_go_to_stderr_when_output_is_redirected() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");

    model_signing()
        .arg(format!("--output_file={}", out.display()))
        .arg("--log_level=debug")
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("registry client debug logs routed to stderr"));

    let captured = fs::read_to_string(&out).unwrap();
    assert!(captured.contains("GitVersion:"));
    assert!(!captured.contains("DEBUG"));
}

#[test]
fn registry_logs_silent_at_info() {
    model_signing()
        .arg("version")
        .assert()
        .success()
        .stderr(predicate::str::contains("registry client").not());
}

#[test]
fn verify_scenario_reaches_backend() {
    let dir = tempfile::tempdir().unwrap();
    model_fixture(dir.path());
    let out = dir.path().join("out.txt");

    model_signing()
        .arg(format!("--output_file={}", out.display()))
        .arg("--log_level=debug")
        .args(["verify", "key"])
        .arg(dir.path().join("model"))
        .arg("--signature")
        .arg(dir.path().join("model.sig"))
        .arg("--public_key")
        .arg(dir.path().join("key.pub"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("DEBUG"))
        .stderr(predicate::str::contains("no signing backend is linked"));

    assert!(out.exists());
}

#[test]
fn missing_private_key_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    model_fixture(dir.path());

    model_signing()
        .args(["sign", "key"])
        .arg(dir.path().join("model"))
        .arg("--private-key")
        .arg(dir.path().join("absent.pem"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("private key not found"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    model_signing()
        .args(["version", "--no-such-flag"])
        .assert()
        .code(2);
}

#[test]
fn completion_defaults_to_fig() {
    model_signing()
        .arg("completion")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fig.Spec"))
        .stdout(predicate::str::contains("model-signing"));
}

#[test]
fn completion_bash() {
    model_signing()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}
