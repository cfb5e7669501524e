//! End-to-end CLI integration tests.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn netdash() -> Command {
    Command::cargo_bin("netdash").expect("binary not found")
}

#[test]
fn help_flag() {
    netdash()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("monitoring dashboard"))
        .stdout(predicate::str::contains("--interval"))
        .stdout(predicate::str::contains("--devices"))
        .stdout(predicate::str::contains("--once"));
}

#[test]
fn version_flag() {
    netdash()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("netdash"));
}

#[test]
fn once_mode_prints_metrics() {
    netdash()
        .arg("--once")
        .assert()
        .success()
        .stdout(predicate::str::contains("CPU"))
        .stdout(predicate::str::contains("Memory"));
}

#[test]
fn once_quiet_mode_is_machine_readable() {
    netdash()
        .args(["--once", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cpu "))
        .stdout(predicate::str::contains("memory "));
}

#[test]
fn once_mode_probes_devices() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"name": "Nowhere", "host": "host.invalid", "port": 22}}]"#
    )
    .unwrap();

    netdash()
        .args(["--once", "--devices"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Nowhere"))
        .stdout(predicate::str::contains("down"));
}

#[test]
fn missing_devices_file_is_a_config_error() {
    netdash()
        .args(["--once", "--devices", "/nonexistent/devices.json"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("devices"));
}

#[test]
fn malformed_devices_file_is_a_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    netdash()
        .args(["--once", "--devices"])
        .arg(file.path())
        .assert()
        .failure()
        .code(4);
}

#[test]
fn completion_bash() {
    netdash()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("netdash"));
}

#[test]
fn invalid_window_is_rejected() {
    netdash()
        .args(["--window", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--window"));
}
