use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn adauth() -> Command {
    let mut cmd = Command::cargo_bin("adauth").expect("adauth binary");
    cmd.env_remove("ADAUTH__LDAP__WINDOWS__AUTH").env_remove("RUST_LOG");
    cmd
}

#[test]
fn lists_windows_extensions_on_windows() {
    adauth()
        .args(["--os", "windows"])
        .assert()
        .success()
        .stdout(predicate::str::contains("extension set: windows (6 extensions)"))
        .stdout(predicate::str::contains("windows.security-realm"))
        .stdout(predicate::str::contains("windows.logout-filter"));
}

#[test]
fn prints_an_empty_bundle_elsewhere() {
    let output = adauth().args(["--os", "other", "--json"]).assert().success().get_output().clone();

    let bundle: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(bundle["set"], "empty");
    assert_eq!(bundle["extensions"], serde_json::json!([]));
}

#[test]
fn forced_windows_auth_on_other_os_fails() {
    adauth()
        .args(["--os", "other", "--set", "ldap.windows.auth=true"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("host operating system is not Windows"));
}

#[test]
fn reads_the_flag_from_a_settings_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("adauth.toml");
    fs::write(&path, "[ldap.windows]\nauth = \"true\"\n")?;

    adauth()
        .args(["--os", "other", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("ldap.windows.auth=true"));

    adauth()
        .args(["--os", "windows", "--json", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"set\": \"windows\""));
    Ok(())
}

#[test]
fn command_line_overrides_the_settings_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("adauth.toml");
    fs::write(&path, "[ldap.windows]\nauth = \"true\"\n")?;

    adauth()
        .args(["--os", "other", "--set", "ldap.windows.auth=false", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("extension set: empty (0 extensions)"));
    Ok(())
}

#[test]
fn malformed_override_is_rejected_by_the_parser() {
    adauth()
        .args(["--set", "ldap.windows.auth"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected KEY=VALUE"));
}

#[test]
fn missing_settings_file_fails() {
    adauth()
        .args(["--config", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("settings are malformed"));
}
