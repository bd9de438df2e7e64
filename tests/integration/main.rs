//! Integration tests for the hardentools CLI
//!
//! These tests run the binary against a settings hive in a temporary
//! home, testing the full cycle of: status → harden → status → restore


use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a hardentools command rooted at `home`
fn hardentools(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("hardentools"));
    cmd.env("HARDENTOOLS_HOME", home).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Helper to read the hive file written by the binary
fn read_hive(home: &Path) -> String {
    fs::read_to_string(home.join("hive.toml")).unwrap_or_default()
}

// =============================================================================
// END-TO-END WORKFLOW TESTS
// =============================================================================

/// Test complete workflow: status → harden → status → restore → status
#[test]
fn test_e2e_harden_then_restore() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    // Step 1: Fresh system offers hardening
    hardentools(home)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ready to harden"))
        .stdout(predicate::str::contains("0/15 hardened"));

    // Step 2: Harden everything but UAC
    hardentools(home)
        .args(["harden", "--skip", "UAC"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Now we are hardening: WSH, OfficeOLE"))
        .stdout(predicate::str::contains("Hardening WSH has been successful"))
        .stdout(predicate::str::contains("UAC is now NOT hardened"))
        .stdout(predicate::str::contains("Done! I have hardened all risky features!"));

    let hive = read_hive(home);
    assert!(hive.contains("Security Without Borders"));
    assert!(hive.contains("VBAWarnings = 4"));

    // Step 3: Status now offers restore
    hardentools(home)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("We have already hardened"))
        .stdout(predicate::str::contains("14/15 hardened"));

    // Step 4: Hardening twice is refused
    hardentools(home)
        .arg("harden")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already hardened"));

    // Step 5: Restore
    hardentools(home)
        .arg("restore")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restoring WSH has been successful"))
        .stdout(predicate::str::contains("Status flag removed"))
        .stdout(predicate::str::contains("Done! I have restored all risky features!"));

    assert!(!read_hive(home).contains("Security Without Borders"));

    // Step 6: Back to the start
    hardentools(home)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ready to harden"));
}

/// Test that restore refuses to run on a system that was never hardened
#[test]
fn test_restore_without_harden() {
    let temp = TempDir::new().unwrap();

    hardentools(temp.path())
        .arg("restore")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to restore"));
}

/// Test that --only restricts the run to the named entries
#[test]
fn test_harden_only() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    hardentools(home)
        .args(["harden", "--only", "WSH,ShowFileExt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Now we are hardening: WSH, ShowFileExt\n"))
        .stdout(predicate::str::contains("WSH is now hardened"))
        .stdout(predicate::str::contains("OfficeMacros is now NOT hardened"));
}

/// Test that an unknown entry name is an error
#[test]
fn test_harden_unknown_subject() {
    let temp = TempDir::new().unwrap();

    hardentools(temp.path())
        .args(["harden", "--only", "Flash"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown subject: Flash"));

    assert!(!temp.path().join("hive.toml").exists());
}

/// Test that config exclusions start deselected
#[test]
fn test_config_exclusions() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    fs::write(home.join("config.toml"), "exclude = [\"PowerShell\"]\n").unwrap();

    hardentools(home)
        .arg("harden")
        .assert()
        .success()
        .stdout(predicate::str::contains("PowerShell is now NOT hardened"));
}

/// Test that an exclusion naming no catalog entry is reported
#[test]
fn test_config_unknown_exclusion_warns() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    fs::write(home.join("config.toml"), "exclude = [\"Flash\"]\n").unwrap();

    hardentools(home)
        .arg("status")
        .assert()
        .success()
        .stderr(predicate::str::contains("Excluded entry Flash is not in the catalog"));
}

/// Test that a config that does not parse stops the run
#[test]
fn test_invalid_config_is_fatal() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    fs::write(home.join("config.toml"), "exclude = \"UAC\"\n").unwrap();

    hardentools(home)
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));

    hardentools(home)
        .arg("harden")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
    assert!(!home.join("hive.toml").exists());

    // Commands that ignore the config still work
    hardentools(home).arg("version").assert().success();
}

// =============================================================================
// DRY RUN AND JSON
// =============================================================================

/// Test that a dry run reports the run but writes nothing
#[test]
fn test_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    hardentools(home)
        .args(["harden", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WSH is now hardened"))
        .stdout(predicate::str::contains("dry run"));

    assert!(!home.join("hive.toml").exists());
}

/// Test JSON status output
#[test]
fn test_status_json() {
    let temp = TempDir::new().unwrap();

    let output = hardentools(temp.path()).args(["--json", "status"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["mode"], "harden");
    assert_eq!(json["total"], 15);
    assert_eq!(json["subjects"][0]["name"], "WSH");
}

/// Test JSON harden output
#[test]
fn test_harden_json() {
    let temp = TempDir::new().unwrap();

    let output =
        hardentools(temp.path()).args(["harden", "--json", "--dry-run"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["direction"], "harden");
    assert_eq!(json["dry_run"], true);
    assert_eq!(json["status"]["status"], "marked");
    assert_eq!(json["final_states"].as_array().unwrap().len(), 15);
}

// =============================================================================
// MISC
// =============================================================================

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();

    hardentools(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!("hardentools v", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_no_command_prints_hint() {
    let temp = TempDir::new().unwrap();

    hardentools(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("hardentools --help"));
}
