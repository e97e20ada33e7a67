//! Integration tests for init, config and plugins commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::eogtricks_cmd;

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    eogtricks_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized eogtricks settings"));

    let config_path = temp.path().join(".eogtricks/config.toml");
    assert!(config_path.exists());

    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("page_scroll_fraction = 0.9"));
    assert!(content.contains("created"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    eogtricks_cmd().arg("init").arg(temp.path()).assert().success();
    eogtricks_cmd().arg("init").arg(temp.path()).assert().failure();
}

#[test]
fn test_config_outside_settings_dir_fails() {
    let temp = TempDir::new().unwrap();

    eogtricks_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("eogtricks init"));
}

#[test]
fn test_config_set_and_get() {
    let temp = TempDir::new().unwrap();
    eogtricks_cmd().arg("init").arg(temp.path()).assert().success();

    eogtricks_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("page_scroll_fraction")
        .arg("0.5")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set page_scroll_fraction = 0.5"));

    eogtricks_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("page_scroll_fraction")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.5"));

    eogtricks_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("page_scroll_fraction = 0.5"))
        .stdout(predicate::str::contains("quick_move_target = "));
}

#[test]
fn test_config_rejects_bad_values() {
    let temp = TempDir::new().unwrap();
    eogtricks_cmd().arg("init").arg(temp.path()).assert().success();

    eogtricks_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("page_scroll_fraction")
        .arg("1.5")
        .assert()
        .failure();

    eogtricks_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("created")
        .arg("yesterday")
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn test_config_found_through_env_root() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    eogtricks_cmd().arg("init").arg(temp.path()).assert().success();

    eogtricks_cmd()
        .current_dir(elsewhere.path())
        .env("EOGTRICKS_ROOT", temp.path())
        .arg("config")
        .arg("page_scroll_fraction")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.9"));
}

#[test]
fn test_plugins_lists_bindings() {
    eogtricks_cmd()
        .arg("plugins")
        .assert()
        .success()
        .stdout(predicate::str::contains("bracket-tags - "))
        .stdout(predicate::str::contains("    win.page-backward: Prior, b, BackSpace\n"))
        .stdout(predicate::str::contains("    win.move-trash: <Shift>Delete\n"));
}

#[test]
fn test_plugins_use_configured_page_fraction() {
    let temp = TempDir::new().unwrap();
    eogtricks_cmd().arg("init").arg(temp.path()).assert().success();
    eogtricks_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("page_scroll_fraction")
        .arg("0.5")
        .assert()
        .success();

    eogtricks_cmd()
        .current_dir(temp.path())
        .arg("plugins")
        .assert()
        .success()
        .stdout(predicate::str::contains("50% of a screenful"));
}

#[test]
fn test_config_quick_move_target_must_be_directory() {
    let temp = TempDir::new().unwrap();
    eogtricks_cmd().arg("init").arg(temp.path()).assert().success();

    eogtricks_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("quick_move_target")
        .arg(temp.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}
