//! Integration tests for show, edit and tags commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::eogtricks_cmd;

fn touch(temp: &TempDir, name: &str) {
    fs::write(temp.path().join(name), b"image").unwrap();
}

#[test]
fn test_show_prints_parts() {
    let temp = TempDir::new().unwrap();
    touch(&temp, "[a b] photo [c].jpg");

    eogtricks_cmd()
        .arg("show")
        .arg(temp.path().join("[a b] photo [c].jpg"))
        .assert()
        .success()
        .stdout(predicate::str::contains("[a b] photo [c].jpg\n"))
        .stdout(predicate::str::contains("tags:      a b / c"))
        .stdout(predicate::str::contains("core:      photo"))
        .stdout(predicate::str::contains("extension: .jpg"));
}

#[test]
fn test_show_missing_file_fails() {
    let temp = TempDir::new().unwrap();

    eogtricks_cmd()
        .arg("show")
        .arg(temp.path().join("gone.jpg"))
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_edit_renames_file() {
    let temp = TempDir::new().unwrap();
    touch(&temp, "photo.jpg");

    eogtricks_cmd()
        .arg("edit")
        .arg(temp.path().join("photo.jpg"))
        .arg("Best / Beach")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Renamed: photo.jpg → [best] photo [beach].jpg",
        ));

    assert!(temp.path().join("[best] photo [beach].jpg").exists());
    assert!(!temp.path().join("photo.jpg").exists());
}

#[test]
fn test_edit_replaces_forbidden_characters() {
    let temp = TempDir::new().unwrap();
    touch(&temp, "photo.jpg");

    eogtricks_cmd()
        .arg("edit")
        .arg(temp.path().join("photo.jpg"))
        .arg("a;b c,d")
        .assert()
        .success();

    assert!(temp.path().join("photo [a_b c_d].jpg").exists());
}

#[test]
fn test_edit_dry_run_keeps_file() {
    let temp = TempDir::new().unwrap();
    touch(&temp, "photo.jpg");

    eogtricks_cmd()
        .arg("edit")
        .arg(temp.path().join("photo.jpg"))
        .arg("beach")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Would rename: photo.jpg → photo [beach].jpg",
        ));

    assert!(temp.path().join("photo.jpg").exists());
    assert!(!temp.path().join("photo [beach].jpg").exists());
}

#[test]
fn test_edit_same_tags_is_unchanged() {
    let temp = TempDir::new().unwrap();
    touch(&temp, "[x] photo.jpg");

    eogtricks_cmd()
        .arg("edit")
        .arg(temp.path().join("[x] photo.jpg"))
        .arg("X /")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unchanged: [x] photo.jpg"));
}

#[test]
fn test_edit_collision_fails() {
    let temp = TempDir::new().unwrap();
    touch(&temp, "photo.jpg");
    touch(&temp, "[x] photo.jpg");

    eogtricks_cmd()
        .arg("edit")
        .arg(temp.path().join("photo.jpg"))
        .arg("x /")
        .assert()
        .failure()
        .code(4);

    assert!(temp.path().join("photo.jpg").exists());
}

#[test]
fn test_edit_reads_tags_from_stdin() {
    let temp = TempDir::new().unwrap();
    touch(&temp, "[old] photo.png");

    eogtricks_cmd()
        .arg("edit")
        .arg(temp.path().join("[old] photo.png"))
        .write_stdin("new / later\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Tags [old /]: "))
        .stdout(predicate::str::contains("Renamed:"));

    assert!(temp.path().join("[new] photo [later].png").exists());
}

#[test]
fn test_edit_empty_stdin_cancels() {
    let temp = TempDir::new().unwrap();
    touch(&temp, "photo.png");

    eogtricks_cmd()
        .arg("edit")
        .arg(temp.path().join("photo.png"))
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));

    assert!(temp.path().join("photo.png").exists());
}

#[test]
fn test_edit_blank_answer_keeps_tags() {
    let temp = TempDir::new().unwrap();
    touch(&temp, "photo [a].png");

    eogtricks_cmd()
        .arg("edit")
        .arg(temp.path().join("photo [a].png"))
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unchanged: photo [a].png"));
}

#[test]
fn test_tags_counts_files() {
    let temp = TempDir::new().unwrap();
    touch(&temp, "[cat] one.jpg");
    touch(&temp, "two [cat dog].jpg");
    touch(&temp, "three.jpg");
    fs::create_dir(temp.path().join("sub")).unwrap();
    fs::write(temp.path().join("sub/[bird] four.jpg"), b"image").unwrap();

    eogtricks_cmd()
        .arg("tags")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("cat  2\n"))
        .stdout(predicate::str::contains("dog  1\n"))
        .stdout(predicate::str::contains("bird").not());

    eogtricks_cmd()
        .arg("tags")
        .arg(temp.path())
        .arg("--recursive")
        .assert()
        .success()
        .stdout(predicate::str::contains("bird  1\n"));
}

#[test]
fn test_tags_empty_directory() {
    let temp = TempDir::new().unwrap();

    eogtricks_cmd()
        .arg("tags")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags found"));
}
