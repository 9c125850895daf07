// Contract tests for `mkproj venv`
//
// Creation tests need a working interpreter on the host; they return
// early when none is found instead of failing.

use std::fs;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mkproj() -> Command {
    Command::cargo_bin("mkproj").unwrap()
}

fn python_available() -> bool {
    ["python3", "python"].iter().any(|cmd| {
        StdCommand::new(cmd)
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    })
}

fn scaffold_project(temp_dir: &TempDir) -> std::path::PathBuf {
    mkproj()
        .args(["new", "test", "--author", "Raj Dholakia", "--no-venv"])
        .args(["--path", temp_dir.path().to_str().unwrap()])
        .assert()
        .success();
    temp_dir.path().join("test")
}

#[test]
fn test_venv_create_synthesizes_spec_and_creates_venv() {
    if !python_available() {
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let project_dir = scaffold_project(&temp_dir);

    mkproj()
        .args(["venv", "create", "--path", project_dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created virtual environment"));

    assert!(project_dir.join("venv").is_dir());
    // No spec was given, so one is synthesized from the template.
    let spec = fs::read_to_string(project_dir.join("requirements.txt")).unwrap();
    assert!(spec.contains("Python dependencies for test"));
}

#[test]
fn test_venv_create_twice_reports_collision() {
    if !python_available() {
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let project_dir = scaffold_project(&temp_dir);

    mkproj()
        .args(["venv", "create", "--path", project_dir.to_str().unwrap()])
        .assert()
        .success();

    mkproj()
        .args(["venv", "create", "--path", project_dir.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_venv_info_and_remove() {
    if !python_available() {
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let project_dir = scaffold_project(&temp_dir);

    mkproj()
        .args(["venv", "create", "--path", project_dir.to_str().unwrap()])
        .assert()
        .success();

    mkproj()
        .args(["venv", "info", "--path", project_dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Python Virtual Environment"));

    mkproj()
        .args(["venv", "remove", "--path", project_dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed virtual environment"));

    assert!(!project_dir.join("venv").exists());
}

#[test]
fn test_venv_remove_without_venv() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = scaffold_project(&temp_dir);

    mkproj()
        .args(["venv", "remove", "--path", project_dir.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("path not found"));
}

#[test]
fn test_venv_create_rejects_missing_project_dir() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("non_existent");

    mkproj()
        .args(["venv", "create", "--path", missing.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("path not found"));
}

#[test]
fn test_venv_info_without_venv() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = scaffold_project(&temp_dir);

    mkproj()
        .args(["venv", "info", "--path", project_dir.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("path not found"));
}
