//! CLI integration tests
//!
//! These tests verify the command-line interface behavior, including:
//! - Command parsing and validation
//! - Output formatting
//! - Error handling
//! - Exit codes

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Helper to get the path to the mnbuild binary
fn mnbuild_bin() -> PathBuf {
    // In tests, the binary should be at target/debug/mnbuild
    let mut path = env::current_exe()
        .expect("Failed to get current executable path")
        .parent()
        .expect("No parent")
        .parent()
        .expect("No parent")
        .to_path_buf();

    // If we're in deps/, go up one more level
    if path.ends_with("deps") {
        path = path.parent().expect("No parent").to_path_buf();
    }

    path.join("mnbuild")
}

/// Helper to create a Maven-wrapper fixture project
fn create_maven_project(dir: &TempDir) -> PathBuf {
    let repo_path = dir.path().to_path_buf();
    fs::write(repo_path.join("mvnw"), "#!/bin/sh\n").expect("Failed to write mvnw");
    fs::write(repo_path.join("pom.xml"), "<project/>\n").expect("Failed to write pom.xml");
    repo_path
}

/// A Java home with no native-image and no gu, so native pre-checks
/// degrade to a warning instead of depending on the host toolchain.
fn bare_java_home(dir: &TempDir) -> PathBuf {
    let home = dir.path().join("jdk");
    fs::create_dir_all(home.join("bin")).expect("Failed to create java home");
    home
}

#[test]
fn test_cli_help() {
    let output = Command::new(mnbuild_bin())
        .arg("--help")
        .output()
        .expect("Failed to execute mnbuild");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mnbuild"));
    assert!(stdout.contains("goals"));
    assert!(stdout.contains("run"));
    assert!(stdout.contains("manifest"));
}

#[test]
fn test_cli_version() {
    let output = Command::new(mnbuild_bin())
        .arg("--version")
        .output()
        .expect("Failed to execute mnbuild");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mnbuild"));
}

#[test]
fn test_goals_on_empty_workspace_succeeds() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(mnbuild_bin())
        .arg("goals")
        .arg(dir.path())
        .output()
        .expect("Failed to execute mnbuild");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No build wrapper found"));
}

#[test]
fn test_goals_json_on_empty_workspace() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(mnbuild_bin())
        .args(["goals", "--format", "json"])
        .arg(dir.path())
        .output()
        .expect("Failed to execute mnbuild");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)
        .expect("goals --format json should print valid JSON");
    assert!(value["wrapper"].is_null());
    assert_eq!(value["build"].as_array().unwrap().len(), 0);
    assert_eq!(value["deploy"].as_array().unwrap().len(), 0);
}

#[test]
fn test_goals_json_on_maven_project() {
    let dir = TempDir::new().unwrap();
    let repo = create_maven_project(&dir);

    let output = Command::new(mnbuild_bin())
        .args(["goals", "--format", "json"])
        .arg(&repo)
        .output()
        .expect("Failed to execute mnbuild");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["wrapper"], "Maven");
    assert_eq!(value["build"].as_array().unwrap().len(), 6);
    assert_eq!(value["deploy"].as_array().unwrap().len(), 2);
}

#[test]
fn test_run_dry_run_translates_maven_goal() {
    let dir = TempDir::new().unwrap();
    let repo = create_maven_project(&dir);
    let java_home = bare_java_home(&dir);

    let output = Command::new(mnbuild_bin())
        .args(["run", "nativeImage"])
        .arg(&repo)
        .arg("--dry-run")
        .env("MNBUILD_JAVA_HOME", &java_home)
        .output()
        .expect("Failed to execute mnbuild");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("package -Dpackaging=native-image"));
    assert!(stdout.contains("mvnw"));
}

#[test]
fn test_run_dry_run_passes_unknown_goal_through() {
    let dir = TempDir::new().unwrap();
    let repo = create_maven_project(&dir);

    let output = Command::new(mnbuild_bin())
        .args(["run", "verify"])
        .arg(&repo)
        .arg("--dry-run")
        .output()
        .expect("Failed to execute mnbuild");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mvnw verify"));
}

#[test]
fn test_run_without_wrapper_fails() {
    let dir = TempDir::new().unwrap();

    let output = Command::new(mnbuild_bin())
        .args(["run", "build"])
        .arg(dir.path())
        .arg("--dry-run")
        .output()
        .expect("Failed to execute mnbuild");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no command available"));
}

#[test]
fn test_run_without_goal_is_a_usage_error() {
    let output = Command::new(mnbuild_bin())
        .arg("run")
        .output()
        .expect("Failed to execute mnbuild");

    assert!(!output.status.success());
}

#[test]
fn test_manifest_renders_to_stdout() {
    let output = Command::new(mnbuild_bin())
        .args([
            "manifest",
            "--name",
            "demo",
            "--image",
            "registry.example.com/demo:latest",
        ])
        .output()
        .expect("Failed to execute mnbuild");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("kind: Deployment"));
    assert!(stdout.contains("name: demo"));
    assert!(stdout.contains("namespace: default"));
    assert!(stdout.contains("MICRONAUT_SERVER_PORT"));
    assert!(!stdout.contains("imagePullSecrets"));
}

#[test]
fn test_manifest_writes_file_with_secret() {
    let dir = TempDir::new().unwrap();
    let out_file = dir.path().join("deploy.yaml");

    let output = Command::new(mnbuild_bin())
        .args([
            "manifest",
            "--name",
            "demo",
            "--namespace",
            "staging",
            "--image",
            "demo:latest",
            "--docker-secret",
            "regcred",
        ])
        .arg("-o")
        .arg(&out_file)
        .output()
        .expect("Failed to execute mnbuild");

    assert!(output.status.success());
    let rendered = fs::read_to_string(&out_file).expect("manifest file should exist");
    assert!(rendered.contains("namespace: staging"));
    assert!(rendered.contains("imagePullSecrets"));
    assert!(rendered.contains("regcred"));
}
