//! CLI surface tests: help, version, completions and configuration errors

#![cfg(unix)]

mod common;

use common::{FakeBrew, TestEnv};
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let env = TestEnv::new(&FakeBrew::new());

    env.kickstart()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_reports_brew() {
    let env = TestEnv::new(&FakeBrew::new());

    env.kickstart()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::contains("found"));
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new(&FakeBrew::new());

    env.kickstart()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kickstart"));
}

#[test]
fn test_completions_shell_is_case_insensitive() {
    let env = TestEnv::new(&FakeBrew::new());

    env.kickstart().args(["completions", "ZSH"]).assert().success();
}

#[test]
fn test_completions_unknown_shell() {
    let env = TestEnv::new(&FakeBrew::new());

    env.kickstart()
        .args(["completions", "tcsh"])
        .assert()
        .failure();
}

#[test]
fn test_missing_config_file() {
    let env = TestEnv::new(&FakeBrew::new());

    env.kickstart()
        .arg("--config")
        .arg(env.temp.path().join("missing.yaml"))
        .args(["install", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_config_unknown_key() {
    let env = TestEnv::new(&FakeBrew::new());
    let config = env.write_config("formulas: [git]\n");

    env.kickstart()
        .arg("--config")
        .arg(&config)
        .args(["install", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}

#[test]
fn test_config_from_environment() {
    let env = TestEnv::new(&FakeBrew::new());
    let config = env.write_config("packages: [bat]\n");

    env.kickstart()
        .env("KICKSTART_CONFIG", &config)
        .args(["install", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("brew install bat"));
}

#[test]
fn test_default_config_location() {
    let env = TestEnv::new(&FakeBrew::new());
    let dir = env.temp.path().join(".config").join("kickstart");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("kickstart.yaml"), "casks: [iterm2]\n").unwrap();

    // dirs resolves the config directory from XDG_CONFIG_HOME on Linux only
    if cfg!(target_os = "linux") {
        env.kickstart()
            .args(["install", "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains("brew install --cask iterm2"));
    }
}
