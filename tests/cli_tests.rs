//! CLI interface tests
//!
//! Tests basic CLI functionality like --help, --version, init and completions

use predicates::prelude::*;
use std::fs;

mod common;
use common::bin;

#[test]
fn test_cli_help_flag_displays_usage_information() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Next.js build output analyzer"));
}

#[test]
fn test_cli_version_flag_displays_version_number() {
    bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_without_command_prints_overview() {
    bin()
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("analyze"));
}

#[test]
fn test_unknown_subcommand_fails() {
    bin().arg("optimize").assert().failure();
}

#[test]
fn test_init_creates_config_with_budget() {
    let temp = tempfile::tempdir().unwrap();

    bin()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let contents = fs::read_to_string(temp.path().join(".next-build-parser.toml")).unwrap();
    assert!(contents.contains("[first-load-budget]"));
    assert!(contents.contains("max-size-kb = 1000"));
    assert!(contents.contains("route-width = 60"));
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let temp = tempfile::tempdir().unwrap();
    let config = temp.path().join(".next-build-parser.toml");
    fs::write(&config, "# mine\n").unwrap();

    bin()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .code(73)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    assert_eq!(fs::read_to_string(&config).unwrap(), "# mine\n");

    bin()
        .args(["init", "--force"])
        .current_dir(temp.path())
        .assert()
        .success();
    assert!(fs::read_to_string(&config)
        .unwrap()
        .contains("first-load-budget"));
}

#[test]
fn test_completions_bash_outputs_script() {
    bin()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("next-build-parser"))
        .stdout(predicate::str::contains("compare"));
}

#[test]
fn test_no_emoji_flag_is_accepted_everywhere() {
    let temp = tempfile::tempdir().unwrap();
    bin()
        .args(["settings", "list", "--no-emoji"])
        .current_dir(temp.path())
        .assert()
        .success();
}
