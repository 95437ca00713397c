//! Exit codes and stream separation, checked through assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use sizetree::test_utils::TestDir;

fn sizetree() -> Command {
    let mut cmd = Command::cargo_bin("sizetree").expect("binary should build");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_exits_zero() {
    sizetree()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--sort"))
        .stdout(predicate::str::contains("--html"));
}

#[test]
fn test_short_help_lists_sort_methods() {
    sizetree()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("[possible values: name, size]"));
}

#[test]
fn test_invalid_sort_method_exits_one() {
    let dir = TestDir::new();
    sizetree()
        .current_dir(dir.path())
        .args(["--sort", "date"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid value 'date'"));
}

#[test]
fn test_version_exits_zero() {
    sizetree()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("sizetree "));
}

#[test]
fn test_missing_directory_exits_one() {
    let dir = TestDir::new();
    sizetree()
        .current_dir(dir.path())
        .arg("missing")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_unknown_flag_exits_one() {
    let dir = TestDir::new();
    sizetree()
        .current_dir(dir.path())
        .arg("--bogus")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn test_html_and_json_conflict() {
    let dir = TestDir::new();
    sizetree()
        .current_dir(dir.path())
        .args(["--html", "out.html", "--json"])
        .assert()
        .code(1);
    assert!(!dir.path().join("out.html").exists());
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let dir = TestDir::new();
    dir.add_file("a.txt", 5);

    sizetree()
        .current_dir(dir.path())
        .env("RUST_LOG", "sizetree=debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt (5 B)"))
        .stdout(predicate::str::contains("built tree").not())
        .stderr(predicate::str::contains("built tree"));
}

#[test]
fn test_forced_color_emits_escapes() {
    let dir = TestDir::new();
    dir.add_dir("sub");

    sizetree()
        .current_dir(dir.path())
        .args(["--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));
}

#[test]
fn test_color_never_is_plain() {
    let dir = TestDir::new();
    dir.add_dir("sub");

    sizetree()
        .current_dir(dir.path())
        .args(["--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not())
        .stdout(predicate::str::contains("    └── sub/ (0 B)"));
}
