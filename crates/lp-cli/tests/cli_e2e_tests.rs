//! CLI end-to-end tests that invoke the compiled `lp-patch` binary.

use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const LEARNING_PATH: &str = "export const LEARNING_PATH = {
  hi: [
    {
      level: 'A1',
      units: []
    }
  ],
  ta: [
    {
      level: 'A1',
      units: []
    }
  ],
};
";

fn lp_patch_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lp-patch"))
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(lp_patch_bin())
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute lp-patch binary")
}

fn setup_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("i18n")).unwrap();
    fs::write(temp.path().join("i18n/learningPath.ts"), LEARNING_PATH).unwrap();
    temp
}

#[test]
fn test_help_exits_zero() {
    let out = Command::new(lp_patch_bin()).arg("--help").output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn test_no_args_patches_default_target() {
    let temp = setup_project();

    let out = run(temp.path(), &[]);

    assert!(out.status.success());
    let patched = fs::read_to_string(temp.path().join("i18n/learningPath.ts")).unwrap();
    assert!(patched.contains("unitId: 'hi-a2-u1'"));
    assert!(patched.contains("unitId: 'ta-a2-u1'"));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(predicate::str::contains("Warning: Could not find kn in file").eval(&stdout));
    assert!(predicate::str::contains("Warning: Could not find fi in file").eval(&stdout));
    assert!(!stdout.contains("Could not find hi"));
    assert!(stdout.contains("Added 2 of 13 module(s)"));
}

#[test]
fn test_complete_run_prints_confirmation() {
    let temp = setup_project();
    fs::write(
        temp.path().join("two.toml"),
        r#"
[[module]]
code = "hi"
level = "B1"
theme = "यात्रा"
description = "..."

[[module]]
code = "ta"
level = "B1"
theme = "பயணம்"
description = "..."
"#,
    )
    .unwrap();

    let out = run(temp.path(), &["--catalog", "two.toml"]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Successfully added modules for all 2 languages"));
    assert!(!stdout.contains("Warning"));
}

#[test]
fn test_misspelled_catalog_fails_without_writing() {
    let temp = setup_project();
    fs::write(
        temp.path().join("typo.toml"),
        r#"
[[modules]]
code = "hi"
level = "B1"
theme = "यात्रा"
description = "..."
"#,
    )
    .unwrap();
    fs::write(temp.path().join("none.toml"), "module = []\n").unwrap();

    for catalog in ["typo.toml", "none.toml"] {
        let out = run(temp.path(), &["--catalog", catalog]);

        assert_eq!(out.status.code(), Some(1), "catalog {catalog}");
        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(!stdout.contains("Successfully added"));
        let content = fs::read_to_string(temp.path().join("i18n/learningPath.ts")).unwrap();
        assert_eq!(content, LEARNING_PATH);
    }
}

#[test]
fn test_dry_run_leaves_file_untouched() {
    let temp = setup_project();

    let out = run(temp.path(), &["--dry-run"]);

    assert!(out.status.success());
    let content = fs::read_to_string(temp.path().join("i18n/learningPath.ts")).unwrap();
    assert_eq!(content, LEARNING_PATH);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("--- a/i18n/learningPath.ts"));
    assert!(stdout.contains("+      level: 'A2',"));
    assert!(stdout.contains("Dry run: 2 of 13 module(s) would be added"));
}

#[test]
fn test_missing_target_exits_nonzero() {
    let temp = TempDir::new().unwrap();

    let out = run(temp.path(), &[]);

    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error"));
    assert!(stderr.contains("learningPath.ts"));
}

#[test]
fn test_second_run_duplicates_modules() {
    let temp = setup_project();

    assert!(run(temp.path(), &[]).status.success());
    assert!(run(temp.path(), &[]).status.success());

    let patched = fs::read_to_string(temp.path().join("i18n/learningPath.ts")).unwrap();
    assert_eq!(patched.matches("unitId: 'hi-a2-u1'").count(), 2);
}
