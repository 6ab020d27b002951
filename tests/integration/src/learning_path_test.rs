//! End-to-end runs over a realistic curriculum data file.
//!
//! The fixture holds A1 modules for hi, ta and it (in the built-in catalog)
//! and nl (not in the catalog, already carrying its own A2 module).

use lp_content::{Catalog, render_module};
use lp_core::{PatchOptions, ScanMode, WriteMode, patch_file};
use lp_splice::locate_section;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture() -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/learning-path/learningPath.ts");
    fs::read_to_string(path).unwrap()
}

fn setup() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("i18n").join("learningPath.ts");
    lp_fs::io::write_text(&path, &fixture()).unwrap();
    (temp, path)
}

fn section_text<'a>(content: &'a str, code: &str) -> &'a str {
    let section = locate_section(content, code, ScanMode::Raw).unwrap();
    &content[section.marker_start..=section.close]
}

#[test]
fn test_builtin_catalog_patches_present_languages() {
    let (_temp, path) = setup();
    let catalog = Catalog::builtin().unwrap();

    let run = patch_file(&path, &catalog, PatchOptions::default(), WriteMode::Write).unwrap();

    let applied: Vec<_> = run.report.applied().map(|o| o.code().to_string()).collect();
    assert_eq!(applied, vec!["hi", "ta", "it"]);
    assert_eq!(run.report.warnings().len(), 10);
    assert!(run.report.warnings().contains(&"Could not find kn in file".to_string()));

    let patched = fs::read_to_string(&path).unwrap();
    for code in ["hi", "ta", "it"] {
        let section = section_text(&patched, code);
        assert_eq!(section.matches("level: 'A1'").count(), 1);
        assert_eq!(section.matches("level: 'A2'").count(), 1, "{}", code);
        for unit in 1..=3 {
            assert!(section.contains(&format!("unitId: '{}-a2-u{}'", code, unit)));
        }
    }
}

#[test]
fn test_appended_module_follows_a1_module() {
    let (_temp, path) = setup();
    let catalog = Catalog::builtin().unwrap();
    let original = fixture();

    patch_file(&path, &catalog, PatchOptions::default(), WriteMode::Write).unwrap();
    let patched = fs::read_to_string(&path).unwrap();

    let before = section_text(&original, "ta");
    let a1 = before
        .strip_suffix("\n  ]")
        .expect("fixture sections close on their own line");
    let expected = format!(
        "{},{}\n  ]",
        a1,
        render_module(catalog.get("ta").unwrap())
    );
    assert_eq!(section_text(&patched, "ta"), expected);
}

#[test]
fn test_languages_outside_catalog_are_untouched() {
    let (_temp, path) = setup();
    let catalog = Catalog::builtin().unwrap();
    let original = fixture();

    patch_file(&path, &catalog, PatchOptions::default(), WriteMode::Write).unwrap();
    let patched = fs::read_to_string(&path).unwrap();

    assert_eq!(section_text(&patched, "nl"), section_text(&original, "nl"));
    assert!(patched.starts_with("import type { LearningModule } from '../types';\n"));
    assert!(patched.ends_with("  ],\n};\n"));
}

#[test]
fn test_scan_modes_agree_on_fixture() {
    let catalog = Catalog::builtin().unwrap();

    let (_raw_dir, raw_path) = setup();
    let raw = patch_file(&raw_path, &catalog, PatchOptions::default(), WriteMode::DryRun).unwrap();

    let (_aware_dir, aware_path) = setup();
    let aware = patch_file(
        &aware_path,
        &catalog,
        PatchOptions {
            scan_mode: ScanMode::QuoteAware,
        },
        WriteMode::DryRun,
    )
    .unwrap();

    assert_eq!(raw.after, aware.after);
    assert_eq!(raw.report, aware.report);
}

#[test]
fn test_rerun_appends_a_second_copy() {
    let (_temp, path) = setup();
    let catalog = Catalog::builtin().unwrap();

    patch_file(&path, &catalog, PatchOptions::default(), WriteMode::Write).unwrap();
    let second = patch_file(&path, &catalog, PatchOptions::default(), WriteMode::Write).unwrap();

    assert_eq!(second.report.applied_count(), 3);
    let patched = fs::read_to_string(&path).unwrap();
    assert_eq!(section_text(&patched, "hi").matches("level: 'A2'").count(), 2);
}
