#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hindsight() -> Command {
    Command::cargo_bin("hindsight").unwrap()
}

// ---------------------------------------------------------------------------
// hindsight new
// ---------------------------------------------------------------------------

#[test]
fn new_creates_starter_layout() {
    let dir = TempDir::new().unwrap();
    let proj = dir.path().join("site");

    hindsight()
        .arg("new")
        .arg(&proj)
        .assert()
        .success()
        .stdout(predicate::str::contains("created: hindsight.json"))
        .stdout(predicate::str::contains("created: pages/"));

    assert!(proj.join("hindsight.json").is_file());
    assert!(proj.join("pages").is_dir());
    assert!(proj.join("composed").is_dir());
    assert!(proj.join("page.html").is_file());
    assert!(proj.join("pages/index.md").is_file());
    assert!(proj.join("README.txt").is_file());
}

#[test]
fn new_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let proj = dir.path().join("deep/nested/site");

    hindsight().arg("new").arg(&proj).assert().success();
    assert!(proj.join("hindsight.json").is_file());
}

#[test]
fn composed_folder_starts_empty() {
    let dir = TempDir::new().unwrap();
    let proj = dir.path().join("site");

    hindsight().arg("new").arg(&proj).assert().success();

    let entries = std::fs::read_dir(proj.join("composed")).unwrap().count();
    assert_eq!(entries, 0);
}

#[test]
fn new_twice_fails_naming_the_config_file() {
    let dir = TempDir::new().unwrap();
    let proj = dir.path().join("site");

    hindsight().arg("new").arg(&proj).assert().success();
    hindsight()
        .arg("new")
        .arg(&proj)
        .assert()
        .failure()
        .stderr(predicate::str::contains("hindsight.json"));

    // The first run's artifacts are untouched
    assert!(proj.join("pages/index.md").is_file());
}

#[test]
fn config_document_parses_with_sample_title() {
    let dir = TempDir::new().unwrap();
    let proj = dir.path().join("site");

    hindsight().arg("new").arg(&proj).assert().success();

    let raw = std::fs::read_to_string(proj.join("hindsight.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["data"]["title"], "This is a sample page title!");
    assert!(value["data"]["header"].as_str().is_some_and(|s| !s.is_empty()));
    assert!(value["data"]["footer"].as_str().is_some_and(|s| !s.is_empty()));
}

#[test]
fn sample_content_shows_list_and_table() {
    let dir = TempDir::new().unwrap();
    let proj = dir.path().join("site");

    hindsight().arg("new").arg(&proj).assert().success();

    let md = std::fs::read_to_string(proj.join("pages/index.md")).unwrap();
    assert!(md.contains("- This is an unordered list"));
    assert!(md.contains("| This is the first column |"));
}

// ---------------------------------------------------------------------------
// hindsight new --json
// ---------------------------------------------------------------------------

#[test]
fn json_report_lists_artifacts_in_order() {
    let dir = TempDir::new().unwrap();
    let proj = dir.path().join("site");

    let out = hindsight()
        .arg("--json")
        .arg("new")
        .arg(&proj)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let created: Vec<&str> = report["created"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        created,
        vec![
            "hindsight.json",
            "pages/",
            "composed/",
            "page.html",
            "pages/index.md",
            "README.txt"
        ]
    );
    assert!(report["warnings"].as_array().unwrap().is_empty());
}
