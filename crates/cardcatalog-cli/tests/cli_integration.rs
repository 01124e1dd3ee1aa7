//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end against a
//! local web root laid out like the served site.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command reading from a temporary web root
fn cli_cmd(root: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cardcatalog").expect("Failed to find cardcatalog binary");
    cmd.arg("--root").arg(root.path());
    cmd
}

fn write_json(root: &Path, relative: &str, value: serde_json::Value) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_vec(&value).unwrap()).unwrap();
}

/// A web root with both API resources present
fn site() -> TempDir {
    let root = TempDir::new().unwrap();
    write_json(
        root.path(),
        "api/cards.json",
        json!([
            {"question": "What is ownership?", "answer": "One owner per value.", "category": "Rust", "tags": ["memory"]},
            {"question": "What is a closure?", "answer": "A function with captured state.", "category": "Python"},
            {"q": "Untitled?", "a": "```let x = 1;```"}
        ]),
    );
    write_json(root.path(), "api/categories.json", json!(["Rust", "Python", ""]));
    root
}

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_list_all_cards() {
    let root = site();

    cli_cmd(&root)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 / 3 cards"))
        .stdout(predicate::str::contains("[Rust] What is ownership?"))
        .stdout(predicate::str::contains("[Uncategorized] Untitled?"))
        .stdout(predicate::str::contains("tags: memory"));
}

#[test]
fn test_list_filtered_by_category_and_search() {
    let root = site();

    cli_cmd(&root)
        .args(["list", "--category", "Rust", "--search", "  OWNER "])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 / 3 cards"))
        .stdout(predicate::str::contains("What is ownership?"))
        .stdout(predicate::str::contains("closure").not());
}

#[test]
fn test_list_search_matches_category_text() {
    let root = site();

    cli_cmd(&root)
        .args(["list", "--search", "python"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 / 3 cards"))
        .stdout(predicate::str::contains("[Python] What is a closure?"));
}

#[test]
fn test_list_empty_result_shows_empty_state() {
    let root = site();

    cli_cmd(&root)
        .args(["list", "--search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 / 3 cards"))
        .stdout(predicate::str::contains("No cards match the current filters."));
}

#[test]
fn test_list_answers_show_code_blocks() {
    let root = site();

    cli_cmd(&root)
        .args(["list", "--category", "", "--answers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 / 3 cards"))
        .stdout(predicate::str::contains("  | let x = 1;"));
}

// ============================================================================
// Fallback Tests
// ============================================================================

#[test]
fn test_fallback_cards_and_derived_categories() {
    let root = TempDir::new().unwrap();
    write_json(
        root.path(),
        "static/cards.json",
        json!([{"question": "Q1", "answer": "A1", "category": "Static"}]),
    );

    cli_cmd(&root)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 / 1 cards"))
        .stdout(predicate::str::contains("[Static] Q1"));

    cli_cmd(&root)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::diff("Static\n"));
}

#[test]
fn test_missing_everything_is_an_empty_catalog() {
    let root = TempDir::new().unwrap();

    cli_cmd(&root)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 / 0 cards"));
}

// ============================================================================
// Categories Command Tests
// ============================================================================

#[test]
fn test_categories_sorted_with_uncategorized_label() {
    let root = site();

    cli_cmd(&root)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::diff("Uncategorized\nPython\nRust\n"));
}

// ============================================================================
// Render Command Tests
// ============================================================================

#[test]
fn test_render_marks_active_category() {
    let root = site();

    cli_cmd(&root)
        .args(["render", "--category", "Rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<nav class=\"category-list desktop\">"))
        .stdout(predicate::str::contains("<nav class=\"category-list mobile\">"))
        .stdout(predicate::str::contains("category-control active\" data-category=\"Rust\""))
        .stdout(predicate::str::contains("1 / 3 cards"));
}

#[test]
fn test_render_mirrors_raw_search_input() {
    let root = site();

    cli_cmd(&root)
        .args(["render", "--search", "<Owner>"])
        .assert()
        .success()
        .stdout(predicate::str::contains("value=\"&lt;Owner&gt;\""))
        .stdout(predicate::str::contains("0 / 3 cards"));
}

// ============================================================================
// Argument Tests
// ============================================================================

#[test]
fn test_root_conflicts_with_base_url() {
    let root = site();

    cli_cmd(&root)
        .args(["--base-url", "http://127.0.0.1:1", "list"])
        .assert()
        .failure();
}

#[test]
fn test_config_file_is_applied() {
    let root = site();
    let config = root.path().join("catalog.json");
    fs::write(&config, r#"{"cards_path": "/api/missing", "fallback_cards_path": "/api/cards"}"#).unwrap();

    cli_cmd(&root)
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 / 3 cards"));
}
