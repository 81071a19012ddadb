//! CLI integration tests
//!
//! Drive the built binary against a database in a temporary directory.

use std::fs;
use std::path::Path;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_quotebook-cli");
    let db_path = dir.join("store.db");

    Command::new(cli_bin)
        .current_dir(dir)
        .arg("--db")
        .arg(&db_path)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_cli_categories_on_fresh_database() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["categories"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Inspiration\nLife\n");
}

#[test]
fn test_cli_add_then_filter() {
    let temp_dir = TempDir::new().unwrap();

    let added = run(
        temp_dir.path(),
        &["add", "--text", "  Ship it.  ", "--category", "Work"],
    );
    assert!(added.status.success(), "stderr: {}", stderr(&added));
    assert!(stdout(&added).contains("\"Ship it.\" [Work]"));

    let filtered = run(temp_dir.path(), &["filter", "Work"]);
    assert_eq!(stdout(&filtered), "\"Ship it.\" [Work]\n");

    let categories = run(temp_dir.path(), &["categories"]);
    assert_eq!(stdout(&categories), "Inspiration\nLife\nWork\n");
}

#[test]
fn test_cli_add_blank_text_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(
        temp_dir.path(),
        &["add", "--text", "   ", "--category", "Work"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("[ERR_VALIDATION]"),
        "stderr: {}",
        stderr(&output)
    );

    let categories = run(temp_dir.path(), &["categories"]);
    assert_eq!(stdout(&categories), "Inspiration\nLife\n");
}

#[test]
fn test_cli_export_then_import_elsewhere() {
    let source_dir = TempDir::new().unwrap();
    let target_dir = TempDir::new().unwrap();

    run(
        source_dir.path(),
        &["add", "--text", "Portable", "--category", "Travel"],
    );
    let exported = run(source_dir.path(), &["export"]);
    assert!(exported.status.success(), "stderr: {}", stderr(&exported));
    assert!(stdout(&exported).contains("digest: "));

    let snapshot = source_dir.path().join("quotes.json");
    let content = fs::read_to_string(&snapshot).unwrap();
    assert!(content.starts_with("[\n  {\n    \"text\": "));

    let imported = run(
        target_dir.path(),
        &["import", snapshot.to_str().unwrap()],
    );
    assert!(imported.status.success(), "stderr: {}", stderr(&imported));
    assert_eq!(stdout(&imported), "✓ Imported 5 quotes\n");

    let categories = run(target_dir.path(), &["categories"]);
    assert_eq!(stdout(&categories), "Inspiration\nLife\nTravel\n");
}

#[test]
fn test_cli_rejects_malformed_import() {
    let temp_dir = TempDir::new().unwrap();
    let bad = temp_dir.path().join("bad.json");
    fs::write(&bad, r#"{"not":"an array"}"#).unwrap();

    let output = run(temp_dir.path(), &["import", bad.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("[ERR_VALIDATION]"));

    let shown = run(temp_dir.path(), &["show"]);
    assert!(stdout(&shown).starts_with("All categories\n"));
    assert_eq!(stdout(&shown).lines().count(), 5);
}

#[test]
fn test_cli_selection_persists_until_session_end() {
    let temp_dir = TempDir::new().unwrap();

    let selected = run(temp_dir.path(), &["select", "Life"]);
    assert!(stdout(&selected).starts_with("Selected: Life\n"));

    let shown = run(temp_dir.path(), &["show"]);
    assert!(stdout(&shown).starts_with("Category: Life\n"));
    assert_eq!(stdout(&shown).lines().count(), 3);

    let ended = run(temp_dir.path(), &["session", "end"]);
    assert!(ended.status.success(), "stderr: {}", stderr(&ended));

    let shown = run(temp_dir.path(), &["show"]);
    assert!(stdout(&shown).starts_with("All categories\n"));
}

#[test]
fn test_cli_random_is_remembered_as_last() {
    let temp_dir = TempDir::new().unwrap();

    let random = run(temp_dir.path(), &["random", "Inspiration"]);
    assert!(random.status.success(), "stderr: {}", stderr(&random));
    let shown = stdout(&random);
    assert!(shown.ends_with("[Inspiration]\n"));

    let last = run(temp_dir.path(), &["last"]);
    assert_eq!(stdout(&last), shown);

    let empty = run(temp_dir.path(), &["random", "Nope"]);
    assert_eq!(stdout(&empty), "No quotes in category 'Nope'\n");
}

#[test]
fn test_cli_import_from_stdin_keeps_values_as_given() {
    let temp_dir = TempDir::new().unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_quotebook-cli"))
        .current_dir(temp_dir.path())
        .arg("--db")
        .arg(temp_dir.path().join("store.db"))
        .args(["import", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"[{"text":"From a pipe","category":" Piped "}]"#)
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "✓ Imported 1 quotes\n");

    let filtered = run(temp_dir.path(), &["filter", " Piped "]);
    assert_eq!(stdout(&filtered), "\"From a pipe\" [ Piped ]\n");
}
