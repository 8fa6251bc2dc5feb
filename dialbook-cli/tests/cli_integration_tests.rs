//! CLI Integration Tests
//!
//! Runs the `dialbook` binary against a contact snapshot in an isolated
//! data directory.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const CONTACTS: &str = r#"[
  {"id": "1", "name": "Alice Smith", "primary_phone": "+1 555 0100", "primary_email": "alice@example.com"},
  {"id": "2", "name": "bob", "primary_phone": "555-0200", "times_contacted": 40},
  {"id": "3", "name": "alice smith", "primary_phone": "+1 (555) 0100", "primary_email": "Alice@Example.com"},
  {"id": "4", "name": "Carol", "primary_phone": "555-0400"},
  {"id": "5", "name": "No Phone", "primary_email": "nophone@example.com"}
]"#;

/// Helper to run CLI commands in an isolated data directory
struct CliTestContext {
    data_dir: TempDir,
    contacts_path: PathBuf,
}

impl CliTestContext {
    fn new() -> Self {
        let data_dir = TempDir::new().expect("Failed to create temp dir");
        let contacts_path = data_dir.path().join("contacts.json");
        fs::write(&contacts_path, CONTACTS).expect("Failed to write contacts");
        Self {
            data_dir,
            contacts_path,
        }
    }

    /// Run a CLI command and return the output
    fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_dialbook"));
        cmd.arg("--data-dir")
            .arg(self.data_dir.path().join("data"))
            .arg("--contacts")
            .arg(&self.contacts_path)
            .env_remove("RUST_LOG");

        for arg in args {
            cmd.arg(arg);
        }

        cmd.output().expect("Failed to execute command")
    }

    /// Run a command and assert success
    fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        assert!(
            output.status.success(),
            "Command {:?} failed.\nStdout: {}\nStderr: {}",
            args,
            stdout,
            stderr
        );
        stdout
    }

    /// Run a command and assert failure
    fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Command {:?} should have failed but succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let stdout = self.run_success(args);
        serde_json::from_str(&stdout).expect("stdout is not JSON")
    }
}

#[test]
fn test_sections_json() {
    let ctx = CliTestContext::new();
    let sections = ctx.run_json(&["sections"]);
    let entries = sections.as_array().unwrap();

    // 4 contacts with phones under headers A, B, C
    assert_eq!(entries.len(), 7);
    assert_eq!(entries[0]["kind"], "Header");
    assert_eq!(entries[0]["value"], "A");
    assert!(entries.iter().all(|e| e["value"]["id"] != "5"));
}

#[test]
fn test_sections_text() {
    let ctx = CliTestContext::new();
    let stdout = ctx.run_success(&["--format", "text", "sections"]);
    assert!(stdout.contains("Alice Smith"));
    assert!(stdout.contains("Carol"));
    assert!(!stdout.contains("No Phone"));
}

#[test]
fn test_duplicates_groups_alice() {
    let ctx = CliTestContext::new();
    let groups = ctx.run_json(&["duplicates"]);
    let groups = groups.as_array().unwrap();

    assert_eq!(groups.len(), 1);
    let ids: Vec<&str> = groups[0]["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn test_duplicates_strict_threshold() {
    let ctx = CliTestContext::new();
    // Alice pair scores exactly 1.0, so even the maximum keeps it
    let groups = ctx.run_json(&["duplicates", "--threshold", "1.0"]);
    assert_eq!(groups.as_array().unwrap().len(), 1);
}

#[test]
fn test_suggest_frequent_contact() {
    let ctx = CliTestContext::new();
    let suggestions = ctx.run_json(&["suggest", "--limit", "1"]);
    let suggestions = suggestions.as_array().unwrap();

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0]["record"]["id"], "2");
    assert_eq!(suggestions[0]["reason"], "FrequentlyContacted");
}

#[test]
fn test_favorite_toggle_persists() {
    let ctx = CliTestContext::new();

    let result = ctx.run_json(&["favorite", "4"]);
    assert_eq!(result["is_favorite"], true);

    let sections = ctx.run_json(&["sections"]);
    assert_eq!(sections[0]["value"], "★ Favorites");
    assert_eq!(sections[1]["value"]["id"], "4");

    let result = ctx.run_json(&["favorite", "4"]);
    assert_eq!(result["is_favorite"], false);
}

#[test]
fn test_lookup_dialed_number() {
    let ctx = CliTestContext::new();

    let result = ctx.run_json(&["lookup", "+15550100"]);
    assert_eq!(result["contact"]["id"], "1");
    assert_eq!(result["number"], "+15550100");
    assert_eq!(result["valid"], false);

    let result = ctx.run_json(&["lookup", "1-234-567-8900"]);
    assert!(result["contact"].is_null());
    assert_eq!(result["number"], "+1 (234) 567-8900");
    assert_eq!(result["valid"], true);
}

#[test]
fn test_favorite_unknown_contact_fails() {
    let ctx = CliTestContext::new();
    let stderr = ctx.run_failure(&["favorite", "999"]);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_search_and_history() {
    let ctx = CliTestContext::new();

    let results = ctx.run_json(&["search", "ALICE"]);
    assert_eq!(results.as_array().unwrap().len(), 2);
    ctx.run_success(&["search", "0400"]);

    let history = ctx.run_json(&["history"]);
    let queries: Vec<&str> = history
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["query"].as_str().unwrap())
        .collect();
    assert_eq!(queries, vec!["0400", "ALICE"]);

    ctx.run_success(&["history", "--clear"]);
    let history = ctx.run_json(&["history"]);
    assert!(history.as_array().unwrap().is_empty());
}

#[test]
fn test_missing_snapshot_fails() {
    let ctx = CliTestContext::new();
    fs::remove_file(&ctx.contacts_path).unwrap();
    ctx.run_failure(&["sections"]);
}

#[test]
fn test_calls_grouped_by_day() {
    let ctx = CliTestContext::new();
    let log_path = ctx.data_dir.path().join("calls.json");
    fs::write(
        &log_path,
        r#"[
          {"id": "c1", "phone_number": "555-0100", "contact_name": "Alice", "kind": "Outgoing", "timestamp_ms": 1000, "duration_secs": 65},
          {"id": "c2", "phone_number": "555-0200", "contact_name": null, "kind": "Missed", "timestamp_ms": 2000, "duration_secs": 0}
        ]"#,
    )
    .unwrap();

    let entries = ctx.run_json(&["calls", log_path.to_str().unwrap()]);
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["kind"], "Header");
    // Newest first
    assert_eq!(entries[1]["value"]["id"], "c2");
}
