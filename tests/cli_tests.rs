//! Integration tests for the grimoire CLI
//!
//! These tests run the grimoire binary against a small library snapshot.

mod common;

use common::{grimoire, write_file, write_library, NOW};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help, version and usage errors
// ============================================================================

#[test]
fn test_help_flag() {
    grimoire()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: grimoire"))
        .stdout(predicate::str::contains("organize"))
        .stdout(predicate::str::contains("duplicates"))
        .stdout(predicate::str::contains("rank"));
}

#[test]
fn test_version_flag() {
    grimoire()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("grimoire"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());
    grimoire()
        .args(["--format", "xml", "organize"])
        .arg(&library)
        .assert()
        .code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    grimoire()
        .args(["--format", "json", "organize", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_missing_library_exit_code_3() {
    let dir = tempdir().unwrap();
    grimoire()
        .arg("organize")
        .arg(dir.path().join("missing.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("library not found"));
}

#[test]
fn test_malformed_library_json_error() {
    let dir = tempdir().unwrap();
    let library = write_file(dir.path(), "library.json", "{ nope");
    grimoire()
        .args(["--format", "json", "clusters"])
        .arg(&library)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"invalid_library\""));
}

// ============================================================================
// organize
// ============================================================================

#[test]
fn test_organize_json() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());

    let output = grimoire()
        .args(["--format", "json", "--now", NOW, "organize"])
        .arg(&library)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["clusters"][0]["key"], "type:note");
    assert_eq!(json["clusters"][1]["key"], "tag:coins");
    assert_eq!(json["duplicates"][0]["a"], "force-1");
    assert_eq!(json["duplicates"][0]["b"], "force-2");
    assert_eq!(json["duplicates"][0]["score"], 1.0);
    assert_eq!(json["duplicates"][1]["a"], "coins-1");

    let coins = json["tagSuggestions"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["ideaId"] == "coins-1")
        .unwrap();
    assert_eq!(
        coins["suggested"],
        serde_json::json!(["repertoire", "the", "hand", "across"])
    );
}

#[test]
fn test_organize_human() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());

    grimoire()
        .args(["--now", NOW, "organize"])
        .arg(&library)
        .assert()
        .success()
        .stdout(predicate::str::contains("== Clusters"))
        .stdout(predicate::str::contains("Type: note (2)"))
        .stdout(predicate::str::contains("Theme: coins (2)"))
        .stdout(predicate::str::contains("1.00  Card Force (force-1) <-> Card Force (force-2)"))
        .stdout(predicate::str::contains("== Tag suggestions"));
}

#[test]
fn test_organize_records() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());

    grimoire()
        .args(["--format", "records", "--now", NOW, "organize"])
        .arg(&library)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H grimoire=1 records=1 mode=organize ideas=6",
        ))
        .stdout(predicate::str::contains(
            "C tag:coins size=2 \"Theme: coins\" ids=coins-1,coins-2",
        ))
        .stdout(predicate::str::contains("D force-1 force-2 score=1.00"))
        .stdout(predicate::str::contains("T coins-1 suggested=repertoire,the,hand,across"));
}

#[test]
fn test_organize_yaml_library() {
    let dir = tempdir().unwrap();
    let library = write_file(
        dir.path(),
        "library.yml",
        "ideas:\n  - id: y-1\n    title: Linking rings\n    tags: [stage]\n  - id: y-2\n    title: linking rings\n",
    );

    grimoire()
        .args(["--format", "records", "organize"])
        .arg(&library)
        .assert()
        .success()
        .stdout(predicate::str::contains("D y-1 y-2 score=1.00"))
        .stdout(predicate::str::contains("C tag:stage size=1"));
}

#[test]
fn test_organize_is_repeatable() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());

    let run = || {
        grimoire()
            .args(["--format", "json", "--now", NOW, "organize"])
            .arg(&library)
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

// ============================================================================
// Single-component commands
// ============================================================================

#[test]
fn test_duplicates_command() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());

    grimoire()
        .args(["--format", "records", "duplicates"])
        .arg(&library)
        .assert()
        .success()
        .stdout(predicate::str::contains("D force-1 force-2 score=1.00"))
        .stdout(predicate::str::contains("D coins-1 coins-2 score=0.92"));
}

#[test]
fn test_duplicates_respects_config() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());
    let config = write_file(dir.path(), "config.toml", "[duplicates]\nmax_pairs = 1\n");

    let output = grimoire()
        .args(["--format", "json", "duplicates", "--config"])
        .arg(&config)
        .arg(&library)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[test]
fn test_invalid_config_is_usage_error() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());
    let config = write_file(dir.path(), "config.toml", "[duplicates]\nthreshold = 2.0\n");

    grimoire()
        .arg("--config")
        .arg(&config)
        .arg("duplicates")
        .arg(&library)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid duplicates.threshold"));
}

#[test]
fn test_clusters_command_human() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());

    grimoire()
        .arg("clusters")
        .arg(&library)
        .assert()
        .success()
        .stdout(predicate::str::contains("Type: visual (1)"))
        .stdout(predicate::str::contains("Theme: levitation (1)"))
        .stdout(predicate::str::contains("  blueprint blueprint"));
}

#[test]
fn test_tags_command_json() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());

    let output = grimoire()
        .args(["--format", "json", "--now", NOW, "tags"])
        .arg(&library)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    for suggestion in json.as_array().unwrap() {
        let suggested = suggestion["suggested"].as_array().unwrap();
        assert!(!suggested.is_empty() && suggested.len() <= 4);
    }
}

#[test]
fn test_rank_command_with_limit() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());

    let output = grimoire()
        .args(["--format", "records", "--now", NOW, "rank", "--limit", "2"])
        .arg(&library)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let ranks: Vec<&str> = stdout.lines().filter(|l| l.starts_with("R ")).collect();
    assert_eq!(ranks.len(), 2);
    assert!(ranks[0].starts_with("R 1 coins-1 score=43"));
}

#[test]
fn test_rank_zero_limit_is_usage_error() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());

    grimoire()
        .args(["rank", "--limit", "0"])
        .arg(&library)
        .assert()
        .code(2);
}

#[test]
fn test_score_command_records() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());

    grimoire()
        .args(["--format", "records", "--now", NOW, "score"])
        .arg(&library)
        .arg("coins-1")
        .assert()
        .success()
        .stdout(predicate::str::contains("S coins-1 usage=16.00"))
        .stdout(predicate::str::contains("S coins-1 recency=7.50"))
        .stdout(predicate::str::contains("S coins-1 starred=10.00"))
        .stdout(predicate::str::contains("S coins-1 total=43"));
}

#[test]
fn test_score_unknown_idea() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());

    grimoire()
        .args(["--format", "json", "score"])
        .arg(&library)
        .arg("ghost")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"idea_not_found\""));
}

#[test]
fn test_quiet_suppresses_empty_messages() {
    let dir = tempdir().unwrap();
    let library = write_file(dir.path(), "empty.json", "{}");

    grimoire()
        .arg("duplicates")
        .arg(&library)
        .assert()
        .success()
        .stdout(predicate::str::contains("No likely duplicates"));

    grimoire()
        .args(["--quiet", "duplicates"])
        .arg(&library)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
