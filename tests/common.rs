use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn grimoire() -> Command {
    let mut cmd = cargo_bin_cmd!("grimoire");
    // Keep the user's real config out of the tests
    cmd.env("GRIMOIRE_CONFIG_DIR", "/nonexistent/grimoire-test-config");
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("GRIMOIRE_LOG");
    cmd
}

/// Fixed reference time so recency scores are reproducible
#[allow(dead_code)]
pub const NOW: &str = "2026-10-01T09:30:00Z";

#[allow(dead_code)]
pub const SAMPLE_LIBRARY: &str = r#"{
  "ideas": [
    {"id": "force-1", "type": "note", "title": "Card Force", "content": "A simple force using a break."},
    {"id": "force-2", "type": "note", "title": "Card Force", "content": "Completely unrelated text about juggling."},
    {"id": "coins-1", "title": "Coins across", "content": "Three coins travel one at a time from the left hand to the right hand", "tags": ["coins", "close-up"]},
    {"id": "coins-2", "title": "Coins across redux", "content": "Three coins travel one at a time from the left hand to the right hand", "tags": ["coins"]},
    {"id": "blueprint", "type": "visual", "content": "data:image/png;base64,AAAA"},
    {"id": "loose", "content": "levitation levitation thread reel"}
  ],
  "usage": {
    "coins-1": {"usedInCount": 1, "lastOpenedAt": "2026-09-30T09:30:00Z", "isStarred": true},
    "loose": {"isPinned": true}
  },
  "shows": [
    {"id": "show-1", "title": "Friday close-up", "ideaIds": ["coins-1", "force-1"]},
    {"id": "show-2", "title": "Gala", "ideaIds": ["coins-1"]}
  ]
}"#;

/// Write the sample library into `dir` and return its path
#[allow(dead_code)]
pub fn write_library(dir: &Path) -> PathBuf {
    write_file(dir, "library.json", SAMPLE_LIBRARY)
}

#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write fixture");
    path
}
