//! Library snapshots: ideas, usage and shows loaded from a JSON or YAML file
//!
//! This is the boundary where untrusted records are normalized before they
//! reach the engine.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GrimoireError, Result};
use crate::idea::{Idea, UsageMap};

/// A performance show referencing saved ideas
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub idea_ids: Vec<String>,
}

/// A snapshot of a user's idea library
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Library {
    #[serde(default)]
    pub ideas: Vec<Idea>,

    /// Explicit usage signals keyed by idea id
    #[serde(default)]
    pub usage: UsageMap,

    #[serde(default)]
    pub shows: Vec<Show>,
}

impl Library {
    /// Load a library from disk; `.yaml`/`.yml` files are parsed as YAML, anything else as JSON
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GrimoireError::LibraryNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

        let library: Library = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| GrimoireError::invalid_library(path, e))?
        } else {
            serde_json::from_str(&content).map_err(|e| GrimoireError::invalid_library(path, e))?
        };

        tracing::debug!(
            path = %path.display(),
            ideas = library.ideas.len(),
            shows = library.shows.len(),
            "load_library"
        );
        Ok(library)
    }

    /// Find an idea by id
    pub fn find(&self, id: &str) -> Result<&Idea> {
        self.ideas
            .iter()
            .find(|idea| idea.id == id)
            .ok_or_else(|| GrimoireError::IdeaNotFound { id: id.to_string() })
    }

    /// Usage map with show references folded in.
    ///
    /// `used_in_count` becomes the larger of the explicit count and the number
    /// of distinct shows listing the idea.
    pub fn usage_map(&self) -> UsageMap {
        let mut show_counts: HashMap<&str, usize> = HashMap::new();
        for show in &self.shows {
            let unique: HashSet<&str> = show.idea_ids.iter().map(String::as_str).collect();
            for id in unique {
                *show_counts.entry(id).or_default() += 1;
            }
        }

        let mut usage = self.usage.clone();
        for (id, count) in show_counts {
            let entry = usage.entry(id.to_string()).or_default();
            let count = u32::try_from(count).unwrap_or(u32::MAX);
            entry.used_in_count = entry.used_in_count.max(count);
        }
        usage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idea::{IdeaType, UsageContext};
    use tempfile::tempdir;

    const SAMPLE_JSON: &str = r#"{
        "ideas": [
            {"id": "i-1", "type": "note", "title": "Coin vanish", "content": "French drop", "tags": ["coins"]},
            {"id": "i-2", "title": "Rope"}
        ],
        "usage": {
            "i-1": {"usedInCount": 1, "isStarred": true},
            "i-2": {"usedInCount": -5}
        },
        "shows": [
            {"id": "s-1", "title": "Friday set", "ideaIds": ["i-1", "i-2", "i-1"]},
            {"id": "s-2", "ideaIds": ["i-1"]}
        ]
    }"#;

    #[test]
    fn test_load_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.json");
        fs::write(&path, SAMPLE_JSON).unwrap();

        let library = Library::load(&path).unwrap();
        assert_eq!(library.ideas.len(), 2);
        assert_eq!(library.shows.len(), 2);
        assert_eq!(library.usage["i-2"].used_in_count, 0);
        assert_eq!(library.find("i-2").unwrap().title(), "Rope");
    }

    #[test]
    fn test_null_usage_fields_fall_back_to_defaults() {
        let library: Library = serde_json::from_str(
            r#"{
                "ideas": [{"id": "a"}],
                "usage": {"a": {"usedInCount": null, "isStarred": null, "isPinned": null}}
            }"#,
        )
        .unwrap();

        assert_eq!(library.usage["a"], UsageContext::default());
    }

    #[test]
    fn test_non_string_type_means_no_declared_type() {
        let library: Library = serde_json::from_str(
            r#"{"ideas": [{"id": "a", "type": 3}, {"id": "b", "type": {"kind": "visual"}}, {"id": "c", "type": "image"}]}"#,
        )
        .unwrap();

        assert_eq!(library.ideas[0].idea_type, None);
        assert_eq!(library.ideas[1].idea_type, None);
        assert_eq!(library.ideas[2].idea_type, Some(IdeaType::Visual));
    }

    #[test]
    fn test_yaml_tolerates_malformed_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.yml");
        fs::write(
            &path,
            "ideas:\n  - id: y-1\n    type: 7\nusage:\n  y-1:\n    isStarred: ~\n    isPinned: true\n",
        )
        .unwrap();

        let library = Library::load(&path).unwrap();
        assert_eq!(library.ideas[0].idea_type, None);
        assert!(!library.usage["y-1"].is_starred);
        assert!(library.usage["y-1"].is_pinned);
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.yaml");
        fs::write(
            &path,
            "ideas:\n  - id: y-1\n    title: Linking rings\n    tags: [stage]\nusage:\n  y-1:\n    isPinned: true\n",
        )
        .unwrap();

        let library = Library::load(&path).unwrap();
        assert_eq!(library.ideas[0].tags, vec!["stage"]);
        assert!(library.usage["y-1"].is_pinned);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Library::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, GrimoireError::LibraryNotFound { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Library::load(&path).unwrap_err();
        assert!(matches!(err, GrimoireError::InvalidLibrary { .. }));
    }

    #[test]
    fn test_find_unknown_idea() {
        let library = Library::default();
        assert!(matches!(
            library.find("ghost"),
            Err(GrimoireError::IdeaNotFound { .. })
        ));
    }

    #[test]
    fn test_usage_map_folds_in_show_references() {
        let library: Library = serde_json::from_str(SAMPLE_JSON).unwrap();
        let usage = library.usage_map();

        // i-1 is in two distinct shows; explicit count was 1
        assert_eq!(usage["i-1"].used_in_count, 2);
        assert!(usage["i-1"].is_starred);
        // i-2 is in one show; explicit count normalized to 0
        assert_eq!(usage["i-2"].used_in_count, 1);
    }

    #[test]
    fn test_usage_map_keeps_larger_explicit_count() {
        let mut library = Library::default();
        library.usage.insert(
            "i-1".to_string(),
            UsageContext::default().with_used_in(5),
        );
        library.shows.push(Show {
            id: "s-1".to_string(),
            title: None,
            idea_ids: vec!["i-1".to_string()],
        });
        assert_eq!(library.usage_map()["i-1"].used_in_count, 5);
    }
}
