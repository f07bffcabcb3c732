//! Saved idea records and the usage signals attached to them
//!
//! Ideas are owned by the persistence layer; the engine only reads them.
//! Missing fields deserialize to empty values rather than errors.

mod types;
mod usage;

pub use types::IdeaType;
pub use usage::{usage_for, UsageContext, UsageMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single saved idea (note, visual reference or rehearsal transcript)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: String,

    #[serde(
        rename = "type",
        default,
        deserialize_with = "types::deserialize_idea_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub idea_type: Option<IdeaType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Tags in the order the user entered them
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Idea {
    pub fn new(id: impl Into<String>) -> Self {
        Idea {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_type(mut self, idea_type: IdeaType) -> Self {
        self.idea_type = Some(idea_type);
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Title and content joined by a space, the text every heuristic reads
    pub fn text(&self) -> String {
        format!("{} {}", self.title(), self.content())
    }

    /// First non-blank tag, in the user's own order
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.iter().map(|t| t.trim()).find(|t| !t.is_empty())
    }

    /// Case-insensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .iter()
            .any(|t| t.trim().eq_ignore_ascii_case(tag.trim()))
    }
}

fn deserialize_tags<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}
