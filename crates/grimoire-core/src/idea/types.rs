use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{GrimoireError, Result};

/// Declared kind of a saved idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdeaType {
    /// Free-text note
    Note,
    /// Image or visual blueprint
    Visual,
    /// Serialized rehearsal transcript
    RehearsalTranscript,
}

impl IdeaType {
    /// All canonical type names
    pub const VALID_TYPES: &'static [&'static str] = &["note", "visual", "rehearsal-transcript"];

    pub fn as_str(&self) -> &'static str {
        match self {
            IdeaType::Note => "note",
            IdeaType::Visual => "visual",
            IdeaType::RehearsalTranscript => "rehearsal-transcript",
        }
    }
}

impl FromStr for IdeaType {
    type Err = GrimoireError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "note" | "text" => Ok(IdeaType::Note),
            "visual" | "image" | "visual-blueprint" => Ok(IdeaType::Visual),
            "rehearsal-transcript" | "rehearsal" => Ok(IdeaType::RehearsalTranscript),
            other => Err(GrimoireError::invalid_value(
                "idea type",
                format!("{} (expected: {})", other, Self::VALID_TYPES.join(", ")),
            )),
        }
    }
}

impl fmt::Display for IdeaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lenient deserializer: unknown, blank, null or non-string types mean "no declared type"
pub(crate) fn deserialize_idea_type<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<IdeaType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| s.parse().ok()))
}
