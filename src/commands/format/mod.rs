//! Shared output formatting for engine results

pub mod human;
pub mod records;

use std::collections::HashMap;

use grimoire_core::error::Result;
use grimoire_core::idea::Idea;
use serde::Serialize;

/// Print any serializable result as pretty JSON
pub fn output_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Id -> title lookup for display; untitled ideas map to an empty string
pub fn title_map(ideas: &[Idea]) -> HashMap<&str, &str> {
    ideas
        .iter()
        .map(|idea| (idea.id.as_str(), idea.title().trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_map() {
        let ideas = vec![Idea::new("a").with_title(" Card Stab "), Idea::new("b")];
        let titles = title_map(&ideas);
        assert_eq!(titles["a"], "Card Stab");
        assert_eq!(titles["b"], "");
    }
}
