//! A single drawable tarot card.

use serde::{Deserialize, Serialize};

/// An immutable tarot card record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique positive identifier within its catalog.
    pub id: u32,
    /// Display name, e.g. "O Mago - Freddie Mercury".
    pub name: String,
    /// Path to the card illustration asset.
    pub image: String,
    /// Narrative text, possibly several paragraphs separated by blank lines.
    pub description: String,
}

impl Card {
    /// Create a card from its parts.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            description: description.into(),
        }
    }

    /// The description split into its non-empty paragraphs.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.description
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}", self.id, self.name)
    }
}
