pub mod draw;
pub mod list;
pub mod show;
pub mod stats;

use std::path::Path;

use arcana_core::Catalog;

/// The deck to use: a JSON deck file if given, the built-in deck otherwise.
pub fn load_catalog(deck: Option<&Path>) -> Result<Catalog, String> {
    match deck {
        Some(path) => Catalog::load(path).map_err(|e| e.to_string()),
        None => Ok(Catalog::builtin()),
    }
}

/// Shorten text to at most `max` characters, adding an ellipsis when cut.
fn truncate(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut.trim_end())
}
