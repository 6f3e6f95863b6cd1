use std::path::Path;

use arcana_core::Card;
use colored::Colorize;

pub fn run(deck: Option<&Path>, id: u32) -> Result<(), String> {
    let catalog = super::load_catalog(deck)?;
    let card = catalog
        .find(id)
        .ok_or_else(|| format!("no card with id {id}"))?;
    print_card(card);
    Ok(())
}

/// Print a card's name, image path, and description paragraphs.
pub fn print_card(card: &Card) {
    println!();
    println!("  {}", card.name.bold().magenta());
    println!("  {}", card.image.dimmed());
    for paragraph in card.paragraphs() {
        println!();
        println!("  {paragraph}");
    }
    println!();
}
