use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(deck: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(deck)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Image", "Description"]);

    for card in &catalog {
        let desc = if card.description.trim().is_empty() {
            "-".to_string()
        } else {
            super::truncate(&card.description, 60)
        };
        table.add_row(vec![card.id.to_string(), card.name.clone(), card.image.clone(), desc]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", catalog.len());

    Ok(())
}
