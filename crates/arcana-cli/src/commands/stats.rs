use std::path::Path;

use arcana_core::{RngIndex, Tally};
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(deck: Option<&Path>, trials: u64, seed: Option<u64>) -> Result<(), String> {
    if trials == 0 {
        return Err("trials must be at least 1".into());
    }
    let catalog = super::load_catalog(deck)?;
    let tally = Tally::run(&catalog, RngIndex::from_seed_option(seed), trials);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Draws", "Share", ""]);

    let expected = tally.expected_frequency();
    for card in &catalog {
        let share = tally.frequency(card.id);
        table.add_row(vec![
            card.id.to_string(),
            card.name.clone(),
            tally.count(card.id).to_string(),
            format!("{:.2}%", share * 100.0),
            bar(share, expected),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} draws, expected share {:.2}%, max deviation {:.2} pts",
        tally.trials(),
        expected * 100.0,
        tally.max_deviation() * 100.0
    );
    println!(
        "  chi-square {:.3} ({} degrees of freedom)",
        tally.chi_square(),
        catalog.len().saturating_sub(1)
    );

    Ok(())
}

/// A 20-column bar scaled so the uniform share sits at the midpoint.
fn bar(share: f64, expected: f64) -> String {
    let width = 20usize;
    let filled = if expected > 0.0 {
        ((share / expected) * (width as f64 / 2.0)).round() as usize
    } else {
        0
    };
    let filled = filled.min(width);
    format!(
        "{}{}",
        "█".repeat(filled).green(),
        "░".repeat(width - filled).dimmed()
    )
}
