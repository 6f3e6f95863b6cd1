use std::path::Path;

use arcana_core::{DrawMachine, DrawOutcome, RngIndex, View};

pub fn run(deck: Option<&Path>, seed: Option<u64>, json: bool) -> Result<(), String> {
    let catalog = super::load_catalog(deck)?;
    let mut machine = DrawMachine::new(catalog, RngIndex::from_seed_option(seed));

    if let DrawOutcome::Ignored = machine.draw() {
        return Err("the deck did not yield a card".into());
    }

    let View::Revealed(card) = machine.view() else {
        return Err("drawn card is missing from the deck".into());
    };

    if json {
        let out = serde_json::to_string_pretty(card).map_err(|e| format!("JSON error: {e}"))?;
        println!("{out}");
    } else {
        super::show::print_card(card);
    }
    Ok(())
}
