//! Property tests for the draw/reveal state machine over arbitrary catalogs.

use proptest::prelude::*;

use arcana_core::{
    ArcanaConfig, Card, Catalog, Decor, DecorConfig, DrawMachine, DrawOutcome, DrawState,
    LayoutMode, RngIndex, Table, View,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A catalog of `n` cards with unique, non-contiguous ids.
fn catalog_of(n: usize) -> Catalog {
    let cards = (0..n)
        .map(|i| {
            let id = (i as u32) * 7 + 3;
            Card::new(id, format!("Card {id}"), format!("/png/card-{id}.png"), "")
        })
        .collect();
    Catalog::from_cards(cards).unwrap()
}

proptest! {
    #[test]
    fn draw_always_selects_a_catalog_card(n in 1usize..40, seed in any::<u64>(), rounds in 1usize..30) {
        let catalog = catalog_of(n);
        let mut machine = DrawMachine::new(catalog.clone(), RngIndex::seeded(seed));
        for _ in 0..rounds {
            let DrawOutcome::Drawn(id) = machine.draw() else {
                panic!("draw from hidden was ignored");
            };
            prop_assert!(catalog.find(id).is_some());
            prop_assert_eq!(machine.state(), DrawState::Revealed(id));
            let shown_id = match machine.view() {
                View::Revealed(card) => card.id,
                View::Hidden => 0,
            };
            prop_assert_eq!(shown_id, id);
            prop_assert!(machine.reset());
            prop_assert_eq!(machine.state().selected_id(), None);
        }
    }

    #[test]
    fn any_index_source_value_keeps_the_invariant(n in 1usize..20, raw in any::<usize>()) {
        let catalog = catalog_of(n);
        let mut machine = DrawMachine::new(catalog.clone(), arcana_core::ScriptedIndex::new([raw]));
        let DrawOutcome::Drawn(id) = machine.draw() else {
            panic!("draw from hidden was ignored");
        };
        prop_assert!(catalog.find(id).is_some());
    }

    #[test]
    fn layout_is_stable_per_side(width in 0u32..4000, breakpoint in 1u32..2000) {
        let mode = LayoutMode::for_width(width, breakpoint);
        prop_assert_eq!(mode, LayoutMode::for_width(width, breakpoint));
        prop_assert_eq!(mode.is_compact(), width <= breakpoint);
    }

    #[test]
    fn decor_lengths_match_config(layers in 0usize..10, expanded in 0usize..30, compact in 0usize..30, seed in any::<u64>()) {
        let config = DecorConfig {
            deck_layers: layers,
            expanded_particles: expanded,
            compact_particles: compact,
            ..DecorConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let wide = Decor::generate(LayoutMode::Expanded, &config, &mut rng);
        prop_assert_eq!(wide.offsets.len(), layers);
        prop_assert_eq!(wide.particles.len(), expanded);
        let narrow = Decor::generate(LayoutMode::Compact, &config, &mut rng);
        prop_assert_eq!(narrow.offsets.len(), 0);
        prop_assert_eq!(narrow.particles.len(), compact);
    }

    #[test]
    fn resizing_never_changes_the_selection(widths in proptest::collection::vec(0u32..3000, 1..20), seed in any::<u64>()) {
        let config = ArcanaConfig::default().with_seed(seed);
        let mut table = Table::from_config(Catalog::builtin(), 1024, &config);
        table.draw();
        let state = table.state();
        for width in widths {
            table.resize(width);
            prop_assert_eq!(table.state(), state);
            prop_assert_eq!(table.mode(), LayoutMode::for_width(width, config.breakpoint));
        }
    }
}

#[test]
fn single_card_catalog_never_fails() {
    let catalog = catalog_of(1);
    let mut machine = DrawMachine::new(catalog, RngIndex::from_os_rng());
    for _ in 0..1_000 {
        assert_eq!(machine.draw(), DrawOutcome::Drawn(3));
        machine.reset();
    }
}
