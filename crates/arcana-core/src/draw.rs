//! The draw/reveal state machine.
//!
//! A [`DrawMachine`] starts with the deck hidden. `draw` picks a card
//! uniformly at random through its [`IndexSource`] and reveals it; `reset`
//! puts it back. The selected id is stored only inside
//! [`DrawState::Revealed`], so "no selection while hidden" holds by
//! construction.

use crate::card::Card;
use crate::catalog::Catalog;
use crate::config::DrawPolicy;
use crate::random::IndexSource;

/// Whether the deck is shown or a card is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawState {
    /// The deck is displayed and no card is chosen.
    #[default]
    Hidden,
    /// The card with this id is displayed.
    Revealed(u32),
}

impl DrawState {
    /// True when a card is revealed.
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    /// Id of the revealed card, `None` exactly when hidden.
    pub fn selected_id(self) -> Option<u32> {
        match self {
            Self::Hidden => None,
            Self::Revealed(id) => Some(id),
        }
    }
}

/// Result of a `draw` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A card was selected and revealed.
    Drawn(u32),
    /// A card was already revealed and the policy forbids redrawing.
    Ignored,
}

/// What a front-end should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    /// Show the deck.
    Hidden,
    /// Show this card with its text.
    Revealed(&'a Card),
}

/// Draw/reveal state machine over a catalog.
#[derive(Debug, Clone)]
pub struct DrawMachine<S> {
    catalog: Catalog,
    source: S,
    state: DrawState,
    policy: DrawPolicy,
}

impl<S: IndexSource> DrawMachine<S> {
    /// Create a machine in the hidden state.
    pub fn new(catalog: Catalog, source: S) -> Self {
        Self {
            catalog,
            source,
            state: DrawState::Hidden,
            policy: DrawPolicy::default(),
        }
    }

    /// Set the redraw policy.
    pub fn with_policy(mut self, policy: DrawPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Start from a previously captured state.
    pub fn with_state(mut self, state: DrawState) -> Self {
        self.state = state;
        self
    }

    /// Current state.
    pub fn state(&self) -> DrawState {
        self.state
    }

    /// The catalog cards are drawn from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The active redraw policy.
    pub fn policy(&self) -> DrawPolicy {
        self.policy
    }

    /// Select a card uniformly at random and reveal it.
    ///
    /// A revealed id missing from the catalog counts as hidden.
    pub fn draw(&mut self) -> DrawOutcome {
        if self.state.is_revealed() && self.selected_card().is_none() {
            self.state = DrawState::Hidden;
        }
        if self.state.is_revealed() && self.policy == DrawPolicy::HiddenOnly {
            tracing::debug!("draw ignored: card already revealed");
            return DrawOutcome::Ignored;
        }

        let len = self.catalog.len();
        let index = self.source.next_index(len) % len;
        let Some(card) = self.catalog.get(index) else {
            return DrawOutcome::Ignored;
        };
        let id = card.id;
        tracing::debug!(index, id, name = %card.name, "card drawn");
        self.state = DrawState::Revealed(id);
        DrawOutcome::Drawn(id)
    }

    /// Return to the hidden deck. Returns false if nothing was revealed.
    pub fn reset(&mut self) -> bool {
        if !self.state.is_revealed() {
            return false;
        }
        tracing::debug!("card returned to deck");
        self.state = DrawState::Hidden;
        true
    }

    /// The revealed card, if any and if its id is in the catalog.
    pub fn selected_card(&self) -> Option<&Card> {
        let id = self.state.selected_id()?;
        let card = self.catalog.find(id);
        if card.is_none() {
            tracing::warn!(id, "revealed id not in catalog; showing deck");
        }
        card
    }

    /// What to display. Falls back to the deck when the lookup misses.
    pub fn view(&self) -> View<'_> {
        match self.selected_card() {
            Some(card) => View::Revealed(card),
            None => View::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{RngIndex, ScriptedIndex};

    fn machine(script: &[usize]) -> DrawMachine<ScriptedIndex> {
        DrawMachine::new(Catalog::builtin(), ScriptedIndex::new(script.to_vec()))
    }

    #[test]
    fn starts_hidden() {
        let m = machine(&[0]);
        assert_eq!(m.state(), DrawState::Hidden);
        assert_eq!(m.state().selected_id(), None);
        assert!(!m.state().is_revealed());
        assert_eq!(m.view(), View::Hidden);
    }

    #[test]
    fn draw_maps_index_to_card() {
        let mut m = machine(&[2]);
        assert_eq!(m.draw(), DrawOutcome::Drawn(3));
        assert_eq!(m.state(), DrawState::Revealed(3));
        assert_eq!(m.selected_card().unwrap().name, "O Imperador – Elvis Presley");
    }

    #[test]
    fn draw_while_revealed_is_ignored() {
        let mut m = machine(&[0, 4]);
        m.draw();
        assert_eq!(m.draw(), DrawOutcome::Ignored);
        assert_eq!(m.state(), DrawState::Revealed(1));
    }

    #[test]
    fn redraw_policy_rerolls() {
        let mut m = machine(&[0, 4]).with_policy(DrawPolicy::AllowRedraw);
        m.draw();
        assert_eq!(m.draw(), DrawOutcome::Drawn(5));
        assert_eq!(m.state(), DrawState::Revealed(5));
    }

    #[test]
    fn reset_returns_to_hidden() {
        let mut m = machine(&[1]);
        m.draw();
        assert!(m.reset());
        assert_eq!(m.state(), DrawState::Hidden);
        assert_eq!(m.state().selected_id(), None);
    }

    #[test]
    fn reset_while_hidden_is_noop() {
        let mut m = machine(&[1]);
        assert!(!m.reset());
        assert_eq!(m.state(), DrawState::Hidden);
    }

    #[test]
    fn draw_reset_draw_sequence() {
        let mut m = machine(&[3, 0]);
        assert_eq!(m.draw(), DrawOutcome::Drawn(4));
        m.reset();
        assert_eq!(m.view(), View::Hidden);
        assert_eq!(m.draw(), DrawOutcome::Drawn(1));
    }

    #[test]
    fn out_of_range_index_wraps() {
        let mut m = machine(&[7]);
        assert_eq!(m.draw(), DrawOutcome::Drawn(3));
    }

    #[test]
    fn lookup_miss_falls_back_to_hidden() {
        let m = machine(&[0]).with_state(DrawState::Revealed(42));
        assert!(m.selected_card().is_none());
        assert_eq!(m.view(), View::Hidden);
    }

    #[test]
    fn draw_after_lookup_miss_selects_a_card() {
        let mut m = machine(&[0]).with_state(DrawState::Revealed(42));
        assert_eq!(m.draw(), DrawOutcome::Drawn(1));
        assert_eq!(m.state(), DrawState::Revealed(1));
        assert_eq!(m.view(), View::Revealed(m.catalog().get(0).unwrap()));
    }

    #[test]
    fn single_card_catalog_always_selects_it() {
        let catalog = Catalog::from_cards(vec![Card::new(9, "Só", "/s.png", "")]).unwrap();
        let mut m = DrawMachine::new(catalog, RngIndex::seeded(1));
        for _ in 0..100 {
            assert_eq!(m.draw(), DrawOutcome::Drawn(9));
            m.reset();
        }
    }
}
