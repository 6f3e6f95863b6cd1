//! Empirical draw frequencies for checking selection fairness.

use crate::catalog::Catalog;
use crate::draw::{DrawMachine, DrawOutcome};
use crate::random::IndexSource;

/// Per-card draw counts over repeated draw/reset cycles.
#[derive(Debug, Clone)]
pub struct Tally {
    /// `(card id, times drawn)` in catalog order.
    counts: Vec<(u32, u64)>,
    trials: u64,
}

impl Tally {
    /// Draw and reset `trials` times from a fresh hidden machine.
    pub fn run<S: IndexSource>(catalog: &Catalog, source: S, trials: u64) -> Self {
        let mut counts: Vec<(u32, u64)> = catalog.iter().map(|c| (c.id, 0)).collect();
        let mut machine = DrawMachine::new(catalog.clone(), source);
        for _ in 0..trials {
            if let DrawOutcome::Drawn(id) = machine.draw()
                && let Some(slot) = counts.iter_mut().find(|(cid, _)| *cid == id)
            {
                slot.1 += 1;
            }
            machine.reset();
        }
        tracing::debug!(trials, cards = counts.len(), "tally complete");
        Self { counts, trials }
    }

    /// Number of draws performed.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// `(card id, times drawn)` pairs in catalog order.
    pub fn counts(&self) -> &[(u32, u64)] {
        &self.counts
    }

    /// Times a card was drawn; 0 for unknown ids.
    pub fn count(&self, id: u32) -> u64 {
        self.counts
            .iter()
            .find(|(cid, _)| *cid == id)
            .map_or(0, |(_, n)| *n)
    }

    /// Observed share of draws for a card.
    pub fn frequency(&self, id: u32) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.count(id) as f64 / self.trials as f64
    }

    /// Share each card would get under a uniform draw.
    pub fn expected_frequency(&self) -> f64 {
        if self.counts.is_empty() {
            return 0.0;
        }
        1.0 / self.counts.len() as f64
    }

    /// Largest absolute gap between observed and uniform frequency.
    pub fn max_deviation(&self) -> f64 {
        let expected = self.expected_frequency();
        self.counts
            .iter()
            .map(|(id, _)| (self.frequency(*id) - expected).abs())
            .fold(0.0, f64::max)
    }

    /// Pearson chi-square statistic against the uniform distribution,
    /// with `len - 1` degrees of freedom.
    pub fn chi_square(&self) -> f64 {
        if self.trials == 0 || self.counts.is_empty() {
            return 0.0;
        }
        let expected = self.trials as f64 / self.counts.len() as f64;
        self.counts
            .iter()
            .map(|(_, n)| {
                let diff = *n as f64 - expected;
                diff * diff / expected
            })
            .sum()
    }
}
