//! The mounted card-draw component.
//!
//! A [`Table`] owns one draw state machine, the viewport tracker, and the
//! decor generated for the current layout mode. Front-ends create it on
//! mount, forward clicks and resizes, and drop it on unmount.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalog::Catalog;
use crate::config::{ArcanaConfig, DrawPolicy};
use crate::decor::{Decor, DecorConfig, Scatter};
use crate::draw::{DrawMachine, DrawOutcome, DrawState, View};
use crate::layout::{LayoutMode, ViewportTracker};
use crate::random::{IndexSource, RngIndex};

/// Stream offset so decor and card selection never share a seeded sequence.
const DECOR_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// A mounted draw table.
#[derive(Debug)]
pub struct Table<S> {
    machine: DrawMachine<S>,
    viewport: ViewportTracker,
    mode: LayoutMode,
    decor_config: DecorConfig,
    decor: Decor,
    scatter: Vec<Scatter>,
    rng: StdRng,
}

impl Table<RngIndex> {
    /// Mount a table with the configured seed (or OS randomness).
    pub fn from_config(catalog: Catalog, width: u32, config: &ArcanaConfig) -> Self {
        Self::mount(catalog, RngIndex::from_seed_option(config.seed), width, config)
    }
}

impl<S: IndexSource> Table<S> {
    /// Mount a table: hidden deck, layout derived from `width`, fresh decor.
    pub fn mount(catalog: Catalog, source: S, width: u32, config: &ArcanaConfig) -> Self {
        let machine = DrawMachine::new(catalog, source).with_policy(config.policy);
        let mut viewport = ViewportTracker::new(config.breakpoint);
        let mode = viewport
            .observe(width)
            .unwrap_or_else(|| LayoutMode::for_width(width, config.breakpoint));
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ DECOR_SEED_SALT),
            None => StdRng::from_os_rng(),
        };
        let decor = Decor::generate(mode, &config.decor, &mut rng);
        tracing::debug!(width, %mode, cards = machine.catalog().len(), "table mounted");

        Self {
            machine,
            viewport,
            mode,
            decor_config: config.decor.clone(),
            decor,
            scatter: Vec::new(),
            rng,
        }
    }

    /// Report a new viewport width. Returns true when the layout mode changed
    /// and decor was regenerated.
    pub fn resize(&mut self, width: u32) -> bool {
        let Some(mode) = self.viewport.observe(width) else {
            return false;
        };
        self.mode = mode;
        self.decor = Decor::generate(mode, &self.decor_config, &mut self.rng);
        self.scatter.clear();
        true
    }

    /// Draw a card. In the expanded layout this also rolls the deck's exit motion.
    pub fn draw(&mut self) -> DrawOutcome {
        let was_hidden = matches!(self.machine.view(), View::Hidden);
        let outcome = self.machine.draw();
        if was_hidden && matches!(outcome, DrawOutcome::Drawn(_)) {
            self.scatter = self.decor.scatter(&self.decor_config, &mut self.rng);
        }
        outcome
    }

    /// Put the card back and show the deck again.
    pub fn reset(&mut self) -> bool {
        let changed = self.machine.reset();
        if changed {
            self.scatter.clear();
        }
        changed
    }

    /// What to display.
    pub fn view(&self) -> View<'_> {
        self.machine.view()
    }

    /// Current draw state.
    pub fn state(&self) -> DrawState {
        self.machine.state()
    }

    /// Whether drawing again while revealed re-rolls.
    pub fn policy(&self) -> DrawPolicy {
        self.machine.policy()
    }

    /// Current layout mode.
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Decor for the current layout mode.
    pub fn decor(&self) -> &Decor {
        &self.decor
    }

    /// Exit motions of the stacked deck for the last draw, empty otherwise.
    pub fn scatter(&self) -> &[Scatter] {
        &self.scatter
    }

    /// The catalog being drawn from.
    pub fn catalog(&self) -> &Catalog {
        self.machine.catalog()
    }
}
