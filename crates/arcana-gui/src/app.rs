//! Application state and per-frame input handling.
//!
//! Kept free of macroquad calls so it can be driven from tests with
//! synthetic [`FrameInput`]s.

use arcana_core::{
    ArcanaConfig, Catalog, DrawOutcome, DrawPolicy, LayoutMode, RngIndex, Table, View,
};

use crate::layout::Stage;
use crate::theme::{REVEAL_DELAY_EXPANDED, REVEAL_SECS, SCATTER_SECS};

/// Input sampled once per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Window width in logical pixels.
    pub width: f32,
    /// Window height in logical pixels.
    pub height: f32,
    /// Mouse position.
    pub mouse: (f32, f32),
    /// Left button pressed this frame.
    pub clicked: bool,
    /// Draw key (Space/Enter/D) pressed.
    pub draw_key: bool,
    /// Reset key (Enter/Backspace/R while revealed) pressed.
    pub reset_key: bool,
    /// Quit key pressed.
    pub quit_key: bool,
    /// Vertical wheel movement.
    pub wheel: f32,
    /// Seconds since program start.
    pub time: f64,
}

/// Application state shared by the update and draw passes.
pub struct AppState {
    /// The mounted table.
    pub table: Table<RngIndex>,
    /// Screen regions for the current window size.
    pub stage: Stage,
    /// Time of the last successful draw.
    drawn_at: Option<f64>,
    /// Mount time.
    mounted_at: f64,
    /// Time of the current frame.
    now: f64,
    /// Last window width seen, in whole pixels.
    width: u32,
    /// Description scroll offset in pixels.
    pub scroll: f32,
    /// Mouse position for hover effects.
    pub mouse: (f32, f32),
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl AppState {
    /// Mount the table for a window of `width`×`height` at time `now`.
    pub fn new(catalog: Catalog, config: &ArcanaConfig, width: f32, height: f32, now: f64) -> Self {
        let px = width.max(0.0) as u32;
        let table = Table::from_config(catalog, px, config);
        let stage = Stage::compute(width, height, table.mode());
        Self {
            table,
            stage,
            drawn_at: None,
            mounted_at: now,
            now,
            width: px,
            scroll: 0.0,
            mouse: (0.0, 0.0),
            should_quit: false,
        }
    }

    /// Apply one frame of input.
    pub fn update(&mut self, input: &FrameInput) {
        self.now = input.time;
        self.mouse = input.mouse;

        let px = input.width.max(0.0) as u32;
        if px != self.width {
            self.width = px;
            if self.table.resize(px) {
                tracing::debug!(width = px, mode = %self.table.mode(), "window crossed breakpoint");
            }
        }
        self.stage = Stage::compute(input.width, input.height, self.table.mode());

        if input.quit_key {
            self.should_quit = true;
            return;
        }

        if !self.is_revealed() {
            let on_deck = self.stage.deck.contains(input.mouse.0, input.mouse.1);
            if input.draw_key || (input.clicked && on_deck) {
                self.draw_card();
            }
            return;
        }

        if self.reveal_progress().is_none() {
            return;
        }
        let on_button = self.stage.button.contains(input.mouse.0, input.mouse.1);
        if input.reset_key || (input.clicked && on_button) {
            self.reset();
            return;
        }
        if input.draw_key && self.table.policy() == DrawPolicy::AllowRedraw {
            self.draw_card();
            return;
        }
        if input.wheel != 0.0 {
            self.scroll = (self.scroll - input.wheel * 30.0).max(0.0);
        }
    }

    fn draw_card(&mut self) {
        if let DrawOutcome::Drawn(id) = self.table.draw() {
            tracing::info!(id, "card drawn");
            self.drawn_at = Some(self.now);
            self.scroll = 0.0;
        }
    }

    fn reset(&mut self) {
        if self.table.reset() {
            self.drawn_at = None;
            self.scroll = 0.0;
        }
    }

    /// Whether a card is on display (a lookup miss counts as hidden).
    pub fn is_revealed(&self) -> bool {
        matches!(self.table.view(), View::Revealed(_))
    }

    /// Seconds since mount.
    pub fn elapsed(&self) -> f32 {
        (self.now - self.mounted_at) as f32
    }

    fn since_draw(&self) -> Option<f64> {
        self.drawn_at.map(|t| (self.now - t).max(0.0))
    }

    /// Progress of the deck scatter animation, while it runs.
    pub fn scatter_progress(&self) -> Option<f32> {
        if self.table.scatter().is_empty() {
            return None;
        }
        let since = self.since_draw()?;
        (since < SCATTER_SECS).then(|| (since / SCATTER_SECS) as f32)
    }

    /// Fade-in progress of the revealed card, `None` before it starts.
    pub fn reveal_progress(&self) -> Option<f32> {
        if !self.is_revealed() {
            return None;
        }
        let delay = match self.table.mode() {
            LayoutMode::Compact => 0.0,
            LayoutMode::Expanded => REVEAL_DELAY_EXPANDED,
        };
        let since = self.since_draw()? - delay;
        (since >= 0.0).then(|| (since / REVEAL_SECS).min(1.0) as f32)
    }

    /// Whether the deck (or its scatter) should be drawn this frame.
    pub fn deck_visible(&self) -> bool {
        !self.is_revealed() || self.scatter_progress().is_some()
    }
}
