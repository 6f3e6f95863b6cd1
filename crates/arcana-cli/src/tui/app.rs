//! Terminal UI state wrapping a mounted [`Table`].

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use arcana_core::{ArcanaConfig, Catalog, DrawOutcome, DrawPolicy, RngIndex, Table, View};

use super::TuiOptions;

/// How long the stacked deck takes to fly apart after a draw.
pub const SCATTER_DURATION: Duration = Duration::from_millis(700);

/// Application state for the card table screen.
pub struct App {
    /// The mounted table.
    pub table: Table<RngIndex>,
    /// Logical pixels per terminal column, for the layout breakpoint.
    px_per_column: u32,
    /// Mount time, drives particle animation.
    started: Instant,
    /// When the current card was drawn.
    drawn_at: Option<Instant>,
    /// Description scroll offset in rows.
    pub scroll: u16,
    /// Whether the help popup is shown.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Clickable deck area from the last frame.
    pub deck_area: Option<Rect>,
    /// Clickable reset button area from the last frame.
    pub button_area: Option<Rect>,
}

impl App {
    /// Mount the table for a terminal `columns` wide.
    pub fn new(catalog: Catalog, options: &TuiOptions, columns: u16) -> Self {
        let mut config = ArcanaConfig::default().with_breakpoint(options.breakpoint);
        if let Some(seed) = options.seed {
            config = config.with_seed(seed);
        }
        if options.allow_redraw {
            config = config.with_policy(DrawPolicy::AllowRedraw);
        }
        let px_per_column = options.px_per_column.max(1);
        let width = u32::from(columns).saturating_mul(px_per_column);

        Self {
            table: Table::from_config(catalog, width, &config),
            px_per_column,
            started: Instant::now(),
            drawn_at: None,
            scroll: 0,
            show_help: false,
            should_quit: false,
            deck_area: None,
            button_area: None,
        }
    }

    /// React to a terminal resize.
    pub fn resize(&mut self, columns: u16) {
        let width = u32::from(columns).saturating_mul(self.px_per_column);
        if self.table.resize(width) {
            tracing::debug!(columns, mode = %self.table.mode(), "terminal crossed breakpoint");
        }
    }

    /// Draw a card from the deck.
    pub fn draw_card(&mut self) {
        if let DrawOutcome::Drawn(_) = self.table.draw() {
            self.drawn_at = Some(Instant::now());
            self.scroll = 0;
        }
    }

    /// Put the card back.
    pub fn reset(&mut self) {
        if self.table.reset() {
            self.drawn_at = None;
            self.scroll = 0;
        }
    }

    /// Seconds since mount.
    pub fn elapsed(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    /// Progress of the deck scatter animation, while it is running.
    pub fn scatter_progress(&self) -> Option<f32> {
        if self.table.scatter().is_empty() {
            return None;
        }
        let since = self.drawn_at?.elapsed();
        (since < SCATTER_DURATION)
            .then(|| since.as_secs_f32() / SCATTER_DURATION.as_secs_f32())
    }

    /// Whether a card is on display (a lookup miss counts as hidden).
    pub fn is_revealed(&self) -> bool {
        matches!(self.table.view(), View::Revealed(_))
    }

    /// Whether the card face should be shown (reveal happens after the scatter).
    pub fn card_visible(&self) -> bool {
        self.is_revealed() && self.scatter_progress().is_none()
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('?') => {
                self.show_help = !self.show_help;
                return;
            }
            KeyCode::Esc if self.show_help => {
                self.show_help = false;
                return;
            }
            _ => {}
        }

        if !self.is_revealed() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ' | 'd')) {
                self.draw_card();
            }
            return;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Backspace | KeyCode::Char(' ' | 'r') => {
                self.reset();
            }
            KeyCode::Char('d') => self.draw_card(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Char('g') => self.scroll = 0,
            _ => {}
        }
    }

    /// Handle a mouse event.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let at = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !self.is_revealed() {
                    if self.deck_area.is_some_and(|r| r.contains(at)) {
                        self.draw_card();
                    }
                } else if self.button_area.is_some_and(|r| r.contains(at)) {
                    self.reset();
                }
            }
            MouseEventKind::ScrollDown => self.scroll = self.scroll.saturating_add(1),
            MouseEventKind::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            _ => {}
        }
    }

    /// Context-sensitive status bar text.
    pub fn status_hint(&self) -> &'static str {
        if self.is_revealed() {
            "Enter/r/click button:draw again  j/k:scroll  ?:help  q:quit"
        } else {
            "Enter/Space/click:draw a card  ?:help  q:quit"
        }
    }
}
