//! Terminal card table: setup, teardown, and event loop.

mod app;
mod views;

use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use arcana_core::Catalog;

use app::App;

/// Frame interval while animations run.
const TICK: Duration = Duration::from_millis(50);

/// Options for the terminal table.
#[derive(Debug, Clone)]
pub struct TuiOptions {
    /// RNG seed for draws and decor.
    pub seed: Option<u64>,
    /// Allow drawing again while a card is revealed.
    pub allow_redraw: bool,
    /// Compact layout breakpoint in logical pixels.
    pub breakpoint: u32,
    /// Logical pixels per terminal column.
    pub px_per_column: u32,
}

/// Launch the terminal UI.
pub fn run(catalog: Catalog, options: &TuiOptions) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let columns = terminal.size().map(|s| s.width).unwrap_or(80);
    let mut app = App::new(catalog, options, columns);
    tracing::info!(columns, mode = %app.table.mode(), "tui started");

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop. Redraws every tick so particles keep moving.
fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| views::draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        if !event::poll(TICK).map_err(|e| format!("event error: {e}"))? {
            continue;
        }
        match event::read().map_err(|e| format!("event error: {e}"))? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(columns, _) => app.resize(columns),
            _ => {}
        }
    }
}
