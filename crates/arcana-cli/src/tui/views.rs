//! Rendering for the card table: deck, revealed card, particles, and help.

use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use arcana_core::{Card, Catalog, LayoutMode, View};

use super::app::App;

/// Card size in cells.
const CARD_W: u16 = 22;
const CARD_H: u16 = 15;

/// Rows a particle rises at the top of its loop.
const RISE_ROWS: f32 = 4.0;

/// Cells per unit of stacked-deck jitter.
const OFFSET_COLS: f32 = 0.4;
const OFFSET_ROWS: f32 = 0.2;

/// Cells per unit of scatter travel.
const SCATTER_COLS: f32 = 0.12;
const SCATTER_ROWS: f32 = 0.05;

const RESET_LABEL: &str = " Tirar outra carta ";
/// Help popup width, borders included.
const HELP_WIDTH: u16 = 48;

const ACCENT: Color = Color::Magenta;

/// Draw one frame.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(frame.area());
    let body = chunks[0];

    app.deck_area = None;
    app.button_area = None;

    draw_particles(frame, app, body);

    if app.card_visible() {
        draw_revealed(frame, app, body);
    } else {
        draw_deck(frame, app, body);
    }

    let status = Paragraph::new(app.status_hint())
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[1]);

    if app.show_help {
        draw_help_popup(frame);
    }
}

/// Background particles, drawn before everything else.
fn draw_particles(frame: &mut Frame, app: &App, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let elapsed = app.elapsed();
    for particle in &app.table.decor().particles {
        let phase = particle.phase(elapsed);
        if phase.opacity < 0.15 {
            continue;
        }
        let col = area.x as f32 + particle.left / 100.0 * f32::from(area.width);
        let row = area.y as f32 + particle.top / 100.0 * f32::from(area.height)
            - phase.rise / 100.0 * RISE_ROWS;
        let Some(cell) = place(area, col as i32, row.round() as i32, 1, 1) else {
            continue;
        };
        let (symbol, color) = if phase.opacity > 0.7 {
            ("•", Color::LightMagenta)
        } else if phase.opacity > 0.4 {
            ("·", Color::Magenta)
        } else {
            (".", Color::DarkGray)
        };
        frame.render_widget(Paragraph::new(symbol).style(Style::default().fg(color)), cell);
    }
}

/// Title plus the hidden deck (single card back or stacked deck).
fn draw_deck(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(area);

    let title = Paragraph::new(Catalog::TITLE)
        .style(Style::default().fg(Color::LightMagenta).bold())
        .alignment(Alignment::Center)
        .block(Block::default().padding(ratatui::widgets::Padding::top(1)));
    frame.render_widget(title, chunks[0]);

    let stage = chunks[1];
    let base_x = i32::from(stage.x) + (i32::from(stage.width) - i32::from(CARD_W)) / 2;
    let base_y = i32::from(stage.y) + (i32::from(stage.height) - i32::from(CARD_H)) / 2;

    match app.table.mode() {
        LayoutMode::Compact => {
            if let Some(rect) = place(stage, base_x, base_y, CARD_W, CARD_H) {
                draw_card_back(frame, rect);
                app.deck_area = Some(rect);
            }
        }
        LayoutMode::Expanded => {
            let progress = app.scatter_progress();
            let offsets = &app.table.decor().offsets;
            let scatter = app.table.scatter();
            // Index 0 sits on top, so paint from the bottom of the stack up.
            for (i, offset) in offsets.iter().enumerate().rev() {
                let mut dx = offset.x * OFFSET_COLS;
                let mut dy = offset.y * OFFSET_ROWS;
                if let (Some(p), Some(s)) = (progress, scatter.get(i)) {
                    dx += s.x * SCATTER_COLS * p;
                    dy += s.y * SCATTER_ROWS * p;
                }
                let x = base_x + dx.round() as i32;
                let y = base_y + dy.round() as i32;
                if let Some(rect) = place(stage, x, y, CARD_W, CARD_H) {
                    draw_card_back(frame, rect);
                }
            }
            if progress.is_none() {
                app.deck_area = place(stage, base_x, base_y, CARD_W, CARD_H);
            }
        }
    }
}

/// The revealed card: face, name, description, and reset button.
fn draw_revealed(frame: &mut Frame, app: &mut App, area: Rect) {
    let card = match app.table.view() {
        View::Revealed(card) => card.clone(),
        View::Hidden => return,
    };

    let (face_area, text_area) = match app.table.mode() {
        LayoutMode::Compact => {
            let rows = Layout::vertical([Constraint::Length(CARD_H + 1), Constraint::Min(0)])
                .split(area);
            (rows[0], rows[1])
        }
        LayoutMode::Expanded => {
            let cols = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(area);
            (cols[0], cols[1])
        }
    };

    let face_x = i32::from(face_area.x) + (i32::from(face_area.width) - i32::from(CARD_W)) / 2;
    let face_y = i32::from(face_area.y) + (i32::from(face_area.height) - i32::from(CARD_H)) / 2;
    if let Some(rect) = place(face_area, face_x, face_y.max(i32::from(face_area.y)), CARD_W, CARD_H) {
        draw_card_face(frame, &card, rect);
    }

    let inner = text_area.inner(Margin::new(2, 1));
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(inner);

    let name = Paragraph::new(card.name.as_str())
        .style(Style::default().fg(Color::White).bold())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(name, chunks[0]);

    let description = Paragraph::new(description_lines(&card))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .scroll((app.scroll, 0));
    frame.render_widget(description, chunks[1]);

    let label_w = RESET_LABEL.chars().count() as u16;
    let button_x = i32::from(chunks[2].x) + (i32::from(chunks[2].width) - i32::from(label_w)) / 2;
    if let Some(rect) = place(chunks[2], button_x, i32::from(chunks[2].y), label_w, 1) {
        let button = Paragraph::new(RESET_LABEL)
            .style(Style::default().fg(Color::White).bg(ACCENT).bold());
        frame.render_widget(button, rect);
        app.button_area = Some(rect);
    }
}

/// Description paragraphs separated by blank lines.
fn description_lines(card: &Card) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, paragraph) in card.paragraphs().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(paragraph.to_string()));
    }
    lines
}

fn draw_card_back(frame: &mut Frame, rect: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(ACCENT))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(rect);
    frame.render_widget(Clear, rect);
    frame.render_widget(block, rect);

    let art = ["✦  ✧  ✦", "", "☾  ★  ☽", "", "TAROT", "", "✦  ✧  ✦"];
    let pad = inner.height.saturating_sub(art.len() as u16) / 2;
    let mut lines: Vec<Line> = (0..pad).map(|_| Line::from("")).collect();
    lines.extend(art.iter().map(|s| Line::from(*s)));
    let back = Paragraph::new(lines)
        .style(Style::default().fg(Color::LightMagenta))
        .alignment(Alignment::Center);
    frame.render_widget(back, inner);
}

fn draw_card_face(frame: &mut Frame, card: &Card, rect: Rect) {
    let block = Block::default()
        .title(format!(" {} ", card.id))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(rect);
    frame.render_widget(Clear, rect);
    frame.render_widget(block, rect);

    let lines = vec![
        Line::from(""),
        Line::from("★").style(Style::default().fg(Color::Yellow)),
        Line::from(""),
        Line::from(card.name.clone()).style(Style::default().fg(Color::White).bold()),
        Line::from(""),
        Line::from(card.image.clone()).style(Style::default().fg(Color::DarkGray)),
    ];
    let face = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(face, inner);
}

/// A `w`×`h` rectangle at signed coordinates, clipped to `bounds`.
fn place(bounds: Rect, x: i32, y: i32, w: u16, h: u16) -> Option<Rect> {
    let left = x.max(i32::from(bounds.x));
    let top = y.max(i32::from(bounds.y));
    let right = (x + i32::from(w)).min(i32::from(bounds.right()));
    let bottom = (y + i32::from(h)).min(i32::from(bounds.bottom()));
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

/// A `width`×`height` popup centered in `area`, shrunk to fit.
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

fn draw_help_popup(frame: &mut Frame) {
    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Deck:"),
        Line::from("  Enter/Space  Draw a card"),
        Line::from("  Click        Draw a card"),
        Line::from(""),
        Line::from("Revealed card:"),
        Line::from("  Enter/r      Put it back and draw again"),
        Line::from("  j / k        Scroll description"),
        Line::from("  d            Redraw (when --allow-redraw)"),
        Line::from(""),
        Line::from("  ?            Toggle this help"),
        Line::from("  q / Ctrl+C   Quit"),
    ];

    let height = help_text.len() as u16 + 2;
    let area = popup_area(frame.area(), HELP_WIDTH, height);

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::TuiOptions;
    use ratatui::backend::TestBackend;

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app(columns: u16) -> App {
        let options = TuiOptions {
            seed: Some(3),
            allow_redraw: false,
            breakpoint: 768,
            px_per_column: 8,
        };
        App::new(Catalog::builtin(), &options, columns)
    }

    #[test]
    fn place_clips_to_bounds() {
        let bounds = Rect::new(0, 0, 10, 10);
        assert_eq!(place(bounds, -2, 3, 5, 2), Some(Rect::new(0, 3, 3, 2)));
        assert_eq!(place(bounds, 8, 8, 5, 5), Some(Rect::new(8, 8, 2, 2)));
        assert_eq!(place(bounds, 12, 0, 3, 3), None);
        assert_eq!(place(bounds, -5, 0, 3, 3), None);
    }

    #[test]
    fn hidden_deck_shows_title_and_back() {
        let mut a = app(80);
        let screen = render(&mut a, 80, 30);
        assert!(screen.contains("Astros do Rock TAROT"));
        assert!(screen.contains("TAROT"));
        assert!(a.deck_area.is_some());
        assert!(a.button_area.is_none());
    }

    #[test]
    fn expanded_deck_is_clickable() {
        let mut a = app(120);
        render(&mut a, 120, 40);
        assert!(a.deck_area.is_some());
    }

    #[test]
    fn revealed_card_shows_name_and_button() {
        let mut a = app(80);
        a.draw_card();
        let screen = render(&mut a, 80, 40);
        let View::Revealed(card) = a.table.view() else {
            panic!("card should be revealed");
        };
        let first_word = card.name.split_whitespace().next().unwrap_or_default();
        assert!(screen.contains(first_word));
        assert!(screen.contains("Tirar outra carta"));
        assert!(!screen.contains("Astros do Rock TAROT"));
        assert!(a.button_area.is_some());
        assert!(a.deck_area.is_none());
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut a = app(4);
        render(&mut a, 4, 2);
        a.draw_card();
        render(&mut a, 4, 2);
    }

    #[test]
    fn help_popup_renders() {
        let mut a = app(80);
        a.show_help = true;
        let screen = render(&mut a, 80, 30);
        assert!(screen.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn popup_is_centered_and_clipped() {
        let popup = popup_area(Rect::new(0, 0, 80, 30), 48, 16);
        assert_eq!(popup, Rect::new(16, 7, 48, 16));
        let small = popup_area(Rect::new(0, 0, 20, 5), 48, 16);
        assert!(small.width <= 20 && small.height <= 5);
        assert!(small.right() <= 20 && small.bottom() <= 5);
    }
}
