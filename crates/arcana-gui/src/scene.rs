//! Per-frame rendering of the card table.

use macroquad::prelude::*;

use arcana_core::{Card, CardOffset, Catalog, LayoutMode, View};

use crate::app::AppState;
use crate::art::Art;
use crate::theme::{self, BODY_LINE, BODY_SIZE, NAME_SIZE, PARTICLE_RADIUS, TITLE_SIZE, palette};
use crate::widget::{Rect2, draw_button, wrap_text};

/// Label of the button that puts the card back.
pub const DRAW_AGAIN: &str = "Tirar outra carta";

/// Width of the border drawn around cards without art.
const BORDER: f32 = 3.0;

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Draw the whole frame.
pub fn draw(app: &AppState, art: &Art) {
    clear_background(palette::BACKGROUND);
    draw_particles(app);
    draw_title(&app.stage.title);

    if app.deck_visible() {
        draw_deck(app, art);
    }

    if let (View::Revealed(card), Some(alpha)) = (app.table.view(), app.reveal_progress()) {
        draw_revealed(app, art, card, alpha);
    }
}

fn draw_particles(app: &AppState) {
    let (w, h) = (screen_width(), screen_height());
    let elapsed = app.elapsed();
    for particle in &app.table.decor().particles {
        let phase = particle.phase(elapsed);
        if phase.opacity <= 0.0 {
            continue;
        }
        let x = particle.left / 100.0 * w;
        let y = particle.top / 100.0 * h - phase.rise;
        draw_circle(x, y, PARTICLE_RADIUS, with_alpha(palette::PURPLE, phase.opacity * 0.6));
    }
}

fn draw_title(area: &Rect2) {
    let size = if area.w < 500.0 { TITLE_SIZE * 0.7 } else { TITLE_SIZE };
    let dims = measure_text(Catalog::TITLE, None, size as u16, 1.0);
    let (cx, cy) = area.center();
    draw_text(
        Catalog::TITLE,
        cx - dims.width / 2.0,
        cy + dims.offset_y / 2.0,
        size,
        palette::PINK,
    );
}

fn draw_deck(app: &AppState, art: &Art) {
    let deck = app.stage.deck;
    let (cx, cy) = deck.center();

    if app.table.mode() == LayoutMode::Compact {
        draw_card_back(art, cx, cy, deck.w, deck.h, 0.0, 1.0);
        return;
    }

    let hovered = !app.is_revealed() && deck.contains(app.mouse.0, app.mouse.1);
    let scatter = app.scatter_progress().map(theme::circ_out);

    for (i, offset) in app.table.decor().offsets.iter().enumerate() {
        let CardOffset { rotate, x, y } = *offset;
        let mut pose = (x, y, if hovered { 0.0 } else { rotate });
        let mut alpha = 1.0;
        if let (Some(e), Some(exit)) = (scatter, app.table.scatter().get(i)) {
            pose.0 += exit.x * e;
            pose.1 += exit.y * e;
            pose.2 += exit.rotate * e;
            alpha = 1.0 - e;
        }
        draw_card_back(art, cx + pose.0, cy + pose.1, deck.w, deck.h, pose.2, alpha);
    }
}

/// Draw a card back centered on `(cx, cy)`, rotated by `degrees`.
fn draw_card_back(art: &Art, cx: f32, cy: f32, w: f32, h: f32, degrees: f32, alpha: f32) {
    let rotation = degrees.to_radians();
    if let Some(texture) = art.get(Catalog::BACK_IMAGE) {
        draw_texture_ex(
            texture,
            cx - w / 2.0,
            cy - h / 2.0,
            with_alpha(WHITE, alpha),
            DrawTextureParams {
                dest_size: Some(vec2(w, h)),
                rotation,
                pivot: Some(vec2(cx, cy)),
                ..Default::default()
            },
        );
        return;
    }

    let centered = |color: Color, inset: f32| {
        draw_rectangle_ex(
            cx,
            cy,
            w - inset * 2.0,
            h - inset * 2.0,
            DrawRectangleParams {
                offset: vec2(0.5, 0.5),
                rotation,
                color,
            },
        );
    };
    centered(with_alpha(palette::PURPLE, alpha), 0.0);
    centered(with_alpha(palette::CARD_BACK, alpha), BORDER);
    draw_circle(cx, cy, w.min(h) * 0.12, with_alpha(palette::PURPLE, alpha * 0.5));
}

fn draw_revealed(app: &AppState, art: &Art, card: &Card, alpha: f32) {
    let face = app.stage.face;
    match art.get(&card.image) {
        Some(texture) => draw_texture_ex(
            texture,
            face.x,
            face.y,
            with_alpha(WHITE, alpha),
            DrawTextureParams {
                dest_size: Some(vec2(face.w, face.h)),
                ..Default::default()
            },
        ),
        None => {
            draw_rectangle(face.x, face.y, face.w, face.h, with_alpha(palette::PURPLE, alpha));
            let inner = face.inset(BORDER);
            draw_rectangle(inner.x, inner.y, inner.w, inner.h, with_alpha(palette::CARD_FACE, alpha));
            let lines = wrap_text(&card.name, inner.w * 0.9, |s| {
                measure_text(s, None, NAME_SIZE as u16, 1.0).width
            });
            let (cx, cy) = inner.center();
            let top = cy - lines.len() as f32 * NAME_SIZE / 2.0;
            for (i, line) in lines.iter().enumerate() {
                let dims = measure_text(line, None, NAME_SIZE as u16, 1.0);
                let y = top + (i as f32 + 0.8) * NAME_SIZE;
                draw_text(line, cx - dims.width / 2.0, y, NAME_SIZE, with_alpha(palette::PINK, alpha));
            }
        }
    }

    draw_description(app, card, alpha);

    if alpha >= 1.0 {
        draw_button(DRAW_AGAIN, &app.stage.button, app.mouse);
    }
}

fn draw_description(app: &AppState, card: &Card, alpha: f32) {
    let area = app.stage.text;
    let measure = |s: &str| measure_text(s, None, BODY_SIZE as u16, 1.0).width;

    let mut y = area.y + NAME_SIZE - app.scroll;
    if y >= area.y {
        draw_text(&card.name, area.x, y, NAME_SIZE, with_alpha(palette::PINK, alpha));
    }
    y += NAME_SIZE * 0.6;

    for paragraph in card.paragraphs() {
        for line in wrap_text(paragraph, area.w, measure) {
            y += BODY_LINE;
            if y > area.y + area.h {
                return;
            }
            if y - BODY_SIZE >= area.y {
                draw_text(&line, area.x, y, BODY_SIZE, with_alpha(palette::WHITE, alpha));
            }
        }
        y += BODY_LINE / 2.0;
    }
}
