//! Screen regions for each layout mode, computed from the window size.

use arcana_core::LayoutMode;

use crate::theme::{DECK_CARD_H, DECK_CARD_W, FACE_CARD_H, FACE_CARD_W};
use crate::widget::Rect2;

/// Height of the title strip above the deck.
const TITLE_H: f32 = 90.0;
/// Height of the reset button.
const BUTTON_H: f32 = 48.0;
/// Width of the reset button.
const BUTTON_W: f32 = 240.0;
/// Outer margin.
const MARGIN: f32 = 16.0;

/// Regions of the window for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    /// Title strip.
    pub title: Rect2,
    /// Deck (card back or stacked deck), clickable to draw.
    pub deck: Rect2,
    /// Revealed card illustration.
    pub face: Rect2,
    /// Card name and description.
    pub text: Rect2,
    /// "Draw again" button.
    pub button: Rect2,
}

/// Scale that fits a `w`×`h` box into `avail_w`×`avail_h`, never enlarging.
fn fit(w: f32, h: f32, avail_w: f32, avail_h: f32) -> f32 {
    (avail_w / w).min(avail_h / h).clamp(0.0, 1.0)
}

impl Stage {
    /// Compute regions for a window of `width`×`height` logical pixels.
    pub fn compute(width: f32, height: f32, mode: LayoutMode) -> Self {
        let screen = Rect2::new(0.0, 0.0, width.max(0.0), height.max(0.0)).inset(MARGIN);
        let (title, below) = screen.take_top(TITLE_H);
        let (cx, cy) = below.center();

        let deck_scale = fit(DECK_CARD_W, DECK_CARD_H, below.w * 0.9, below.h * 0.9);
        let deck = Rect2::centered_at(cx, cy, DECK_CARD_W * deck_scale, DECK_CARD_H * deck_scale);

        let (rest, button_strip) = screen.take_bottom(BUTTON_H + MARGIN * 2.0);
        let button_w = BUTTON_W.min(button_strip.w);
        let (bx, by) = button_strip.center();
        let button = Rect2::centered_at(bx, by, button_w, BUTTON_H.min(button_strip.h));

        let (face, text) = match mode {
            LayoutMode::Compact => {
                let (face_area, text) = rest.take_top(rest.h * 0.55);
                let s = fit(FACE_CARD_W, FACE_CARD_H, face_area.w, face_area.h);
                let (fx, fy) = face_area.center();
                (
                    Rect2::centered_at(fx, fy, FACE_CARD_W * s, FACE_CARD_H * s),
                    text.inset(MARGIN / 2.0),
                )
            }
            LayoutMode::Expanded => {
                let (face_area, text) = rest.split_h(0.45);
                let s = fit(FACE_CARD_W, FACE_CARD_H, face_area.w * 0.9, face_area.h * 0.9);
                let (fx, fy) = face_area.center();
                (
                    Rect2::centered_at(fx, fy, FACE_CARD_W * s, FACE_CARD_H * s),
                    text.inset(MARGIN),
                )
            }
        };

        Self {
            title,
            deck,
            face,
            text,
            button,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_is_centered_and_full_size_on_large_windows() {
        let stage = Stage::compute(1600.0, 1000.0, LayoutMode::Expanded);
        assert!((stage.deck.w - DECK_CARD_W).abs() < 1e-3);
        assert!((stage.deck.h - DECK_CARD_H).abs() < 1e-3);
        assert!((stage.deck.center().0 - 800.0).abs() < 1e-3);
    }

    #[test]
    fn deck_shrinks_on_small_windows() {
        let stage = Stage::compute(360.0, 500.0, LayoutMode::Compact);
        assert!(stage.deck.w < DECK_CARD_W);
        assert!(stage.deck.x >= 0.0);
        assert!(stage.deck.y + stage.deck.h <= 500.0);
    }

    #[test]
    fn compact_stacks_face_above_text() {
        let stage = Stage::compute(400.0, 900.0, LayoutMode::Compact);
        assert!(stage.face.y + stage.face.h <= stage.text.y + 1e-3);
        assert!(stage.text.y + stage.text.h <= stage.button.y + 1e-3);
    }

    #[test]
    fn expanded_puts_face_beside_text() {
        let stage = Stage::compute(1400.0, 900.0, LayoutMode::Expanded);
        assert!(stage.face.x + stage.face.w <= stage.text.x + 1e-3);
    }

    #[test]
    fn degenerate_window_does_not_go_negative() {
        let stage = Stage::compute(0.0, 0.0, LayoutMode::Compact);
        assert!(stage.deck.w >= 0.0);
        assert!(stage.button.w >= 0.0);
        assert!(stage.text.h >= 0.0);
    }
}
