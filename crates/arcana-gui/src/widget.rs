//! Layout rectangle, word wrap, and a clickable button.

use macroquad::prelude::*;

use crate::theme::palette;

/// A simple rectangular area for layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2 {
    /// X position.
    pub x: f32,
    /// Y position.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect2 {
    /// Create a new rect.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// A `w`×`h` rect centered on a point.
    pub fn centered_at(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }

    /// Check if a point is inside this rect.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    /// Center point.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Inset the rect by a margin on all sides.
    pub fn inset(&self, margin: f32) -> Self {
        Self {
            x: self.x + margin,
            y: self.y + margin,
            w: (self.w - margin * 2.0).max(0.0),
            h: (self.h - margin * 2.0).max(0.0),
        }
    }

    /// Take a fixed height from the top, return (top_strip, remainder).
    pub fn take_top(&self, height: f32) -> (Self, Self) {
        let h = height.min(self.h);
        (
            Self::new(self.x, self.y, self.w, h),
            Self::new(self.x, self.y + h, self.w, self.h - h),
        )
    }

    /// Take a fixed height from the bottom, return (remainder, bottom_strip).
    pub fn take_bottom(&self, height: f32) -> (Self, Self) {
        let h = height.min(self.h);
        (
            Self::new(self.x, self.y, self.w, self.h - h),
            Self::new(self.x, self.y + self.h - h, self.w, h),
        )
    }

    /// Split horizontally: returns (left, right) at the given x fraction.
    pub fn split_h(&self, fraction: f32) -> (Self, Self) {
        let left_w = self.w * fraction;
        (
            Self::new(self.x, self.y, left_w, self.h),
            Self::new(self.x + left_w, self.y, self.w - left_w, self.h),
        )
    }
}

/// Word-wrap text so each line measures at most `max_width`.
///
/// Blank lines in the input are kept as paragraph breaks. A single word
/// wider than `max_width` gets a line of its own.
pub fn wrap_text(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();

    for raw_line in text.lines() {
        let raw_line = raw_line.trim();
        if raw_line.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if measure(&candidate) <= max_width {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        lines.push(current);
    }

    lines
}

/// Draw a button, highlighted when the mouse is over it. Returns whether it is hovered.
pub fn draw_button(label: &str, area: &Rect2, mouse: (f32, f32)) -> bool {
    let hovered = area.contains(mouse.0, mouse.1);
    let fill = if hovered {
        palette::BUTTON_HOVER
    } else {
        palette::BUTTON
    };

    draw_rectangle(area.x + 2.0, area.y + 4.0, area.w, area.h, palette::SHADOW);
    draw_rectangle(area.x, area.y, area.w, area.h, fill);

    let dims = measure_text(label, None, 22, 1.0);
    let tx = area.x + (area.w - dims.width) / 2.0;
    let ty = area.y + (area.h + dims.offset_y) / 2.0;
    draw_text(label, tx, ty, 22.0, palette::WHITE);

    hovered
}
