//! Colors, sizes, and animation timings.

/// Color palette.
pub mod palette {
    use macroquad::prelude::Color;

    /// Page background (#11121C).
    pub const BACKGROUND: Color = Color::new(0.067, 0.071, 0.110, 1.0);
    /// Card back fill.
    pub const CARD_BACK: Color = Color::new(0.176, 0.106, 0.306, 1.0);
    /// Card face fill.
    pub const CARD_FACE: Color = Color::new(0.106, 0.110, 0.169, 1.0);
    /// Purple accent for borders and particles (purple-400).
    pub const PURPLE: Color = Color::new(0.753, 0.518, 0.988, 1.0);
    /// Pink for the title (pink-400).
    pub const PINK: Color = Color::new(0.957, 0.447, 0.714, 1.0);
    /// Button fill (purple-600).
    pub const BUTTON: Color = Color::new(0.576, 0.200, 0.918, 1.0);
    /// Button fill while hovered (purple-700).
    pub const BUTTON_HOVER: Color = Color::new(0.494, 0.133, 0.808, 1.0);
    /// Primary text.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// Secondary text (neutral-400).
    pub const MUTED: Color = Color::new(0.639, 0.639, 0.639, 1.0);
    /// Drop shadow.
    pub const SHADOW: Color = Color::new(0.0, 0.0, 0.0, 0.5);
}

/// Deck card size in logical pixels.
pub const DECK_CARD_W: f32 = 280.0;
/// Deck card height in logical pixels.
pub const DECK_CARD_H: f32 = 400.0;
/// Revealed card size in logical pixels.
pub const FACE_CARD_W: f32 = 320.0;
/// Revealed card height in logical pixels.
pub const FACE_CARD_H: f32 = 460.0;

/// Title font size.
pub const TITLE_SIZE: f32 = 44.0;
/// Card name font size.
pub const NAME_SIZE: f32 = 30.0;
/// Description font size.
pub const BODY_SIZE: f32 = 20.0;
/// Description line height.
pub const BODY_LINE: f32 = 26.0;

/// Particle radius.
pub const PARTICLE_RADIUS: f32 = 2.0;

/// Seconds the stacked deck takes to fly apart.
pub const SCATTER_SECS: f64 = 0.7;
/// Delay before the card fades in, expanded layout.
pub const REVEAL_DELAY_EXPANDED: f64 = 0.5;
/// Seconds the card takes to fade in.
pub const REVEAL_SECS: f64 = 0.4;

/// Ease-out along a quarter circle.
pub fn circ_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0) - 1.0;
    (1.0 - t * t).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circ_out_endpoints() {
        assert!(circ_out(0.0).abs() < 1e-6);
        assert!((circ_out(1.0) - 1.0).abs() < 1e-6);
        assert!(circ_out(0.5) > 0.5);
        assert!((circ_out(2.0) - 1.0).abs() < 1e-6);
    }
}
