//! Compact/expanded layout decision from viewport width.

/// Default breakpoint in logical pixels. Widths at or below it are compact.
pub const DEFAULT_BREAKPOINT: u32 = 768;

/// The two mutually exclusive presentation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Narrow viewport: a single card back, simple fade.
    Compact,
    /// Wide viewport: a stacked deck that scatters on draw.
    Expanded,
}

impl LayoutMode {
    /// Layout for a viewport width. Compact when `width <= breakpoint`.
    pub fn for_width(width: u32, breakpoint: u32) -> Self {
        if width <= breakpoint {
            Self::Compact
        } else {
            Self::Expanded
        }
    }

    /// True for the compact layout.
    pub fn is_compact(self) -> bool {
        self == Self::Compact
    }
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compact => write!(f, "compact"),
            Self::Expanded => write!(f, "expanded"),
        }
    }
}

/// Tracks viewport width changes and reports layout mode switches.
#[derive(Debug, Clone)]
pub struct ViewportTracker {
    breakpoint: u32,
    mode: Option<LayoutMode>,
}

impl ViewportTracker {
    /// Create a tracker that has not seen any width yet.
    pub fn new(breakpoint: u32) -> Self {
        Self {
            breakpoint,
            mode: None,
        }
    }

    /// The breakpoint in logical pixels.
    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    /// The last derived mode, if a width has been observed.
    pub fn mode(&self) -> Option<LayoutMode> {
        self.mode
    }

    /// Feed a new width. Returns the new mode only when it differs from the last one.
    pub fn observe(&mut self, width: u32) -> Option<LayoutMode> {
        let mode = LayoutMode::for_width(width, self.breakpoint);
        if self.mode == Some(mode) {
            return None;
        }
        tracing::debug!(width, %mode, "layout mode changed");
        self.mode = Some(mode);
        Some(mode)
    }
}

impl Default for ViewportTracker {
    fn default() -> Self {
        Self::new(DEFAULT_BREAKPOINT)
    }
}
