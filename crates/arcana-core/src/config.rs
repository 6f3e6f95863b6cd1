//! Configuration for a card-draw table.

use crate::decor::DecorConfig;
use crate::layout::DEFAULT_BREAKPOINT;

/// What `draw` does while a card is already revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawPolicy {
    /// Drawing is only possible from the hidden deck; draws while revealed are ignored.
    #[default]
    HiddenOnly,
    /// Drawing while revealed re-rolls the selection.
    AllowRedraw,
}

/// Configuration for a table session.
#[derive(Debug, Clone)]
pub struct ArcanaConfig {
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Widths at or below this many logical pixels use the compact layout.
    pub breakpoint: u32,
    /// Behavior of `draw` while a card is revealed.
    pub policy: DrawPolicy,
    /// Counts and ranges for cosmetic layout parameters.
    pub decor: DecorConfig,
}

impl Default for ArcanaConfig {
    fn default() -> Self {
        Self {
            seed: None,
            breakpoint: DEFAULT_BREAKPOINT,
            policy: DrawPolicy::HiddenOnly,
            decor: DecorConfig::default(),
        }
    }
}

impl ArcanaConfig {
    /// Set a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the compact layout breakpoint in logical pixels.
    pub fn with_breakpoint(mut self, breakpoint: u32) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    /// Set the draw policy.
    pub fn with_policy(mut self, policy: DrawPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the decor configuration.
    pub fn with_decor(mut self, decor: DecorConfig) -> Self {
        self.decor = decor;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = ArcanaConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.breakpoint, 768);
        assert_eq!(cfg.policy, DrawPolicy::HiddenOnly);
        assert_eq!(cfg.decor.expanded_particles, 12);
    }

    #[test]
    fn builder_methods() {
        let cfg = ArcanaConfig::default()
            .with_seed(123)
            .with_breakpoint(600)
            .with_policy(DrawPolicy::AllowRedraw);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.breakpoint, 600);
        assert_eq!(cfg.policy, DrawPolicy::AllowRedraw);
    }
}
