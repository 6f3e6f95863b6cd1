//! Cosmetic layout parameters: stacked-deck offsets and floating particles.
//!
//! Generated once per mount and again whenever the layout mode changes.
//! Nothing here influences which card is drawn.

use rand::Rng;

use crate::layout::LayoutMode;

/// Counts and ranges for decor generation.
#[derive(Debug, Clone, PartialEq)]
pub struct DecorConfig {
    /// Card backs stacked in the expanded deck.
    pub deck_layers: usize,
    /// Particles in the expanded layout.
    pub expanded_particles: usize,
    /// Particles in the compact layout.
    pub compact_particles: usize,
    /// Full rotation range of a stacked card, in degrees, centered on zero.
    pub rotation_spread: f32,
    /// Full horizontal/vertical jitter range of a stacked card, centered on zero.
    pub offset_spread: f32,
    /// Shortest particle loop, in seconds.
    pub min_duration: f32,
    /// Added to `min_duration` at most, in seconds.
    pub duration_spread: f32,
    /// Longest particle start delay, in seconds.
    pub max_delay: f32,
    /// Full range of the scatter translation when the deck is drawn from.
    pub scatter_distance: f32,
    /// Full range of the scatter rotation, in degrees.
    pub scatter_rotation: f32,
}

impl Default for DecorConfig {
    fn default() -> Self {
        Self {
            deck_layers: 5,
            expanded_particles: 12,
            compact_particles: 5,
            rotation_spread: 15.0,
            offset_spread: 10.0,
            min_duration: 5.0,
            duration_spread: 5.0,
            max_delay: 5.0,
            scatter_distance: 1000.0,
            scatter_rotation: 360.0,
        }
    }
}

impl DecorConfig {
    /// Number of stacked card backs for a layout mode.
    pub fn layers_for(&self, mode: LayoutMode) -> usize {
        match mode {
            LayoutMode::Compact => 0,
            LayoutMode::Expanded => self.deck_layers,
        }
    }

    /// Number of particles for a layout mode.
    pub fn particles_for(&self, mode: LayoutMode) -> usize {
        match mode {
            LayoutMode::Compact => self.compact_particles,
            LayoutMode::Expanded => self.expanded_particles,
        }
    }
}

/// Resting pose of one card back in the expanded deck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardOffset {
    /// Rotation in degrees.
    pub rotate: f32,
    /// Horizontal offset.
    pub x: f32,
    /// Vertical offset.
    pub y: f32,
}

/// Exit motion of one card back when the deck is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    /// Horizontal travel.
    pub x: f32,
    /// Vertical travel.
    pub y: f32,
    /// Rotation in degrees.
    pub rotate: f32,
}

/// A floating background particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the viewport width.
    pub left: f32,
    /// Vertical position, percent of the viewport height.
    pub top: f32,
    /// Length of one rise-and-fall loop, in seconds.
    pub duration: f32,
    /// Time before the first loop starts, in seconds.
    pub delay: f32,
}

/// Animation sample of a particle at some instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticlePhase {
    /// Upward displacement, 0 to 100 units.
    pub rise: f32,
    /// Opacity, 0 to 1.
    pub opacity: f32,
}

/// Height a particle rises at the top of its loop.
pub const PARTICLE_RISE: f32 = 100.0;

impl Particle {
    /// Sample the looping rise/fade animation `elapsed` seconds after mount.
    pub fn phase(&self, elapsed: f32) -> ParticlePhase {
        let t = elapsed - self.delay;
        if t < 0.0 || self.duration <= 0.0 {
            return ParticlePhase {
                rise: 0.0,
                opacity: 0.0,
            };
        }
        let progress = (t % self.duration) / self.duration;
        // Triangle wave: 0 -> 1 -> 0 over one loop.
        let k = 1.0 - (2.0 * progress - 1.0).abs();
        ParticlePhase {
            rise: PARTICLE_RISE * k,
            opacity: k,
        }
    }
}

/// One generation of decor for a layout mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Decor {
    /// Stacked deck poses; empty in the compact layout.
    pub offsets: Vec<CardOffset>,
    /// Background particles.
    pub particles: Vec<Particle>,
}

/// A value in `[-spread / 2, spread / 2)`.
fn centered<R: Rng + ?Sized>(rng: &mut R, spread: f32) -> f32 {
    (rng.random::<f32>() - 0.5) * spread
}

impl Decor {
    /// Generate offsets and particles for `mode`.
    pub fn generate<R: Rng + ?Sized>(mode: LayoutMode, config: &DecorConfig, rng: &mut R) -> Self {
        let offsets = (0..config.layers_for(mode))
            .map(|_| CardOffset {
                rotate: centered(rng, config.rotation_spread),
                x: centered(rng, config.offset_spread),
                y: centered(rng, config.offset_spread),
            })
            .collect();

        let particles = (0..config.particles_for(mode))
            .map(|_| Particle {
                left: rng.random::<f32>() * 100.0,
                top: rng.random::<f32>() * 100.0,
                duration: config.min_duration + rng.random::<f32>() * config.duration_spread,
                delay: rng.random::<f32>() * config.max_delay,
            })
            .collect();

        Self { offsets, particles }
    }

    /// Fresh exit motions, one per stacked card.
    pub fn scatter<R: Rng + ?Sized>(&self, config: &DecorConfig, rng: &mut R) -> Vec<Scatter> {
        self.offsets
            .iter()
            .map(|_| Scatter {
                x: centered(rng, config.scatter_distance),
                y: centered(rng, config.scatter_distance),
                rotate: centered(rng, config.scatter_rotation),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn expanded_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        let decor = Decor::generate(LayoutMode::Expanded, &DecorConfig::default(), &mut rng);
        assert_eq!(decor.offsets.len(), 5);
        assert_eq!(decor.particles.len(), 12);
    }

    #[test]
    fn compact_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        let decor = Decor::generate(LayoutMode::Compact, &DecorConfig::default(), &mut rng);
        assert!(decor.offsets.is_empty());
        assert_eq!(decor.particles.len(), 5);
    }

    #[test]
    fn custom_counts() {
        let config = DecorConfig {
            deck_layers: 2,
            expanded_particles: 0,
            ..DecorConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let decor = Decor::generate(LayoutMode::Expanded, &config, &mut rng);
        assert_eq!(decor.offsets.len(), 2);
        assert!(decor.particles.is_empty());
    }

    #[test]
    fn values_within_ranges() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = DecorConfig::default();
        for _ in 0..200 {
            let decor = Decor::generate(LayoutMode::Expanded, &config, &mut rng);
            for o in &decor.offsets {
                assert!((-7.5..=7.5).contains(&o.rotate));
                assert!((-5.0..=5.0).contains(&o.x));
                assert!((-5.0..=5.0).contains(&o.y));
            }
            for p in &decor.particles {
                assert!((0.0..=100.0).contains(&p.left));
                assert!((0.0..=100.0).contains(&p.top));
                assert!((5.0..=10.0).contains(&p.duration));
                assert!((0.0..=5.0).contains(&p.delay));
            }
        }
    }

    #[test]
    fn scatter_one_per_layer() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = DecorConfig::default();
        let decor = Decor::generate(LayoutMode::Expanded, &config, &mut rng);
        let scatter = decor.scatter(&config, &mut rng);
        assert_eq!(scatter.len(), decor.offsets.len());
        for s in &scatter {
            assert!((-500.0..=500.0).contains(&s.x));
            assert!((-180.0..=180.0).contains(&s.rotate));
        }
    }

    #[test]
    fn particle_phase_loop() {
        let p = Particle {
            left: 0.0,
            top: 0.0,
            duration: 4.0,
            delay: 1.0,
        };
        assert_eq!(p.phase(0.5).opacity, 0.0);
        assert_eq!(p.phase(1.0).rise, 0.0);
        let mid = p.phase(3.0);
        assert!((mid.rise - PARTICLE_RISE).abs() < 1e-4);
        assert!((mid.opacity - 1.0).abs() < 1e-4);
        let quarter = p.phase(2.0);
        assert!((quarter.opacity - 0.5).abs() < 1e-4);
        assert!(p.phase(5.0).opacity < 1e-4);
    }
}
