//! Uniform random index sources for card selection.
//!
//! The draw state machine never touches an RNG directly; it asks an
//! [`IndexSource`] for a position in the catalog. Production code uses
//! [`RngIndex`], tests substitute [`ScriptedIndex`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces positions in `[0, len)`.
pub trait IndexSource {
    /// Return an index in `[0, len)`. `len` is always at least one.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<S: IndexSource + ?Sized> IndexSource for &mut S {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

impl<S: IndexSource + ?Sized> IndexSource for Box<S> {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

/// Uniform index source backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngIndex<R = StdRng> {
    rng: R,
}

impl<R: Rng> RngIndex<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngIndex<StdRng> {
    /// A generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// A generator with a fixed seed, for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded when a seed is given, OS-seeded otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os_rng, Self::seeded)
    }
}

impl<R: Rng> IndexSource for RngIndex<R> {
    fn next_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed cycle of indices.
#[derive(Debug, Clone)]
pub struct ScriptedIndex {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedIndex {
    /// Cycle through `script` forever. An empty script always yields 0.
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// How many indices have been handed out so far.
    pub fn calls(&self) -> usize {
        self.cursor
    }
}

impl IndexSource for ScriptedIndex {
    fn next_index(&mut self, _len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let index = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_index_stays_in_range() {
        let mut source = RngIndex::seeded(7);
        for _ in 0..1_000 {
            assert!(source.next_index(5) < 5);
        }
    }

    #[test]
    fn rng_index_single_slot() {
        let mut source = RngIndex::seeded(7);
        assert_eq!(source.next_index(1), 0);
    }

    #[test]
    fn seeded_is_reproducible() {
        let mut a = RngIndex::seeded(99);
        let mut b = RngIndex::seeded(99);
        let xs: Vec<usize> = (0..20).map(|_| a.next_index(10)).collect();
        let ys: Vec<usize> = (0..20).map(|_| b.next_index(10)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn scripted_cycles() {
        let mut source = ScriptedIndex::new([2, 0]);
        assert_eq!(source.next_index(3), 2);
        assert_eq!(source.next_index(3), 0);
        assert_eq!(source.next_index(3), 2);
        assert_eq!(source.calls(), 3);
    }

    #[test]
    fn scripted_empty_yields_zero() {
        let mut source = ScriptedIndex::new(Vec::new());
        assert_eq!(source.next_index(4), 0);
    }

    #[test]
    fn boxed_and_borrowed_sources() {
        let mut boxed: Box<dyn IndexSource> = Box::new(ScriptedIndex::new([1]));
        assert_eq!(boxed.next_index(2), 1);
        let mut scripted = ScriptedIndex::new([3]);
        let mut borrowed = &mut scripted;
        assert_eq!(IndexSource::next_index(&mut borrowed, 4), 3);
    }
}
