//! Core model for Arcana, a tarot card-draw table.
//!
//! Provides the fixed card catalog, the draw/reveal state machine with an
//! injectable random index source, the compact/expanded layout decision,
//! cosmetic decor generation, and the [`Table`] component that ties them
//! together for front-ends.

pub mod card;
pub mod catalog;
pub mod config;
pub mod decor;
pub mod draw;
pub mod error;
pub mod layout;
pub mod random;
pub mod stats;
pub mod table;

pub use card::Card;
pub use catalog::Catalog;
pub use config::{ArcanaConfig, DrawPolicy};
pub use decor::{CardOffset, Decor, DecorConfig, Particle, Scatter};
pub use draw::{DrawMachine, DrawOutcome, DrawState, View};
pub use error::{CatalogError, CatalogResult};
pub use layout::{DEFAULT_BREAKPOINT, LayoutMode, ViewportTracker};
pub use random::{IndexSource, RngIndex, ScriptedIndex};
pub use stats::Tally;
pub use table::Table;
