//! Windowed card table for Arcana.
//!
//! A macroquad front-end over [`arcana_core::Table`]. The window width in
//! logical pixels drives the compact/expanded layout, the stacked deck
//! scatters when a card is drawn, and background particles float in both
//! layouts.

pub mod app;
pub mod art;
pub mod layout;
pub mod scene;
pub mod theme;
pub mod widget;
