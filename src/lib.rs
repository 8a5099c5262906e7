//! tui-mole: terminal whack-a-mole.
//!
//! - `core`: difficulty table, target RNG, and the engine state machine
//! - `store`: per-player best scores persisted to a JSON file
//! - `input`: keyboard-to-action mapping
//! - `term`: framebuffer views and the terminal renderer

pub mod core;
pub mod input;
pub mod store;
pub mod term;
pub mod types;
