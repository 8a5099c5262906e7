//! Core module - pure game logic with no external dependencies
//!
//! This module contains the difficulty table, the target RNG, and the
//! engine state machine. It has zero dependencies on UI, storage, or I/O.

pub mod difficulty;
pub mod engine;
pub mod rng;

// Re-export commonly used types
pub use difficulty::{find_tier, tiers, DifficultyTier};
pub use engine::{GameEngine, SubscriptionId};
pub use rng::SimpleRng;
