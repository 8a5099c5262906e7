//! Core types shared across the application
//! This module contains pure data types with (almost) no external
//! dependencies — `Difficulty` carries serde derives because it is
//! persisted as part of player profiles.

use serde::{Deserialize, Serialize};

/// Grid dimensions
pub const GRID_ROWS: u32 = 3;
pub const GRID_COLS: u32 = 3;
pub const TOTAL_CELLS: u32 = GRID_ROWS * GRID_COLS;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;

/// Cadence used before any difficulty has been selected.
pub const DEFAULT_REVEAL_MS: u32 = 1000;
/// Points per hit before any difficulty has been selected.
pub const DEFAULT_SCORE_PER_HIT: u32 = 10;

/// How long a hit cell stays highlighted in the UI (milliseconds).
pub const HIT_FLASH_MS: u32 = 220;

/// Named difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, in menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse difficulty from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Next tier in menu order, wrapping around (used by the select UI).
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// Engine lifecycle notifications, observed by the UI shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted,
    /// A target cell was revealed.
    TargetShown { cell: u32 },
    /// The active cell was cleared (emitted only when one was active).
    TargetHidden { cell: u32 },
    GameEnded,
}
