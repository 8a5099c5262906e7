//! Persisted per-player record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::name::normalize;
use crate::types::Difficulty;

/// One player's persisted state: best score per tier plus the tier they
/// last played. Looked up by `name` (the normalized form of what they
/// typed), updated in place by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    /// Normalized lookup key.
    pub name: String,
    pub display_name: String,
    pub scores: HashMap<Difficulty, u32>,
    pub last_difficulty: Difficulty,
}

impl UserProfile {
    /// Fresh profile for a newly seen name: zeroed scores, default tier.
    pub fn new(display_name: &str, default_difficulty: Difficulty) -> Self {
        let scores = Difficulty::ALL.iter().map(|&d| (d, 0)).collect();
        Self {
            id: Uuid::new_v4(),
            name: normalize(display_name),
            display_name: display_name.to_string(),
            scores,
            last_difficulty: default_difficulty,
        }
    }

    /// Best score stored for a tier (0 when never played).
    pub fn score_for(&self, difficulty: Difficulty) -> u32 {
        self.scores.get(&difficulty).copied().unwrap_or(0)
    }
}
