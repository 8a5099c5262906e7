//! Per-player score persistence.
//!
//! Profiles live in a single JSON file holding the complete array, read
//! and rewritten wholesale on every mutation. A missing file reads as an
//! empty collection; a profile lookup miss returns `None`, never an error.
//! There is no cross-process locking: one session owns the file.

pub mod name;
pub mod profile;

pub use profile::UserProfile;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::store::name::normalize;
use crate::types::Difficulty;

/// Tier assigned to newly created profiles.
pub const DEFAULT_DIFFICULTY: Difficulty = Difficulty::Easy;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score file i/o: {0}")]
    Io(#[from] io::Error),
    #[error("score file format: {0}")]
    Format(#[from] serde_json::Error),
}

/// File-backed profile collection plus the session's current player.
pub struct ScoreStore {
    path: PathBuf,
    current: Option<UserProfile>,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            current: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The session's current player, if one has been resumed or created.
    pub fn current_user(&self) -> Option<&UserProfile> {
        self.current.as_ref()
    }

    /// Current player's stored best for a tier; `None` without a player.
    pub fn max_score(&self, difficulty: Difficulty) -> Option<u32> {
        self.current
            .as_ref()
            .map(|profile| profile.score_for(difficulty))
    }

    /// Read the whole collection. A missing file yields an empty list.
    pub fn load_profiles(&self) -> Result<Vec<UserProfile>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn save_profiles(&self, profiles: &[UserProfile]) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(profiles)?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    /// Resolve `display_name` to a profile, creating and persisting one on
    /// first appearance. The resolved profile becomes the current player.
    /// Resuming matches on the normalized name, so case and accent
    /// variants land on the same profile.
    pub fn create_or_resume(&mut self, display_name: &str) -> Result<(), StoreError> {
        let key = normalize(display_name);
        let mut profiles = self.load_profiles()?;

        if let Some(existing) = profiles.iter().find(|p| p.name == key) {
            self.current = Some(existing.clone());
            return Ok(());
        }

        let profile = UserProfile::new(display_name, DEFAULT_DIFFICULTY);
        self.current = Some(profile.clone());
        profiles.push(profile);
        self.save_profiles(&profiles)
    }

    /// Record the outcome of a round for the current player.
    ///
    /// Writes only when something actually changed: `new_score` beats the
    /// stored best for `difficulty`, or `difficulty` differs from the
    /// profile's last-played tier. Anything else (including the absence of
    /// a current player) is a no-op with no persistence write, and stored
    /// bests never decrease.
    pub fn update_user_data(
        &mut self,
        difficulty: Difficulty,
        new_score: Option<u32>,
    ) -> Result<(), StoreError> {
        let Some(current) = self.current.as_mut() else {
            return Ok(());
        };

        let prev_score = current.score_for(difficulty);
        let is_higher = new_score.is_some_and(|score| score > prev_score);
        let is_new_difficulty = current.last_difficulty != difficulty;

        if !is_higher && !is_new_difficulty {
            return Ok(());
        }

        if is_higher {
            if let Some(score) = new_score {
                current.scores.insert(difficulty, score);
            }
        }
        if is_new_difficulty {
            current.last_difficulty = difficulty;
        }

        // Persist the updated profile in place, matched by id.
        let updated = current.clone();
        let mut profiles = self.load_profiles()?;
        match profiles.iter_mut().find(|p| p.id == updated.id) {
            Some(slot) => *slot = updated,
            None => profiles.push(updated),
        }
        self.save_profiles(&profiles)
    }
}
