//! Difficulty table - reveal cadence and per-hit scoring by tier
//!
//! The table is fixed at three tiers. The reveal interval doubles as the
//! lifetime of a single reveal before the auto-hide fires.

use crate::types::Difficulty;

/// One named difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyTier {
    pub name: Difficulty,
    /// Interval between reveals, and lifetime of each reveal (ms).
    pub reveal_interval_ms: u32,
    pub score_per_hit: u32,
}

const TIERS: [DifficultyTier; 3] = [
    DifficultyTier {
        name: Difficulty::Easy,
        reveal_interval_ms: 1000,
        score_per_hit: 10,
    },
    DifficultyTier {
        name: Difficulty::Medium,
        reveal_interval_ms: 750,
        score_per_hit: 20,
    },
    DifficultyTier {
        name: Difficulty::Hard,
        reveal_interval_ms: 500,
        score_per_hit: 30,
    },
];

/// All tiers in menu order.
pub fn tiers() -> &'static [DifficultyTier] {
    &TIERS
}

/// Look up a tier by name.
pub fn find_tier(name: Difficulty) -> Option<&'static DifficultyTier> {
    TIERS.iter().find(|tier| tier.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_three_ordered_tiers() {
        let all = tiers();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, Difficulty::Easy);
        assert_eq!(all[1].name, Difficulty::Medium);
        assert_eq!(all[2].name, Difficulty::Hard);
    }

    #[test]
    fn test_tier_values() {
        let easy = find_tier(Difficulty::Easy).unwrap();
        assert_eq!(easy.reveal_interval_ms, 1000);
        assert_eq!(easy.score_per_hit, 10);

        let medium = find_tier(Difficulty::Medium).unwrap();
        assert_eq!(medium.reveal_interval_ms, 750);
        assert_eq!(medium.score_per_hit, 20);

        let hard = find_tier(Difficulty::Hard).unwrap();
        assert_eq!(hard.reveal_interval_ms, 500);
        assert_eq!(hard.score_per_hit, 30);
    }

    #[test]
    fn test_harder_tiers_are_faster_and_worth_more() {
        let all = tiers();
        for pair in all.windows(2) {
            assert!(pair[1].reveal_interval_ms < pair[0].reveal_interval_ms);
            assert!(pair[1].score_per_hit > pair[0].score_per_hit);
        }
    }
}
