//! Skill training ranks.
//!
//! Training adds bonus dice to a skill and caps how far its foci can be
//! raised.

use serde::{Deserialize, Serialize};

/// Skill proficiency rank, ordered from lowest to highest.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum TrainingRank {
    #[default]
    Untrained,
    Cursory,
    Skilled,
    Adept,
    Expert,
}

/// What a training rank grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrainingData {
    pub rank: TrainingRank,
    pub bonus_dice: i32,
    pub max_focus_level: i32,
}

/// The training table, one entry per rank in ascending order.
pub static TRAINING_TABLE: [TrainingData; 5] = [
    TrainingData {
        rank: TrainingRank::Untrained,
        bonus_dice: 0,
        max_focus_level: 0,
    },
    TrainingData {
        rank: TrainingRank::Cursory,
        bonus_dice: 1,
        max_focus_level: 1,
    },
    TrainingData {
        rank: TrainingRank::Skilled,
        bonus_dice: 2,
        max_focus_level: 2,
    },
    TrainingData {
        rank: TrainingRank::Adept,
        bonus_dice: 3,
        max_focus_level: 3,
    },
    TrainingData {
        rank: TrainingRank::Expert,
        bonus_dice: 4,
        max_focus_level: 4,
    },
];

/// Look up the table entry for a rank.
///
/// # Examples
///
/// ```rust
/// use charstat::training::training_data;
/// use charstat::TrainingRank;
///
/// let adept = training_data(TrainingRank::Adept).unwrap();
/// assert_eq!(adept.bonus_dice, 3);
/// assert_eq!(adept.max_focus_level, 3);
/// ```
pub fn training_data(rank: TrainingRank) -> Option<&'static TrainingData> {
    TRAINING_TABLE.iter().find(|entry| entry.rank == rank)
}

impl TrainingRank {
    /// Bonus dice granted by this rank.
    pub fn bonus_dice(self) -> i32 {
        training_data(self).map_or(0, |data| data.bonus_dice)
    }

    /// Highest focus level allowed at this rank.
    pub fn max_focus_level(self) -> i32 {
        training_data(self).map_or(0, |data| data.max_focus_level)
    }
}
