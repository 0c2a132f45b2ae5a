//! Fluent character construction.
//!
//! [`CharacterBuilder`] accumulates training and focus change-sets and
//! applies them in a single pass at [`build`](CharacterBuilder::build) time.

use crate::attribute::CharacterAttributes;
use crate::character::Character;
use crate::skill::{FocusLevel, SkillTraining};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Pending changes to a character's skills.
///
/// Both lists keep insertion order. When applied, all trainings go first,
/// then all focus levels, so a focus request is always clamped against the
/// final training rank regardless of the order the change-sets arrived in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterModification {
    pub skill_trainings: Vec<SkillTraining>,
    pub focus_levels: Vec<FocusLevel>,
}

impl CharacterModification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `other`'s changes after this one's.
    pub fn combine(mut self, other: CharacterModification) -> Self {
        self.skill_trainings.extend(other.skill_trainings);
        self.focus_levels.extend(other.focus_levels);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.skill_trainings.is_empty() && self.focus_levels.is_empty()
    }

    /// Apply the pending changes to `character`.
    pub fn apply_to(&self, character: &Character) -> Character {
        character
            .with_skill_trainings(&self.skill_trainings)
            .with_focus_levels(&self.focus_levels)
    }
}

/// Builder for a character with trained skills and raised foci.
///
/// # Examples
///
/// ```rust
/// use charstat::*;
///
/// let attrs = CharacterAttributes::from_tiers([("Common", 0); 8]).unwrap();
/// let character = CharacterBuilder::new(&attrs)
///     .with_skill_trainings([SkillTraining::new("Athletics", TrainingRank::Adept)])
///     .with_focus_levels([FocusLevel::new("Prowess", 3)])
///     .build();
///
/// let athletics = character.skill("Athletics").unwrap();
/// assert_eq!(athletics.attribute_value, 8);
/// assert_eq!(athletics.focus("Prowess").unwrap().dice_count, 11);
/// ```
#[derive(Debug, Clone)]
pub struct CharacterBuilder {
    base: Character,
    modification: CharacterModification,
}

impl CharacterBuilder {
    pub fn new(attributes: &CharacterAttributes) -> Self {
        Self {
            base: Character::new(attributes),
            modification: CharacterModification::new(),
        }
    }

    /// Queue training requests.
    pub fn with_skill_trainings(
        mut self,
        skill_trainings: impl IntoIterator<Item = SkillTraining>,
    ) -> Self {
        self.modification = self.modification.combine(CharacterModification {
            skill_trainings: skill_trainings.into_iter().collect(),
            focus_levels: Vec::new(),
        });
        self
    }

    /// Queue focus level requests.
    pub fn with_focus_levels(mut self, focus_levels: impl IntoIterator<Item = FocusLevel>) -> Self {
        self.modification = self.modification.combine(CharacterModification {
            skill_trainings: Vec::new(),
            focus_levels: focus_levels.into_iter().collect(),
        });
        self
    }

    /// Queue a prepared change-set.
    pub fn with_modification(mut self, modification: CharacterModification) -> Self {
        self.modification = self.modification.combine(modification);
        self
    }

    /// The changes queued so far.
    pub fn pending(&self) -> &CharacterModification {
        &self.modification
    }

    /// Apply every queued change to the base character.
    pub fn build(&self) -> Character {
        debug!(
            trainings = self.modification.skill_trainings.len(),
            focus_levels = self.modification.focus_levels.len(),
            "building character"
        );
        self.log_unmatched();
        self.modification.apply_to(&self.base)
    }

    fn log_unmatched(&self) {
        for training in &self.modification.skill_trainings {
            if self.base.skill(&training.skill_name).is_none() {
                debug!(skill = %training.skill_name, "training request matches no skill");
            }
        }
        for focus in &self.modification.focus_levels {
            if !self.base.skills.iter().any(|s| s.has_focus(&focus.focus_name)) {
                debug!(focus = %focus.focus_name, "focus request matches no skill");
            }
        }
    }
}

/// Start a [`CharacterBuilder`] for `attributes`.
pub fn character_builder(attributes: &CharacterAttributes) -> CharacterBuilder {
    CharacterBuilder::new(attributes)
}
