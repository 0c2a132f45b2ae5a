//! Characters.
//!
//! A [`Character`] is a snapshot derived from a [`CharacterAttributes`]
//! value. Pools, defenses and statistics are fixed at creation; applying
//! training or focus changes yields a new character with an updated skill
//! list and everything else unchanged.

use crate::attribute::CharacterAttributes;
use crate::derived::{Defenses, Pools, Statistics};
use crate::skill::{apply_foci, apply_trainings, calculate_skills, FocusLevel, Skill, SkillTraining};
use serde::{Deserialize, Serialize};

/// A fully derived character.
///
/// # Examples
///
/// ```rust
/// use charstat::*;
///
/// let attrs = CharacterAttributes::from_tiers([("Common", 0); 8]).unwrap();
/// let character = create_character(&attrs);
/// assert_eq!(character.pools.life_pool, 8);
/// assert_eq!(character.skills.len(), 22);
///
/// let trained = apply_skill_trainings(
///     &character,
///     &[SkillTraining::new("Agility", TrainingRank::Skilled)],
/// );
/// assert_eq!(trained.skill("Agility").unwrap().attribute_value, 7);
/// assert_eq!(trained.pools, character.pools);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Character {
    pub attributes: CharacterAttributes,
    pub pools: Pools,
    pub statistics: Statistics,
    pub defenses: Defenses,
    pub skills: Vec<Skill>,
}

impl Character {
    /// Derive a character from its attributes.
    pub fn new(attributes: &CharacterAttributes) -> Self {
        Self {
            attributes: *attributes,
            pools: Pools::from_attributes(attributes),
            statistics: Statistics::from_attributes(attributes),
            defenses: Defenses::from_attributes(attributes),
            skills: calculate_skills(attributes.dice_counts(), attributes.thresholds()),
        }
    }

    /// The skill called `name`.
    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name == name)
    }

    /// Copy of this character with `skills` replacing the skill list.
    fn with_skills(&self, skills: Vec<Skill>) -> Self {
        Self {
            skills,
            ..self.clone()
        }
    }

    pub fn with_skill_trainings(&self, trainings: &[SkillTraining]) -> Self {
        self.with_skills(apply_trainings(&self.skills, trainings))
    }

    pub fn with_focus_levels(&self, focus_levels: &[FocusLevel]) -> Self {
        self.with_skills(apply_foci(&self.skills, focus_levels))
    }
}

/// Derive a character from its attributes.
pub fn create_character(attributes: &CharacterAttributes) -> Character {
    Character::new(attributes)
}

/// Apply training requests in order, matching skills by name.
///
/// Requests naming an unknown skill change nothing.
pub fn apply_skill_trainings(character: &Character, trainings: &[SkillTraining]) -> Character {
    character.with_skill_trainings(trainings)
}

/// Apply focus level requests in order.
///
/// Each request updates the first skill offering the named focus; requests
/// naming an unknown focus change nothing.
pub fn apply_focus_levels(character: &Character, focus_levels: &[FocusLevel]) -> Character {
    character.with_focus_levels(focus_levels)
}
