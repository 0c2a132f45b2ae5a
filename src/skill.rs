//! Runtime skills and their mutation.
//!
//! A [`Skill`] is a catalog template stamped with the governing attribute's
//! dice and threshold. Training and focus changes never modify a skill in
//! place; each produces an updated copy.

use crate::attribute::AttributeName;
use crate::catalog::{SkillCategory, SkillTemplate, SKILL_TEMPLATES};
use crate::training::{training_data, TrainingRank};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of a d10 pool roll: how many dice, and the face needed to succeed.
///
/// Only the formula is described; nothing is rolled.
///
/// # Examples
///
/// ```rust
/// use charstat::RollFormula;
///
/// let roll = RollFormula::new(7, 5);
/// assert_eq!(roll.to_string(), "7d10 (5+)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollFormula {
    pub dice_count: i32,
    pub threshold: i32,
}

impl RollFormula {
    pub fn new(dice_count: i32, threshold: i32) -> Self {
        Self {
            dice_count,
            threshold,
        }
    }
}

impl fmt::Display for RollFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d10 ({}+)", self.dice_count, self.threshold)
    }
}

/// A focus within a skill.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FocusOption {
    pub focus: String,
    pub dice_count: i32,
    pub threshold: i32,
    pub focus_level: i32,
}

impl FocusOption {
    /// A fresh focus slot at level zero with no dice.
    pub fn new(focus: impl Into<String>) -> Self {
        Self {
            focus: focus.into(),
            dice_count: 0,
            threshold: 0,
            focus_level: 0,
        }
    }

    pub fn roll(&self) -> RollFormula {
        RollFormula::new(self.dice_count, self.threshold)
    }
}

/// A character's skill.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub attribute: AttributeName,
    pub category: SkillCategory,
    /// Effective dice: base attribute dice plus the training bonus.
    pub attribute_value: i32,
    pub attribute_threshold: i32,
    /// Attribute dice before any training bonus.
    pub base_attribute_value: i32,
    pub training: TrainingRank,
    pub focus_options: Vec<FocusOption>,
}

/// A request to set a skill's training rank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillTraining {
    pub skill_name: String,
    pub rank: TrainingRank,
}

impl SkillTraining {
    pub fn new(skill_name: impl Into<String>, rank: TrainingRank) -> Self {
        Self {
            skill_name: skill_name.into(),
            rank,
        }
    }
}

/// A request to set a focus level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FocusLevel {
    pub focus_name: String,
    pub level: i32,
}

impl FocusLevel {
    pub fn new(focus_name: impl Into<String>, level: i32) -> Self {
        Self {
            focus_name: focus_name.into(),
            level,
        }
    }
}

/// Restamp every focus with `dice_count + focus_level` and `threshold`.
pub fn update_focus_options(
    focus_options: &[FocusOption],
    dice_count: i32,
    threshold: i32,
) -> Vec<FocusOption> {
    focus_options
        .iter()
        .map(|focus| FocusOption {
            dice_count: dice_count.saturating_add(focus.focus_level),
            threshold,
            ..focus.clone()
        })
        .collect()
}

impl Skill {
    /// Create an untrained skill from a template and its attribute's dice
    /// and threshold.
    pub fn from_template(template: &SkillTemplate, dice_count: i32, threshold: i32) -> Self {
        let blank: Vec<FocusOption> = template.focuses.iter().map(|f| FocusOption::new(*f)).collect();
        Self {
            name: template.name.to_string(),
            attribute: template.attribute,
            category: template.category,
            attribute_value: dice_count,
            attribute_threshold: threshold,
            base_attribute_value: dice_count,
            training: TrainingRank::Untrained,
            focus_options: update_focus_options(&blank, dice_count, threshold),
        }
    }

    /// The focus called `focus_name`, if this skill has one.
    pub fn focus(&self, focus_name: &str) -> Option<&FocusOption> {
        self.focus_options.iter().find(|f| f.focus == focus_name)
    }

    pub fn has_focus(&self, focus_name: &str) -> bool {
        self.focus(focus_name).is_some()
    }

    pub fn roll(&self) -> RollFormula {
        RollFormula::new(self.attribute_value, self.attribute_threshold)
    }

    /// Copy of this skill trained to `rank`.
    ///
    /// The effective dice become base dice plus the rank's bonus, and every
    /// focus is restamped on top of the new value.
    pub fn with_training(&self, rank: TrainingRank) -> Skill {
        let Some(data) = training_data(rank) else {
            return self.clone();
        };
        let attribute_value = self.base_attribute_value.saturating_add(data.bonus_dice);
        Skill {
            training: rank,
            attribute_value,
            focus_options: update_focus_options(
                &self.focus_options,
                attribute_value,
                self.attribute_threshold,
            ),
            ..self.clone()
        }
    }

    /// Copy of this skill with the named focus set to `level`.
    ///
    /// The level is capped at the current training rank's `max_focus_level`;
    /// there is no lower bound. Other foci are untouched, and an unknown
    /// focus name leaves the skill unchanged.
    pub fn with_focus_level(&self, focus_name: &str, level: i32) -> Skill {
        let Some(data) = training_data(self.training) else {
            return self.clone();
        };
        let level = level.min(data.max_focus_level);
        let focus_options = self
            .focus_options
            .iter()
            .map(|focus| {
                if focus.focus == focus_name {
                    FocusOption {
                        focus_level: level,
                        dice_count: self.attribute_value.saturating_add(level),
                        ..focus.clone()
                    }
                } else {
                    focus.clone()
                }
            })
            .collect();
        Skill {
            focus_options,
            ..self.clone()
        }
    }
}

/// Build every catalog skill from per-attribute dice counts and thresholds,
/// both in derivation order.
pub fn calculate_skills(dice_counts: [i32; 8], thresholds: [i32; 8]) -> Vec<Skill> {
    SKILL_TEMPLATES
        .iter()
        .map(|template| {
            let index = template.attribute.index();
            Skill::from_template(template, dice_counts[index], thresholds[index])
        })
        .collect()
}

/// See [`Skill::with_training`].
pub fn apply_training(skill: &Skill, rank: TrainingRank) -> Skill {
    skill.with_training(rank)
}

/// See [`Skill::with_focus_level`].
pub fn apply_focus(skill: &Skill, focus_name: &str, level: i32) -> Skill {
    skill.with_focus_level(focus_name, level)
}

/// Retrain every skill named `skill_name`.
pub fn apply_training_in_list(skills: &[Skill], skill_name: &str, rank: TrainingRank) -> Vec<Skill> {
    skills
        .iter()
        .map(|skill| {
            if skill.name == skill_name {
                skill.with_training(rank)
            } else {
                skill.clone()
            }
        })
        .collect()
}

/// Set a focus level on the first skill, in list order, offering that focus.
///
/// Later skills offering a focus of the same name are not touched.
pub fn apply_focus_in_list(skills: &[Skill], focus_name: &str, level: i32) -> Vec<Skill> {
    let mut updated = skills.to_vec();
    if let Some(skill) = updated.iter_mut().find(|s| s.has_focus(focus_name)) {
        *skill = skill.with_focus_level(focus_name, level);
    }
    updated
}

/// Apply training requests in order.
pub fn apply_trainings(skills: &[Skill], trainings: &[SkillTraining]) -> Vec<Skill> {
    trainings.iter().fold(skills.to_vec(), |acc, t| {
        apply_training_in_list(&acc, &t.skill_name, t.rank)
    })
}

/// Apply focus level requests in order.
pub fn apply_foci(skills: &[Skill], foci: &[FocusLevel]) -> Vec<Skill> {
    foci.iter().fold(skills.to_vec(), |acc, f| {
        apply_focus_in_list(&acc, &f.focus_name, f.level)
    })
}

/// Every focus across `skills`, in skill order.
pub fn all_foci(skills: &[Skill]) -> Vec<&FocusOption> {
    skills.iter().flat_map(|s| &s.focus_options).collect()
}

/// A focus name with its roll formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FocusRoll {
    pub focus: String,
    pub roll: RollFormula,
}

/// Roll formulas for every focus, sorted by focus name.
pub fn foci_rolls(skills: &[Skill]) -> Vec<FocusRoll> {
    let mut rolls: Vec<FocusRoll> = all_foci(skills)
        .into_iter()
        .map(|focus| FocusRoll {
            focus: focus.focus.clone(),
            roll: focus.roll(),
        })
        .collect();
    rolls.sort_by(|a, b| a.focus.cmp(&b.focus));
    rolls
}

/// Uniform attribute values for [`build_complete_skill_list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkillListDefaults {
    pub dice_count: i32,
    pub threshold: i32,
}

/// Every catalog skill built as if all eight attributes had the same
/// dice count and threshold. Useful for listing skills without a character.
///
/// # Examples
///
/// ```rust
/// use charstat::skill::{build_complete_skill_list, SkillListDefaults};
///
/// let skills = build_complete_skill_list(SkillListDefaults { dice_count: 2, threshold: 6 });
/// assert_eq!(skills[0].attribute_value, 2);
/// assert_eq!(skills[0].focus_options[0].dice_count, 2);
/// assert_eq!(skills[0].focus_options[0].threshold, 6);
/// ```
pub fn build_complete_skill_list(defaults: SkillListDefaults) -> Vec<Skill> {
    calculate_skills([defaults.dice_count; 8], [defaults.threshold; 8])
}
