//! # charstat - Character Statistics for a Tier-Based d10 RPG
//!
//! A pure, deterministic calculator that turns attribute tiers and
//! modifiers into a complete character sheet:
//! - **Attributes** resolved from a tier name plus a modifier
//! - **Pools, defenses and statistics** derived from attribute pairs
//! - **Skills and foci** stamped from a fixed catalog, with training ranks
//!   and focus levels applied as copy-on-write updates
//!
//! ## Pipeline
//!
//! ```text
//! (tier, modifier) → level → [AttributeLevelRow] → Attribute
//!                  8 × Attribute → Character { pools, defenses, statistics, skills }
//!                  Character + trainings/foci → Character
//! ```
//!
//! All tables are compile-time constants. Lookups that can miss (unknown
//! tier, out-of-range level, unknown template) return `Option`; mutation
//! requests naming an unknown skill or focus are no-ops. Structured errors
//! come only from the advisory [`validation`] layer.
//!
//! ## Example
//!
//! ```rust
//! use charstat::*;
//!
//! let attrs = CharacterAttributes::from_tiers([("Common", 0); 8]).unwrap();
//!
//! let character = CharacterBuilder::new(&attrs)
//!     .with_skill_trainings([
//!         SkillTraining::new("Agility", TrainingRank::Skilled),
//!         SkillTraining::new("Athletics", TrainingRank::Adept),
//!     ])
//!     .with_focus_levels([
//!         FocusLevel::new("Acrobatics", 2),
//!         FocusLevel::new("Prowess", 3),
//!     ])
//!     .build();
//!
//! let agility = character.skill("Agility").unwrap();
//! assert_eq!(agility.attribute_value, 7);
//! assert_eq!(agility.focus("Acrobatics").unwrap().dice_count, 9);
//! assert_eq!(agility.roll().to_string(), "7d10 (5+)");
//! ```
//!
//! ## Modules
//!
//! - [`attribute_table`] - Level → coefficient table
//! - [`tier`] - Attribute tiers
//! - [`attribute`] - Attribute resolution and the eight-slot attribute set
//! - [`training`] - Training ranks
//! - [`catalog`] - Skill templates and catalog queries
//! - [`derived`] - Pools, defenses and statistics
//! - [`skill`] - Runtime skills, training and focus updates, roll formulas
//! - [`character`] - Character creation and updates
//! - [`builder`] - Fluent character builder
//! - [`validation`] - Advisory structured validation
//! - [`error`] - Validation error types

pub mod attribute;
pub mod attribute_table;
pub mod builder;
pub mod catalog;
pub mod character;
pub mod derived;
pub mod error;
pub mod skill;
pub mod tier;
pub mod training;
pub mod validation;

// Re-export main types for convenience
pub use attribute::{
    character_attributes_from_tiers, combine_attributes, combine_tier_and_modifier,
    create_character_attributes, Attribute, AttributeName, CharacterAttributes,
};
pub use attribute_table::AttributeLevelRow;
pub use builder::{character_builder, CharacterBuilder, CharacterModification};
pub use catalog::{SkillCategory, SkillTemplate};
pub use character::{apply_focus_levels, apply_skill_trainings, create_character, Character};
pub use derived::{BodyStats, Defenses, MagicStats, MovementStats, Pools, Statistics};
pub use error::{ValidationError, ValidationErrors};
pub use skill::{FocusLevel, FocusOption, RollFormula, Skill, SkillTraining};
pub use tier::Tier;
pub use training::TrainingRank;
