//! Skill template catalog.
//!
//! The fixed list of skills every character has. Each template names the
//! attribute that governs it, its category, and its two focus options.
//! The catalog is ordered by skill name, and that order is the order of a
//! character's skill list.

use crate::attribute::AttributeName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Broad grouping of skills.
#[derive(
    Debug,
    Clone,
    Copy,
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
pub enum SkillCategory {
    Field,
    Magic,
    Melee,
    Ranged,
}

/// A skill definition from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SkillTemplate {
    pub name: &'static str,
    pub attribute: AttributeName,
    pub category: SkillCategory,
    pub focuses: [&'static str; 2],
}

impl SkillTemplate {
    /// Whether this template offers a focus called `focus_name`.
    pub fn has_focus(&self, focus_name: &str) -> bool {
        self.focuses.contains(&focus_name)
    }
}

const fn template(
    name: &'static str,
    attribute: AttributeName,
    category: SkillCategory,
    focuses: [&'static str; 2],
) -> SkillTemplate {
    SkillTemplate {
        name,
        attribute,
        category,
        focuses,
    }
}

/// Every skill template, in catalog order.
pub static SKILL_TEMPLATES: [SkillTemplate; 22] = {
    use AttributeName::*;
    use SkillCategory::*;
    [
        template("Agility", Coordination, Field, ["Acrobatics", "Escape"]),
        template("Athletics", Strength, Field, ["Grapple", "Prowess"]),
        template("Axiomatic Magic", Intellect, Magic, ["Formulae", "Ritual"]),
        template("Blood Magic", Endurance, Magic, ["Inherited", "Morphic"]),
        template("Bonds Magic", Charisma, Magic, ["Ego", "Spirit"]),
        template("Close Weapons", Quickness, Melee, ["Slice", "Stab"]),
        template("Command", Charisma, Field, ["Inspire", "Intimidate"]),
        template("Cunning", Intellect, Field, ["Discern", "Plan"]),
        template("Dexterity", Coordination, Field, ["Finesse", "Pilfer"]),
        template("Flexible Weapons", Quickness, Melee, ["Arc", "Lash"]),
        template("Focus Magic", Willpower, Magic, ["Banish", "Manipulate"]),
        template("Gunnery", Intellect, Ranged, ["Direct", "Indirect"]),
        template("Hafted Weapons", Strength, Melee, ["Impale", "Strike"]),
        template("Long Arms", Sensitivity, Ranged, ["Crossbow", "Rifle"]),
        template("Missile Weapons", Coordination, Ranged, ["Archery", "Throw"]),
        template("Mobility", Quickness, Field, ["Chase", "Skirmish"]),
        template("Observation", Sensitivity, Field, ["Search", "Survey"]),
        template("Persuade", Charisma, Field, ["Con", "Handle"]),
        template("Pistols", Coordination, Ranged, ["Handgun", "Mechanical"]),
        template("Stealth", Coordination, Field, ["Hide", "Infiltration"]),
        template("Swords", Coordination, Melee, ["Cut", "Thrust"]),
        template("Unarmed Combat", Coordination, Melee, ["Kick", "Punch"]),
    ]
};

/// Look up a template by skill name.
///
/// # Examples
///
/// ```rust
/// use charstat::catalog::{skill_template, SkillCategory};
/// use charstat::AttributeName;
///
/// let swords = skill_template("Swords").unwrap();
/// assert_eq!(swords.attribute, AttributeName::Coordination);
/// assert_eq!(swords.category, SkillCategory::Melee);
/// assert_eq!(swords.focuses, ["Cut", "Thrust"]);
/// assert!(skill_template("Basket Weaving").is_none());
/// ```
pub fn skill_template(name: &str) -> Option<&'static SkillTemplate> {
    SKILL_TEMPLATES.iter().find(|t| t.name == name)
}

/// The first template, in catalog order, offering the named focus.
pub fn template_for_focus(focus_name: &str) -> Option<&'static SkillTemplate> {
    SKILL_TEMPLATES.iter().find(|t| t.has_focus(focus_name))
}

pub fn skill_templates_by_category(category: SkillCategory) -> Vec<&'static SkillTemplate> {
    SKILL_TEMPLATES
        .iter()
        .filter(|t| t.category == category)
        .collect()
}

pub fn skill_templates_by_attribute(attribute: AttributeName) -> Vec<&'static SkillTemplate> {
    SKILL_TEMPLATES
        .iter()
        .filter(|t| t.attribute == attribute)
        .collect()
}

/// All skill names in catalog order.
pub fn all_skill_names() -> Vec<&'static str> {
    SKILL_TEMPLATES.iter().map(|t| t.name).collect()
}

/// All focus names in catalog order, two per skill.
pub fn all_focus_names() -> Vec<&'static str> {
    SKILL_TEMPLATES
        .iter()
        .flat_map(|t| t.focuses)
        .collect()
}

/// Map of skill name to its focus names.
pub fn skill_to_focus_mapping() -> BTreeMap<&'static str, Vec<&'static str>> {
    SKILL_TEMPLATES
        .iter()
        .map(|t| (t.name, t.focuses.to_vec()))
        .collect()
}

/// Skill names grouped by category, each group in catalog order.
pub fn skills_by_category() -> BTreeMap<SkillCategory, Vec<&'static str>> {
    let mut grouped: BTreeMap<SkillCategory, Vec<&'static str>> = BTreeMap::new();
    for t in &SKILL_TEMPLATES {
        grouped.entry(t.category).or_default().push(t.name);
    }
    grouped
}

/// Focus names offered by more than one template, with the skills sharing
/// them in catalog order.
///
/// Focus mutations resolve a name to the first skill that offers it, so a
/// collision here means the later skills' foci of that name are unreachable
/// by name.
pub fn catalog_focus_collisions() -> Vec<(&'static str, Vec<&'static str>)> {
    let mut owners: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
    for t in &SKILL_TEMPLATES {
        for focus in t.focuses {
            owners.entry(focus).or_default().push(t.name);
        }
    }
    owners
        .into_iter()
        .filter(|(_, skills)| skills.len() > 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(SKILL_TEMPLATES.len(), 22);
        assert_eq!(all_focus_names().len(), 44);
    }

    #[test]
    fn test_skill_names_unique_and_sorted() {
        let names = all_skill_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, names);
    }

    #[test]
    fn test_focus_names_unique_within_skill() {
        for t in &SKILL_TEMPLATES {
            assert_ne!(t.focuses[0], t.focuses[1], "{}", t.name);
        }
    }

    #[test]
    fn test_shipped_catalog_has_no_collisions() {
        assert!(catalog_focus_collisions().is_empty());
    }

    #[test]
    fn test_template_for_focus() {
        assert_eq!(template_for_focus("Prowess").unwrap().name, "Athletics");
        assert_eq!(template_for_focus("Punch").unwrap().name, "Unarmed Combat");
        assert!(template_for_focus("Juggling").is_none());
    }

    #[test]
    fn test_filters() {
        let charisma: Vec<_> = skill_templates_by_attribute(AttributeName::Charisma)
            .iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(charisma, vec!["Bonds Magic", "Command", "Persuade"]);

        let magic = skill_templates_by_category(SkillCategory::Magic);
        assert!(magic.iter().all(|t| t.category == SkillCategory::Magic));
        assert_eq!(magic.len(), 4);
    }

    #[test]
    fn test_groupings() {
        let by_category = skills_by_category();
        assert_eq!(by_category.len(), 4);
        assert!(by_category[&SkillCategory::Melee].contains(&"Swords"));
        assert!(by_category[&SkillCategory::Magic].contains(&"Focus Magic"));

        let mapping = skill_to_focus_mapping();
        assert_eq!(mapping["Blood Magic"], vec!["Inherited", "Morphic"]);
    }
}
