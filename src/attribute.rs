//! Attributes and attribute resolution.
//!
//! An [`Attribute`] is the resolved value of one of a character's eight
//! governing abilities. Attributes are produced from a tier and a modifier:
//! the tier's base level plus the modifier selects a row of the attribute
//! level table, and the row's coefficients are copied into the attribute.

use crate::attribute_table::{resolve_level, AttributeLevelRow};
use crate::tier::{resolve_tier, Tier};
use serde::{Deserialize, Serialize};

/// The eight governing abilities, in their fixed derivation order.
///
/// The order matters: consecutive pairs feed the aggregate pools, defenses
/// and statistics (strength with endurance, coordination with quickness,
/// and so on).
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
pub enum AttributeName {
    Strength,
    Endurance,
    Coordination,
    Quickness,
    Willpower,
    Intellect,
    Charisma,
    Sensitivity,
}

impl AttributeName {
    /// All attribute names in derivation order.
    pub const ALL: [AttributeName; 8] = [
        AttributeName::Strength,
        AttributeName::Endurance,
        AttributeName::Coordination,
        AttributeName::Quickness,
        AttributeName::Willpower,
        AttributeName::Intellect,
        AttributeName::Charisma,
        AttributeName::Sensitivity,
    ];

    /// Position of this attribute in derivation order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Snake-case field name used for validation paths and JSON objects.
    pub const fn field_name(self) -> &'static str {
        match self {
            AttributeName::Strength => "strength",
            AttributeName::Endurance => "endurance",
            AttributeName::Coordination => "coordination",
            AttributeName::Quickness => "quickness",
            AttributeName::Willpower => "willpower",
            AttributeName::Intellect => "intellect",
            AttributeName::Charisma => "charisma",
            AttributeName::Sensitivity => "sensitivity",
        }
    }
}

/// A resolved attribute value.
///
/// `threshold` is the die face needed for a success, so lower is better.
///
/// # Examples
///
/// ```rust
/// use charstat::combine_tier_and_modifier;
///
/// // Common (8) + 3 = level 11
/// let attr = combine_tier_and_modifier("Common", 3).unwrap();
/// assert_eq!(attr.dice_count, 7);
/// assert_eq!(attr.threshold, 5);
/// assert_eq!(attr.pool, 5);
/// assert_eq!(attr.statistic, 6);
/// assert_eq!(attr.defense, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Attribute {
    pub dice_count: i32,
    pub threshold: i32,
    pub pool: i32,
    pub statistic: i32,
    pub defense: i32,
}

impl Attribute {
    /// The all-zero attribute used to pad short attribute lists.
    pub const ZERO: Attribute = Attribute {
        dice_count: 0,
        threshold: 0,
        pool: 0,
        statistic: 0,
        defense: 0,
    };

    /// Resolve an attribute from a tier and a modifier.
    ///
    /// Returns `None` when `tier.base_level() + modifier` falls outside the
    /// attribute table.
    pub fn from_tier(tier: Tier, modifier: i32) -> Option<Self> {
        let level = tier.base_level().checked_add(modifier)?;
        resolve_level(level).map(Self::from)
    }

    /// Combine two attributes.
    ///
    /// Dice, pool, statistic and defense are summed, saturating at the `i32`
    /// bounds. The threshold is the lower of the two, so a combined roll is
    /// never harder than either source roll.
    pub fn combine(self, other: Attribute) -> Attribute {
        Attribute {
            dice_count: self.dice_count.saturating_add(other.dice_count),
            threshold: self.threshold.min(other.threshold),
            pool: self.pool.saturating_add(other.pool),
            statistic: self.statistic.saturating_add(other.statistic),
            defense: self.defense.saturating_add(other.defense),
        }
    }
}

impl From<&AttributeLevelRow> for Attribute {
    fn from(row: &AttributeLevelRow) -> Self {
        Self {
            dice_count: row.dice_count,
            threshold: row.threshold,
            pool: row.pool,
            statistic: row.statistic,
            defense: row.defense,
        }
    }
}

/// Resolve an attribute from a tier name and a modifier.
///
/// Returns `None` when the tier name is unknown or the resulting level is
/// outside `0..=30`.
///
/// # Examples
///
/// ```rust
/// use charstat::combine_tier_and_modifier;
///
/// assert!(combine_tier_and_modifier("Legendary", 6).is_some());
/// assert!(combine_tier_and_modifier("Legendary", 7).is_none());
/// assert!(combine_tier_and_modifier("Deficit", -1).is_none());
/// assert!(combine_tier_and_modifier("Mythic", 0).is_none());
/// ```
pub fn combine_tier_and_modifier(tier_name: &str, modifier: i32) -> Option<Attribute> {
    let tier = resolve_tier(tier_name)?;
    Attribute::from_tier(tier, modifier)
}

/// Combine two attributes; see [`Attribute::combine`].
pub fn combine_attributes(a: Attribute, b: Attribute) -> Attribute {
    a.combine(b)
}

/// A character's eight attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CharacterAttributes {
    pub strength: Attribute,
    pub endurance: Attribute,
    pub coordination: Attribute,
    pub quickness: Attribute,
    pub willpower: Attribute,
    pub intellect: Attribute,
    pub charisma: Attribute,
    pub sensitivity: Attribute,
}

impl CharacterAttributes {
    /// Build from a list of attributes in derivation order.
    ///
    /// Missing trailing attributes are filled with [`Attribute::ZERO`] and
    /// anything past the eighth entry is ignored.
    pub fn from_slice(attributes: &[Attribute]) -> Self {
        let mut slots = [Attribute::ZERO; 8];
        for (slot, attribute) in slots.iter_mut().zip(attributes) {
            *slot = *attribute;
        }
        Self::from(slots)
    }

    /// Resolve all eight attributes from `(tier name, modifier)` pairs.
    ///
    /// Returns `None` if any pair fails to resolve.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use charstat::CharacterAttributes;
    ///
    /// let attrs = CharacterAttributes::from_tiers([("Common", 0); 8]).unwrap();
    /// assert_eq!(attrs.strength.dice_count, 5);
    ///
    /// let mut pairs = [("Common", 0); 8];
    /// pairs[7] = ("Legendary", 9);
    /// assert!(CharacterAttributes::from_tiers(pairs).is_none());
    /// ```
    pub fn from_tiers(pairs: [(&str, i32); 8]) -> Option<Self> {
        let mut slots = [Attribute::ZERO; 8];
        for (slot, (tier_name, modifier)) in slots.iter_mut().zip(pairs) {
            *slot = combine_tier_and_modifier(tier_name, modifier)?;
        }
        Some(Self::from(slots))
    }

    /// The attribute for `name`.
    pub fn get(&self, name: AttributeName) -> &Attribute {
        match name {
            AttributeName::Strength => &self.strength,
            AttributeName::Endurance => &self.endurance,
            AttributeName::Coordination => &self.coordination,
            AttributeName::Quickness => &self.quickness,
            AttributeName::Willpower => &self.willpower,
            AttributeName::Intellect => &self.intellect,
            AttributeName::Charisma => &self.charisma,
            AttributeName::Sensitivity => &self.sensitivity,
        }
    }

    /// All eight attributes in derivation order.
    pub fn to_array(&self) -> [Attribute; 8] {
        AttributeName::ALL.map(|name| *self.get(name))
    }

    /// Iterate over `(name, attribute)` pairs in derivation order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeName, &Attribute)> + '_ {
        AttributeName::ALL.into_iter().map(move |name| (name, self.get(name)))
    }

    pub fn dice_counts(&self) -> [i32; 8] {
        self.to_array().map(|a| a.dice_count)
    }

    pub fn thresholds(&self) -> [i32; 8] {
        self.to_array().map(|a| a.threshold)
    }

    pub fn pools(&self) -> [i32; 8] {
        self.to_array().map(|a| a.pool)
    }

    pub fn statistics(&self) -> [i32; 8] {
        self.to_array().map(|a| a.statistic)
    }

    pub fn defenses(&self) -> [i32; 8] {
        self.to_array().map(|a| a.defense)
    }
}

impl From<[Attribute; 8]> for CharacterAttributes {
    fn from(slots: [Attribute; 8]) -> Self {
        let [strength, endurance, coordination, quickness, willpower, intellect, charisma, sensitivity] =
            slots;
        Self {
            strength,
            endurance,
            coordination,
            quickness,
            willpower,
            intellect,
            charisma,
            sensitivity,
        }
    }
}

/// Resolve eight `(tier name, modifier)` pairs; see [`CharacterAttributes::from_tiers`].
pub fn character_attributes_from_tiers(pairs: [(&str, i32); 8]) -> Option<CharacterAttributes> {
    CharacterAttributes::from_tiers(pairs)
}

/// Assemble a [`CharacterAttributes`] from eight attributes in derivation order.
#[allow(clippy::too_many_arguments)]
pub fn create_character_attributes(
    strength: Attribute,
    endurance: Attribute,
    coordination: Attribute,
    quickness: Attribute,
    willpower: Attribute,
    intellect: Attribute,
    charisma: Attribute,
    sensitivity: Attribute,
) -> CharacterAttributes {
    CharacterAttributes {
        strength,
        endurance,
        coordination,
        quickness,
        willpower,
        intellect,
        charisma,
        sensitivity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(dice_count: i32, threshold: i32) -> Attribute {
        Attribute {
            dice_count,
            threshold,
            pool: 1,
            statistic: 2,
            defense: 3,
        }
    }

    #[test]
    fn test_from_tier_matches_row() {
        let a = Attribute::from_tier(Tier::Common, 3).unwrap();
        assert_eq!(a, Attribute::from(resolve_level(11).unwrap()));
    }

    #[test]
    fn test_modifier_can_cross_tiers() {
        // Common (8) + 4 = 12, inside the Exceptional band
        assert_eq!(combine_tier_and_modifier("Common", 4).unwrap().dice_count, 7);
        assert_eq!(combine_tier_and_modifier("Common", 8).unwrap().dice_count, 9);
        assert_eq!(combine_tier_and_modifier("Deficit", 4).unwrap().dice_count, 4);
    }

    #[test]
    fn test_extreme_modifiers() {
        assert!(Attribute::from_tier(Tier::Legendary, i32::MAX).is_none());
        assert!(Attribute::from_tier(Tier::Deficit, i32::MIN).is_none());
    }

    #[test]
    fn test_combine_takes_lower_threshold() {
        let combined = combine_attributes(attr(3, 7), attr(5, 4));
        assert_eq!(combined.dice_count, 8);
        assert_eq!(combined.threshold, 4);
        assert_eq!(combined.pool, 2);
        assert_eq!(combined.statistic, 4);
        assert_eq!(combined.defense, 6);

        let reversed = combine_attributes(attr(5, 4), attr(3, 7));
        assert_eq!(reversed, combined);
    }

    #[test]
    fn test_from_slice_pads_and_truncates() {
        let short = CharacterAttributes::from_slice(&[attr(1, 9), attr(2, 8)]);
        assert_eq!(short.strength.dice_count, 1);
        assert_eq!(short.endurance.dice_count, 2);
        assert_eq!(short.coordination, Attribute::ZERO);
        assert_eq!(short.sensitivity, Attribute::ZERO);

        let long: Vec<Attribute> = (1..=10).map(|n| attr(n, 5)).collect();
        let truncated = CharacterAttributes::from_slice(&long);
        assert_eq!(truncated.sensitivity.dice_count, 8);
    }

    #[test]
    fn test_get_follows_derivation_order() {
        let slots: [Attribute; 8] = std::array::from_fn(|i| attr(i as i32 + 1, 5));
        let attrs = CharacterAttributes::from(slots);
        for name in AttributeName::ALL {
            assert_eq!(attrs.get(name).dice_count, name.index() as i32 + 1);
        }
        assert_eq!(attrs.dice_counts(), [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(attrs.to_array(), slots);
    }

    #[test]
    fn test_attribute_name_parse() {
        assert_eq!("Intellect".parse::<AttributeName>().unwrap(), AttributeName::Intellect);
        assert!("Wisdom".parse::<AttributeName>().is_err());
        assert_eq!(AttributeName::Charisma.field_name(), "charisma");
    }
}
