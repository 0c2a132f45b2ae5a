//! Attribute tiers.
//!
//! A tier is a named band of attribute levels. Each tier has a base level,
//! and its band runs up to one below the next tier's base level (the last
//! tier runs to the table maximum).

use crate::attribute_table::MAX_ATTRIBUTE_LEVEL;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use strum::IntoEnumIterator;

/// Named attribute tier, ordered from weakest to strongest.
///
/// # Examples
///
/// ```rust
/// use charstat::Tier;
///
/// let tier: Tier = "Common".parse().unwrap();
/// assert_eq!(tier.base_level(), 8);
/// assert_eq!(tier.to_string(), "Common");
/// assert_eq!(tier.level_range(), 8..=11);
/// ```
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
    strum::IntoStaticStr,
)]
pub enum Tier {
    Deficit,
    Poor,
    Common,
    Exceptional,
    Remarkable,
    Heroic,
    Legendary,
}

impl Tier {
    /// Attribute level at the bottom of this tier.
    pub const fn base_level(self) -> i32 {
        match self {
            Tier::Deficit => 0,
            Tier::Poor => 4,
            Tier::Common => 8,
            Tier::Exceptional => 12,
            Tier::Remarkable => 16,
            Tier::Heroic => 20,
            Tier::Legendary => 24,
        }
    }

    /// The next stronger tier, if any.
    pub fn next(self) -> Option<Tier> {
        Tier::iter().find(|tier| *tier > self)
    }

    /// Highest attribute level inside this tier.
    pub fn max_level(self) -> i32 {
        match self.next() {
            Some(next) => next.base_level() - 1,
            None => MAX_ATTRIBUTE_LEVEL,
        }
    }

    /// The inclusive band of levels covered by this tier.
    pub fn level_range(self) -> RangeInclusive<i32> {
        self.base_level()..=self.max_level()
    }

    /// Find the tier whose band contains `level`.
    ///
    /// Returns `None` for levels outside the attribute table.
    pub fn for_level(level: i32) -> Option<Tier> {
        Tier::iter().find(|tier| tier.level_range().contains(&level))
    }

    /// Names of all tiers in order.
    pub fn names() -> Vec<&'static str> {
        Tier::iter().map(|tier| tier.into()).collect()
    }
}

/// Look up a tier by its exact name.
///
/// # Examples
///
/// ```rust
/// use charstat::tier::resolve_tier;
/// use charstat::Tier;
///
/// assert_eq!(resolve_tier("Heroic"), Some(Tier::Heroic));
/// assert_eq!(resolve_tier("Mythic"), None);
/// ```
pub fn resolve_tier(name: &str) -> Option<Tier> {
    name.parse().ok()
}
