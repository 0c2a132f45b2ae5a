//! Derived aggregate statistics.
//!
//! Pools, defenses and statistics are computed once from the eight
//! attribute values when a character is created. Each calculator takes the
//! relevant coefficient of all eight attributes in derivation order.

use crate::attribute::CharacterAttributes;
use serde::{Deserialize, Serialize};

/// Floor of `value / 2`, rounding toward negative infinity.
fn half(value: i32) -> i32 {
    value.div_euclid(2)
}

/// Resource pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pools {
    /// Strength + endurance.
    pub life_pool: i32,
    /// Coordination + quickness.
    pub action_pool: i32,
    /// Willpower + intellect.
    pub reserve_pool: i32,
    /// Charisma + sensitivity.
    pub fate_pool: i32,
}

/// Compute pools from attribute pool values.
///
/// # Examples
///
/// ```rust
/// use charstat::derived::calculate_pools;
///
/// let pools = calculate_pools([1, 2, 3, 4, 5, 6, 7, 8]);
/// assert_eq!(pools.life_pool, 3);
/// assert_eq!(pools.action_pool, 7);
/// assert_eq!(pools.reserve_pool, 11);
/// assert_eq!(pools.fate_pool, 15);
/// ```
pub fn calculate_pools(values: [i32; 8]) -> Pools {
    let [strength, endurance, coordination, quickness, willpower, intellect, charisma, sensitivity] =
        values;
    Pools {
        life_pool: strength.saturating_add(endurance),
        action_pool: coordination.saturating_add(quickness),
        reserve_pool: willpower.saturating_add(intellect),
        fate_pool: charisma.saturating_add(sensitivity),
    }
}

/// Defense values.
///
/// Awareness and grit each come from a single attribute; the other three
/// combine a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Defenses {
    pub body: i32,
    pub evasion: i32,
    pub awareness: i32,
    pub grit: i32,
    pub spirit: i32,
}

/// Compute defenses from attribute defense values.
pub fn calculate_defenses(values: [i32; 8]) -> Defenses {
    let [strength, endurance, coordination, quickness, willpower, intellect, charisma, sensitivity] =
        values;
    Defenses {
        body: strength.saturating_add(endurance),
        evasion: coordination.saturating_add(quickness),
        awareness: willpower,
        grit: intellect,
        spirit: charisma.saturating_add(sensitivity),
    }
}

/// Multiples of body power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BodyStats {
    pub half: i32,
    pub base: i32,
    pub extra: i32,
    pub double: i32,
}

/// Multiples of magic power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MagicStats {
    pub half: i32,
    pub base: i32,
    pub extra: i32,
    pub double: i32,
}

/// Movement distances per action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MovementStats {
    pub advance: i32,
    pub hustle: i32,
    pub dash: i32,
    pub sprint: i32,
}

/// All derived statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub body_power: i32,
    pub body_statistics: BodyStats,
    pub magic_power: i32,
    pub magic_statistics: MagicStats,
    pub reflexes: i32,
    pub speed: i32,
    pub movement: MovementStats,
    pub stability: i32,
}

/// `(half, base, extra, double)` multiples of a power value.
fn power_multiples(power: i32) -> (i32, i32, i32, i32) {
    (
        half(power),
        power,
        half(power.saturating_mul(3)),
        power.saturating_mul(2),
    )
}

pub fn calculate_body_stats(body_power: i32) -> BodyStats {
    let (half, base, extra, double) = power_multiples(body_power);
    BodyStats {
        half,
        base,
        extra,
        double,
    }
}

pub fn calculate_magic_stats(magic_power: i32) -> MagicStats {
    let (half, base, extra, double) = power_multiples(magic_power);
    MagicStats {
        half,
        base,
        extra,
        double,
    }
}

/// Movement for a given speed; every step is a multiple of `speed + 1`.
pub fn calculate_movement(speed: i32) -> MovementStats {
    let step = speed.saturating_add(1);
    MovementStats {
        advance: step,
        hustle: step.saturating_mul(2),
        dash: step.saturating_mul(3),
        sprint: step.saturating_mul(4),
    }
}

/// Compute statistics from attribute statistic values.
///
/// Endurance feeds both body power and stability.
///
/// # Examples
///
/// ```rust
/// use charstat::derived::calculate_statistics;
///
/// let stats = calculate_statistics([5, 5, 5, 4, 5, 5, 5, 5]);
/// assert_eq!(stats.body_power, 10);
/// assert_eq!(stats.reflexes, 9);
/// assert_eq!(stats.speed, 4);
/// assert_eq!(stats.movement.sprint, 20);
/// assert_eq!(stats.stability, 10);
/// ```
pub fn calculate_statistics(values: [i32; 8]) -> Statistics {
    let [strength, endurance, coordination, quickness, willpower, intellect, _, _] = values;
    let body_power = strength.saturating_add(endurance);
    let reflexes = coordination.saturating_add(quickness);
    let speed = half(reflexes);
    let magic_power = willpower.saturating_add(intellect);

    Statistics {
        body_power,
        body_statistics: calculate_body_stats(body_power),
        magic_power,
        magic_statistics: calculate_magic_stats(magic_power),
        reflexes,
        speed,
        movement: calculate_movement(speed),
        stability: endurance.saturating_add(willpower),
    }
}

impl Pools {
    pub fn from_attributes(attributes: &CharacterAttributes) -> Self {
        calculate_pools(attributes.pools())
    }
}

impl Defenses {
    pub fn from_attributes(attributes: &CharacterAttributes) -> Self {
        calculate_defenses(attributes.defenses())
    }
}

impl Statistics {
    pub fn from_attributes(attributes: &CharacterAttributes) -> Self {
        calculate_statistics(attributes.statistics())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defenses_single_attribute_slots() {
        let defenses = calculate_defenses([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(defenses.body, 3);
        assert_eq!(defenses.evasion, 7);
        assert_eq!(defenses.awareness, 5);
        assert_eq!(defenses.grit, 6);
        assert_eq!(defenses.spirit, 15);
    }

    #[test]
    fn test_negative_defenses_sum() {
        // Level 0 attributes have defense -1
        let defenses = calculate_defenses([-1; 8]);
        assert_eq!(defenses.body, -2);
        assert_eq!(defenses.awareness, -1);
    }

    #[test]
    fn test_body_stats_rounding() {
        let stats = calculate_body_stats(7);
        assert_eq!(stats.half, 3);
        assert_eq!(stats.base, 7);
        assert_eq!(stats.extra, 10);
        assert_eq!(stats.double, 14);
    }

    #[test]
    fn test_magic_stats_matches_body_shape() {
        for power in 0..40 {
            let body = calculate_body_stats(power);
            let magic = calculate_magic_stats(power);
            assert_eq!(
                (body.half, body.base, body.extra, body.double),
                (magic.half, magic.base, magic.extra, magic.double)
            );
        }
    }

    #[test]
    fn test_half_floors_negative_values() {
        assert_eq!(half(-3), -2);
        assert_eq!(calculate_body_stats(-1).extra, -2);
    }

    #[test]
    fn test_movement() {
        let movement = calculate_movement(0);
        assert_eq!(movement.advance, 1);
        assert_eq!(movement.hustle, 2);
        assert_eq!(movement.dash, 3);
        assert_eq!(movement.sprint, 4);

        let movement = calculate_movement(5);
        assert_eq!(movement.advance, 6);
        assert_eq!(movement.sprint, 24);
    }

    #[test]
    fn test_statistics_ignore_social_attributes() {
        let a = calculate_statistics([1, 2, 3, 4, 5, 6, 0, 0]);
        let b = calculate_statistics([1, 2, 3, 4, 5, 6, 9, 9]);
        assert_eq!(a, b);
        assert_eq!(a.stability, 7);
        assert_eq!(a.magic_power, 11);
        assert_eq!(a.magic_statistics.extra, 16);
    }
}
