//! Tests for the advisory validation layer.
//!
//! These tests verify:
//! - Tier/modifier and level checks agree with attribute resolution
//! - Attributes produced by the calculator always validate
//! - Error paths and messages for rejected input

use charstat::validation::{
    tier_for_attribute_level, validate_attribute_level, validate_attribute_level_for_tier,
    validate_attribute_value, validate_character_attributes, validate_character_attributes_value,
    validate_tier_modifier, Validate,
};
use charstat::*;
use serde_json::json;
use strum::IntoEnumIterator;

/// Test that the validator accepts exactly what attribute resolution accepts.
#[test]
fn test_tier_modifier_matches_resolution() {
    for tier in Tier::iter() {
        for modifier in -10..=30 {
            let validated = validate_tier_modifier(tier.as_ref(), modifier);
            let resolved = combine_tier_and_modifier(tier.as_ref(), modifier);
            assert_eq!(validated.is_ok(), resolved.is_some(), "{tier} {modifier:+}");
            if let Ok(level) = validated {
                assert_eq!(level, tier.base_level() + modifier);
            }
        }
    }
}

/// Test the boundary tier/modifier pairs.
#[test]
fn test_tier_modifier_boundaries() {
    assert_eq!(validate_tier_modifier("Legendary", 6), Ok(30));
    assert_eq!(validate_tier_modifier("Deficit", 0), Ok(0));

    let err = validate_tier_modifier("Deficit", -1).unwrap_err();
    assert_eq!(err.len(), 1);
    assert!(err.has_path(&["modifier"]));
    assert!(err.to_string().contains("invalid attribute level"));
}

/// Test that an unknown tier name lists the valid tiers.
#[test]
fn test_unknown_tier_message() {
    let err = validate_tier_modifier("NonExistentTier", 3).unwrap_err();
    assert!(err.has_path(&["tier_name"]));
    assert_eq!(
        err.to_string(),
        "tier_name: NonExistentTier is not a valid tier name. Valid tiers are: \
         Deficit, Poor, Common, Exceptional, Remarkable, Heroic, Legendary"
    );

    // Tier names are case sensitive
    assert!(validate_tier_modifier("common", 0).is_err());
}

/// Test the attribute level range check.
#[test]
fn test_attribute_level_range() {
    for level in [0, 15, 30] {
        assert_eq!(validate_attribute_level(level), Ok(level));
    }
    for level in [-1, 31, i32::MIN, i32::MAX] {
        let err = validate_attribute_level(level).unwrap_err();
        assert_eq!(err.to_string(), "(root): Attribute level must be between 0 and 30");
    }
}

/// Test tier bands at their edges.
#[test]
fn test_level_for_tier_bands() {
    assert!(validate_attribute_level_for_tier("Deficit", 0).is_ok());
    assert!(validate_attribute_level_for_tier("Deficit", 3).is_ok());
    assert!(validate_attribute_level_for_tier("Deficit", 4).is_err());
    assert!(validate_attribute_level_for_tier("Common", 7).is_err());
    assert!(validate_attribute_level_for_tier("Legendary", 30).is_ok());
    assert!(validate_attribute_level_for_tier("Legendary", 31).is_err());

    let err = validate_attribute_level_for_tier("InvalidTier", 5).unwrap_err();
    assert!(err.has_path(&["tier_name"]));
}

/// Test the inverse tier lookup.
#[test]
fn test_tier_for_level() {
    assert_eq!(tier_for_attribute_level(0), Some(Tier::Deficit));
    assert_eq!(tier_for_attribute_level(3), Some(Tier::Deficit));
    assert_eq!(tier_for_attribute_level(4), Some(Tier::Poor));
    assert_eq!(tier_for_attribute_level(20), Some(Tier::Heroic));
    assert_eq!(tier_for_attribute_level(30), Some(Tier::Legendary));
    assert_eq!(tier_for_attribute_level(-1), None);
    assert_eq!(tier_for_attribute_level(31), None);
}

/// Test that every resolvable attribute passes structural validation.
#[test]
fn test_resolved_attributes_validate() {
    for tier in Tier::iter() {
        for modifier in -30..=30 {
            if let Some(attribute) = combine_tier_and_modifier(tier.as_ref(), modifier) {
                assert!(attribute.validate().is_ok(), "{tier} {modifier:+}");
            }
        }
    }
}

/// Test that a mixed-tier attribute set validates as a whole.
#[test]
fn test_character_attributes_validate() {
    let attributes = create_character_attributes(
        combine_tier_and_modifier("Common", 3).unwrap(),
        combine_tier_and_modifier("Poor", 2).unwrap(),
        combine_tier_and_modifier("Exceptional", 0).unwrap(),
        combine_tier_and_modifier("Common", 1).unwrap(),
        combine_tier_and_modifier("Remarkable", 1).unwrap(),
        combine_tier_and_modifier("Heroic", 0).unwrap(),
        combine_tier_and_modifier("Deficit", 3).unwrap(),
        combine_tier_and_modifier("Legendary", 0).unwrap(),
    );
    assert!(validate_character_attributes(&attributes).is_ok());

    let value = serde_json::to_value(attributes).unwrap();
    assert_eq!(validate_character_attributes_value(&value), Ok(attributes));
}

/// Test that JSON input reports every bad field at once.
#[test]
fn test_attribute_value_collects_all_errors() {
    let err = validate_attribute_value(&json!({
        "dice_count": -1,
        "threshold": 0,
        "pool": -1,
        "statistic": -1,
        "defense": "not a number"
    }))
    .unwrap_err();

    assert_eq!(err.len(), 5);
    for field in ["dice_count", "threshold", "pool", "statistic", "defense"] {
        assert!(err.has_path(&[field]), "missing {field}");
    }
}

/// Test that negative defenses are accepted.
#[test]
fn test_negative_defense_allowed() {
    let deficit = combine_tier_and_modifier("Deficit", 0).unwrap();
    assert!(deficit.defense < 0);
    assert!(validate_attribute_value(&serde_json::to_value(deficit).unwrap()).is_ok());
}

/// Test that nested errors carry the attribute name in their path.
#[test]
fn test_character_value_nested_paths() {
    let err = validate_character_attributes_value(&json!({ "strength": 5 })).unwrap_err();
    assert!(err.has_path(&["strength"]));
    assert!(err.has_path(&["willpower"]));
    assert_eq!(err.len(), 8);

    let err = validate_character_attributes_value(&json!("strength")).unwrap_err();
    assert_eq!(err.to_string(), "(root): expected an object");
}
