//! Advisory validation of attributes and tier/level combinations.
//!
//! Nothing else in the crate depends on these checks passing; they exist for
//! callers that accept attribute data from outside (user input, JSON) and
//! want a structured report before using it. Every validator collects all
//! failures and reports each with the path of the offending field.

use crate::attribute::{Attribute, AttributeName, CharacterAttributes};
use crate::attribute_table::{is_valid_level, MAX_ATTRIBUTE_LEVEL, MIN_ATTRIBUTE_LEVEL};
use crate::error::{ValidationError, ValidationErrors};
use crate::tier::{resolve_tier, Tier};
use serde_json::{Map, Value};

/// Types that can check their own shape.
///
/// # Examples
///
/// ```rust
/// use charstat::validation::Validate;
/// use charstat::{combine_tier_and_modifier, Attribute};
///
/// let attr = combine_tier_and_modifier("Common", 3).unwrap();
/// assert!(attr.validate().is_ok());
///
/// let broken = Attribute { dice_count: 0, ..attr };
/// let errors = broken.validate().unwrap_err();
/// assert!(errors.has_path(&["dice_count"]));
/// ```
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

fn attribute_errors(attribute: &Attribute) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if attribute.dice_count <= 0 {
        errors.push(ValidationError::new(["dice_count"], "must be positive"));
    }
    if attribute.threshold <= 0 {
        errors.push(ValidationError::new(["threshold"], "must be positive"));
    }
    if attribute.pool < 0 {
        errors.push(ValidationError::new(["pool"], "must not be negative"));
    }
    if attribute.statistic < 0 {
        errors.push(ValidationError::new(["statistic"], "must not be negative"));
    }
    errors
}

impl Validate for Attribute {
    fn validate(&self) -> Result<(), ValidationErrors> {
        ValidationErrors::into_result(attribute_errors(self), ())
    }
}

impl Validate for CharacterAttributes {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let errors = self
            .iter()
            .flat_map(|(name, attribute)| {
                attribute_errors(attribute)
                    .into_iter()
                    .map(move |e| e.nested(name.field_name()))
            })
            .collect();
        ValidationErrors::into_result(errors, ())
    }
}

pub fn validate_attribute(attribute: &Attribute) -> Result<(), ValidationErrors> {
    attribute.validate()
}

pub fn validate_character_attributes(attributes: &CharacterAttributes) -> Result<(), ValidationErrors> {
    attributes.validate()
}

fn unknown_tier(tier_name: &str) -> ValidationError {
    ValidationError::new(
        ["tier_name"],
        format!(
            "{tier_name} is not a valid tier name. Valid tiers are: {}",
            Tier::names().join(", ")
        ),
    )
}

/// Check that a tier name and modifier resolve to a level in the table.
///
/// Returns the resulting attribute level.
///
/// # Examples
///
/// ```rust
/// use charstat::validation::validate_tier_modifier;
///
/// assert_eq!(validate_tier_modifier("Common", 4).unwrap(), 12);
/// assert!(validate_tier_modifier("Legendary", 7).is_err());
/// assert!(validate_tier_modifier("Deficit", -1).is_err());
/// ```
pub fn validate_tier_modifier(tier_name: &str, modifier: i32) -> Result<i32, ValidationErrors> {
    let tier = resolve_tier(tier_name).ok_or_else(|| ValidationErrors::single(unknown_tier(tier_name)))?;
    match tier.base_level().checked_add(modifier) {
        Some(level) if is_valid_level(level) => Ok(level),
        _ => Err(ValidationErrors::single(ValidationError::new(
            ["modifier"],
            "The combination of tier and modifier results in an invalid attribute level",
        ))),
    }
}

/// Check that `level` is inside the attribute table.
pub fn validate_attribute_level(level: i32) -> Result<i32, ValidationErrors> {
    if is_valid_level(level) {
        Ok(level)
    } else {
        Err(ValidationErrors::single(ValidationError::new(
            Vec::<String>::new(),
            format!(
                "Attribute level must be between {MIN_ATTRIBUTE_LEVEL} and {MAX_ATTRIBUTE_LEVEL}"
            ),
        )))
    }
}

/// Check that `level` lies within the named tier's band.
pub fn validate_attribute_level_for_tier(
    tier_name: &str,
    level: i32,
) -> Result<(Tier, i32), ValidationErrors> {
    let tier = resolve_tier(tier_name).ok_or_else(|| ValidationErrors::single(unknown_tier(tier_name)))?;
    let range = tier.level_range();
    if range.contains(&level) {
        Ok((tier, level))
    } else {
        Err(ValidationErrors::single(ValidationError::new(
            ["level"],
            format!(
                "Level {level} is outside the valid range for tier {tier} ({}-{})",
                range.start(),
                range.end()
            ),
        )))
    }
}

/// The tier whose band contains `level`, or `None` for invalid levels.
///
/// # Examples
///
/// ```rust
/// use charstat::validation::tier_for_attribute_level;
/// use charstat::Tier;
///
/// assert_eq!(tier_for_attribute_level(11), Some(Tier::Common));
/// assert_eq!(tier_for_attribute_level(12), Some(Tier::Exceptional));
/// assert_eq!(tier_for_attribute_level(31), None);
/// ```
pub fn tier_for_attribute_level(level: i32) -> Option<Tier> {
    let level = validate_attribute_level(level).ok()?;
    Tier::for_level(level)
}

const ATTRIBUTE_FIELDS: [&str; 5] = ["dice_count", "threshold", "pool", "statistic", "defense"];

fn as_object<'a>(value: &'a Value) -> Result<&'a Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::new(Vec::<String>::new(), "expected an object"))
}

fn integer_field(object: &Map<String, Value>, field: &str) -> Result<i32, ValidationError> {
    let value = object
        .get(field)
        .ok_or_else(|| ValidationError::new([field], "is required"))?;
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| ValidationError::new([field], "expected an integer"))
}

/// Validate an attribute supplied as untyped JSON.
///
/// Reports missing fields, non-integer fields and range violations
/// together.
///
/// # Examples
///
/// ```rust
/// use charstat::validation::validate_attribute_value;
/// use serde_json::json;
///
/// let ok = json!({"dice_count": 7, "threshold": 5, "pool": 5, "statistic": 6, "defense": 5});
/// assert!(validate_attribute_value(&ok).is_ok());
///
/// let bad = json!({"dice_count": -1, "threshold": 0, "pool": -1, "statistic": -1, "defense": "x"});
/// let errors = validate_attribute_value(&bad).unwrap_err();
/// assert_eq!(errors.len(), 5);
/// ```
pub fn validate_attribute_value(value: &Value) -> Result<Attribute, ValidationErrors> {
    let object = as_object(value).map_err(ValidationErrors::single)?;

    let mut errors = Vec::new();
    let mut fields = [0; 5];
    for (slot, field) in fields.iter_mut().zip(ATTRIBUTE_FIELDS) {
        match integer_field(object, field) {
            Ok(n) => *slot = n,
            Err(e) => errors.push(e),
        }
    }
    let [dice_count, threshold, pool, statistic, defense] = fields;
    let attribute = Attribute {
        dice_count,
        threshold,
        pool,
        statistic,
        defense,
    };

    // Range checks only for fields that parsed
    let parsed_ok = |field: &str| !errors.iter().any(|e: &ValidationError| e.path == [field]);
    let range_errors: Vec<ValidationError> = attribute_errors(&attribute)
        .into_iter()
        .filter(|e| e.path.first().map_or(true, |field| parsed_ok(field.as_str())))
        .collect();
    errors.extend(range_errors);

    ValidationErrors::into_result(errors, attribute)
}

/// Validate a full attribute set supplied as untyped JSON.
pub fn validate_character_attributes_value(
    value: &Value,
) -> Result<CharacterAttributes, ValidationErrors> {
    let object = as_object(value).map_err(ValidationErrors::single)?;

    let mut errors = Vec::new();
    let mut slots = [Attribute::ZERO; 8];
    for (slot, name) in slots.iter_mut().zip(AttributeName::ALL) {
        let field = name.field_name();
        let Some(entry) = object.get(field) else {
            errors.push(ValidationError::new([field], "is required"));
            continue;
        };
        match validate_attribute_value(entry) {
            Ok(attribute) => *slot = attribute,
            Err(nested) => errors.extend(nested.errors.into_iter().map(|e| e.nested(field))),
        }
    }

    ValidationErrors::into_result(errors, CharacterAttributes::from(slots))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::combine_tier_and_modifier;
    use serde_json::json;

    #[test]
    fn test_tier_modifier_valid() {
        assert_eq!(validate_tier_modifier("Common", 3), Ok(11));
        assert_eq!(validate_tier_modifier("Deficit", 0), Ok(0));
        assert_eq!(validate_tier_modifier("Legendary", 6), Ok(30));
    }

    #[test]
    fn test_tier_modifier_invalid() {
        let err = validate_tier_modifier("Legendary", 7).unwrap_err();
        assert!(err.has_path(&["modifier"]));
        let err = validate_tier_modifier("NonExistentTier", 3).unwrap_err();
        assert!(err.has_path(&["tier_name"]));
        assert!(err.to_string().contains("Valid tiers are: Deficit"));
        assert!(validate_tier_modifier("Legendary", i32::MAX).is_err());
    }

    #[test]
    fn test_attribute_level() {
        assert!(validate_attribute_level(0).is_ok());
        assert!(validate_attribute_level(15).is_ok());
        assert!(validate_attribute_level(30).is_ok());
        let err = validate_attribute_level(-1).unwrap_err();
        assert!(err.has_path(&[]));
        assert!(err.to_string().contains("between 0 and 30"));
        assert!(validate_attribute_level(31).is_err());
    }

    #[test]
    fn test_level_for_tier() {
        assert_eq!(validate_attribute_level_for_tier("Deficit", 3), Ok((Tier::Deficit, 3)));
        assert!(validate_attribute_level_for_tier("Common", 8).is_ok());
        assert!(validate_attribute_level_for_tier("Common", 11).is_ok());

        let err = validate_attribute_level_for_tier("Common", 12).unwrap_err();
        assert!(err.has_path(&["level"]));
        assert!(err.to_string().contains("Common (8-11)"));
        assert!(validate_attribute_level_for_tier("Deficit", 4).is_err());
        assert!(validate_attribute_level_for_tier("InvalidTier", 5).is_err());
    }

    #[test]
    fn test_tier_for_every_level() {
        for level in MIN_ATTRIBUTE_LEVEL..=MAX_ATTRIBUTE_LEVEL {
            let tier = tier_for_attribute_level(level).unwrap();
            assert!(tier.level_range().contains(&level));
            assert!(validate_attribute_level_for_tier(tier.as_ref(), level).is_ok());
        }
    }

    #[test]
    fn test_attribute_struct() {
        let attr = combine_tier_and_modifier("Common", 3).unwrap();
        assert!(validate_attribute(&attr).is_ok());

        let bad = Attribute {
            dice_count: -1,
            threshold: 0,
            pool: -1,
            statistic: -1,
            defense: -50,
        };
        let err = validate_attribute(&bad).unwrap_err();
        assert_eq!(err.len(), 4);
        assert!(!err.has_path(&["defense"]));
    }

    #[test]
    fn test_character_attributes_struct_paths() {
        let good = CharacterAttributes::from_tiers([("Common", 0); 8]).unwrap();
        assert!(validate_character_attributes(&good).is_ok());

        let bad = CharacterAttributes {
            willpower: Attribute::ZERO,
            ..good
        };
        let err = validate_character_attributes(&bad).unwrap_err();
        assert!(err.has_path(&["willpower", "dice_count"]));
        assert!(err.has_path(&["willpower", "threshold"]));
        assert_eq!(err.len(), 2);
    }

    #[test]
    fn test_attribute_value_missing_and_mistyped() {
        let err = validate_attribute_value(&json!({"dice_count": 3})).unwrap_err();
        assert!(err.has_path(&["threshold"]));
        assert!(err.has_path(&["defense"]));
        assert!(!err.has_path(&["dice_count"]));

        let err = validate_attribute_value(&json!({
            "dice_count": 3.5, "threshold": 5, "pool": 1, "statistic": 1, "defense": 0
        }))
        .unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err.has_path(&["dice_count"]));

        let err = validate_attribute_value(&json!([1, 2, 3])).unwrap_err();
        assert!(err.has_path(&[]));
    }

    #[test]
    fn test_attribute_value_round_trips_struct() {
        let attr = combine_tier_and_modifier("Heroic", 2).unwrap();
        let value = serde_json::to_value(attr).unwrap();
        assert_eq!(validate_attribute_value(&value), Ok(attr));
    }

    #[test]
    fn test_character_attributes_value() {
        let good = CharacterAttributes::from_tiers([
            ("Common", 3),
            ("Poor", 2),
            ("Exceptional", 0),
            ("Common", 1),
            ("Remarkable", 1),
            ("Heroic", 0),
            ("Deficit", 3),
            ("Legendary", 0),
        ])
        .unwrap();
        let value = serde_json::to_value(good).unwrap();
        assert_eq!(validate_character_attributes_value(&value), Ok(good));

        let mut value = value;
        value["strength"] = json!({
            "dice_count": -1, "threshold": 0, "pool": -1, "statistic": -1, "defense": "not a number"
        });
        value.as_object_mut().unwrap().remove("sensitivity");
        let err = validate_character_attributes_value(&value).unwrap_err();
        assert!(err.has_path(&["strength", "dice_count"]));
        assert!(err.has_path(&["strength", "defense"]));
        assert!(err.has_path(&["sensitivity"]));
        assert!(!err.has_path(&["endurance", "dice_count"]));
    }
}
