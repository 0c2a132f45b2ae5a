//! Character Sheet Example
//!
//! This example walks through building a character with charstat:
//! - Validating tier/modifier pairs before resolving them
//! - Resolving eight attributes from tiers and modifiers
//! - Reading the derived pools, defenses and statistics
//! - Training skills and raising foci through the builder
//!
//! Run with `RUST_LOG=charstat=debug` to see the builder's log output.

use charstat::validation::{validate_tier_modifier, Validate};
use charstat::*;

// ============================================================================
// Attribute Input
// ============================================================================

/// Tier and modifier for each attribute, in attribute order.
const ATTRIBUTE_INPUT: [(&str, i32); 8] = [
    ("Common", 2),      // strength
    ("Common", 1),      // endurance
    ("Remarkable", 2),  // coordination
    ("Exceptional", 1), // quickness
    ("Common", 0),      // willpower
    ("Exceptional", 0), // intellect
    ("Poor", 2),        // charisma
    ("Common", 3),      // sensitivity
];

fn resolve_attributes() -> Result<CharacterAttributes, ValidationErrors> {
    let mut attributes = [Attribute::ZERO; 8];
    for (slot, (tier, modifier)) in attributes.iter_mut().zip(ATTRIBUTE_INPUT) {
        let level = validate_tier_modifier(tier, modifier)?;
        // Validated above, so resolution cannot miss
        if let Some(attribute) = combine_tier_and_modifier(tier, modifier) {
            *slot = attribute;
        }
        println!("  {tier} {modifier:+} -> level {level}");
    }
    let attributes = CharacterAttributes::from(attributes);
    attributes.validate()?;
    Ok(attributes)
}

fn print_attributes(attributes: &CharacterAttributes) {
    for (name, attribute) in attributes.iter() {
        println!(
            "  {:<13} {:>3}d10 ({}+)  pool {:>2}  stat {:>2}  defense {:>2}",
            name.to_string(),
            attribute.dice_count,
            attribute.threshold,
            attribute.pool,
            attribute.statistic,
            attribute.defense
        );
    }
}

fn print_derived(character: &Character) {
    let pools = &character.pools;
    println!("Pools:");
    println!("  Life:    {}", pools.life_pool);
    println!("  Action:  {}", pools.action_pool);
    println!("  Reserve: {}", pools.reserve_pool);
    println!("  Fate:    {}", pools.fate_pool);

    let defenses = &character.defenses;
    println!("\nDefenses:");
    println!("  Body:      {}", defenses.body);
    println!("  Evasion:   {}", defenses.evasion);
    println!("  Awareness: {}", defenses.awareness);
    println!("  Grit:      {}", defenses.grit);
    println!("  Spirit:    {}", defenses.spirit);

    let stats = &character.statistics;
    println!("\nStatistics:");
    println!(
        "  Body power:  {} (half {}, extra {}, double {})",
        stats.body_power,
        stats.body_statistics.half,
        stats.body_statistics.extra,
        stats.body_statistics.double
    );
    println!(
        "  Magic power: {} (half {}, extra {}, double {})",
        stats.magic_power,
        stats.magic_statistics.half,
        stats.magic_statistics.extra,
        stats.magic_statistics.double
    );
    println!("  Reflexes:    {}", stats.reflexes);
    println!("  Stability:   {}", stats.stability);
    println!(
        "  Speed:       {} (advance {}, hustle {}, dash {}, sprint {})",
        stats.speed,
        stats.movement.advance,
        stats.movement.hustle,
        stats.movement.dash,
        stats.movement.sprint
    );
}

fn print_skill(skill: &Skill) {
    println!("  {} [{}] {}: {}", skill.name, skill.training, skill.attribute, skill.roll());
    for focus in &skill.focus_options {
        println!("    {} (level {}): {}", focus.focus, focus.focus_level, focus.roll());
    }
}

fn main() -> Result<(), ValidationErrors> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("=== Character Sheet Example ===\n");

    // ========================================================================
    // 1. Resolve attributes
    // ========================================================================
    println!("1. Resolving Attributes\n");
    let attributes = resolve_attributes()?;
    println!();
    print_attributes(&attributes);

    // ========================================================================
    // 2. Derive the character
    // ========================================================================
    println!("\n2. Derived Values\n");
    let character = create_character(&attributes);
    print_derived(&character);

    // ========================================================================
    // 3. Train skills and raise foci
    // ========================================================================
    println!("\n3. Training\n");
    let trained = character_builder(&attributes)
        .with_skill_trainings([
            SkillTraining::new("Swords", TrainingRank::Expert),
            SkillTraining::new("Stealth", TrainingRank::Skilled),
            SkillTraining::new("Command", TrainingRank::Cursory),
        ])
        .with_focus_levels([
            FocusLevel::new("Thrust", 4),
            FocusLevel::new("Hide", 2),
            // Capped at 1 by Cursory training
            FocusLevel::new("Inspire", 3),
        ])
        .build();

    for name in ["Swords", "Stealth", "Command"] {
        if let Some(skill) = trained.skill(name) {
            print_skill(skill);
        }
    }

    println!("\nUntouched skill for comparison:");
    if let Some(skill) = trained.skill("Gunnery") {
        print_skill(skill);
    }

    // Derived values never change with training
    assert_eq!(trained.pools, character.pools);
    assert_eq!(trained.statistics, character.statistics);

    println!("\n=== Example Complete ===");
    Ok(())
}
