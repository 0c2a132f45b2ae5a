//! Skill Catalog Example
//!
//! This example browses the fixed skill catalog without building a
//! character:
//! - Skills grouped by category
//! - Skills governed by each attribute
//! - A placeholder skill list with uniform attribute values
//! - Focus roll formulas sorted by focus name

use charstat::catalog::{skill_templates_by_attribute, skill_to_focus_mapping, skills_by_category};
use charstat::skill::{build_complete_skill_list, foci_rolls, SkillListDefaults};
use charstat::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("=== Skill Catalog Example ===\n");

    // ========================================================================
    // 1. Categories
    // ========================================================================
    println!("1. Skills by Category\n");
    let focuses = skill_to_focus_mapping();
    for (category, names) in skills_by_category() {
        println!("{category}:");
        for name in names {
            let skill_focuses = focuses.get(name).map(|f| f.join(", ")).unwrap_or_default();
            println!("  {name:<17} {skill_focuses}");
        }
    }

    // ========================================================================
    // 2. Governing attributes
    // ========================================================================
    println!("\n2. Skills by Attribute\n");
    for name in AttributeName::ALL {
        let skills: Vec<&str> = skill_templates_by_attribute(name).iter().map(|t| t.name).collect();
        println!("  {:<13} {}", name.to_string(), skills.join(", "));
    }

    // ========================================================================
    // 3. Placeholder list and focus rolls
    // ========================================================================
    println!("\n3. Focus Rolls at 4d10 (6+)\n");
    let skills = build_complete_skill_list(SkillListDefaults {
        dice_count: 4,
        threshold: 6,
    });
    for roll in foci_rolls(&skills) {
        println!("  {:<13} {}", roll.focus, roll.roll);
    }

    println!("\n=== Example Complete ===");
}
