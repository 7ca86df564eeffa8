//! Tavern Roster example: names a full common room of travellers.
//!
//! Each patron gets a style matching their homeland. The bard uses caller
//! overrides for a house ending, and the regulars are drawn in bulk so no two
//! share a name.
//!
//! Run with: cargo run --example tavern_roster

use weird_names::core::config::{CustomRules, GenerationOptions};
use weird_names::core::generator::{GenerationRequest, NameGenerator};
use weird_names::schema::gender::GenderCharacteristic;
use weird_names::schema::punctuation::PunctuationOptions;
use weird_names::schema::style::NameStyle;
use weird_names::schema::weighted::WeightedTable;

fn main() {
    let mut generator = NameGenerator::builder()
        .seed(1247)
        .build()
        .expect("Failed to build generator");

    let patience = GenerationOptions::default().max_attempts(500);

    // --- The staff ---
    let keeper = generator
        .generate(
            &GenerationRequest::new(NameStyle::Dwarf)
                .gender(GenderCharacteristic::Masculine)
                .options(patience.clone()),
        )
        .expect("Failed to name the innkeeper");
    println!("Innkeeper:  {} ({})", keeper.name, keeper.syllables.join("-"));

    let bard_rules = CustomRules {
        endings: Some(WeightedTable::from_pairs(&[("wen", 10)])),
        ..CustomRules::default()
    };
    let bard = generator
        .generate(
            &GenerationRequest::new(NameStyle::Sylvan)
                .gender(GenderCharacteristic::Feminine)
                .options(patience.clone())
                .custom_rules(bard_rules),
        )
        .expect("Failed to name the bard");
    println!("Bard:       {} ({})", bard.name, bard.syllables.join("-"));

    // --- Travellers from far-off lands ---
    let travellers = [
        ("Sellsword", NameStyle::Nordic, GenderCharacteristic::Feminine),
        ("Spice trader", NameStyle::Desert, GenderCharacteristic::Masculine),
        ("Pilgrim", NameStyle::Celestial, GenderCharacteristic::Neutral),
        ("Smuggler", NameStyle::Coastal, GenderCharacteristic::Neutral),
        ("Mercenary", NameStyle::Orcish, GenderCharacteristic::Masculine),
    ];

    println!();
    for (role, style, gender) in travellers {
        let request = GenerationRequest::new(style.clone())
            .gender(gender)
            .options(patience.clone())
            .punctuation(PunctuationOptions::enabled());
        match generator.generate(&request) {
            Ok(name) => println!("{:<13} {:<14} [{}, {}]", role, name.name, style, gender),
            Err(e) => println!("{:<13} (nameless: {})", role, e),
        }
    }

    // --- The regulars ---
    let regulars = generator
        .bulk_generate(6, &GenerationRequest::new(NameStyle::Simple))
        .expect("Failed to name the regulars");

    println!("\nRegulars:");
    for name in &regulars {
        println!("  {}", name.name);
    }

    println!("\n{} names written in the ledger tonight.", generator.history().len());
}
