//! Property-based tests for name generation.
//!
//! Invariants:
//! - Syllable counts stay inside the requested range
//! - Accepted words re-validate
//! - Decorations respect the per-name cap and never touch
//! - Bulk results are distinct and exactly as many as requested
//! - History grows by one per successful call

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use weird_names::core::config::{GenerationConfig, GenerationOptions};
use weird_names::core::generator::{GenerationError, GenerationRequest, NameGenerator};
use weird_names::core::registry::StyleRegistry;
use weird_names::core::validate::Validator;
use weird_names::schema::gender::GenderCharacteristic;
use weird_names::schema::punctuation::PunctuationOptions;
use weird_names::schema::style::NameStyle;

fn arb_style() -> impl Strategy<Value = NameStyle> {
    prop::sample::select(NameStyle::BUILTIN.to_vec())
}

fn arb_gender() -> impl Strategy<Value = GenderCharacteristic> {
    prop_oneof![
        Just(GenderCharacteristic::Feminine),
        Just(GenderCharacteristic::Masculine),
        Just(GenderCharacteristic::Neutral),
    ]
}

/// `(min, max)` with `1 <= min <= max <= 5`.
fn arb_range() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=5).prop_flat_map(|min| (Just(min), min..=5))
}

fn generator(seed: u64) -> NameGenerator {
    NameGenerator::builder().seed(seed).build().unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_syllable_count_within_range(
        seed in any::<u64>(),
        style in arb_style(),
        gender in arb_gender(),
        (min, max) in arb_range()
    ) {
        let mut gen = generator(seed);
        let request = GenerationRequest::new(style)
            .gender(gender)
            .options(GenerationOptions::default().syllables(min, max));
        match gen.generate(&request) {
            Ok(name) => {
                let count = name.syllable_count();
                prop_assert!(count >= min && count <= max, "{} not in {}..={}", count, min, max);
            }
            Err(GenerationError::Exhausted { attempts }) => prop_assert_eq!(attempts, 50),
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    #[test]
    fn prop_accepted_names_revalidate(
        seed in any::<u64>(),
        style in arb_style(),
        gender in arb_gender()
    ) {
        let registry = StyleRegistry::builtin();
        let config = GenerationConfig::resolve(
            registry.style(&style).unwrap(),
            registry.gender(gender).unwrap(),
            None,
        );
        let validator = Validator::for_config(&config);

        let mut gen = generator(seed);
        let request = GenerationRequest::new(style).gender(gender);
        if let Ok(name) = gen.generate(&request) {
            let single = name.syllable_count() == 1;
            prop_assert!(validator.validate(&name.name, single), "{:?}", name);
            prop_assert!(validator.validate(&name.name.to_lowercase(), single));
        }
    }

    #[test]
    fn prop_decorations_capped_and_spaced(
        seed in any::<u64>(),
        style in arb_style(),
        max_per_name in 0usize..4
    ) {
        let mut gen = generator(seed);
        let request = GenerationRequest::new(style)
            .punctuation(PunctuationOptions::enabled().max_per_name(max_per_name));
        if let Ok(name) = gen.generate(&request) {
            let special: Vec<bool> = name.name.chars().map(|c| !c.is_ascii_alphabetic()).collect();
            let introduced = special.iter().filter(|s| **s).count();
            prop_assert!(introduced <= max_per_name, "{} has {} decorations", name.name, introduced);
            prop_assert!(
                !special.windows(2).any(|w| w[0] && w[1]),
                "adjacent decorations in {}",
                name.name
            );
        }
    }

    #[test]
    fn prop_disabled_punctuation_is_ascii(seed in any::<u64>(), style in arb_style()) {
        let mut gen = generator(seed);
        if let Ok(name) = gen.generate(&GenerationRequest::new(style)) {
            prop_assert!(name.name.chars().all(|c| c.is_ascii_alphabetic()), "{}", name.name);
        }
    }

    #[test]
    fn prop_bulk_exact_and_distinct(
        seed in any::<u64>(),
        style in arb_style(),
        count in 1usize..12
    ) {
        let mut gen = generator(seed);
        match gen.bulk_generate(count, &GenerationRequest::new(style)) {
            Ok(names) => {
                prop_assert_eq!(names.len(), count);
                let unique: FxHashSet<_> = names.iter().collect();
                prop_assert_eq!(unique.len(), count);
            }
            Err(GenerationError::BulkExhausted { produced, .. }) => prop_assert!(produced < count),
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    #[test]
    fn prop_history_counts_successes(seed in any::<u64>(), calls in 0usize..10) {
        let mut gen = generator(seed);
        let request = GenerationRequest::new(NameStyle::Simple);
        let mut successes = 0;
        for _ in 0..calls {
            if gen.generate(&request).is_ok() {
                successes += 1;
            }
        }
        prop_assert_eq!(gen.history().len(), successes);
        gen.clear_history();
        prop_assert!(gen.history().is_empty());
    }
}
