//! Stress patterns rendered as capitalization.
//!
//! A pattern is one digit per syllable: `1` primary stress (whole syllable
//! upper-cased), `2` secondary stress (first letter upper-cased), `0`
//! unstressed (lower-cased).

use rand::Rng;

use crate::core::config::GenerationConfig;
use crate::core::sampler::pick_key;
use crate::core::tables::stress_patterns;

/// Apply `pattern` to `syllables`. Positions past the end of the pattern
/// are treated as unstressed.
pub fn apply_stress(syllables: &[String], pattern: &str) -> Vec<String> {
    let mut digits = pattern.chars();
    syllables
        .iter()
        .map(|syllable| match digits.next() {
            Some('1') => syllable.to_uppercase(),
            Some('2') => capitalize_first(syllable),
            _ => syllable.to_lowercase(),
        })
        .collect()
}

/// Upper-case the first character and leave the rest untouched.
fn capitalize_first(syllable: &str) -> String {
    let mut chars = syllable.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The stress pattern for a word of `count` syllables.
///
/// A forced pattern from the gender or caller layer wins when it has one
/// digit per syllable; otherwise one is drawn from the weighted table for
/// that count. `None` when the count has no table.
pub fn choose_pattern<R: Rng + ?Sized>(
    count: usize,
    config: &GenerationConfig,
    rng: &mut R,
) -> Option<String> {
    if let Some(forced) = config.forced_stress(count) {
        if forced.chars().count() == count {
            return Some(forced.to_string());
        }
        tracing::debug!(count, pattern = forced, "ignoring forced stress of the wrong length");
    }
    let table = stress_patterns(count)?;
    pick_key(table, rng).map(|pattern| pattern.to_string())
}
