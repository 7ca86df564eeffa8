//! Post-validation decoration: diacritics, ligatures, apostrophes and hyphens.

use rand::Rng;

use crate::schema::punctuation::{
    Position, PunctuationOptions, PunctuationRule, PunctuationTable, PunctuationType,
};
use crate::schema::style::NameStyle;

/// Decorate `word` with the rules for `style`.
///
/// Rules come from `options.rules` when set, otherwise from `table`.
/// Categories are visited start, middle, end; within each the word is
/// scanned left to right and the first rule that fires at a position wins.
/// No decoration lands next to another, and at most `options.max_per_name`
/// are applied.
pub fn decorate<R: Rng + ?Sized>(
    word: &str,
    style: &NameStyle,
    options: &PunctuationOptions,
    table: &PunctuationTable,
    rng: &mut R,
) -> String {
    if !options.enabled || options.max_per_name == 0 {
        return word.to_string();
    }
    let table = options.rules.as_ref().unwrap_or(table);
    let Some(rules) = table.get(style) else {
        return word.to_string();
    };
    let rules: Vec<&PunctuationRule> = rules.iter().filter(|r| r.applies_to(style)).collect();
    if rules.is_empty() {
        return word.to_string();
    }

    let mut chars: Vec<char> = word.chars().collect();
    let mut modified: Vec<usize> = Vec::new();

    for category in Position::ORDER {
        let candidates: Vec<&PunctuationRule> = rules
            .iter()
            .copied()
            .filter(|r| r.allows_position(category))
            .collect();
        if candidates.is_empty() {
            continue;
        }

        let mut i = 0;
        while i < chars.len() {
            if modified.len() >= options.max_per_name {
                return chars.into_iter().collect();
            }
            if Position::of(i, chars.len()) != category || near(&modified, i) {
                i += 1;
                continue;
            }
            for rule in &candidates {
                if !rule.allows_character(chars[i]) {
                    continue;
                }
                let Some(edit) = plan(rule.kind, &chars, i, &modified) else {
                    continue;
                };
                if rng.gen::<f64>() >= rule.probability {
                    continue;
                }
                apply(edit, &mut chars, &mut modified, i);
                break;
            }
            i += 1;
        }
    }
    chars.into_iter().collect()
}

#[derive(Debug, Clone, Copy)]
enum Edit {
    Replace(char),
    Ligature(char),
    Insert(char),
}

fn near(modified: &[usize], index: usize) -> bool {
    modified.iter().any(|m| m.abs_diff(index) <= 1)
}

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// What `kind` would do at `i`, if it can act there at all.
fn plan(kind: PunctuationType, chars: &[char], i: usize, modified: &[usize]) -> Option<Edit> {
    if kind.is_ligature() {
        let next = *chars.get(i + 1)?;
        // The pair collapses, so the letter after it moves next to `i`.
        if near(modified, i + 1) {
            return None;
        }
        return kind.ligature(lower(chars[i]), lower(next)).map(Edit::Ligature);
    }
    if kind.is_insertion() {
        let inside = i >= 1 && i + 1 < chars.len();
        if !inside || !chars[i - 1].is_alphabetic() || !chars[i].is_alphabetic() {
            return None;
        }
        return kind.inserted_char().map(Edit::Insert);
    }
    kind.mark(lower(chars[i])).map(Edit::Replace)
}

fn apply(edit: Edit, chars: &mut Vec<char>, modified: &mut Vec<usize>, i: usize) {
    match edit {
        Edit::Replace(c) => chars[i] = c,
        Edit::Ligature(c) => {
            chars[i] = c;
            chars.remove(i + 1);
            for m in modified.iter_mut().filter(|m| **m > i) {
                *m -= 1;
            }
        }
        Edit::Insert(c) => {
            chars.insert(i, c);
            for m in modified.iter_mut().filter(|m| **m >= i) {
                *m += 1;
            }
        }
    }
    modified.push(i);
}

/// Upper-case the first character and lower-case the rest.
pub fn finalize_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tables::builtin_punctuation;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    use Position::{End, Middle, Start};
    use PunctuationType::*;

    fn table(style: NameStyle, rules: Vec<PunctuationRule>) -> PunctuationTable {
        HashMap::from([(style, rules)])
    }

    fn always() -> StepRng {
        StepRng::new(0, 0)
    }

    fn on(max: usize) -> PunctuationOptions {
        PunctuationOptions::enabled().max_per_name(max)
    }

    fn introduced(word: &str) -> usize {
        word.chars().filter(|c| !c.is_ascii_alphabetic()).count()
    }

    #[test]
    fn disabled_is_a_no_op() {
        let t = table(NameStyle::Elven, vec![PunctuationRule::new(Acute, 1.0, &[Middle])]);
        let out = decorate("Thalen", &NameStyle::Elven, &PunctuationOptions::default(), &t, &mut always());
        assert_eq!(out, "Thalen");
    }

    #[test]
    fn style_without_rules_is_a_no_op() {
        let t = builtin_punctuation();
        let out = decorate("Bran", &NameStyle::Simple, &on(2), &t, &mut always());
        assert_eq!(out, "Bran");
    }

    #[test]
    fn marks_skip_adjacent_positions() {
        let t = table(
            NameStyle::Fae,
            vec![PunctuationRule::new(Grave, 1.0, &[Middle]).with_characters(&['a', 'e'])],
        );
        let out = decorate("laeae", &NameStyle::Fae, &on(5), &t, &mut always());
        // index 1 marked, 2 is adjacent, 3 marked, 4 is the end.
        assert_eq!(out, "làeàe");
    }

    #[test]
    fn cap_limits_decorations() {
        let t = table(NameStyle::Fae, vec![PunctuationRule::new(Grave, 1.0, &[Start, Middle, End])]);
        let out = decorate("aeaeaeae", &NameStyle::Fae, &on(2), &t, &mut always());
        assert_eq!(introduced(&out), 2);
        assert_eq!(out, "àeàeaeae");
    }

    #[test]
    fn ligature_consumes_pair() {
        let t = table(NameStyle::Celestial, vec![PunctuationRule::new(Ash, 1.0, &[Start])]);
        let out = decorate("aelin", &NameStyle::Celestial, &on(2), &t, &mut always());
        assert_eq!(out, "ælin");
    }

    #[test]
    fn ligature_shifts_later_marks_left() {
        let t = table(
            NameStyle::Celestial,
            vec![
                PunctuationRule::new(Ash, 1.0, &[Middle]),
                PunctuationRule::new(Acute, 1.0, &[End]),
            ],
        );
        let out = decorate("taelo", &NameStyle::Celestial, &on(3), &t, &mut always());
        assert_eq!(out, "tæló");
    }

    #[test]
    fn insertion_lands_between_letters() {
        let t = table(NameStyle::Orcish, vec![PunctuationRule::new(Apostrophe, 1.0, &[Middle])]);
        let out = decorate("grak", &NameStyle::Orcish, &on(1), &t, &mut always());
        assert_eq!(out, "g'rak");
    }

    #[test]
    fn probability_zero_never_fires() {
        let t = table(NameStyle::Dwarf, vec![PunctuationRule::new(Umlaut, 0.0, &[Middle])]);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            assert_eq!(decorate("durin", &NameStyle::Dwarf, &on(2), &t, &mut rng), "durin");
        }
    }

    #[test]
    fn override_table_replaces_registry_rules() {
        let registry = builtin_punctuation();
        let options = PunctuationOptions {
            rules: Some(table(NameStyle::Nordic, vec![PunctuationRule::new(Hyphen, 1.0, &[Middle])])),
            ..on(1)
        };
        let out = decorate("sigrun", &NameStyle::Nordic, &options, &registry, &mut always());
        assert_eq!(out, "s-igrun");
    }

    #[test]
    fn applicable_styles_filter_rules() {
        let mut rule = PunctuationRule::new(Acute, 1.0, &[Middle]);
        rule.applicable_styles = Some(vec![NameStyle::Elven]);
        let t = table(NameStyle::Coastal, vec![rule]);
        assert_eq!(decorate("marea", &NameStyle::Coastal, &on(2), &t, &mut always()), "marea");
    }

    #[test]
    fn seeded_decorations_respect_cap_and_spacing() {
        let t = builtin_punctuation();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = decorate("Kaelorienth", &NameStyle::Elven, &on(2), &t, &mut rng);
            assert!(introduced(&out) <= 2, "seed {}: {}", seed, out);
            let flags: Vec<bool> = out.chars().map(|c| !c.is_ascii_alphabetic()).collect();
            assert!(
                !flags.windows(2).any(|w| w[0] && w[1]),
                "seed {}: adjacent decorations in {}",
                seed,
                out
            );
        }
    }

    #[test]
    fn finalize_case_capitalizes_first_only() {
        assert_eq!(finalize_case("BLa"), "Bla");
        assert_eq!(finalize_case("æLIN"), "Ælin");
        assert_eq!(finalize_case(""), "");
    }
}
