//! Built-in phonetic data: phoneme pools, blends, stress templates, style
//! defaults, gender profiles and per-style decoration rules.
//!
//! Every table is ordered; the first entry is what the sampler falls back to.

use std::collections::{BTreeMap, HashMap};

use crate::schema::gender::{GenderCharacteristic, GenderTraits};
use crate::schema::punctuation::{Position, PunctuationRule, PunctuationTable, PunctuationType};
use crate::schema::style::{NameStyle, StylePattern, SyllableTemplate, VowelPreference};
use crate::schema::weighted::WeightedTable;

pub type StaticTable = &'static [(&'static str, u32)];

pub const CONSONANTS_COMMON: StaticTable = &[
    ("b", 8),
    ("d", 8),
    ("f", 7),
    ("g", 7),
    ("h", 6),
    ("k", 8),
    ("l", 9),
    ("m", 9),
    ("n", 9),
    ("p", 8),
    ("r", 9),
    ("s", 9),
    ("t", 9),
    ("v", 5),
    ("w", 6),
];

pub const CONSONANTS_RARE: StaticTable = &[
    ("c", 3),
    ("j", 3),
    ("q", 1),
    ("x", 1),
    ("y", 4),
    ("z", 2),
];

pub const VOWELS_COMMON: StaticTable = &[("a", 9), ("e", 9), ("i", 8), ("o", 8), ("u", 6)];

pub const VOWEL_DIPHTHONGS: StaticTable = &[
    ("ae", 3),
    ("ai", 4),
    ("au", 3),
    ("ea", 4),
    ("ee", 4),
    ("ei", 3),
    ("eu", 2),
    ("ie", 4),
    ("oo", 4),
    ("ou", 3),
];

pub const BLENDS_INITIAL: StaticTable = &[
    ("bl", 6),
    ("br", 7),
    ("ch", 7),
    ("cl", 6),
    ("cr", 7),
    ("dr", 7),
    ("fl", 6),
    ("fr", 6),
    ("gl", 5),
    ("gr", 7),
    ("pl", 6),
    ("pr", 7),
    ("sc", 5),
    ("sh", 8),
    ("sl", 6),
    ("sm", 6),
    ("sn", 5),
    ("sp", 6),
    ("st", 8),
    ("sw", 6),
    ("th", 8),
    ("tr", 7),
    ("tw", 5),
];

/// Word-final clusters. Catalogue data only; syllable synthesis draws
/// initial blends.
pub const BLENDS_FINAL: StaticTable = &[
    ("ck", 5),
    ("ft", 4),
    ("ld", 6),
    ("lf", 4),
    ("lk", 5),
    ("ll", 7),
    ("lt", 6),
    ("nd", 7),
    ("ng", 7),
    ("nk", 6),
    ("nt", 7),
    ("pt", 4),
    ("rd", 6),
    ("rk", 5),
    ("rm", 6),
    ("rn", 6),
    ("rt", 6),
    ("sk", 5),
    ("st", 7),
    ("th", 6),
];

/// Longest word the stress table covers.
pub const MAX_STRESSED_SYLLABLES: usize = 5;

const STRESS_1: StaticTable = &[("1", 10)];
const STRESS_2: StaticTable = &[("10", 8), ("21", 5)];
const STRESS_3: StaticTable = &[("100", 8), ("201", 6), ("102", 4)];
const STRESS_4: StaticTable = &[("2010", 8), ("1020", 6), ("2001", 4)];
const STRESS_5: StaticTable = &[("20100", 8), ("10200", 6), ("20010", 4)];

/// Weighted stress templates for a word of `syllables` syllables.
pub fn stress_patterns(syllables: usize) -> Option<StaticTable> {
    match syllables {
        1 => Some(STRESS_1),
        2 => Some(STRESS_2),
        3 => Some(STRESS_3),
        4 => Some(STRESS_4),
        5 => Some(STRESS_5),
        _ => None,
    }
}

fn style(
    min_syllables: usize,
    max_syllables: usize,
    templates: &[(&str, u32)],
    endings: &[(&str, u32)],
) -> StylePattern {
    StylePattern {
        min_syllables,
        max_syllables,
        templates: templates
            .iter()
            .map(|(t, w)| SyllableTemplate::new(t, *w))
            .collect(),
        endings: WeightedTable::from_pairs(endings),
        consonant_preference: None,
        vowel_preference: None,
    }
}

/// Defaults for a built-in style. `Custom` styles have none.
pub fn builtin_style(name: &NameStyle) -> Option<StylePattern> {
    let pattern = match name {
        NameStyle::Simple => style(
            1,
            3,
            &[("CV", 10), ("CVC", 8), ("VC", 5)],
            &[
                ("a", 8),
                ("e", 8),
                ("i", 6),
                ("o", 6),
                ("y", 5),
                ("n", 6),
                ("m", 6),
                ("r", 6),
                ("l", 6),
            ],
        ),
        NameStyle::Elven => style(
            2,
            4,
            &[("CVV", 9), ("CVC", 6), ("VCV", 7)],
            &[
                ("iel", 9),
                ("ion", 8),
                ("ith", 7),
                ("el", 6),
                ("il", 6),
                ("ael", 8),
                ("aer", 7),
                ("ali", 6),
            ],
        ),
        NameStyle::Dwarf => style(
            1,
            3,
            &[("CVC", 10), ("CCVC", 7), ("CVr", 8)],
            &[
                ("in", 8),
                ("ur", 8),
                ("or", 7),
                ("ak", 7),
                ("uk", 6),
                ("grim", 6),
                ("din", 7),
                ("gar", 7),
                ("k", 6),
                ("r", 6),
                ("m", 6),
                ("d", 6),
                ("g", 6),
                ("x", 4),
            ],
        ),
        NameStyle::Mythical => style(
            3,
            5,
            &[("CVV", 8), ("CVC", 7), ("CCVV", 6)],
            &[
                ("ax", 7),
                ("ox", 7),
                ("ix", 6),
                ("or", 8),
                ("us", 8),
                ("um", 7),
                ("on", 7),
                ("yr", 6),
            ],
        ),
        NameStyle::Draconic => style(
            2,
            4,
            &[("CVx", 9), ("CVC", 7), ("CVz", 8)],
            &[
                ("ax", 9),
                ("ox", 8),
                ("ex", 7),
                ("ix", 7),
                ("zar", 8),
                ("zir", 7),
                ("zor", 7),
                ("thor", 6),
                ("dor", 6),
                ("gor", 6),
            ],
        ),
        NameStyle::Fae => style(
            2,
            3,
            &[("VCV", 9), ("CVV", 8), ("VC", 6)],
            &[
                ("ae", 9),
                ("ai", 8),
                ("ie", 8),
                ("yi", 7),
                ("wyn", 7),
                ("lin", 6),
                ("lis", 6),
                ("ria", 7),
            ],
        ),
        NameStyle::Orcish => style(
            1,
            3,
            &[("CCVC", 9), ("CVC", 7), ("GrV", 8)],
            &[
                ("gul", 8),
                ("dug", 8),
                ("rog", 7),
                ("kag", 7),
                ("dar", 6),
                ("mar", 6),
                ("kar", 6),
                ("nak", 7),
            ],
        ),
        NameStyle::Celestial => style(
            3,
            5,
            &[("CVV", 9), ("VCV", 8), ("CVC", 6)],
            &[
                ("ael", 9),
                ("iel", 8),
                ("ias", 8),
                ("ius", 7),
                ("anor", 7),
                ("eros", 6),
                ("aras", 6),
                ("elis", 7),
            ],
        ),
        NameStyle::Coastal => style(
            2,
            4,
            &[("CVV", 8), ("VrV", 7), ("CVl", 7)],
            &[
                ("sea", 8),
                ("wave", 7),
                ("tide", 7),
                ("mere", 6),
                ("cove", 6),
                ("bay", 6),
                ("isle", 7),
                ("haven", 5),
            ],
        ),
        NameStyle::Desert => style(
            2,
            4,
            &[("CVh", 8), ("VCV", 7), ("CVC", 6)],
            &[
                ("ah", 8),
                ("ir", 7),
                ("ad", 7),
                ("im", 6),
                ("rah", 7),
                ("san", 6),
                ("kar", 6),
                ("dun", 5),
            ],
        ),
        NameStyle::Nordic => style(
            1,
            3,
            &[("CVC", 9), ("CVCd", 7), ("ThV", 7)],
            &[
                ("gar", 8),
                ("mund", 8),
                ("ald", 7),
                ("ulf", 7),
                ("thor", 8),
                ("vald", 7),
                ("bjorn", 6),
                ("grim", 6),
            ],
        ),
        NameStyle::Sylvan => style(
            2,
            4,
            &[("CVl", 9), ("VCV", 8), ("CVn", 7)],
            &[
                ("leaf", 8),
                ("wood", 7),
                ("vine", 7),
                ("thorn", 6),
                ("bloom", 6),
                ("root", 6),
                ("branch", 5),
                ("grove", 5),
            ],
        ),
        NameStyle::Custom(_) => return None,
    };
    Some(pattern)
}

fn stress_map(entries: &[(usize, &str)]) -> BTreeMap<usize, String> {
    entries
        .iter()
        .map(|(count, pattern)| (*count, pattern.to_string()))
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Built-in profile for a gender characteristic.
pub fn gender_traits(gender: GenderCharacteristic) -> GenderTraits {
    match gender {
        GenderCharacteristic::Feminine => GenderTraits {
            vowel_preference: Some(VowelPreference::Diphthongs),
            preferred_endings: WeightedTable::from_pairs(&[
                ("a", 9),
                ("ia", 8),
                ("elle", 7),
                ("enne", 6),
                ("ette", 6),
                ("ara", 5),
                ("ira", 5),
                ("ana", 7),
            ]),
            avoid_consonants: strings(&["k", "g", "x"]),
            preferred_consonants: strings(&["l", "n", "m", "r"]),
            stress_preference: Some(stress_map(&[(1, "1"), (2, "10"), (3, "100"), (4, "1020")])),
        },
        GenderCharacteristic::Masculine => GenderTraits {
            vowel_preference: Some(VowelPreference::Common),
            preferred_endings: WeightedTable::from_pairs(&[
                ("us", 8),
                ("or", 8),
                ("on", 7),
                ("ar", 7),
                ("ax", 6),
                ("ir", 6),
                ("en", 5),
            ]),
            avoid_consonants: strings(&["w", "y"]),
            preferred_consonants: strings(&["k", "g", "t", "r", "th"]),
            stress_preference: Some(stress_map(&[(1, "1"), (2, "21"), (3, "201"), (4, "2010")])),
        },
        GenderCharacteristic::Neutral => GenderTraits {
            vowel_preference: Some(VowelPreference::Mixed),
            preferred_endings: WeightedTable::from_pairs(&[
                ("is", 7),
                ("en", 7),
                ("or", 7),
                ("an", 6),
                ("el", 6),
                ("on", 6),
            ]),
            avoid_consonants: Vec::new(),
            preferred_consonants: Vec::new(),
            stress_preference: None,
        },
    }
}

fn rule(kind: PunctuationType, probability: f64, positions: &[Position], chars: &[char]) -> PunctuationRule {
    let rule = PunctuationRule::new(kind, probability, positions);
    if chars.is_empty() {
        rule
    } else {
        rule.with_characters(chars)
    }
}

/// Decoration rules for the built-in styles. `Simple` has none.
pub fn builtin_punctuation() -> PunctuationTable {
    use Position::{End, Middle, Start};
    use PunctuationType::*;

    let mut table: PunctuationTable = HashMap::new();
    table.insert(
        NameStyle::Elven,
        vec![
            rule(Acute, 0.25, &[Middle, End], &['a', 'e', 'i']),
            rule(Circumflex, 0.15, &[Middle], &['a', 'e', 'o']),
            rule(Apostrophe, 0.1, &[Middle], &[]),
        ],
    );
    table.insert(
        NameStyle::Dwarf,
        vec![
            rule(Umlaut, 0.3, &[Middle], &['a', 'o', 'u']),
            rule(Circumflex, 0.15, &[Middle, End], &['a', 'o', 'u']),
        ],
    );
    table.insert(
        NameStyle::Mythical,
        vec![
            rule(Oe, 0.4, &[Start, Middle], &['o']),
            rule(Umlaut, 0.15, &[Middle], &['e', 'i']),
            rule(Hyphen, 0.08, &[Middle], &[]),
        ],
    );
    table.insert(
        NameStyle::Draconic,
        vec![
            rule(Apostrophe, 0.2, &[Middle], &[]),
            rule(Hyphen, 0.1, &[Middle], &[]),
            rule(Circumflex, 0.1, &[Middle], &['a', 'o']),
        ],
    );
    table.insert(
        NameStyle::Fae,
        vec![
            rule(Grave, 0.2, &[Start, Middle, End], &['a', 'e', 'i']),
            rule(Umlaut, 0.2, &[Middle, End], &['i', 'e']),
            rule(Acute, 0.1, &[End], &['y']),
        ],
    );
    table.insert(
        NameStyle::Orcish,
        vec![
            rule(Apostrophe, 0.25, &[Middle], &[]),
            rule(Umlaut, 0.15, &[Middle], &['u', 'o']),
            rule(Hyphen, 0.1, &[Middle], &[]),
        ],
    );
    table.insert(
        NameStyle::Celestial,
        vec![
            rule(Acute, 0.2, &[Middle, End], &['a', 'e', 'i', 'o']),
            rule(Circumflex, 0.15, &[Middle], &['a', 'e']),
            rule(Ash, 0.3, &[Start, Middle], &['a']),
        ],
    );
    table.insert(
        NameStyle::Coastal,
        vec![
            rule(Tilde, 0.2, &[Middle], &['a', 'n', 'o']),
            rule(Acute, 0.1, &[End], &['a', 'e']),
        ],
    );
    table.insert(
        NameStyle::Desert,
        vec![
            rule(Apostrophe, 0.2, &[Middle], &[]),
            rule(Hyphen, 0.15, &[Middle], &[]),
            rule(Circumflex, 0.15, &[Middle, End], &['a', 'i', 'u']),
        ],
    );
    table.insert(
        NameStyle::Nordic,
        vec![
            rule(SlashedO, 0.35, &[Middle, End], &['o']),
            rule(Ash, 0.4, &[Start, Middle], &['a']),
            rule(Ring, 0.25, &[Start, Middle], &['a']),
        ],
    );
    table.insert(
        NameStyle::Sylvan,
        vec![
            rule(Grave, 0.15, &[Middle], &['a', 'e', 'o']),
            rule(Apostrophe, 0.1, &[Middle], &[]),
        ],
    );
    table
}
