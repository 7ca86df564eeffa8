//! Phonotactic validation of candidate words.
//!
//! Every check runs on a normalized form: lower-cased, with the Nordic
//! letters `æ`, `å` and `ø` folded to their plain vowels.

use crate::core::config::GenerationConfig;

pub const VOWELS: &str = "aeiou";
pub const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(c)
}

/// Lower-case `word` and fold accented Nordic letters to plain vowels.
pub fn normalize(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'æ' | 'å' => 'a',
            'ø' => 'o',
            other => other,
        })
        .collect()
}

/// A pattern no multi-syllable word may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralRule {
    /// `n` or more vowels in a row.
    VowelRun(usize),
    /// `n` or more consonants in a row.
    ConsonantRun(usize),
    /// The same character `n` times in a row.
    RepeatedLetter(usize),
    /// A `q` followed by anything but `u`.
    QWithoutU,
    /// `n` or more characters in a row that are not vowels.
    NonVowelRun(usize),
}

impl StructuralRule {
    pub fn violated_by(&self, word: &[char]) -> bool {
        match *self {
            Self::VowelRun(n) => longest_run(word, |c| is_vowel(*c)) >= n,
            Self::ConsonantRun(n) => longest_run(word, |c| is_consonant(*c)) >= n,
            Self::RepeatedLetter(n) => n > 0 && word.windows(n).any(|w| w.iter().all(|c| *c == w[0])),
            Self::QWithoutU => word.windows(2).any(|w| w[0] == 'q' && w[1] != 'u'),
            Self::NonVowelRun(n) => longest_run(word, |c| !is_vowel(*c)) >= n,
        }
    }
}

/// A pattern a word may not end with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndingRule {
    /// `n` or more consonants at the very end.
    ConsonantCluster(usize),
    /// Last character outside the given set.
    FinalLetterNotIn(String),
}

impl EndingRule {
    pub fn violated_by(&self, word: &[char]) -> bool {
        match self {
            Self::ConsonantCluster(n) => {
                *n > 0 && word.iter().rev().take_while(|c| is_consonant(**c)).count() >= *n
            }
            Self::FinalLetterNotIn(allowed) => match word.last() {
                Some(c) => !allowed.contains(*c),
                None => false,
            },
        }
    }
}

/// Accepted shape of a single-syllable word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyllableShape {
    /// consonant, vowel, consonant
    Cvc,
    /// consonant, vowel, liquid or nasal
    CvLiquid,
    /// consonant, vowel
    Cv,
}

impl SyllableShape {
    pub fn matches(&self, word: &[char]) -> bool {
        match (self, word) {
            (Self::Cvc, [a, b, c]) => is_consonant(*a) && is_vowel(*b) && is_consonant(*c),
            (Self::CvLiquid, [a, b, c]) => is_consonant(*a) && is_vowel(*b) && "rlmn".contains(*c),
            (Self::Cv, [a, b]) => is_consonant(*a) && is_vowel(*b),
            _ => false,
        }
    }
}

/// The loose single-syllable shape: optional consonants, one or more
/// vowels, optional consonants.
fn loose_syllable(word: &[char]) -> bool {
    let onset = word.iter().take_while(|c| is_consonant(**c)).count();
    let nucleus = word[onset..].iter().take_while(|c| is_vowel(**c)).count();
    nucleus > 0 && word[onset + nucleus..].iter().all(|c| is_consonant(*c))
}

fn longest_run(word: &[char], pred: impl Fn(&char) -> bool) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in word {
        if pred(c) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// The full set of checks applied to candidate words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRuleSet {
    pub structural: Vec<StructuralRule>,
    pub endings: Vec<EndingRule>,
    pub single_min_len: usize,
    pub single_max_len: usize,
    pub single_shapes: Vec<SyllableShape>,
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for ValidationRuleSet {
    fn default() -> Self {
        Self {
            structural: vec![
                StructuralRule::VowelRun(3),
                StructuralRule::ConsonantRun(3),
                StructuralRule::RepeatedLetter(3),
                StructuralRule::QWithoutU,
                StructuralRule::NonVowelRun(4),
            ],
            endings: vec![
                EndingRule::ConsonantCluster(2),
                EndingRule::FinalLetterNotIn("aeioulnrmkdgx".to_string()),
            ],
            single_min_len: 2,
            single_max_len: 5,
            single_shapes: vec![SyllableShape::Cvc, SyllableShape::CvLiquid, SyllableShape::Cv],
            min_len: 3,
            max_len: 12,
        }
    }
}

/// Validator bound to one resolved configuration.
#[derive(Debug, Clone)]
pub struct Validator {
    rules: ValidationRuleSet,
    check_endings: bool,
}

impl Validator {
    pub fn new(rules: ValidationRuleSet, check_endings: bool) -> Self {
        Self { rules, check_endings }
    }

    /// Styles with their own ending table skip the generic ending rules.
    pub fn for_config(config: &GenerationConfig) -> Self {
        Self::new(ValidationRuleSet::default(), !config.style_defines_endings)
    }

    pub fn validate(&self, word: &str, is_single_syllable: bool) -> bool {
        let chars: Vec<char> = normalize(word).chars().collect();

        if is_single_syllable {
            let len = chars.len();
            if len < self.rules.single_min_len || len > self.rules.single_max_len {
                return false;
            }
            return self.rules.single_shapes.iter().any(|s| s.matches(&chars))
                || loose_syllable(&chars);
        }

        if self.rules.structural.iter().any(|r| r.violated_by(&chars)) {
            return false;
        }
        if self.check_endings && self.rules.endings.iter().any(|r| r.violated_by(&chars)) {
            return false;
        }
        (self.rules.min_len..=self.rules.max_len).contains(&chars.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn strict() -> Validator {
        Validator::new(ValidationRuleSet::default(), true)
    }

    fn lenient() -> Validator {
        Validator::new(ValidationRuleSet::default(), false)
    }

    #[test]
    fn normalization_folds_nordic_letters() {
        assert_eq!(normalize("ÆsgåRd"), "asgard");
        assert_eq!(normalize("Bjørn"), "bjorn");
    }

    #[test]
    fn structural_rules() {
        assert!(StructuralRule::VowelRun(3).violated_by(&chars("kaeia")));
        assert!(!StructuralRule::VowelRun(3).violated_by(&chars("kaeli")));
        assert!(StructuralRule::ConsonantRun(3).violated_by(&chars("astra")));
        assert!(StructuralRule::RepeatedLetter(3).violated_by(&chars("alll")));
        assert!(!StructuralRule::RepeatedLetter(3).violated_by(&chars("alla")));
        assert!(StructuralRule::QWithoutU.violated_by(&chars("qarin")));
        assert!(!StructuralRule::QWithoutU.violated_by(&chars("quarin")));
        assert!(!StructuralRule::QWithoutU.violated_by(&chars("iraq")));
        assert!(StructuralRule::NonVowelRun(4).violated_by(&chars("ka'th-ra")));
    }

    #[test]
    fn ending_rules() {
        assert!(EndingRule::ConsonantCluster(2).violated_by(&chars("dorn")));
        assert!(!EndingRule::ConsonantCluster(2).violated_by(&chars("doran")));
        let final_letter = EndingRule::FinalLetterNotIn("aeioulnrmkdgx".to_string());
        assert!(final_letter.violated_by(&chars("varis")));
        assert!(!final_letter.violated_by(&chars("varil")));
    }

    #[test]
    fn single_syllable_shapes() {
        let v = strict();
        assert!(v.validate("KAR", true));
        assert!(v.validate("Ka", true));
        assert!(v.validate("tol", true));
        assert!(!v.validate("a", true));
        assert!(!v.validate("thraxon", true));
    }

    #[test]
    fn single_syllable_loose_fallback() {
        let v = strict();
        // None of the preferred shapes, but consonants-vowels-consonants.
        assert!(v.validate("bla", true));
        assert!(v.validate("aeth", true));
        assert!(!v.validate("tak'", true));
        assert!(!v.validate("krk", true));
    }

    #[test]
    fn multi_syllable_length_bounds() {
        let v = lenient();
        assert!(!v.validate("ka", false));
        assert!(v.validate("kalo", false));
        assert!(!v.validate("kalomirelatha", false));
    }

    #[test]
    fn style_endings_exempt_generic_check() {
        assert!(!strict().validate("Valis", false));
        assert!(lenient().validate("Valis", false));
    }

    #[test]
    fn accented_letters_are_checked_as_vowels() {
        let v = lenient();
        assert!(v.validate("Bjøren", false));
        assert!(!v.validate("Kaæo", false));
    }

    #[test]
    fn validation_is_idempotent() {
        let v = strict();
        for word in ["Elendir", "Morka", "Thalen", "Bla", "Karum"] {
            let first = v.validate(word, false);
            assert_eq!(first, v.validate(word, false), "{}", word);
            assert_eq!(first, v.validate(&normalize(word), false), "{}", word);
        }
    }
}
