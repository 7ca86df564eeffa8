use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::style::NameStyle;

/// Style → decoration rules.
pub type PunctuationTable = HashMap<NameStyle, Vec<PunctuationRule>>;

/// The kinds of decoration the decorator knows how to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PunctuationType {
    Grave,
    Acute,
    Circumflex,
    Umlaut,
    Tilde,
    Apostrophe,
    Hyphen,
    /// `ae` → `æ`
    Ash,
    SlashedO,
    Ring,
    /// `oe` → `œ`
    Oe,
}

impl PunctuationType {
    /// Ligatures replace the current letter and the one after it.
    pub fn is_ligature(&self) -> bool {
        matches!(self, Self::Ash | Self::Oe)
    }

    /// Insertions add a character between two letters instead of replacing one.
    pub fn is_insertion(&self) -> bool {
        matches!(self, Self::Apostrophe | Self::Hyphen)
    }

    /// The character an insertion adds.
    pub fn inserted_char(&self) -> Option<char> {
        match self {
            Self::Apostrophe => Some('\''),
            Self::Hyphen => Some('-'),
            _ => None,
        }
    }

    /// Ligature for the pair `(first, second)`, if this type joins it.
    pub fn ligature(&self, first: char, second: char) -> Option<char> {
        match (self, first, second) {
            (Self::Ash, 'a', 'e') => Some('æ'),
            (Self::Oe, 'o', 'e') => Some('œ'),
            _ => None,
        }
    }

    /// The marked form of a lowercase letter, if this type has one for it.
    pub fn mark(&self, letter: char) -> Option<char> {
        let marked = match (self, letter) {
            (Self::Grave, 'a') => 'à',
            (Self::Grave, 'e') => 'è',
            (Self::Grave, 'i') => 'ì',
            (Self::Grave, 'o') => 'ò',
            (Self::Grave, 'u') => 'ù',
            (Self::Acute, 'a') => 'á',
            (Self::Acute, 'e') => 'é',
            (Self::Acute, 'i') => 'í',
            (Self::Acute, 'o') => 'ó',
            (Self::Acute, 'u') => 'ú',
            (Self::Acute, 'y') => 'ý',
            (Self::Circumflex, 'a') => 'â',
            (Self::Circumflex, 'e') => 'ê',
            (Self::Circumflex, 'i') => 'î',
            (Self::Circumflex, 'o') => 'ô',
            (Self::Circumflex, 'u') => 'û',
            (Self::Umlaut, 'a') => 'ä',
            (Self::Umlaut, 'e') => 'ë',
            (Self::Umlaut, 'i') => 'ï',
            (Self::Umlaut, 'o') => 'ö',
            (Self::Umlaut, 'u') => 'ü',
            (Self::Umlaut, 'y') => 'ÿ',
            (Self::Tilde, 'a') => 'ã',
            (Self::Tilde, 'n') => 'ñ',
            (Self::Tilde, 'o') => 'õ',
            (Self::Ring, 'a') => 'å',
            (Self::Ring, 'u') => 'ů',
            (Self::SlashedO, 'o') => 'ø',
            _ => return None,
        };
        Some(marked)
    }
}

/// Where in a word a rule may fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Start,
    Middle,
    End,
}

impl Position {
    /// The order the decorator visits position categories in.
    pub const ORDER: [Position; 3] = [Self::Start, Self::Middle, Self::End];

    /// Category of character index `index` in a word of `len` characters.
    pub fn of(index: usize, len: usize) -> Position {
        if index == 0 {
            Self::Start
        } else if index + 1 >= len {
            Self::End
        } else {
            Self::Middle
        }
    }
}

/// One decoration rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunctuationRule {
    pub kind: PunctuationType,
    /// Chance of firing at each eligible position, in `[0, 1]`.
    pub probability: f64,
    pub positions: Vec<Position>,
    /// Letters the rule may decorate; `None` allows any letter.
    #[serde(default)]
    pub allowed_characters: Option<Vec<char>>,
    /// Styles the rule is limited to; `None` allows any style it is listed under.
    #[serde(default)]
    pub applicable_styles: Option<Vec<NameStyle>>,
}

impl PunctuationRule {
    pub fn new(kind: PunctuationType, probability: f64, positions: &[Position]) -> Self {
        Self {
            kind,
            probability,
            positions: positions.to_vec(),
            allowed_characters: None,
            applicable_styles: None,
        }
    }

    pub fn with_characters(mut self, characters: &[char]) -> Self {
        self.allowed_characters = Some(characters.to_vec());
        self
    }

    pub fn allows_position(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// Case-insensitive check against the character whitelist.
    pub fn allows_character(&self, c: char) -> bool {
        match &self.allowed_characters {
            Some(allowed) => {
                let lower = c.to_lowercase().next().unwrap_or(c);
                allowed
                    .iter()
                    .any(|a| a.to_lowercase().next().unwrap_or(*a) == lower)
            }
            None => true,
        }
    }

    pub fn applies_to(&self, style: &NameStyle) -> bool {
        match &self.applicable_styles {
            Some(styles) => styles.contains(style),
            None => true,
        }
    }
}

/// Per-call decoration settings. Missing fields take their `Default`
/// values when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PunctuationOptions {
    pub enabled: bool,
    /// Replaces the registry's rule table for this call.
    pub rules: Option<PunctuationTable>,
    pub max_per_name: usize,
}

impl Default for PunctuationOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            rules: None,
            max_per_name: 2,
        }
    }
}

impl PunctuationOptions {
    /// Decoration on, registry rules, default cap.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    pub fn max_per_name(mut self, max: usize) -> Self {
        self.max_per_name = max;
        self
    }
}
