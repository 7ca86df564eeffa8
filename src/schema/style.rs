use serde::{Deserialize, Serialize};
use std::fmt;

use super::weighted::WeightedTable;

/// A named aesthetic profile governing syllable shapes and endings.
///
/// The twelve built-in styles ship with the crate; `Custom` names a style
/// registered from a RON style pack. Serializes as its lowercase name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NameStyle {
    Simple,
    Elven,
    Dwarf,
    Mythical,
    Draconic,
    Fae,
    Orcish,
    Celestial,
    Coastal,
    Desert,
    Nordic,
    Sylvan,
    Custom(String),
}

impl NameStyle {
    /// Every built-in style, in catalogue order.
    pub const BUILTIN: [NameStyle; 12] = [
        NameStyle::Simple,
        NameStyle::Elven,
        NameStyle::Dwarf,
        NameStyle::Mythical,
        NameStyle::Draconic,
        NameStyle::Fae,
        NameStyle::Orcish,
        NameStyle::Celestial,
        NameStyle::Coastal,
        NameStyle::Desert,
        NameStyle::Nordic,
        NameStyle::Sylvan,
    ];

    pub fn name(&self) -> &str {
        match self {
            Self::Simple => "simple",
            Self::Elven => "elven",
            Self::Dwarf => "dwarf",
            Self::Mythical => "mythical",
            Self::Draconic => "draconic",
            Self::Fae => "fae",
            Self::Orcish => "orcish",
            Self::Celestial => "celestial",
            Self::Coastal => "coastal",
            Self::Desert => "desert",
            Self::Nordic => "nordic",
            Self::Sylvan => "sylvan",
            Self::Custom(name) => name,
        }
    }

    /// Resolve a style by name. Unknown names become `Custom`.
    pub fn from_name(name: &str) -> Self {
        let normalized = name.trim().to_lowercase();
        Self::BUILTIN
            .iter()
            .find(|style| style.name() == normalized)
            .cloned()
            .unwrap_or(Self::Custom(normalized))
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl Default for NameStyle {
    fn default() -> Self {
        Self::Simple
    }
}

impl fmt::Display for NameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for NameStyle {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<&str> for NameStyle {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<NameStyle> for String {
    fn from(style: NameStyle) -> Self {
        style.name().to_string()
    }
}

/// Which consonant pool a style draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConsonantPreference {
    #[default]
    Common,
    /// Common consonants plus the rare ones (c, j, q, x, y, z).
    Rare,
}

/// Which vowel pool a style or gender draws from.
///
/// `Mixed` draws from the common pool, same as `Common`; only
/// `Diphthongs` widens the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VowelPreference {
    #[default]
    Common,
    Diphthongs,
    Mixed,
}

/// A weighted syllable shape: `C` is a consonant slot, `V` a vowel slot,
/// anything else is copied through lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyllableTemplate {
    pub template: String,
    pub weight: u32,
}

impl SyllableTemplate {
    pub fn new(template: &str, weight: u32) -> Self {
        Self {
            template: template.to_string(),
            weight,
        }
    }
}

/// Syllable-level defaults for one style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylePattern {
    pub min_syllables: usize,
    pub max_syllables: usize,
    pub templates: Vec<SyllableTemplate>,
    #[serde(default)]
    pub endings: WeightedTable,
    #[serde(default)]
    pub consonant_preference: Option<ConsonantPreference>,
    #[serde(default)]
    pub vowel_preference: Option<VowelPreference>,
}
