use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::style::VowelPreference;
use super::weighted::WeightedTable;

/// A bias profile layered on top of a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderCharacteristic {
    Feminine,
    Masculine,
    #[default]
    Neutral,
}

impl GenderCharacteristic {
    pub const ALL: [GenderCharacteristic; 3] = [Self::Feminine, Self::Masculine, Self::Neutral];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Feminine => "feminine",
            Self::Masculine => "masculine",
            Self::Neutral => "neutral",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "feminine" | "f" => Some(Self::Feminine),
            "masculine" | "m" => Some(Self::Masculine),
            "neutral" | "n" => Some(Self::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for GenderCharacteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-gender overrides applied on top of a style's defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenderTraits {
    #[serde(default)]
    pub vowel_preference: Option<VowelPreference>,
    /// Endings merged over the style's own ending table.
    #[serde(default)]
    pub preferred_endings: WeightedTable,
    #[serde(default)]
    pub avoid_consonants: Vec<String>,
    #[serde(default)]
    pub preferred_consonants: Vec<String>,
    /// Syllable count → forced stress pattern, bypassing weighted sampling.
    #[serde(default)]
    pub stress_preference: Option<BTreeMap<usize, String>>,
}
