use serde::{Deserialize, Serialize};

use super::gender::GenderCharacteristic;
use super::style::NameStyle;

/// A finished name and the pieces it was built from.
///
/// Equality and hashing are structural: two results with the same final text
/// but different syllables or stress are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratedName {
    /// Final text: decorated, first letter capitalized, rest lower-cased.
    pub name: String,
    /// Raw syllables before stress casing and decoration, ending included.
    pub syllables: Vec<String>,
    /// One digit per generated syllable: `1` primary, `2` secondary, `0` none.
    pub stress_pattern: String,
    pub style: NameStyle,
    pub gender: GenderCharacteristic,
}

impl GeneratedName {
    /// Number of syllables drawn from templates, i.e. excluding the ending.
    pub fn syllable_count(&self) -> usize {
        self.stress_pattern.chars().count()
    }
}
