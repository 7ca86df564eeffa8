//! Per-call options and the layered resolution of style, gender and caller
//! overrides into one effective configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::schema::gender::GenderTraits;
use crate::schema::style::{ConsonantPreference, StylePattern, SyllableTemplate, VowelPreference};
use crate::schema::weighted::WeightedTable;

/// Caller-facing knobs for a single generation. Missing fields take their
/// `Default` values when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Overrides the resolved style minimum.
    pub min_syllables: Option<usize>,
    /// Overrides the resolved style maximum.
    pub max_syllables: Option<usize>,
    pub force_ending: bool,
    pub max_attempts: usize,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            min_syllables: None,
            max_syllables: None,
            force_ending: true,
            max_attempts: 50,
        }
    }
}

impl GenerationOptions {
    pub fn syllables(mut self, min: usize, max: usize) -> Self {
        self.min_syllables = Some(min);
        self.max_syllables = Some(max);
        self
    }

    pub fn force_ending(mut self, force: bool) -> Self {
        self.force_ending = force;
        self
    }

    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }
}

/// Caller overrides, applied after style and gender.
///
/// `templates` replaces the style's templates outright. `endings` is merged
/// over the style and gender endings. Every other field replaces the layer
/// below it when present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomRules {
    #[serde(default)]
    pub min_syllables: Option<usize>,
    #[serde(default)]
    pub max_syllables: Option<usize>,
    #[serde(default)]
    pub templates: Option<Vec<SyllableTemplate>>,
    #[serde(default)]
    pub endings: Option<WeightedTable>,
    #[serde(default)]
    pub consonant_preference: Option<ConsonantPreference>,
    #[serde(default)]
    pub vowel_preference: Option<VowelPreference>,
    #[serde(default)]
    pub avoid_consonants: Option<Vec<String>>,
    #[serde(default)]
    pub preferred_consonants: Option<Vec<String>>,
    #[serde(default)]
    pub stress_preference: Option<BTreeMap<usize, String>>,
}

/// The effective ruleset for one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub min_syllables: usize,
    pub max_syllables: usize,
    pub templates: Vec<SyllableTemplate>,
    pub endings: WeightedTable,
    pub consonant_preference: ConsonantPreference,
    pub vowel_preference: VowelPreference,
    pub avoid_consonants: Vec<String>,
    /// Carried for callers that inspect the resolved config; the synthesizer
    /// does not weight by it.
    pub preferred_consonants: Vec<String>,
    pub stress_preference: BTreeMap<usize, String>,
    /// Whether the style layer itself defines endings. Styles that do are
    /// exempt from the generic ending check.
    pub style_defines_endings: bool,
}

impl GenerationConfig {
    /// Resolve style → gender → custom, field by field.
    pub fn resolve(
        style: &StylePattern,
        gender: &GenderTraits,
        custom: Option<&CustomRules>,
    ) -> GenerationConfig {
        let mut config = GenerationConfig {
            min_syllables: style.min_syllables,
            max_syllables: style.max_syllables,
            templates: style.templates.clone(),
            endings: style.endings.clone(),
            consonant_preference: style.consonant_preference.unwrap_or_default(),
            vowel_preference: style.vowel_preference.unwrap_or_default(),
            avoid_consonants: Vec::new(),
            preferred_consonants: Vec::new(),
            stress_preference: BTreeMap::new(),
            style_defines_endings: !style.endings.is_empty(),
        };

        // Gender layer
        if let Some(vowels) = gender.vowel_preference {
            config.vowel_preference = vowels;
        }
        config.endings.merge(&gender.preferred_endings);
        config.avoid_consonants = gender.avoid_consonants.clone();
        config.preferred_consonants = gender.preferred_consonants.clone();
        if let Some(ref stress) = gender.stress_preference {
            config.stress_preference = stress.clone();
        }

        // Custom layer
        let Some(custom) = custom else {
            return config;
        };
        if let Some(min) = custom.min_syllables {
            config.min_syllables = min;
        }
        if let Some(max) = custom.max_syllables {
            config.max_syllables = max;
        }
        if let Some(ref templates) = custom.templates {
            config.templates = templates.clone();
        }
        if let Some(ref endings) = custom.endings {
            config.endings.merge(endings);
        }
        if let Some(consonants) = custom.consonant_preference {
            config.consonant_preference = consonants;
        }
        if let Some(vowels) = custom.vowel_preference {
            config.vowel_preference = vowels;
        }
        if let Some(ref avoid) = custom.avoid_consonants {
            config.avoid_consonants = avoid.clone();
        }
        if let Some(ref preferred) = custom.preferred_consonants {
            config.preferred_consonants = preferred.clone();
        }
        if let Some(ref stress) = custom.stress_preference {
            config.stress_preference = stress.clone();
        }
        config
    }

    pub fn avoids(&self, consonant: &str) -> bool {
        self.avoid_consonants.iter().any(|c| c == consonant)
    }

    /// The gender or caller forced stress pattern for `syllables`, if any.
    pub fn forced_stress(&self, syllables: usize) -> Option<&str> {
        self.stress_preference.get(&syllables).map(String::as_str)
    }
}
