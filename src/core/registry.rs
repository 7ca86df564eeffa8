//! Style registry: built-in styles, gender profiles and decoration rules,
//! plus loading and linting of RON style packs.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use thiserror::Error;

use crate::core::tables::{
    builtin_punctuation, builtin_style, gender_traits, MAX_STRESSED_SYLLABLES,
};
use crate::schema::gender::{GenderCharacteristic, GenderTraits};
use crate::schema::punctuation::{PunctuationRule, PunctuationTable};
use crate::schema::style::{
    ConsonantPreference, NameStyle, StylePattern, SyllableTemplate, VowelPreference,
};
use crate::schema::weighted::WeightedTable;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid style '{style}': {reason}")]
    InvalidStyle { style: String, reason: String },
}

/// Every style, gender profile and decoration rule a generator can use.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    styles: HashMap<NameStyle, StylePattern>,
    punctuation: PunctuationTable,
    genders: HashMap<GenderCharacteristic, GenderTraits>,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StyleRegistry {
    /// No styles, built-in gender profiles.
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
            punctuation: HashMap::new(),
            genders: GenderCharacteristic::ALL
                .into_iter()
                .map(|g| (g, gender_traits(g)))
                .collect(),
        }
    }

    /// The twelve built-in styles with their decoration rules.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for style in NameStyle::BUILTIN {
            if let Some(pattern) = builtin_style(&style) {
                registry.register(style, pattern);
            }
        }
        registry.punctuation = builtin_punctuation();
        registry
    }

    pub fn register(&mut self, style: NameStyle, pattern: StylePattern) {
        self.styles.insert(style, pattern);
    }

    pub fn register_gender(&mut self, gender: GenderCharacteristic, traits: GenderTraits) {
        self.genders.insert(gender, traits);
    }

    pub fn set_punctuation(&mut self, style: NameStyle, rules: Vec<PunctuationRule>) {
        self.punctuation.insert(style, rules);
    }

    pub fn style(&self, style: &NameStyle) -> Option<&StylePattern> {
        self.styles.get(style)
    }

    pub fn gender(&self, gender: GenderCharacteristic) -> Option<&GenderTraits> {
        self.genders.get(&gender)
    }

    pub fn punctuation(&self) -> &PunctuationTable {
        &self.punctuation
    }

    /// Registered style names, sorted with built-ins first.
    pub fn styles(&self) -> Vec<NameStyle> {
        let mut names: Vec<NameStyle> = self.styles.keys().cloned().collect();
        names.sort();
        names
    }

    /// Load a style pack from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<StyleRegistry, StyleError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a style pack: a map of style name to `Style(...)` records.
    ///
    /// The result holds only the pack's styles; `merge` it into a built-in
    /// registry to extend the catalogue. Lint errors reject the pack.
    pub fn parse_ron(input: &str) -> Result<StyleRegistry, StyleError> {
        let raw: HashMap<String, RonStyle> = ron::from_str(input)?;
        let mut registry = Self::new();

        for (name, ron_style) in raw {
            if let Some(issue) = ron_style
                .lint(&name)
                .into_iter()
                .find(|i| i.severity == Severity::Error)
            {
                return Err(StyleError::InvalidStyle {
                    style: name,
                    reason: issue.message,
                });
            }
            let style = NameStyle::from_name(&name);
            if !ron_style.punctuation.is_empty() {
                registry.set_punctuation(style.clone(), ron_style.punctuation.clone());
            }
            registry.register(style, ron_style.into_pattern());
        }

        tracing::debug!(styles = registry.styles.len(), "parsed style pack");
        Ok(registry)
    }

    /// Merge another registry into this one. Styles and decoration rules
    /// from `other` replace those with the same name.
    pub fn merge(&mut self, other: StyleRegistry) {
        self.styles.extend(other.styles);
        self.punctuation.extend(other.punctuation);
    }
}

// The pack format names templates `patterns` and carries decoration rules
// inline, so it goes through an intermediate struct.

#[derive(Debug, Deserialize)]
#[serde(rename = "Style")]
struct RonStyle {
    min_syllables: usize,
    max_syllables: usize,
    patterns: Vec<SyllableTemplate>,
    #[serde(default)]
    endings: WeightedTable,
    #[serde(default)]
    consonant_preference: Option<ConsonantPreference>,
    #[serde(default)]
    vowel_preference: Option<VowelPreference>,
    #[serde(default)]
    punctuation: Vec<PunctuationRule>,
}

impl RonStyle {
    fn into_pattern(self) -> StylePattern {
        StylePattern {
            min_syllables: self.min_syllables,
            max_syllables: self.max_syllables,
            templates: self.patterns,
            endings: self.endings,
            consonant_preference: self.consonant_preference,
            vowel_preference: self.vowel_preference,
        }
    }

    fn lint(&self, name: &str) -> Vec<LintIssue> {
        let mut issues = Vec::new();
        let mut error = |message: String| issues.push(LintIssue::error(name, message));

        if self.min_syllables == 0 {
            error("min_syllables must be at least 1".to_string());
        }
        if self.min_syllables > self.max_syllables {
            error(format!(
                "min_syllables ({}) exceeds max_syllables ({})",
                self.min_syllables, self.max_syllables
            ));
        }
        if self.max_syllables > MAX_STRESSED_SYLLABLES {
            error(format!(
                "max_syllables ({}) is beyond the stress table ({})",
                self.max_syllables, MAX_STRESSED_SYLLABLES
            ));
        }
        if self.patterns.is_empty() {
            error("no syllable patterns".to_string());
        }
        for pattern in &self.patterns {
            if pattern.template.is_empty() {
                error("empty syllable pattern".to_string());
            }
            if pattern.weight == 0 {
                error(format!("pattern '{}' has zero weight", pattern.template));
            }
        }
        for (ending, weight) in self.endings.as_slice() {
            if *weight == 0 {
                error(format!("ending '{}' has zero weight", ending));
            }
        }

        if self.endings.is_empty() {
            issues.push(LintIssue::warning(
                name,
                "no endings; generic ending rules will apply".to_string(),
            ));
        }
        for pattern in &self.patterns {
            if let Some(slot) = pattern
                .template
                .chars()
                .find(|c| !matches!(c, 'C' | 'V') && !c.is_ascii_alphabetic())
            {
                issues.push(LintIssue::warning(
                    name,
                    format!("pattern '{}' has unknown slot '{}'", pattern.template, slot),
                ));
            }
        }
        for rule in &self.punctuation {
            if !(0.0..=1.0).contains(&rule.probability) {
                issues.push(LintIssue::warning(
                    name,
                    format!("{:?} rule probability {} is outside [0, 1]", rule.kind, rule.probability),
                ));
            }
            if rule.positions.is_empty() {
                issues.push(LintIssue::warning(
                    name,
                    format!("{:?} rule has no positions and never fires", rule.kind),
                ));
            }
        }
        issues
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// One authoring problem found in a style pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    pub style: String,
    pub severity: Severity,
    pub message: String,
}

impl LintIssue {
    fn error(style: &str, message: String) -> Self {
        Self {
            style: style.to_string(),
            severity: Severity::Error,
            message,
        }
    }

    fn warning(style: &str, message: String) -> Self {
        Self {
            style: style.to_string(),
            severity: Severity::Warning,
            message,
        }
    }
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        };
        write!(f, "{}: [{}] {}", level, self.style, self.message)
    }
}

/// Check a style pack without loading it. Issues are ordered by style name.
pub fn lint_ron(input: &str) -> Result<Vec<LintIssue>, StyleError> {
    let raw: HashMap<String, RonStyle> = ron::from_str(input)?;
    let mut names: Vec<&String> = raw.keys().collect();
    names.sort();
    Ok(names
        .into_iter()
        .flat_map(|name| raw[name].lint(name))
        .collect())
}
