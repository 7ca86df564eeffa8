//! The name generator: configuration merge, the generate-validate loop,
//! decoration, history, and bulk generation of distinct names.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

use crate::core::config::{CustomRules, GenerationConfig, GenerationOptions};
use crate::core::punctuation::{decorate, finalize_case};
use crate::core::registry::{StyleError, StyleRegistry};
use crate::core::sampler::{pick, pick_key};
use crate::core::stress::{apply_stress, choose_pattern};
use crate::core::synth::{syllable, PhonemePools};
use crate::core::tables::MAX_STRESSED_SYLLABLES;
use crate::core::validate::{is_vowel, Validator};
use crate::schema::gender::GenderCharacteristic;
use crate::schema::name::GeneratedName;
use crate::schema::punctuation::PunctuationOptions;
use crate::schema::style::NameStyle;

/// Failed attempts a bulk run tolerates before giving up.
pub const DEFAULT_MAX_BULK_ATTEMPTS: usize = 100;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("failed to generate a valid name after {attempts} attempts")]
    Exhausted { attempts: usize },
    #[error("generated {produced} of {requested} unique names before {attempts} failed attempts")]
    BulkExhausted {
        requested: usize,
        produced: usize,
        attempts: usize,
    },
    #[error("unknown style: {0}")]
    UnknownStyle(String),
    #[error("invalid syllable range {min}..={max}")]
    InvalidSyllableRange { min: usize, max: usize },
    #[error("style '{0}' has no syllable templates")]
    EmptyTemplates(String),
}

/// Everything that shapes one generation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub style: NameStyle,
    #[serde(default)]
    pub gender: GenderCharacteristic,
    #[serde(default)]
    pub options: GenerationOptions,
    #[serde(default)]
    pub custom_rules: Option<CustomRules>,
    #[serde(default)]
    pub punctuation: PunctuationOptions,
}

impl GenerationRequest {
    pub fn new(style: NameStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn gender(mut self, gender: GenderCharacteristic) -> Self {
        self.gender = gender;
        self
    }

    pub fn options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn custom_rules(mut self, rules: CustomRules) -> Self {
        self.custom_rules = Some(rules);
        self
    }

    pub fn punctuation(mut self, punctuation: PunctuationOptions) -> Self {
        self.punctuation = punctuation;
        self
    }
}

/// Every name a generator has produced, oldest first. Cleared only on request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameHistory {
    entries: Vec<GeneratedName>,
}

impl NameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: GeneratedName) {
        self.entries.push(name);
    }

    pub fn entries(&self) -> &[GeneratedName] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeneratedName> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a NameHistory {
    type Item = &'a GeneratedName;
    type IntoIter = std::slice::Iter<'a, GeneratedName>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The name generator. Built via `NameGenerator::builder()`.
pub struct NameGenerator {
    registry: StyleRegistry,
    rng: StdRng,
    history: NameHistory,
    max_bulk_attempts: usize,
}

/// Builder for constructing a `NameGenerator`.
pub struct NameGeneratorBuilder {
    seed: Option<u64>,
    registry: Option<StyleRegistry>,
    style_packs: Vec<PathBuf>,
    max_bulk_attempts: usize,
}

impl NameGeneratorBuilder {
    /// Seed the generator's random source. Unseeded generators draw from entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use `registry` instead of the built-in styles.
    pub fn with_styles(mut self, registry: StyleRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Merge a RON style pack over the registry at build time.
    pub fn style_pack(mut self, path: impl AsRef<Path>) -> Self {
        self.style_packs.push(path.as_ref().to_path_buf());
        self
    }

    pub fn max_bulk_attempts(mut self, attempts: usize) -> Self {
        self.max_bulk_attempts = attempts;
        self
    }

    pub fn build(self) -> Result<NameGenerator, StyleError> {
        let mut registry = self.registry.unwrap_or_else(StyleRegistry::builtin);
        for path in &self.style_packs {
            registry.merge(StyleRegistry::load_from_ron(path)?);
        }
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(NameGenerator {
            registry,
            rng,
            history: NameHistory::new(),
            max_bulk_attempts: self.max_bulk_attempts,
        })
    }
}

impl NameGenerator {
    pub fn builder() -> NameGeneratorBuilder {
        NameGeneratorBuilder {
            seed: None,
            registry: None,
            style_packs: Vec::new(),
            max_bulk_attempts: DEFAULT_MAX_BULK_ATTEMPTS,
        }
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Reseed the internal random source.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Generate one name and record it in the history.
    pub fn generate(&mut self, request: &GenerationRequest) -> Result<GeneratedName, GenerationError> {
        let Self {
            registry,
            rng,
            history,
            ..
        } = self;
        let name = synthesize(registry, request, rng)?;
        history.push(name.clone());
        Ok(name)
    }

    /// `generate` with a caller-supplied random source.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &mut self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> Result<GeneratedName, GenerationError> {
        let name = synthesize(&self.registry, request, rng)?;
        self.history.push(name.clone());
        Ok(name)
    }

    /// Generate `count` structurally distinct names.
    ///
    /// Duplicates and exhausted single attempts both count as failures;
    /// once `max_bulk_attempts` failures accrue the whole batch fails. A
    /// limit of zero fails on the first failure.
    /// Every name produced along the way, duplicates included, lands in the
    /// history.
    pub fn bulk_generate(
        &mut self,
        count: usize,
        request: &GenerationRequest,
    ) -> Result<Vec<GeneratedName>, GenerationError> {
        let Self {
            registry,
            rng,
            history,
            max_bulk_attempts,
        } = self;
        bulk(registry, history, *max_bulk_attempts, count, request, rng)
    }

    /// `bulk_generate` with a caller-supplied random source.
    pub fn bulk_generate_with_rng<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> Result<Vec<GeneratedName>, GenerationError> {
        bulk(
            &self.registry,
            &mut self.history,
            self.max_bulk_attempts,
            count,
            request,
            rng,
        )
    }

    pub fn history(&self) -> &NameHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

fn bulk<R: Rng + ?Sized>(
    registry: &StyleRegistry,
    history: &mut NameHistory,
    max_failures: usize,
    count: usize,
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<Vec<GeneratedName>, GenerationError> {
    let mut seen: FxHashSet<GeneratedName> = FxHashSet::default();
    let mut names = Vec::with_capacity(count);
    let mut failures = 0;

    while names.len() < count {
        match synthesize(registry, request, rng) {
            Ok(name) => {
                history.push(name.clone());
                if seen.insert(name.clone()) {
                    names.push(name);
                } else {
                    debug!(name = %name.name, "duplicate name in bulk run");
                    failures += 1;
                }
            }
            Err(GenerationError::Exhausted { .. }) => failures += 1,
            Err(e) => return Err(e),
        }

        if names.len() < count && failures > 0 && failures >= max_failures {
            debug!(requested = count, produced = names.len(), failures, "bulk generation exhausted");
            return Err(GenerationError::BulkExhausted {
                requested: count,
                produced: names.len(),
                attempts: failures,
            });
        }
    }
    Ok(names)
}

/// One attempt's output before validation.
struct Candidate {
    word: String,
    syllables: Vec<String>,
    stress: String,
    syllable_count: usize,
}

fn synthesize<R: Rng + ?Sized>(
    registry: &StyleRegistry,
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<GeneratedName, GenerationError> {
    let style = registry
        .style(&request.style)
        .ok_or_else(|| GenerationError::UnknownStyle(request.style.to_string()))?;
    let gender = registry.gender(request.gender).cloned().unwrap_or_default();
    let config = GenerationConfig::resolve(style, &gender, request.custom_rules.as_ref());

    let options = &request.options;
    let min = options.min_syllables.unwrap_or(config.min_syllables);
    let max = options.max_syllables.unwrap_or(config.max_syllables);
    if min == 0 || min > max || max > MAX_STRESSED_SYLLABLES {
        return Err(GenerationError::InvalidSyllableRange { min, max });
    }
    if config.templates.is_empty() {
        return Err(GenerationError::EmptyTemplates(request.style.to_string()));
    }

    let pools = PhonemePools::for_config(&config);
    let validator = Validator::for_config(&config);

    for attempt in 1..=options.max_attempts {
        let candidate = sample_candidate(&config, &pools, min, max, options.force_ending, rng);
        if !validator.validate(&candidate.word, candidate.syllable_count == 1) {
            trace!(attempt, word = %candidate.word, "rejected candidate");
            continue;
        }

        debug!(style = %request.style, attempts = attempt, word = %candidate.word, "generated name");
        let decorated = decorate(
            &candidate.word,
            &request.style,
            &request.punctuation,
            registry.punctuation(),
            rng,
        );
        return Ok(GeneratedName {
            name: finalize_case(&decorated),
            syllables: candidate.syllables,
            stress_pattern: candidate.stress,
            style: request.style.clone(),
            gender: request.gender,
        });
    }

    debug!(style = %request.style, attempts = options.max_attempts, "attempt budget exhausted");
    Err(GenerationError::Exhausted {
        attempts: options.max_attempts,
    })
}

fn sample_candidate<R: Rng + ?Sized>(
    config: &GenerationConfig,
    pools: &PhonemePools,
    min: usize,
    max: usize,
    force_ending: bool,
    rng: &mut R,
) -> Candidate {
    let count = rng.gen_range(min..=max);
    let mut syllables = Vec::with_capacity(count + 1);
    for _ in 0..count {
        let template = pick(&config.templates, rng)
            .map(|t| t.template.as_str())
            .unwrap_or_default();
        syllables.push(syllable(template, config, pools, rng));
    }

    let stress = choose_pattern(count, config, rng).unwrap_or_default();
    let mut stressed = apply_stress(&syllables, &stress);

    if force_ending {
        if let Some(ending) = pick_key(config.endings.as_slice(), rng) {
            elide(&mut stressed, ending);
            stressed.push(ending.to_lowercase());
            syllables.push(ending.clone());
        }
    }

    Candidate {
        word: stressed.concat(),
        syllables,
        stress,
        syllable_count: count,
    }
}

/// Drop the last syllable's trailing vowel when the ending opens with one.
fn elide(stressed: &mut [String], ending: &str) {
    let starts_with_vowel = ending
        .chars()
        .next()
        .is_some_and(|c| c.to_lowercase().any(is_vowel));
    if !starts_with_vowel {
        return;
    }
    if let Some(last) = stressed.last_mut() {
        if last.chars().last().is_some_and(|c| c.to_lowercase().any(is_vowel)) {
            last.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::style::SyllableTemplate;
    use crate::schema::weighted::WeightedTable;
    use rand::rngs::mock::StepRng;

    fn generator(seed: u64) -> NameGenerator {
        NameGenerator::builder().seed(seed).build().unwrap()
    }

    fn patient() -> GenerationOptions {
        GenerationOptions::default().max_attempts(500)
    }

    #[test]
    fn constant_source_picks_first_options() {
        let mut gen = generator(0);
        let request = GenerationRequest::new(NameStyle::Simple)
            .options(GenerationOptions::default().syllables(1, 1));
        for _ in 0..3 {
            let mut rng = StepRng::new(0, 0);
            let name = gen.generate_with_rng(&request, &mut rng).unwrap();
            assert_eq!(name.name, "Bla");
            assert_eq!(name.syllables, vec!["bla", "a"]);
            assert_eq!(name.stress_pattern, "1");
        }
        assert_eq!(gen.history().len(), 3);
    }

    #[test]
    fn same_seed_same_names() {
        let request = GenerationRequest::new(NameStyle::Elven)
            .gender(GenderCharacteristic::Feminine)
            .options(patient());
        let a: Vec<String> = {
            let mut gen = generator(42);
            (0..10).map(|_| gen.generate(&request).unwrap().name).collect()
        };
        let b: Vec<String> = {
            let mut gen = generator(42);
            (0..10).map(|_| gen.generate(&request).unwrap().name).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn syllable_count_stays_in_range() {
        let mut gen = generator(7);
        let request = GenerationRequest::new(NameStyle::Nordic)
            .options(patient().syllables(2, 3));
        for _ in 0..100 {
            let name = gen.generate(&request).unwrap();
            let count = name.syllable_count();
            assert!((2..=3).contains(&count), "{:?}", name);
            // Raw syllables carry the ending as an extra entry.
            assert_eq!(name.syllables.len(), count + 1);
        }
    }

    #[test]
    fn without_ending_syllables_match_stress() {
        let mut gen = generator(11);
        let request = GenerationRequest::new(NameStyle::Dwarf)
            .options(GenerationOptions::default().force_ending(false).max_attempts(200));
        for _ in 0..50 {
            let name = gen.generate(&request).unwrap();
            assert_eq!(name.syllables.len(), name.syllable_count());
        }
    }

    #[test]
    fn impossible_templates_exhaust_budget() {
        let mut gen = generator(1);
        // A literal run of four consonants fails every multi-syllable check.
        let request = GenerationRequest::new(NameStyle::Elven)
            .options(GenerationOptions::default().max_attempts(5))
            .custom_rules(CustomRules {
                templates: Some(vec![SyllableTemplate::new("rstk", 1)]),
                ..CustomRules::default()
            });
        match gen.generate(&request) {
            Err(GenerationError::Exhausted { attempts }) => assert_eq!(attempts, 5),
            other => panic!("Expected Exhausted, got {:?}", other),
        }
        assert!(gen.history().is_empty());
    }

    #[test]
    fn unknown_style_is_an_error() {
        let mut gen = generator(1);
        let request = GenerationRequest::new(NameStyle::from_name("glacial"));
        assert!(matches!(
            gen.generate(&request),
            Err(GenerationError::UnknownStyle(s)) if s == "glacial"
        ));
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        let mut gen = generator(1);
        for (min, max) in [(0, 2), (3, 2), (2, 6)] {
            let request = GenerationRequest::new(NameStyle::Simple)
                .options(GenerationOptions::default().syllables(min, max));
            assert!(
                matches!(
                    gen.generate(&request),
                    Err(GenerationError::InvalidSyllableRange { .. })
                ),
                "{}..={}",
                min,
                max
            );
        }
    }

    #[test]
    fn elision_drops_colliding_vowel() {
        let mut stressed = vec!["THA".to_string(), "le".to_string()];
        elide(&mut stressed, "a");
        assert_eq!(stressed, vec!["THA", "l"]);

        let mut stressed = vec!["KOR".to_string()];
        elide(&mut stressed, "a");
        assert_eq!(stressed, vec!["KOR"]);

        let mut stressed = vec!["mira".to_string()];
        elide(&mut stressed, "nd");
        assert_eq!(stressed, vec!["mira"]);
    }

    #[test]
    fn mismatched_stress_override_keeps_syllable_count() {
        let mut gen = generator(13);
        let request = GenerationRequest::new(NameStyle::Simple)
            .options(patient().syllables(3, 3))
            .custom_rules(CustomRules {
                stress_preference: Some([(3, "1".to_string())].into_iter().collect()),
                ..CustomRules::default()
            });
        for _ in 0..20 {
            let name = gen.generate(&request).unwrap();
            assert_eq!(name.syllable_count(), 3, "{:?}", name);
            assert_eq!(name.syllables.len(), 4);
        }
    }

    #[test]
    fn custom_endings_are_used() {
        let mut gen = generator(3);
        let request = GenerationRequest::new(NameStyle::Sylvan).options(patient()).custom_rules(CustomRules {
            endings: Some(WeightedTable::from_pairs(&[("wen", 1000)])),
            ..CustomRules::default()
        });
        let hits = (0..50)
            .filter(|_| gen.generate(&request).unwrap().syllables.last().map(String::as_str) == Some("wen"))
            .count();
        assert!(hits > 35, "Expected mostly 'wen' endings, got {}/50", hits);
    }

    #[test]
    fn bulk_returns_distinct_names() {
        let mut gen = generator(5);
        let request = GenerationRequest::new(NameStyle::Celestial).options(patient());
        let names = gen.bulk_generate(20, &request).unwrap();
        assert_eq!(names.len(), 20);
        let unique: FxHashSet<&GeneratedName> = names.iter().collect();
        assert_eq!(unique.len(), 20);
        assert!(gen.history().len() >= 20);
    }

    #[test]
    fn bulk_fails_when_space_is_too_small() {
        let mut gen = NameGenerator::builder().seed(5).max_bulk_attempts(10).build().unwrap();
        let request = GenerationRequest::new(NameStyle::Simple)
            .options(GenerationOptions::default().syllables(1, 1));
        // A constant source only ever yields one name.
        let mut rng = StepRng::new(0, 0);
        match gen.bulk_generate_with_rng(3, &request, &mut rng) {
            Err(GenerationError::BulkExhausted {
                requested,
                produced,
                attempts,
            }) => {
                assert_eq!(requested, 3);
                assert_eq!(produced, 1);
                assert_eq!(attempts, 10);
            }
            other => panic!("Expected BulkExhausted, got {:?}", other),
        }
    }

    #[test]
    fn bulk_zero_is_empty() {
        let mut gen = generator(5);
        let names = gen.bulk_generate(0, &GenerationRequest::default()).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn clear_history_empties_it() {
        let mut gen = generator(9);
        let request = GenerationRequest::default().options(patient());
        for _ in 0..4 {
            gen.generate(&request).unwrap();
        }
        assert_eq!(gen.history().len(), 4);
        gen.clear_history();
        assert!(gen.history().is_empty());
    }

    #[test]
    fn request_ron_defaults() {
        let request: GenerationRequest = ron::from_str("(style: \"nordic\", gender: masculine)").unwrap();
        assert_eq!(request.style, NameStyle::Nordic);
        assert_eq!(request.gender, GenderCharacteristic::Masculine);
        assert_eq!(request.options, GenerationOptions::default());
        assert!(!request.punctuation.enabled);
    }

    #[test]
    fn request_ron_partial_options_take_defaults() {
        let request: GenerationRequest = ron::from_str(
            "(style: \"nordic\", options: (max_attempts: 10), punctuation: (enabled: true))",
        )
        .unwrap();
        assert_eq!(request.options.max_attempts, 10);
        assert!(request.options.force_ending);
        assert_eq!(request.options.min_syllables, None);
        assert!(request.punctuation.enabled);
        assert_eq!(request.punctuation.max_per_name, 2);
        assert!(request.punctuation.rules.is_none());
    }

    #[test]
    fn bulk_zero_tolerance_fails_on_first_failure() {
        let mut gen = NameGenerator::builder().seed(5).max_bulk_attempts(0).build().unwrap();
        let request = GenerationRequest::new(NameStyle::Simple)
            .options(GenerationOptions::default().syllables(1, 1));
        let mut rng = StepRng::new(0, 0);
        let names = gen.bulk_generate_with_rng(1, &request, &mut rng).unwrap();
        assert_eq!(names.len(), 1);

        // A constant source repeats itself: the second name is a duplicate
        // and the batch fails on that first failure.
        let mut rng = StepRng::new(0, 0);
        match gen.bulk_generate_with_rng(2, &request, &mut rng) {
            Err(GenerationError::BulkExhausted {
                produced, attempts, ..
            }) => {
                assert_eq!(produced, 1);
                assert_eq!(attempts, 1);
            }
            other => panic!("Expected BulkExhausted, got {:?}", other),
        }
    }
}
