//! WASM bindings for weird-names, powering the interactive web demo.

use wasm_bindgen::prelude::*;

use weird_names::core::config::GenerationOptions;
use weird_names::core::generator::{GenerationRequest, NameGenerator};
use weird_names::schema::gender::GenderCharacteristic;
use weird_names::schema::punctuation::PunctuationOptions;
use weird_names::schema::style::NameStyle;

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Deserialize)]
struct RequestInput {
    #[serde(default)]
    style: Option<String>,
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    min_syllables: Option<usize>,
    #[serde(default)]
    max_syllables: Option<usize>,
    #[serde(default)]
    force_ending: Option<bool>,
    #[serde(default)]
    max_attempts: Option<usize>,
    #[serde(default)]
    punctuation: Option<bool>,
    #[serde(default)]
    max_per_name: Option<usize>,
}

#[derive(serde::Serialize)]
struct NameInfo {
    name: String,
    syllables: Vec<String>,
    stress: String,
    style: String,
    gender: String,
}

impl From<&weird_names::GeneratedName> for NameInfo {
    fn from(name: &weird_names::GeneratedName) -> Self {
        Self {
            name: name.name.clone(),
            syllables: name.syllables.clone(),
            stress: name.stress_pattern.clone(),
            style: name.style.to_string(),
            gender: name.gender.to_string(),
        }
    }
}

fn build_request(input: RequestInput) -> Result<GenerationRequest, JsError> {
    let gender = match input.gender.as_deref() {
        Some(g) => GenderCharacteristic::from_name(g)
            .ok_or_else(|| JsError::new(&format!("Unknown gender: {g}")))?,
        None => GenderCharacteristic::Neutral,
    };
    let defaults = GenerationOptions::default();
    let options = GenerationOptions {
        min_syllables: input.min_syllables,
        max_syllables: input.max_syllables,
        force_ending: input.force_ending.unwrap_or(defaults.force_ending),
        max_attempts: input.max_attempts.unwrap_or(defaults.max_attempts),
    };
    let mut punctuation = PunctuationOptions {
        enabled: input.punctuation.unwrap_or(false),
        ..PunctuationOptions::default()
    };
    if let Some(max) = input.max_per_name {
        punctuation.max_per_name = max;
    }

    Ok(GenerationRequest::new(
        input.style.as_deref().map(NameStyle::from_name).unwrap_or_default(),
    )
    .gender(gender)
    .options(options)
    .punctuation(punctuation))
}

fn parse_request(request_json: &str) -> Result<GenerationRequest, JsError> {
    let input: RequestInput = serde_json::from_str(request_json)
        .map_err(|e| JsError::new(&format!("Invalid request JSON: {e}")))?;
    build_request(input)
}

// ---------------------------------------------------------------------------
// NameDemo, the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct NameDemo {
    generator: NameGenerator,
}

#[wasm_bindgen]
impl NameDemo {
    /// Create a new demo instance with the built-in styles and a seed.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<NameDemo, JsError> {
        let generator = NameGenerator::builder()
            .seed(seed)
            .build()
            .map_err(|e| JsError::new(&format!("Generator build error: {e}")))?;
        Ok(NameDemo { generator })
    }

    /// Generate one name from a JSON request. Returns a JSON object.
    ///
    /// Expected JSON shape (every field optional):
    /// ```json
    /// {
    ///   "style": "elven",
    ///   "gender": "feminine",
    ///   "min_syllables": 2,
    ///   "max_syllables": 3,
    ///   "force_ending": true,
    ///   "max_attempts": 50,
    ///   "punctuation": true,
    ///   "max_per_name": 2
    /// }
    /// ```
    pub fn generate(&mut self, request_json: &str) -> Result<String, JsError> {
        let request = parse_request(request_json)?;
        let name = self
            .generator
            .generate(&request)
            .map_err(|e| JsError::new(&format!("Generation error: {e}")))?;
        serde_json::to_string(&NameInfo::from(&name))
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Generate `count` distinct names. Returns a JSON array of objects.
    pub fn bulk_generate(&mut self, count: usize, request_json: &str) -> Result<String, JsError> {
        let request = parse_request(request_json)?;
        let names = self
            .generator
            .bulk_generate(count, &request)
            .map_err(|e| JsError::new(&format!("Generation error: {e}")))?;
        let infos: Vec<NameInfo> = names.iter().map(NameInfo::from).collect();
        serde_json::to_string(&infos)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Return the session history as a JSON array, oldest first.
    pub fn history(&self) -> String {
        let infos: Vec<NameInfo> = self.generator.history().iter().map(NameInfo::from).collect();
        serde_json::to_string(&infos).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn clear_history(&mut self) {
        self.generator.clear_history();
    }

    /// Return JSON array of available style names.
    pub fn styles(&self) -> String {
        let names: Vec<String> = self
            .generator
            .registry()
            .styles()
            .iter()
            .map(|s| s.to_string())
            .collect();
        serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of gender characteristic names.
    pub fn genders() -> String {
        let names: Vec<&str> = GenderCharacteristic::ALL.iter().map(|g| g.name()).collect();
        serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
    }

    /// Reseed the generator. History is kept.
    pub fn reset(&mut self, seed: u64) {
        self.generator.reseed(seed);
    }

    /// Library version.
    pub fn version() -> String {
        weird_names::VERSION.to_string()
    }
}
