//! Weird Names: procedural fantasy name generation.
//!
//! Synthesizes pronounceable names from weighted phonetic building blocks,
//! shaped by a style and a gender bias, checked against phonotactic rules,
//! and optionally decorated with diacritics, ligatures, apostrophes or
//! hyphens.

pub mod core;
pub mod schema;

pub use crate::core::config::{CustomRules, GenerationOptions};
pub use crate::core::generator::{
    GenerationError, GenerationRequest, NameGenerator, NameGeneratorBuilder, NameHistory,
};
pub use crate::core::registry::{StyleError, StyleRegistry};
pub use crate::schema::gender::GenderCharacteristic;
pub use crate::schema::name::GeneratedName;
pub use crate::schema::punctuation::PunctuationOptions;
pub use crate::schema::style::NameStyle;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
