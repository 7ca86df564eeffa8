//! Phoneme and syllable synthesis from templates.

use rand::Rng;

use crate::core::config::GenerationConfig;
use crate::core::sampler::pick_key;
use crate::core::tables::{
    StaticTable, BLENDS_INITIAL, CONSONANTS_COMMON, CONSONANTS_RARE, VOWELS_COMMON,
    VOWEL_DIPHTHONGS,
};
use crate::schema::style::{ConsonantPreference, VowelPreference};

/// Chance that a `C` slot becomes an initial consonant blend.
pub const BLEND_CHANCE: f64 = 0.3;
/// Chance that a multi-letter pool draw is kept rather than resampled.
pub const CLUSTER_KEEP_CHANCE: f64 = 0.3;
/// Resample cap for a single phoneme slot.
pub const MAX_PHONEME_RESAMPLES: usize = 64;

/// Consonant and vowel pools for one resolved configuration.
#[derive(Debug, Clone)]
pub struct PhonemePools {
    consonants: Vec<(&'static str, u32)>,
    vowels: Vec<(&'static str, u32)>,
}

impl PhonemePools {
    pub fn for_config(config: &GenerationConfig) -> Self {
        let consonants = match config.consonant_preference {
            ConsonantPreference::Rare => union(CONSONANTS_COMMON, CONSONANTS_RARE),
            ConsonantPreference::Common => CONSONANTS_COMMON.to_vec(),
        };
        let vowels = match config.vowel_preference {
            VowelPreference::Diphthongs => union(VOWELS_COMMON, VOWEL_DIPHTHONGS),
            VowelPreference::Common | VowelPreference::Mixed => VOWELS_COMMON.to_vec(),
        };
        Self { consonants, vowels }
    }

    pub fn consonants(&self) -> &[(&'static str, u32)] {
        &self.consonants
    }

    pub fn vowels(&self) -> &[(&'static str, u32)] {
        &self.vowels
    }
}

fn union(base: StaticTable, extra: StaticTable) -> Vec<(&'static str, u32)> {
    let mut pool = base.to_vec();
    for entry in extra {
        match pool.iter_mut().find(|(k, _)| k == &entry.0) {
            Some(existing) => existing.1 = entry.1,
            None => pool.push(*entry),
        }
    }
    pool
}

/// Expand one template slot.
///
/// `C` and `V` draw from the pools, resampling a consonant the config avoids
/// and, with probability `1 - CLUSTER_KEEP_CHANCE`, any multi-letter draw.
/// Any other symbol is copied through lower-cased.
pub fn phoneme<R: Rng + ?Sized>(
    slot: char,
    config: &GenerationConfig,
    pools: &PhonemePools,
    rng: &mut R,
) -> String {
    let (pool, is_consonant) = match slot {
        'C' => (pools.consonants(), true),
        'V' => (pools.vowels(), false),
        other => return other.to_lowercase().collect(),
    };

    for _ in 0..MAX_PHONEME_RESAMPLES {
        let Some(candidate) = pick_key(pool, rng) else {
            return String::new();
        };
        if is_consonant && config.avoids(candidate) {
            continue;
        }
        if candidate.len() > 1 && rng.gen::<f64>() > CLUSTER_KEEP_CHANCE {
            continue;
        }
        return candidate.to_string();
    }

    // Out of resamples: first single letter the config allows.
    pool.iter()
        .map(|(k, _)| *k)
        .find(|k| k.len() == 1 && !(is_consonant && config.avoids(k)))
        .or_else(|| pool.first().map(|(k, _)| *k))
        .unwrap_or_default()
        .to_string()
}

/// Expand a whole syllable template.
///
/// Each `C` slot first rolls `BLEND_CHANCE` for an initial blend; blends are
/// not checked against the avoid list.
pub fn syllable<R: Rng + ?Sized>(
    template: &str,
    config: &GenerationConfig,
    pools: &PhonemePools,
    rng: &mut R,
) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    for slot in template.chars() {
        if slot == 'C' && rng.gen::<f64>() < BLEND_CHANCE {
            if let Some(blend) = pick_key(BLENDS_INITIAL, rng) {
                out.push_str(blend);
                continue;
            }
        }
        out.push_str(&phoneme(slot, config, pools, rng));
    }
    out
}
