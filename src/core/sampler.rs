//! Weighted selection over ordered tables.

use rand::Rng;

use crate::schema::style::SyllableTemplate;

/// Anything that carries a selection weight.
pub trait Weighted {
    fn weight(&self) -> u32;
}

impl<K> Weighted for (K, u32) {
    fn weight(&self) -> u32 {
        self.1
    }
}

impl Weighted for SyllableTemplate {
    fn weight(&self) -> u32 {
        self.weight
    }
}

/// Pick one entry with probability `weight / total`.
///
/// Draws a point in `[0, total)` and walks the table subtracting weights
/// until the remainder reaches zero. If rounding leaves a positive remainder
/// after the last entry, the first entry is returned. Returns `None` only
/// for an empty table.
pub fn pick<'a, T, R>(entries: &'a [T], rng: &mut R) -> Option<&'a T>
where
    T: Weighted,
    R: Rng + ?Sized,
{
    let first = entries.first()?;
    let total: u64 = entries.iter().map(|e| u64::from(e.weight())).sum();
    let mut remaining = rng.gen::<f64>() * total as f64;

    for entry in entries {
        remaining -= f64::from(entry.weight());
        if remaining <= 0.0 {
            return Some(entry);
        }
    }
    Some(first)
}

/// `pick` over `(key, weight)` pairs, returning the key.
pub fn pick_key<'a, K, R>(entries: &'a [(K, u32)], rng: &mut R) -> Option<&'a K>
where
    R: Rng + ?Sized,
{
    pick(entries, rng).map(|(key, _)| key)
}
