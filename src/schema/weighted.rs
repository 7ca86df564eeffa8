use serde::{Deserialize, Serialize};

/// An ordered item → weight table.
///
/// Order is part of the data: the sampler falls back to the first entry when
/// floating point rounding lets a draw slip past every bucket, so two tables
/// with the same weights in a different order are not interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightedTable(Vec<(String, u32)>);

impl WeightedTable {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a table from static `(item, weight)` pairs, keeping their order.
    pub fn from_pairs(pairs: &[(&str, u32)]) -> Self {
        let mut table = Self::new();
        for (item, weight) in pairs {
            table.insert(item, *weight);
        }
        table
    }

    /// Set the weight for `item`. An existing entry keeps its position;
    /// a new one is appended.
    pub fn insert(&mut self, item: &str, weight: u32) {
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| k == item) {
            entry.1 = weight;
        } else {
            self.0.push((item.to_string(), weight));
        }
    }

    /// Layer `other` on top of this table: colliding items take the weight
    /// from `other`, new items are appended in `other`'s order.
    pub fn merge(&mut self, other: &WeightedTable) {
        for (item, weight) in &other.0 {
            self.insert(item, *weight);
        }
    }

    pub fn get(&self, item: &str) -> Option<u32> {
        self.0.iter().find(|(k, _)| k == item).map(|(_, w)| *w)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.get(item).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[(String, u32)] {
        &self.0
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl FromIterator<(String, u32)> for WeightedTable {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (item, weight) in iter {
            table.insert(&item, weight);
        }
        table
    }
}
