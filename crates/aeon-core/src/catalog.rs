//! Epoch catalog: the fixed, ordered collection of cosmic-history records.
//!
//! The catalog is built once at startup and never mutated. Iteration order
//! is declaration order, and left/right navigation in the viewer walks that
//! order directly.

use serde::{Deserialize, Serialize};

use crate::data;

/// Coarse grouping of epochs, used for presentation accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Era {
    /// Before the known laws of physics settle (Planck era through inflation).
    Primordial,
    /// Hot plasma of fundamental particles and nucleosynthesis.
    Particle,
    /// Neutral matter: recombination and the dark ages.
    Matter,
    /// First stars, reionization, and galaxy assembly.
    Stellar,
    /// The accelerating, dark-energy-dominated present.
    Expansion,
}

impl Era {
    /// Display label for badges and CLI output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Primordial => "Primordial",
            Self::Particle => "Particle",
            Self::Matter => "Matter",
            Self::Stellar => "Stellar",
            Self::Expansion => "Expansion",
        }
    }
}

/// A single epoch of cosmic history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochRecord {
    /// Stable lookup key, unique across the catalog.
    pub id: String,
    /// Display name.
    pub title: String,
    /// Offset from the origin as a display label (may use unicode exponents).
    pub time: String,
    /// Characteristic temperature label, same free-form convention.
    pub temperature: String,
    /// Era grouping for presentation accents.
    pub era: Era,
    /// Markdown description rendered in the detail view.
    pub description: String,
    /// Stat pairs in display order. Order is part of the record.
    pub stats: Vec<(String, String)>,
}

impl EpochRecord {
    /// Create a record with an empty description and no stats.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        time: impl Into<String>,
        temperature: impl Into<String>,
        era: Era,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            time: time.into(),
            temperature: temperature.into(),
            era,
            description: String::new(),
            stats: Vec::new(),
        }
    }

    /// Set the markdown description.
    #[must_use]
    pub fn describe(mut self, markdown: impl Into<String>) -> Self {
        self.description = markdown.into();
        self
    }

    /// Append one stat pair. Call order is display order.
    #[must_use]
    pub fn stat(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.stats.push((label.into(), value.into()));
        self
    }
}

/// Immutable, ordered collection of epochs.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<EpochRecord>,
}

impl Catalog {
    /// Build a catalog from records. Record order is navigation order.
    pub fn new(records: Vec<EpochRecord>) -> Self {
        Self { records }
    }

    /// The built-in cosmic-history dataset.
    pub fn builtin() -> Self {
        Self::new(data::builtin_records())
    }

    /// Look up a record by id.
    pub fn lookup(&self, id: &str) -> Option<&EpochRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Position of an id in navigation order.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Record at a navigation-order position.
    pub fn get(&self, index: usize) -> Option<&EpochRecord> {
        self.records.get(index)
    }

    /// All record ids in navigation order.
    pub fn ordered_ids(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.id.as_str()).collect()
    }

    /// All records in navigation order.
    pub fn records(&self) -> &[EpochRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            EpochRecord::new("big-bang", "Big Bang", "t = 0", "Unbounded", Era::Primordial)
                .describe("The origin point.")
                .stat("Age", "0 s")
                .stat("Size", "A point"),
            EpochRecord::new("inflation", "Inflation", "10\u{207b}\u{b3}\u{2076} s", "10\u{b2}\u{2078} K", Era::Primordial)
                .describe("Exponential expansion."),
            EpochRecord::new("particle-soup", "Particle Soup", "1 s", "10\u{b9}\u{2070} K", Era::Particle),
        ])
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let catalog = sample_catalog();
        assert_eq!(catalog.lookup("inflation").map(|r| r.title.as_str()), Some("Inflation"));
        assert!(catalog.lookup("does-not-exist").is_none());
    }

    #[test]
    fn test_ordered_ids_declaration_order() {
        let catalog = sample_catalog();
        assert_eq!(catalog.ordered_ids(), vec!["big-bang", "inflation", "particle-soup"]);
    }

    #[test]
    fn test_index_of() {
        let catalog = sample_catalog();
        assert_eq!(catalog.index_of("big-bang"), Some(0));
        assert_eq!(catalog.index_of("particle-soup"), Some(2));
        assert_eq!(catalog.index_of("nope"), None);
    }

    #[test]
    fn test_stats_preserve_order() {
        let catalog = sample_catalog();
        let record = catalog.lookup("big-bang").unwrap();
        let labels: Vec<&str> = record.stats.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(labels, vec!["Age", "Size"]);
    }

    #[test]
    fn test_era_labels() {
        assert_eq!(Era::Primordial.label(), "Primordial");
        assert_eq!(Era::Expansion.label(), "Expansion");
    }
}
