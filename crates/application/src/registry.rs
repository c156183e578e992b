//! In-memory athlete registry.
//!
//! Records are keyed by exact name and kept in first-registration order.
//! Overwriting an athlete keeps its position.

use athlete_perf_domain::{AthleteName, AthleteRecord};
use indexmap::IndexMap;

/// Insertion-ordered map from athlete name to record
#[derive(Debug, Clone, Default)]
pub struct Registry {
    records: IndexMap<AthleteName, AthleteRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from records in storage order; later duplicates win
    pub fn from_records(records: impl IntoIterator<Item = AthleteRecord>) -> Self {
        let mut registry = Self::new();
        for record in records {
            registry.upsert(record);
        }
        registry
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, name: &str) -> Option<&AthleteRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Records in registry order
    pub fn records(&self) -> impl ExactSizeIterator<Item = &AthleteRecord> {
        self.records.values()
    }

    /// Insert or overwrite a record, returning the one it replaced
    pub fn upsert(&mut self, record: AthleteRecord) -> Option<AthleteRecord> {
        self.records.insert(record.name().clone(), record)
    }

    /// Undo an `upsert` of `name`.
    ///
    /// With a prior record the slot is restored in place; without one the
    /// entry is removed and the order of the remaining athletes is preserved.
    pub fn revert(&mut self, name: &AthleteName, prior: Option<AthleteRecord>) {
        match prior {
            Some(record) => {
                self.records.insert(name.clone(), record);
            }
            None => {
                self.records.shift_remove(name);
            }
        }
    }
}
