//! Mock implementations of the store and difficulty source.
//!
//! Clones share state, so a test can keep one handle while the engine owns
//! another.

use athlete_perf_application::{
    ApplicationError, ApplicationResult, AthleteStorePort, DifficultySource, LoadOutcome,
};
use athlete_perf_domain::{AthleteRecord, LoadWarning, TestTriple};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory athlete store with failure injection
#[derive(Clone, Default)]
pub struct MockAthleteStore {
    records: Arc<RwLock<Vec<AthleteRecord>>>,
    warnings: Arc<RwLock<Vec<LoadWarning>>>,
    fail_loads: Arc<AtomicBool>,
    fail_saves: Arc<AtomicBool>,
    save_count: Arc<AtomicUsize>,
}

impl MockAthleteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `records`
    pub fn with_records(records: Vec<AthleteRecord>) -> Self {
        let store = Self::new();
        *store.records.write() = records;
        store
    }

    /// Warnings returned by every subsequent load
    pub fn with_warnings(self, warnings: Vec<LoadWarning>) -> Self {
        *self.warnings.write() = warnings;
        self
    }

    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Records from the last successful save
    pub fn saved_records(&self) -> Vec<AthleteRecord> {
        self.records.read().clone()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }
}

impl AthleteStorePort for MockAthleteStore {
    fn load(&self) -> ApplicationResult<LoadOutcome> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(ApplicationError::Persistence("mock load failure".to_string()));
        }
        Ok(LoadOutcome::new(
            self.records.read().clone(),
            self.warnings.read().clone(),
        ))
    }

    fn save(&self, records: &[&AthleteRecord]) -> ApplicationResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(ApplicationError::Persistence("mock save failure".to_string()));
        }
        *self.records.write() = records.iter().map(|r| (*r).clone()).collect();
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Difficulty source that replays a fixed script, cycling when exhausted
#[derive(Clone, Debug)]
pub struct ScriptedDifficultySource {
    script: Vec<TestTriple<f64>>,
    next: usize,
}

impl ScriptedDifficultySource {
    pub fn new(script: Vec<TestTriple<f64>>) -> Self {
        Self { script, next: 0 }
    }

    /// Convenience for scripting tuples
    pub fn from_tuples(script: &[(f64, f64, f64)]) -> Self {
        Self::new(
            script
                .iter()
                .map(|&(r, s, v)| TestTriple::new(r, s, v))
                .collect(),
        )
    }

    /// Number of draws made so far
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl DifficultySource for ScriptedDifficultySource {
    fn draw(&mut self) -> TestTriple<f64> {
        let triple = if self.script.is_empty() {
            TestTriple::new(1.0, 1.0, 1.0)
        } else {
            self.script[self.next % self.script.len()]
        };
        self.next += 1;
        triple
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{alice, bob};

    #[test]
    fn test_mock_store_shares_state_between_clones() {
        let store = MockAthleteStore::new();
        let handle = store.clone();

        store.save(&[&alice(), &bob()]).unwrap();
        assert_eq!(handle.saved_records().len(), 2);
        assert_eq!(handle.save_count(), 1);
    }

    #[test]
    fn test_mock_store_failure_injection() {
        let store = MockAthleteStore::with_records(vec![alice()]);
        store.fail_saves(true);
        assert!(store.save(&[&bob()]).is_err());
        assert_eq!(store.saved_records(), vec![alice()]);

        store.fail_loads(true);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_scripted_source_cycles() {
        let mut source = ScriptedDifficultySource::from_tuples(&[(1.0, 1.1, 1.2), (1.3, 1.3, 1.3)]);
        assert_eq!(source.draw().to_array(), [1.0, 1.1, 1.2]);
        assert_eq!(source.draw().to_array(), [1.3, 1.3, 1.3]);
        assert_eq!(source.draw().to_array(), [1.0, 1.1, 1.2]);
        assert_eq!(source.draws(), 3);
    }
}
