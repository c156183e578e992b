//! Scoring Engine - Registration and persistence of athlete records
//!
//! The engine owns the registry. Each registration validates the input, draws
//! difficulty multipliers, derives the final score, upserts the record and
//! rewrites the store. If the store rejects the write the registry is put
//! back exactly as it was.

use crate::difficulty::DifficultySource;
use crate::ports::AthleteStorePort;
use crate::registry::Registry;
use crate::report::{Aggregator, GeneralReport, IndividualReport};
use crate::validation::{RegistrationRequest, Validatable};
use crate::{ApplicationError, ApplicationResult};
use athlete_perf_domain::{
    composite_score, AthleteRecord, Difficulties, LoadWarning, ScoreOutcome, Scores,
};
use tracing::{debug, info, instrument, warn};

/// The main scoring engine
pub struct ScoringEngine<S, D> {
    registry: Registry,
    store: S,
    difficulty_source: D,
    load_warnings: Vec<LoadWarning>,
}

impl<S, D> ScoringEngine<S, D>
where
    S: AthleteStorePort,
    D: DifficultySource,
{
    /// Create an engine with an empty registry, without reading the store
    pub fn new(store: S, difficulty_source: D) -> Self {
        Self {
            registry: Registry::new(),
            store,
            difficulty_source,
            load_warnings: Vec::new(),
        }
    }

    /// Create an engine whose registry is read from the store.
    ///
    /// Skipped rows are logged and kept available through
    /// [`load_warnings`](Self::load_warnings).
    #[instrument(skip_all)]
    pub fn load(store: S, difficulty_source: D) -> ApplicationResult<Self> {
        let outcome = store.load()?;

        for warning in &outcome.warnings {
            warn!(
                row = warning.row,
                name = warning.name.as_deref().unwrap_or(""),
                reason = %warning.reason,
                "Skipping stored athlete row"
            );
        }

        let registry = Registry::from_records(outcome.records);
        info!(
            athletes = registry.len(),
            skipped = outcome.warnings.len(),
            "Registry loaded"
        );

        Ok(Self {
            registry,
            store,
            difficulty_source,
            load_warnings: outcome.warnings,
        })
    }

    /// Pure scoring, with no side effects
    pub fn score(scores: &Scores, difficulties: &Difficulties) -> ScoreOutcome {
        composite_score(scores, difficulties)
    }

    /// Register (or re-register) an athlete
    pub fn register(
        &mut self,
        name: &str,
        resistance: f64,
        strength: f64,
        velocity: f64,
    ) -> ApplicationResult<ScoreOutcome> {
        self.register_request(RegistrationRequest::new(name, resistance, strength, velocity))
    }

    /// Register from a request value.
    ///
    /// All-or-nothing: on any error the registry is unchanged.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub fn register_request(&mut self, request: RegistrationRequest) -> ApplicationResult<ScoreOutcome> {
        request.validate_all().ensure_valid()?;
        let (name, scores) = request.into_parts()?;

        let drawn = self.difficulty_source.draw();
        let difficulties = Difficulties::from_triple(drawn).map_err(|e| {
            ApplicationError::InvalidInput(format!("Difficulty source produced an invalid value: {}", e))
        })?;

        let record = AthleteRecord::new(name.clone(), scores, difficulties);
        let outcome = ScoreOutcome {
            final_score: record.final_score(),
            qualified: record.qualified(),
        };
        debug!(
            difficulties = ?difficulties.as_triple().to_array(),
            final_score = outcome.final_score,
            "Athlete scored"
        );

        let prior = self.registry.upsert(record);
        let overwritten = prior.is_some();

        if let Err(err) = self.persist() {
            self.registry.revert(&name, prior);
            warn!(error = %err, "Persisting registry failed, registration rolled back");
            return Err(err);
        }

        info!(
            final_score = outcome.final_score,
            qualified = outcome.qualified,
            overwritten,
            "Athlete registered"
        );

        Ok(outcome)
    }

    fn persist(&self) -> ApplicationResult<()> {
        let records: Vec<&AthleteRecord> = self.registry.records().collect();
        self.store.save(&records)
    }
}

impl<S, D> ScoringEngine<S, D> {
    /// Read-only view of the registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Rows skipped by [`load`](ScoringEngine::load)
    pub fn load_warnings(&self) -> &[LoadWarning] {
        &self.load_warnings
    }

    /// Aggregator borrowing the current registry
    pub fn aggregator(&self) -> Aggregator<'_> {
        Aggregator::new(&self.registry)
    }

    pub fn general_report(&self) -> Option<GeneralReport> {
        self.aggregator().general_report()
    }

    pub fn individual_report(&self, name: &str) -> ApplicationResult<Option<IndividualReport>> {
        self.aggregator().individual_report(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::FixedDifficultySource;
    use crate::ports::LoadOutcome;
    use athlete_perf_domain::{AthleteName, TestTriple, QUALIFICATION_THRESHOLD};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    /// Minimal in-memory store with a failure switch
    #[derive(Default)]
    struct MemoryStore {
        saved: Mutex<Vec<AthleteRecord>>,
        fail: AtomicBool,
    }

    impl AthleteStorePort for MemoryStore {
        fn load(&self) -> ApplicationResult<LoadOutcome> {
            Ok(LoadOutcome::new(self.saved.lock().unwrap().clone(), Vec::new()))
        }

        fn save(&self, records: &[&AthleteRecord]) -> ApplicationResult<()> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(ApplicationError::Persistence("disk full".to_string()));
            }
            *self.saved.lock().unwrap() = records.iter().map(|r| (*r).clone()).collect();
            Ok(())
        }
    }

    fn engine() -> ScoringEngine<MemoryStore, FixedDifficultySource> {
        ScoringEngine::new(MemoryStore::default(), FixedDifficultySource::neutral())
    }

    #[test]
    fn test_register_alice() {
        let mut engine = engine();
        let outcome = engine.register("Alice", 80.0, 90.0, 70.0).unwrap();

        assert_eq!(outcome.final_score, 80);
        assert!(outcome.qualified);
        assert_eq!(engine.registry().len(), 1);
        assert_eq!(engine.store.saved.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_register_bob_with_difficulties() {
        let mut engine = ScoringEngine::new(MemoryStore::default(), FixedDifficultySource::new(1.2, 1.1, 1.3));
        let outcome = engine.register("Bob", 50.0, 50.0, 50.0).unwrap();

        assert_eq!(outcome.final_score, 50);
        assert!(!outcome.qualified);
        let bob = engine.registry().get("Bob").unwrap();
        assert_eq!(bob.difficulties().as_triple().to_array(), [1.2, 1.1, 1.3]);
    }

    #[test]
    fn test_out_of_range_scores_leave_registry_unchanged() {
        let mut engine = engine();
        engine.register("Alice", 80.0, 90.0, 70.0).unwrap();

        for (r, s, v) in [(-1.0, 50.0, 50.0), (50.0, 101.0, 50.0), (50.0, 50.0, f64::NAN)] {
            let err = engine.register("Zed", r, s, v).unwrap_err();
            assert!(matches!(err, ApplicationError::InvalidInput(_)), "{err:?}");
        }
        assert_eq!(engine.registry().len(), 1);
        assert!(!engine.registry().contains("Zed"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut engine = engine();
        assert!(matches!(
            engine.register("", 50.0, 50.0, 50.0),
            Err(ApplicationError::InvalidInput(_))
        ));
        assert!(matches!(
            engine.register("  \t", 50.0, 50.0, 50.0),
            Err(ApplicationError::InvalidInput(_))
        ));
        assert!(engine.registry().is_empty());
    }

    #[test]
    fn test_re_registration_overwrites() {
        let mut engine = engine();
        engine.register("Alice", 80.0, 90.0, 70.0).unwrap();
        engine.register("Bob", 50.0, 50.0, 50.0).unwrap();
        let outcome = engine.register("Alice", 10.0, 10.0, 10.0).unwrap();

        assert_eq!(outcome.final_score, 10);
        assert_eq!(engine.registry().len(), 2);
        let names: Vec<&str> = engine.registry().records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_persistence_failure_rolls_back_new_athlete() {
        let mut engine = engine();
        engine.register("Alice", 80.0, 90.0, 70.0).unwrap();
        engine.store.fail.store(true, Ordering::SeqCst);

        let err = engine.register("Bob", 50.0, 50.0, 50.0).unwrap_err();
        assert!(matches!(err, ApplicationError::Persistence(_)));
        assert_eq!(engine.registry().len(), 1);
        assert!(engine.registry().get("Bob").is_none());
    }

    #[test]
    fn test_persistence_failure_restores_overwritten_athlete() {
        let mut engine = engine();
        engine.register("Alice", 80.0, 90.0, 70.0).unwrap();
        engine.register("Bob", 50.0, 50.0, 50.0).unwrap();
        engine.store.fail.store(true, Ordering::SeqCst);

        assert!(engine.register("Alice", 10.0, 10.0, 10.0).is_err());
        let alice = engine.registry().get("Alice").unwrap();
        assert_eq!(alice.final_score(), 80);
        let names: Vec<&str> = engine.registry().records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_invalid_difficulty_source_rejected() {
        let mut engine = ScoringEngine::new(MemoryStore::default(), FixedDifficultySource::new(1.0, 2.0, 1.0));
        let err = engine.register("Alice", 80.0, 90.0, 70.0).unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidInput(_)));
        assert!(engine.registry().is_empty());
    }

    #[test]
    fn test_load_restores_registry() {
        let store = MemoryStore::default();
        let alice = AthleteRecord::new(
            AthleteName::parse("Alice").unwrap(),
            Scores::new(80.0, 90.0, 70.0).unwrap(),
            Difficulties::neutral(),
        );
        store.save(&[&alice]).unwrap();

        let engine = ScoringEngine::load(store, FixedDifficultySource::neutral()).unwrap();
        assert_eq!(engine.registry().get("Alice"), Some(&alice));
        assert!(engine.load_warnings().is_empty());
    }

    #[test]
    fn test_qualification_always_matches_threshold() {
        let mut engine = engine();
        for (i, score) in [0.0, 69.0, 69.5, 70.0, 70.4, 100.0].into_iter().enumerate() {
            engine.register(&format!("A{i}"), score, score, score).unwrap();
        }
        for record in engine.registry().records() {
            assert_eq!(record.qualified(), record.final_score() >= QUALIFICATION_THRESHOLD);
        }
    }

    #[test]
    fn test_score_is_pure() {
        let scores = Scores::from_triple(TestTriple::new(80.0, 90.0, 70.0)).unwrap();
        let outcome = ScoringEngine::<MemoryStore, FixedDifficultySource>::score(&scores, &Difficulties::neutral());
        assert_eq!(outcome.final_score, 80);
    }

    #[test]
    fn test_reports_through_engine() {
        let mut engine = engine();
        assert!(engine.general_report().is_none());

        engine.register("Alice", 80.0, 90.0, 70.0).unwrap();
        assert_eq!(engine.general_report().unwrap().stats.average_score, 80.0);
        assert_eq!(engine.individual_report("Alice").unwrap().unwrap().final_score, 80);
        assert!(engine.individual_report("NoSuchName").unwrap().is_none());
    }
}
