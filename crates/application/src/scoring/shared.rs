//! Thread-safe wrapper around [`ScoringEngine`].

use super::ScoringEngine;
use crate::difficulty::DifficultySource;
use crate::ports::AthleteStorePort;
use crate::registry::Registry;
use crate::report::{GeneralReport, IndividualReport};
use crate::validation::RegistrationRequest;
use crate::ApplicationResult;
use athlete_perf_domain::ScoreOutcome;
use parking_lot::Mutex;

/// Serializes registrations (including the store rewrite) behind one lock.
///
/// Reports taken through this wrapper see either the state before or after
/// a registration, never a half-applied one.
pub struct SharedScoringEngine<S, D> {
    inner: Mutex<ScoringEngine<S, D>>,
}

impl<S, D> SharedScoringEngine<S, D>
where
    S: AthleteStorePort,
    D: DifficultySource,
{
    pub fn new(engine: ScoringEngine<S, D>) -> Self {
        Self {
            inner: Mutex::new(engine),
        }
    }

    pub fn register(
        &self,
        name: &str,
        resistance: f64,
        strength: f64,
        velocity: f64,
    ) -> ApplicationResult<ScoreOutcome> {
        self.inner.lock().register(name, resistance, strength, velocity)
    }

    pub fn register_request(&self, request: RegistrationRequest) -> ApplicationResult<ScoreOutcome> {
        self.inner.lock().register_request(request)
    }

    pub fn general_report(&self) -> Option<GeneralReport> {
        self.inner.lock().general_report()
    }

    pub fn individual_report(&self, name: &str) -> ApplicationResult<Option<IndividualReport>> {
        self.inner.lock().individual_report(name)
    }

    /// Run `f` against the registry while holding the lock
    pub fn with_registry<T>(&self, f: impl FnOnce(&Registry) -> T) -> T {
        f(self.inner.lock().registry())
    }

    pub fn into_inner(self) -> ScoringEngine<S, D> {
        self.inner.into_inner()
    }
}
