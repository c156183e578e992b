//! Persistence port.
//!
//! The engine never touches files directly; the infrastructure layer
//! implements [`AthleteStorePort`] for the on-disk format.

use crate::ApplicationResult;
use athlete_perf_domain::{AthleteRecord, LoadWarning};

/// Result of reading the store: valid records in storage order plus the rows
/// that were skipped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOutcome {
    pub records: Vec<AthleteRecord>,
    pub warnings: Vec<LoadWarning>,
}

impl LoadOutcome {
    pub fn new(records: Vec<AthleteRecord>, warnings: Vec<LoadWarning>) -> Self {
        Self { records, warnings }
    }
}

/// Athlete store trait
pub trait AthleteStorePort: Send + Sync {
    /// Read every stored record.
    ///
    /// A missing store yields an empty outcome. Rows that cannot be turned
    /// into records are reported as warnings; only failures to read the
    /// store at all are errors.
    fn load(&self) -> ApplicationResult<LoadOutcome>;

    /// Replace the stored contents with `records`, in order
    fn save(&self, records: &[&AthleteRecord]) -> ApplicationResult<()>;
}

impl<S: AthleteStorePort + ?Sized> AthleteStorePort for std::sync::Arc<S> {
    fn load(&self) -> ApplicationResult<LoadOutcome> {
        (**self).load()
    }

    fn save(&self, records: &[&AthleteRecord]) -> ApplicationResult<()> {
        (**self).save(records)
    }
}
