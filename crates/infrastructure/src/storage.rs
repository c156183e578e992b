//! Storage module - CSV file holding one row per athlete
//!
//! Every save rewrites the whole file: rows go to a temporary file in the
//! same directory, which is then renamed over the data file, so a failed
//! write never leaves a truncated file behind.
//!
//! Loading is tolerant. A missing file is an empty store, and a row that
//! cannot be parsed or fails validation is skipped with a [`LoadWarning`].
//! A header line that cannot be read fails the whole load.

use crate::row::{CsvRow, CsvRowRef, HEADER};
use crate::{Error, Result};
use athlete_perf_application::{ApplicationResult, AthleteStorePort, LoadOutcome};
use athlete_perf_common::StorageConfig;
use athlete_perf_domain::{AthleteRecord, LoadWarning};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, instrument, warn};

/// CSV-backed athlete store
#[derive(Debug, Clone)]
pub struct CsvAthleteStore {
    path: PathBuf,
}

impl CsvAthleteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.data_file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every row of the data file
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<LoadOutcome> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Data file does not exist yet, starting empty");
                return Ok(LoadOutcome::default());
            }
            Err(e) => return Err(Error::io(&self.path, e)),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(io::BufReader::new(file));
        let headers = reader.headers()?.clone();
        let name_column = headers.iter().position(|h| h == "Name");

        let mut outcome = LoadOutcome::default();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (index, result) in reader.records().enumerate() {
            let row = index + 1;

            let raw = match result {
                Ok(raw) => raw,
                Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
                Err(e) => {
                    outcome.warnings.push(LoadWarning::new(row, None, e.to_string()));
                    continue;
                }
            };

            let name = name_column.and_then(|i| raw.get(i)).map(str::to_string);

            let record = raw
                .deserialize::<CsvRow>(Some(&headers))
                .map_err(|e| e.to_string())
                .and_then(|parsed| parsed.into_record().map_err(|e| e.to_string()));

            match record {
                Ok(record) => {
                    let key = record.name().to_string();
                    if let Some(previous) = seen.insert(key, row) {
                        outcome.warnings.push(LoadWarning::new(
                            row,
                            name,
                            format!("duplicate name, replaces row {}", previous),
                        ));
                    }
                    outcome.records.push(record);
                }
                Err(reason) => outcome.warnings.push(LoadWarning::new(row, name, reason)),
            }
        }

        debug!(
            records = outcome.records.len(),
            warnings = outcome.warnings.len(),
            "Data file read"
        );

        Ok(outcome)
    }

    /// Atomically replace the data file with `records`
    #[instrument(skip(self, records), fields(path = %self.path.display(), records = records.len()))]
    pub fn write(&self, records: &[&AthleteRecord]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;

        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut tmp);
            writer.write_record(HEADER)?;
            for record in records {
                writer.serialize(CsvRowRef::from(*record))?;
            }
            writer.flush().map_err(|e| Error::io(&self.path, e))?;
        }

        tmp.as_file()
            .sync_all()
            .map_err(|e| Error::io(tmp.path(), e))?;

        tmp.persist(&self.path).map_err(|source| Error::Persist {
            path: self.path.clone(),
            source,
        })?;

        debug!("Data file written");
        Ok(())
    }
}

impl AthleteStorePort for CsvAthleteStore {
    fn load(&self) -> ApplicationResult<LoadOutcome> {
        Ok(self.read()?)
    }

    fn save(&self, records: &[&AthleteRecord]) -> ApplicationResult<()> {
        self.write(records).map_err(|e| {
            warn!(error = %e, "Failed to save athletes");
            e.into()
        })
    }
}
