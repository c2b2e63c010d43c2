use crate::domain::model::Record;
use crate::domain::ports::{RecordLookup, RecordSource};
use crate::utils::error::Result;

/// Immutable in-memory table of records, built once at start-up.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the store from `source`. A missing source gives an empty store
    /// and a warning; every other failure is returned.
    pub fn load(source: &dyn RecordSource) -> Result<Self> {
        match source.load()? {
            Some(records) => {
                tracing::info!("Loaded {} records from {}", records.len(), source.describe());
                Ok(Self::from_records(records))
            }
            None => {
                tracing::warn!(
                    "{} not found. Running with an empty database.",
                    source.describe()
                );
                Ok(Self::empty())
            }
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl RecordLookup for RecordStore {
    fn find(&self, name: &str, year_of_birth: &str) -> Result<bool> {
        let name_lower = name.to_lowercase();
        Ok(self
            .records
            .iter()
            .any(|record| record.matches(&name_lower, year_of_birth)))
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
