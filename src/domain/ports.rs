use crate::domain::model::Record;
use crate::utils::error::Result;

/// Somewhere records can be loaded from at start-up.
pub trait RecordSource: Send + Sync {
    /// Returns `Ok(None)` when the source does not exist.
    fn load(&self) -> Result<Option<Vec<Record>>>;

    fn describe(&self) -> String;
}

/// Read-only lookup shared by every request.
pub trait RecordLookup: Send + Sync {
    fn find(&self, name: &str, year_of_birth: &str) -> Result<bool>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
