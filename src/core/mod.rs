pub mod loader;
pub mod store;

pub use crate::domain::model::Record;
pub use crate::domain::ports::{RecordLookup, RecordSource};
pub use crate::utils::error::Result;
