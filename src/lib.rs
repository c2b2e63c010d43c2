pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::ServeConfig;

pub use config::{toml_config::TomlConfig, AppConfig};
pub use crate::core::{loader::CsvRecordSource, store::RecordStore};
pub use domain::model::Record;
pub use domain::ports::{RecordLookup, RecordSource};
pub use server::{create_router, AppState};
pub use utils::error::{Result, VerifyError};
