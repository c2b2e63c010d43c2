use crate::domain::model::Record;
use crate::domain::ports::RecordSource;
use crate::utils::error::{Result, VerifyError};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

pub const NAME_COLUMN: &str = "Name";
pub const YOB_COLUMN: &str = "YOB";

/// CSV file with a header row holding at least `Name` and `YOB`.
#[derive(Debug, Clone)]
pub struct CsvRecordSource {
    path: PathBuf,
}

impl CsvRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for CsvRecordSource {
    fn load(&self) -> Result<Option<Vec<Record>>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(VerifyError::IoError(e)),
        };

        read_records(file).map(Some)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parses CSV content into records, locating columns by header name.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let column_index = |column: &str| {
        headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}') == column)
            .ok_or_else(|| VerifyError::MissingColumn {
                column: column.to_string(),
            })
    };
    let name_idx = column_index(NAME_COLUMN)?;
    let yob_idx = column_index(YOB_COLUMN)?;

    let mut records = Vec::new();
    for (line, row) in csv_reader.records().enumerate() {
        let row = row?;
        let name = row.get(name_idx).unwrap_or_default();
        let yob = normalize_year_of_birth(row.get(yob_idx).unwrap_or_default());

        if name.is_empty() || yob.is_empty() {
            // line + 2: one for the header, one for 1-based numbering
            tracing::warn!(
                "Skipping row {}: '{}' and '{}' are both required",
                line + 2,
                NAME_COLUMN,
                YOB_COLUMN
            );
            continue;
        }

        records.push(Record::new(name, yob));
    }

    Ok(records)
}

/// Integer years are rendered canonically (`"01990"` becomes `"1990"`); anything
/// else is kept as trimmed text.
pub fn normalize_year_of_birth(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(year) => year.to_string(),
        Err(_) => trimmed.to_string(),
    }
}
