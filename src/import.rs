//! Read-only loading of contacts files.
//!
//! JSON files hold an array of records. CSV files carry a header row with
//! `id,first_name,middle_name,last_name,phone_number,tag,selected`. Every
//! column is optional; a row without an id is loaded with id 0 and the
//! store assigns it one.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PhonebookError, Result};
use crate::models::ContactRecord;

/// A row from a CSV contacts file.
///
/// Missing columns and empty cells become empty text. An empty `id` is
/// stored as 0 so the store assigns a fresh one.
#[derive(Debug, Clone, Deserialize)]
struct CsvRow {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    middle_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    phone_number: String,
    #[serde(default)]
    tag: String,
    #[serde(default)]
    selected: Option<bool>,
}

impl From<CsvRow> for ContactRecord {
    fn from(row: CsvRow) -> Self {
        ContactRecord {
            id: row.id.unwrap_or(0),
            first_name: row.first_name,
            middle_name: row.middle_name,
            last_name: row.last_name,
            phone_number: row.phone_number,
            tag: row.tag,
            selected: row.selected,
        }
    }
}

/// Load records from a `.json` or `.csv` file, chosen by extension.
pub fn load_records(path: &Path) -> Result<Vec<ContactRecord>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let records = match ext.as_str() {
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        _ => return Err(PhonebookError::UnsupportedFormat(path.display().to_string())),
    };

    tracing::debug!(path = %path.display(), count = records.len(), "loaded contacts");
    Ok(records)
}

fn load_json(path: &Path) -> Result<Vec<ContactRecord>> {
    let reader = File::open(path)?;
    Ok(serde_json::from_reader(std::io::BufReader::new(reader))?)
}

fn load_csv(path: &Path) -> Result<Vec<ContactRecord>> {
    let reader = File::open(path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, result) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let line = idx + 2; // 1-indexed, after the header
        let row = result.map_err(|e| PhonebookError::Csv {
            line,
            message: e.to_string(),
        })?;
        records.push(row.into());
    }
    Ok(records)
}
