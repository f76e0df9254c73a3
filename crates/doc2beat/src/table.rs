//! CSV input and output tables
//!
//! Input columns: `document_url` (required), `song_style` (optional).
//! Output columns: `document_url`, `song_style`, `song_lyrics`.

use crate::error::TableError;
use crate::types::{InputRecord, ResultRecord};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

const URL_COLUMN: &str = "document_url";
const OUTPUT_HEADER: [&str; 3] = [URL_COLUMN, "song_style", "song_lyrics"];

/// Input row as it appears in the file, before validation
#[derive(Debug, Deserialize)]
struct InputRow {
    #[serde(default)]
    document_url: Option<String>,
    #[serde(default)]
    song_style: Option<String>,
}

/// Read and validate input records
///
/// Blank style cells become `None`. A file without a `document_url` column
/// is rejected outright; a row without a URL is rejected with its 1-based
/// data row number (the header is not counted).
pub fn read_input_records(path: impl AsRef<Path>) -> Result<Vec<InputRecord>, TableError> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    if !reader.headers()?.iter().any(|h| h == URL_COLUMN) {
        return Err(TableError::MissingColumn { column: URL_COLUMN });
    }

    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<InputRow>().enumerate() {
        let row = row?;
        let document_url = non_blank(row.document_url).ok_or(TableError::MissingUrl { row: i + 1 })?;
        records.push(InputRecord {
            document_url,
            song_style: non_blank(row.song_style),
        });
    }

    debug!(path = %path.display(), rows = records.len(), "Read input records");
    Ok(records)
}

/// Write result records, header first
///
/// The header is written even when `records` is empty.
pub fn write_result_records(
    path: impl AsRef<Path>,
    records: &[ResultRecord],
) -> Result<(), TableError> {
    let path = path.as_ref();
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(OUTPUT_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(csv::Error::from)?;

    debug!(path = %path.display(), rows = records.len(), "Wrote result records");
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
