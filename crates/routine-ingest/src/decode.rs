//! Decoding spreadsheet exports into routine rows.
//!
//! Two payload shapes are accepted:
//!
//! - **JSON**: an array of objects keyed by column header, as produced by
//!   sheet-to-JSON endpoints
//! - **CSV**: a plain export with one header row
//!
//! Headers are matched to [`Field`]s by key or label, ignoring case and
//! extra whitespace. Unrecognized columns are dropped.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use routine_model::{Field, Row};

use crate::error::{IngestError, Result};

/// Payload encoding of a routine export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Csv,
}

impl SourceFormat {
    /// Guess the format from the first non-whitespace byte.
    pub fn sniff(bytes: &[u8]) -> Self {
        let first = bytes
            .iter()
            .copied()
            .find(|b| !(b.is_ascii_whitespace() || matches!(b, 0xEF | 0xBB | 0xBF)));
        match first {
            Some(b'[' | b'{') => SourceFormat::Json,
            _ => SourceFormat::Csv,
        }
    }

    /// Format implied by a file extension, if recognized.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(SourceFormat::Json),
            "csv" | "txt" => Some(SourceFormat::Csv),
            _ => None,
        }
    }

    /// Format implied by an HTTP `Content-Type`, if recognized.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let mime = content_type.split(';').next()?.trim().to_ascii_lowercase();
        if mime.ends_with("json") {
            Some(SourceFormat::Json)
        } else if mime.ends_with("csv") {
            Some(SourceFormat::Csv)
        } else {
            None
        }
    }
}

/// Decode `bytes` as the given format.
pub fn decode_rows(bytes: &[u8], format: SourceFormat) -> Result<Vec<Row>> {
    let rows = match format {
        SourceFormat::Json => decode_json_rows(bytes)?,
        SourceFormat::Csv => decode_csv_rows(bytes)?,
    };
    debug!(?format, rows = rows.len(), "decoded routine rows");
    Ok(rows)
}

/// Read a local export, picking the format from the extension or content.
pub fn read_rows(path: &Path) -> Result<Vec<Row>> {
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let format = SourceFormat::from_path(path).unwrap_or_else(|| SourceFormat::sniff(&bytes));
    decode_rows(&bytes, format)
}

/// Text form of a JSON cell. Scalars are stringified; anything else is empty.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn decode_json_rows(bytes: &[u8]) -> Result<Vec<Row>> {
    let payload: Value = serde_json::from_slice(bytes)?;
    let Value::Array(items) = payload else {
        return Err(IngestError::UnexpectedPayload {
            reason: "expected a JSON array of rows".to_string(),
        });
    };

    let mut rows = Vec::with_capacity(items.len());
    let mut skipped = 0usize;
    for item in items {
        let Value::Object(object) = item else {
            skipped += 1;
            continue;
        };
        let mut row = Row::default();
        for (key, value) in &object {
            if let Ok(field) = key.parse::<Field>() {
                row.set(field, cell_text(value));
            }
        }
        rows.push(row);
    }
    if skipped > 0 {
        warn!(skipped, "ignored non-object entries in JSON payload");
    }
    Ok(rows)
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn decode_csv_rows(bytes: &[u8]) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut columns: Option<Vec<Option<Field>>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        if columns.is_none() {
            let headers: Vec<String> = record.iter().map(normalize_cell).collect();
            let mapping: Vec<Option<Field>> =
                headers.iter().map(|header| header.parse().ok()).collect();
            if mapping.iter().all(Option::is_none) {
                return Err(IngestError::NoKnownColumns { headers });
            }
            columns = Some(mapping);
            continue;
        }
        let Some(mapping) = columns.as_ref() else {
            continue;
        };
        let mut row = Row::default();
        for (field, value) in mapping.iter().zip(record.iter()) {
            if let Some(field) = field {
                row.set(*field, normalize_cell(value));
            }
        }
        rows.push(row);
    }
    Ok(rows)
}
