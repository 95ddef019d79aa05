//! Error types for routine data sources.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, fetching or caching routine rows.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to {operation} {path}: {source}")]
    FileWrite {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Decoding Errors ===
    /// Malformed CSV input.
    #[error("failed to parse CSV: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// Malformed JSON input.
    #[error("failed to parse JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// JSON parsed but is not an array of row objects.
    #[error("unexpected payload: {reason}")]
    UnexpectedPayload { reason: String },

    /// CSV header row names none of the routine columns.
    #[error("no routine columns found in header: {headers:?}")]
    NoKnownColumns { headers: Vec<String> },

    // === Network Errors ===
    /// Request could not be sent or the body could not be read.
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// Server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// No source URL configured.
    #[error("no source URL configured")]
    NoSourceUrl,

    // === Settings Errors ===
    /// Settings file is not valid TOML for the settings schema.
    #[error("invalid settings file {path}: {message}")]
    Settings { path: PathBuf, message: String },

    /// Platform config/cache directories could not be determined.
    #[error("could not determine application directories")]
    NoAppDirs,
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
