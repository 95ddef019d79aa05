//! Routine data sources.
//!
//! Rows come from a published spreadsheet export (JSON or CSV), fetched over
//! HTTP and cached locally so lookups keep working offline.

mod cache;
mod decode;
mod error;
mod loader;
mod remote;
mod settings;

// === Errors ===
pub use error::{IngestError, Result};

// === Decoding ===
pub use decode::{SourceFormat, decode_rows, read_rows};

// === Sources ===
pub use cache::RowCache;
pub use loader::{DataOrigin, LoadedRows, SourcePlan, load_rows, refresh};
pub use remote::RemoteSource;

// === Settings ===
pub use settings::{
    CacheSettings, Settings, SourceSettings, default_cache_path, load_settings,
    load_settings_from, save_settings_to, settings_path, to_toml,
};
