//! Choosing between the remote source and the local cache.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{info, warn};

use routine_model::Row;

use crate::cache::RowCache;
use crate::error::{IngestError, Result};
use crate::remote::RemoteSource;
use crate::settings::Settings;

/// Where the loaded rows came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    /// Freshly fetched from the remote source.
    Remote,
    /// Read from the local cache.
    Cache,
    /// Neither source was available.
    Empty,
}

impl DataOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataOrigin::Remote => "remote",
            DataOrigin::Cache => "cache",
            DataOrigin::Empty => "empty",
        }
    }
}

impl std::fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How to obtain the routine for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePlan {
    pub url: Option<String>,
    pub cache_path: PathBuf,
    pub timeout: Duration,
    /// Skip the network and use the cache only.
    pub offline: bool,
}

impl SourcePlan {
    /// Plan from settings; `cache_path` must already be resolved.
    pub fn from_settings(settings: &Settings, cache_path: PathBuf) -> Self {
        Self {
            url: settings.source.url.clone(),
            cache_path,
            timeout: settings.source.timeout(),
            offline: false,
        }
    }

    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    fn cache(&self) -> RowCache {
        RowCache::new(&self.cache_path)
    }
}

/// Rows plus their origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedRows {
    pub rows: Vec<Row>,
    pub origin: DataOrigin,
}

/// Load rows, preferring the remote source and falling back to the cache.
///
/// Never fails: every failure is logged and the next source is tried,
/// ending with an empty collection.
pub fn load_rows(plan: &SourcePlan) -> LoadedRows {
    let cache = plan.cache();

    match (&plan.url, plan.offline) {
        (Some(url), false) => match fetch(url, plan.timeout) {
            Ok(rows) => {
                if let Err(e) = cache.store(&rows) {
                    warn!(error = %e, "could not update cache");
                }
                return LoadedRows {
                    rows,
                    origin: DataOrigin::Remote,
                };
            }
            Err(e) => warn!(error = %e, "remote source unavailable, using cache"),
        },
        (Some(_), true) => info!("offline mode, using cache"),
        (None, _) => info!("no source URL configured, using cache"),
    }

    match cache.load() {
        Ok(Some(rows)) => LoadedRows {
            rows,
            origin: DataOrigin::Cache,
        },
        Ok(None) => {
            warn!(path = %cache.path().display(), "no cached routine available");
            LoadedRows {
                rows: Vec::new(),
                origin: DataOrigin::Empty,
            }
        }
        Err(e) => {
            warn!(error = %e, "cached routine is unreadable");
            LoadedRows {
                rows: Vec::new(),
                origin: DataOrigin::Empty,
            }
        }
    }
}

/// Fetch the remote source and rewrite the cache. Errors propagate.
pub fn refresh(plan: &SourcePlan) -> Result<Vec<Row>> {
    let url = plan.url.as_deref().ok_or(IngestError::NoSourceUrl)?;
    let rows = fetch(url, plan.timeout)?;
    plan.cache().store(&rows)?;
    Ok(rows)
}

fn fetch(url: &str, timeout: Duration) -> Result<Vec<Row>> {
    RemoteSource::new(url, timeout)?.fetch()
}
