//! User settings for the routine data source.
//!
//! Settings are stored as TOML in the platform-specific config folder:
//! - macOS: ~/Library/Application Support/com.routine-finder.Routine-Finder/
//! - Windows: %APPDATA%/routine-finder/Routine Finder/config/
//! - Linux: ~/.config/routinefinder/

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "routine-finder";
const APP_NAME: &str = "Routine Finder";
const CONFIG_FILENAME: &str = "settings.toml";
const CACHE_FILENAME: &str = "rows.json";

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub source: SourceSettings,
    pub cache: CacheSettings,
}

/// Where the routine is published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// Spreadsheet export URL (JSON array or CSV). No URL means cache only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: 15,
        }
    }
}

impl SourceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// Where the last fetched routine is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Cache file; defaults to the platform cache folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl CacheSettings {
    /// Configured cache path, else the platform default.
    pub fn resolved_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => default_cache_path().ok_or(IngestError::NoAppDirs),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
}

/// Default settings file location.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Default cache file location.
pub fn default_cache_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join(CACHE_FILENAME))
}

/// Load settings from the default location.
///
/// Returns default settings if:
/// - The settings file doesn't exist
/// - The settings file cannot be read or parsed
/// - The platform-specific directory cannot be determined
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        tracing::warn!("Could not determine settings path, using defaults");
        return Settings::default();
    };

    match load_settings_from(&path) {
        Ok(settings) => settings,
        Err(IngestError::FileNotFound { .. }) => {
            tracing::info!("No settings file found at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            tracing::warn!("Failed to load settings: {}, using defaults", e);
            Settings::default()
        }
    }
}

/// Load settings from an explicit file. Missing or invalid files are errors.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
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
    let settings = toml::from_str(&content).map_err(|e| IngestError::Settings {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::info!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Save settings to `path`, creating the parent directory if needed.
pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| IngestError::FileWrite {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let content = to_toml(settings, path)?;
    fs::write(path, content).map_err(|e| IngestError::FileWrite {
        operation: "write",
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!("Saved settings to {:?}", path);
    Ok(())
}

/// Render settings as TOML; `path` is only used for error context.
pub fn to_toml(settings: &Settings, path: &Path) -> Result<String> {
    toml::to_string_pretty(settings).map_err(|e| IngestError::Settings {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_settings_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config").join(CONFIG_FILENAME);
        let settings = Settings {
            source: SourceSettings {
                url: Some("https://example.org/routine.csv".to_string()),
                timeout_secs: 5,
            },
            cache: CacheSettings {
                path: Some(dir.path().join("rows.json")),
            },
        };

        save_settings_to(&settings, &path).unwrap();
        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "[source]\nurl = \"https://example.org/x.json\"\n").unwrap();

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded.source.url.as_deref(), Some("https://example.org/x.json"));
        assert_eq!(loaded.source.timeout_secs, 15);
        assert_eq!(loaded.cache.path, None);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "[source]\ntimeout_secs = \"soon\"\n").unwrap();

        let err = load_settings_from(&path).unwrap_err();
        assert!(matches!(err, IngestError::Settings { .. }));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = load_settings_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let source = SourceSettings {
            url: None,
            timeout_secs: 0,
        };
        assert_eq!(source.timeout(), Duration::from_secs(1));
    }
}
