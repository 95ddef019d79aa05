//! Effective settings for one invocation.
//!
//! Precedence: command-line flag, then settings file, then built-in default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use routine_ingest::{IngestError, Settings, load_settings, load_settings_from, settings_path};

/// Per-invocation overrides taken from global flags.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub url: Option<String>,
    pub cache: Option<PathBuf>,
}

/// Settings file this invocation reads and writes.
pub fn config_path(overrides: &Overrides) -> Result<PathBuf> {
    overrides
        .config
        .clone()
        .or_else(settings_path)
        .ok_or_else(|| anyhow!("could not determine the settings location; pass --config"))
}

/// Settings after applying overrides.
///
/// An explicit `--config` file that is missing yields defaults; one that is
/// invalid is an error. The default location never fails.
pub fn effective_settings(overrides: &Overrides) -> Result<Settings> {
    let mut settings = match &overrides.config {
        Some(path) => load_explicit(path)?,
        None => load_settings(),
    };
    if let Some(url) = &overrides.url {
        settings.source.url = Some(url.clone());
    }
    if let Some(cache) = &overrides.cache {
        settings.cache.path = Some(cache.clone());
    }
    Ok(settings)
}

fn load_explicit(path: &Path) -> Result<Settings> {
    match load_settings_from(path) {
        Ok(settings) => Ok(settings),
        Err(IngestError::FileNotFound { .. }) => {
            tracing::info!("No settings file found at {:?}, using defaults", path);
            Ok(Settings::default())
        }
        Err(e) => Err(e).with_context(|| format!("load settings from {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn flags_override_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            "[source]\nurl = \"https://example.org/file.csv\"\ntimeout_secs = 4\n",
        )
        .unwrap();

        let overrides = Overrides {
            config: Some(path),
            url: Some("https://example.org/flag.json".to_string()),
            cache: Some(dir.path().join("rows.json")),
        };
        let settings = effective_settings(&overrides).unwrap();
        assert_eq!(
            settings.source.url.as_deref(),
            Some("https://example.org/flag.json")
        );
        assert_eq!(settings.source.timeout_secs, 4);
        assert_eq!(settings.cache.path, Some(dir.path().join("rows.json")));
    }

    #[test]
    fn missing_explicit_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let overrides = Overrides {
            config: Some(dir.path().join("absent.toml")),
            ..Overrides::default()
        };
        assert_eq!(effective_settings(&overrides).unwrap(), Settings::default());
    }

    #[test]
    fn invalid_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "source = 3\n").unwrap();
        let overrides = Overrides {
            config: Some(path),
            ..Overrides::default()
        };
        assert!(effective_settings(&overrides).is_err());
    }
}
