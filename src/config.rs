//! App settings from `hebtag.toml` (or the file named by `HEBTAG_CONFIG`).
//!
//! Settings never stop the app from starting: a missing file means defaults,
//! a broken file is logged and also means defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::core::batch::LoadOptions;

pub const CONFIG_ENV: &str = "HEBTAG_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "hebtag.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Prefilled folder in the path input.
    pub scan_root: Option<PathBuf>,
    pub hebrew_only: bool,
    pub include_untagged: bool,
    pub history_limit: usize,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan_root: None,
            hebrew_only: true,
            include_untagged: false,
            history_limit: 100,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            hebrew_only: self.hebrew_only,
            include_untagged: self.include_untagged,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Where settings are looked up: `$HEBTAG_CONFIG`, else `./hebtag.toml`.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// `Ok(None)` when the file does not exist.
pub fn load_from_file(path: &Path) -> Result<Option<Settings>, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str::<Settings>(&contents)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Load settings, falling back to defaults on any problem.
///
/// Runs before the logger exists (the filter comes from here), so problems are
/// returned alongside the settings and logged by the caller.
pub fn load() -> (Settings, Option<ConfigError>) {
    let path = config_path();
    match load_from_file(&path) {
        Ok(Some(settings)) => (settings, None),
        Ok(None) => (Settings::default(), None),
        Err(e) => (Settings::default(), Some(e)),
    }
}

/// Log the outcome of `load` once logging is up.
pub fn report(settings: &Settings, problem: Option<&ConfigError>) {
    match problem {
        Some(e) => warn!("{e}; using default settings"),
        None => info!(
            "settings: hebrew_only={}, include_untagged={}, history_limit={}",
            settings.hebrew_only,
            settings.include_untagged,
            settings.history_limit
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loaded = load_from_file(&dir.path().join("hebtag.toml")).expect("load");
        assert!(loaded.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("hebtag.toml");
        fs::write(&path, "history_limit = 5\n").expect("write");

        let s = load_from_file(&path).expect("load").expect("some");
        assert_eq!(s.history_limit, 5);
        assert!(s.hebrew_only);
        assert!(!s.include_untagged);
        assert_eq!(s.log_filter, "info");
        assert_eq!(s.scan_root, None);
    }

    #[test]
    fn full_file_parses() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("hebtag.toml");
        fs::write(
            &path,
            r#"
scan_root = "/music"
hebrew_only = false
include_untagged = true
history_limit = 10
log_filter = "debug"
"#,
        )
        .expect("write");

        let s = load_from_file(&path).expect("load").expect("some");
        assert_eq!(s.scan_root, Some(PathBuf::from("/music")));
        assert_eq!(
            s.load_options(),
            LoadOptions {
                hebrew_only: false,
                include_untagged: true
            }
        );
        assert_eq!(s.log_filter, "debug");
    }

    #[test]
    fn invalid_file_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("hebtag.toml");
        fs::write(&path, "history_limit = \"lots\"\n").expect("write");

        let err = load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("hebtag.toml");
        fs::write(&path, "colour = \"blue\"\n").expect("write");

        assert!(load_from_file(&path).is_err());
    }

    #[test]
    fn tag_version_is_not_configurable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("hebtag.toml");
        fs::write(&path, "id3_version = \"v2.3\"\n").expect("write");

        let err = load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
