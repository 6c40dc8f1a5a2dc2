//! Settings file handling.
//!
//! Settings live in `settings.toml` in the platform config directory:
//! - macOS: ~/Library/Application Support/com.cerkas.cerkas/
//! - Windows: %APPDATA%/cerkas/cerkas/config/
//! - Linux: ~/.config/cerkas/

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use cerkas_client::ClientSettings;
use cerkas_render::ColumnPolicy;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "cerkas";
const APP_NAME: &str = "cerkas";
const CONFIG_FILENAME: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Everything the CLI can configure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend location and data request parameters.
    pub client: ClientSettings,

    /// Metadata column set.
    pub columns: ColumnPolicy,
}

impl Settings {
    /// Load from `path` when given, otherwise from the default location.
    ///
    /// An explicit path must exist and parse. The default location falls back
    /// to defaults when the file is missing or unreadable.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Load from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn load_default() -> Self {
        let Some(path) = settings_path() else {
            tracing::warn!("Could not determine settings path, using defaults");
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(SettingsError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No settings file found at {:?}, using defaults", path);
                Self::default()
            }
            Err(e) => {
                tracing::warn!("{e}, using defaults");
                Self::default()
            }
        }
    }
}

/// Path of the default settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_round_trip() {
        let settings = Settings::default();
        let text = settings.to_toml().unwrap();
        assert_eq!(Settings::parse(&text).unwrap(), settings);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let settings = Settings::parse(
            r#"
            [client]
            base_url = "http://cerkas.internal:9000"

            [columns]
            metadata = ["serial"]
            "#,
        )
        .unwrap();
        assert_eq!(settings.client.base_url, "http://cerkas.internal:9000");
        assert_eq!(settings.client.page_size, 20);
        assert!(settings.columns.is_metadata("serial"));
        assert!(!settings.columns.is_metadata("id"));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = Settings::load(Some(Path::new("/nonexistent/cerkas/settings.toml"))).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }
}
