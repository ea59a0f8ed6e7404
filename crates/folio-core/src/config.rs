//! Folio configuration.
//!
//! Configuration is a small TOML document:
//!
//! ```toml
//! [acl]
//! editor_roles = ["admin", "editor"]
//!
//! [dataset]
//! path = "/srv/folio/dataset.toml"
//!
//! [logging]
//! level = "info"
//! ```
//!
//! [`FolioConfig::load`] resolves the file from an explicit path, then the
//! `FOLIO_CONFIG` environment variable, then `<config_dir>/folio/config.toml`.
//! Every section is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "FOLIO_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Authorization settings.
    pub acl: AclConfig,
    /// Dataset source.
    pub dataset: DatasetConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Authorization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AclConfig {
    /// Roles allowed to call the edit mutation (any one suffices).
    pub editor_roles: Vec<String>,
}

impl Default for AclConfig {
    fn default() -> Self {
        Self {
            editor_roles: vec!["admin".to_string(), "editor".to_string()],
        }
    }
}

/// Dataset source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// TOML dataset file; the built-in demo dataset is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl FolioConfig {
    /// Load configuration, falling back to defaults when no file is found.
    ///
    /// An explicitly named file (argument or environment variable) must
    /// exist; the per-user default location is optional.
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::from_file(path);
        }
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read and parse a config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        log::debug!("Loaded config from {}", path.display());
        Self::parse(&content).map_err(|e| match e {
            Error::Config { message } => Error::config(format!("{message} in {}", path.display())),
            other => other,
        })
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml_src: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(toml_src).map_err(|e| Error::config(format!("Invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// `<config_dir>/folio/config.toml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    fn validate(&self) -> Result<()> {
        if self.acl.editor_roles.iter().any(|r| r.trim().is_empty()) {
            return Err(Error::config("acl.editor_roles must not contain empty role names"));
        }
        Ok(())
    }
}
