//! State file management.
//!
//! Handles reading, writing, and validating the `.depvar.toml` file that the
//! filesystem backend keeps deployments in.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::domain::Deployment;
use crate::error::{ConfigError, Result};

/// Contents of `.depvar.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Metadata about the state file
    pub depvar: Meta,
    /// Deployments in creation order
    #[serde(default)]
    pub deployments: Vec<Deployment>,
}

/// Metadata section of the state file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Version of depvar that last wrote the file
    pub version: String,
}

impl Config {
    /// Create an empty state with the current version
    pub fn new() -> Self {
        Self {
            depvar: Meta {
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            deployments: Vec::new(),
        }
    }

    /// Load state from `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading state");

        if !path.exists() {
            return Err(ConfigError::NotInitialized {
                path: path.display().to_string(),
            }
            .into());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(deployments = config.deployments.len(), "state loaded");

        config.validate()?;
        Ok(config)
    }

    /// Load state from `path`, or start empty if the file doesn't exist yet
    pub fn load_or_new(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }

    /// Save state to `path`
    ///
    /// Writes a sibling temp file and renames it into place, so a failed
    /// save leaves the previous contents intact.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving state");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        let tmp = temp_path(path);
        let written = std::fs::write(&tmp, contents).and_then(|()| std::fs::rename(&tmp, path));
        if let Err(e) = written {
            let _ = std::fs::remove_file(&tmp);
            return Err(e.into());
        }

        Ok(())
    }

    /// Find a deployment by id
    pub fn deployment(&self, id: &str) -> Option<&Deployment> {
        self.deployments.iter().find(|d| d.id == id)
    }

    /// Validate the state structure and contents
    ///
    /// Checks:
    /// - Version field is present
    /// - Deployment ids are non-empty and unique
    /// - Stored variables have non-empty keys and values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` or `ConfigError::MissingField` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.depvar.version.is_empty() {
            return Err(ConfigError::MissingField { field: "version" }.into());
        }

        let mut seen = std::collections::HashSet::new();
        for deployment in &self.deployments {
            if deployment.id.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "deployments",
                    reason: format!("deployment '{}' has an empty id", deployment.label),
                }
                .into());
            }
            if !seen.insert(deployment.id.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "deployments",
                    reason: format!("duplicate deployment id '{}'", deployment.id),
                }
                .into());
            }
            for var in &deployment.variables {
                if var.key().is_empty() || var.value().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        field: "variables",
                        reason: format!(
                            "deployment '{}' has a variable with an empty key or value",
                            deployment.id
                        ),
                    }
                    .into());
                }
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| constants::STATE_FILE.into());
    name.push(".tmp");
    path.with_file_name(name)
}
