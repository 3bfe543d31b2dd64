//! Error types.
//!
//! Fatal errors abort the invocation. Per-candidate problems are not errors;
//! they are reported as [`Rejection`](crate::core::domain::Rejection)s and the
//! pass continues.

use thiserror::Error;

/// Top-level error for all depvar operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Deployment(#[from] DeploymentError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Problems with the `.depvar.toml` state file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not initialized: {path} does not exist")]
    NotInitialized { path: String },

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse state file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize state file: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("missing field in state file: {field}")]
    MissingField { field: &'static str },

    #[error("invalid {field} in state file: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// The target deployment could not be identified.
#[derive(Error, Debug)]
pub enum DeploymentError {
    #[error("deployment not found: {id}")]
    NotFound { id: String, available: Vec<String> },

    #[error("no deployments exist")]
    NoDeployments,

    #[error("multiple deployments exist, select one with --deployment:\n{choices}")]
    SelectionRequired { choices: String },
}

impl DeploymentError {
    /// Build a `NotFound` error, remembering which ids were available.
    pub fn not_found(id: impl Into<String>, available: &[String]) -> Self {
        Self::NotFound {
            id: id.into(),
            available: available.to_vec(),
        }
    }

    /// Suggestion shown under the error message, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::NotFound { available, .. } if !available.is_empty() => {
                Some(format!("available: {}", available.join(", ")))
            }
            Self::NotFound { .. } | Self::NoDeployments => {
                Some("run: depvar deployment create <LABEL>".to_string())
            }
            Self::SelectionRequired { .. } => None,
        }
    }
}

/// Failures talking to the backend that stores deployment state.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to persist variables for {deployment}: {reason}")]
    Persist { deployment: String, reason: String },
}

/// Invalid user input that is fatal rather than a per-candidate rejection.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("deployment label cannot be empty")]
    EmptyLabel,
}

pub type Result<T> = std::result::Result<T, Error>;
