//! Variable type.
//!
//! A single configuration entry attached to a deployment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::VariableKey;

/// One environment variable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    key: VariableKey,
    value: String,
    #[serde(default)]
    secret: bool,
    /// Stamped by the backend on persist; never set by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl Variable {
    /// Create a record that has not been persisted yet.
    pub fn new(key: impl Into<VariableKey>, value: impl Into<String>, secret: bool) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            secret,
            updated_at: None,
        }
    }

    /// Attach the backend's write timestamp.
    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Variable name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Plain value. The secret flag does not redact it.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Visibility flag.
    pub fn is_secret(&self) -> bool {
        self.secret
    }

    /// Last write time assigned by the backend, if known.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Whether key and value and flag match, ignoring timestamps.
    pub fn same_content(&self, other: &Variable) -> bool {
        self.key == other.key && self.value == other.value && self.secret == other.secret
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}
