//! Deployment type.
//!
//! The remote resource that variables are attached to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::VariableSet;
use crate::core::types::DeploymentId;

/// A deployment and its stored variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub id: DeploymentId,
    pub label: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub variables: VariableSet,
}

impl Deployment {
    /// New deployment with no variables.
    pub fn new(id: impl Into<DeploymentId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            created_at: Utc::now(),
            variables: VariableSet::new(),
        }
    }
}

impl std::fmt::Display for Deployment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.id)
    }
}
