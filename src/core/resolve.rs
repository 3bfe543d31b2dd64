//! Deployment resolution.
//!
//! Decides which deployment a command targets from an optional id and the
//! deployments that exist.

use crate::core::domain::Deployment;
use crate::error::{DeploymentError, Result};

/// Outcome of resolving a deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly one deployment matches.
    Resolved(Deployment),
    /// No id was given and several deployments exist; the caller must choose.
    Ambiguous(Vec<Deployment>),
}

/// Resolve the target deployment.
///
/// Rules:
/// - If an id is given, it must exist
/// - If only one deployment exists, use it
/// - If several exist, return them for selection
///
/// # Errors
///
/// Returns `DeploymentError::NotFound` for an unknown id and
/// `DeploymentError::NoDeployments` when there is nothing to choose from.
pub fn resolve(deployments: Vec<Deployment>, id: Option<&str>) -> Result<Resolution> {
    if let Some(id) = id {
        let available: Vec<String> = deployments.iter().map(|d| d.id.clone()).collect();
        return deployments
            .into_iter()
            .find(|d| d.id == id)
            .map(Resolution::Resolved)
            .ok_or_else(|| DeploymentError::not_found(id, &available).into());
    }

    let mut deployments = deployments;
    match deployments.len() {
        0 => Err(DeploymentError::NoDeployments.into()),
        1 => Ok(Resolution::Resolved(deployments.remove(0))),
        _ => Ok(Resolution::Ambiguous(deployments)),
    }
}

/// List choices for a `SelectionRequired` error.
pub fn describe_choices(deployments: &[Deployment]) -> String {
    deployments
        .iter()
        .map(|d| format!("  {}  {}", d.id, d.label))
        .collect::<Vec<_>>()
        .join("\n")
}
