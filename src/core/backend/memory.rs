//! In-memory deployment storage.
//!
//! Used by tests and by callers embedding the library without a state file.

use chrono::Utc;

use super::{new_id, stamp, Backend};
use crate::core::domain::{Deployment, VariableSet};
use crate::error::{BackendError, DeploymentError, Error, Result};

/// Backend holding deployments in memory.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    deployments: Vec<Deployment>,
    fail_persist: Option<String>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a deployment with variables.
    pub fn with_deployment(mut self, id: &str, label: &str, variables: VariableSet) -> Self {
        let mut deployment = Deployment::new(id, label);
        deployment.variables = variables;
        self.deployments.push(deployment);
        self
    }

    /// Make every subsequent persist fail with `reason`.
    pub fn fail_persist(&mut self, reason: impl Into<String>) {
        self.fail_persist = Some(reason.into());
    }

    fn not_found(&self, id: &str) -> Error {
        let available: Vec<String> = self.deployments.iter().map(|d| d.id.clone()).collect();
        DeploymentError::not_found(id, &available).into()
    }

    fn index(&self, id: &str) -> Result<usize> {
        self.deployments
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| self.not_found(id))
    }
}

impl Backend for Memory {
    fn deployments(&self) -> Result<Vec<Deployment>> {
        Ok(self.deployments.clone())
    }

    fn fetch(&self, id: &str) -> Result<VariableSet> {
        self.deployments
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.variables.clone())
            .ok_or_else(|| self.not_found(id))
    }

    fn persist(&mut self, id: &str, variables: VariableSet) -> Result<VariableSet> {
        if let Some(reason) = &self.fail_persist {
            return Err(BackendError::Persist {
                deployment: id.to_string(),
                reason: reason.clone(),
            }
            .into());
        }
        let index = self.index(id)?;
        let deployment = &mut self.deployments[index];

        let stored = stamp(&deployment.variables, variables, Utc::now());
        deployment.variables = stored.clone();
        Ok(stored)
    }

    fn create(&mut self, label: &str) -> Result<Deployment> {
        let deployment = Deployment::new(new_id(), label);
        self.deployments.push(deployment.clone());
        Ok(deployment)
    }

    fn relabel(&mut self, id: &str, label: &str) -> Result<Deployment> {
        let index = self.index(id)?;
        self.deployments[index].label = label.to_string();
        Ok(self.deployments[index].clone())
    }

    fn delete(&mut self, id: &str) -> Result<Deployment> {
        let index = self.index(id)?;
        Ok(self.deployments.remove(index))
    }
}
