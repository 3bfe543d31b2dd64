//! Filesystem-backed deployment storage.
//!
//! Keeps every deployment in a single TOML state file (`.depvar.toml` by
//! default). Each write replaces the file via rename.

use std::path::PathBuf;

use chrono::Utc;
use tracing::{debug, info};

use super::{new_id, stamp, Backend};
use crate::core::config::Config;
use crate::core::domain::{Deployment, VariableSet};
use crate::error::{BackendError, DeploymentError, Error, Result};

/// State-file backend.
#[derive(Debug, Clone)]
pub struct Filesystem {
    path: PathBuf,
}

impl Filesystem {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn not_found(config: &Config, id: &str) -> Error {
        let available: Vec<String> = config.deployments.iter().map(|d| d.id.clone()).collect();
        DeploymentError::not_found(id, &available).into()
    }

    fn index(config: &Config, id: &str) -> Result<usize> {
        config
            .deployments
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| Self::not_found(config, id))
    }
}

impl Backend for Filesystem {
    fn deployments(&self) -> Result<Vec<Deployment>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        Ok(Config::load(&self.path)?.deployments)
    }

    fn fetch(&self, id: &str) -> Result<VariableSet> {
        let config = Config::load(&self.path)?;
        let deployment = config
            .deployment(id)
            .ok_or_else(|| Self::not_found(&config, id))?;
        debug!(deployment = id, count = deployment.variables.len(), "fetched variables");
        Ok(deployment.variables.clone())
    }

    fn persist(&mut self, id: &str, variables: VariableSet) -> Result<VariableSet> {
        let mut config = Config::load(&self.path)?;
        let index = Self::index(&config, id)?;
        let deployment = &mut config.deployments[index];

        let stored = stamp(&deployment.variables, variables, Utc::now());
        deployment.variables = stored.clone();

        config.save(&self.path).map_err(|e| BackendError::Persist {
            deployment: id.to_string(),
            reason: e.to_string(),
        })?;

        info!(deployment = id, count = stored.len(), "persisted variables");
        Ok(stored)
    }

    fn create(&mut self, label: &str) -> Result<Deployment> {
        let mut config = Config::load_or_new(&self.path)?;
        let deployment = Deployment::new(new_id(), label);
        config.deployments.push(deployment.clone());
        config.save(&self.path)?;

        info!(deployment = %deployment.id, label, "created deployment");
        Ok(deployment)
    }

    fn relabel(&mut self, id: &str, label: &str) -> Result<Deployment> {
        let mut config = Config::load(&self.path)?;
        let index = Self::index(&config, id)?;
        config.deployments[index].label = label.to_string();
        config.save(&self.path)?;

        info!(deployment = id, label, "relabelled deployment");
        Ok(config.deployments.swap_remove(index))
    }

    fn delete(&mut self, id: &str) -> Result<Deployment> {
        let mut config = Config::load(&self.path)?;
        let index = Self::index(&config, id)?;
        let removed = config.deployments.remove(index);
        config.save(&self.path)?;

        info!(deployment = id, "deleted deployment");
        Ok(removed)
    }
}
