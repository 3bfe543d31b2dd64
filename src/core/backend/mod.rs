//! Deployment storage backends.
//!
//! The reconciliation core only needs to fetch a deployment's variables and
//! persist a complete replacement set. Backends implement that contract.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Backend` trait
//! 2. Add the implementation in a new file (e.g., `http.rs`)
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Http { /* ... */ }
//!
//! impl Backend for Http {
//!     fn deployments(&self) -> Result<Vec<Deployment>> { /* GET /deployments */ }
//!     fn fetch(&self, id: &str) -> Result<VariableSet> { /* GET /deployments/{id} */ }
//!     fn persist(&mut self, id: &str, variables: VariableSet) -> Result<VariableSet> {
//!         /* PUT /deployments/{id}/variables */
//!     }
//!     // ...
//! }
//! ```

use chrono::{DateTime, Utc};

use crate::core::domain::{Deployment, VariableSet};
use crate::error::Result;

mod fs;
mod memory;

pub use fs::Filesystem;
pub use memory::Memory;

/// Deployment storage trait.
pub trait Backend {
    /// All deployments, in creation order.
    ///
    /// # Errors
    ///
    /// Returns error if the backing store cannot be read.
    fn deployments(&self) -> Result<Vec<Deployment>>;

    /// Current variables of a deployment.
    ///
    /// # Errors
    ///
    /// Returns `DeploymentError::NotFound` if the deployment doesn't exist.
    fn fetch(&self, id: &str) -> Result<VariableSet>;

    /// Replace a deployment's variables in one write.
    ///
    /// Either the whole set becomes the stored state or nothing changes.
    ///
    /// # Returns
    ///
    /// The authoritative stored set, with `updated_at` stamped on every
    /// record that is new or changed.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Persist` if the write fails.
    fn persist(&mut self, id: &str, variables: VariableSet) -> Result<VariableSet>;

    /// Create an empty deployment.
    ///
    /// # Errors
    ///
    /// Returns error if the backing store cannot be written.
    fn create(&mut self, label: &str) -> Result<Deployment>;

    /// Change a deployment's label. Variables are untouched.
    ///
    /// # Errors
    ///
    /// Returns `DeploymentError::NotFound` if the deployment doesn't exist.
    fn relabel(&mut self, id: &str, label: &str) -> Result<Deployment>;

    /// Delete a deployment and its variables.
    ///
    /// # Errors
    ///
    /// Returns `DeploymentError::NotFound` if the deployment doesn't exist.
    fn delete(&mut self, id: &str) -> Result<Deployment>;
}

/// Stamp write times onto a set about to be stored.
///
/// Records identical to their stored counterpart keep the old timestamp;
/// new or changed records get `now`.
pub(crate) fn stamp(previous: &VariableSet, next: VariableSet, now: DateTime<Utc>) -> VariableSet {
    VariableSet::from_records(next.into_iter().map(|var| {
        match previous.get(var.key()) {
            Some(old) if old.same_content(&var) => match old.updated_at() {
                Some(at) => var.with_updated_at(at),
                None => var.with_updated_at(now),
            },
            _ => var.with_updated_at(now),
        }
    }))
}

/// Short random deployment id.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..12].to_string()
}
