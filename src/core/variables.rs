//! List and modify workflows.
//!
//! Composes fetch, parse, reconcile, persist, export and projection. All
//! diagnostics are returned to the caller for printing; only fetch and
//! persist failures are errors.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::backend::Backend;
use crate::core::domain::{Candidate, Origin, Rejection, VariableSet};
use crate::core::env;
use crate::core::export::{self, Exported};
use crate::core::present::{self, Projection};
use crate::core::reconcile::{Change, Intent, Reconciler};
use crate::error::Result;

/// Result of a list operation.
#[derive(Debug)]
pub struct Listing {
    /// Rows to display.
    pub projection: Projection,
    /// Outcome of `--save`, if requested. An error here does not fail the listing.
    pub export: Option<std::io::Result<Exported>>,
}

/// Fetch a deployment's variables, optionally appending them to an env file.
///
/// # Errors
///
/// Returns error only if the fetch fails.
pub fn list<B: Backend + ?Sized>(
    backend: &B,
    deployment: &str,
    key: Option<&str>,
    save_to: Option<&Path>,
) -> Result<Listing> {
    let variables = backend.fetch(deployment)?;
    debug!(deployment, count = variables.len(), "listing variables");

    let export = save_to.map(|path| {
        let result = export::append(&variables, key, path);
        if let Err(e) = &result {
            warn!(path = %path.display(), error = %e, "export failed");
        }
        result
    });

    Ok(Listing {
        projection: present::project(&variables, key),
        export,
    })
}

/// Inputs of a modify operation.
#[derive(Debug, Clone, Default)]
pub struct ModifyRequest {
    /// Inline candidate from the command line.
    pub inline: Option<Candidate>,
    /// Env file to load candidates from.
    pub file: Option<PathBuf>,
    pub intent: Intent,
}

impl ModifyRequest {
    /// Build the inline candidate from optional key and value.
    ///
    /// Returns `None` only when neither is given; a lone key or value yields a
    /// candidate that the merge will reject with a diagnostic.
    pub fn inline_from(key: Option<String>, value: Option<String>) -> Option<Candidate> {
        if key.is_none() && value.is_none() {
            return None;
        }
        Some(Candidate::inline(
            key.unwrap_or_default(),
            value.unwrap_or_default(),
        ))
    }
}

/// Result of a modify operation.
#[derive(Debug)]
pub struct ModifyReport {
    /// Applied edits.
    pub changes: Vec<Change>,
    /// Skipped candidates, inline first then by file line.
    pub rejections: Vec<Rejection>,
    /// The env file could not be read; no file candidates were used.
    pub file_error: Option<(PathBuf, std::io::Error)>,
    /// State returned by the backend after the write.
    pub stored: VariableSet,
}

impl ModifyReport {
    pub fn projection(&self) -> Projection {
        present::project(&self.stored, None)
    }
}

/// Merge inline and file candidates into a deployment and persist the result.
///
/// # Errors
///
/// Returns error if the fetch or the persist fails. Rejected candidates and
/// an unreadable env file are reported in the `ModifyReport` instead.
pub fn modify<B: Backend + ?Sized>(
    backend: &mut B,
    deployment: &str,
    request: &ModifyRequest,
) -> Result<ModifyReport> {
    let existing = backend.fetch(deployment)?;
    let mut reconciler = Reconciler::new(&existing, request.intent);

    reconciler.apply_all(request.inline.as_ref());

    let mut file_error = None;
    if let Some(path) = &request.file {
        match env::load(path) {
            Ok(parsed) => {
                reconciler.apply_all(&parsed.candidates);
                for rejection in parsed.rejections {
                    reconciler.record(rejection);
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unable to read env file");
                file_error = Some((path.clone(), e));
            }
        }
    }

    let mut outcome = reconciler.finish();
    outcome.rejections.sort_by_key(|r| match r.origin() {
        Origin::Inline => 0,
        Origin::File { line } => line,
    });

    let stored = backend.persist(deployment, outcome.variables)?;
    info!(
        deployment,
        changed = outcome.changes.len(),
        rejected = outcome.rejections.len(),
        "variables modified"
    );

    Ok(ModifyReport {
        changes: outcome.changes,
        rejections: outcome.rejections,
        file_error,
        stored,
    })
}
