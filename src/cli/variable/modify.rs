//! Variable create/update command.
//!
//! Merges an inline pair and an optional env file into a deployment's
//! variables, then shows the stored result.

use tracing::info;

use crate::cli::{output, resolve, ModifyArgs};
use crate::core::backend::Backend;
use crate::core::present::Projection;
use crate::core::reconcile::Change;
use crate::core::variables;
use crate::error::Result;

/// Create (or, with `allow_update`, update) variables.
pub fn execute(backend: &mut dyn Backend, args: ModifyArgs, allow_update: bool) -> Result<()> {
    let prompt = if allow_update {
        "Select a deployment to update variables for"
    } else {
        "Select a deployment to create variables for"
    };
    let deployment = resolve::deployment(backend, args.deployment.as_deref(), prompt)?;
    info!("Modifying variables of {} (update: {})", deployment.id, allow_update);

    let request = args.into_request(allow_update);
    let report = variables::modify(backend, &deployment.id, &request)?;

    if let Some((path, e)) = &report.file_error {
        output::warn(&format!("unable to read {}: {}", output::path(path), e));
    }
    for rejection in &report.rejections {
        output::warn(&rejection.to_string());
    }
    for change in &report.changes {
        match change {
            Change::Added(key) => output::success(&format!("added {}", output::key(key))),
            Change::Updated(key) => output::success(&format!("updated {}", output::key(key))),
        }
    }

    match report.projection() {
        Projection::Empty => output::dimmed("no variables for this deployment"),
        Projection::Rows(rows) => {
            output::blank();
            output::header(&format!("Variables of {}", deployment));
            output::table(&rows);
        }
    }

    Ok(())
}
