//! Deployment delete command.

use std::io::{self, IsTerminal};

use dialoguer::Confirm;
use tracing::info;

use crate::cli::output;
use crate::core::backend::Backend;
use crate::error::Result;

/// Delete a deployment, confirming first on a terminal unless `yes` is set.
pub fn execute(backend: &mut dyn Backend, id: &str, yes: bool) -> Result<()> {
    if !yes && io::stdin().is_terminal() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete deployment {} and all its variables?", id))
            .default(false)
            .interact()?;
        if !confirmed {
            output::dimmed("cancelled");
            return Ok(());
        }
    }

    info!("Deleting deployment: {}", id);
    let removed = backend.delete(id)?;
    output::success(&format!("deleted deployment {}", removed));
    Ok(())
}
