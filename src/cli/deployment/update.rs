//! Deployment update command.

use tracing::info;

use crate::cli::output;
use crate::core::backend::Backend;
use crate::error::{Result, ValidationError};

/// Give a deployment a new label.
pub fn execute(backend: &mut dyn Backend, id: &str, label: &str) -> Result<()> {
    let label = label.trim();
    if label.is_empty() {
        return Err(ValidationError::EmptyLabel.into());
    }

    info!("Relabelling deployment {} to {}", id, label);
    let deployment = backend.relabel(id, label)?;
    output::success(&format!("updated deployment {}", deployment));
    Ok(())
}
