//! Deployment create command.

use tracing::info;

use crate::cli::output;
use crate::core::backend::Backend;
use crate::error::{Result, ValidationError};

/// Create an empty deployment.
pub fn execute(backend: &mut dyn Backend, label: &str) -> Result<()> {
    let label = label.trim();
    if label.is_empty() {
        return Err(ValidationError::EmptyLabel.into());
    }

    info!("Creating deployment: {}", label);
    let deployment = backend.create(label)?;
    output::success(&format!(
        "created deployment {} ({})",
        deployment.label,
        output::key(&deployment.id)
    ));
    Ok(())
}
