//! Deployment resolution for CLI commands.

use std::io::{self, IsTerminal};

use dialoguer::Select;
use tracing::debug;

use crate::core::backend::Backend;
use crate::core::domain::Deployment;
use crate::core::resolve::{self, Resolution};
use crate::error::{DeploymentError, Result};

/// Resolve which deployment a command targets.
///
/// Rules:
/// - If a deployment id is specified, it must exist
/// - If only one deployment exists, use it
/// - If several exist, prompt on a terminal, otherwise error with guidance
pub fn deployment(backend: &dyn Backend, id: Option<&str>, prompt: &str) -> Result<Deployment> {
    match resolve::resolve(backend.deployments()?, id)? {
        Resolution::Resolved(deployment) => {
            debug!(deployment = %deployment.id, "deployment resolved");
            Ok(deployment)
        }
        Resolution::Ambiguous(mut choices) => {
            if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
                return Err(DeploymentError::SelectionRequired {
                    choices: resolve::describe_choices(&choices),
                }
                .into());
            }

            let items: Vec<String> = choices.iter().map(ToString::to_string).collect();
            let selected = Select::new()
                .with_prompt(prompt)
                .items(&items)
                .default(0)
                .interact()?;
            Ok(choices.swap_remove(selected))
        }
    }
}
