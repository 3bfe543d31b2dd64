//! Deployment list command.

use serde::Serialize;
use tabled::Tabled;

use crate::cli::output;
use crate::core::backend::Backend;
use crate::error::Result;

#[derive(Serialize, Tabled)]
struct DeploymentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "LABEL")]
    label: String,
    #[tabled(rename = "VARIABLES")]
    variables: usize,
    #[tabled(rename = "CREATED")]
    created: String,
}

/// List deployments.
pub fn execute(backend: &mut dyn Backend, json: bool) -> Result<()> {
    let rows: Vec<DeploymentRow> = backend
        .deployments()?
        .into_iter()
        .map(|d| DeploymentRow {
            id: d.id,
            label: d.label,
            variables: d.variables.len(),
            created: d.created_at.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect();

    if json {
        output::data(&serde_json::to_string_pretty(&rows)?);
    } else if rows.is_empty() {
        output::dimmed("no deployments");
    } else {
        output::table(&rows);
    }

    Ok(())
}
