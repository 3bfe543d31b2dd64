//! Variable list command.
//!
//! Show a deployment's variables, optionally appending them to an env file.

use tracing::info;

use crate::cli::{output, resolve, ListArgs};
use crate::core::backend::Backend;
use crate::core::present::Projection;
use crate::core::variables;
use crate::error::Result;

/// List variables.
pub fn execute(backend: &mut dyn Backend, args: ListArgs) -> Result<()> {
    let deployment = resolve::deployment(
        backend,
        args.deployment.as_deref(),
        "Select a deployment to list its variables",
    )?;
    info!("Listing variables of {}", deployment.id);

    let save_to = args.save.then_some(args.env.as_path());
    let listing = variables::list(&*backend, &deployment.id, args.key.as_deref(), save_to)?;

    // With --json, stdout carries only the rows.
    let (success, warn) = if args.json {
        (output::success_stderr as fn(&str), output::warn_stderr as fn(&str))
    } else {
        (output::success as fn(&str), output::warn as fn(&str))
    };

    match &listing.export {
        Some(Ok(exported)) => {
            success(&format!(
                "saved {} variables to {}",
                exported.written,
                output::path(&args.env)
            ));
            if exported.secrets > 0 {
                warn(&format!(
                    "{} secret values were written in plain text",
                    exported.secrets
                ));
            }
        }
        Some(Err(e)) => warn(&format!(
            "unable to write variables to {}: {}",
            output::path(&args.env),
            e
        )),
        None => {}
    }

    if args.json {
        output::data(&serde_json::to_string_pretty(listing.projection.rows())?);
        return Ok(());
    }

    match &listing.projection {
        Projection::Empty => output::dimmed("no variables found"),
        Projection::Rows(rows) => output::table(rows),
    }

    Ok(())
}
