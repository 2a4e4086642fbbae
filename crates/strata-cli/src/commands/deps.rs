//! Implementation of the `strata deps` command.

use tracing::instrument;

use strata_core::domain::{Severity, analyze_dependencies};

use crate::{
    cli::{DepsArgs, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(layer = %args.layer))]
pub fn execute(args: DepsArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    super::analyze::validate_description(&args.description)?;

    let layer = super::to_core_layer(args.layer);
    let deps = analyze_dependencies(&args.description, layer, &args.features);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&deps).map_err(|e| CliError::InvalidInput {
                message: format!("could not serialise dependency set: {e}"),
                source: Some(Box::new(e)),
            })?
        );
        return Ok(());
    }

    output.header(&format!("Dependencies for {layer}"))?;
    output.kv("required", &join(&deps.required))?;
    output.kv("optional", &join(&deps.optional))?;
    output.kv("allowed", &join(&deps.hierarchy.allowed_dependencies))?;

    if deps.hierarchy.is_valid {
        output.success("hierarchy check passed")?;
    } else {
        for violation in &deps.hierarchy.violations {
            output.error(violation)?;
        }
    }

    for violation in &deps.violations {
        match violation.severity {
            Severity::Error => output.error(&violation.message)?,
            Severity::Warning => output.warning(&violation.message)?,
        }
    }

    output.print("")?;
    output.header("Files")?;
    for entry in &deps.manifest {
        if entry.required {
            output.print(&format!("  {}", entry.path))?;
        } else {
            output.print(&format!("  {} (optional)", entry.path))?;
        }
    }

    Ok(())
}

fn join(layers: &[strata_core::domain::LayerId]) -> String {
    if layers.is_empty() {
        return "none".into();
    }
    layers
        .iter()
        .map(|l| l.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
