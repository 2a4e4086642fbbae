//! Implementation of the `strata layers` command.

use serde::Serialize;

use strata_core::domain::{LAYER_REGISTRY, LayerProfile};

use crate::{
    cli::{LayersArgs, ListFormat, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Flat, serialisable view of one registry entry.
#[derive(Debug, Serialize)]
struct LayerRow {
    layer: &'static str,
    complexity: &'static str,
    dependencies: &'static str,
    reusability: &'static str,
    allowed: Vec<&'static str>,
}

impl From<&'static LayerProfile> for LayerRow {
    fn from(profile: &'static LayerProfile) -> Self {
        Self {
            layer: profile.layer.as_str(),
            complexity: profile.complexity.as_str(),
            dependencies: profile.dependency_tier,
            reusability: profile.reusability.as_str(),
            allowed: profile
                .allowed_dependencies
                .iter()
                .map(|l| l.as_str())
                .collect(),
        }
    }
}

pub fn execute(args: LayersArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let rows: Vec<LayerRow> = LAYER_REGISTRY.iter().map(LayerRow::from).collect();

    match args.format {
        ListFormat::Table => {
            output.header("Layers:")?;
            output.print(&format!(
                "  {:<12} {:<11} {:<8} {}",
                "layer", "complexity", "reuse", "may depend on"
            ))?;
            for row in &rows {
                let allowed = if row.allowed.is_empty() {
                    "-".to_string()
                } else {
                    row.allowed.join(", ")
                };
                output.print(&format!(
                    "  {:<12} {:<11} {:<8} {}",
                    row.layer, row.complexity, row.reusability, allowed
                ))?;
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json =
                serde_json::to_string_pretty(&rows).map_err(|e| CliError::InvalidInput {
                    message: format!("could not serialise layers: {e}"),
                    source: Some(Box::new(e)),
                })?;
            println!("{json}");
        }

        ListFormat::List => {
            for row in &rows {
                println!("{}", row.layer);
            }
        }

        ListFormat::Csv => {
            println!("layer,complexity,dependencies,reusability");
            for row in &rows {
                println!(
                    "{},{},{},{}",
                    row.layer, row.complexity, row.dependencies, row.reusability
                );
            }
        }
    }

    Ok(())
}
