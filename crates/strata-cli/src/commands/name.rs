//! Implementation of the `strata name` command.

use tracing::instrument;

use strata_core::domain::{NamingContext, suggest_name};

use crate::{
    cli::NameArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(layer = %args.layer))]
pub fn execute(args: NameArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    super::analyze::validate_description(&args.description)?;

    let layer = super::to_core_layer(args.layer);
    let context = NamingContext {
        prefix: args.prefix.or(config.defaults.module_prefix),
        suffix: args.suffix,
    };

    let suggestion = suggest_name(&args.description, layer, Some(&context));

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&suggestion).map_err(|e| CliError::InvalidInput {
                message: format!("could not serialise suggestion: {e}"),
                source: Some(Box::new(e)),
            })?
        );
        return Ok(());
    }

    output.header(&format!("Names for {layer}"))?;
    output.kv("name", &suggestion.primary)?;
    if !suggestion.alternatives.is_empty() {
        output.kv("alternatives", &suggestion.alternatives.join(", "))?;
    }
    output.kv("confidence", &format!("{:.0}%", suggestion.confidence * 100.0))?;
    output.print("")?;
    output.print(&suggestion.reasoning)?;

    Ok(())
}
