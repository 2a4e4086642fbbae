//! Implementation of the `strata classify` command.

use tracing::instrument;

use strata_core::domain::classify;

use crate::{
    cli::{ClassifyArgs, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: ClassifyArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    super::analyze::validate_description(&args.description)?;

    let result = classify(&args.description, &args.features);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).map_err(|e| CliError::InvalidInput {
                message: format!("could not serialise classification: {e}"),
                source: Some(Box::new(e)),
            })?
        );
        return Ok(());
    }

    output.header("Classification")?;
    output.kv("layer", result.primary.layer.as_str())?;
    output.kv("score", &format!("{:.1}", result.primary.score))?;
    output.kv("confidence", &format!("{:.0}%", result.confidence * 100.0))?;

    let alts: Vec<String> = result
        .alternatives
        .iter()
        .map(|c| format!("{} ({:.1})", c.layer, c.score))
        .collect();
    if !alts.is_empty() {
        output.kv("alternatives", &alts.join(", "))?;
    }

    output.print("")?;
    output.print(&result.reasoning)?;

    // Full ranking only with -v.
    if global.verbose > 0 {
        output.print("")?;
        output.header("Ranking")?;
        for candidate in &result.ranking {
            output.kv(candidate.layer.as_str(), &format!("{:.1}", candidate.score))?;
        }
    }

    Ok(())
}
