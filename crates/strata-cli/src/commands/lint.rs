//! Implementation of the `strata lint` command.

use std::io::Read;
use std::path::PathBuf;

use tracing::instrument;

use strata_core::domain::{Severity, analyze_code};

use crate::{
    cli::{LintArgs, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(layer = %args.layer, file = %args.file))]
pub fn execute(args: LintArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let code = read_input(&args.file)?;
    let layer = super::to_core_layer(args.layer);

    let review = analyze_code(&code, layer);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&review).map_err(|e| CliError::InvalidInput {
                message: format!("could not serialise review: {e}"),
                source: Some(Box::new(e)),
            })?
        );
    } else {
        output.header(&format!("Conventions for {layer}"))?;
        if review.violations.is_empty() {
            output.success("no violations")?;
        }
        for violation in &review.violations {
            match violation.severity {
                Severity::Error => output.error(&format!(
                    "[{}] {}",
                    violation.rule, violation.description
                ))?,
                Severity::Warning => output.warning(&format!(
                    "[{}] {}",
                    violation.rule, violation.description
                ))?,
            }
            output.print(&format!("    {}", violation.suggestion))?;
        }
        output.print("")?;
        output.kv("score", &format!("{}/100", review.score))?;
    }

    if let Some(threshold) = args.fail_under {
        if review.score < threshold {
            return Err(CliError::LintBelowThreshold {
                score: review.score,
                threshold,
            });
        }
    }

    Ok(())
}

/// Read the code to lint: a file path, or stdin when the path is `-`.
fn read_input(file: &str) -> CliResult<String> {
    if file == "-" {
        let mut code = String::new();
        std::io::stdin()
            .read_to_string(&mut code)
            .map_err(|e| CliError::IoError {
                message: "failed to read stdin".into(),
                source: e,
            })?;
        return Ok(code);
    }

    let path = PathBuf::from(file);
    if !path.exists() {
        return Err(CliError::FileNotFound { path });
    }
    std::fs::read_to_string(&path).map_err(|e| CliError::IoError {
        message: format!("failed to read {}", path.display()),
        source: e,
    })
}
