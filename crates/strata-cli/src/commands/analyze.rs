//! Implementation of the `strata analyze` command.
//!
//! Responsibility: translate CLI arguments into an `AnalysisRequest`, call
//! the core analysis service, and display results. No analysis logic lives
//! here.

use tracing::{debug, info, instrument};

use strata_adapters::provider;
use strata_core::application::{AnalysisRequest, AnalysisService, ComponentAnalysis};
use strata_core::domain::{NamingContext, Severity};

use crate::{
    cli::{AnalyzeArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `strata analyze` command.
///
/// Dispatch sequence:
/// 1. Validate the description
/// 2. Build the request (layer override, features, naming hints)
/// 3. Resolve the configured provider and build the service
/// 4. Run the analysis
/// 5. Render the report (human or JSON)
#[instrument(skip_all)]
pub fn execute(
    args: AnalyzeArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    validate_description(&args.description)?;

    // 2. Build request.
    let request = AnalysisRequest {
        description: args.description.clone(),
        features: args.features.clone(),
        layer: args.layer.map(super::to_core_layer),
        naming: NamingContext {
            prefix: args.prefix.clone().or(config.defaults.module_prefix.clone()),
            suffix: args.suffix.clone(),
        },
    };

    // 3. Resolve provider.
    let service = match provider::from_name(config.analysis.provider.as_deref()) {
        Ok(Some(p)) => {
            debug!(provider = p.name(), "analysis provider enabled");
            AnalysisService::with_provider(p)
        }
        Ok(None) => AnalysisService::new(),
        Err(reason) => {
            return Err(CliError::ConfigError {
                message: reason,
                source: None,
            });
        }
    };

    // 4. Analyze.
    info!("analysis started");
    let analysis = service.analyze(&request);
    info!(layer = %analysis.layer, "analysis finished");

    // 5. Render.
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&analysis).map_err(|e| CliError::InvalidInput {
                message: format!("could not serialise analysis: {e}"),
                source: Some(Box::new(e)),
            })?
        );
        return Ok(());
    }

    render_report(&analysis, &config, &global, &output)?;
    Ok(())
}

pub(crate) fn validate_description(description: &str) -> CliResult<()> {
    if description.trim().is_empty() {
        return Err(CliError::InvalidDescription {
            reason: "description is empty".into(),
        });
    }
    if description.len() > 1000 {
        return Err(CliError::InvalidDescription {
            reason: "description is longer than 1000 characters".into(),
        });
    }
    Ok(())
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn render_report(
    analysis: &ComponentAnalysis,
    config: &AppConfig,
    global: &GlobalArgs,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Classification")?;
    out.kv("layer", analysis.layer.as_str())?;
    out.kv(
        "confidence",
        &format!("{:.0}%", analysis.classification.confidence * 100.0),
    )?;
    if !analysis.classification.alternatives.is_empty() {
        let alts: Vec<&str> = analysis
            .classification
            .alternatives
            .iter()
            .map(|c| c.layer.as_str())
            .collect();
        out.kv("alternatives", &alts.join(", "))?;
    }
    if let Some(provider) = analysis.provider {
        out.kv("provider", provider)?;
    }

    if analysis.classification.confidence < config.analysis.min_confidence {
        out.warning("low classification confidence; consider forcing --layer")?;
    }

    // Full ranking only with -v.
    if global.verbose > 0 {
        out.print("")?;
        out.header("Ranking")?;
        for candidate in &analysis.classification.ranking {
            out.kv(candidate.layer.as_str(), &format!("{:.1}", candidate.score))?;
        }
    }

    out.print("")?;
    out.header("Dependencies")?;
    out.kv("required", &join_layers(&analysis.dependencies.required))?;
    out.kv("optional", &join_layers(&analysis.dependencies.optional))?;
    for violation in &analysis.dependencies.violations {
        match violation.severity {
            Severity::Error => out.error(&violation.message)?,
            Severity::Warning => out.warning(&violation.message)?,
        }
    }

    out.print("")?;
    out.header("Naming")?;
    out.kv("name", &analysis.naming.primary)?;
    if !analysis.naming.alternatives.is_empty() {
        out.kv("alternatives", &analysis.naming.alternatives.join(", "))?;
    }

    out.print("")?;
    out.header("Files")?;
    for entry in &analysis.dependencies.manifest {
        let path = entry.path.replace("{name}", &analysis.naming.primary);
        if entry.required {
            out.print(&format!("  {path}"))?;
        } else {
            out.print(&format!("  {path} (optional)"))?;
        }
    }

    out.print("")?;
    out.success(&format!(
        "'{}' analyzed as {}",
        analysis.naming.primary, analysis.layer
    ))?;

    Ok(())
}

fn join_layers(layers: &[strata_core::domain::LayerId]) -> String {
    if layers.is_empty() {
        return "none".into();
    }
    layers
        .iter()
        .map(|l| l.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::domain::LayerId;

    // ── validate_description ─────────────────────────────────────────────────

    #[test]
    fn empty_description_is_invalid() {
        assert!(matches!(
            validate_description(""),
            Err(CliError::InvalidDescription { .. })
        ));
        assert!(matches!(
            validate_description("   "),
            Err(CliError::InvalidDescription { .. })
        ));
    }

    #[test]
    fn oversized_description_is_invalid() {
        let huge = "a".repeat(1001);
        assert!(validate_description(&huge).is_err());
    }

    #[test]
    fn normal_description_passes() {
        assert!(validate_description("um botão reutilizável").is_ok());
    }

    // ── join_layers ──────────────────────────────────────────────────────────

    #[test]
    fn join_layers_empty_is_none() {
        assert_eq!(join_layers(&[]), "none");
    }

    #[test]
    fn join_layers_is_comma_separated() {
        assert_eq!(
            join_layers(&[LayerId::Template, LayerId::Gateway]),
            "template, gateway"
        );
    }
}
