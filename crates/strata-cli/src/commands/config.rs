//! `strata config` — read and write configuration values.

use std::path::PathBuf;

use crate::{
    cli::{ConfigCommands, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            let path = global
                .config
                .clone()
                .unwrap_or_else(AppConfig::config_path);
            let mut config = config;
            set_config_value(&mut config, &key, &value)?;
            write_config(&config, &path)?;
            output.success(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.layer" => Ok(config.defaults.layer.clone().unwrap_or_default()),
        "defaults.module_prefix" => Ok(config.defaults.module_prefix.clone().unwrap_or_default()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        "analysis.provider" => Ok(config.analysis.provider.clone().unwrap_or_default()),
        "analysis.min_confidence" => Ok(config.analysis.min_confidence.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> CliResult<()> {
    let parse_bool = |v: &str| -> CliResult<bool> {
        v.parse().map_err(|_| CliError::ConfigError {
            message: format!("'{v}' is not a boolean"),
            source: None,
        })
    };

    match key {
        "defaults.layer" => config.defaults.layer = non_empty(value),
        "defaults.module_prefix" => config.defaults.module_prefix = non_empty(value),
        "output.no_color" => config.output.no_color = parse_bool(value)?,
        "output.format" => config.output.format = value.to_string(),
        "analysis.provider" => config.analysis.provider = non_empty(value),
        "analysis.min_confidence" => {
            config.analysis.min_confidence = value.parse().map_err(|_| CliError::ConfigError {
                message: format!("'{value}' is not a number"),
                source: None,
            })?;
        }
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            });
        }
    }
    Ok(())
}

/// `""` and `"none"` clear an optional key.
fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() || value == "none" {
        None
    } else {
        Some(value.to_string())
    }
}

fn write_config(config: &AppConfig, path: &PathBuf) -> CliResult<()> {
    let serialised = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("failed to create {}", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(path, serialised).map_err(|e| CliError::IoError {
        message: format!("failed to write {}", path.display()),
        source: e,
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.format").unwrap(), "human");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut cfg = AppConfig::default();
        set_config_value(&mut cfg, "analysis.provider", "simulated").unwrap();
        assert_eq!(
            get_config_value(&cfg, "analysis.provider").unwrap(),
            "simulated"
        );
    }

    #[test]
    fn set_none_clears_an_optional_key() {
        let mut cfg = AppConfig::default();
        set_config_value(&mut cfg, "defaults.layer", "atom").unwrap();
        set_config_value(&mut cfg, "defaults.layer", "none").unwrap();
        assert_eq!(cfg.defaults.layer, None);
    }

    #[test]
    fn set_bad_boolean_is_rejected() {
        let mut cfg = AppConfig::default();
        assert!(set_config_value(&mut cfg, "output.no_color", "maybe").is_err());
    }

    #[test]
    fn set_bad_number_is_rejected() {
        let mut cfg = AppConfig::default();
        assert!(set_config_value(&mut cfg, "analysis.min_confidence", "high").is_err());
    }

    #[test]
    fn written_config_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = AppConfig::default();
        set_config_value(&mut cfg, "defaults.layer", "molecule").unwrap();
        write_config(&cfg, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.defaults.layer.as_deref(), Some("molecule"));
    }
}
