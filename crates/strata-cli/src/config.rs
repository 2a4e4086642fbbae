//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`STRATA_*`)
//! 3. Config file (`--config`, or the default location if present)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for analysis runs.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Analysis provider settings.
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Layer assumed when a command allows omitting `--layer`.
    pub layer: Option<String>,
    /// Module prefix applied to feature names.
    pub module_prefix: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// External provider: `"simulated"` or `"none"`.
    pub provider: Option<String>,
    /// Below this classification confidence the CLI prints a warning.
    pub min_confidence: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            output: OutputConfig::default(),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            layer: None,
            module_prefix: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            provider: None,
            min_confidence: 0.4,
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `--config` file must exist; the default location is
    /// optional. `STRATA_*` environment variables override file values
    /// (`STRATA_ANALYSIS__PROVIDER=simulated`).
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&AppConfig::default())?);

        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path.clone()).required(true)),
            None => builder.add_source(config::File::from(Self::config_path()).required(false)),
        };

        let merged = builder
            .add_source(config::Environment::with_prefix("STRATA").separator("__"))
            .build()?;

        Ok(merged.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.strata.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "strata", "strata")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".strata.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_provider() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.analysis.provider, None);
    }

    #[test]
    fn default_min_confidence_is_point_four() {
        assert_eq!(AppConfig::default().analysis.min_confidence, 0.4);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }

    #[test]
    fn round_trips_through_toml() {
        let mut cfg = AppConfig::default();
        cfg.defaults.layer = Some("atom".into());
        cfg.analysis.provider = Some("simulated".into());

        let serialised = toml::to_string_pretty(&cfg).unwrap();
        let parsed: AppConfig = toml::from_str(&serialised).unwrap();
        assert_eq!(parsed.defaults.layer.as_deref(), Some("atom"));
        assert_eq!(parsed.analysis.provider.as_deref(), Some("simulated"));
    }
}
