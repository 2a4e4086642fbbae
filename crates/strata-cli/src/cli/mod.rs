//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "strata",
    bin_name = "strata",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Layer-aware component analysis",
    long_about = "Strata classifies component descriptions into architectural \
                  layers, validates dependency hierarchies, and suggests \
                  convention-compliant names.",
    after_help = "EXAMPLES:\n\
        \x20 strata analyze \"um botão reutilizável\"\n\
        \x20 strata classify \"modal de confirmação com formulário\"\n\
        \x20 strata deps \"tela de login\" --layer feature\n\
        \x20 strata name \"botão com variantes\" --layer atom\n\
        \x20 strata layers --format table",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full analysis pipeline on a description.
    #[command(
        visible_alias = "a",
        about = "Classify, derive dependencies, and suggest a name",
        after_help = "EXAMPLES:\n\
            \x20 strata analyze \"um botão reutilizável\"\n\
            \x20 strata analyze \"tela de login\" --layer feature --prefix auth\n\
            \x20 strata analyze \"modal de aviso\" --json"
    )]
    Analyze(AnalyzeArgs),

    /// Classify a description into a layer.
    #[command(
        visible_alias = "c",
        about = "Classify a component description",
        after_help = "EXAMPLES:\n\
            \x20 strata classify \"um botão reutilizável\"\n\
            \x20 strata classify \"modal de confirmação\" --feature validation"
    )]
    Classify(ClassifyArgs),

    /// Derive and validate layer dependencies.
    #[command(
        about = "Analyze dependencies for a layer",
        after_help = "EXAMPLES:\n\
            \x20 strata deps \"tela de login com api\" --layer feature\n\
            \x20 strata deps \"formulário com botões\" --layer molecule"
    )]
    Deps(DepsArgs),

    /// Suggest a component name.
    #[command(
        visible_alias = "n",
        about = "Suggest layer-appropriate names",
        after_help = "EXAMPLES:\n\
            \x20 strata name \"botão com variantes de cor\" --layer atom\n\
            \x20 strata name \"modelo de usuário\" --layer entity"
    )]
    Name(NameArgs),

    /// Lint component code against layer conventions.
    #[command(
        about = "Check code against layer conventions",
        after_help = "EXAMPLES:\n\
            \x20 strata lint src/button.atom.tsx --layer atom\n\
            \x20 cat code.tsx | strata lint - --layer molecule --fail-under 80"
    )]
    Lint(LintArgs),

    /// List the layer taxonomy.
    #[command(
        visible_alias = "ls",
        about = "List the twelve layers and their profiles",
        after_help = "EXAMPLES:\n\
            \x20 strata layers\n\
            \x20 strata layers --format json"
    )]
    Layers(LayersArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 strata completions bash > ~/.local/share/bash-completion/completions/strata\n\
            \x20 strata completions zsh  > ~/.zfunc/_strata\n\
            \x20 strata completions fish > ~/.config/fish/completions/strata.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Strata configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 strata config get defaults.layer\n\
            \x20 strata config set analysis.provider simulated\n\
            \x20 strata config list"
    )]
    Config(ConfigCommands),
}

// ── analyze ───────────────────────────────────────────────────────────────────

/// Arguments for `strata analyze`.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Free-text component description.
    #[arg(value_name = "DESCRIPTION", help = "Component description")]
    pub description: String,

    /// Force a layer instead of classifying.
    #[arg(
        short = 'l',
        long = "layer",
        value_name = "LAYER",
        value_enum,
        help = "Skip classification and use this layer"
    )]
    pub layer: Option<Layer>,

    /// Feature tags that tune dependency detection.
    #[arg(
        short = 'f',
        long = "feature",
        value_name = "TAG",
        help = "Feature tag (repeatable): validation, formatting, state-management, ..."
    )]
    pub features: Vec<String>,

    /// Module prefix for feature names.
    #[arg(
        short = 'p',
        long = "prefix",
        value_name = "MODULE",
        help = "Module prefix for suggested names (features)"
    )]
    pub prefix: Option<String>,

    /// Suffix appended to suggested names.
    #[arg(long = "suffix", value_name = "SUFFIX", help = "Suffix for suggested names")]
    pub suffix: Option<String>,

    /// Emit the full analysis as JSON.
    #[arg(long = "json", help = "Print the analysis as JSON")]
    pub json: bool,
}

// ── classify ──────────────────────────────────────────────────────────────────

/// Arguments for `strata classify`.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Free-text component description.
    #[arg(value_name = "DESCRIPTION", help = "Component description")]
    pub description: String,

    /// Feature tags for scoring.
    #[arg(short = 'f', long = "feature", value_name = "TAG", help = "Feature tag (repeatable)")]
    pub features: Vec<String>,

    /// Emit the classification as JSON.
    #[arg(long = "json", help = "Print the classification as JSON")]
    pub json: bool,
}

// ── deps ──────────────────────────────────────────────────────────────────────

/// Arguments for `strata deps`.
#[derive(Debug, Args)]
pub struct DepsArgs {
    /// Free-text component description.
    #[arg(value_name = "DESCRIPTION", help = "Component description")]
    pub description: String,

    /// Layer to derive dependencies for.
    #[arg(short = 'l', long = "layer", value_name = "LAYER", value_enum, help = "Target layer")]
    pub layer: Layer,

    /// Feature tags that force dependencies.
    #[arg(short = 'f', long = "feature", value_name = "TAG", help = "Feature tag (repeatable)")]
    pub features: Vec<String>,

    /// Emit the dependency set as JSON.
    #[arg(long = "json", help = "Print the dependency set as JSON")]
    pub json: bool,
}

// ── name ──────────────────────────────────────────────────────────────────────

/// Arguments for `strata name`.
#[derive(Debug, Args)]
pub struct NameArgs {
    /// Free-text component description.
    #[arg(value_name = "DESCRIPTION", help = "Component description")]
    pub description: String,

    /// Layer whose naming convention applies.
    #[arg(short = 'l', long = "layer", value_name = "LAYER", value_enum, help = "Target layer")]
    pub layer: Layer,

    /// Module prefix (feature names).
    #[arg(short = 'p', long = "prefix", value_name = "MODULE", help = "Module prefix")]
    pub prefix: Option<String>,

    /// Name suffix.
    #[arg(long = "suffix", value_name = "SUFFIX", help = "Name suffix")]
    pub suffix: Option<String>,

    /// Emit the suggestion as JSON.
    #[arg(long = "json", help = "Print the suggestion as JSON")]
    pub json: bool,
}

// ── lint ──────────────────────────────────────────────────────────────────────

/// Arguments for `strata lint`.
#[derive(Debug, Args)]
pub struct LintArgs {
    /// Path to the code file, or `-` for stdin.
    #[arg(value_name = "FILE", help = "Code file to lint ('-' reads stdin)")]
    pub file: String,

    /// Layer whose conventions apply.
    #[arg(short = 'l', long = "layer", value_name = "LAYER", value_enum, help = "Target layer")]
    pub layer: Layer,

    /// Fail (exit 2) when the score drops below this threshold.
    #[arg(
        long = "fail-under",
        value_name = "SCORE",
        help = "Exit with an error when the score is below SCORE"
    )]
    pub fail_under: Option<u8>,

    /// Emit the review as JSON.
    #[arg(long = "json", help = "Print the review as JSON")]
    pub json: bool,
}

// ── layers ────────────────────────────────────────────────────────────────────

/// Arguments for `strata layers`.
#[derive(Debug, Args)]
pub struct LayersArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `layers` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `strata completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `strata config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.layer`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// The twelve architectural layers, as CLI values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Layer {
    Atom,
    Molecule,
    Organism,
    Template,
    Feature,
    Layout,
    Particle,
    Model,
    Entity,
    Util,
    Gateway,
    Repository,
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom => write!(f, "atom"),
            Self::Molecule => write!(f, "molecule"),
            Self::Organism => write!(f, "organism"),
            Self::Template => write!(f, "template"),
            Self::Feature => write!(f, "feature"),
            Self::Layout => write!(f, "layout"),
            Self::Particle => write!(f, "particle"),
            Self::Model => write!(f, "model"),
            Self::Entity => write!(f, "entity"),
            Self::Util => write!(f, "util"),
            Self::Gateway => write!(f, "gateway"),
            Self::Repository => write!(f, "repository"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn layer_display_matches_value_names() {
        assert_eq!(Layer::Atom.to_string(), "atom");
        assert_eq!(Layer::Repository.to_string(), "repository");
    }

    #[test]
    fn parse_analyze_command() {
        let cli = Cli::parse_from([
            "strata",
            "analyze",
            "um botão reutilizável",
            "--layer",
            "atom",
            "--prefix",
            "auth",
        ]);
        assert!(matches!(cli.command, Commands::Analyze(_)));
    }

    #[test]
    fn parse_deps_requires_layer() {
        let result = Cli::try_parse_from(["strata", "deps", "tela de login"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_repeated_features() {
        let cli = Cli::parse_from([
            "strata",
            "classify",
            "modal",
            "-f",
            "validation",
            "-f",
            "state-management",
        ]);
        if let Commands::Classify(args) = cli.command {
            assert_eq!(args.features, vec!["validation", "state-management"]);
        } else {
            panic!("expected Classify command");
        }
    }

    #[test]
    fn unknown_layer_value_is_rejected() {
        let result =
            Cli::try_parse_from(["strata", "deps", "algo", "--layer", "quark"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["strata", "--quiet", "--verbose", "layers"]);
        assert!(result.is_err());
    }
}
