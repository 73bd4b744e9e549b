//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Methodfit CLI - Screen contraceptive methods against a short questionnaire.
#[derive(Debug, Parser)]
#[command(name = "methodfit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Rule-table variant
    #[arg(short, long, value_enum, global = true)]
    pub rules: Option<RulesArg>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (ids only)
    Quiet,
}

/// Rule-table variant options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum RulesArg {
    /// Canonical table (breast-cancer history red flag)
    Canonical,
    /// Alternate table (recent-postpartum red flag)
    Postpartum,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Answer the questionnaire interactively (default)
    Quiz,

    /// List the method catalog
    Methods,

    /// Show the full detail card for one method
    Show(ShowArgs),

    /// Evaluate a prepared answer snapshot
    Recommend(RecommendArgs),
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Method id (e.g. combinedPill, diaphragm)
    pub id: String,
}

/// Arguments for the recommend command.
#[derive(Debug, Parser)]
pub struct RecommendArgs {
    /// JSON file containing an answer snapshot ({"questionId": "yes"|"no"|number})
    #[arg(long)]
    pub file: Option<String>,

    /// Read the JSON snapshot from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Individual answers as id=value pairs (repeatable)
    #[arg(short, long = "answer", value_name = "ID=VALUE")]
    pub answer: Vec<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<RulesArg> for crate::config::RuleVariant {
    fn from(rules: RulesArg) -> Self {
        match rules {
            RulesArg::Canonical => crate::config::RuleVariant::Canonical,
            RulesArg::Postpartum => crate::config::RuleVariant::Postpartum,
        }
    }
}
