//! CLI argument definitions for the data-model generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use dbm_cli::pipeline::ArtifactKind;

#[derive(Parser)]
#[command(
    name = "dbm",
    version,
    about = "Data-model boilerplate generator - Parcelable and SQLite schema code",
    long_about = "Generate Parcelable serialization and SQLite schema members for a data class.\n\n\
                  Class descriptors and snapshots are JSON files. Merge plans are idempotent:\n\
                  planning against an already merged class produces no edits."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Configuration file (default: $DBM_CONFIG, then ./dbm.toml).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate artifacts for a class descriptor.
    Generate(GenerateArgs),

    /// Plan the merge of generated artifacts into an existing class.
    Plan(PlanArgs),

    /// List serializer strategies in priority order.
    Strategies,

    /// Show which strategy claims each type.
    Resolve(ResolveArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// JSON class descriptor.
    #[arg(value_name = "CLASS_JSON")]
    pub class: PathBuf,

    /// Artifact sets to generate.
    #[arg(long = "artifacts", value_enum, default_value = "all")]
    pub artifacts: ArtifactArg,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    /// Write to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct PlanArgs {
    /// JSON class descriptor.
    #[arg(value_name = "CLASS_JSON")]
    pub class: PathBuf,

    /// JSON snapshot of the class as it exists today (default: empty class).
    #[arg(long = "snapshot", value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Artifact sets to merge.
    #[arg(long = "artifacts", value_enum, default_value = "all")]
    pub artifacts: ArtifactArg,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    /// Write the snapshot after applying the plan.
    #[arg(long = "write-snapshot", value_name = "PATH")]
    pub write_snapshot: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Canonical type names, e.g. `java.util.List<com.example.Item>`.
    #[arg(value_name = "TYPE")]
    pub types: Vec<String>,

    /// Report every field of a class descriptor.
    #[arg(long = "class", value_name = "CLASS_JSON")]
    pub class: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ArtifactArg {
    Schema,
    Parcelable,
    All,
}

impl From<ArtifactArg> for ArtifactKind {
    fn from(arg: ArtifactArg) -> Self {
        match arg {
            ArtifactArg::Schema => Self::Schema,
            ArtifactArg::Parcelable => Self::Parcelable,
            ArtifactArg::All => Self::All,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
