//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use sonocat_ingest::DatasetSource;
use sonocat_model::SchemaPreset;
use sonocat_query::DEFAULT_TAG_LIMIT;
use sonocat_validate::DEFAULT_SIMILARITY_THRESHOLD;

use sonocat_cli::selection::parse_filter;

#[derive(Parser)]
#[command(
    name = "sonocat",
    version,
    about = "Browse and check the open-access ultrasound dataset catalog",
    long_about = "Browse and check the open-access ultrasound dataset catalog.\n\n\
                  SOURCE is a local CSV path or an http(s) URL. The column layout\n\
                  is chosen with --schema or a TOML file given by --schema-file."
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
    /// Filter the catalog and print the matching datasets.
    List(ListArgs),

    /// Print the values offered by each filter selector.
    Facets(FacetsArgs),

    /// Check the catalog for structural and consistency problems.
    Validate(ValidateArgs),
}

/// Where the catalog comes from and how its columns are named.
#[derive(Args)]
pub struct SourceArgs {
    /// Local CSV path or http(s) URL.
    #[arg(value_name = "SOURCE")]
    pub source: DatasetSource,

    /// Built-in column layout.
    #[arg(long = "schema", value_enum, default_value = "complete")]
    pub schema: SchemaArg,

    /// TOML schema file (takes precedence over --schema).
    #[arg(long = "schema-file", value_name = "PATH")]
    pub schema_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Case-insensitive substring of the dataset name.
    #[arg(long = "query", value_name = "TEXT")]
    pub query: Option<String>,

    /// Column selection; repeat a key to accept any of several values.
    #[arg(long = "filter", value_name = "KEY=VALUE", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Flag column that must be true.
    #[arg(long = "flag", value_name = "COLUMN")]
    pub flags: Vec<String>,

    /// Tags shown inline before collapsing into "+N more".
    #[arg(long = "tag-limit", value_name = "N", default_value_t = DEFAULT_TAG_LIMIT)]
    pub tag_limit: usize,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct FacetsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Similarity (0.0 to 1.0) at which two categories are reported.
    #[arg(
        long = "threshold",
        value_name = "F",
        default_value_t = DEFAULT_SIMILARITY_THRESHOLD
    )]
    pub threshold: f64,

    /// Also report a category contained in a longer one. Always on for the
    /// snapshot layout.
    #[arg(long = "partial-match")]
    pub partial_match: bool,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemaArg {
    Complete,
    Snapshot,
}

impl From<SchemaArg> for SchemaPreset {
    fn from(arg: SchemaArg) -> Self {
        match arg {
            SchemaArg::Complete => SchemaPreset::Complete,
            SchemaArg::Snapshot => SchemaPreset::Snapshot,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
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
