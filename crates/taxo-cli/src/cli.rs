//! CLI argument definitions for the ordering tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "taxo",
    version,
    about = "Taxonomy Studio - custom ordering for categorical dimensions",
    long_about = "Impose and persist a custom display order over the categorical\n\
                  values of a live dataset: the flat Sector, Domain and Country\n\
                  dimensions and the Set > Grouping > List hierarchy.\n\n\
                  Orders stay stable as the dataset changes: values you ordered\n\
                  keep their relative positions, new values append in sorted\n\
                  order, and removed values drop out."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// List the orderable dimensions.
    Dimensions,

    /// Show the reconciled working order for one or all dimensions.
    Show(ShowArgs),

    /// Move one value within an order and save the document back.
    Reorder(ReorderArgs),
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Path to the dataset CSV file.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Path to the saved order document (missing or malformed falls back to
    /// natural sort order).
    #[arg(long = "orders", value_name = "PATH")]
    pub orders: Option<PathBuf>,

    /// Show only this dimension (sector, domain, country, or set).
    #[arg(long = "dimension", value_enum, value_name = "NAME")]
    pub dimension: Option<DimensionArg>,

    /// Show the Grouping order of this Set.
    #[arg(long = "set", value_name = "SET", conflicts_with = "dimension")]
    pub set: Option<String>,

    /// Show the List order of this Grouping (requires --set).
    #[arg(long = "grouping", value_name = "GROUPING", requires = "set")]
    pub grouping: Option<String>,
}

#[derive(Parser)]
pub struct ReorderArgs {
    /// Path to the dataset CSV file.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Path to the order document to update.
    #[arg(long = "orders", value_name = "PATH")]
    pub orders: PathBuf,

    /// Reorder within this dimension (sector, domain, country, or set).
    #[arg(long = "dimension", value_enum, value_name = "NAME")]
    pub dimension: Option<DimensionArg>,

    /// Reorder the Groupings of this Set (with --grouping: that pair's Lists).
    #[arg(long = "set", value_name = "SET", conflicts_with = "dimension")]
    pub set: Option<String>,

    /// Reorder the Lists of this (Set, Grouping) pair (requires --set).
    #[arg(long = "grouping", value_name = "GROUPING", requires = "set")]
    pub grouping: Option<String>,

    /// The value to move.
    #[arg(value_name = "ITEM")]
    pub item: String,

    /// The index the value should land at (clamped to the order's bounds).
    #[arg(value_name = "TARGET_INDEX")]
    pub target_index: usize,
}

/// Orderable dimensions addressable from the command line.
#[derive(Clone, Copy, ValueEnum)]
pub enum DimensionArg {
    Sector,
    Domain,
    Country,
    /// Level-1 of the Set > Grouping > List hierarchy.
    Set,
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
