//! CLI definitions for Tablescope.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use tablescope_config::{OutputFormat, TruncationMode};
use tablescope_core::Truncation;
use tablescope_protocols::Locator;

/// Tablescope CLI.
#[derive(Parser)]
#[command(name = "tablescope")]
#[command(about = "Inspect HTML tables and extract them with nested tables")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (defaults to ./tablescope.toml when present)
    #[arg(short, long, global = true, env = "TABLESCOPE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which table of which file a command works on.
#[derive(Args, Debug, Clone)]
pub(crate) struct TableArgs {
    /// HTML file to read
    pub file: PathBuf,

    /// Position of the table among all tables of the document, 0-based
    #[arg(long, default_value_t = 0, conflicts_with = "table_id")]
    pub table_index: usize,

    /// `id` attribute of the table
    #[arg(long)]
    pub table_id: Option<String>,
}

impl TableArgs {
    pub fn locator<N>(&self) -> Locator<N> {
        match &self.table_id {
            Some(id) => Locator::id(id.as_str()),
            None => Locator::Index(self.table_index),
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show row and column counts
    Info {
        #[command(flatten)]
        table: TableArgs,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Print the table as nested arrays of cell text
    Extract {
        #[command(flatten)]
        table: TableArgs,

        /// Levels of nested tables to expand
        #[arg(long)]
        depth: Option<usize>,

        /// What over-deep nested tables become
        #[arg(long, value_enum)]
        truncation: Option<TruncationArg>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Print the cell text of one row
    Row {
        #[command(flatten)]
        table: TableArgs,

        /// Row index among the table's own rows, 0-based
        index: usize,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Print one column's cell text from every row
    Column {
        #[command(flatten)]
        table: TableArgs,

        /// Cell index within each row, 0-based
        index: usize,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// List the table's bodies and their row counts
    Bodies {
        #[command(flatten)]
        table: TableArgs,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TruncationArg {
    Omit,
    EmptyTable,
}

impl From<TruncationArg> for Truncation {
    fn from(arg: TruncationArg) -> Self {
        match arg {
            TruncationArg::Omit => Truncation::Omit,
            TruncationArg::EmptyTable => Truncation::EmptyTable,
        }
    }
}

/// Config-file truncation setting as the core type.
pub(crate) fn truncation_from_config(mode: TruncationMode) -> Truncation {
    match mode {
        TruncationMode::Omit => Truncation::Omit,
        TruncationMode::EmptyTable => Truncation::EmptyTable,
    }
}
