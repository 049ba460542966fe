use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "moldmatch")]
#[command(about = "Compare injection molding machine prices across manufacturers", long_about = None)]
pub struct Cli {
    /// Log debug details from every stage
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read a workbook, group comparable machines and print the comparison
    Compare {
        /// Workbook with a "Data" sheet (.xlsx, .xls, .ods)
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = ViewArg::Representative)]
        view: ViewArg,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Write the output to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Do not store the representative view for sharing
        #[arg(long)]
        no_share: bool,
        #[arg(long, value_enum)]
        product: Option<ProductArg>,
        /// Manufacturer columns to show first (repeatable)
        #[arg(long = "manufacturer")]
        manufacturers: Vec<String>,
        /// Show only the manufacturers given with --manufacturer
        #[arg(long, requires = "manufacturers")]
        only: bool,
    },
    /// Work with shared comparisons
    #[command(subcommand)]
    Share(ShareCommand),
    /// Print configuration values
    PrintConfig,
    /// Delete every shared comparison
    TruncateDb,
}

#[derive(Debug, Subcommand)]
pub enum ShareCommand {
    /// Render a shared comparison read-only
    Show {
        share_id: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// List shared comparisons, newest first
    List {
        #[arg(long, default_value_t = 0)]
        offset: i64,
        #[arg(long, default_value_t = 20)]
        limit: i64,
    },
    /// Remove a shared comparison
    Delete { share_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Representative,
    Entire,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProductArg {
    Hydraulic,
    Electric,
}
