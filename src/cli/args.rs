//! Command line argument parsing for the KeySearch CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::search::DEFAULT_SORT;

/// KeySearch - a personal knowledge-card manager with weighted search
#[derive(Parser, Debug, Clone)]
#[command(name = "keysearch")]
#[command(about = "Create, tag, and search personal knowledge cards")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct KeySearchArgs {
    /// Path to the item store (a JSON file, created on first write)
    #[arg(short, long, default_value = "keysearch.json", env = "KEYSEARCH_STORE")]
    pub store: PathBuf,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl KeySearchArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output formats supported by the CLI.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a new item
    Add(AddArgs),

    /// Update fields of an existing item
    Update(UpdateArgs),

    /// Search items with free text and filters
    Search(SearchArgs),

    /// List items (filters only, no free-text query)
    List(ListArgs),

    /// Delete an item by id
    Delete(DeleteArgs),

    /// Import items from a JSON export
    Import(ImportArgs),

    /// Export items as JSON or CSV
    Export(ExportArgs),

    /// Show collection statistics
    Stats,
}

/// Structural filter and sort options shared by read commands.
#[derive(Parser, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Exact-match identity filter (e.g. "Company")
    #[arg(long, default_value = "")]
    pub identity: String,

    /// Exact-match type filter (e.g. "Project")
    #[arg(long = "type", value_name = "TYPE", default_value = "")]
    pub kind: String,

    /// Case-insensitive tag filter
    #[arg(long, default_value = "")]
    pub tag: String,

    /// Sort key (updatedAt_desc, createdAt_desc, title_asc, score_desc)
    #[arg(long, default_value = DEFAULT_SORT)]
    pub sort: String,
}

/// Arguments for adding an item
#[derive(Parser, Debug, Clone)]
pub struct AddArgs {
    /// Item title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Identity label
    #[arg(long, default_value = "Company")]
    pub identity: String,

    /// Type label
    #[arg(long = "type", value_name = "TYPE", default_value = "Project")]
    pub kind: String,

    /// Tags (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Links (comma-separated; local paths are normalized to file:// URLs)
    #[arg(long, value_delimiter = ',')]
    pub links: Vec<String>,

    /// Content body
    #[arg(long, default_value = "")]
    pub content: String,
}

/// Arguments for updating an item
#[derive(Parser, Debug, Clone)]
pub struct UpdateArgs {
    /// Id of the item to update
    #[arg(value_name = "ID")]
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New identity label
    #[arg(long)]
    pub identity: Option<String>,

    /// New type label
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// Replacement tags (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tags: Option<Vec<String>>,

    /// Replacement links (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub links: Option<Vec<String>>,

    /// New content body
    #[arg(long)]
    pub content: Option<String>,
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Free-text query; every token must match somewhere in an item
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Maximum number of results to return
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for listing
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Maximum number of results to return
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for deleting an item
#[derive(Parser, Debug, Clone)]
pub struct DeleteArgs {
    /// Id of the item to delete
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for importing
#[derive(Parser, Debug, Clone)]
pub struct ImportArgs {
    /// JSON export file to import
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Export file formats.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

/// Arguments for exporting
#[derive(Parser, Debug, Clone)]
pub struct ExportArgs {
    /// Output file path
    #[arg(value_name = "FILE")]
    pub output: PathBuf,

    /// Export format
    #[arg(long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Optional free-text query; the export is the filtered, sorted view
    #[arg(long, default_value = "")]
    pub query: String,

    #[command(flatten)]
    pub filters: FilterArgs,
}
