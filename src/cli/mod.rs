//! CLI interface for the TMS bridge
//!
//! Serves the HTTP surface or runs one client operation from the shell.

pub mod runner;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// TMS bridge - move loads between the load board and the TMS
#[derive(Parser, Debug, Default)]
#[command(name = "tms-bridge")]
#[command(version)]
#[command(about = "Bridge loads to and from the TMS shipment API", long_about = None)]
pub struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service
    Serve(ServeArgs),

    /// Fetch an OAuth token to check credentials
    Token,

    /// Print one page of loads as JSON
    List(ListArgs),

    /// Print the raw TMS document for a shipment
    Get {
        /// TMS shipment ID
        id: String,
    },

    /// Create a shipment from a Load JSON file
    Create(CreateArgs),

    /// Export several pages of loads to files
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Listen address, overrides the settings file
    #[arg(short, long)]
    pub bind: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Page number, 0 for the TMS default window
    #[arg(short, long, default_value = "0")]
    pub page: u32,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Path to a Load JSON document
    #[arg(short, long)]
    pub file: PathBuf,
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Maximum number of pages to walk
    #[arg(long, default_value = "1")]
    pub pages: u32,

    /// Export formats (csv, json)
    #[arg(short, long, value_delimiter = ',', default_value = "csv")]
    pub format: Vec<String>,

    /// Output directory for exported files
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
