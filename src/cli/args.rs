//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the Commands enum.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Documentation search-index lookup
#[derive(Parser)]
#[command(
    name = "docdex",
    version = env!("CARGO_PKG_VERSION"),
    about = "Search-index lookup for generated documentation",
    long_about = "Load generator-emitted search index blocks and query them by label.",
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize project
    #[command(about = "Set up .docdex directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Search record labels
    #[command(about = "Find records whose label contains the query")]
    Search {
        /// Query text, matched case-insensitively against labels
        query: String,

        /// Maximum number of results (overrides config, 0 = unlimited)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Block file or directory to load (repeatable, overrides config)
        #[arg(short, long, value_name = "PATH")]
        source: Vec<PathBuf>,

        /// Output the JSON envelope instead of text
        #[arg(long)]
        json: bool,
    },

    /// Look up one record
    #[command(about = "Show the record with the given id")]
    Show {
        /// Record id, e.g. 'read_754'
        id: String,

        /// Block file or directory to load (repeatable, overrides config)
        #[arg(short, long, value_name = "PATH")]
        source: Vec<PathBuf>,

        /// Output the JSON envelope instead of text
        #[arg(long)]
        json: bool,
    },

    /// Index statistics
    #[command(about = "Record and target counts for the loaded sources")]
    Stats {
        /// Block file or directory to load (repeatable, overrides config)
        #[arg(short, long, value_name = "PATH")]
        source: Vec<PathBuf>,

        /// Output the JSON envelope instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show current configuration
    #[command(about = "Display active settings")]
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
