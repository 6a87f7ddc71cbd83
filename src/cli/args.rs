//! CLI argument definitions using clap
//!
//! Commands:
//! - string-analyzer serve [--config <path>] [--host <host>] [--port <port>]
//! - string-analyzer analyze <value>
//! - string-analyzer translate <query>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// String Analyzer - analyze, store and query strings over HTTP
#[derive(Parser, Debug)]
#[command(name = "string-analyzer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind, overrides config and HOST
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overrides config and PORT
        #[arg(long)]
        port: Option<u16>,
    },

    /// Analyze a single value and print the record
    Analyze {
        /// The text to analyze
        value: String,
    },

    /// Translate a natural-language query and print the filters
    Translate {
        /// The query to translate
        query: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
