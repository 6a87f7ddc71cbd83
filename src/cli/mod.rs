//! CLI module for the string analyzer
//!
//! Provides command-line interface for:
//! - serve: run the HTTP API
//! - analyze: one-shot analysis of a value
//! - translate: one-shot natural-language translation

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{load_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
