//! CLI command implementations

use std::path::Path;

use crate::analysis::analyze;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event_with_fields, Event, Logger, Severity};
use crate::query::translate;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::write_pretty;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => {
            let config = load_config(config.as_deref(), host, port)?;
            serve(config)
        }
        Command::Analyze { value } => write_pretty(&analyze(&value)),
        Command::Translate { query } => write_pretty(&translate(&query)?),
    }
}

/// Resolve configuration: defaults, file, environment, then flags
pub fn load_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<HttpServerConfig> {
    let config = match path {
        Some(path) => HttpServerConfig::from_file(path)?,
        None => HttpServerConfig::default(),
    };

    let mut config = config.apply_env()?;

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    Ok(config)
}

/// Start the HTTP server and block until it exits
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    let severity: Severity = config
        .log_level
        .parse()
        .map_err(CliError::config_error)?;
    Logger::set_min_severity(severity);

    let port = config.port.to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("host", config.host.as_str()),
            ("port", port.as_str()),
            ("log_level", severity.as_str()),
        ],
    );

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async { server.start().await }).map_err(|e| {
        let reason = e.to_string();
        log_event_with_fields(Event::ServerFailed, &[("reason", reason.as_str())]);
        CliError::serve_failed(format!("HTTP server failed: {}", reason))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"host": "127.0.0.1", "port": 4000}}"#).unwrap();

        let config = load_config(Some(file.path()), None, Some(5000)).unwrap();
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_bad_config_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_config(Some(file.path()), None, None).unwrap_err();
        assert_eq!(err.code(), &super::super::errors::CliErrorCode::ConfigError);
    }

    #[test]
    fn test_translate_command_rejects_unknown_query() {
        let err = run_command(Command::Translate {
            query: "xyz".to_string(),
        })
        .unwrap_err();
        assert_eq!(err.code(), &super::super::errors::CliErrorCode::InvalidInput);
    }
}
