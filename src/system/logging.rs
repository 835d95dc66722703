//! Logging system initialization
//!
//! This module provides functions to initialize the tracing/logging system
//! based on application configuration.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::{AppConfig, LoggingConfig};
use crate::errors::{DashboardError, Result};

/// Log file used by the TUI when none is configured
pub const TUI_FALLBACK_LOG_FILE: &str = "octo-dashboard.log";

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Configured file, or the console when no file is set
    Configured,
    /// Always a file; the terminal belongs to the TUI
    FileOnly,
}

/// Initialize logging system based on configuration
///
/// **Note**: This should be called only once during application startup,
/// after the configuration has been loaded.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_logging(config: &AppConfig, target: LogTarget) -> Result<WorkerGuard> {
    let logging = effective_logging(&config.logging, target);
    let log_file = logging.file.as_deref().filter(|f| !f.is_empty());

    let writer: Box<dyn std::io::Write + Send + Sync> = match log_file {
        Some(log_file) if logging.enable_rotation => {
            let path = Path::new(log_file);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let prefix = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or(TUI_FALLBACK_LOG_FILE)
                .trim_end_matches(".log");
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(prefix)
                .filename_suffix("log")
                .max_log_files(logging.max_backups.max(1) as usize)
                .build(dir)
                .map_err(|e| {
                    DashboardError::file_operation(format!(
                        "Failed to create rolling log appender: {}",
                        e
                    ))
                })?;
            Box::new(appender)
        }
        Some(log_file) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)
                .map_err(|e| {
                    DashboardError::file_operation(format!(
                        "Failed to open log file {}: {}",
                        log_file, e
                    ))
                })?;
            Box::new(file)
        }
        None => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&logging.level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_none());

    let installed = if logging.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| DashboardError::config(format!("Failed to install logger: {}", e)))?;

    Ok(guard)
}

fn effective_logging(logging: &LoggingConfig, target: LogTarget) -> LoggingConfig {
    let mut logging = logging.clone();
    if target == LogTarget::FileOnly && logging.file.as_deref().is_none_or(str::is_empty) {
        logging.file = Some(TUI_FALLBACK_LOG_FILE.to_string());
    }
    logging
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_forces_a_log_file() {
        let logging = LoggingConfig::default();
        let tui = effective_logging(&logging, LogTarget::FileOnly);
        assert_eq!(tui.file.as_deref(), Some(TUI_FALLBACK_LOG_FILE));

        let cli = effective_logging(&logging, LogTarget::Configured);
        assert_eq!(cli.file, None);
    }

    #[test]
    fn test_configured_file_is_kept() {
        let logging = LoggingConfig {
            file: Some("logs/dash.log".into()),
            ..LoggingConfig::default()
        };
        let tui = effective_logging(&logging, LogTarget::FileOnly);
        assert_eq!(tui.file.as_deref(), Some("logs/dash.log"));
    }
}
