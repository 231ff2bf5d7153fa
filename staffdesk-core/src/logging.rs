//! Unified logging system
//!
//! Structured logging with configurable level, format, and output target

use serde::{Deserialize, Serialize};
use std::io;
use std::sync::Arc;
use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Whether to include file and line information
    pub include_location: bool,
    /// Whether to log to file
    pub log_to_file: bool,
    /// Log file path (if log_to_file is true)
    pub log_file_path: Option<String>,
    /// Custom filter directives
    pub filter_directives: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            include_location: false,
            log_to_file: false,
            log_file_path: None,
            filter_directives: vec![
                "staffdesk_core=debug".to_string(),
                "staffdesk_session=debug".to_string(),
                "staffdesk_web=debug".to_string(),
            ],
        }
    }
}

/// Initialize the logging system
pub fn init_logging(
    config: &LoggingConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    for directive in &config.filter_directives {
        filter = filter.add_directive(directive.parse()?);
    }

    let writer = if config.log_to_file {
        let log_path = config
            .log_file_path
            .as_ref()
            .ok_or("log_file_path must be specified when log_to_file is true")?;
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;
        BoxMakeWriter::new(Arc::new(file))
    } else {
        BoxMakeWriter::new(io::stdout)
    };

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_writer(writer);
            registry.with(fmt_layer).init();
        }
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .pretty()
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_writer(writer);
            registry.with(fmt_layer).init();
        }
        LogFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_writer(writer);
            registry.with(fmt_layer).init();
        }
    }

    Ok(())
}

/// Logging macros for common patterns
#[macro_export]
macro_rules! log_operation_start {
    ($operation:expr) => {
        tracing::info!(operation = $operation, "Starting operation");
    };
    ($operation:expr, $($field:tt)*) => {
        tracing::info!(operation = $operation, $($field)*, "Starting operation");
    };
}

#[macro_export]
macro_rules! log_operation_success {
    ($operation:expr) => {
        tracing::info!(operation = $operation, "Operation completed successfully");
    };
    ($operation:expr, $($field:tt)*) => {
        tracing::info!(operation = $operation, $($field)*, "Operation completed successfully");
    };
}
