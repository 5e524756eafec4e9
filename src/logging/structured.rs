//! Structured logging setup using tracing
//!
//! This module provides structured logging with configurable log levels,
//! console output for development, and optional JSON file logging with
//! rotation. The engine itself only emits `tracing` events; whether and
//! how they are rendered is decided here, by the embedding application.
//!
//! # Example
//!
//! ```no_run
//! use veil::config::LoggingConfig;
//! use veil::logging::init_logging;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging(&config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

use crate::config::LoggingConfig;
use crate::domain::errors::ConfigurationError;
use crate::domain::result::Result;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Guard that must be kept alive for the duration of the program
/// to ensure logs are flushed properly
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    fn new(file_guard: Option<WorkerGuard>) -> Self {
        Self {
            _file_guard: file_guard,
        }
    }
}

/// Initialize the logging system based on configuration
///
/// Sets up a console layer (always) and a JSON rolling-file layer when
/// `local_enabled` is set. Call once per process; the returned
/// [`LoggingGuard`] must be kept alive so file logs flush on shutdown.
///
/// # Errors
///
/// Returns a configuration error for an unknown log level or when the
/// log directory cannot be created.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard> {
    let log_level = parse_log_level(&config.level)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("veil={}", log_level)));

    let mut layers = Vec::new();

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_filter(env_filter.clone());
    layers.push(console_layer.boxed());

    let file_guard = if config.local_enabled {
        let rotation = match config.local_rotation.as_str() {
            "hourly" => Rotation::HOURLY,
            _ => Rotation::DAILY,
        };

        std::fs::create_dir_all(&config.local_path).map_err(|e| {
            ConfigurationError::Io {
                path: config.local_path.clone(),
                message: format!("Failed to create log directory: {e}"),
            }
        })?;

        let file_appender = RollingFileAppender::new(rotation, &config.local_path, "veil.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(non_blocking)
            .with_filter(env_filter);

        layers.push(file_layer.boxed());
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry().with(layers).init();

    tracing::info!(
        level = %config.level,
        local_enabled = config.local_enabled,
        local_path = %config.local_path,
        "Logging initialized"
    );

    Ok(LoggingGuard::new(file_guard))
}

/// Parse log level from string
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(ConfigurationError::Parse(format!(
            "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
            level_str
        ))
        .into()),
    }
}
