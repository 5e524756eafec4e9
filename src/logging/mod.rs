//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels
//! - Console output for development
//! - JSON-formatted local file logging with rotation
//!
//! The anonymization engine emits leveled `tracing` events (info on
//! start/completion, debug per transformed column, warn when suppression
//! repair triggers) and never depends on how a subscriber renders them.
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

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};
