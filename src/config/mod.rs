//! Configuration management
//!
//! Loads and validates the crate-level configuration: the anonymization
//! engine settings plus the logging setup. Configuration comes from a
//! TOML file with `${VAR}` environment substitution and `VEIL_*`
//! environment overrides.

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{LoggingConfig, VeilConfig};
