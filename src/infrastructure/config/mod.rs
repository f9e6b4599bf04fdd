//! Application configuration.

/// Config file schema and CLI merge.
pub mod app_config;
/// Command-line arguments.
pub mod args;
/// Config and log file locations.
pub mod storage;

pub use app_config::{AppConfig, BookingConfig, LogLevel, ThemeConfig, UiConfig};
pub use args::CliArgs;
pub use storage::{ConfigError, ConfigStore};
