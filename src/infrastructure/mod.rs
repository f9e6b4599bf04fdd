//! Infrastructure layer with configuration and timer adapters.

/// Application configuration.
pub mod config;
/// Periodic timers.
pub mod scheduler;

pub use config::{AppConfig, BookingConfig, CliArgs, ConfigError, LogLevel, ConfigStore};
pub use scheduler::{PeriodicTask, TimerEvent, TimerReceiver, TimerSender, timer_channel};
