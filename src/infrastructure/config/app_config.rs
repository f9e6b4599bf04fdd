//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::domain::DEFAULT_PICKUP;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, merged from file and CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Booking simulation settings.
    #[serde(default)]
    pub booking: BookingConfig,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Timings and defaults of the simulated booking flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Pickup address a new session starts with.
    #[serde(default = "default_pickup")]
    pub default_pickup: String,

    /// Surge re-sampling period in milliseconds.
    #[serde(default = "default_surge_interval_ms")]
    pub surge_interval_ms: u64,

    /// Match progress tick period in milliseconds.
    #[serde(default = "default_match_tick_ms")]
    pub match_tick_ms: u64,

    /// Percentage points added per match tick.
    #[serde(default = "default_match_step")]
    pub match_step: u8,

    /// Fixed RNG seed for surge sampling.
    #[serde(default)]
    pub surge_seed: Option<u64>,
}

impl BookingConfig {
    /// Period between surge re-samples.
    #[must_use]
    pub const fn surge_interval(&self) -> Duration {
        Duration::from_millis(self.surge_interval_ms)
    }

    /// Period between match progress ticks.
    #[must_use]
    pub const fn match_tick(&self) -> Duration {
        Duration::from_millis(self.match_tick_ms)
    }

    /// Replaces zero periods or steps with their defaults.
    #[must_use]
    pub fn validated(mut self) -> Self {
        if self.surge_interval_ms == 0 {
            warn!("surge_interval_ms must be positive, using default");
            self.surge_interval_ms = default_surge_interval_ms();
        }
        if self.match_tick_ms == 0 {
            warn!("match_tick_ms must be positive, using default");
            self.match_tick_ms = default_match_tick_ms();
        }
        if self.match_step == 0 || self.match_step > 100 {
            warn!(step = self.match_step, "match_step must be within 1..=100, using default");
            self.match_step = default_match_step();
        }
        self
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            default_pickup: default_pickup(),
            surge_interval_ms: default_surge_interval_ms(),
            match_tick_ms: default_match_tick_ms(),
            match_step: default_match_step(),
            surge_seed: None,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Notification duration in seconds.
    #[serde(default = "default_notification_duration")]
    pub notification_duration: u64,

    /// Show the map placeholder panel.
    #[serde(default = "default_true")]
    pub show_map: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_duration: default_notification_duration(),
            show_map: true,
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

fn default_pickup() -> String {
    DEFAULT_PICKUP.to_string()
}

const fn default_surge_interval_ms() -> u64 {
    10_000
}

const fn default_match_tick_ms() -> u64 {
    300
}

const fn default_match_step() -> u8 {
    10
}

fn default_accent_color() -> String {
    "Magenta".to_string()
}

const fn default_true() -> bool {
    true
}

const fn default_notification_duration() -> u64 {
    5
}

use super::args::CliArgs;

impl AppConfig {
    /// Layers CLI overrides on the file config, falls back to `default_log`
    /// when no log path was given, and validates the booking timings.
    #[must_use]
    pub fn resolve(mut self, args: &CliArgs, default_log: Option<&Path>) -> Self {
        self.merge_with_args(args);
        if self.log_path.is_none() {
            self.log_path = default_log.map(Path::to_path_buf);
        }
        self.booking = self.booking.validated();
        self
    }

    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(pickup) = &args.pickup {
            self.booking.default_pickup = pickup.clone();
        }
        if let Some(surge_interval_ms) = args.surge_interval_ms {
            self.booking.surge_interval_ms = surge_interval_ms;
        }
        if let Some(match_tick_ms) = args.match_tick_ms {
            self.booking.match_tick_ms = match_tick_ms;
        }
        if let Some(match_step) = args.match_step {
            self.booking.match_step = match_step;
        }
        if let Some(seed) = args.surge_seed {
            self.booking.surge_seed = Some(seed);
        }
        if let Some(notification_duration) = args.notification_duration {
            self.ui.notification_duration = notification_duration;
        }
        if let Some(show_map) = args.show_map {
            self.ui.show_map = show_map;
        }
        if let Some(accent_color) = &args.accent_color {
            self.theme.accent_color = accent_color.clone();
        }
    }

    /// How long a notice stays on screen.
    #[must_use]
    pub const fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.ui.notification_duration)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            booking: BookingConfig::default(),
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}
