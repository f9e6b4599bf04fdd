use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(
    name = "rideai",
    version,
    about = "A terminal mock-up of an AI-assisted ride sharing booking flow",
    long_about = None
)]
/// Command-line overrides for the config file.
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Pickup address to start with.
    #[arg(long, value_name = "ADDRESS")]
    pub pickup: Option<String>,

    /// Surge re-sampling period in milliseconds.
    #[arg(long, value_name = "MS")]
    pub surge_interval_ms: Option<u64>,

    /// Match progress tick period in milliseconds.
    #[arg(long, value_name = "MS")]
    pub match_tick_ms: Option<u64>,

    /// Percentage points added per match tick.
    #[arg(long, value_name = "PERCENT")]
    pub match_step: Option<u8>,

    /// Seed for surge sampling.
    #[arg(long, env = "RIDEAI_SURGE_SEED")]
    pub surge_seed: Option<u64>,

    /// Notification duration in seconds.
    #[arg(long)]
    pub notification_duration: Option<u64>,

    /// Show the map placeholder panel.
    #[arg(long)]
    pub show_map: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let args = CliArgs::parse_from([
            "rideai",
            "--match-tick-ms",
            "100",
            "--show-map",
            "false",
            "--log-level",
            "debug",
        ]);

        assert_eq!(args.match_tick_ms, Some(100));
        assert_eq!(args.show_map, Some(false));
        assert_eq!(args.log_level, Some(LogLevel::Debug));
        assert!(args.pickup.is_none());
    }
}
