use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use rideai::infrastructure::{AppConfig, CliArgs, ConfigError, ConfigStore};
use rideai::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> (AppConfig, Option<ConfigError>) {
    let store = match ConfigStore::locate() {
        Ok(store) => store,
        Err(e) => return (AppConfig::default().resolve(args, None), Some(e)),
    };
    let log_file = Some(store.log_file());

    match store.read(args.config.as_deref()) {
        Ok(file) => (file.resolve(args, log_file), None),
        Err(e) => (AppConfig::default().resolve(args, log_file), Some(e)),
    }
}

fn create_app() -> Result<App> {
    let args = CliArgs::parse();

    let (config, load_error) = load_config(&args);

    init_logging(&config)?;

    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    info!(version = rideai::VERSION, "Starting RideAI");

    Ok(App::new(&config))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
