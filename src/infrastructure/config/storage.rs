//! On-disk locations for `config.toml` and the log file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{info, warn};

use super::app_config::AppConfig;

const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "rideai";
const APP_NAME: &str = "rideai";
const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_FILE_NAME: &str = "rideai.log";

/// Failure to locate, read or create the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No home directory to derive the platform directories from.
    #[error("could not resolve the rideai config and data directories")]
    NoProjectDirs,
    /// Reading the file or writing the default failed.
    #[error("config file {path}: {source}")]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The default configuration could not be rendered as TOML.
    #[error("could not render default config: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Where `rideai` keeps its config file and its log.
///
/// The platform directories are resolved once, in [`ConfigStore::locate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    config_file: PathBuf,
    log_file: PathBuf,
}

impl ConfigStore {
    /// Resolves the per-user config and data directories.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoProjectDirs`] when no home directory is known.
    pub fn locate() -> Result<Self, ConfigError> {
        let dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .ok_or(ConfigError::NoProjectDirs)?;
        Ok(Self::in_dirs(dirs.config_dir(), dirs.data_dir()))
    }

    /// Places the config file in `config_dir` and the log in `data_dir`.
    #[must_use]
    pub fn in_dirs(config_dir: &Path, data_dir: &Path) -> Self {
        Self {
            config_file: config_dir.join(CONFIG_FILE_NAME),
            log_file: data_dir.join(LOG_FILE_NAME),
        }
    }

    /// Default `config.toml` location.
    #[must_use]
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Log file used when `--log-path` is not given.
    #[must_use]
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Reads the file layer of the configuration.
    ///
    /// `path_override` (from `--config`) replaces the default location. A
    /// missing file is created with the defaults. A file that does not parse
    /// is left untouched and the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the default cannot be written.
    pub fn read(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let path = path_override.unwrap_or(&self.config_file);

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = AppConfig::default();
                write_default(path, &config)?;
                info!(path = %path.display(), "Wrote default config");
                return Ok(config);
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Ok(toml::from_str(&content).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Config file does not parse, using defaults");
            AppConfig::default()
        }))
    }
}

/// Writes `config` next to `path` and renames it into place.
fn write_default(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    let rendered = toml::to_string_pretty(config)?;
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(io_err)?;

    let mut staged = NamedTempFile::new_in(dir).map_err(io_err)?;
    staged.write_all(rendered.as_bytes()).map_err(io_err)?;
    staged.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
