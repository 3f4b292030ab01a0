//! Runtime settings and logging bootstrap.
//!
//! Settings come from the environment, optionally seeded from a `.env` file.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::error::Error;
use std::path::PathBuf;

/// Path of the log4rs YAML file.
pub const LOG_CONFIG_VAR: &str = "CIDRCALC_LOG_CONFIG";
/// Level used when the YAML file cannot be loaded.
pub const LOG_LEVEL_VAR: &str = "CIDRCALC_LOG_LEVEL";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_config: PathBuf,
    pub fallback_level: LevelFilter,
}

impl Settings {
    /// Load `.env` if present, then read settings from the process environment.
    pub fn from_env() -> Settings {
        dotenv::dotenv().ok();
        Settings::from_vars(|key| std::env::var(key).ok())
    }

    /// Build settings from any variable lookup.
    pub fn from_vars<F>(var: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_config = var(LOG_CONFIG_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_CONFIG));

        let fallback_level = match var(LOG_LEVEL_VAR) {
            Some(level) => level.parse().unwrap_or_else(|_| {
                eprintln!(
                    "{LOG_LEVEL_VAR}={level:?} is not a log level, using {DEFAULT_LOG_LEVEL}"
                );
                DEFAULT_LOG_LEVEL
            }),
            None => DEFAULT_LOG_LEVEL,
        };

        Settings {
            log_config,
            fallback_level,
        }
    }
}

/// Initialise log4rs from the configured YAML file, or fall back to stderr.
///
/// Nothing is ever logged to stdout.
pub fn init_logging(settings: &Settings) -> Result<(), Box<dyn Error>> {
    match log4rs::init_file(&settings.log_config, Default::default()) {
        Ok(()) => {
            log::debug!("Logging configured from {}", settings.log_config.display());
        }
        Err(e) => {
            let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
            let config = Config::builder()
                .appender(Appender::builder().build("stderr", Box::new(stderr)))
                .build(
                    Root::builder()
                        .appender("stderr")
                        .build(settings.fallback_level),
                )?;
            log4rs::init_config(config)?;
            log::info!(
                "Could not load {}: {e}; logging to stderr at {}",
                settings.log_config.display(),
                settings.fallback_level
            );
        }
    }
    Ok(())
}
