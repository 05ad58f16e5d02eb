use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

/// Terminal dashboard for satellite telemetry.
#[derive(Debug, Parser)]
#[command(name = "mission-control", version, about)]
pub struct Cli {
    /// Path to an alternate config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the telemetry service base URL (e.g. http://localhost:8000)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Write logs to this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file and apply command-line overrides on top.
    ///
    /// The merged result is validated again so an override can't slip an
    /// invalid URL past the file checks.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }

        config.validate()?;
        Ok(config)
    }
}
