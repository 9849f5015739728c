mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind};
use tracing::debug;

pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
pub const API_URL_ENV: &str = "CARDAMOM_API_URL";

/// Loads the configuration named by `CONFIG_PATH` (default `config.yaml`).
///
/// A missing file yields the defaults; `CARDAMOM_API_URL` overrides the
/// configured base URL either way.
pub async fn load() -> Result<Config> {
    let config_path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_from(&config_path).await?;

    if let Ok(url) = env::var(API_URL_ENV) {
        debug!("Overriding API base URL from {}", API_URL_ENV);
        config.api.base_url = url;
    }

    validate(&config)?;
    Ok(config)
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    match tokio::fs::read_to_string(config_path).await {
        Ok(config_str) => parse(&config_str),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No configuration file at {}, using defaults", config_path);
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn parse(config_str: &str) -> Result<Config> {
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(config_str)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    let base_url = config.api.base_url.trim();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(Error::config(format!(
            "api.base_url must be an http(s) URL, got '{}'",
            config.api.base_url
        )));
    }
    Ok(())
}
