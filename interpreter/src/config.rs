// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::Path;

use log::debug;
use ozul::ConfigRoot;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "ozul.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {CONFIG_FILE_NAME}: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {CONFIG_FILE_NAME}: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Loads the `ozul.toml` in the given directory. A missing file yields the
/// default configuration.
pub fn load_config(directory: &Path) -> Result<ConfigRoot, ConfigError> {
    let path = directory.join(CONFIG_FILE_NAME);

    if !path.exists() {
        debug!("No {CONFIG_FILE_NAME} found in {}", directory.display());
        return Ok(ConfigRoot::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<ConfigRoot, ConfigError> {
    Ok(toml::from_str(contents)?)
}
