use std::fs::File;
use std::io::{BufReader, ErrorKind};

use anyhow::Context;
use serde::Deserialize;

use crate::error::GramtuiError;

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Reads `~/.config/gramtui/config.json`. A missing file is fine
    /// and yields the defaults.
    pub fn load() -> Result<Self, GramtuiError> {
        let config_path = dirs::home_dir()
            .ok_or_else(|| GramtuiError::Config("Could not find home directory".to_string()))?
            .join(".config/gramtui/config.json");

        let file = match File::open(&config_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(GramtuiError::Config(format!(
                    "Failed to open config file at {:?}: {}",
                    config_path, e
                )))
            }
        };

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context("Failed to parse config JSON")?;

        Ok(config)
    }
}
