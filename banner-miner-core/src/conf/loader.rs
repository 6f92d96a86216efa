use crate::conf::{InputConfig, LogLayout, StoreConfig};
use crate::error::MinerError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct MinerConfig {
    pub input: InputConfig,
    pub layout: LogLayout,
    pub store: StoreConfig,
}

impl MinerConfig {
    pub fn from_file(path: &Path) -> Result<Self, MinerError> {
        let contents = fs::read_to_string(path).map_err(|e| MinerError::ReadConfig {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: MinerConfig = toml::from_str(&contents).map_err(|e| MinerError::ParseConfig {
            path: path.to_path_buf(),
            source: e,
        })?;

        // Fail at load time rather than on the first row.
        config.input.delimiter_byte()?;

        Ok(config)
    }
}

/// Loads the config file when one is given, otherwise the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<MinerConfig, MinerError> {
    match path {
        Some(path) => MinerConfig::from_file(path),
        None => Ok(MinerConfig::default()),
    }
}
