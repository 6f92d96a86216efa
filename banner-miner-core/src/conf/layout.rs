use crate::error::MinerError;
use serde::Deserialize;

/// Zero-based field positions inside one access-log line.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LogLayout {
    pub timestamp: usize,
    /// Banner loader URL for impression logs, landing URL for landing page logs.
    pub landing_url: usize,
    pub referrer_url: usize,
}

impl Default for LogLayout {
    fn default() -> Self {
        Self {
            timestamp: 2,
            landing_url: 8,
            referrer_url: 11,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub delimiter: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: " ".to_string(),
        }
    }
}

impl InputConfig {
    pub fn delimiter_byte(&self) -> Result<u8, MinerError> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(MinerError::InvalidDelimiter {
                value: self.delimiter.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub database_url: Option<String>,
}
