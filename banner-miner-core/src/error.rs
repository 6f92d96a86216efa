use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MinerError {
    // Sources
    #[error("could not open log file {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("tracking store error: {message}")]
    Store { message: String },

    #[error("store support is not compiled in; rebuild with the `postgres` feature")]
    StoreUnsupported,

    #[error("no database url configured (use --database-url, DATABASE_URL or [store] in the config file)")]
    MissingDatabaseUrl,

    #[error("invalid timestamp '{value}', expected YYYYMMDDHHMMSS")]
    InvalidTimestamp { value: String },

    // Configuration
    #[error("failed to read config file {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML in {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("delimiter must be a single ASCII character, got '{value}'")]
    InvalidDelimiter { value: String },

    // Output
    #[error("failed to write table: {0}")]
    Output(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MinerError {
    pub fn source_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}
