use crate::error::MinerError;
use crate::record::RawRecord;
use chrono::NaiveDateTime;
use std::fmt;

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::PgTrackingStore;

// Store rows are shaped as [utm_source, referrer, language].
pub const UTM_SOURCE_COLUMN: usize = 0;
pub const REFERRER_COLUMN: usize = 1;
pub const LANGUAGE_COLUMN: usize = 2;

const TS_FORMAT: &str = "%Y%m%d%H%M%S";

/// Half-open `[start, end)` range of tracking timestamps (`YYYYMMDDHHMMSS`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl TimeRange {
    pub fn new(start: &str, end: &str) -> Result<Self, MinerError> {
        Ok(Self {
            start: validate_ts(start)?,
            end: validate_ts(end)?,
        })
    }

    pub fn contains(&self, ts: &str) -> bool {
        ts >= self.start.as_str() && ts < self.end.as_str()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

fn validate_ts(value: &str) -> Result<String, MinerError> {
    NaiveDateTime::parse_from_str(value, TS_FORMAT)
        .map(|_| value.to_string())
        .map_err(|_| MinerError::InvalidTimestamp {
            value: value.to_string(),
        })
}

/// One `contribution_tracking` row; NULL columns are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackingRow {
    pub utm_source: Option<String>,
    pub referrer: Option<String>,
    pub language: Option<String>,
}

impl From<TrackingRow> for RawRecord {
    fn from(row: TrackingRow) -> Self {
        [row.utm_source, row.referrer, row.language]
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect()
    }
}

pub trait TrackingStore {
    /// Rows with `start <= ts < end`, in the order the store returns them.
    fn fetch(&mut self, range: &TimeRange) -> Result<Vec<RawRecord>, MinerError>;
}

/// Store backed by a list of `(ts, row)` pairs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rows: Vec<(String, TrackingRow)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ts: impl Into<String>, row: TrackingRow) {
        self.rows.push((ts.into(), row));
    }
}

impl TrackingStore for MemoryStore {
    fn fetch(&mut self, range: &TimeRange) -> Result<Vec<RawRecord>, MinerError> {
        Ok(self
            .rows
            .iter()
            .filter(|(ts, _)| range.contains(ts))
            .map(|(_, row)| RawRecord::from(row.clone()))
            .collect())
    }
}

/// Connects to the tracking database named by `database_url`.
#[cfg(feature = "postgres")]
pub fn connect_store(database_url: &str) -> Result<Box<dyn TrackingStore>, MinerError> {
    Ok(Box::new(PgTrackingStore::connect(database_url)?))
}

#[cfg(not(feature = "postgres"))]
pub fn connect_store(_database_url: &str) -> Result<Box<dyn TrackingStore>, MinerError> {
    Err(MinerError::StoreUnsupported)
}
