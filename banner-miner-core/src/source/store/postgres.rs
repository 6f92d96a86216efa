use crate::error::MinerError;
use crate::record::RawRecord;
use crate::source::store::{TimeRange, TrackingRow, TrackingStore};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use tracing::{debug, info};

diesel::table! {
    contribution_tracking (id) {
        id -> Int4,
        ts -> Text,
        utm_source -> Nullable<Text>,
        referrer -> Nullable<Text>,
        language -> Nullable<Text>,
    }
}

pub struct PgTrackingStore {
    conn: PgConnection,
}

impl PgTrackingStore {
    pub fn connect(database_url: &str) -> Result<Self, MinerError> {
        let conn = PgConnection::establish(database_url)
            .map_err(|e| MinerError::store(format!("connection failed: {e}")))?;

        info!("Connected to tracking store");
        Ok(Self { conn })
    }
}

impl TrackingStore for PgTrackingStore {
    fn fetch(&mut self, range: &TimeRange) -> Result<Vec<RawRecord>, MinerError> {
        use self::contribution_tracking::dsl::*;

        debug!(%range, "Querying contribution_tracking");

        let rows: Vec<(Option<String>, Option<String>, Option<String>)> = contribution_tracking
            .filter(ts.ge(range.start.as_str()))
            .filter(ts.lt(range.end.as_str()))
            .select((utm_source, referrer, language))
            .load(&mut self.conn)
            .map_err(|e| MinerError::store(format!("query failed: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(utm_source_value, referrer_value, language_value)| {
                RawRecord::from(TrackingRow {
                    utm_source: utm_source_value,
                    referrer: referrer_value,
                    language: language_value,
                })
            })
            .collect())
    }
}
