use chrono::NaiveDate;
use std::fmt;

/// Keeps only records whose timestamp starts with a target `YYYY-MM-DD`.
///
/// This is a plain prefix comparison on the raw timestamp field; no timezone
/// or calendar handling happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateFilter {
    target: Option<String>,
}

impl DateFilter {
    /// Accepts every record.
    pub fn any() -> Self {
        Self { target: None }
    }

    pub fn on(date: NaiveDate) -> Self {
        Self {
            target: Some(date.format("%Y-%m-%d").to_string()),
        }
    }

    pub fn from_option(date: Option<NaiveDate>) -> Self {
        date.map(Self::on).unwrap_or_default()
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    pub fn accepts(&self, timestamp: &str) -> bool {
        match &self.target {
            None => true,
            Some(target) => timestamp.get(..10) == Some(target.as_str()),
        }
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Some(target) => f.write_str(target),
            None => f.write_str("any"),
        }
    }
}
