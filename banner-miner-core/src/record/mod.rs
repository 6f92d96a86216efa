//! Raw log rows and the pieces extracted from them.
//!
//! A [`RawRecord`] is one tokenized log line (or one store row). Callers pull
//! URL-valued fields out of it by position and hand them to [`parse_url`],
//! then derive a project/language pair from a referrer with [`classify_host`].

mod date_filter;
mod hostname;
mod parsed_url;
#[cfg(test)]
mod tests;

pub use date_filter::DateFilter;
pub use hostname::{HostClass, classify_host};
pub use parsed_url::{ParsedUrl, parse_url};

/// Placeholder dimension value used when a real value cannot be determined.
pub const NONE: &str = "NONE";

/// One row of fields in source order. Field positions are fixed per log
/// format, see [`crate::conf::LogLayout`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<String>,
}

impl RawRecord {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Field at `index`, or `""` when the row is shorter than that.
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for RawRecord {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl From<&csv::StringRecord> for RawRecord {
    fn from(row: &csv::StringRecord) -> Self {
        row.iter().collect()
    }
}

/// Returns `value`, or the `NONE` sentinel when it is missing or empty.
pub(crate) fn or_none(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NONE.to_string(),
    }
}
