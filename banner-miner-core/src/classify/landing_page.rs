use crate::classify::{Classification, DropReason};
use crate::conf::LogLayout;
use crate::record::{RawRecord, classify_host, or_none, parse_url};
use crate::source::store::{LANGUAGE_COLUMN, REFERRER_COLUMN, UTM_SOURCE_COLUMN};

const FUNDRAISER_PREFIX: &str = "2010";

// An unescaped delimiter inside utm_source makes the following parameter
// decode into its value, leaving this marker behind.
const CORRUPTION_MARKER: &str = "utm_campaign";

/// `utm_source`, `project`, `landing_page` for fundraiser landing page hits.
pub(super) fn classify_file(record: &RawRecord, layout: &LogLayout) -> Classification {
    let landing = parse_url(record.field(layout.landing_url));
    let utm_source = landing.query_value("utm_source").unwrap_or("");

    if !utm_source.starts_with(FUNDRAISER_PREFIX) {
        return Classification::Drop(DropReason::NotCampaignSource);
    }
    if utm_source.contains(CORRUPTION_MARKER) {
        return Classification::Drop(DropReason::CorruptCampaignToken);
    }

    let referrer = parse_url(record.field(layout.referrer_url));
    let host = classify_host(referrer.host.as_deref());

    Classification::Count(vec![
        utm_source.to_string(),
        host.project,
        or_none(landing.path_segment(2)),
    ])
}

/// `utm_source` prefix, `language`, `project`, `utm_source` suffix for a
/// tracking store row. The suffix is the second `.`-separated token.
pub(super) fn classify_store(record: &RawRecord) -> Classification {
    let referrer = parse_url(record.field(REFERRER_COLUMN));
    let host = classify_host(referrer.host.as_deref());

    let mut tokens = record.field(UTM_SOURCE_COLUMN).split('.');
    let prefix = or_none(tokens.next());
    let suffix = or_none(tokens.next());

    Classification::Count(vec![
        prefix,
        or_none(Some(record.field(LANGUAGE_COLUMN))),
        host.project,
        suffix,
    ])
}
