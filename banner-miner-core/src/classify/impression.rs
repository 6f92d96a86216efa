use crate::classify::{Classification, DropReason};
use crate::record::{NONE, ParsedUrl, or_none};

fn banner_noise(banner: &str) -> Option<DropReason> {
    if banner == "test" {
        Some(DropReason::TestBanner)
    } else if banner.contains("google_ads") {
        Some(DropReason::AdNoise)
    } else {
        None
    }
}

fn non_empty<'a>(url: &'a ParsedUrl, key: &str) -> Option<&'a str> {
    url.query_value(key).filter(|v| !v.is_empty())
}

/// `banner`, `project` from the banner loader query.
pub(super) fn classify_basic(url: &ParsedUrl) -> Classification {
    let banner = or_none(url.query_value("banner"));

    if let Some(reason) = banner_noise(&banner) {
        return Classification::Drop(reason);
    }

    Classification::Count(vec![banner, or_none(url.query_value("db"))])
}

/// Same shape as [`classify_basic`] but the banner comes from `utm_source`
/// and only requests explicitly marked `hidden=false` count.
pub(super) fn classify_hidden(url: &ParsedUrl) -> Classification {
    if url.query_value("hidden") != Some("false") {
        return Classification::Drop(DropReason::HiddenBanner);
    }

    let banner = or_none(url.query_value("utm_source"));
    if banner == "test" {
        return Classification::Drop(DropReason::TestBanner);
    }

    Classification::Count(vec![banner, or_none(url.query_value("db"))])
}

/// `banner`, `project`, `country`, where `project` falls back to the v1
/// loader's `sitename`. Non-geo requests (`userlang=pt`) carry no country.
pub(super) fn classify_geo(url: &ParsedUrl) -> Classification {
    let banner = or_none(url.query_value("banner"));

    if let Some(reason) = banner_noise(&banner) {
        return Classification::Drop(reason);
    }

    let project = non_empty(url, "db")
        .or_else(|| non_empty(url, "sitename"))
        .unwrap_or(NONE)
        .to_string();

    if url.query_value("userlang") == Some("pt") {
        return Classification::Count(vec![banner, project]);
    }

    Classification::Count(vec![banner, project, or_none(url.query_value("country"))])
}
