//! Rule sets that turn one record into either a dimension tuple or a drop.
//!
//! Every rule set follows the same contract ([`RuleSet::classify`]); they only
//! differ in which fields they read, which records count as noise, and which
//! dimensions they produce. The dimension order doubles as the aggregation
//! hierarchy and the output column order.

mod impression;
mod landing_page;

use crate::conf::LogLayout;
use crate::record::{RawRecord, parse_url};
use std::fmt;

/// Ordered classification values, each a real value or the `NONE` sentinel.
pub type DimensionTuple = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleSet {
    /// Banner impressions keyed by `banner`, `db`.
    Impressions,
    /// Impressions keyed by `utm_source`, `db`; only `hidden=false` requests count.
    ImpressionsHidden,
    /// Impressions with a country breakdown, except for non-geo (`userlang=pt`) requests.
    ImpressionsGeo,
    /// Landing page hits from log files, fundraiser (`2010*`) sources only.
    LandingPages,
    /// Landing page hits from the tracking store.
    LandingPagesStore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Count(DimensionTuple),
    Drop(DropReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropReason {
    WrongDate,
    TestBanner,
    AdNoise,
    HiddenBanner,
    NotCampaignSource,
    CorruptCampaignToken,
}

impl DropReason {
    pub fn as_str(self) -> &'static str {
        match self {
            DropReason::WrongDate => "wrong_date",
            DropReason::TestBanner => "test_banner",
            DropReason::AdNoise => "ad_noise",
            DropReason::HiddenBanner => "hidden_banner",
            DropReason::NotCampaignSource => "not_campaign_source",
            DropReason::CorruptCampaignToken => "corrupt_campaign_token",
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RuleSet {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleSet::Impressions => "impressions",
            RuleSet::ImpressionsHidden => "impressions-hidden",
            RuleSet::ImpressionsGeo => "impressions-geo",
            RuleSet::LandingPages => "landing-pages",
            RuleSet::LandingPagesStore => "landing-pages-store",
        }
    }

    /// Column names in key order. For [`RuleSet::ImpressionsGeo`] this is the
    /// widest shape; non-geo tuples stop one short.
    pub fn dimensions(self) -> &'static [&'static str] {
        match self {
            RuleSet::Impressions | RuleSet::ImpressionsHidden => &["banner", "project"],
            RuleSet::ImpressionsGeo => &["banner", "project", "country"],
            RuleSet::LandingPages => &["utm_source", "project", "landing_page"],
            RuleSet::LandingPagesStore => {
                &["utm_source", "language", "project", "utm_source_suffix"]
            }
        }
    }

    /// Whether records come from access-log lines (and carry a timestamp
    /// field the date filter can look at) rather than from the store.
    pub fn reads_log_lines(self) -> bool {
        !matches!(self, RuleSet::LandingPagesStore)
    }

    pub fn classify(self, record: &RawRecord, layout: &LogLayout) -> Classification {
        match self {
            RuleSet::Impressions => {
                impression::classify_basic(&parse_url(record.field(layout.landing_url)))
            }
            RuleSet::ImpressionsHidden => {
                impression::classify_hidden(&parse_url(record.field(layout.landing_url)))
            }
            RuleSet::ImpressionsGeo => {
                impression::classify_geo(&parse_url(record.field(layout.landing_url)))
            }
            RuleSet::LandingPages => landing_page::classify_file(record, layout),
            RuleSet::LandingPagesStore => landing_page::classify_store(record),
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
