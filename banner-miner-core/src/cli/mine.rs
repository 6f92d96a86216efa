use crate::classify::RuleSet;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum MineCmd {
    /// Banner impressions by banner and project
    Impressions(FileArgs),

    /// Impressions of banners served with `hidden=false`, by utm_source and project
    ImpressionsHidden(FileArgs),

    /// Banner impressions by banner, project and country
    ImpressionsGeo(FileArgs),

    /// Fundraiser landing page hits by utm_source, project and landing page
    LandingPages(FileArgs),

    /// Landing page hits from the contribution tracking store
    LandingPagesStore(StoreArgs),
}

#[derive(Args, Debug)]
pub struct FileArgs {
    /// Access log to read; names containing `gz` are decompressed
    pub input: PathBuf,

    /// Only count records logged on this day (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct StoreArgs {
    /// Inclusive lower bound, YYYYMMDDHHMMSS
    #[arg(long)]
    pub start: String,

    /// Exclusive upper bound, YYYYMMDDHHMMSS
    #[arg(long)]
    pub end: String,

    /// Overrides `[store] database_url` from the config file
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

impl MineCmd {
    pub fn rule_set(&self) -> RuleSet {
        match self {
            MineCmd::Impressions(_) => RuleSet::Impressions,
            MineCmd::ImpressionsHidden(_) => RuleSet::ImpressionsHidden,
            MineCmd::ImpressionsGeo(_) => RuleSet::ImpressionsGeo,
            MineCmd::LandingPages(_) => RuleSet::LandingPages,
            MineCmd::LandingPagesStore(_) => RuleSet::LandingPagesStore,
        }
    }
}
