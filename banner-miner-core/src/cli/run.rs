use crate::aggregate::write_table;
use crate::classify::RuleSet;
use crate::cli::MineCmd;
use crate::conf::{MinerConfig, load_config};
use crate::error::MinerError;
use crate::pipeline::{Pipeline, RunStats};
use crate::record::DateFilter;
use crate::source::{TimeRange, TrackingStore, connect_store, open_log};
use anyhow::Result;
use chrono::NaiveDate;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Runs one mining command and writes its table to stdout.
pub fn run_mine(cmd: MineCmd, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let rule_set = cmd.rule_set();
    let stdout = io::stdout().lock();

    match cmd {
        MineCmd::Impressions(args)
        | MineCmd::ImpressionsHidden(args)
        | MineCmd::ImpressionsGeo(args)
        | MineCmd::LandingPages(args) => {
            run_file(rule_set, &args.input, args.date, &config, stdout)?;
        }
        MineCmd::LandingPagesStore(args) => {
            let range = TimeRange::new(&args.start, &args.end)?;
            let database_url = args
                .database_url
                .or(config.store.database_url)
                .ok_or(MinerError::MissingDatabaseUrl)?;

            let mut store = connect_store(&database_url)?;
            run_store(store.as_mut(), &range, stdout)?;
        }
    }

    Ok(())
}

/// Mines a log file with `rule_set` and writes the resulting table.
pub fn run_file<W: Write>(
    rule_set: RuleSet,
    input: &Path,
    date: Option<NaiveDate>,
    config: &MinerConfig,
    out: W,
) -> Result<RunStats, MinerError> {
    let delimiter = config.input.delimiter_byte()?;
    let records = open_log(input, delimiter)?;

    let outcome = Pipeline::new(rule_set, config.layout)
        .with_date_filter(DateFilter::from_option(date))
        .run(records);

    let rows = write_table(&outcome.table, rule_set.dimensions(), out)?;
    info!(rows, "Table written");

    Ok(outcome.stats)
}

/// Mines the tracking store over `range` and writes the resulting table.
pub fn run_store<W: Write>(
    store: &mut dyn TrackingStore,
    range: &TimeRange,
    out: W,
) -> Result<RunStats, MinerError> {
    info!(%range, "Fetching tracking rows");
    let records = store.fetch(range)?;

    let rule_set = RuleSet::LandingPagesStore;
    let outcome = Pipeline::new(rule_set, Default::default()).run(records);

    let rows = write_table(&outcome.table, rule_set.dimensions(), out)?;
    info!(rows, "Table written");

    Ok(outcome.stats)
}
