use banner_miner_core::classify::RuleSet;
use banner_miner_core::cli::run_file;
use banner_miner_core::conf::MinerConfig;
use banner_miner_core::pipeline::RunStats;
use chrono::NaiveDate;
use std::path::Path;

/// Runs `rule_set` over `input` and returns the emitted CSV.
#[allow(dead_code)]
pub fn mine(rule_set: RuleSet, input: &Path) -> String {
    mine_with(rule_set, input, None, &MinerConfig::default()).0
}

#[allow(dead_code)]
pub fn mine_with(
    rule_set: RuleSet,
    input: &Path,
    date: Option<NaiveDate>,
    config: &MinerConfig,
) -> (String, RunStats) {
    let mut out = Vec::new();
    let stats = run_file(rule_set, input, date, config, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), stats)
}
