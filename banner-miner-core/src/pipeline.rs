//! Single-pass run over a record stream.
//!
//! records
//! DateFilter
//! RuleSet::classify
//! CountTable::increment
//!
//! Each record is fully folded into the table before the next one is pulled.

use crate::aggregate::CountTable;
use crate::classify::{Classification, DropReason, RuleSet};
use crate::conf::LogLayout;
use crate::record::{DateFilter, RawRecord};
use indexmap::IndexMap;
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub read: u64,
    pub retained: u64,
    /// Drops per reason, in first-seen order.
    pub dropped: IndexMap<DropReason, u64>,
}

impl RunStats {
    pub fn dropped_total(&self) -> u64 {
        self.dropped.values().sum()
    }

    fn record_drop(&mut self, reason: DropReason) {
        *self.dropped.entry(reason).or_insert(0) += 1;
    }
}

#[derive(Debug)]
pub struct RunOutcome {
    pub table: CountTable,
    pub stats: RunStats,
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    rule_set: RuleSet,
    layout: LogLayout,
    date_filter: DateFilter,
}

impl Pipeline {
    pub fn new(rule_set: RuleSet, layout: LogLayout) -> Self {
        Self {
            rule_set,
            layout,
            date_filter: DateFilter::any(),
        }
    }

    pub fn with_date_filter(mut self, date_filter: DateFilter) -> Self {
        self.date_filter = date_filter;
        self
    }

    pub fn rule_set(&self) -> RuleSet {
        self.rule_set
    }

    /// Classifies one record and folds it into `table`.
    pub fn process(&self, table: &mut CountTable, stats: &mut RunStats, record: &RawRecord) {
        stats.read += 1;

        // Store rows carry no log timestamp.
        if self.rule_set.reads_log_lines()
            && !self.date_filter.accepts(record.field(self.layout.timestamp))
        {
            stats.record_drop(DropReason::WrongDate);
            return;
        }

        match self.rule_set.classify(record, &self.layout) {
            Classification::Count(key) => {
                table.increment(&key);
                stats.retained += 1;
            }
            Classification::Drop(reason) => stats.record_drop(reason),
        }
    }

    pub fn run<I>(&self, records: I) -> RunOutcome
    where
        I: IntoIterator<Item = RawRecord>,
    {
        info!(
            rule_set = %self.rule_set,
            date = %self.date_filter,
            "Classifying records"
        );

        let mut table = CountTable::new();
        let mut stats = RunStats::default();

        for record in records {
            self.process(&mut table, &mut stats, &record);
        }

        for (reason, count) in &stats.dropped {
            debug!(%reason, count, "Dropped records");
        }

        info!(
            read = stats.read,
            retained = stats.retained,
            dropped = stats.dropped_total(),
            rows = table.rows().len(),
            "Run complete"
        );

        RunOutcome { table, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn line(ts: &str, url: &str) -> RawRecord {
        let mut fields = vec!["-".to_string(); 12];
        fields[2] = ts.to_string();
        fields[8] = url.to_string();
        RawRecord::new(fields)
    }

    fn loader(query: &str) -> String {
        format!("http://meta.wikimedia.org/w/index.php?title=Special:BannerLoader&{query}")
    }

    #[test]
    fn identical_records_accumulate_and_noise_is_dropped() {
        // Arrange
        let records = vec![
            line("2011-06-01T00:00:01", &loader("banner=B1&db=enwiki")),
            line("2011-06-01T00:00:02", &loader("banner=B1&db=enwiki")),
            line("2011-06-01T00:00:03", &loader("banner=test&db=enwiki")),
        ];
        let pipeline = Pipeline::new(RuleSet::Impressions, LogLayout::default());

        // Act
        let outcome = pipeline.run(records);

        // Assert
        assert_eq!(outcome.table.count(&["B1", "enwiki"]), 2);
        assert_eq!(outcome.table.rows().len(), 1);
        assert_eq!(outcome.stats.read, 3);
        assert_eq!(outcome.stats.retained, 2);
        assert_eq!(outcome.stats.dropped.get(&DropReason::TestBanner), Some(&1));
    }

    #[test]
    fn date_filter_drops_other_days() {
        let records = vec![
            line("2011-06-01T23:59:59", &loader("banner=B1&db=enwiki")),
            line("2011-06-02T00:00:00", &loader("banner=B1&db=enwiki")),
        ];
        let date = chrono::NaiveDate::from_ymd_opt(2011, 6, 1).unwrap();
        let pipeline = Pipeline::new(RuleSet::Impressions, LogLayout::default())
            .with_date_filter(DateFilter::on(date));

        let outcome = pipeline.run(records);

        assert_eq!(outcome.table.count(&["B1", "enwiki"]), 1);
        assert_eq!(outcome.stats.dropped.get(&DropReason::WrongDate), Some(&1));
    }

    #[test]
    fn date_filter_is_ignored_for_store_rows() {
        let record: RawRecord = ["B1.LP1", "http://en.wikipedia.org/", "en"]
            .into_iter()
            .collect();
        let date = chrono::NaiveDate::from_ymd_opt(2011, 6, 1).unwrap();
        let pipeline = Pipeline::new(RuleSet::LandingPagesStore, LogLayout::default())
            .with_date_filter(DateFilter::on(date));

        let outcome = pipeline.run(vec![record]);

        assert_eq!(outcome.stats.retained, 1);
        assert_eq!(outcome.table.count(&["B1", "en", "wikipedia", "LP1"]), 1);
    }

    #[test]
    fn drop_reasons_keep_first_seen_order() {
        let records = vec![
            line("2011-06-01", &loader("banner=google_ads")),
            line("2011-06-01", &loader("banner=test")),
            line("2011-06-01", &loader("banner=google_ads_2")),
        ];

        let outcome = Pipeline::new(RuleSet::Impressions, LogLayout::default()).run(records);

        let reasons: Vec<(DropReason, u64)> = outcome
            .stats
            .dropped
            .iter()
            .map(|(r, c)| (*r, *c))
            .collect();
        assert_eq!(
            reasons,
            vec![(DropReason::AdNoise, 2), (DropReason::TestBanner, 1)]
        );
        assert_eq!(outcome.stats.dropped_total(), 3);
        assert!(outcome.table.is_empty());
    }
}
