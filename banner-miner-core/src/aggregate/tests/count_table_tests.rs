use crate::aggregate::{CountTable, OutputRow};
use pretty_assertions::assert_eq;

fn key(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

fn row(parts: &[&str], count: u64) -> OutputRow {
    OutputRow {
        dimensions: key(parts),
        count,
    }
}

#[test]
fn empty_table_has_no_rows() {
    let table = CountTable::new();

    assert!(table.is_empty());
    assert!(table.rows().is_empty());
}

#[test]
fn increment_creates_missing_levels() {
    // Arrange
    let mut table = CountTable::new();

    // Act
    table.increment(&key(&["B1", "enwiki"]));

    // Assert
    assert_eq!(table.count(&["B1", "enwiki"]), 1);
    assert_eq!(table.count(&["B1"]), 0);
    assert_eq!(table.count(&["B2", "enwiki"]), 0);
}

#[test]
fn repeated_key_accumulates() {
    let mut table = CountTable::new();

    table.increment(&key(&["B1", "enwiki"]));
    table.increment(&key(&["B1", "enwiki"]));

    assert_eq!(table.rows(), vec![row(&["B1", "enwiki"], 2)]);
}

#[test]
fn rows_follow_first_seen_order_not_lexicographic() {
    // Arrange
    let keys = [
        ["zz", "dewiki"],
        ["aa", "enwiki"],
        ["zz", "commons"],
        ["aa", "enwiki"],
        ["zz", "dewiki"],
    ];

    // Act
    let table = keys
        .iter()
        .fold(CountTable::new(), |table, k| table.with(&key(k)));

    // Assert
    assert_eq!(
        table.rows(),
        vec![
            row(&["zz", "dewiki"], 2),
            row(&["zz", "commons"], 1),
            row(&["aa", "enwiki"], 2),
        ]
    );
}

#[test]
fn mixed_depth_keys_are_counted_separately() {
    let mut table = CountTable::new();

    table.increment(&key(&["B1", "ptwiki"]));
    table.increment(&key(&["B1", "enwiki", "US"]));
    table.increment(&key(&["B1", "enwiki", "GB"]));

    assert_eq!(
        table.rows(),
        vec![
            row(&["B1", "ptwiki"], 1),
            row(&["B1", "enwiki", "US"], 1),
            row(&["B1", "enwiki", "GB"], 1),
        ]
    );
    assert_eq!(table.total(), 3);
}

#[test]
fn short_key_after_longer_sibling_keeps_first_seen_position() {
    // Arrange
    let mut table = CountTable::new();

    // Act
    table.increment(&key(&["B1", "ptwiki", "US"]));
    table.increment(&key(&["B1", "ptwiki"]));
    table.increment(&key(&["B1", "ptwiki", "GB"]));
    table.increment(&key(&["B1", "ptwiki"]));

    // Assert
    assert_eq!(
        table.rows(),
        vec![
            row(&["B1", "ptwiki", "US"], 1),
            row(&["B1", "ptwiki"], 2),
            row(&["B1", "ptwiki", "GB"], 1),
        ]
    );
}

#[test]
fn short_key_before_longer_sibling_is_emitted_first() {
    let mut table = CountTable::new();

    table.increment(&key(&["B1", "ptwiki"]));
    table.increment(&key(&["B1", "ptwiki", "BR"]));

    assert_eq!(
        table.rows(),
        vec![row(&["B1", "ptwiki"], 1), row(&["B1", "ptwiki", "BR"], 1)]
    );
}

#[test]
fn folding_the_same_records_twice_doubles_every_count() {
    // Arrange
    let keys = [
        key(&["B1", "enwiki"]),
        key(&["B2", "dewiki"]),
        key(&["B1", "enwiki"]),
        key(&["B1", "frwiki"]),
    ];
    let once = keys.iter().fold(CountTable::new(), |t, k| t.with(k));

    // Act
    let twice = keys.iter().fold(once.clone(), |t, k| t.with(k));

    // Assert
    let doubled: Vec<OutputRow> = once
        .rows()
        .into_iter()
        .map(|r| OutputRow {
            count: r.count * 2,
            ..r
        })
        .collect();
    assert_eq!(twice.rows(), doubled);
    assert_eq!(twice.total(), 2 * once.total());
}
