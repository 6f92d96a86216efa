use crate::aggregate::CountTable;
use crate::error::MinerError;
use std::io;

/// Writes `table` as CSV: a header of `dimensions` plus `count`, then one row
/// per counted key path. Rows shorter than the header are padded with empty
/// cells so `count` is always the last column.
///
/// Returns the number of data rows written.
pub fn write_table<W: io::Write>(
    table: &CountTable,
    dimensions: &[&str],
    writer: W,
) -> Result<usize, MinerError> {
    let mut out = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = dimensions.to_vec();
    header.push("count");
    out.write_record(&header)?;

    let rows = table.rows();
    for row in &rows {
        let mut record = row.dimensions.clone();
        if record.len() < dimensions.len() {
            record.resize(dimensions.len(), String::new());
        }
        record.push(row.count.to_string());
        out.write_record(&record)?;
    }

    out.flush()?;
    Ok(rows.len())
}
