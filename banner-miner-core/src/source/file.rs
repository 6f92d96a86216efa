use crate::error::MinerError;
use crate::record::RawRecord;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Rotated logs are gzipped; their names carry a `gz` marker.
pub fn is_compressed(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().contains("gz"))
        .unwrap_or(false)
}

/// Opens a plain or gzip-compressed log file for lazy row reading.
///
/// A file named as compressed whose content lacks the gzip header is read
/// as plain text.
pub fn open_log(path: &Path, delimiter: u8) -> Result<LogRecords<Box<dyn Read>>, MinerError> {
    let file = File::open(path).map_err(|e| MinerError::source_unavailable(path, e))?;
    let mut file = BufReader::new(file);

    let named_compressed = is_compressed(path);
    let has_gzip_header = file
        .fill_buf()
        .map_err(|e| MinerError::source_unavailable(path, e))?
        .starts_with(&GZIP_MAGIC);
    let compressed = named_compressed && has_gzip_header;

    if named_compressed && !compressed {
        warn!(path = %path.display(), "No gzip header, reading as plain text");
    }

    let reader: Box<dyn Read> = if compressed {
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };

    info!(path = %path.display(), compressed, "Opened log file");

    Ok(LogRecords::from_reader(reader, delimiter))
}

/// Rows of a delimited log stream, yielded one at a time.
///
/// Invalid UTF-8 is replaced rather than rejected; user agents and URLs in
/// access logs are not reliably encoded. A row the CSV parser cannot read is
/// skipped; an I/O failure ends the stream.
pub struct LogRecords<R> {
    rows: csv::ByteRecordsIntoIter<R>,
    done: bool,
}

impl<R: Read> LogRecords<R> {
    pub fn from_reader(reader: R, delimiter: u8) -> Self {
        let rows = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader)
            .into_byte_records();

        Self { rows, done: false }
    }
}

impl<R: Read> Iterator for LogRecords<R> {
    type Item = RawRecord;

    fn next(&mut self) -> Option<RawRecord> {
        while !self.done {
            match self.rows.next()? {
                Ok(row) => {
                    return Some(
                        row.iter()
                            .map(|field| String::from_utf8_lossy(field).into_owned())
                            .collect(),
                    );
                }
                Err(error) if error.is_io_error() => {
                    warn!(%error, "Stopping at unreadable input");
                    self.done = true;
                }
                Err(error) => {
                    warn!(%error, "Skipping unreadable row");
                }
            }
        }
        None
    }
}
