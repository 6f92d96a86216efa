use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// One squid access-log line in the space-delimited layout the miner reads:
/// timestamp at field 2, request URL at field 8, referrer at field 11.
pub fn squid_line(ts: &str, url: &str, referrer: &str) -> String {
    format!(
        "sq63.wikimedia.org 757675855 {ts} 0 187.57.227.121 TCP_MEM_HIT/200 1790 GET {url} NONE/- text/javascript {referrer} - Mozilla/5.0%20(Windows%20NT%206.1)"
    )
}

pub fn loader_url(query: &str) -> String {
    format!("http://meta.wikimedia.org/w/index.php?title=Special:BannerLoader&{query}")
}

/// Log lines written into a scratch directory as plain or gzip files.
pub struct LogFixture {
    dir: TempDir,
    lines: Vec<String>,
}

impl Default for LogFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl LogFixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn impression(self, ts: &str, query: &str) -> Self {
        self.line(squid_line(ts, &loader_url(query), "http://en.wikipedia.org/wiki/Foo"))
    }

    pub fn landing(self, ts: &str, landing_url: &str, referrer: &str) -> Self {
        self.line(squid_line(ts, landing_url, referrer))
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    fn contents(&self) -> String {
        let mut s = self.lines.join("\n");
        s.push('\n');
        s
    }

    pub fn write_plain(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, self.contents()).unwrap();
        path
    }

    pub fn write_gzip(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(self.contents().as_bytes()).unwrap();
        fs::write(&path, encoder.finish().unwrap()).unwrap();
        path
    }
}
