// src/tests/utils.rs
use std::fs::{File, FileTimes};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::errors::ScrapeError;
use crate::scrape::source::{ScrapeParams, ScrapeSource};
use crate::table::DataTable;

/// Fresh directory under the system temp dir, unique per call.
pub fn temp_dir(label: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "{label}_{}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&path).expect("failed to create temp dir");
    path
}

pub fn row(cells: &[&str]) -> Vec<Option<String>> {
    cells.iter().map(|c| Some((*c).to_string())).collect()
}

/// Push a file's modification time `days` into the past.
pub fn backdate(path: &Path, days: u64) {
    let file = File::options()
        .write(true)
        .open(path)
        .expect("failed to open file for backdating");
    let past = SystemTime::now() - Duration::from_secs(days * 86_400);
    file.set_times(FileTimes::new().set_modified(past))
        .expect("failed to set mtime");
}

/// Small listing table with the columns validation and filtering expect.
pub fn listing_table() -> DataTable {
    let mut table = DataTable::new(["address", "price", "lat", "lon"]);
    table
        .push_row(row(&["100 Elm St", "450000", "32.8", "-97.0"]))
        .unwrap();
    table
        .push_row(row(&["200 Oak Ave", "350000", "32.9", "-96.9"]))
        .unwrap();
    table
}

/// Source that counts fetches and returns a canned table.
pub struct CountingSource {
    pub fetches: usize,
    pub table: DataTable,
}

impl CountingSource {
    pub fn new(table: DataTable) -> Self {
        Self { fetches: 0, table }
    }
}

impl ScrapeSource for CountingSource {
    type Raw = DataTable;

    fn name(&self) -> &'static str {
        "CountingSource"
    }

    fn fetch(&mut self, _params: &ScrapeParams) -> Result<DataTable, ScrapeError> {
        self.fetches += 1;
        Ok(self.table.clone())
    }

    fn parse(&self, raw: DataTable) -> Result<DataTable, ScrapeError> {
        Ok(raw)
    }
}

/// Serve exactly one canned HTTP response on a local port, then shut down.
/// Returns the URL to hit and the server thread's handle.
pub fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind stub listener");
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            // One read is enough; the whole GET request fits in a segment.
            let mut buf = [0u8; 2048];
            let _ = stream.read(&mut buf);
            let response = format!(
                "{status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    (format!("http://{addr}/"), handle)
}
