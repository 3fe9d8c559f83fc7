//! Shared fixtures for the data crate's behaviour tests.

use camino::Utf8PathBuf;
use chrono::{DateTime, TimeZone, Utc};
use natureconnect_data::{FixedClock, UserStore};
use tempfile::TempDir;

/// A temporary data directory removed when dropped.
#[derive(Debug)]
pub struct DataDir {
    /// The `data` directory inside the temporary root.
    pub path: Utf8PathBuf,
    _temp: TempDir,
}

impl DataDir {
    /// Create an empty directory whose `data` child does not exist yet.
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap_or_else(|err| panic!("create temporary directory: {err}"));
        let path = Utf8PathBuf::from_path_buf(temp.path().join("data"))
            .unwrap_or_else(|path| panic!("temporary path {path:?} is not UTF-8"));
        Self { path, _temp: temp }
    }

    /// Open a store over this directory with a frozen clock.
    pub fn store(&self) -> UserStore<FixedClock> {
        UserStore::with_clock(&self.path, FixedClock(noon()))
            .unwrap_or_else(|err| panic!("open user store: {err}"))
    }
}

/// The instant every test clock reports.
pub fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("fixed test instant must be valid"))
}
