//! The sample trail and event catalogue, stored as CSV files in the data
//! directory.
//!
//! Each file is written from the built-in seed the first time it is needed.
//! Existing files are never overwritten, so hand-edited catalogues survive.
//! Rows that fail to decode are logged and skipped; duplicate identifiers
//! are rejected because favourites and registrations refer to records by id.

mod seed;

use std::collections::HashSet;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8;
use chrono::NaiveDate;
use log::{debug, warn};
use natureconnect_core::{Catalogue, Event, Trail};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use natureconnect_fs::{open_data_dir, read_optional, replace_file};

/// File name of the trail catalogue inside the data directory.
pub const TRAILS_FILE: &str = "sample_trails.csv";
/// File name of the event catalogue inside the data directory.
pub const EVENTS_FILE: &str = "sample_events.csv";

/// Errors raised while loading or seeding the sample catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// The data directory could not be opened or a file could not be read
    /// or written.
    #[error("failed to access catalogue file {path}: {source}")]
    Io {
        /// File or directory being accessed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The CSV header or encoding was unusable.
    #[error("failed to process CSV in {path}: {source}")]
    Csv {
        /// File being read or written.
        path: Utf8PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
    /// Two records shared an identifier.
    #[error("catalogue file {path} contains id {id} more than once")]
    DuplicateId {
        /// File holding the duplicate.
        path: Utf8PathBuf,
        /// The repeated identifier.
        id: u64,
    },
}

/// Trails and events loaded from the data directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleCatalogue {
    trails: Vec<Trail>,
    events: Vec<Event>,
}

impl SampleCatalogue {
    /// Load both catalogue files from `data_dir`, writing any missing file
    /// from the built-in seed first. Seeded event dates count forward from
    /// `today`.
    ///
    /// # Errors
    /// Returns [`CatalogueError`] when the directory or files cannot be
    /// accessed, a CSV header is unusable or an identifier is repeated.
    ///
    /// # Examples
    /// ```no_run
    /// use camino::Utf8Path;
    /// use chrono::Utc;
    /// use natureconnect_core::Catalogue;
    /// use natureconnect_data::SampleCatalogue;
    ///
    /// # fn main() -> Result<(), natureconnect_data::CatalogueError> {
    /// let catalogue = SampleCatalogue::open_or_seed(Utf8Path::new("data"), Utc::now().date_naive())?;
    /// assert!(!catalogue.trails().is_empty());
    /// # Ok(())
    /// # }
    /// ```
    pub fn open_or_seed(data_dir: &Utf8Path, today: NaiveDate) -> Result<Self, CatalogueError> {
        let dir = open_data_dir(data_dir).map_err(|source| CatalogueError::Io {
            path: data_dir.to_path_buf(),
            source,
        })?;
        let trails = CatalogueFile::new(&dir, data_dir, TRAILS_FILE)
            .load_or_seed(seed::trails, |trail: &Trail| trail.id)?;
        let events = CatalogueFile::new(&dir, data_dir, EVENTS_FILE)
            .load_or_seed(|| seed::events(today), |event: &Event| event.id)?;
        Ok(Self { trails, events })
    }

    /// The built-in catalogue without touching the filesystem.
    #[must_use]
    pub fn builtin(today: NaiveDate) -> Self {
        Self {
            trails: seed::trails(),
            events: seed::events(today),
        }
    }
}

impl Catalogue for SampleCatalogue {
    fn trails(&self) -> &[Trail] {
        &self.trails
    }

    fn events(&self) -> &[Event] {
        &self.events
    }
}

struct CatalogueFile<'a> {
    dir: &'a fs_utf8::Dir,
    name: &'static str,
    path: Utf8PathBuf,
}

impl<'a> CatalogueFile<'a> {
    fn new(dir: &'a fs_utf8::Dir, data_dir: &Utf8Path, name: &'static str) -> Self {
        Self {
            dir,
            name,
            path: data_dir.join(name),
        }
    }

    fn load_or_seed<T, S, K>(&self, seed: S, key: K) -> Result<Vec<T>, CatalogueError>
    where
        T: Serialize + DeserializeOwned,
        S: FnOnce() -> Vec<T>,
        K: Fn(&T) -> u64,
    {
        let records = match read_optional(self.dir, self.name).map_err(|source| self.io(source))? {
            Some(contents) => self.decode(&contents)?,
            None => {
                let seeded = seed();
                self.write(&seeded)?;
                debug!("Seeded {} with {} records", self.path, seeded.len());
                seeded
            }
        };
        self.reject_duplicates(&records, key)?;
        Ok(records)
    }

    fn decode<T: DeserializeOwned>(&self, contents: &str) -> Result<Vec<T>, CatalogueError> {
        let mut reader = csv::Reader::from_reader(contents.as_bytes());
        reader.headers().map_err(|source| self.csv(source))?;
        let mut records = Vec::new();
        for (index, row) in reader.deserialize::<T>().enumerate() {
            match row {
                Ok(record) => records.push(record),
                Err(err) => warn!(
                    "Skipped row {} of {}: {err}",
                    index + 1,
                    self.path
                ),
            }
        }
        debug!("Loaded {} records from {}", records.len(), self.path);
        Ok(records)
    }

    fn write<T: Serialize>(&self, records: &[T]) -> Result<(), CatalogueError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for record in records {
            writer.serialize(record).map_err(|source| self.csv(source))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|err| self.io(err.into_error()))?;
        replace_file(self.dir, self.name, &bytes).map_err(|source| self.io(source))
    }

    fn reject_duplicates<T, K>(&self, records: &[T], key: K) -> Result<(), CatalogueError>
    where
        K: Fn(&T) -> u64,
    {
        let mut seen = HashSet::new();
        records
            .iter()
            .map(key)
            .find(|id| !seen.insert(*id))
            .map_or(Ok(()), |id| {
                Err(CatalogueError::DuplicateId {
                    path: self.path.clone(),
                    id,
                })
            })
    }

    fn io(&self, source: io::Error) -> CatalogueError {
        CatalogueError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn csv(&self, source: csv::Error) -> CatalogueError {
        CatalogueError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}
