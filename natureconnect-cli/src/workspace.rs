//! Opening the data directory and resolving where the user is.

use camino::Utf8Path;
use natureconnect_core::{Location, UserId};
use natureconnect_data::{Clock, SampleCatalogue, Session, UserStore};

use crate::{ARG_LAT, ARG_LON, ARG_USER, CliError};

/// The catalogue and profile store rooted at one data directory.
#[derive(Debug)]
pub(crate) struct Workspace<C: Clock> {
    pub(crate) catalogue: SampleCatalogue,
    store: UserStore<C>,
}

impl<C: Clock> Workspace<C> {
    /// Open `data_dir`, seeding the sample catalogue on first use.
    pub(crate) fn open(data_dir: &Utf8Path, clock: C) -> Result<Self, CliError> {
        let store = UserStore::with_clock(data_dir, clock)?;
        let catalogue = SampleCatalogue::open_or_seed(data_dir, store.clock().today())?;
        Ok(Self { catalogue, store })
    }

    pub(crate) fn today(&self) -> chrono::NaiveDate {
        self.store.clock().today()
    }

    pub(crate) fn session(&self, user: UserId) -> Session<'_, SampleCatalogue, C> {
        Session::new(user, &self.catalogue, &self.store)
    }
}

/// Location options shared by the commands that measure distances.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct LocationOptions {
    pub(crate) lat: Option<f64>,
    pub(crate) lon: Option<f64>,
    pub(crate) zip: Option<String>,
}

impl LocationOptions {
    /// Explicit coordinates win over a zip code; neither means unknown.
    pub(crate) fn resolve(self) -> Result<Option<Location>, CliError> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => {
                let here = Location::new(lat, lon);
                Ok(Some(match self.zip {
                    Some(zip) => here.with_label(zip),
                    None => here,
                }))
            }
            (Some(_), None) => Err(CliError::IncompleteLocation {
                given: ARG_LAT,
                missing: ARG_LON,
            }),
            (None, Some(_)) => Err(CliError::IncompleteLocation {
                given: ARG_LON,
                missing: ARG_LAT,
            }),
            (None, None) => Ok(self.zip.map(Location::from_zip)),
        }
    }
}

/// Validate the merged `--user` value.
pub(crate) fn require_user(
    user: Option<String>,
    env: &'static str,
) -> Result<UserId, CliError> {
    let raw = user.ok_or(CliError::MissingArgument {
        field: ARG_USER,
        env,
    })?;
    Ok(UserId::new(raw)?)
}
