//! `trails` and `events` commands: read-only queries over the sample
//! catalogue.

use std::io::Write;

use camino::Utf8PathBuf;
use chrono::{Days, NaiveDate};
use clap::Parser;
use natureconnect_core::{Catalogue, Difficulty, EventQuery, EventType, Location, TrailQuery};
use natureconnect_data::Clock;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::workspace::{LocationOptions, Workspace};
use crate::{
    ARG_DATA_DIR, ARG_LAT, ARG_LIMIT, ARG_LON, ARG_ZIP, CliError, DEFAULT_DATA_DIR, split_list,
    write_json,
};

pub(crate) const ARG_MAX_DISTANCE: &str = "max-distance";
pub(crate) const ARG_DIFFICULTY: &str = "difficulty";
pub(crate) const ARG_FEATURES: &str = "features";
pub(crate) const ARG_FROM: &str = "from";
pub(crate) const ARG_UNTIL: &str = "until";
pub(crate) const ARG_TYPES: &str = "types";

/// Days after the start date covered when `--until` is not given.
pub(crate) const DEFAULT_EVENT_WINDOW_DAYS: u64 = 30;

/// CLI arguments for the `trails` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "trails",
    long_about = "List sample trails. With --lat/--lon or --zip each trail \
                 carries its distance in miles and results are nearest first; \
                 without a location the catalogue order is kept.",
    about = "List sample trails"
)]
#[ortho_config(prefix = "NATURECONNECT")]
pub(crate) struct TrailsArgs {
    /// Directory holding the sample catalogue and user profiles.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Latitude of the user in decimal degrees.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the user in decimal degrees.
    #[arg(long = ARG_LON, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lon: Option<f64>,
    /// Zip code of the user; labels --lat/--lon when both are given.
    #[arg(long = ARG_ZIP, value_name = "zip")]
    #[serde(default)]
    pub(crate) zip: Option<String>,
    /// Drop trails further away than this many miles.
    #[arg(long = ARG_MAX_DISTANCE, value_name = "miles")]
    #[serde(default)]
    pub(crate) max_distance: Option<f64>,
    /// Comma-separated difficulties to keep (Easy, Moderate, Hard).
    #[arg(long = ARG_DIFFICULTY, value_name = "list")]
    #[serde(default)]
    pub(crate) difficulty: Option<String>,
    /// Comma-separated feature tags every trail must have.
    #[arg(long = ARG_FEATURES, value_name = "list")]
    #[serde(default)]
    pub(crate) features: Option<String>,
    /// Print at most this many trails.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl TrailsArgs {
    pub(crate) fn into_config(self) -> Result<TrailsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        TrailsConfig::try_from(merged)
    }
}

/// Resolved `trails` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TrailsConfig {
    pub(crate) data_dir: Utf8PathBuf,
    pub(crate) location: Option<Location>,
    pub(crate) query: TrailQuery,
}

impl TryFrom<TrailsArgs> for TrailsConfig {
    type Error = CliError;

    fn try_from(args: TrailsArgs) -> Result<Self, Self::Error> {
        let location = LocationOptions {
            lat: args.lat,
            lon: args.lon,
            zip: args.zip,
        }
        .resolve()?;
        let difficulties = split_list(args.difficulty.as_deref())
            .map(str::parse::<Difficulty>)
            .collect::<Result<Vec<_>, _>>()?;

        let mut query = TrailQuery::new()
            .with_difficulties(difficulties)
            .with_features(split_list(args.features.as_deref()));
        if let Some(here) = &location {
            query = query.with_origin(here.coord());
        }
        if let Some(miles) = args.max_distance {
            query = query.with_max_distance(miles);
        }
        if let Some(limit) = args.limit {
            query = query.with_limit(limit);
        }

        Ok(Self {
            data_dir: args
                .data_dir
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_DIR)),
            location,
            query,
        })
    }
}

pub(crate) fn run_trails_with<C: Clock>(
    args: TrailsArgs,
    clock: C,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let workspace = Workspace::open(&config.data_dir, clock)?;
    let trails = workspace.catalogue.find_trails(&config.query);
    write_json(writer, &trails)
}

/// CLI arguments for the `events` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "events",
    long_about = "List sample events dated within --from..=--until, soonest \
                 first. The window starts today and spans 30 days unless \
                 either end is given.",
    about = "List sample events"
)]
#[ortho_config(prefix = "NATURECONNECT")]
pub(crate) struct EventsArgs {
    /// Directory holding the sample catalogue and user profiles.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// First day of the window (YYYY-MM-DD).
    #[arg(long = ARG_FROM, value_name = "date")]
    #[serde(default)]
    pub(crate) from: Option<NaiveDate>,
    /// Last day of the window (YYYY-MM-DD).
    #[arg(long = ARG_UNTIL, value_name = "date")]
    #[serde(default)]
    pub(crate) until: Option<NaiveDate>,
    /// Comma-separated event types to keep.
    #[arg(long = ARG_TYPES, value_name = "list")]
    #[serde(default)]
    pub(crate) types: Option<String>,
    /// Print at most this many events.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl EventsArgs {
    pub(crate) fn into_config(self) -> Result<EventsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(EventsConfig::from(merged))
    }
}

/// Resolved `events` command configuration. Open window ends are filled in
/// from the clock when the command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EventsConfig {
    pub(crate) data_dir: Utf8PathBuf,
    pub(crate) from: Option<NaiveDate>,
    pub(crate) until: Option<NaiveDate>,
    pub(crate) types: Vec<EventType>,
    pub(crate) limit: Option<usize>,
}

impl From<EventsArgs> for EventsConfig {
    fn from(args: EventsArgs) -> Self {
        Self {
            data_dir: args
                .data_dir
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_DIR)),
            from: args.from,
            until: args.until,
            types: split_list(args.types.as_deref())
                .map(|label| EventType::from(label.to_owned()))
                .collect(),
            limit: args.limit,
        }
    }
}

impl EventsConfig {
    /// Build the query for a window anchored on `today`.
    pub(crate) fn query(&self, today: NaiveDate) -> EventQuery {
        let from = self.from.unwrap_or(today);
        let until = self.until.unwrap_or_else(|| {
            from.checked_add_days(Days::new(DEFAULT_EVENT_WINDOW_DAYS))
                .unwrap_or(NaiveDate::MAX)
        });
        let query = EventQuery::new()
            .with_date_range(from, until)
            .with_types(self.types.iter().cloned());
        match self.limit {
            Some(limit) => query.with_limit(limit),
            None => query,
        }
    }
}

pub(crate) fn run_events_with<C: Clock>(
    args: EventsArgs,
    clock: C,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let workspace = Workspace::open(&config.data_dir, clock)?;
    let events = workspace
        .catalogue
        .find_events(&config.query(workspace.today()));
    write_json(writer, &events)
}
