//! Commands that read or change a user's stored profile: `profile`,
//! `favorite`, `register` and `journal`.

use std::io::Write;

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use clap::Parser;
use natureconnect_core::{JournalEntry, Upserted, UserId};
use natureconnect_data::Clock;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::workspace::{Workspace, require_user};
use crate::{ARG_DATA_DIR, ARG_USER, CliError, DEFAULT_DATA_DIR, write_json};

pub(crate) const ARG_TRAIL: &str = "trail";
pub(crate) const ARG_EVENT: &str = "event";
pub(crate) const ARG_REMOVE: &str = "remove";
pub(crate) const ARG_DATE: &str = "date";
pub(crate) const ARG_LOCATION: &str = "location";
pub(crate) const ARG_OBSERVATIONS: &str = "observations";
pub(crate) const ARG_FEELINGS: &str = "feelings";
pub(crate) const ARG_HAS_PHOTO: &str = "has-photo";

pub(crate) const ENV_PROFILE_USER: &str = "NATURECONNECT_CMDS_PROFILE_USER";
pub(crate) const ENV_FAVORITE_USER: &str = "NATURECONNECT_CMDS_FAVORITE_USER";
pub(crate) const ENV_FAVORITE_TRAIL: &str = "NATURECONNECT_CMDS_FAVORITE_TRAIL";
pub(crate) const ENV_REGISTER_USER: &str = "NATURECONNECT_CMDS_REGISTER_USER";
pub(crate) const ENV_REGISTER_EVENT: &str = "NATURECONNECT_CMDS_REGISTER_EVENT";
pub(crate) const ENV_JOURNAL_USER: &str = "NATURECONNECT_CMDS_JOURNAL_USER";
pub(crate) const ENV_JOURNAL_OBSERVATIONS: &str = "NATURECONNECT_CMDS_JOURNAL_OBSERVATIONS";
pub(crate) const ENV_JOURNAL_FEELINGS: &str = "NATURECONNECT_CMDS_JOURNAL_FEELINGS";

fn data_dir_or_default(data_dir: Option<Utf8PathBuf>) -> Utf8PathBuf {
    data_dir.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_DIR))
}

/// Result of adding or removing one favourite or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ItemChange {
    pub(crate) user: UserId,
    pub(crate) id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) upserted: Option<Upserted>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) removed: Option<usize>,
}

/// CLI arguments for the `profile` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "profile", about = "Print a user's stored profile")]
#[ortho_config(prefix = "NATURECONNECT")]
pub(crate) struct ProfileArgs {
    /// Directory holding the sample catalogue and user profiles.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Identifier of the profile to print.
    #[arg(long = ARG_USER, value_name = "id")]
    #[serde(default)]
    pub(crate) user: Option<String>,
}

impl ProfileArgs {
    pub(crate) fn into_config(self) -> Result<ProfileConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ProfileConfig::try_from(merged)
    }
}

/// Resolved configuration shared by commands that only need a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProfileConfig {
    pub(crate) data_dir: Utf8PathBuf,
    pub(crate) user: UserId,
}

impl TryFrom<ProfileArgs> for ProfileConfig {
    type Error = CliError;

    fn try_from(args: ProfileArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            user: require_user(args.user, ENV_PROFILE_USER)?,
            data_dir: data_dir_or_default(args.data_dir),
        })
    }
}

pub(crate) fn run_profile_with<C: Clock>(
    args: ProfileArgs,
    clock: C,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let workspace = Workspace::open(&config.data_dir, clock)?;
    let profile = workspace.session(config.user).profile()?;
    write_json(writer, &profile)
}

/// CLI arguments for the `favorite` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "favorite",
    long_about = "Save a catalogue trail to the user's favourites, replacing \
                 any saved copy, or drop it again with --remove.",
    about = "Save or remove a favourite trail"
)]
#[ortho_config(prefix = "NATURECONNECT")]
pub(crate) struct FavoriteArgs {
    /// Directory holding the sample catalogue and user profiles.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Identifier of the profile to update.
    #[arg(long = ARG_USER, value_name = "id")]
    #[serde(default)]
    pub(crate) user: Option<String>,
    /// Catalogue id of the trail.
    #[arg(long = ARG_TRAIL, value_name = "id")]
    #[serde(default)]
    pub(crate) trail: Option<u64>,
    /// Remove the trail instead of saving it.
    #[arg(long = ARG_REMOVE)]
    #[serde(default)]
    pub(crate) remove: bool,
}

impl FavoriteArgs {
    pub(crate) fn into_config(self) -> Result<ItemConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ItemConfig::try_from(merged)
    }
}

/// Resolved configuration for commands that change one profile item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ItemConfig {
    pub(crate) data_dir: Utf8PathBuf,
    pub(crate) user: UserId,
    pub(crate) id: u64,
    pub(crate) remove: bool,
}

impl TryFrom<FavoriteArgs> for ItemConfig {
    type Error = CliError;

    fn try_from(args: FavoriteArgs) -> Result<Self, Self::Error> {
        let user = require_user(args.user, ENV_FAVORITE_USER)?;
        let id = args.trail.ok_or(CliError::MissingArgument {
            field: ARG_TRAIL,
            env: ENV_FAVORITE_TRAIL,
        })?;
        Ok(Self {
            data_dir: data_dir_or_default(args.data_dir),
            user,
            id,
            remove: args.remove,
        })
    }
}

pub(crate) fn run_favorite_with<C: Clock>(
    args: FavoriteArgs,
    clock: C,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let workspace = Workspace::open(&config.data_dir, clock)?;
    let session = workspace.session(config.user);
    let change = if config.remove {
        ItemChange {
            user: session.user().clone(),
            id: config.id,
            upserted: None,
            removed: Some(session.remove_favorite_trail(config.id)?),
        }
    } else {
        ItemChange {
            user: session.user().clone(),
            id: config.id,
            upserted: Some(session.save_favorite_trail(config.id)?),
            removed: None,
        }
    };
    write_json(writer, &change)
}

/// CLI arguments for the `register` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "register",
    long_about = "Register the user for a catalogue event, or cancel the \
                 registration with --remove.",
    about = "Register for or cancel an event"
)]
#[ortho_config(prefix = "NATURECONNECT")]
pub(crate) struct RegisterArgs {
    /// Directory holding the sample catalogue and user profiles.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Identifier of the profile to update.
    #[arg(long = ARG_USER, value_name = "id")]
    #[serde(default)]
    pub(crate) user: Option<String>,
    /// Catalogue id of the event.
    #[arg(long = ARG_EVENT, value_name = "id")]
    #[serde(default)]
    pub(crate) event: Option<u64>,
    /// Cancel the registration instead of making it.
    #[arg(long = ARG_REMOVE)]
    #[serde(default)]
    pub(crate) remove: bool,
}

impl RegisterArgs {
    pub(crate) fn into_config(self) -> Result<ItemConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ItemConfig::try_from(merged)
    }
}

impl TryFrom<RegisterArgs> for ItemConfig {
    type Error = CliError;

    fn try_from(args: RegisterArgs) -> Result<Self, Self::Error> {
        let user = require_user(args.user, ENV_REGISTER_USER)?;
        let id = args.event.ok_or(CliError::MissingArgument {
            field: ARG_EVENT,
            env: ENV_REGISTER_EVENT,
        })?;
        Ok(Self {
            data_dir: data_dir_or_default(args.data_dir),
            user,
            id,
            remove: args.remove,
        })
    }
}

pub(crate) fn run_register_with<C: Clock>(
    args: RegisterArgs,
    clock: C,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let workspace = Workspace::open(&config.data_dir, clock)?;
    let session = workspace.session(config.user);
    let change = if config.remove {
        ItemChange {
            user: session.user().clone(),
            id: config.id,
            upserted: None,
            removed: Some(session.cancel_event(config.id)?),
        }
    } else {
        ItemChange {
            user: session.user().clone(),
            id: config.id,
            upserted: Some(session.register_event(config.id)?),
            removed: None,
        }
    };
    write_json(writer, &change)
}

/// CLI arguments for the `journal` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "journal",
    long_about = "Append an entry to the user's nature journal and print the \
                 updated profile. The entry is dated today unless --date is \
                 given.",
    about = "Add a nature journal entry"
)]
#[ortho_config(prefix = "NATURECONNECT")]
pub(crate) struct JournalArgs {
    /// Directory holding the sample catalogue and user profiles.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Identifier of the profile to update.
    #[arg(long = ARG_USER, value_name = "id")]
    #[serde(default)]
    pub(crate) user: Option<String>,
    /// Day of the visit (YYYY-MM-DD).
    #[arg(long = ARG_DATE, value_name = "date")]
    #[serde(default)]
    pub(crate) date: Option<NaiveDate>,
    /// Where it happened.
    #[arg(long = ARG_LOCATION, value_name = "place")]
    #[serde(default)]
    pub(crate) location: Option<String>,
    /// What was noticed.
    #[arg(long = ARG_OBSERVATIONS, value_name = "text")]
    #[serde(default)]
    pub(crate) observations: Option<String>,
    /// How it felt.
    #[arg(long = ARG_FEELINGS, value_name = "text")]
    #[serde(default)]
    pub(crate) feelings: Option<String>,
    /// A photo was taken.
    #[arg(long = ARG_HAS_PHOTO)]
    #[serde(default)]
    pub(crate) has_photo: bool,
}

impl JournalArgs {
    pub(crate) fn into_config(self) -> Result<JournalConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        JournalConfig::try_from(merged)
    }
}

/// Resolved `journal` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct JournalConfig {
    pub(crate) data_dir: Utf8PathBuf,
    pub(crate) user: UserId,
    pub(crate) date: Option<NaiveDate>,
    pub(crate) location: String,
    pub(crate) observations: String,
    pub(crate) feelings: String,
    pub(crate) has_photo: bool,
}

impl TryFrom<JournalArgs> for JournalConfig {
    type Error = CliError;

    fn try_from(args: JournalArgs) -> Result<Self, Self::Error> {
        let user = require_user(args.user, ENV_JOURNAL_USER)?;
        let observations = args.observations.ok_or(CliError::MissingArgument {
            field: ARG_OBSERVATIONS,
            env: ENV_JOURNAL_OBSERVATIONS,
        })?;
        let feelings = args.feelings.ok_or(CliError::MissingArgument {
            field: ARG_FEELINGS,
            env: ENV_JOURNAL_FEELINGS,
        })?;
        Ok(Self {
            data_dir: data_dir_or_default(args.data_dir),
            user,
            date: args.date,
            location: args.location.unwrap_or_default(),
            observations,
            feelings,
            has_photo: args.has_photo,
        })
    }
}

impl JournalConfig {
    /// Build the entry, dating it `today` when no date was given.
    pub(crate) fn entry(&self, today: NaiveDate) -> Result<JournalEntry, CliError> {
        Ok(JournalEntry::new(
            self.date.unwrap_or(today),
            self.location.as_str(),
            self.observations.as_str(),
            self.feelings.as_str(),
            self.has_photo,
        )?)
    }
}

pub(crate) fn run_journal_with<C: Clock>(
    args: JournalArgs,
    clock: C,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let workspace = Workspace::open(&config.data_dir, clock)?;
    let entry = config.entry(workspace.today())?;
    let profile = workspace.session(config.user).add_journal_entry(entry)?;
    write_json(writer, &profile)
}
