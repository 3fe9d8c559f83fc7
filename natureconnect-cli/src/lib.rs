//! Command-line interface for browsing the NatureConnect catalogue and
//! managing a user's profile.
//!
//! Every subcommand merges its options from configuration files,
//! `NATURECONNECT_*` environment variables and flags, then prints its result
//! as pretty JSON.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use natureconnect_data::{Clock, SystemClock};
use serde::Serialize;

mod catalogue;
mod error;
mod profile;
mod quiz;
mod workspace;

pub use error::CliError;

use catalogue::{EventsArgs, TrailsArgs};
use profile::{FavoriteArgs, JournalArgs, ProfileArgs, RegisterArgs};
use quiz::QuizArgs;

pub(crate) const ARG_DATA_DIR: &str = "data-dir";
pub(crate) const ARG_USER: &str = "user";
pub(crate) const ARG_LAT: &str = "lat";
pub(crate) const ARG_LON: &str = "lon";
pub(crate) const ARG_ZIP: &str = "zip";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const DEFAULT_DATA_DIR: &str = "data";

/// Run the NatureConnect CLI with the current process arguments and
/// environment, printing to stdout.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// data directory cannot be used or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, SystemClock, &mut stdout)
}

#[derive(Debug, Parser)]
#[command(
    name = "natureconnect",
    about = "Find trails and nature events, take the biophilia quiz and keep a nature journal",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List sample trails, nearest first when a location is given.
    Trails(TrailsArgs),
    /// List sample events in a date window, soonest first.
    Events(EventsArgs),
    /// Print the biophilia quiz questions.
    Questions,
    /// Score quiz answers and save the result to the user's profile.
    Quiz(QuizArgs),
    /// Print the user's stored profile.
    Profile(ProfileArgs),
    /// Save or remove a favourite trail.
    Favorite(FavoriteArgs),
    /// Register for or cancel a sample event.
    Register(RegisterArgs),
    /// Add an entry to the user's nature journal.
    Journal(JournalArgs),
}

fn run_command<C: Clock>(
    command: Command,
    clock: C,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        Command::Trails(args) => catalogue::run_trails_with(args, clock, writer),
        Command::Events(args) => catalogue::run_events_with(args, clock, writer),
        Command::Questions => quiz::run_questions_with(writer),
        Command::Quiz(args) => quiz::run_quiz_with(args, clock, writer),
        Command::Profile(args) => profile::run_profile_with(args, clock, writer),
        Command::Favorite(args) => profile::run_favorite_with(args, clock, writer),
        Command::Register(args) => profile::run_register_with(args, clock, writer),
        Command::Journal(args) => profile::run_journal_with(args, clock, writer),
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

/// Split a comma-separated option into trimmed, non-empty items.
pub(crate) fn split_list(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.into_iter()
        .flat_map(|list| list.split(','))
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

#[cfg(test)]
mod tests;
