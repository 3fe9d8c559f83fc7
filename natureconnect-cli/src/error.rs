//! Error types emitted by the NatureConnect CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>`.

use std::num::ParseIntError;
use std::sync::Arc;

use natureconnect_core::{DifficultyParseError, JournalEntryError, QuizAnswersError, UserIdError};
use natureconnect_data::{CatalogueError, SessionError};
use thiserror::Error;

/// Errors emitted by the NatureConnect CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name of the option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Only one half of a coordinate pair was supplied.
    #[error("--{given} needs --{missing} as well")]
    IncompleteLocation {
        /// The coordinate that was set.
        given: &'static str,
        /// The coordinate that was not.
        missing: &'static str,
    },
    /// The user identifier cannot name a profile file.
    #[error("invalid --user: {0}")]
    InvalidUser(#[from] UserIdError),
    /// A difficulty filter did not name a known grade.
    #[error(transparent)]
    InvalidDifficulty(#[from] DifficultyParseError),
    /// A quiz answer was not a whole number.
    #[error("quiz answer {value:?} is not a number: {source}")]
    UnparsableAnswer {
        /// The rejected text.
        value: String,
        /// Parse failure.
        #[source]
        source: ParseIntError,
    },
    /// The answers did not form a complete, in-range quiz.
    #[error(transparent)]
    InvalidAnswers(#[from] QuizAnswersError),
    /// The journal entry was incomplete.
    #[error(transparent)]
    InvalidJournalEntry(#[from] JournalEntryError),
    /// The sample catalogue could not be loaded or seeded.
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
    /// A profile operation failed.
    #[error(transparent)]
    Session(#[from] SessionError),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

impl From<natureconnect_data::StoreError> for CliError {
    fn from(source: natureconnect_data::StoreError) -> Self {
        Self::Session(SessionError::Store(source))
    }
}
