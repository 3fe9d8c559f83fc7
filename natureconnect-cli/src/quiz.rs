//! `questions` and `quiz` commands.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use natureconnect_core::{Location, QUIZ_QUESTIONS, QuizAnswers, UserId};
use natureconnect_data::Clock;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::workspace::{LocationOptions, Workspace, require_user};
use crate::{
    ARG_DATA_DIR, ARG_LAT, ARG_LON, ARG_USER, ARG_ZIP, CliError, DEFAULT_DATA_DIR, split_list,
    write_json,
};

pub(crate) const ARG_ANSWERS: &str = "answers";
pub(crate) const ENV_QUIZ_USER: &str = "NATURECONNECT_CMDS_QUIZ_USER";
pub(crate) const ENV_QUIZ_ANSWERS: &str = "NATURECONNECT_CMDS_QUIZ_ANSWERS";

#[derive(Debug, Serialize)]
struct Question {
    number: usize,
    text: &'static str,
}

pub(crate) fn run_questions_with(writer: &mut dyn Write) -> Result<(), CliError> {
    let questions: Vec<Question> = QUIZ_QUESTIONS
        .iter()
        .enumerate()
        .map(|(index, text)| Question {
            number: index + 1,
            text,
        })
        .collect();
    write_json(writer, &questions)
}

/// CLI arguments for the `quiz` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "quiz",
    long_about = "Score ten answers (each 1 to 10, in question order) into a \
                 0-100 biophilia score, save it to the user's profile and \
                 print tiered recommendations with nearby trails and \
                 upcoming events.",
    about = "Take the biophilia quiz"
)]
#[ortho_config(prefix = "NATURECONNECT")]
pub(crate) struct QuizArgs {
    /// Directory holding the sample catalogue and user profiles.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Identifier of the profile to update.
    #[arg(long = ARG_USER, value_name = "id")]
    #[serde(default)]
    pub(crate) user: Option<String>,
    /// Comma-separated answers, one per question.
    #[arg(long = ARG_ANSWERS, value_name = "list")]
    #[serde(default)]
    pub(crate) answers: Option<String>,
    /// Latitude of the user in decimal degrees.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the user in decimal degrees.
    #[arg(long = ARG_LON, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lon: Option<f64>,
    /// Zip code of the user.
    #[arg(long = ARG_ZIP, value_name = "zip")]
    #[serde(default)]
    pub(crate) zip: Option<String>,
}

impl QuizArgs {
    pub(crate) fn into_config(self) -> Result<QuizConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        QuizConfig::try_from(merged)
    }
}

/// Resolved `quiz` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct QuizConfig {
    pub(crate) data_dir: Utf8PathBuf,
    pub(crate) user: UserId,
    pub(crate) answers: QuizAnswers,
    pub(crate) location: Option<Location>,
}

impl TryFrom<QuizArgs> for QuizConfig {
    type Error = CliError;

    fn try_from(args: QuizArgs) -> Result<Self, Self::Error> {
        let user = require_user(args.user, ENV_QUIZ_USER)?;
        let raw_answers = args.answers.ok_or(CliError::MissingArgument {
            field: ARG_ANSWERS,
            env: ENV_QUIZ_ANSWERS,
        })?;
        let answers = parse_answers(&raw_answers)?;
        let location = LocationOptions {
            lat: args.lat,
            lon: args.lon,
            zip: args.zip,
        }
        .resolve()?;
        Ok(Self {
            data_dir: args
                .data_dir
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_DIR)),
            user,
            answers,
            location,
        })
    }
}

pub(crate) fn parse_answers(raw: &str) -> Result<QuizAnswers, CliError> {
    let values = split_list(Some(raw))
        .map(|value| {
            value
                .parse::<u8>()
                .map_err(|source| CliError::UnparsableAnswer {
                    value: value.to_owned(),
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(QuizAnswers::new(values)?)
}

pub(crate) fn run_quiz_with<C: Clock>(
    args: QuizArgs,
    clock: C,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let workspace = Workspace::open(&config.data_dir, clock)?;
    let mut session = workspace.session(config.user);
    session.set_location(config.location);
    let report = session.take_quiz(&config.answers)?;
    write_json(writer, &report)
}
