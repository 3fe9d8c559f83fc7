//! Test helpers for running commands against a throwaway data directory.

use super::*;
use camino::Utf8PathBuf;
use chrono::{TimeZone, Utc};
use natureconnect_data::FixedClock;
use tempfile::TempDir;

/// Noon on 2025-06-01, the instant every test run observes.
pub(super) fn fixed_clock() -> FixedClock {
    FixedClock(
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp"),
    )
}

pub(super) struct DataDir {
    _dir: TempDir,
    pub(super) path: Utf8PathBuf,
}

impl DataDir {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let path =
            Utf8PathBuf::from_path_buf(dir.path().join("data")).expect("utf-8 data directory");
        Self { _dir: dir, path }
    }

    /// Build the argument vector for `command`, pointing it at this data
    /// directory unless the subcommand has no data to read.
    pub(super) fn argv(&self, command: &str) -> Vec<String> {
        let mut argv = vec!["natureconnect".to_owned()];
        argv.extend(command.split_whitespace().map(str::to_owned));
        if argv.get(1).is_some_and(|name| name != "questions") {
            argv.extend([format!("--{ARG_DATA_DIR}"), self.path.as_str().to_owned()]);
        }
        argv
    }
}

/// Parse and run `command`, returning what it printed.
pub(super) fn invoke(data_dir: &DataDir, command: &str) -> Result<String, CliError> {
    let cli = Cli::try_parse_from(data_dir.argv(command))?;
    let mut buffer = Vec::new();
    run_command(cli.command, fixed_clock(), &mut buffer)?;
    Ok(String::from_utf8(buffer).expect("stdout utf-8"))
}

/// Parse the JSON a command printed.
pub(super) fn parse_output(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("output should be JSON")
}

/// Collect the `id` of every object in a printed JSON array.
pub(super) fn ids(value: &serde_json::Value) -> Vec<u64> {
    value
        .as_array()
        .expect("output should be a JSON array")
        .iter()
        .map(|item| item["id"].as_u64().expect("numeric id"))
        .collect()
}
