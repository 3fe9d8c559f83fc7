//! Behaviour-driven step definitions driving the CLI scenarios.

use super::helpers::{DataDir, ids, invoke, parse_output};
use super::*;
use natureconnect_data::SessionError;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

struct CliWorld {
    data_dir: RefCell<Option<DataDir>>,
    result: RefCell<Option<Result<String, CliError>>>,
}

impl CliWorld {
    fn new() -> Self {
        Self {
            data_dir: RefCell::new(None),
            result: RefCell::new(None),
        }
    }

    fn stdout(&self) -> String {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        match result {
            Ok(stdout) => stdout.clone(),
            Err(err) => panic!("expected success, found {err:?}"),
        }
    }

    fn error<T>(&self, check: impl FnOnce(&CliError) -> T) -> T {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        match result {
            Ok(stdout) => panic!("expected failure, command printed {stdout}"),
            Err(err) => check(err),
        }
    }
}

#[fixture]
fn world() -> CliWorld {
    CliWorld::new()
}

#[given("a fresh data directory")]
fn fresh_data_directory(#[from(world)] world: &CliWorld) {
    world.data_dir.replace(Some(DataDir::new()));
}

#[when("I run {command}")]
fn run_the_command(command: String, #[from(world)] world: &CliWorld) {
    let outcome = {
        let data_dir = world.data_dir.borrow();
        let dir = data_dir.as_ref().expect("data directory prepared");
        invoke(dir, &command)
    };
    world.result.replace(Some(outcome));
}

#[then("the command succeeds")]
fn command_succeeds(#[from(world)] world: &CliWorld) {
    world.stdout();
}

#[then("the printed ids are {expected}")]
fn printed_ids_are(expected: String, #[from(world)] world: &CliWorld) {
    let wanted: Vec<u64> = expected
        .split(',')
        .map(|id| {
            id.trim()
                .parse()
                .unwrap_or_else(|err| panic!("id {id:?} in feature file: {err}"))
        })
        .collect();
    assert_eq!(ids(&parse_output(&world.stdout())), wanted);
}

#[then("the profile lists favourite trail {id}")]
fn profile_lists_trail(id: u64, #[from(world)] world: &CliWorld) {
    let profile = parse_output(&world.stdout());
    assert_eq!(ids(&profile["favorite_trails"]), vec![id]);
}

#[then("the command fails because user is missing")]
fn fails_for_missing_user(#[from(world)] world: &CliWorld) {
    world.error(|err| match err {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_USER),
        other => panic!("expected MissingArgument, found {other:?}"),
    });
}

#[then("the command fails because trail {id} is unknown")]
fn fails_for_unknown_trail(id: u64, #[from(world)] world: &CliWorld) {
    world.error(|err| match err {
        CliError::Session(SessionError::UnknownTrail { id: missing }) => {
            assert_eq!(*missing, id);
        }
        other => panic!("expected UnknownTrail, found {other:?}"),
    });
}

macro_rules! register_cli_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/cli.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: CliWorld) {
            let _ = world;
        }
    };
}

register_cli_scenario!(nearest_trails, "Listing the nearest trails");
register_cli_scenario!(favourite_in_profile, "A saved favourite appears in the profile");
register_cli_scenario!(quiz_needs_user, "The quiz needs a user");
register_cli_scenario!(unknown_trail_rejected, "Unknown trails cannot be saved");
