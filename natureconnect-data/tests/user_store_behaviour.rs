//! Behavioural coverage for the per-user JSON profile store.

use std::cell::RefCell;

use natureconnect_core::{Difficulty, Trail, UserId, UserProfile};
use natureconnect_data::{FixedClock, UserStore};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

mod support;

use support::{DataDir, noon};

/// Temporary data directory for each scenario.
#[fixture]
pub fn data_dir() -> DataDir {
    DataDir::new()
}

/// The store under test, opened by the `Given` steps.
#[fixture]
pub fn store() -> RefCell<Option<UserStore<FixedClock>>> {
    RefCell::new(None)
}

/// The most recently loaded or returned profile.
#[fixture]
pub fn profile() -> RefCell<Option<UserProfile>> {
    RefCell::new(None)
}

fn user() -> UserId {
    UserId::new("new_walker").unwrap_or_else(|err| panic!("valid user id: {err}"))
}

fn trail(id: u64, name: &str) -> Trail {
    Trail {
        id,
        name: name.to_owned(),
        latitude: 37.77,
        longitude: -122.42,
        length_miles: 1.5,
        difficulty: Difficulty::Easy,
        features: "Forest".to_owned(),
        description: String::new(),
        image_url: String::new(),
    }
}

fn with_store<R>(
    store: &RefCell<Option<UserStore<FixedClock>>>,
    action: impl FnOnce(&UserStore<FixedClock>) -> R,
) -> R {
    let binding = store.borrow();
    let opened = binding
        .as_ref()
        .unwrap_or_else(|| panic!("store must be opened first"));
    action(opened)
}

fn recorded(profile: &RefCell<Option<UserProfile>>) -> UserProfile {
    profile
        .borrow()
        .clone()
        .unwrap_or_else(|| panic!("profile must be recorded"))
}

#[given("an empty data directory")]
fn empty_data_directory(data_dir: &DataDir, store: &RefCell<Option<UserStore<FixedClock>>>) {
    *store.borrow_mut() = Some(data_dir.store());
}

#[given("the user has favourited trails 1 and 2")]
fn favourited_two(store: &RefCell<Option<UserStore<FixedClock>>>) {
    with_store(store, |opened| {
        for (id, name) in [(1, "Pine Forest Loop"), (2, "Mountain Vista Trail")] {
            opened
                .upsert(&user(), trail(id, name))
                .unwrap_or_else(|err| panic!("favourite trail {id}: {err}"));
        }
    });
}

#[when("I load the profile for a new user")]
fn load_new_user(
    store: &RefCell<Option<UserStore<FixedClock>>>,
    profile: &RefCell<Option<UserProfile>>,
) {
    let loaded = with_store(store, |opened| opened.load(&user()))
        .unwrap_or_else(|err| panic!("load profile: {err}"));
    *profile.borrow_mut() = Some(loaded);
}

#[when("the user favourites trail 1 again with a new name")]
fn refavourite(
    store: &RefCell<Option<UserStore<FixedClock>>>,
    profile: &RefCell<Option<UserProfile>>,
) {
    let (updated, _) = with_store(store, |opened| {
        opened.upsert(&user(), trail(1, "Pine Forest Loop (reopened)"))
    })
    .unwrap_or_else(|err| panic!("upsert trail: {err}"));
    *profile.borrow_mut() = Some(updated);
}

#[when("the user removes favourite trail 9")]
fn remove_unknown(
    store: &RefCell<Option<UserStore<FixedClock>>>,
    profile: &RefCell<Option<UserProfile>>,
) {
    let (updated, removed) = with_store(store, |opened| opened.remove::<Trail>(&user(), 9))
        .unwrap_or_else(|err| panic!("remove trail: {err}"));
    assert_eq!(removed, 0);
    *profile.borrow_mut() = Some(updated);
}

#[then("the profile has no score and empty lists")]
fn empty_profile(profile: &RefCell<Option<UserProfile>>) {
    let loaded = recorded(profile);
    assert_eq!(loaded.user_id, user());
    assert!(loaded.biophilia_score.is_none());
    assert!(loaded.favorite_trails.is_empty());
    assert!(loaded.registered_events.is_empty());
    assert!(loaded.nature_journal.is_empty());
}

#[then("no profile file has been written")]
fn nothing_written(store: &RefCell<Option<UserStore<FixedClock>>>) {
    let path = with_store(store, |opened| opened.path_for(&user()));
    assert!(!path.exists(), "{path} should not exist");
}

#[then("the favourites are the renamed trail 1 followed by trail 2")]
fn renamed_in_place(profile: &RefCell<Option<UserProfile>>) {
    let names: Vec<String> = recorded(profile)
        .favorite_trails
        .into_iter()
        .map(|trail| trail.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "Pine Forest Loop (reopened)".to_owned(),
            "Mountain Vista Trail".to_owned()
        ]
    );
}

#[then("the favourites still hold 2 trails")]
fn still_two(profile: &RefCell<Option<UserProfile>>) {
    assert_eq!(recorded(profile).favorite_trails.len(), 2);
}

#[then("the profile was stamped with the current time")]
fn stamped(profile: &RefCell<Option<UserProfile>>) {
    assert_eq!(recorded(profile).last_updated, Some(noon()));
}

#[scenario(path = "tests/features/user_store.feature", index = 0)]
fn unknown_user(
    data_dir: DataDir,
    store: RefCell<Option<UserStore<FixedClock>>>,
    profile: RefCell<Option<UserProfile>>,
) {
    let _ = (data_dir, store, profile);
}

#[scenario(path = "tests/features/user_store.feature", index = 1)]
fn upsert_in_place(
    data_dir: DataDir,
    store: RefCell<Option<UserStore<FixedClock>>>,
    profile: RefCell<Option<UserProfile>>,
) {
    let _ = (data_dir, store, profile);
}

#[scenario(path = "tests/features/user_store.feature", index = 2)]
fn remove_unknown_entry(
    data_dir: DataDir,
    store: RefCell<Option<UserStore<FixedClock>>>,
    profile: RefCell<Option<UserProfile>>,
) {
    let _ = (data_dir, store, profile);
}
