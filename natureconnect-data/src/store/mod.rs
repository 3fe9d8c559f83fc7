//! Per-user JSON profile documents.
//!
//! Each profile lives in `<data_dir>/user_<id>.json`. Every mutation is a
//! read-modify-write of the whole document with no locking, so concurrent
//! writers race and the last one wins.

mod clock;
mod error;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::StoreError;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8;
use log::debug;
use natureconnect_core::{ProfileField, ProfileItem, Upserted, UserId, UserProfile};

use natureconnect_fs::{open_data_dir, read_optional, replace_file};

/// Loads and saves user profiles in a data directory.
#[derive(Debug)]
pub struct UserStore<C = SystemClock> {
    root: Utf8PathBuf,
    dir: fs_utf8::Dir,
    clock: C,
}

impl UserStore<SystemClock> {
    /// Open the store rooted at `data_dir`, creating the directory when
    /// missing.
    ///
    /// # Errors
    /// Returns [`StoreError::OpenDir`] when the directory cannot be created
    /// or opened.
    pub fn open(data_dir: &Utf8Path) -> Result<Self, StoreError> {
        Self::with_clock(data_dir, SystemClock)
    }
}

impl<C: Clock> UserStore<C> {
    /// Open the store with an explicit clock.
    ///
    /// # Errors
    /// Returns [`StoreError::OpenDir`] when the directory cannot be created
    /// or opened.
    pub fn with_clock(data_dir: &Utf8Path, clock: C) -> Result<Self, StoreError> {
        let dir = open_data_dir(data_dir).map_err(|source| StoreError::OpenDir {
            path: data_dir.to_path_buf(),
            source,
        })?;
        Ok(Self {
            root: data_dir.to_path_buf(),
            dir,
            clock,
        })
    }

    /// The clock used for timestamps.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Location of `user`'s document.
    #[must_use]
    pub fn path_for(&self, user: &UserId) -> Utf8PathBuf {
        self.root.join(file_name(user))
    }

    /// Load `user`'s profile, or a fresh skeleton when none is stored.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the file cannot be read, holds malformed
    /// JSON or belongs to another user.
    pub fn load(&self, user: &UserId) -> Result<UserProfile, StoreError> {
        let name = file_name(user);
        let stored = read_optional(&self.dir, &name).map_err(|source| StoreError::Read {
            path: self.path_for(user),
            source,
        })?;
        let Some(contents) = stored else {
            debug!("No profile stored for {user}; starting a new one");
            return Ok(UserProfile::new(user.clone(), self.clock.now()));
        };
        let profile: UserProfile =
            serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
                path: self.path_for(user),
                source,
            })?;
        if &profile.user_id != user {
            return Err(StoreError::ForeignDocument {
                path: self.path_for(user),
                owner: profile.user_id,
            });
        }
        Ok(profile)
    }

    /// Stamp `profile.last_updated` and write the whole document.
    ///
    /// The document is stored under `user` regardless of
    /// `profile.user_id`, which is overwritten to match.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the profile cannot be encoded or written.
    pub fn save(&self, user: &UserId, profile: &mut UserProfile) -> Result<(), StoreError> {
        profile.user_id = user.clone();
        profile.last_updated = Some(self.clock.now());
        let json = serde_json::to_vec_pretty(profile).map_err(|source| StoreError::Encode {
            user_id: user.clone(),
            source,
        })?;
        replace_file(&self.dir, &file_name(user), &json).map_err(|source| StoreError::Write {
            path: self.path_for(user),
            source,
        })?;
        debug!("Saved profile {}", self.path_for(user));
        Ok(())
    }

    /// Replace one whole field and save.
    ///
    /// # Errors
    /// Returns [`StoreError`] when loading or saving fails.
    pub fn set_field(&self, user: &UserId, field: ProfileField) -> Result<UserProfile, StoreError> {
        self.modify(user, |profile| profile.set_field(field))
            .map(|(profile, ())| profile)
    }

    /// Replace the entry sharing `item`'s identifier, or append it, and save.
    ///
    /// # Errors
    /// Returns [`StoreError`] when loading or saving fails.
    pub fn upsert<T: ProfileItem>(
        &self,
        user: &UserId,
        item: T,
    ) -> Result<(UserProfile, Upserted), StoreError> {
        self.modify(user, |profile| profile.upsert(item))
    }

    /// Drop entries with identifier `id` and save, even when nothing
    /// matched. Returns the profile and the number of entries removed.
    ///
    /// # Errors
    /// Returns [`StoreError`] when loading or saving fails.
    pub fn remove<T: ProfileItem>(
        &self,
        user: &UserId,
        id: u64,
    ) -> Result<(UserProfile, usize), StoreError> {
        self.modify(user, |profile| profile.remove::<T>(id))
    }

    fn modify<R>(
        &self,
        user: &UserId,
        change: impl FnOnce(&mut UserProfile) -> R,
    ) -> Result<(UserProfile, R), StoreError> {
        let mut profile = self.load(user)?;
        let outcome = change(&mut profile);
        self.save(user, &mut profile)?;
        Ok((profile, outcome))
    }
}

fn file_name(user: &UserId) -> String {
    format!("user_{user}.json")
}
