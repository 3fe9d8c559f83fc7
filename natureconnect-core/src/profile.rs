//! Persisted user profiles: quiz score, favourites, registrations and the
//! nature journal.
//!
//! Array fields hold at most one entry per identifier. [`UserProfile::upsert`]
//! replaces a matching entry in place and appends otherwise; entries without
//! an identifier (journal entries) always append.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{BiophiliaScore, Event, Trail};

const MAX_USER_ID_LEN: usize = 64;

/// Identifier naming a user's profile document.
///
/// Accepts 1 to 64 ASCII alphanumerics, `-` or `_`, so an id can be used
/// directly in a file name.
///
/// # Examples
/// ```
/// use natureconnect_core::UserId;
///
/// let id: UserId = "trail_fan-42".parse().expect("valid id");
/// assert_eq!(id.as_str(), "trail_fan-42");
/// assert!("../etc".parse::<UserId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

/// Errors raised when validating a [`UserId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserIdError {
    /// The id was empty.
    #[error("user id must not be empty")]
    Empty,
    /// The id exceeded the length limit.
    #[error("user id is {length} characters long; the limit is {MAX_USER_ID_LEN}")]
    TooLong {
        /// Length of the rejected id.
        length: usize,
    },
    /// The id contained a character outside the allowed set.
    #[error("user id contains {character:?}; only ASCII letters, digits, '-' and '_' are allowed")]
    InvalidCharacter {
        /// The first offending character.
        character: char,
    },
}

impl UserId {
    /// Validate `id`.
    ///
    /// # Errors
    /// Returns [`UserIdError`] when `id` is empty, too long or contains a
    /// character other than ASCII alphanumerics, `-` and `_`.
    pub fn new(id: impl Into<String>) -> Result<Self, UserIdError> {
        let raw = id.into();
        if raw.is_empty() {
            return Err(UserIdError::Empty);
        }
        if raw.len() > MAX_USER_ID_LEN {
            return Err(UserIdError::TooLong { length: raw.len() });
        }
        if let Some(character) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(UserIdError::InvalidCharacter { character });
        }
        Ok(Self(raw))
    }

    /// Borrow the id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UserId {
    type Err = UserIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for UserId {
    type Error = UserIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// A dated note about time spent outdoors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Day of the visit.
    pub date: NaiveDate,
    /// Where it happened.
    pub location: String,
    /// What the user noticed.
    pub observations: String,
    /// How it made them feel.
    pub feelings: String,
    /// Whether a photo was attached.
    #[serde(default)]
    pub has_photo: bool,
}

/// Errors raised by [`JournalEntry::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JournalEntryError {
    /// The observations were blank.
    #[error("journal entry observations must not be blank")]
    BlankObservations,
    /// The feelings were blank.
    #[error("journal entry feelings must not be blank")]
    BlankFeelings,
}

impl JournalEntry {
    /// Build an entry, rejecting blank observations or feelings.
    ///
    /// # Errors
    /// Returns [`JournalEntryError`] naming the first blank field.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use natureconnect_core::JournalEntry;
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 4, 2).expect("valid date");
    /// let entry = JournalEntry::new(day, "Crystal Lake", "Two herons", "Calm", false)
    ///     .expect("complete entry");
    /// assert_eq!(entry.location, "Crystal Lake");
    /// assert!(JournalEntry::new(day, "Crystal Lake", " ", "Calm", false).is_err());
    /// ```
    pub fn new(
        date: NaiveDate,
        location: impl Into<String>,
        observations: impl Into<String>,
        feelings: impl Into<String>,
        has_photo: bool,
    ) -> Result<Self, JournalEntryError> {
        let observed = observations.into();
        if observed.trim().is_empty() {
            return Err(JournalEntryError::BlankObservations);
        }
        let felt = feelings.into();
        if felt.trim().is_empty() {
            return Err(JournalEntryError::BlankFeelings);
        }
        Ok(Self {
            date,
            location: location.into(),
            observations: observed,
            feelings: felt,
            has_photo,
        })
    }
}

/// A record carrying a catalogue identifier.
pub trait Identified {
    /// Catalogue identifier.
    fn id(&self) -> u64;
}

impl Identified for Trail {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Identified for Event {
    fn id(&self) -> u64 {
        self.id
    }
}

/// An item stored in one of the profile's array fields.
pub trait ProfileItem: Sized {
    /// Serialised name of the array field.
    const FIELD: &'static str;

    /// The array field holding items of this type.
    fn items(profile: &mut UserProfile) -> &mut Vec<Self>;

    /// Identifier used to detect duplicates; `None` means always append.
    fn item_id(&self) -> Option<u64>;
}

impl ProfileItem for Trail {
    const FIELD: &'static str = "favorite_trails";

    fn items(profile: &mut UserProfile) -> &mut Vec<Self> {
        &mut profile.favorite_trails
    }

    fn item_id(&self) -> Option<u64> {
        Some(self.id())
    }
}

impl ProfileItem for Event {
    const FIELD: &'static str = "registered_events";

    fn items(profile: &mut UserProfile) -> &mut Vec<Self> {
        &mut profile.registered_events
    }

    fn item_id(&self) -> Option<u64> {
        Some(self.id())
    }
}

impl ProfileItem for JournalEntry {
    const FIELD: &'static str = "nature_journal";

    fn items(profile: &mut UserProfile) -> &mut Vec<Self> {
        &mut profile.nature_journal
    }

    fn item_id(&self) -> Option<u64> {
        None
    }
}

/// A whole-field replacement applied by [`UserProfile::set_field`].
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileField {
    /// Replace or clear the quiz score.
    BiophiliaScore(Option<BiophiliaScore>),
    /// Replace the favourite trails.
    FavoriteTrails(Vec<Trail>),
    /// Replace the registered events.
    RegisteredEvents(Vec<Event>),
    /// Replace the nature journal.
    NatureJournal(Vec<JournalEntry>),
}

impl ProfileField {
    /// Serialised name of the field being replaced.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BiophiliaScore(_) => "biophilia_score",
            Self::FavoriteTrails(_) => Trail::FIELD,
            Self::RegisteredEvents(_) => Event::FIELD,
            Self::NatureJournal(_) => JournalEntry::FIELD,
        }
    }
}

/// Outcome of [`UserProfile::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Upserted {
    /// An entry with the same identifier was replaced in place.
    Replaced,
    /// The item was appended.
    Appended,
}

/// Everything stored for one user.
///
/// Missing array fields and a missing score deserialise to their empty
/// defaults, so older or hand-edited documents still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Owner of the document.
    pub user_id: UserId,
    /// When the document was first created.
    pub created_at: DateTime<Utc>,
    /// When the document was last written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    /// Latest quiz result.
    #[serde(default)]
    pub biophilia_score: Option<BiophiliaScore>,
    /// Saved trails, stored by value.
    #[serde(default)]
    pub favorite_trails: Vec<Trail>,
    /// Events the user signed up for, stored by value.
    #[serde(default)]
    pub registered_events: Vec<Event>,
    /// Journal entries in the order they were written.
    #[serde(default)]
    pub nature_journal: Vec<JournalEntry>,
}

impl UserProfile {
    /// The empty skeleton for a user with no stored document.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use natureconnect_core::{UserId, UserProfile};
    ///
    /// let id = UserId::new("ada").expect("valid id");
    /// let profile = UserProfile::new(id, Utc::now());
    /// assert!(profile.biophilia_score.is_none());
    /// assert!(profile.favorite_trails.is_empty());
    /// ```
    #[must_use]
    pub const fn new(user_id: UserId, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            created_at,
            last_updated: None,
            biophilia_score: None,
            favorite_trails: Vec::new(),
            registered_events: Vec::new(),
            nature_journal: Vec::new(),
        }
    }

    /// Replace a whole field.
    pub fn set_field(&mut self, field: ProfileField) {
        match field {
            ProfileField::BiophiliaScore(score) => self.biophilia_score = score,
            ProfileField::FavoriteTrails(trails) => self.favorite_trails = trails,
            ProfileField::RegisteredEvents(events) => self.registered_events = events,
            ProfileField::NatureJournal(entries) => self.nature_journal = entries,
        }
    }

    /// Replace the entry sharing `item`'s identifier, or append `item`.
    pub fn upsert<T: ProfileItem>(&mut self, item: T) -> Upserted {
        let items = T::items(self);
        if let Some(id) = item.item_id()
            && let Some(slot) = items.iter_mut().find(|entry| entry.item_id() == Some(id))
        {
            *slot = item;
            // Later duplicates can only come from hand-edited files.
            let mut seen = false;
            items.retain(|entry| {
                if entry.item_id() != Some(id) {
                    return true;
                }
                let first = !seen;
                seen = true;
                first
            });
            return Upserted::Replaced;
        }
        items.push(item);
        Upserted::Appended
    }

    /// Drop every entry with identifier `id`, returning how many went.
    pub fn remove<T: ProfileItem>(&mut self, id: u64) -> usize {
        let items = T::items(self);
        let before = items.len();
        items.retain(|entry| entry.item_id() != Some(id));
        before - items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Difficulty, EventType};
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    fn trail(id: u64, name: &str) -> Trail {
        Trail {
            id,
            name: name.into(),
            latitude: 0.0,
            longitude: 0.0,
            length_miles: 1.0,
            difficulty: Difficulty::Easy,
            features: String::new(),
            description: String::new(),
            image_url: String::new(),
        }
    }

    #[fixture]
    fn profile() -> UserProfile {
        let created = Utc
            .with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp");
        UserProfile::new(UserId::new("walker").expect("valid id"), created)
    }

    #[rstest]
    #[case("", UserIdError::Empty)]
    #[case("a/b", UserIdError::InvalidCharacter { character: '/' })]
    #[case("..", UserIdError::InvalidCharacter { character: '.' })]
    #[case("caf\u{e9}", UserIdError::InvalidCharacter { character: '\u{e9}' })]
    fn user_id_rejects_unsafe_values(#[case] raw: &str, #[case] expected: UserIdError) {
        assert_eq!(UserId::new(raw), Err(expected));
    }

    #[rstest]
    fn user_id_length_limit() {
        assert!(UserId::new("a".repeat(64)).is_ok());
        assert_eq!(
            UserId::new("a".repeat(65)),
            Err(UserIdError::TooLong { length: 65 })
        );
    }

    #[rstest]
    fn upsert_replaces_in_place(mut profile: UserProfile) {
        profile.upsert(trail(1, "First"));
        profile.upsert(trail(2, "Second"));
        let outcome = profile.upsert(trail(1, "Renamed"));
        assert_eq!(outcome, Upserted::Replaced);
        let names: Vec<_> = profile.favorite_trails.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Renamed", "Second"]);
    }

    #[rstest]
    fn upsert_collapses_duplicate_ids(mut profile: UserProfile) {
        profile.favorite_trails = vec![trail(1, "a"), trail(2, "b"), trail(1, "c")];
        profile.upsert(trail(1, "d"));
        let names: Vec<_> = profile.favorite_trails.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["d", "b"]);
    }

    #[rstest]
    fn journal_entries_always_append(mut profile: UserProfile) {
        let day = NaiveDate::from_ymd_opt(2025, 3, 2).expect("valid date");
        let entry = JournalEntry::new(day, "Park", "Robins", "Happy", true).expect("entry");
        assert_eq!(profile.upsert(entry.clone()), Upserted::Appended);
        assert_eq!(profile.upsert(entry), Upserted::Appended);
        assert_eq!(profile.nature_journal.len(), 2);
    }

    #[rstest]
    fn remove_reports_how_many_entries_went(mut profile: UserProfile) {
        profile.upsert(Event {
            id: 7,
            name: "Bird count".into(),
            date: NaiveDate::from_ymd_opt(2025, 3, 9).expect("valid date"),
            location: "Marsh".into(),
            event_type: EventType::Birdwatching,
            description: String::new(),
            image_url: String::new(),
        });
        assert_eq!(profile.remove::<Event>(99), 0);
        assert_eq!(profile.registered_events.len(), 1);
        assert_eq!(profile.remove::<Event>(7), 1);
        assert!(profile.registered_events.is_empty());
    }

    #[rstest]
    fn set_field_replaces_score(mut profile: UserProfile) {
        let score = BiophiliaScore::new(64).expect("valid score");
        profile.set_field(ProfileField::BiophiliaScore(Some(score)));
        assert_eq!(profile.biophilia_score, Some(score));
        assert_eq!(
            ProfileField::BiophiliaScore(None).name(),
            "biophilia_score"
        );
    }

    #[rstest]
    fn sparse_documents_load_with_defaults() {
        let json = r#"{"user_id":"walker","created_at":"2025-03-01T09:00:00Z"}"#;
        let loaded: UserProfile = serde_json::from_str(json).expect("sparse profile");
        assert!(loaded.biophilia_score.is_none());
        assert!(loaded.nature_journal.is_empty());
        assert!(loaded.last_updated.is_none());
    }

    #[rstest]
    fn documents_with_unsafe_ids_are_rejected() {
        let json = r#"{"user_id":"../x","created_at":"2025-03-01T09:00:00Z"}"#;
        assert!(serde_json::from_str::<UserProfile>(json).is_err());
    }
}
