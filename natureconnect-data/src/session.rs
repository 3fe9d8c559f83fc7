//! Per-interaction state and the user-facing operations built on it.
//!
//! A [`Session`] names the user and, optionally, where they are. Every
//! operation reads the catalogue and the user's stored profile through it,
//! so nothing about the current user lives in global state.

use natureconnect_core::{
    BiophiliaScore, Catalogue, Event, EventQuery, JournalEntry, Location, ProfileField,
    QuizAnswers, RankedTrail, Recommendations, Tier, Trail, TrailQuery, Upserted, UserId,
    UserProfile,
};
use serde::Serialize;
use thiserror::Error;

use crate::{Clock, StoreError, SystemClock, UserStore};

/// Trails suggested after the quiz when the user's location is known.
pub const QUIZ_TRAIL_SUGGESTIONS: usize = 2;
/// Events suggested after the quiz.
pub const QUIZ_EVENT_SUGGESTIONS: usize = 2;

/// Errors raised by [`Session`] operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Loading or saving the profile failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// No trail in the catalogue has this identifier.
    #[error("no trail with id {id} in the catalogue")]
    UnknownTrail {
        /// The requested identifier.
        id: u64,
    },
    /// No event in the catalogue has this identifier.
    #[error("no event with id {id} in the catalogue")]
    UnknownEvent {
        /// The requested identifier.
        id: u64,
    },
}

/// Everything shown after a completed quiz.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizReport {
    /// The new score, already saved to the profile.
    pub score: BiophiliaScore,
    /// Band the score falls in.
    pub tier: Tier,
    /// One-line verdict for the tier.
    pub summary: &'static str,
    /// Suggestions for the tier.
    pub recommendations: Recommendations,
    /// Nearest trails; empty when the location is unknown.
    pub nearby_trails: Vec<RankedTrail>,
    /// Soonest upcoming events.
    pub upcoming_events: Vec<Event>,
}

/// One user's view of the catalogue and their stored profile.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use natureconnect_core::{Location, TrailQuery, UserId};
/// use natureconnect_data::{Clock, SampleCatalogue, Session, UserStore};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = UserStore::open(Utf8Path::new("data"))?;
/// let catalogue = SampleCatalogue::open_or_seed(Utf8Path::new("data"), store.clock().today())?;
/// let session = Session::new(UserId::new("ada")?, &catalogue, &store)
///     .with_location(Location::default_city());
///
/// let nearest = session.find_trails(TrailQuery::new().with_limit(3));
/// session.save_favorite_trail(nearest[0].trail.id)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Session<'a, K, C = SystemClock> {
    user: UserId,
    location: Option<Location>,
    catalogue: &'a K,
    store: &'a UserStore<C>,
}

impl<'a, K: Catalogue, C: Clock> Session<'a, K, C> {
    /// Start a session for `user` with no known location.
    #[must_use]
    pub const fn new(user: UserId, catalogue: &'a K, store: &'a UserStore<C>) -> Self {
        Self {
            user,
            location: None,
            catalogue,
            store,
        }
    }

    /// Set the user's location while returning `self` for chaining.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Replace or forget the user's location.
    pub fn set_location(&mut self, location: Option<Location>) {
        self.location = location;
    }

    /// The session's user.
    #[must_use]
    pub const fn user(&self) -> &UserId {
        &self.user
    }

    /// Run `query`, measuring from the session location unless the query
    /// names its own origin.
    #[must_use]
    pub fn find_trails(&self, query: TrailQuery) -> Vec<RankedTrail> {
        let located = match &self.location {
            Some(here) if query.origin().is_none() => query.with_origin(here.coord()),
            _ => query,
        };
        self.catalogue.find_trails(&located)
    }

    /// The `limit` nearest trails, or nothing when the location is unknown.
    #[must_use]
    pub fn nearby_trails(&self, limit: usize) -> Vec<RankedTrail> {
        if self.location.is_none() {
            return Vec::new();
        }
        self.find_trails(TrailQuery::new().with_limit(limit))
    }

    /// Run `query` over the events as given.
    #[must_use]
    pub fn find_events(&self, query: &EventQuery) -> Vec<Event> {
        self.catalogue.find_events(query)
    }

    /// The `limit` soonest events dated today or later.
    #[must_use]
    pub fn upcoming_events(&self, limit: usize) -> Vec<Event> {
        let today = self.store.clock().today();
        self.find_events(&EventQuery::new().starting(today).with_limit(limit))
    }

    /// The user's stored profile, or a fresh one.
    ///
    /// # Errors
    /// Returns [`SessionError::Store`] when the profile cannot be read.
    pub fn profile(&self) -> Result<UserProfile, SessionError> {
        Ok(self.store.load(&self.user)?)
    }

    /// Score `answers`, save the score and build the post-quiz report.
    ///
    /// # Errors
    /// Returns [`SessionError::Store`] when the score cannot be saved.
    pub fn take_quiz(&self, answers: &QuizAnswers) -> Result<QuizReport, SessionError> {
        let score = BiophiliaScore::from_answers(answers);
        self.store
            .set_field(&self.user, ProfileField::BiophiliaScore(Some(score)))?;
        let tier = score.tier();
        Ok(QuizReport {
            score,
            tier,
            summary: tier.summary(),
            recommendations: Recommendations::for_score(
                u32::from(score.value()),
                self.location.as_ref(),
            ),
            nearby_trails: self.nearby_trails(QUIZ_TRAIL_SUGGESTIONS),
            upcoming_events: self.upcoming_events(QUIZ_EVENT_SUGGESTIONS),
        })
    }

    /// Add catalogue trail `id` to the favourites.
    ///
    /// # Errors
    /// Returns [`SessionError::UnknownTrail`] when the catalogue has no such
    /// trail, or [`SessionError::Store`] when saving fails.
    pub fn save_favorite_trail(&self, id: u64) -> Result<Upserted, SessionError> {
        let trail: Trail = self
            .catalogue
            .trail(id)
            .cloned()
            .ok_or(SessionError::UnknownTrail { id })?;
        let (_, outcome) = self.store.upsert(&self.user, trail)?;
        Ok(outcome)
    }

    /// Drop trail `id` from the favourites, returning how many entries went.
    ///
    /// # Errors
    /// Returns [`SessionError::Store`] when loading or saving fails.
    pub fn remove_favorite_trail(&self, id: u64) -> Result<usize, SessionError> {
        let (_, removed) = self.store.remove::<Trail>(&self.user, id)?;
        Ok(removed)
    }

    /// Register for catalogue event `id`.
    ///
    /// # Errors
    /// Returns [`SessionError::UnknownEvent`] when the catalogue has no such
    /// event, or [`SessionError::Store`] when saving fails.
    pub fn register_event(&self, id: u64) -> Result<Upserted, SessionError> {
        let event: Event = self
            .catalogue
            .event(id)
            .cloned()
            .ok_or(SessionError::UnknownEvent { id })?;
        let (_, outcome) = self.store.upsert(&self.user, event)?;
        Ok(outcome)
    }

    /// Cancel the registration for event `id`, returning how many entries
    /// went.
    ///
    /// # Errors
    /// Returns [`SessionError::Store`] when loading or saving fails.
    pub fn cancel_event(&self, id: u64) -> Result<usize, SessionError> {
        let (_, removed) = self.store.remove::<Event>(&self.user, id)?;
        Ok(removed)
    }

    /// Append `entry` to the nature journal.
    ///
    /// # Errors
    /// Returns [`SessionError::Store`] when loading or saving fails.
    pub fn add_journal_entry(&self, entry: JournalEntry) -> Result<UserProfile, SessionError> {
        let (profile, _) = self.store.upsert(&self.user, entry)?;
        Ok(profile)
    }
}
