//! Storage for the NatureConnect engine.
//!
//! Responsibilities:
//! - Load the sample trail and event catalogue from CSV, seeding it when
//!   absent.
//! - Persist one JSON profile document per user.
//! - Tie a user, their location, the catalogue and the store together in a
//!   [`Session`].
//!
//! Boundaries:
//! - Domain rules (queries, scoring, profile invariants) live in
//!   `natureconnect-core`.
//! - All file access goes through capability handles from
//!   `natureconnect-fs`.
//!
//! Invariants:
//! - No global mutable state.
//! - Profile writes are whole-document and unsynchronised; the last writer
//!   wins.

pub mod samples;
pub mod session;
pub mod store;

pub use samples::{CatalogueError, EVENTS_FILE, SampleCatalogue, TRAILS_FILE};
pub use session::{
    QUIZ_EVENT_SUGGESTIONS, QUIZ_TRAIL_SUGGESTIONS, QuizReport, Session, SessionError,
};
pub use store::{Clock, FixedClock, StoreError, SystemClock, UserStore};
