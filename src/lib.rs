//! Facade crate for the NatureConnect engine.
//!
//! This crate re-exports the core domain types and, behind the default
//! `data` feature, the file-backed catalogue, profile store and session.

#![forbid(unsafe_code)]

pub use natureconnect_core::{
    BiophiliaScore, Catalogue, Difficulty, Event, EventQuery, EventType, JournalEntry, Location,
    QUIZ_QUESTIONS, QuizAnswers, RankedTrail, Recommendations, Tier, Trail, TrailQuery, Upserted,
    UserId, UserProfile, calculate_score, haversine_miles,
};

#[cfg(feature = "test-support")]
pub use natureconnect_core::test_support;

#[cfg(feature = "data")]
pub use natureconnect_data::{
    CatalogueError, Clock, QuizReport, SampleCatalogue, Session, SessionError, StoreError,
    SystemClock, UserStore,
};
