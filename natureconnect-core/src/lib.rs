//! Core domain types for the NatureConnect engine.
//!
//! Everything here is pure: trails and events from the sample catalogue,
//! great-circle distances, the filter/sort/limit query pipelines, biophilia
//! quiz scoring with its tiered recommendations, and the persisted user
//! profile model. Storage lives in `natureconnect-data`.

pub mod biophilia;
pub mod catalogue;
pub mod distance;
pub mod event;
pub mod location;
pub mod profile;
pub mod query;
pub mod recommendations;
pub mod trail;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use biophilia::{
    ANSWER_RANGE, BiophiliaScore, BiophiliaScoreError, QUIZ_QUESTIONS, QuizAnswers,
    QuizAnswersError, calculate_score,
};
pub use catalogue::Catalogue;
pub use distance::{EARTH_RADIUS_MILES, haversine_miles};
pub use event::{Event, EventType};
pub use location::Location;
pub use profile::{
    Identified, JournalEntry, JournalEntryError, ProfileField, ProfileItem, Upserted, UserId,
    UserIdError, UserProfile,
};
pub use query::{EventQuery, RankedTrail, TrailQuery};
pub use recommendations::{Recommendations, Tier};
pub use trail::{Difficulty, DifficultyParseError, Trail};
