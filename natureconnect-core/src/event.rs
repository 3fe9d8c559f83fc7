//! Nature events and their kinds.
//!
//! The set of event kinds is open: labels outside the known list survive a
//! round trip through [`EventType::Other`].

use std::{convert::Infallible, fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated nature event from the sample catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Catalogue identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Day the event takes place.
    pub date: NaiveDate,
    /// Venue name.
    pub location: String,
    /// Kind of event.
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Free-text description.
    pub description: String,
    /// Link to a representative photo.
    pub image_url: String,
}

/// Kind of nature event.
///
/// # Examples
/// ```
/// use natureconnect_core::EventType;
///
/// let kind: EventType = "guided hike".parse().unwrap_or_else(|never| match never {});
/// assert_eq!(kind, EventType::GuidedHike);
/// assert_eq!(kind.to_string(), "Guided Hike");
///
/// let custom = EventType::from("Night Walk".to_owned());
/// assert_eq!(custom, EventType::Other("Night Walk".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    /// Led walks and hikes.
    GuidedHike,
    /// Habitat restoration and clean-ups.
    Conservation,
    /// Talks and classes.
    Education,
    /// Bird watching outings.
    Birdwatching,
    /// Gatherings open to the neighbourhood.
    Community,
    /// Events aimed at families with children.
    FamilyFriendly,
    /// Volunteer work days.
    Volunteer,
    /// Hands-on workshops.
    Workshop,
    /// Overnight camping trips.
    Camping,
    /// Any label outside the known kinds.
    Other(String),
}

impl EventType {
    /// Every known kind, in catalogue order.
    pub const KNOWN: [Self; 9] = [
        Self::GuidedHike,
        Self::Conservation,
        Self::Education,
        Self::Birdwatching,
        Self::Community,
        Self::FamilyFriendly,
        Self::Volunteer,
        Self::Workshop,
        Self::Camping,
    ];

    /// Return the display label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::GuidedHike => "Guided Hike",
            Self::Conservation => "Conservation",
            Self::Education => "Education",
            Self::Birdwatching => "Birdwatching",
            Self::Community => "Community",
            Self::FamilyFriendly => "Family Friendly",
            Self::Volunteer => "Volunteer",
            Self::Workshop => "Workshop",
            Self::Camping => "Camping",
            Self::Other(label) => label.as_str(),
        }
    }

    /// Compare labels ignoring case and surrounding whitespace.
    #[must_use]
    pub fn matches_label(&self, label: &str) -> bool {
        self.as_str().trim().to_lowercase() == label.trim().to_lowercase()
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let known = Self::KNOWN.into_iter().find(|kind| kind.matches_label(s));
        Ok(known.unwrap_or_else(|| Self::Other(s.trim().to_owned())))
    }
}

impl From<String> for EventType {
    fn from(label: String) -> Self {
        match label.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<EventType> for String {
    fn from(kind: EventType) -> Self {
        match kind {
            EventType::Other(label) => label,
            known => known.as_str().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Conservation", EventType::Conservation)]
    #[case("family friendly", EventType::FamilyFriendly)]
    #[case(" BIRDWATCHING ", EventType::Birdwatching)]
    #[case("Stargazing", EventType::Other("Stargazing".into()))]
    fn labels_parse_into_kinds(#[case] label: &str, #[case] expected: EventType) {
        assert_eq!(EventType::from(label.to_owned()), expected);
    }

    #[rstest]
    fn known_kinds_round_trip_through_labels() {
        for kind in EventType::KNOWN {
            let label = String::from(kind.clone());
            assert_eq!(EventType::from(label), kind);
        }
    }

    #[rstest]
    fn event_serialises_type_as_label() {
        let event = Event {
            id: 8,
            name: "Stargazing Night".into(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
            location: "Mountain Ridge Observatory".into(),
            event_type: EventType::Education,
            description: String::new(),
            image_url: String::new(),
        };
        let json = serde_json::to_value(&event).expect("serialise event");
        assert_eq!(json["type"], serde_json::json!("Education"));
        assert_eq!(json["date"], serde_json::json!("2025-06-01"));
    }
}
