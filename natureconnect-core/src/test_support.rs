//! Test-only, in-memory `Catalogue` implementation used by unit and behaviour
//! tests.

use chrono::{Days, NaiveDate};

use crate::{Catalogue, Difficulty, Event, EventType, Trail};

/// In-memory `Catalogue` implementation used in tests.
#[derive(Default, Debug, Clone)]
pub struct MemoryCatalogue {
    trails: Vec<Trail>,
    events: Vec<Event>,
}

impl MemoryCatalogue {
    /// Create a catalogue from explicit records.
    #[must_use]
    pub fn new<T, E>(trails: T, events: E) -> Self
    where
        T: IntoIterator<Item = Trail>,
        E: IntoIterator<Item = Event>,
    {
        Self {
            trails: trails.into_iter().collect(),
            events: events.into_iter().collect(),
        }
    }

    /// A small Bay Area catalogue whose events start `today`.
    ///
    /// Trails in nearest-first order from central San Francisco are
    /// 1, 3, 2; events are dated `today + 2`, `today + 1` and `today + 9`.
    #[must_use]
    pub fn bay_area(today: NaiveDate) -> Self {
        let trails = vec![
            trail(1, "Presidio Loop", 37.7749, -122.4194, Difficulty::Easy, "Forest,Views"),
            trail(2, "Ridge Climb", 37.7949, -122.3994, Difficulty::Hard, "Views,Wildlife"),
            trail(3, "Lake Walk", 37.7649, -122.4294, Difficulty::Moderate, "Lake,Wildlife"),
        ];
        let events = vec![
            event(1, "Bird Count", today, 2, EventType::Birdwatching),
            event(2, "Dune Restoration", today, 1, EventType::Conservation),
            event(3, "Night Walk", today, 9, EventType::Education),
        ];
        Self::new(trails, events)
    }
}

impl Catalogue for MemoryCatalogue {
    fn trails(&self) -> &[Trail] {
        &self.trails
    }

    fn events(&self) -> &[Event] {
        &self.events
    }
}

fn trail(
    id: u64,
    name: &str,
    latitude: f64,
    longitude: f64,
    difficulty: Difficulty,
    features: &str,
) -> Trail {
    Trail {
        id,
        name: name.to_owned(),
        latitude,
        longitude,
        length_miles: 2.0,
        difficulty,
        features: features.to_owned(),
        description: format!("{name} test trail"),
        image_url: String::new(),
    }
}

fn event(id: u64, name: &str, today: NaiveDate, offset: u64, event_type: EventType) -> Event {
    Event {
        id,
        name: name.to_owned(),
        date: today.checked_add_days(Days::new(offset)).unwrap_or(today),
        location: "Golden Gate Park".to_owned(),
        event_type,
        description: format!("{name} test event"),
        image_url: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EventQuery, TrailQuery};
    use geo::Coord;
    use rstest::rstest;

    #[rstest]
    fn bay_area_orders_as_documented() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
        let catalogue = MemoryCatalogue::bay_area(today);
        let near: Vec<u64> = catalogue
            .find_trails(&TrailQuery::new().with_origin(Coord {
                x: -122.4194,
                y: 37.7749,
            }))
            .iter()
            .map(|ranked| ranked.trail.id)
            .collect();
        assert_eq!(near, vec![1, 3, 2]);
        let soon: Vec<u64> = catalogue
            .find_events(&EventQuery::new())
            .iter()
            .map(|event| event.id)
            .collect();
        assert_eq!(soon, vec![2, 1, 3]);
        assert_eq!(catalogue.trail(3).map(|t| t.name.as_str()), Some("Lake Walk"));
        assert!(catalogue.event(42).is_none());
    }
}
