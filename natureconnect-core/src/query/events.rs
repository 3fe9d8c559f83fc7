use chrono::NaiveDate;

use crate::{Event, EventType};

use super::truncate_to;

/// Criteria for finding events, soonest first.
///
/// Both ends of the date range are inclusive and either may be left open.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use natureconnect_core::{Event, EventQuery, EventType};
///
/// let day = |d| NaiveDate::from_ymd_opt(2025, 5, d).expect("valid May date");
/// let event = |id: u64, date: NaiveDate, event_type: EventType| Event {
///     id,
///     name: format!("event {id}"),
///     date,
///     location: "Park".into(),
///     event_type,
///     description: String::new(),
///     image_url: String::new(),
/// };
/// let events = vec![
///     event(1, day(20), EventType::Education),
///     event(2, day(10), EventType::Conservation),
///     event(3, day(12), EventType::Education),
/// ];
///
/// let found = EventQuery::new()
///     .with_date_range(day(10), day(15))
///     .with_types([EventType::Education])
///     .run(&events);
///
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].id, 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    from: Option<NaiveDate>,
    until: Option<NaiveDate>,
    types: Vec<EventType>,
    limit: Option<usize>,
}

impl EventQuery {
    /// Construct a query with no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep events dated within `from..=until`.
    #[must_use]
    pub fn with_date_range(self, from: NaiveDate, until: NaiveDate) -> Self {
        self.starting(from).ending(until)
    }

    /// Keep events on or after `from`.
    #[must_use]
    pub fn starting(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Keep events on or before `until`.
    #[must_use]
    pub fn ending(mut self, until: NaiveDate) -> Self {
        self.until = Some(until);
        self
    }

    /// Keep events of any of `types`.
    #[must_use]
    pub fn with_types(mut self, types: impl IntoIterator<Item = EventType>) -> Self {
        self.types.extend(types);
        self
    }

    /// Return at most `limit` events.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Filter, sort by date and truncate `events`.
    #[must_use]
    pub fn run(&self, events: &[Event]) -> Vec<Event> {
        let mut found: Vec<Event> = events
            .iter()
            .filter(|event| self.accepts(event))
            .cloned()
            .collect();
        found.sort_by_key(|event| event.date);
        truncate_to(&mut found, self.limit);
        found
    }

    fn accepts(&self, event: &Event) -> bool {
        let after_start = self.from.is_none_or(|from| event.date >= from);
        let before_end = self.until.is_none_or(|until| event.date <= until);
        let wanted_type = self.types.is_empty()
            || self
                .types
                .iter()
                .any(|kind| kind.matches_label(event.event_type.as_str()));
        after_start && before_end && wanted_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).expect("valid July date")
    }

    fn event(id: u64, date: NaiveDate, event_type: EventType) -> Event {
        Event {
            id,
            name: format!("Event {id}"),
            date,
            location: "Hilltop Gardens".into(),
            event_type,
            description: String::new(),
            image_url: String::new(),
        }
    }

    #[fixture]
    fn events() -> Vec<Event> {
        vec![
            event(1, day(14), EventType::Community),
            event(2, day(3), EventType::Birdwatching),
            event(3, day(7), EventType::Conservation),
            event(4, day(7), EventType::Education),
            event(5, day(25), EventType::Other("Stargazing".into())),
        ]
    }

    fn ids(found: &[Event]) -> Vec<u64> {
        found.iter().map(|event| event.id).collect()
    }

    #[rstest]
    fn no_filters_sorts_by_date_keeping_ties_stable(events: Vec<Event>) {
        assert_eq!(ids(&EventQuery::new().run(&events)), vec![2, 3, 4, 1, 5]);
    }

    #[rstest]
    fn date_range_includes_both_ends(events: Vec<Event>) {
        let found = EventQuery::new()
            .with_date_range(day(7), day(14))
            .run(&events);
        assert_eq!(ids(&found), vec![3, 4, 1]);
    }

    #[rstest]
    fn open_ended_ranges(events: Vec<Event>) {
        assert_eq!(ids(&EventQuery::new().starting(day(14)).run(&events)), vec![1, 5]);
        assert_eq!(ids(&EventQuery::new().ending(day(3)).run(&events)), vec![2]);
    }

    #[rstest]
    fn inverted_range_is_empty(events: Vec<Event>) {
        let found = EventQuery::new()
            .with_date_range(day(20), day(1))
            .run(&events);
        assert!(found.is_empty());
    }

    #[rstest]
    fn types_match_by_label(events: Vec<Event>) {
        let found = EventQuery::new()
            .with_types([
                EventType::Conservation,
                EventType::Other("stargazing".into()),
            ])
            .run(&events);
        assert_eq!(ids(&found), vec![3, 5]);
    }

    #[rstest]
    fn filters_combine_then_limit(events: Vec<Event>) {
        let found = EventQuery::new()
            .with_date_range(day(1), day(30))
            .with_types([EventType::Education, EventType::Community])
            .with_limit(1)
            .run(&events);
        assert_eq!(ids(&found), vec![4]);
    }
}
