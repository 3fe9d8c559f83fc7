//! Read access to the trail and event catalogue.

use crate::{Event, EventQuery, RankedTrail, Trail, TrailQuery};

/// A source of catalogue records.
///
/// Implementations hold immutable records in a stable order; queries rely on
/// that order as their tie-breaker.
pub trait Catalogue {
    /// Every trail, in catalogue order.
    fn trails(&self) -> &[Trail];

    /// Every event, in catalogue order.
    fn events(&self) -> &[Event];

    /// Look up a trail by identifier.
    fn trail(&self, id: u64) -> Option<&Trail> {
        self.trails().iter().find(|trail| trail.id == id)
    }

    /// Look up an event by identifier.
    fn event(&self, id: u64) -> Option<&Event> {
        self.events().iter().find(|event| event.id == id)
    }

    /// Run `query` over the trails.
    fn find_trails(&self, query: &TrailQuery) -> Vec<RankedTrail> {
        query.run(self.trails())
    }

    /// Run `query` over the events.
    fn find_events(&self, query: &EventQuery) -> Vec<Event> {
        query.run(self.events())
    }
}
