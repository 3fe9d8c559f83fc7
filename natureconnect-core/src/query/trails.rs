use std::cmp::Ordering;

use geo::Coord;
use serde::Serialize;

use crate::{Difficulty, Trail, haversine_miles};

use super::truncate_to;

/// A trail annotated with its distance from the query origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTrail {
    /// The matching trail.
    #[serde(flatten)]
    pub trail: Trail,
    /// Miles from the query origin; `None` when the query had no origin.
    #[serde(rename = "distance", skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
}

/// Criteria for finding trails.
///
/// With an origin, every trail gets a haversine distance and results are
/// ordered nearest first. Without one, distances stay `None`, the maximum
/// distance cannot be evaluated and is ignored, and results keep catalogue
/// order.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use natureconnect_core::{Difficulty, Trail, TrailQuery};
///
/// let trail = |id: u64, lat: f64, difficulty: Difficulty| Trail {
///     id,
///     name: format!("trail {id}"),
///     latitude: lat,
///     longitude: 0.0,
///     length_miles: 1.0,
///     difficulty,
///     features: "Forest".into(),
///     description: String::new(),
///     image_url: String::new(),
/// };
/// let trails = vec![
///     trail(1, 0.2, Difficulty::Easy),
///     trail(2, 0.1, Difficulty::Easy),
///     trail(3, 0.0, Difficulty::Hard),
/// ];
///
/// let found = TrailQuery::new()
///     .with_origin(Coord { x: 0.0, y: 0.0 })
///     .with_difficulties([Difficulty::Easy])
///     .with_limit(1)
///     .run(&trails);
///
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].trail.id, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrailQuery {
    origin: Option<Coord<f64>>,
    max_distance_miles: Option<f64>,
    difficulties: Vec<Difficulty>,
    features: Vec<String>,
    limit: Option<usize>,
}

impl TrailQuery {
    /// Construct a query with no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure distances from `origin`.
    #[must_use]
    pub fn with_origin(mut self, origin: Coord<f64>) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Keep trails no further than `miles` from the origin.
    #[must_use]
    pub fn with_max_distance(mut self, miles: f64) -> Self {
        self.max_distance_miles = Some(miles);
        self
    }

    /// Keep trails graded with any of `difficulties`.
    #[must_use]
    pub fn with_difficulties(mut self, difficulties: impl IntoIterator<Item = Difficulty>) -> Self {
        self.difficulties.extend(difficulties);
        self
    }

    /// Keep trails carrying every one of `features`, ignoring case.
    #[must_use]
    pub fn with_features<S>(mut self, features: impl IntoIterator<Item = S>) -> Self
    where
        S: AsRef<str>,
    {
        self.features.extend(
            features
                .into_iter()
                .map(|feature| feature.as_ref().trim().to_owned())
                .filter(|feature| !feature.is_empty()),
        );
        self
    }

    /// Return at most `limit` trails.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Origin the query measures from, if any.
    #[must_use]
    pub const fn origin(&self) -> Option<Coord<f64>> {
        self.origin
    }

    /// Filter, rank and truncate `trails`.
    #[must_use]
    pub fn run(&self, trails: &[Trail]) -> Vec<RankedTrail> {
        let mut ranked: Vec<RankedTrail> = trails
            .iter()
            .map(|trail| RankedTrail {
                distance_miles: self.origin.map(|origin| haversine_miles(origin, trail.coord())),
                trail: trail.clone(),
            })
            .filter(|candidate| self.accepts(candidate))
            .collect();
        ranked.sort_by(|a, b| compare_distances(a.distance_miles, b.distance_miles));
        truncate_to(&mut ranked, self.limit);
        ranked
    }

    fn accepts(&self, candidate: &RankedTrail) -> bool {
        self.within_distance(candidate.distance_miles)
            && self.accepts_difficulty(candidate.trail.difficulty)
            && self
                .features
                .iter()
                .all(|feature| candidate.trail.has_feature(feature))
    }

    fn within_distance(&self, distance: Option<f64>) -> bool {
        match (self.max_distance_miles, distance) {
            (Some(max), Some(miles)) => miles <= max,
            _ => true,
        }
    }

    fn accepts_difficulty(&self, difficulty: Difficulty) -> bool {
        self.difficulties.is_empty() || self.difficulties.contains(&difficulty)
    }
}

fn compare_distances(left: Option<f64>, right: Option<f64>) -> Ordering {
    match (left, right) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn trail(id: u64, lat: f64, difficulty: Difficulty, features: &str) -> Trail {
        Trail {
            id,
            name: format!("Trail {id}"),
            latitude: lat,
            longitude: 0.0,
            length_miles: 1.0,
            difficulty,
            features: features.into(),
            description: String::new(),
            image_url: String::new(),
        }
    }

    #[fixture]
    fn trails() -> Vec<Trail> {
        vec![
            trail(1, 0.30, Difficulty::Easy, "Forest,Wildlife"),
            trail(2, 0.10, Difficulty::Moderate, "Lake,Forest"),
            trail(3, 0.20, Difficulty::Hard, "Waterfall"),
        ]
    }

    fn ids(found: &[RankedTrail]) -> Vec<u64> {
        found.iter().map(|ranked| ranked.trail.id).collect()
    }

    #[rstest]
    fn without_origin_keeps_catalogue_order(trails: Vec<Trail>) {
        let found = TrailQuery::new().run(&trails);
        assert_eq!(ids(&found), vec![1, 2, 3]);
        assert!(found.iter().all(|ranked| ranked.distance_miles.is_none()));
    }

    #[rstest]
    fn with_origin_sorts_nearest_first(trails: Vec<Trail>) {
        let found = TrailQuery::new()
            .with_origin(Coord { x: 0.0, y: 0.0 })
            .run(&trails);
        assert_eq!(ids(&found), vec![2, 3, 1]);
    }

    #[rstest]
    fn max_distance_is_ignored_without_origin(trails: Vec<Trail>) {
        let found = TrailQuery::new().with_max_distance(0.0).run(&trails);
        assert_eq!(found.len(), 3);
    }

    #[rstest]
    fn max_distance_is_inclusive(trails: Vec<Trail>) {
        let origin = Coord { x: 0.0, y: 0.0 };
        let exact = haversine_miles(origin, Coord { x: 0.0, y: 0.20 });
        let found = TrailQuery::new()
            .with_origin(origin)
            .with_max_distance(exact)
            .run(&trails);
        assert_eq!(ids(&found), vec![2, 3]);
    }

    #[rstest]
    fn difficulty_set_uses_membership(trails: Vec<Trail>) {
        let found = TrailQuery::new()
            .with_difficulties([Difficulty::Easy, Difficulty::Hard])
            .run(&trails);
        assert_eq!(ids(&found), vec![1, 3]);
    }

    #[rstest]
    fn every_requested_feature_must_be_present(trails: Vec<Trail>) {
        let found = TrailQuery::new()
            .with_features(["forest", "WILDLIFE"])
            .run(&trails);
        assert_eq!(ids(&found), vec![1]);
    }

    #[rstest]
    fn blank_features_are_not_filters(trails: Vec<Trail>) {
        let found = TrailQuery::new().with_features(["", "  "]).run(&trails);
        assert_eq!(found.len(), 3);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(2, 2)]
    #[case(10, 3)]
    fn limit_truncates(trails: Vec<Trail>, #[case] limit: usize, #[case] expected: usize) {
        let found = TrailQuery::new().with_limit(limit).run(&trails);
        assert_eq!(found.len(), expected);
    }

    #[rstest]
    fn ranked_trail_serialises_distance_alongside_fields(trails: Vec<Trail>) {
        let found = TrailQuery::new()
            .with_origin(Coord { x: 0.0, y: 0.10 })
            .with_limit(1)
            .run(&trails);
        let json = serde_json::to_value(&found).expect("serialise ranked trails");
        assert_eq!(json[0]["id"], serde_json::json!(2));
        assert_eq!(json[0]["distance"], serde_json::json!(0.0));
    }
}
