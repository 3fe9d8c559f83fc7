//! Great-circle distance between WGS84 coordinates.

use geo::Coord;

/// Radius of the Earth in miles used by [`haversine_miles`].
pub const EARTH_RADIUS_MILES: f64 = 3956.0;

/// Return the great-circle distance in miles between two coordinates.
///
/// Coordinates are decimal degrees with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use natureconnect_core::haversine_miles;
///
/// let ferry_building = Coord { x: -122.4194, y: 37.7749 };
/// let ridge = Coord { x: -122.4094, y: 37.8049 };
///
/// assert_eq!(haversine_miles(ferry_building, ferry_building), 0.0);
/// assert!((haversine_miles(ferry_building, ridge) - 2.142).abs() < 0.001);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
#[must_use]
pub fn haversine_miles(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let lat_from = from.y.to_radians();
    let lat_to = to.y.to_radians();
    let half_delta_lat = (lat_to - lat_from) / 2.0;
    let half_delta_lon = (to.x.to_radians() - from.x.to_radians()) / 2.0;

    let a = half_delta_lat.sin().powi(2)
        + lat_from.cos() * lat_to.cos() * half_delta_lon.sin().powi(2);
    // Rounding can push `a` just past 1.0 for antipodal points.
    let central_angle = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();
    central_angle * EARTH_RADIUS_MILES
}
