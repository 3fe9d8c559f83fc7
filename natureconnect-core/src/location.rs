//! Where the user is: coordinates with an optional zip or place label.

use geo::Coord;
use serde::{Deserialize, Serialize};

/// Where the user currently is.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The label
/// is whatever the user typed, usually a zip code.
///
/// # Examples
/// ```
/// use natureconnect_core::Location;
///
/// let here = Location::new(37.7749, -122.4194).with_label("94103");
/// assert_eq!(here.coord().x, -122.4194);
/// assert_eq!(here.label.as_deref(), Some("94103"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Optional zip code or place name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Location {
    /// Construct an unlabelled location.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            label: None,
        }
    }

    /// Attach a label while returning `self` for chaining.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Position with `x = longitude` and `y = latitude`.
    #[must_use]
    pub const fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }

    /// The fallback location used when the user has not picked one:
    /// central San Francisco.
    #[must_use]
    pub fn default_city() -> Self {
        Self::new(37.7749, -122.4194).with_label("San Francisco, CA")
    }

    /// Place a zip code. Zip codes are not geocoded: every zip resolves to
    /// the default city's coordinates, labelled with the zip.
    ///
    /// # Examples
    /// ```
    /// use natureconnect_core::Location;
    ///
    /// let here = Location::from_zip("94110");
    /// assert_eq!(here.coord(), Location::default_city().coord());
    /// assert_eq!(here.label.as_deref(), Some("94110"));
    /// ```
    #[must_use]
    pub fn from_zip(zip: impl Into<String>) -> Self {
        let city = Self::default_city();
        Self::new(city.lat, city.lon).with_label(zip)
    }
}
