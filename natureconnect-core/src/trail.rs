//! Hiking trails and their difficulty grades.

use std::{fmt, str::FromStr};

use geo::Coord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A hiking trail from the sample catalogue.
///
/// `features` keeps the comma-separated form used by the catalogue files;
/// [`Trail::feature_tags`] splits it into individual tags.
///
/// # Examples
/// ```
/// use natureconnect_core::{Difficulty, Trail};
///
/// let trail = Trail {
///     id: 3,
///     name: "Crystal Lake Path".into(),
///     latitude: 37.7649,
///     longitude: -122.4294,
///     length_miles: 2.5,
///     difficulty: Difficulty::Easy,
///     features: "Lake,Fishing,Wildlife".into(),
///     description: "An easy walk around a mountain lake.".into(),
///     image_url: String::new(),
/// };
///
/// assert!(trail.has_feature("lake"));
/// assert_eq!(trail.feature_tags().count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    /// Catalogue identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Trailhead latitude in decimal degrees.
    pub latitude: f64,
    /// Trailhead longitude in decimal degrees.
    pub longitude: f64,
    /// Trail length in miles.
    #[serde(rename = "length")]
    pub length_miles: f64,
    /// Difficulty grade.
    pub difficulty: Difficulty,
    /// Comma-separated feature tags such as `Forest,Wildlife`.
    pub features: String,
    /// Free-text description.
    pub description: String,
    /// Link to a representative photo.
    pub image_url: String,
}

impl Trail {
    /// Trailhead position with `x = longitude` and `y = latitude`.
    #[must_use]
    pub const fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }

    /// Iterate over the trimmed, non-empty feature tags.
    pub fn feature_tags(&self) -> impl Iterator<Item = &str> {
        self.features
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }

    /// Report whether the trail carries `tag`, ignoring case.
    #[must_use]
    pub fn has_feature(&self, tag: &str) -> bool {
        let wanted = tag.trim().to_lowercase();
        self.feature_tags()
            .any(|candidate| candidate.to_lowercase() == wanted)
    }
}

/// How demanding a trail is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String")]
pub enum Difficulty {
    /// Short or flat walks.
    Easy,
    /// Some climbing or distance.
    Moderate,
    /// Long or steep routes.
    Hard,
}

impl Difficulty {
    /// Every grade, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Moderate, Self::Hard];

    /// Return the grade's catalogue label.
    ///
    /// # Examples
    /// ```
    /// use natureconnect_core::Difficulty;
    ///
    /// assert_eq!(Difficulty::Moderate.as_str(), "Moderate");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Moderate => "Moderate",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a difficulty label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{label}' (expected Easy, Moderate or Hard)")]
pub struct DifficultyParseError {
    /// The rejected label.
    pub label: String,
}

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|grade| grade.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DifficultyParseError {
                label: s.to_owned(),
            })
    }
}

impl TryFrom<String> for Difficulty {
    type Error = DifficultyParseError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}
