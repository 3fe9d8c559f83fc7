//! Tiered suggestions for deepening a connection to nature.

use serde::Serialize;

use crate::Location;

/// Score band that selects a set of recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Scores below 40.
    Low,
    /// Scores from 40 up to 69.
    Moderate,
    /// Scores of 70 and above.
    High,
}

impl Tier {
    /// Band a raw score.
    ///
    /// # Examples
    /// ```
    /// use natureconnect_core::Tier;
    ///
    /// assert_eq!(Tier::for_score(39), Tier::Low);
    /// assert_eq!(Tier::for_score(40), Tier::Moderate);
    /// assert_eq!(Tier::for_score(70), Tier::High);
    /// ```
    #[must_use]
    pub const fn for_score(score: u32) -> Self {
        if score < 40 {
            Self::Low
        } else if score < 70 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// One-line verdict shown after the quiz.
    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Low => {
                "Your connection to nature could be stronger. We recommend starting with small steps like visiting a local park weekly."
            }
            Self::Moderate => {
                "You have a moderate connection to nature. Try deepening your relationship through regular nature activities."
            }
            Self::High => {
                "You have a strong connection to nature! Consider sharing your passion with others or joining conservation efforts."
            }
        }
    }

    const fn table(self) -> &'static TierTable {
        match self {
            Self::Low => &LOW,
            Self::Moderate => &MODERATE,
            Self::High => &HIGH,
        }
    }
}

struct TierTable {
    activities: &'static [&'static str],
    resources: &'static [&'static str],
    daily_practices: &'static [&'static str],
}

const LOW: TierTable = TierTable {
    activities: &[
        "Visit a local park for 15 minutes daily",
        "Start a small indoor plant collection",
        "Watch nature documentaries",
        "Take a guided nature walk",
    ],
    resources: &[
        "Book: \"The Nature Fix\" by Florence Williams",
        "App: \"iNaturalist\" for identifying plants and animals",
        "Website: AllTrails.com for finding nearby nature spots",
    ],
    daily_practices: &[
        "Take breaks to look at the sky and clouds",
        "Listen to nature sounds while working",
        "Eat lunch outdoors when possible",
        "Notice wildlife in your neighborhood",
    ],
};

const MODERATE: TierTable = TierTable {
    activities: &[
        "Try forest bathing (mindful nature immersion)",
        "Start a small garden (even container gardening counts)",
        "Join a local conservation volunteer group",
        "Take up nature photography or sketching",
    ],
    resources: &[
        "Book: \"Braiding Sweetgrass\" by Robin Wall Kimmerer",
        "App: \"Seek\" by iNaturalist for nature challenges",
        "Podcast: \"For the Wild\" on ecological restoration",
    ],
    daily_practices: &[
        "Establish a \"sit spot\" for regular nature observation",
        "Incorporate natural materials in your home",
        "Practice identifying bird calls and songs",
        "Track moon phases and seasonal changes",
    ],
};

const HIGH: TierTable = TierTable {
    activities: &[
        "Participate in citizen science projects",
        "Lead nature walks for others",
        "Create a certified wildlife habitat in your yard",
        "Try solo wilderness experiences",
    ],
    resources: &[
        "Book: \"The Hidden Life of Trees\" by Peter Wohlleben",
        "Organization: Join your local native plant society",
        "Course: Wilderness first aid certification",
    ],
    daily_practices: &[
        "Mentor others in nature connection",
        "Keep a detailed nature journal",
        "Practice traditional skills (foraging, tracking)",
        "Create rituals celebrating seasonal changes",
    ],
};

/// Suggestions for a given score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    /// Band the suggestions were drawn from.
    pub tier: Tier,
    /// Things to go and do.
    pub activities: &'static [&'static str],
    /// Books, apps and organisations.
    pub resources: &'static [&'static str],
    /// Small everyday habits.
    pub daily_practices: &'static [&'static str],
    /// Extra suggestions present only when the user's location is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_based: Option<Vec<String>>,
}

impl Recommendations {
    /// Look up the suggestions for `score`, adding location-based ones when
    /// `location` is given.
    ///
    /// # Examples
    /// ```
    /// use natureconnect_core::{Location, Recommendations, Tier};
    ///
    /// let recs = Recommendations::for_score(55, None);
    /// assert_eq!(recs.tier, Tier::Moderate);
    /// assert!(recs.location_based.is_none());
    ///
    /// let here = Location::new(37.77, -122.42).with_label("94103");
    /// let recs = Recommendations::for_score(55, Some(&here));
    /// assert!(recs.location_based.is_some());
    /// ```
    #[must_use]
    pub fn for_score(score: u32, location: Option<&Location>) -> Self {
        let tier = Tier::for_score(score);
        let table = tier.table();
        Self {
            tier,
            activities: table.activities,
            resources: table.resources,
            daily_practices: table.daily_practices,
            location_based: location.map(location_suggestions),
        }
    }
}

fn location_suggestions(location: &Location) -> Vec<String> {
    let place = location
        .label
        .clone()
        .unwrap_or_else(|| format!("{:.4}, {:.4}", location.lat, location.lon));
    vec![
        format!("Look for trails and parks near {place}"),
        format!("Check the calendar for nature events around {place}"),
    ]
}
