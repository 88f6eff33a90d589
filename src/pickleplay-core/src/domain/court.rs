use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Coordinates, CourtId};

/// A physical pickleball facility.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    pub id: CourtId,
    pub name: String,
    pub city: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Larger grouping than the city, e.g. "Metro Manila".
    #[serde(default)]
    pub region: Option<String>,
    /// Average rating between 0 and 5, `None` for courts nobody has reviewed yet.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub rating_breakdown: Option<RatingBreakdown>,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
    #[serde(default)]
    pub hours: Option<String>,
    /// Number of physical courts at the facility.
    #[serde(default)]
    pub num_courts: Option<u32>,
}

/// Number of reviews per star level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingBreakdown {
    #[serde(rename = "1")]
    pub one: u32,
    #[serde(rename = "2")]
    pub two: u32,
    #[serde(rename = "3")]
    pub three: u32,
    #[serde(rename = "4")]
    pub four: u32,
    #[serde(rename = "5")]
    pub five: u32,
}

/// A court together with its distance from the user, computed per listing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtWithDistance<'a> {
    #[serde(flatten)]
    pub court: &'a Court,
    /// Kilometers from the user, `None` while the location is unknown.
    pub distance: Option<f64>,
}

impl Court {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    pub fn review_count(&self) -> u32 {
        self.rating_breakdown
            .as_ref()
            .map(RatingBreakdown::total)
            .unwrap_or_default()
    }

    pub fn has_amenities(&self, amenities: &BTreeSet<String>) -> bool {
        amenities.is_subset(&self.amenities)
    }

    /// The region used for grouping, falls back to the city.
    pub fn region_or_city(&self) -> &str {
        self.region.as_deref().unwrap_or(&self.city)
    }
}

impl RatingBreakdown {
    pub fn total(&self) -> u32 {
        let Self {
            one,
            two,
            three,
            four,
            five,
        } = self;
        one + two + three + four + five
    }
}
