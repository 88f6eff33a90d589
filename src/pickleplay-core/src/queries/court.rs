use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 50.0;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, strum::Display, AsRefStr, EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum CourtSorting {
    /// Highest rated first, unrated courts last.
    #[serde(alias = "Rating", alias = "RATING")]
    Rating,
    /// Closest first, only available while the user's location is known.
    #[serde(alias = "Distance", alias = "DISTANCE")]
    Distance,
    /// Most reviewed first.
    #[serde(alias = "Popularity", alias = "POPULARITY")]
    Popularity,
    /// Reverse dataset order, the dataset carries no timestamps.
    #[serde(alias = "Newest", alias = "NEWEST")]
    Newest,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourtsQuery {
    pub search: Option<String>,
    pub min_rating: Option<f64>,
    /// Matches the court's region, or its city when it has none.
    pub regions: Option<BTreeSet<String>>,
    /// Courts must have every listed amenity.
    pub amenities: Option<BTreeSet<String>>,
    pub nearby: bool,
    pub sorting: Option<CourtSorting>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscoveryOptions {
    pub nearby_radius_km: f64,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            nearby_radius_km: DEFAULT_NEARBY_RADIUS_KM,
        }
    }
}

impl CourtsQuery {
    pub fn is_filtered(&self) -> bool {
        let Self {
            search,
            min_rating,
            regions,
            amenities,
            nearby,
            sorting: _,
        } = self;

        search.as_deref().is_some_and(|s| !s.trim().is_empty())
            || min_rating.is_some()
            || regions.as_ref().is_some_and(|r| !r.is_empty())
            || amenities.as_ref().is_some_and(|a| !a.is_empty())
            || *nearby
    }
}
