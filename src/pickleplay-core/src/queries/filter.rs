use std::collections::BTreeSet;

use strum::EnumDiscriminants;

use crate::{Coordinates, CourtWithDistance, CourtsQuery, DiscoveryOptions, LocationState};

/// A single filter pass over the court listing.
///
/// Filters are ordered by their discriminant so a [`CourtFilters`] set always applies
/// them in the same order, cheapest first.
#[derive(Debug, Clone, EnumDiscriminants)]
#[strum_discriminants(
    derive(PartialOrd, Ord, Hash, strum::Display),
    strum(serialize_all = "snake_case")
)]
pub enum CourtFilter {
    /// Lowercased needle matched against name, city and address.
    Search(String),
    MinRating(f64),
    /// Lowercased region names, the city stands in for a court without a region.
    Region(BTreeSet<String>),
    Amenities(BTreeSet<String>),
    Nearby {
        origin: Coordinates,
        radius_km: f64,
    },
}

impl CourtFilter {
    pub fn matches(&self, court: &CourtWithDistance<'_>) -> bool {
        let CourtWithDistance { court, distance } = court;

        match self {
            CourtFilter::Search(needle) => [&court.name, &court.city, &court.address]
                .into_iter()
                .any(|v| v.to_lowercase().contains(needle.as_str())),
            CourtFilter::MinRating(min) => court.rating.is_some_and(|r| r >= *min),
            CourtFilter::Region(regions) => {
                regions.contains(&court.region_or_city().to_lowercase())
            }
            CourtFilter::Amenities(amenities) => court.has_amenities(amenities),
            CourtFilter::Nearby { radius_km, .. } => distance.is_some_and(|d| d <= *radius_km),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CourtFilters(BTreeSet<CourtFilter>);

impl CourtFilters {
    /// Builds the active filter set, dropping filters that cannot apply.
    /// An empty search matches everything and the nearby filter is a no-op while the
    /// location is unknown.
    pub fn new(query: &CourtsQuery, location: &LocationState, options: &DiscoveryOptions) -> Self {
        let CourtsQuery {
            search,
            min_rating,
            regions,
            amenities,
            nearby,
            sorting: _,
        } = query;

        let mut set = BTreeSet::new();

        if let Some(search) = search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            set.insert(CourtFilter::Search(search.to_lowercase()));
        }
        if let Some(min) = min_rating {
            set.insert(CourtFilter::MinRating(*min));
        }
        if let Some(regions) = regions.as_ref().filter(|r| !r.is_empty()) {
            set.insert(CourtFilter::Region(
                regions.iter().map(|r| r.trim().to_lowercase()).collect(),
            ));
        }
        if let Some(amenities) = amenities.as_ref().filter(|a| !a.is_empty()) {
            set.insert(CourtFilter::Amenities(amenities.clone()));
        }
        if let (true, Some(origin)) = (*nearby, location.coordinates()) {
            set.insert(CourtFilter::Nearby {
                origin,
                radius_km: options.nearby_radius_km,
            });
        }

        Self(set)
    }

    pub fn matches(&self, court: &CourtWithDistance<'_>) -> bool {
        self.0.iter().all(|f| f.matches(court))
    }

    pub fn kinds(&self) -> Vec<CourtFilterDiscriminants> {
        self.0.iter().map(CourtFilterDiscriminants::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for CourtFilter {
    fn eq(&self, other: &Self) -> bool {
        CourtFilterDiscriminants::from(self).eq(&CourtFilterDiscriminants::from(other))
    }
}

impl Eq for CourtFilter {}

impl PartialOrd for CourtFilter {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CourtFilter {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        CourtFilterDiscriminants::from(self).cmp(&CourtFilterDiscriminants::from(other))
    }
}
