use std::cmp::{Ordering, Reverse};

use serde::Serialize;

use crate::{
    Court, CourtFilters, CourtSorting, CourtWithDistance, CourtsQuery, DiscoveryOptions,
    LocationState, haversine_km,
};

/// Courts produced by one pass of the discovery pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing<'a> {
    pub courts: Vec<CourtWithDistance<'a>>,
    /// The sorting that was actually applied, `None` if the courts are in dataset order.
    /// Sorting by distance while the location is unknown leaves the order untouched.
    pub sorting: Option<CourtSorting>,
}

/// Filters and sorts `courts` for display.
///
/// Filtering runs before sorting and both are recomputed from scratch on every call.
/// The output is a subsequence of `courts` holding each court at most once.
pub fn discover<'a>(
    courts: &'a [Court],
    query: &CourtsQuery,
    location: &LocationState,
    options: &DiscoveryOptions,
) -> Listing<'a> {
    let filters = CourtFilters::new(query, location, options);
    let origin = location.coordinates();

    let mut listed = courts
        .iter()
        .map(|court| CourtWithDistance {
            court,
            distance: origin.map(|o| haversine_km(&o, &court.coordinates())),
        })
        .filter(|c| filters.matches(c))
        .collect::<Vec<_>>();

    let sorting = query
        .sorting
        .filter(|s| *s != CourtSorting::Distance || origin.is_some());

    if let Some(sorting) = sorting {
        sort(&mut listed, sorting);
    }

    Listing {
        courts: listed,
        sorting,
    }
}

/// All sorts are stable, ties keep their relative input order.
fn sort(courts: &mut [CourtWithDistance<'_>], sorting: CourtSorting) {
    match sorting {
        CourtSorting::Rating => {
            courts.sort_by(|a, b| cmp_desc(a.court.rating, b.court.rating));
        }
        CourtSorting::Distance => {
            courts.sort_by(|a, b| {
                let a = a.distance.unwrap_or(f64::INFINITY);
                let b = b.distance.unwrap_or(f64::INFINITY);
                a.total_cmp(&b)
            });
        }
        CourtSorting::Popularity => {
            courts.sort_by_key(|c| Reverse(c.court.review_count()));
        }
        CourtSorting::Newest => courts.reverse(),
    }
}

/// Descending order where `None` sorts last.
fn cmp_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl Listing<'_> {
    pub fn ids(&self) -> Vec<&str> {
        self.courts.iter().map(|c| c.court.id.as_ref()).collect()
    }

    pub fn len(&self) -> usize {
        self.courts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courts.is_empty()
    }
}
