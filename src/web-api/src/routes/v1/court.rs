use std::collections::BTreeSet;

use actix_web::web::{self, Path};
use pickleplay_core::{
    CourtId, CourtLinks, CourtSorting, CourtWithDistance, CourtsQuery, Listing, LocationState,
    RatingBreakdown, discover, haversine_km,
};
use serde::{Deserialize, Serialize};
use serde_qs::actix::QsQuery as Query;

use crate::{
    ApiState, Dataset,
    error::{Result, error::CourtNotFoundSnafu},
    response::Response,
    routes::utils::{self, deserialize_string_list, serialize_string_list},
};

#[derive(Default, Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
    #[serde(
        deserialize_with = "deserialize_string_list",
        serialize_with = "serialize_string_list",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub regions: Option<Vec<String>>,
    #[serde(
        deserialize_with = "deserialize_string_list",
        serialize_with = "serialize_string_list",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub amenities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearby: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting: Option<CourtSorting>,
    /// Court to open the info overlay for, only used by the map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<CourtId>,
}

#[derive(Default, Debug, Clone, Copy, Deserialize, Serialize)]
pub struct LocationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CourtPath {
    pub court_id: CourtId,
}

/// Returns the courts matching the given filters.
/// When `lat` and `lng` are given every court carries its distance in kilometers and
/// `nearby=true` keeps only the courts within the configured radius.
#[tracing::instrument(skip(db, state))]
pub async fn courts<T: Dataset>(
    db: web::Data<T>,
    state: web::Data<ApiState>,
    params: Query<CourtsParams>,
) -> Result<Response<CourtListing>> {
    let params = params.into_inner();
    let location = utils::location(params.lat, params.lng)?;
    let query = CourtsQuery::from(params);

    let listing = discover(db.courts(), &query, &location, &state.options);

    Ok(Response::new(CourtListing::new(listing, location)))
}

#[tracing::instrument(skip(db, state))]
pub async fn court<T: Dataset>(
    db: web::Data<T>,
    state: web::Data<ApiState>,
    path: Path<CourtPath>,
    params: Query<LocationParams>,
) -> Result<Response<CourtDetails>> {
    let location = utils::location(params.lat, params.lng)?;
    let court = find(db.get_ref(), &path.court_id, &location)?;
    let links = state.map.links();

    let details = CourtDetails {
        links: CourtLinks {
            directions: links.directions(court.court.coordinates(), location.coordinates()),
            search: links.search(&format!("{}, {}", court.court.name, court.court.address))?,
            details: links.details(&court.court.id),
        },
        rating_breakdown: court.court.rating_breakdown,
        court: court.into(),
    };

    Ok(Response::new(details))
}

/// Returns a link into the external maps application with directions to the court.
/// The origin is left for the maps application to decide when no location is given.
#[tracing::instrument(skip(db, state))]
pub async fn directions<T: Dataset>(
    db: web::Data<T>,
    state: web::Data<ApiState>,
    path: Path<CourtPath>,
    params: Query<LocationParams>,
) -> Result<Response<Directions>> {
    let location = utils::location(params.lat, params.lng)?;
    let court = find(db.get_ref(), &path.court_id, &location)?;

    let url = state
        .map
        .links()
        .directions(court.court.coordinates(), location.coordinates());

    Ok(Response::new(Directions {
        court_id: court.court.id.clone(),
        distance: court.distance,
        url,
    }))
}

fn find<'a, T: Dataset>(
    db: &'a T,
    id: &CourtId,
    location: &LocationState,
) -> Result<CourtWithDistance<'a>> {
    let Some(court) = db.court(id) else {
        return CourtNotFoundSnafu { id: id.clone() }.fail();
    };

    Ok(CourtWithDistance {
        court,
        distance: location
            .coordinates()
            .map(|c| haversine_km(&c, &court.coordinates())),
    })
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    pub id: CourtId,
    pub name: String,
    pub city: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub region: Option<String>,
    pub rating: Option<f64>,
    pub review_count: u32,
    pub amenities: Vec<String>,
    pub hours: Option<String>,
    pub num_courts: Option<u32>,
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtListing {
    pub courts: Vec<Court>,
    /// The sorting that was applied, absent when sorting by distance without a location.
    pub sorting: Option<CourtSorting>,
    pub location: LocationState,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtDetails {
    #[serde(flatten)]
    pub court: Court,
    pub rating_breakdown: Option<RatingBreakdown>,
    pub links: CourtLinks,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Directions {
    pub court_id: CourtId,
    pub distance: Option<f64>,
    pub url: String,
}

impl CourtListing {
    fn new(listing: Listing<'_>, location: LocationState) -> Self {
        let Listing { courts, sorting } = listing;

        Self {
            courts: courts.into_iter().map(Court::from).collect(),
            sorting,
            location,
        }
    }
}

impl From<CourtsParams> for CourtsQuery {
    fn from(v: CourtsParams) -> Self {
        let CourtsParams {
            search,
            min_rating,
            regions,
            amenities,
            nearby,
            lat: _,
            lng: _,
            sorting,
            selected: _,
        } = v;

        CourtsQuery {
            search,
            min_rating,
            regions: regions.map(BTreeSet::from_iter),
            amenities: amenities.map(BTreeSet::from_iter),
            nearby: nearby.unwrap_or(false),
            sorting,
        }
    }
}

impl From<CourtWithDistance<'_>> for Court {
    fn from(v: CourtWithDistance<'_>) -> Self {
        let CourtWithDistance { court, distance } = v;
        let pickleplay_core::Court {
            id,
            name,
            city,
            address,
            latitude,
            longitude,
            region,
            rating,
            rating_breakdown: _,
            amenities,
            hours,
            num_courts,
        } = court.clone();

        Court {
            id,
            name,
            city,
            address,
            latitude,
            longitude,
            region,
            rating,
            review_count: court.review_count(),
            amenities: amenities.into_iter().collect(),
            hours,
            num_courts,
            distance,
        }
    }
}
