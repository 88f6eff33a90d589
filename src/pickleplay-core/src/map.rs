use geo::{BoundingRect, MultiPoint, Point};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use crate::{
    Coordinates, CoreResult, CourtId, CourtWithDistance, DEFAULT_CENTER, Listing, LocationState,
    error::error::MapLinkSnafu,
};

pub const DEFAULT_MAPS_BASE_URL: &str = "https://www.google.com/maps";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSettings {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    pub default_center: Coordinates,
    /// Zoom used when centered on the user.
    pub user_zoom: u8,
    /// Zoom used when centered on the default center.
    pub default_zoom: u8,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MAPS_BASE_URL.into(),
            api_key: None,
            default_center: DEFAULT_CENTER,
            user_zoom: 13,
            default_zoom: 11,
        }
    }
}

impl MapSettings {
    pub fn links(&self) -> MapLinks<'_> {
        MapLinks {
            base_url: self.base_url.trim_end_matches('/'),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MapStatus {
    Ready,
    /// The map SDK cannot load, the placeholder is shown indefinitely.
    Loading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerKind {
    Court,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub kind: MarkerKind,
    pub court_id: Option<CourtId>,
    pub title: String,
    pub position: Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapBounds {
    pub south_west: Coordinates,
    pub north_east: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtLinks {
    pub directions: String,
    pub search: String,
    pub details: String,
}

/// Summary shown when a court marker is activated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoOverlay {
    pub court_id: CourtId,
    pub name: String,
    pub address: String,
    pub rating: Option<f64>,
    pub distance: Option<f64>,
    pub hours: Option<String>,
    pub links: CourtLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub status: MapStatus,
    pub center: Coordinates,
    pub zoom: u8,
    pub user_marker: Option<Marker>,
    pub markers: Vec<Marker>,
    pub bounds: Option<MapBounds>,
    pub overlay: Option<InfoOverlay>,
}

/// Builds links into the external maps application.
#[derive(Debug, Clone, Copy)]
pub struct MapLinks<'a> {
    base_url: &'a str,
}

#[derive(Serialize)]
struct SearchParams<'a> {
    api: u8,
    query: &'a str,
}

impl MapLinks<'_> {
    pub fn directions(
        &self,
        destination: Coordinates,
        origin: Option<Coordinates>,
    ) -> String {
        match origin {
            Some(origin) => format!(
                "{}/dir/?api=1&origin={origin}&destination={destination}",
                self.base_url
            ),
            None => format!("{}/dir/?api=1&destination={destination}", self.base_url),
        }
    }

    pub fn search(&self, query: &str) -> CoreResult<String> {
        let params = serde_qs::to_string(&SearchParams { api: 1, query }).context(MapLinkSnafu)?;
        Ok(format!("{}/search/?{params}", self.base_url))
    }

    pub fn details(&self, id: &CourtId) -> String {
        format!("/courts/{id}")
    }
}

impl InfoOverlay {
    pub fn for_court(
        court: &CourtWithDistance<'_>,
        location: &LocationState,
        links: &MapLinks<'_>,
    ) -> CoreResult<Self> {
        let CourtWithDistance { court, distance } = *court;

        let links = CourtLinks {
            directions: links.directions(court.coordinates(), location.coordinates()),
            search: links.search(&format!("{}, {}", court.name, court.address))?,
            details: links.details(&court.id),
        };

        Ok(Self {
            court_id: court.id.clone(),
            name: court.name.clone(),
            address: court.address.clone(),
            rating: court.rating,
            distance,
            hours: court.hours.clone(),
            links,
        })
    }
}

impl MapView {
    /// Binds a listing and the user's location to a map.
    ///
    /// Markers follow listing order. The overlay is only built for a selected court that
    /// is part of the listing.
    pub fn build(
        settings: &MapSettings,
        location: &LocationState,
        listing: &Listing<'_>,
        selected: Option<&CourtId>,
    ) -> CoreResult<Self> {
        let (center, zoom) = match location.coordinates() {
            Some(c) => (c, settings.user_zoom),
            None => (settings.default_center, settings.default_zoom),
        };

        if settings.api_key.as_deref().is_none_or(|k| k.trim().is_empty()) {
            return Ok(Self {
                status: MapStatus::Loading,
                center,
                zoom,
                user_marker: None,
                markers: vec![],
                bounds: None,
                overlay: None,
            });
        }

        let user_marker = location.coordinates().map(|position| Marker {
            kind: MarkerKind::User,
            court_id: None,
            title: "You are here".into(),
            position,
        });

        let markers = listing
            .courts
            .iter()
            .map(|c| Marker {
                kind: MarkerKind::Court,
                court_id: Some(c.court.id.clone()),
                title: c.court.name.clone(),
                position: c.court.coordinates(),
            })
            .collect::<Vec<_>>();

        let bounds = bounds(markers.iter().chain(user_marker.as_ref()));

        let overlay = selected
            .and_then(|id| listing.courts.iter().find(|c| &c.court.id == id))
            .map(|c| InfoOverlay::for_court(c, location, &settings.links()))
            .transpose()?;

        Ok(Self {
            status: MapStatus::Ready,
            center,
            zoom,
            user_marker,
            markers,
            bounds,
            overlay,
        })
    }
}

fn bounds<'a>(markers: impl Iterator<Item = &'a Marker>) -> Option<MapBounds> {
    let points = markers
        .map(|m| Point::from(m.position))
        .collect::<MultiPoint<f64>>();

    points.bounding_rect().map(|rect| MapBounds {
        south_west: Point::from(rect.min()).into(),
        north_east: Point::from(rect.max()).into(),
    })
}
