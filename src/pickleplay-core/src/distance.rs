use crate::Coordinates;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two coordinates.
/// Input is not validated, out of range degrees yield a meaningless result.
pub fn haversine_km(a: &Coordinates, b: &Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lng = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

pub fn within_radius(a: &Coordinates, b: &Coordinates, radius_km: f64) -> bool {
    haversine_km(a, b) <= radius_km
}
