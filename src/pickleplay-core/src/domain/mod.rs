use geo::Point;
use serde::{Deserialize, Serialize};

mod admin;
mod court;
mod location;

pub use admin::*;
pub use court::*;
pub use location::*;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<Coordinates> for Point<f64> {
    fn from(v: Coordinates) -> Self {
        Point::new(v.longitude, v.latitude)
    }
}

impl From<Point<f64>> for Coordinates {
    fn from(v: Point<f64>) -> Self {
        Coordinates {
            latitude: v.y(),
            longitude: v.x(),
        }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}
