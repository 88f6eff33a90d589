use serde::{Deserialize, Serialize};

use crate::Coordinates;

/// Rizal Park, Manila. Used whenever the user's location is unknown.
pub const DEFAULT_CENTER: Coordinates = Coordinates::new(14.5995, 120.9842);

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LocationState {
    #[default]
    Unknown,
    Pending,
    Known(Coordinates),
}

impl LocationState {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            LocationState::Known(c) => Some(*c),
            LocationState::Unknown | LocationState::Pending => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, LocationState::Known(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LocationState::Pending)
    }

    pub fn center_or(&self, fallback: Coordinates) -> Coordinates {
        self.coordinates().unwrap_or(fallback)
    }

    pub fn center_or_default(&self) -> Coordinates {
        self.center_or(DEFAULT_CENTER)
    }
}

impl From<Option<Coordinates>> for LocationState {
    fn from(v: Option<Coordinates>) -> Self {
        match v {
            Some(c) => LocationState::Known(c),
            None => LocationState::Unknown,
        }
    }
}
