use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use pickleplay_core::{Coordinates, LocationState};
use serde::{Deserialize, Deserializer, Serializer, de};

use crate::error::{
    self,
    error::{InvalidCoordinateSnafu, MissingCoordinateSnafu},
};

/// Deserializes a comma separated list such as `regions=Metro Manila,Cavite`.
pub fn deserialize_string_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let Some(value) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    value
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| v.parse().map_err(de::Error::custom))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

pub fn serialize_string_list<S, T>(value: &Option<Vec<T>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Display,
{
    match value {
        Some(values) => serializer.serialize_some(&values.iter().join(",")),
        None => serializer.serialize_none(),
    }
}

/// Turns optional `lat` and `lng` query parameters into the caller's location.
pub fn location(lat: Option<f64>, lng: Option<f64>) -> error::Result<LocationState> {
    match (lat, lng) {
        (None, None) => Ok(LocationState::Unknown),
        (Some(lat), Some(lng)) => {
            let coordinates = Coordinates::new(lat, lng);
            if !coordinates.is_valid() {
                return InvalidCoordinateSnafu { lat, lng }.fail();
            }
            Ok(LocationState::Known(coordinates))
        }
        _ => MissingCoordinateSnafu.fail(),
    }
}
