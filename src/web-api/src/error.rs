use actix_web::{HttpResponse, ResponseError, body::BoxBody, http::StatusCode};
use pickleplay_core::CourtId;
use serde::{Deserialize, Serialize};
use snafu::{Location, Snafu};
use strum::EnumDiscriminants;
use tracing::error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu, EnumDiscriminants)]
#[snafu(module, visibility(pub))]
#[strum_discriminants(derive(Deserialize, Serialize))]
pub enum Error {
    #[snafu(display("Both 'lat' and 'lng' must be provided to set a location"))]
    MissingCoordinate {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("The coordinate '{lat},{lng}' is out of range"))]
    InvalidCoordinate {
        #[snafu(implicit)]
        location: Location,
        lat: f64,
        lng: f64,
    },
    #[snafu(display("No court with id '{id}' exists"))]
    CourtNotFound {
        #[snafu(implicit)]
        location: Location,
        id: CourtId,
    },
    #[snafu(display("An unexpected error occured"))]
    Unexpected {
        #[snafu(implicit)]
        location: Location,
        source: pickleplay_core::Error,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDiscriminants,
    pub description: String,
}

impl From<pickleplay_core::Error> for Error {
    #[track_caller]
    fn from(value: pickleplay_core::Error) -> Self {
        let location = std::panic::Location::caller();
        Error::Unexpected {
            location: Location::new(location.file(), location.line(), location.column()),
            source: value,
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingCoordinate { .. } | Error::InvalidCoordinate { .. } => {
                StatusCode::BAD_REQUEST
            }
            Error::CourtNotFound { .. } => StatusCode::NOT_FOUND,
            Error::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        if let Error::Unexpected { .. } = self {
            error!("{self:?}");
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.into(),
            description: self.to_string(),
        })
    }
}
