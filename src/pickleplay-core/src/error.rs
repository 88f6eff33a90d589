use snafu::{Location, Snafu};

use crate::{CourtId, CourtStatus};

pub type CoreResult<T> = std::result::Result<T, Error>;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("{message}"))]
    Validation {
        #[snafu(implicit)]
        location: Location,
        message: String,
    },
    #[snafu(display("Court '{id}' cannot move from '{from}' to '{to}'"))]
    InvalidTransition {
        #[snafu(implicit)]
        location: Location,
        id: CourtId,
        from: CourtStatus,
        to: CourtStatus,
    },
    #[snafu(display("A reason must be given when a court is {status}"))]
    MissingReason {
        #[snafu(implicit)]
        location: Location,
        status: CourtStatus,
    },
    #[snafu(display("Failed to build map link"))]
    MapLink {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: serde_qs::Error,
    },
    #[snafu(display("Operation timed out"))]
    Timeout {
        #[snafu(implicit)]
        location: Location,
        source: BoxedError,
    },
    #[snafu(display("An unexpected error occured"))]
    Unexpected {
        #[snafu(implicit)]
        location: Location,
        source: BoxedError,
    },
}

impl Error {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }
}
