use http::StatusCode;
use pickleplay_core::BoxedError;
use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Court service request error"))]
    Request {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: reqwest::Error,
    },
    #[snafu(display("Court service middleware error"))]
    Middleware {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: reqwest_middleware::Error,
    },
    #[snafu(display("Court service timed out"))]
    Timeout {
        #[snafu(implicit)]
        location: Location,
        source: BoxedError,
    },
    #[snafu(display(
        "Court service request failed, status: '{status}', url: '{url}', body: '{body}'"
    ))]
    FailedRequest {
        #[snafu(implicit)]
        location: Location,
        url: String,
        status: StatusCode,
        body: String,
    },
}

impl Error {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::FailedRequest { status, .. } => Some(*status),
            Error::Request { error, .. } => error.status(),
            Error::Middleware { .. } | Error::Timeout { .. } => None,
        }
    }

    /// Failures worth retrying later, the service was unreachable or overloaded.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Timeout { .. } => true,
            Error::FailedRequest { status, .. } => {
                status.is_server_error()
                    || *status == StatusCode::TOO_MANY_REQUESTS
                    || *status == StatusCode::REQUEST_TIMEOUT
            }
            Error::Request { .. } | Error::Middleware { .. } => false,
        }
    }
}

impl From<reqwest::Error> for Error {
    #[track_caller]
    fn from(value: reqwest::Error) -> Self {
        let location = std::panic::Location::caller();
        let location = Location::new(location.file(), location.line(), location.column());

        if value.is_timeout() || value.is_connect() {
            Error::Timeout {
                location,
                source: Box::new(value),
            }
        } else {
            Error::Request {
                location,
                error: value,
            }
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    #[track_caller]
    fn from(value: reqwest_middleware::Error) -> Self {
        match value {
            reqwest_middleware::Error::Reqwest(e) => Error::from(e),
            e @ reqwest_middleware::Error::Middleware(_) => {
                let location = std::panic::Location::caller();
                Error::Middleware {
                    location: Location::new(location.file(), location.line(), location.column()),
                    error: e,
                }
            }
        }
    }
}

impl From<Error> for pickleplay_core::Error {
    #[track_caller]
    fn from(value: Error) -> Self {
        let location = std::panic::Location::caller();
        let location = Location::new(location.file(), location.line(), location.column());

        if value.is_transient() {
            pickleplay_core::Error::Timeout {
                location,
                source: Box::new(value),
            }
        } else {
            pickleplay_core::Error::Unexpected {
                location,
                source: Box::new(value),
            }
        }
    }
}
