use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use snafu::Snafu;
use tracing::{instrument, warn};

use crate::{Coordinates, LocationState};

pub const DEFAULT_GEOLOCATION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub high_accuracy: bool,
    pub timeout: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: DEFAULT_GEOLOCATION_TIMEOUT,
        }
    }
}

#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
#[snafu(module, visibility(pub))]
pub enum GeolocationError {
    #[snafu(display("Permission to read the current position was denied"))]
    PermissionDenied,
    #[snafu(display("The current position is unavailable"))]
    Unavailable,
    #[snafu(display("No position was received within {timeout:?}"))]
    Timeout { timeout: Duration },
    #[snafu(display("The host does not provide a location API"))]
    Unsupported,
}

/// The host platform's location API.
#[async_trait]
pub trait PositionSource: Send + Sync {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinates, GeolocationError>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocateOutcome {
    Resolved(LocationState),
    /// Another locate call is still in flight, the source was not queried.
    AlreadyPending,
}

#[derive(Debug)]
pub struct Geolocator<S> {
    source: S,
    options: PositionOptions,
    pending: AtomicBool,
}

struct PendingGuard<'a>(&'a AtomicBool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<S: PositionSource> Geolocator<S> {
    pub fn new(source: S) -> Self {
        Self::with_options(source, PositionOptions::default())
    }

    pub fn with_options(source: S, options: PositionOptions) -> Self {
        Self {
            source,
            options,
            pending: AtomicBool::new(false),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Requests the current position once.
    ///
    /// Failures are logged and resolve to [`LocationState::Unknown`], callers fall back
    /// to the default center. Nothing is retried.
    #[instrument(skip(self))]
    pub async fn locate(&self) -> LocateOutcome {
        if self
            .pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return LocateOutcome::AlreadyPending;
        }
        let _guard = PendingGuard(&self.pending);

        let timeout = self.options.timeout;
        let result = tokio::time::timeout(timeout, self.source.current_position(&self.options))
            .await
            .unwrap_or(Err(GeolocationError::Timeout { timeout }));

        let state = match result {
            Ok(coordinates) if coordinates.is_valid() => LocationState::Known(coordinates),
            Ok(coordinates) => {
                warn!("position source returned invalid coordinates: {coordinates}");
                LocationState::Unknown
            }
            Err(e) => {
                warn!("failed to get current position: {e}");
                LocationState::Unknown
            }
        };

        LocateOutcome::Resolved(state)
    }
}
