#![deny(warnings)]
#![deny(rust_2018_idioms)]

use pickleplay_core::{BundledCourts, Court, CourtSource, DiscoveryOptions, MapSettings};

pub mod error;
pub mod response;
pub mod routes;
pub mod settings;
pub mod startup;

pub trait Dataset: CourtSource + Send + Sync + 'static {}

impl Dataset for BundledCourts {}
impl Dataset for Vec<Court> {}

/// Configuration shared by every request handler.
#[derive(Debug, Clone)]
pub struct ApiState {
    pub options: DiscoveryOptions,
    pub map: MapSettings,
}
