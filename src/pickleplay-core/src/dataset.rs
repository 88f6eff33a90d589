use std::sync::OnceLock;

use tracing::error;

use crate::{Court, CourtSource};

static COURTS: OnceLock<Vec<Court>> = OnceLock::new();

static COURTS_JSON: &str = include_str!("../data/courts.json");

/// The court dataset compiled into the binary, parsed on first access and shared by every view.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCourts;

impl BundledCourts {
    pub fn all() -> &'static [Court] {
        COURTS.get_or_init(parse_courts)
    }
}

impl CourtSource for BundledCourts {
    fn courts(&self) -> &[Court] {
        BundledCourts::all()
    }
}

fn parse_courts() -> Vec<Court> {
    serde_json::from_str(COURTS_JSON).unwrap_or_else(|e| {
        error!("failed to parse bundled court dataset: {e:?}");
        vec![]
    })
}
