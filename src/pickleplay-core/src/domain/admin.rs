use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use snafu::OptionExt;
use strum::{AsRefStr, Display, EnumString};

use crate::{CoreResult, Court, CourtId, error::error::ValidationSnafu};

/// Moderation status of a submitted court.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CourtStatus {
    Pending,
    Approved,
    Rejected,
    Suspended,
}

impl CourtStatus {
    pub fn can_transition_to(self, next: CourtStatus) -> bool {
        use CourtStatus::*;

        matches!(
            (self, next),
            (Pending, Approved) | (Pending, Rejected) | (Approved, Suspended) | (Suspended, Approved)
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCourt {
    #[serde(flatten)]
    pub court: Court,
    pub status: CourtStatus,
    #[serde(default)]
    pub submitted_by: Option<String>,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub suspension_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtStatistics {
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
    pub suspended: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCourtsFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CourtStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl AdminCourtsFilter {
    /// Filters that only differ in casing or surrounding whitespace share a key.
    pub fn cache_key(&self) -> String {
        let normalize = |v: &Option<String>| {
            v.as_deref()
                .map(|s| s.trim().to_lowercase())
                .unwrap_or_default()
        };

        format!(
            "{}|{}|{}",
            self.status.map(|s| s.as_ref().to_owned()).unwrap_or_default(),
            normalize(&self.search),
            normalize(&self.city),
        )
    }
}

/// A court submitted through the creation form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtDraft {
    pub name: String,
    pub address: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub num_courts: u32,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
    #[serde(default)]
    pub hours: Option<String>,
}

impl CourtDraft {
    /// The message shown inline next to the form, `None` if the draft can be submitted.
    pub fn validation_message(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("Court name is required")
        } else if self.address.trim().is_empty() {
            Some("Address is required")
        } else if self.city.trim().is_empty() {
            Some("City is required")
        } else if !(-90.0..=90.0).contains(&self.latitude) {
            Some("Latitude must be between -90 and 90")
        } else if !(-180.0..=180.0).contains(&self.longitude) {
            Some("Longitude must be between -180 and 180")
        } else if self.num_courts == 0 {
            Some("A facility needs at least one court")
        } else {
            None
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        match self.validation_message() {
            None => Ok(()),
            Some(message) => ValidationSnafu { message }.fail(),
        }
    }
}

impl AdminCourt {
    pub fn id(&self) -> &CourtId {
        &self.court.id
    }
}

pub(crate) fn require_reason(reason: &str, status: CourtStatus) -> CoreResult<&str> {
    use crate::error::error::MissingReasonSnafu;

    let reason = reason.trim();
    (!reason.is_empty())
        .then_some(reason)
        .context(MissingReasonSnafu { status })
}
