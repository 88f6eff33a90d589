use async_trait::async_trait;

use crate::*;

/// Read-only access to a court dataset.
pub trait CourtSource {
    fn courts(&self) -> &[Court];

    fn court(&self, id: &CourtId) -> Option<&Court> {
        self.courts().iter().find(|c| &c.id == id)
    }
}

impl CourtSource for Vec<Court> {
    fn courts(&self) -> &[Court] {
        self
    }
}

#[async_trait]
pub trait CourtServiceOutbound: Send + Sync {
    async fn get_courts(&self, filters: &AdminCourtsFilter) -> CoreResult<Vec<AdminCourt>>;
    async fn get_statistics(&self) -> CoreResult<CourtStatistics>;
}
