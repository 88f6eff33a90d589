use async_trait::async_trait;

use crate::*;

#[async_trait]
pub trait CourtServiceInbound: Send + Sync {
    async fn approve_court(&self, id: &CourtId, approver_id: &str) -> CoreResult<()>;
    async fn reject_court(&self, id: &CourtId, reason: &str) -> CoreResult<()>;
    async fn suspend_court(&self, id: &CourtId, reason: &str) -> CoreResult<()>;
    async fn delete_court(&self, id: &CourtId) -> CoreResult<()>;
    async fn create_court(&self, draft: &CourtDraft) -> CoreResult<AdminCourt>;
}
