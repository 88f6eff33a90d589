use async_trait::async_trait;
use pickleplay_core::{
    AdminCourt, AdminCourtsFilter, CoreResult, CourtDraft, CourtId, CourtServiceInbound,
    CourtServiceOutbound, CourtStatistics,
};
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use serde::{Serialize, de::DeserializeOwned};
use tracing::instrument;

use crate::{Result, Settings, error::error::FailedRequestSnafu};

#[derive(Debug, Clone)]
pub struct CourtServiceClient {
    client: ClientWithMiddleware,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApproveBody<'a> {
    approver_id: &'a str,
}

#[derive(Serialize)]
struct ReasonBody<'a> {
    reason: &'a str,
}

impl CourtServiceClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let inner = Client::builder().timeout(settings.timeout).build()?;

        let client = ClientBuilder::new(inner)
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(
                ExponentialBackoff::builder().build_with_max_retries(settings.max_retries),
            ))
            .build();

        Ok(Self {
            client,
            base_url: settings.url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/courts{path}", self.base_url)
    }

    #[instrument(skip(self))]
    pub async fn courts(&self, filters: &AdminCourtsFilter) -> Result<Vec<AdminCourt>> {
        json(self.client.get(self.url("")).query(filters)).await
    }

    #[instrument(skip(self))]
    pub async fn statistics(&self) -> Result<CourtStatistics> {
        json(self.client.get(self.url("/statistics"))).await
    }

    #[instrument(skip(self))]
    pub async fn approve(&self, id: &CourtId, approver_id: &str) -> Result<()> {
        let body = ApproveBody { approver_id };
        send(self.client.post(self.url(&format!("/{id}/approve"))).json(&body)).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn reject(&self, id: &CourtId, reason: &str) -> Result<()> {
        let body = ReasonBody { reason };
        send(self.client.post(self.url(&format!("/{id}/reject"))).json(&body)).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn suspend(&self, id: &CourtId, reason: &str) -> Result<()> {
        let body = ReasonBody { reason };
        send(self.client.post(self.url(&format!("/{id}/suspend"))).json(&body)).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &CourtId) -> Result<()> {
        send(self.client.delete(self.url(&format!("/{id}")))).await?;
        Ok(())
    }

    #[instrument(skip_all, fields(name = %draft.name))]
    pub async fn create(&self, draft: &CourtDraft) -> Result<AdminCourt> {
        json(self.client.post(self.url("")).json(draft)).await
    }
}

/// Sends the request, non-2xx responses become [`crate::Error::FailedRequest`].
async fn send(request: RequestBuilder) -> Result<reqwest::Response> {
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        return FailedRequestSnafu {
            url: response.url().clone(),
            status,
            body: response.text().await?,
        }
        .fail();
    }

    Ok(response)
}

async fn json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    Ok(send(request).await?.json().await?)
}

#[async_trait]
impl CourtServiceOutbound for CourtServiceClient {
    async fn get_courts(&self, filters: &AdminCourtsFilter) -> CoreResult<Vec<AdminCourt>> {
        Ok(self.courts(filters).await?)
    }

    async fn get_statistics(&self) -> CoreResult<CourtStatistics> {
        Ok(self.statistics().await?)
    }
}

#[async_trait]
impl CourtServiceInbound for CourtServiceClient {
    async fn approve_court(&self, id: &CourtId, approver_id: &str) -> CoreResult<()> {
        Ok(self.approve(id, approver_id).await?)
    }

    async fn reject_court(&self, id: &CourtId, reason: &str) -> CoreResult<()> {
        Ok(self.reject(id, reason).await?)
    }

    async fn suspend_court(&self, id: &CourtId, reason: &str) -> CoreResult<()> {
        Ok(self.suspend(id, reason).await?)
    }

    async fn delete_court(&self, id: &CourtId) -> CoreResult<()> {
        Ok(self.delete(id).await?)
    }

    async fn create_court(&self, draft: &CourtDraft) -> CoreResult<AdminCourt> {
        Ok(self.create(draft).await?)
    }
}
