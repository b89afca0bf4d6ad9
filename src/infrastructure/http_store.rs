// HTTP dashboard store implementation
use crate::application::dashboard_store::{DashboardStore, StoreError};
use crate::domain::dashboard::{Dashboard, DashboardDraft, DashboardUpdate};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct HttpDashboardStore {
    client: reqwest::Client,
    base: Url,
}

#[derive(Debug, Deserialize)]
struct DashboardsResponse {
    dashboards: Vec<Dashboard>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

impl HttpDashboardStore {
    /// `base_url` resolves the server-relative links the store hands out.
    pub fn new(base_url: &str) -> Result<Self, StoreError> {
        let base =
            Url::parse(base_url).map_err(|_| StoreError::InvalidLink(base_url.to_string()))?;
        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    fn resolve(&self, link: &str) -> Result<Url, StoreError> {
        self.base
            .join(link)
            .map_err(|_| StoreError::InvalidLink(link.to_string()))
    }

    async fn execute(&self, request: RequestBuilder, url: &Url) -> Result<Response, StoreError> {
        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| StoreError::Network {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response, url: &Url) -> Result<T, StoreError> {
        response.json::<T>().await.map_err(|e| StoreError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Pull the human-readable message out of an error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[async_trait]
impl DashboardStore for HttpDashboardStore {
    async fn fetch_all(&self, collection_url: &str) -> Result<Vec<Dashboard>, StoreError> {
        let url = self.resolve(collection_url)?;
        tracing::debug!("GET {}", url);

        let response = self.execute(self.client.get(url.clone()), &url).await?;
        let body: DashboardsResponse = Self::decode(response, &url).await?;
        Ok(body.dashboards)
    }

    async fn fetch(&self, self_url: &str) -> Result<Dashboard, StoreError> {
        let url = self.resolve(self_url)?;
        tracing::debug!("GET {}", url);

        let response = self.execute(self.client.get(url.clone()), &url).await?;
        Self::decode(response, &url).await
    }

    async fn create(
        &self,
        collection_url: &str,
        draft: &DashboardDraft,
    ) -> Result<Dashboard, StoreError> {
        let url = self.resolve(collection_url)?;
        tracing::debug!("POST {} ({} cells)", url, draft.cells.len());

        let request = self.client.post(url.clone()).json(draft);
        let response = self.execute(request, &url).await?;
        Self::decode(response, &url).await
    }

    async fn update(
        &self,
        self_url: &str,
        update: &DashboardUpdate,
    ) -> Result<Dashboard, StoreError> {
        let url = self.resolve(self_url)?;
        tracing::debug!("PATCH {}", url);

        let request = self.client.patch(url.clone()).json(update);
        let response = self.execute(request, &url).await?;
        Self::decode(response, &url).await
    }

    async fn delete(&self, self_url: &str) -> Result<(), StoreError> {
        let url = self.resolve(self_url)?;
        tracing::debug!("DELETE {}", url);

        self.execute(self.client.delete(url.clone()), &url).await?;
        Ok(())
    }
}
