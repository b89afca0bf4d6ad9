// Store trait for dashboard resources
use crate::domain::dashboard::{Dashboard, DashboardDraft, DashboardUpdate};
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// Transport failures from the dashboard store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("{url} responded with {status}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    #[error("unexpected response from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("invalid resource link '{0}'")]
    InvalidLink(String),
}

impl StoreError {
    /// Message reported by the server, when the failure came with one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            StoreError::Status { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Best text to show a user for this failure.
    pub fn user_message(&self) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| self.to_string())
    }
}

/// One HTTP round trip per call, no retries.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DashboardStore: Send + Sync {
    /// List every dashboard under a collection URL
    async fn fetch_all(&self, collection_url: &str) -> Result<Vec<Dashboard>, StoreError>;

    /// Fetch one dashboard by its own link
    async fn fetch(&self, self_url: &str) -> Result<Dashboard, StoreError>;

    /// Create a dashboard, returning it with server-assigned id and links
    async fn create(
        &self,
        collection_url: &str,
        draft: &DashboardDraft,
    ) -> Result<Dashboard, StoreError>;

    /// Patch a dashboard's mutable fields
    async fn update(
        &self,
        self_url: &str,
        update: &DashboardUpdate,
    ) -> Result<Dashboard, StoreError>;

    async fn delete(&self, self_url: &str) -> Result<(), StoreError>;
}
