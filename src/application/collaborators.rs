// Ports for the page's outside collaborators
use crate::domain::notification::Notification;
use async_trait::async_trait;

/// Fire-and-forget user notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Navigation after a dashboard is created or cloned.
pub trait Router: Send + Sync {
    fn push(&self, path: &str);
}

/// Drops cached per-dashboard UI state for ids not in `ids`.
#[async_trait]
pub trait RetainRanges: Send + Sync {
    async fn retain(&self, ids: &[String]);
}

/// Hands a generated file to the user.
#[async_trait]
pub trait Downloader: Send + Sync {
    async fn download(&self, contents: &str, file_name: &str, mime: &str) -> std::io::Result<()>;
}
