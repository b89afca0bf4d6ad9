// Terminal implementations of the page's notifier and router
use crate::application::collaborators::{Notifier, Router};
use crate::domain::notification::Notification;

#[derive(Debug, Default, Clone)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        if notification.is_error() {
            tracing::warn!("{}", notification.message);
            eprintln!("❌ {}", notification.message);
        } else {
            tracing::info!("{}", notification.message);
            println!("✅ {}", notification.message);
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConsoleRouter {
    base_url: String,
}

impl ConsoleRouter {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn location(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Router for ConsoleRouter {
    fn push(&self, path: &str) {
        tracing::debug!("Navigating to {}", path);
        println!("➡️  {}", self.location(path));
    }
}
