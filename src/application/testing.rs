// Recording collaborators shared by application tests
use crate::application::actions::{Action, Dispatch};
use crate::application::collaborators::{Downloader, Notifier, RetainRanges, Router};
use crate::domain::notification::Notification;
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Action(Action),
    Notice(Notification),
    Push(String),
    Retain(Vec<String>),
    Download { file_name: String, mime: String },
}

/// Logs every collaborator call in the order it happened.
#[derive(Default)]
pub struct Recorder {
    events: Mutex<Vec<Recorded>>,
    pub fail_downloads: bool,
    pub downloaded: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn failing_downloads() -> Self {
        Self {
            fail_downloads: true,
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<Recorded> {
        self.events.lock().unwrap().clone()
    }

    pub fn actions(&self) -> Vec<Action> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Recorded::Action(action) => Some(action),
                _ => None,
            })
            .collect()
    }

    pub fn notices(&self) -> Vec<Notification> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Recorded::Notice(notice) => Some(notice),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: Recorded) {
        self.events.lock().unwrap().push(event);
    }
}

impl Dispatch for Recorder {
    fn dispatch(&self, action: Action) {
        self.record(Recorded::Action(action));
    }
}

impl Notifier for Recorder {
    fn notify(&self, notification: Notification) {
        self.record(Recorded::Notice(notification));
    }
}

impl Router for Recorder {
    fn push(&self, path: &str) {
        self.record(Recorded::Push(path.to_string()));
    }
}

#[async_trait]
impl RetainRanges for Recorder {
    async fn retain(&self, ids: &[String]) {
        self.record(Recorded::Retain(ids.to_vec()));
    }
}

#[async_trait]
impl Downloader for Recorder {
    async fn download(&self, contents: &str, file_name: &str, mime: &str) -> std::io::Result<()> {
        if self.fail_downloads {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only export dir",
            ));
        }
        self.downloaded.lock().unwrap().push(contents.to_string());
        self.record(Recorded::Download {
            file_name: file_name.to_string(),
            mime: mime.to_string(),
        });
        Ok(())
    }
}
