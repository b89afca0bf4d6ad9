// User-facing notifications for dashboard operations

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

pub fn dashboard_imported(name: &str) -> Notification {
    Notification::success(format!("Dashboard {name} imported successfully."))
}

pub fn dashboard_import_failed(reason: &str) -> Notification {
    Notification::error(format!("Dashboard import failed: {reason}"))
}

pub fn dashboard_deleted(name: &str) -> Notification {
    Notification::success(format!("Dashboard {name} deleted successfully."))
}

pub fn dashboard_delete_failed(name: &str, reason: &str) -> Notification {
    Notification::error(format!("Failed to delete Dashboard {name}: {reason}."))
}

pub fn dashboard_exported(name: &str) -> Notification {
    Notification::success(format!("Dashboard {name} exported successfully."))
}

pub fn dashboard_export_failed(name: &str, reason: &str) -> Notification {
    Notification::error(format!("Failed to export Dashboard {name}: {reason}."))
}

pub fn dashboard_create_failed() -> Notification {
    Notification::error("Failed to create dashboard.")
}

pub fn dashboards_load_failed(reason: &str) -> Notification {
    Notification::error(format!("Unable to load dashboards: {reason}"))
}

pub fn dashboard_renamed(name: &str) -> Notification {
    Notification::success(format!("Dashboard renamed to {name}."))
}

pub fn dashboard_rename_failed(name: &str, reason: &str) -> Notification {
    Notification::error(format!("Failed to rename Dashboard {name}: {reason}."))
}

pub fn dashboard_fetch_failed(name: &str, reason: &str) -> Notification {
    Notification::error(format!("Failed to load Dashboard {name}: {reason}."))
}
