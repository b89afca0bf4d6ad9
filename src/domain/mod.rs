// Domain layer - Dashboard documents and user-facing notifications
pub mod dashboard;
pub mod import;
pub mod notification;
