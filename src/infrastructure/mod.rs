// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod file_download;
pub mod http_store;
pub mod time_ranges;
