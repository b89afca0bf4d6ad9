// Main entry point - Dependency injection and command dispatch
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::dashboard_store::DashboardStore;
use crate::application::dashboards_page::{DashboardsPage, PageLinks};
use crate::application::state::DashboardsState;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::file_download::FileDownloader;
use crate::infrastructure::http_store::HttpDashboardStore;
use crate::infrastructure::time_ranges::TimeRangeFile;
use crate::presentation::cli::{Cli, Command};
use crate::presentation::console::{ConsoleNotifier, ConsoleRouter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = load_app_config(cli.config.as_deref())?;
    tracing::debug!("Using dashboard store at {}", config.collection_url());

    // Create store (infrastructure layer)
    let store: Arc<dyn DashboardStore> = Arc::new(
        HttpDashboardStore::new(&config.server.url)
            .with_context(|| format!("Invalid server url {}", config.server.url))?,
    );

    // Create state, collaborators and workflows (application layer)
    let state = Arc::new(DashboardsState::new());
    let notifier = Arc::new(ConsoleNotifier);
    let service = DashboardService::new(store.clone(), state.clone(), notifier.clone());

    let page = DashboardsPage::new(
        service,
        store,
        state,
        notifier,
        Arc::new(ConsoleRouter::new(&config.server.url)),
        Arc::new(TimeRangeFile::new(config.state.ranges_file.clone())),
        Arc::new(FileDownloader::new(config.export.dir.clone())),
        PageLinks {
            dashboards: config.collection_url(),
            source_id: config.source.id.clone(),
        },
    );

    // Run the requested command (presentation layer)
    page.mount().await;
    presentation::commands::run(&page, cli.command.unwrap_or(Command::List)).await
}
