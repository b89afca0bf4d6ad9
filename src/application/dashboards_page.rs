// Dashboards page - Lifecycle and per-dashboard user actions
use crate::application::collaborators::{Downloader, Notifier, RetainRanges, Router};
use crate::application::dashboard_service::DashboardService;
use crate::application::dashboard_store::DashboardStore;
use crate::application::state::DashboardsState;
use crate::domain::dashboard::{new_dashboard, Dashboard, DashboardDraft, DashboardFile, DashboardUpdate};
use crate::domain::import::decode_import;
use crate::domain::notification;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

pub const PAGE_TITLE: &str = "Dashboards";
const EXPORT_MIME: &str = "text/plain";

/// Where the page finds its resources.
#[derive(Debug, Clone)]
pub struct PageLinks {
    pub dashboards: String,
    pub source_id: String,
}

impl PageLinks {
    pub fn source_link(&self) -> String {
        format!("/sources/{}", self.source_id)
    }

    pub fn dashboard_route(&self, dashboard_id: &str) -> String {
        format!(
            "{}/dashboards/{}",
            self.source_link(),
            urlencoding::encode(dashboard_id)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardRow {
    pub id: String,
    pub name: String,
    pub cell_count: usize,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub title: String,
    pub dashboard_link: String,
    pub rows: Vec<DashboardRow>,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("dashboard '{name}' has no id")]
    MissingId { name: String },
}

/// What ends up on screen: the page, or a fallback when rendering failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Page(PageView),
    Fallback(String),
}

pub struct ErrorBoundary;

impl ErrorBoundary {
    pub fn render(page: &DashboardsPage) -> Screen {
        match page.render() {
            Ok(view) => Screen::Page(view),
            Err(e) => {
                tracing::error!("Error rendering {} page: {}", PAGE_TITLE, e);
                Screen::Fallback(format!(
                    "A problem occurred while rendering this page: {e}"
                ))
            }
        }
    }
}

pub struct DashboardsPage {
    service: DashboardService,
    store: Arc<dyn DashboardStore>,
    state: Arc<DashboardsState>,
    notifier: Arc<dyn Notifier>,
    router: Arc<dyn Router>,
    ranges: Arc<dyn RetainRanges>,
    downloader: Arc<dyn Downloader>,
    links: PageLinks,
}

impl DashboardsPage {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        service: DashboardService,
        store: Arc<dyn DashboardStore>,
        state: Arc<DashboardsState>,
        notifier: Arc<dyn Notifier>,
        router: Arc<dyn Router>,
        ranges: Arc<dyn RetainRanges>,
        downloader: Arc<dyn Downloader>,
        links: PageLinks,
    ) -> Self {
        Self {
            service,
            store,
            state,
            notifier,
            router,
            ranges,
            downloader,
            links,
        }
    }

    pub fn service(&self) -> &DashboardService {
        &self.service
    }

    pub fn state(&self) -> &DashboardsState {
        &self.state
    }

    pub fn links(&self) -> &PageLinks {
        &self.links
    }

    /// Load the collection and prune cached time ranges to the loaded ids.
    pub async fn mount(&self) {
        match self.service.load_all(&self.links.dashboards).await {
            Ok(dashboards) => {
                let ids: Vec<String> = dashboards.into_iter().map(|d| d.id).collect();
                self.ranges.retain(&ids).await;
            }
            Err(e) => {
                self.notifier
                    .notify(notification::dashboards_load_failed(&e.user_message()));
            }
        }
    }

    pub fn render(&self) -> Result<PageView, RenderError> {
        let rows = self
            .state
            .snapshot()
            .into_iter()
            .map(|d| {
                if d.id.is_empty() {
                    return Err(RenderError::MissingId { name: d.name });
                }
                Ok(DashboardRow {
                    href: self.links.dashboard_route(&d.id),
                    cell_count: d.cells.len(),
                    id: d.id,
                    name: d.name,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageView {
            title: PAGE_TITLE.to_string(),
            dashboard_link: self.links.source_link(),
            rows,
        })
    }

    /// Re-read a single dashboard from its own link.
    pub async fn fetch_dashboard(&self, dashboard: &Dashboard) -> Option<Dashboard> {
        match self.store.fetch(&dashboard.links.self_link).await {
            Ok(fresh) => Some(fresh),
            Err(e) => {
                tracing::error!("Error fetching dashboard {}: {}", dashboard.id, e);
                self.notifier.notify(notification::dashboard_fetch_failed(
                    &dashboard.name,
                    &e.user_message(),
                ));
                None
            }
        }
    }

    pub async fn create_dashboard(&self) -> Option<Dashboard> {
        self.create_and_open(&new_dashboard()).await
    }

    pub async fn clone_dashboard(&self, dashboard: &Dashboard) -> Option<Dashboard> {
        self.create_and_open(&dashboard.clone_draft()).await
    }

    async fn create_and_open(&self, draft: &DashboardDraft) -> Option<Dashboard> {
        match self.store.create(&self.links.dashboards, draft).await {
            Ok(created) => {
                self.router.push(&self.links.dashboard_route(&created.id));
                Some(created)
            }
            Err(e) => {
                tracing::error!("Error creating dashboard {}: {}", draft.name, e);
                self.notifier.notify(notification::dashboard_create_failed());
                None
            }
        }
    }

    pub async fn export_dashboard(&self, dashboard: &Dashboard) {
        let file_name = dashboard.export_file_name();
        let result = match DashboardFile::new(dashboard.clone()).to_pretty_json() {
            Ok(contents) => self
                .downloader
                .download(&contents, &file_name, EXPORT_MIME)
                .await
                .map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match result {
            Ok(()) => self
                .notifier
                .notify(notification::dashboard_exported(&dashboard.name)),
            Err(reason) => {
                tracing::error!("Error exporting dashboard {}: {}", dashboard.id, reason);
                self.notifier
                    .notify(notification::dashboard_export_failed(&dashboard.name, &reason));
            }
        }
    }

    /// Normalize an imported document and hand it to the import workflow.
    pub async fn import_dashboard(&self, document: &Value) {
        match decode_import(document) {
            Ok(draft) => self.service.import(&self.links.dashboards, draft).await,
            Err(e) => {
                tracing::error!("Rejected imported dashboard: {}", e);
                self.notifier
                    .notify(notification::dashboard_import_failed(&e.to_string()));
            }
        }
    }

    pub async fn rename_dashboard(&self, dashboard: &Dashboard, name: &str) {
        let update = DashboardUpdate {
            name: name.to_string(),
        };
        let result = match self.store.update(&dashboard.links.self_link, &update).await {
            Ok(_) => self.service.load_all(&self.links.dashboards).await.map(|_| ()),
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => self.notifier.notify(notification::dashboard_renamed(name)),
            Err(e) => {
                tracing::error!("Error renaming dashboard {}: {}", dashboard.id, e);
                self.notifier.notify(notification::dashboard_rename_failed(
                    &dashboard.name,
                    &e.user_message(),
                ));
            }
        }
    }
}
