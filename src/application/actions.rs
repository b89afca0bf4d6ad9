// Dashboard collection actions and the dispatch seam
use crate::domain::dashboard::Dashboard;

/// State transitions of the dashboards collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The authoritative collection is now exactly `dashboards`.
    LoadDashboards { dashboards: Vec<Dashboard> },
    /// Remove the entry with this id ahead of server confirmation.
    DeleteDashboard { dashboard: Dashboard },
    /// A previously dispatched delete was rejected by the server.
    DeleteDashboardFailed { dashboard: Dashboard },
}

pub fn load_dashboards(dashboards: Vec<Dashboard>) -> Action {
    Action::LoadDashboards { dashboards }
}

pub fn delete_dashboard(dashboard: Dashboard) -> Action {
    Action::DeleteDashboard { dashboard }
}

pub fn delete_dashboard_failed(dashboard: Dashboard) -> Action {
    Action::DeleteDashboardFailed { dashboard }
}

/// Sink for collection actions, injected wherever state changes originate.
pub trait Dispatch: Send + Sync {
    fn dispatch(&self, action: Action);
}
