// Dashboards collection reducer
use crate::application::actions::Action;
use crate::domain::dashboard::Dashboard;

/// Compute the next collection from the current one and a single action.
///
/// Loads replace the collection wholesale. Deletes drop every entry sharing
/// the payload id. A failed delete puts the dashboard back at the end unless
/// an entry with that id is already present, so ids stay unique.
pub fn reduce(state: &[Dashboard], action: &Action) -> Vec<Dashboard> {
    match action {
        Action::LoadDashboards { dashboards } => dashboards.clone(),
        Action::DeleteDashboard { dashboard } => state
            .iter()
            .filter(|d| d.id != dashboard.id)
            .cloned()
            .collect(),
        Action::DeleteDashboardFailed { dashboard } => {
            let mut next = state.to_vec();
            if !state.iter().any(|d| d.id == dashboard.id) {
                next.push(dashboard.clone());
            }
            next
        }
    }
}
