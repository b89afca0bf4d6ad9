// Process-wide dashboards collection, written only through the reducer
use crate::application::actions::{Action, Dispatch};
use crate::application::reducer::reduce;
use crate::domain::dashboard::Dashboard;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct DashboardsState {
    dashboards: Mutex<Vec<Dashboard>>,
}

impl DashboardsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<Dashboard> {
        self.lock().clone()
    }

    pub fn find(&self, id: &str) -> Option<Dashboard> {
        self.lock().iter().find(|d| d.id == id).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Dashboard>> {
        // reduce never panics, so a poisoned lock still holds a whole value
        self.dashboards.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Dispatch for DashboardsState {
    fn dispatch(&self, action: Action) {
        let mut dashboards = self.lock();
        let next = reduce(&dashboards, &action);
        tracing::debug!(
            "Dashboards collection: {} -> {} entries",
            dashboards.len(),
            next.len()
        );
        *dashboards = next;
    }
}
