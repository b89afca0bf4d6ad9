// Application layer - Collection state, workflows and the dashboards page
pub mod actions;
pub mod collaborators;
pub mod dashboard_service;
pub mod dashboard_store;
pub mod dashboards_page;
pub mod reducer;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;
