// Dashboard service - Async workflows bridging the store and the collection
use crate::application::actions::{delete_dashboard, delete_dashboard_failed, load_dashboards, Dispatch};
use crate::application::collaborators::Notifier;
use crate::application::dashboard_store::{DashboardStore, StoreError};
use crate::domain::dashboard::{Dashboard, DashboardDraft};
use crate::domain::notification;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn DashboardStore>,
    dispatcher: Arc<dyn Dispatch>,
    notifier: Arc<dyn Notifier>,
}

impl DashboardService {
    pub fn new(
        store: Arc<dyn DashboardStore>,
        dispatcher: Arc<dyn Dispatch>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            dispatcher,
            notifier,
        }
    }

    /// Replace the collection with the store's current list.
    ///
    /// Failures are logged and returned without dispatching anything; the
    /// caller decides how to surface them.
    pub async fn load_all(&self, collection_url: &str) -> Result<Vec<Dashboard>, StoreError> {
        match self.store.fetch_all(collection_url).await {
            Ok(dashboards) => {
                tracing::debug!("Loaded {} dashboards from {}", dashboards.len(), collection_url);
                self.dispatcher.dispatch(load_dashboards(dashboards.clone()));
                Ok(dashboards)
            }
            Err(e) => {
                tracing::error!("Error loading dashboards: {}", e);
                Err(e)
            }
        }
    }

    /// Persist an imported dashboard, then reload the collection.
    pub async fn import(&self, collection_url: &str, draft: DashboardDraft) {
        let result: Result<Vec<Dashboard>, StoreError> = async {
            self.store.create(collection_url, &draft).await?;
            self.store.fetch_all(collection_url).await
        }
        .await;

        match result {
            Ok(dashboards) => {
                self.dispatcher.dispatch(load_dashboards(dashboards));
                self.notifier.notify(notification::dashboard_imported(&draft.name));
            }
            Err(e) => {
                tracing::error!("Error importing dashboard {}: {}", draft.name, e);
                self.notifier
                    .notify(notification::dashboard_import_failed("Could not upload dashboard"));
            }
        }
    }

    /// Remove a dashboard optimistically, rolling back if the store refuses.
    pub async fn delete(&self, dashboard: Dashboard) {
        self.dispatcher.dispatch(delete_dashboard(dashboard.clone()));

        match self.store.delete(&dashboard.links.self_link).await {
            Ok(()) => {
                self.notifier.notify(notification::dashboard_deleted(&dashboard.name));
            }
            Err(e) => {
                tracing::error!("Error deleting dashboard {}: {}", dashboard.id, e);
                self.notifier.notify(notification::dashboard_delete_failed(
                    &dashboard.name,
                    &e.user_message(),
                ));
                self.dispatcher.dispatch(delete_dashboard_failed(dashboard));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_store::MockDashboardStore;
    use crate::application::state::DashboardsState;
    use crate::application::testing::{Recorded, Recorder};
    use crate::domain::dashboard::sample;
    use mockall::predicate::eq;

    const URL: &str = "http://localhost:9999/v2/dashboards";

    fn service(store: MockDashboardStore, recorder: &Arc<Recorder>) -> DashboardService {
        DashboardService::new(Arc::new(store), recorder.clone(), recorder.clone())
    }

    fn locked(url: &str) -> StoreError {
        StoreError::Status {
            url: url.to_string(),
            status: 423,
            message: "locked".to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_all_dispatches_and_returns_list() {
        let listed = vec![sample("1", "One"), sample("2", "Two")];
        let mut store = MockDashboardStore::new();
        let returned = listed.clone();
        store
            .expect_fetch_all()
            .with(eq(URL))
            .times(1)
            .returning(move |_| Ok(returned.clone()));

        let recorder = Arc::new(Recorder::default());
        let loaded = service(store, &recorder).load_all(URL).await.unwrap();

        assert_eq!(loaded, listed);
        assert_eq!(recorder.actions(), vec![load_dashboards(listed)]);
    }

    #[tokio::test]
    async fn test_load_all_failure_returns_error_without_dispatch() {
        let mut store = MockDashboardStore::new();
        store.expect_fetch_all().returning(|url| {
            Err(StoreError::Network {
                url: url.to_string(),
                reason: "connection refused".to_string(),
            })
        });

        let recorder = Arc::new(Recorder::default());
        let result = service(store, &recorder).load_all(URL).await;

        assert!(matches!(result, Err(StoreError::Network { .. })));
        assert!(recorder.events().is_empty());
    }

    #[tokio::test]
    async fn test_import_creates_then_reloads_then_notifies() {
        let (d1, d2) = (sample("1", "One"), sample("2", "Two"));
        let mut seq = mockall::Sequence::new();
        let mut store = MockDashboardStore::new();
        let created = d2.clone();
        store
            .expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_, _| Ok(created.clone()));
        let listed = vec![d1.clone(), d2.clone()];
        store
            .expect_fetch_all()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(listed.clone()));

        let recorder = Arc::new(Recorder::default());
        service(store, &recorder).import(URL, d2.to_draft()).await;

        let events = recorder.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], Recorded::Action(load_dashboards(vec![d1, d2])));
        match &events[1] {
            Recorded::Notice(notice) => {
                assert!(!notice.is_error());
                assert!(notice.message.contains("Two"));
            }
            other => panic!("expected notification, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_import_create_failure_is_absorbed() {
        let mut store = MockDashboardStore::new();
        store
            .expect_create()
            .returning(|url, _| Err(locked(url)));
        store.expect_fetch_all().never();

        let recorder = Arc::new(Recorder::default());
        service(store, &recorder)
            .import(URL, sample("1", "One").to_draft())
            .await;

        let notices = recorder.notices();
        assert!(recorder.actions().is_empty());
        assert_eq!(notices.len(), 1);
        assert!(notices[0].is_error());
    }

    #[tokio::test]
    async fn test_import_reload_failure_is_absorbed() {
        let mut store = MockDashboardStore::new();
        store
            .expect_create()
            .returning(|_, _| Ok(sample("1", "One")));
        store.expect_fetch_all().returning(|url| {
            Err(StoreError::Decode {
                url: url.to_string(),
                reason: "missing field `dashboards`".to_string(),
            })
        });

        let recorder = Arc::new(Recorder::default());
        service(store, &recorder)
            .import(URL, sample("1", "One").to_draft())
            .await;

        assert!(recorder.actions().is_empty());
        assert_eq!(recorder.notices().len(), 1);
        assert!(recorder.notices()[0].is_error());
    }

    #[tokio::test]
    async fn test_delete_success_notifies_after_optimistic_removal() {
        let dashboard = sample("1", "One");
        let mut store = MockDashboardStore::new();
        store
            .expect_delete()
            .with(eq("/v2/dashboards/1"))
            .times(1)
            .returning(|_| Ok(()));

        let recorder = Arc::new(Recorder::default());
        service(store, &recorder).delete(dashboard.clone()).await;

        let events = recorder.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], Recorded::Action(delete_dashboard(dashboard)));
        assert!(matches!(&events[1], Recorded::Notice(n) if !n.is_error()));
    }

    #[tokio::test]
    async fn test_delete_failure_notifies_then_dispatches_failed() {
        let dashboard = sample("2", "Two");
        let mut store = MockDashboardStore::new();
        store.expect_delete().returning(|url| Err(locked(url)));

        let recorder = Arc::new(Recorder::default());
        service(store, &recorder).delete(dashboard.clone()).await;

        let events = recorder.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], Recorded::Action(delete_dashboard(dashboard.clone())));
        match &events[1] {
            Recorded::Notice(notice) => {
                assert!(notice.is_error());
                assert!(notice.message.contains("locked"));
            }
            other => panic!("expected notification, got {other:?}"),
        }
        assert_eq!(events[2], Recorded::Action(delete_dashboard_failed(dashboard)));
    }

    #[tokio::test]
    async fn test_failed_delete_restores_dashboard_in_state() {
        let mut store = MockDashboardStore::new();
        store.expect_delete().returning(|url| Err(locked(url)));

        let state = Arc::new(DashboardsState::new());
        state.dispatch(load_dashboards(vec![sample("1", "One"), sample("2", "Two")]));

        let recorder = Arc::new(Recorder::default());
        let service = DashboardService::new(Arc::new(store), state.clone(), recorder.clone());
        service.delete(sample("1", "One")).await;

        let ids: Vec<String> = state.snapshot().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["2".to_string(), "1".to_string()]);
    }

    #[tokio::test]
    async fn test_concurrent_deletes_remove_each_target() {
        let mut store = MockDashboardStore::new();
        store.expect_delete().times(2).returning(|_| Ok(()));

        let state = Arc::new(DashboardsState::new());
        state.dispatch(load_dashboards(vec![
            sample("1", "One"),
            sample("2", "Two"),
            sample("3", "Three"),
        ]));

        let recorder = Arc::new(Recorder::default());
        let service = DashboardService::new(Arc::new(store), state.clone(), recorder.clone());
        futures::future::join_all([
            service.delete(sample("1", "One")),
            service.delete(sample("3", "Three")),
        ])
        .await;

        let ids: Vec<String> = state.snapshot().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["2".to_string()]);
        assert_eq!(recorder.notices().len(), 2);
        assert!(recorder.notices().iter().all(|n| !n.is_error()));
    }
}
