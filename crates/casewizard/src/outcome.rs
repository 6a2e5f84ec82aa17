//! Reaction to the worker's outcome, and the rollback path shared with
//! wizard cancellation.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::request::CreationRequest;
use crate::services::followup::FollowOnAction;
use crate::services::store::CaseStore;
use crate::services::surface::StartupSurface;
use crate::services::ui::WorkflowUi;
use crate::worker::CreationOutcome;

/// Removes any partially created case directory and restores the busy
/// indicator. Deletion is best-effort: a failed cleanup is logged and never
/// surfaced, it must not crash the workflow or block the user.
pub struct RollbackHandler {
    store: Arc<dyn CaseStore>,
    ui: Arc<dyn WorkflowUi>,
}

impl RollbackHandler {
    pub fn new(store: Arc<dyn CaseStore>, ui: Arc<dyn WorkflowUi>) -> Self {
        Self { store, ui }
    }

    pub async fn rollback(&self, directory: Option<&Path>) {
        if let Some(dir) = directory {
            if let Err(e) = self.store.delete_case_directory(dir).await {
                warn!("failed to delete case directory {}: {e}", dir.display());
            }
        }
        self.ui.set_busy(false);
    }
}

/// Runs after the creation worker completes, with user-visible effects on
/// the UI-affinity context.
pub struct OutcomeHandler {
    ui: Arc<dyn WorkflowUi>,
    store: Arc<dyn CaseStore>,
    surface: Arc<dyn StartupSurface>,
    follow_on: Arc<dyn FollowOnAction>,
    rollback: RollbackHandler,
}

impl OutcomeHandler {
    pub fn new(
        ui: Arc<dyn WorkflowUi>,
        store: Arc<dyn CaseStore>,
        surface: Arc<dyn StartupSurface>,
        follow_on: Arc<dyn FollowOnAction>,
    ) -> Self {
        let rollback = RollbackHandler::new(store.clone(), ui.clone());
        Self {
            ui,
            store,
            surface,
            follow_on,
            rollback,
        }
    }

    /// On success the follow-on action takes over, including ownership of
    /// the busy indicator (it needs further user interaction itself, so the
    /// hand-off is deliberate). On failure the user gets exactly one error
    /// dialog, the startup surface is closed and reopened only if no case
    /// is open, and the partial directory is rolled back.
    ///
    /// Returns whether the run succeeded.
    pub async fn handle(&self, outcome: CreationOutcome, req: &CreationRequest) -> bool {
        match outcome {
            Ok(handle) => {
                info!("case '{}' ready, handing off to follow-on action", handle.name);
                self.follow_on.invoke();
                true
            }
            Err(cause) => {
                self.ui
                    .show_error("Failed to Create Case", cause.message());
                self.surface.close();
                if !self.store.is_any_case_open() {
                    self.surface.open();
                }
                self.rollback.rollback(Some(&req.case_directory)).await;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::errors::CreationError;
    use crate::request::{CaseHandle, CaseKind};
    use crate::services::store::CaseStoreError;
    use crate::services::ui::{ConfirmPrompt, Confirmation};

    #[derive(Default)]
    struct RecordingUi {
        busy: Mutex<Vec<bool>>,
        errors: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl WorkflowUi for RecordingUi {
        async fn confirm(&self, _prompt: ConfirmPrompt) -> Confirmation {
            Confirmation::Declined
        }

        fn set_busy(&self, busy: bool) {
            self.busy.lock().unwrap().push(busy);
        }

        fn show_error(&self, title: &str, message: &str) {
            self.errors
                .lock()
                .unwrap()
                .push((title.to_string(), message.to_string()));
        }
    }

    #[derive(Default)]
    struct RecordingStore {
        open: AtomicBool,
        fail_delete: bool,
        deleted: Mutex<Vec<PathBuf>>,
    }

    #[async_trait]
    impl CaseStore for RecordingStore {
        async fn create_case(&self, _req: &CreationRequest) -> Result<CaseHandle, CaseStoreError> {
            unreachable!("outcome handler never creates")
        }

        async fn delete_case_directory(&self, dir: &Path) -> Result<(), CaseStoreError> {
            self.deleted.lock().unwrap().push(dir.to_path_buf());
            if self.fail_delete {
                Err(CaseStoreError::Other("locked".into()))
            } else {
                Ok(())
            }
        }

        fn is_any_case_open(&self) -> bool {
            self.open.load(Ordering::SeqCst)
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        events: Mutex<Vec<&'static str>>,
    }

    impl StartupSurface for RecordingSurface {
        fn close(&self) {
            self.events.lock().unwrap().push("close");
        }

        fn open(&self) {
            self.events.lock().unwrap().push("open");
        }
    }

    #[derive(Default)]
    struct CountingFollowOn {
        invocations: AtomicUsize,
    }

    impl FollowOnAction for CountingFollowOn {
        fn invoke(&self) {
            self.invocations.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Fixture {
        handler: OutcomeHandler,
        ui: Arc<RecordingUi>,
        store: Arc<RecordingStore>,
        surface: Arc<RecordingSurface>,
        follow_on: Arc<CountingFollowOn>,
    }

    fn fixture(store: RecordingStore) -> Fixture {
        let ui = Arc::new(RecordingUi::default());
        let store = Arc::new(store);
        let surface = Arc::new(RecordingSurface::default());
        let follow_on = Arc::new(CountingFollowOn::default());
        let handler = OutcomeHandler::new(
            ui.clone(),
            store.clone(),
            surface.clone(),
            follow_on.clone(),
        );
        Fixture {
            handler,
            ui,
            store,
            surface,
            follow_on,
        }
    }

    fn request() -> CreationRequest {
        CreationRequest {
            case_directory: "/cases/c1".into(),
            name: "c1".into(),
            number: "001".into(),
            examiner: "jdoe".into(),
            kind: CaseKind::SingleUser,
        }
    }

    #[tokio::test]
    async fn success_invokes_follow_on_and_leaves_busy_to_the_hand_off() {
        let f = fixture(RecordingStore::default());
        let handle = CaseHandle {
            directory: "/cases/c1".into(),
            name: "c1".into(),
        };
        assert!(f.handler.handle(Ok(handle), &request()).await);
        assert_eq!(f.follow_on.invocations.load(Ordering::SeqCst), 1);
        assert!(f.store.deleted.lock().unwrap().is_empty());
        assert!(f.ui.busy.lock().unwrap().is_empty());
        assert!(f.ui.errors.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failure_shows_one_dialog_reopens_surface_and_rolls_back() {
        let f = fixture(RecordingStore::default());
        let outcome = Err(CreationError::new("disk full"));
        assert!(!f.handler.handle(outcome, &request()).await);

        let errors = f.ui.errors.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].1.contains("disk full"));
        assert_eq!(
            *f.surface.events.lock().unwrap(),
            vec!["close", "open"]
        );
        assert_eq!(
            *f.store.deleted.lock().unwrap(),
            vec![PathBuf::from("/cases/c1")]
        );
        assert_eq!(*f.ui.busy.lock().unwrap(), vec![false]);
        assert_eq!(f.follow_on.invocations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn surface_stays_closed_when_another_case_is_open() {
        let store = RecordingStore::default();
        store.open.store(true, Ordering::SeqCst);
        let f = fixture(store);
        f.handler
            .handle(Err(CreationError::new("disk full")), &request())
            .await;
        assert_eq!(*f.surface.events.lock().unwrap(), vec!["close"]);
    }

    #[tokio::test]
    async fn rollback_failure_is_logged_not_redialoged() {
        let store = RecordingStore {
            fail_delete: true,
            ..RecordingStore::default()
        };
        let f = fixture(store);
        f.handler
            .handle(Err(CreationError::new("disk full")), &request())
            .await;
        // Still exactly one dialog, and busy is still cleared.
        assert_eq!(f.ui.errors.lock().unwrap().len(), 1);
        assert_eq!(*f.ui.busy.lock().unwrap(), vec![false]);
    }

    #[tokio::test]
    async fn rollback_without_directory_only_restores_the_cursor() {
        let f = fixture(RecordingStore::default());
        f.handler.rollback.rollback(None).await;
        assert!(f.store.deleted.lock().unwrap().is_empty());
        assert_eq!(*f.ui.busy.lock().unwrap(), vec![false]);
    }
}
