//! The workflow controller: single entry point wiring guard, wizard,
//! worker, outcome and rollback together.
//!
//! Threading model: `perform` runs on the caller's (UI-affinity) context up
//! to and including the modal wizard. Everything after a finished wizard
//! runs on a detached worker task, fire-and-forget from the caller's
//! perspective; the collaborator implementations marshal user-visible
//! effects back onto the UI-affinity context. No locking beyond a run
//! in-flight flag: concurrent invocation is rejected, the triggering UI
//! action is expected to be disabled while a run is active.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use crate::coordinator::{WizardCoordinator, WizardRun};
use crate::errors::WorkflowError;
use crate::guard::{ConflictGuard, GuardDecision};
use crate::outcome::{OutcomeHandler, RollbackHandler};
use crate::plan::WizardPlan;
use crate::services::conflict::ConflictSource;
use crate::services::followup::FollowOnAction;
use crate::services::store::CaseStore;
use crate::services::surface::StartupSurface;
use crate::services::ui::WorkflowUi;
use crate::services::wizard_host::WizardHost;
use crate::state::{StateCell, WorkflowState};
use crate::worker::CreationWorker;

/// External collaborators, injected once at startup.
pub struct Collaborators {
    pub conflict: Arc<dyn ConflictSource>,
    pub store: Arc<dyn CaseStore>,
    pub ui: Arc<dyn WorkflowUi>,
    pub host: Arc<dyn WizardHost>,
    pub surface: Arc<dyn StartupSurface>,
    pub follow_on: Arc<dyn FollowOnAction>,
}

/// Drives one new-case workflow per user gesture.
///
/// The controller is long-lived; each `perform` call builds a fresh run
/// context, so sequential runs share nothing but the injected collaborators
/// and the immutable wizard plan.
pub struct NewCaseWorkflow {
    plan: Arc<WizardPlan>,
    collaborators: Collaborators,
    in_flight: Arc<AtomicBool>,
}

impl NewCaseWorkflow {
    pub fn new(plan: Arc<WizardPlan>, collaborators: Collaborators) -> Self {
        Self {
            plan,
            collaborators,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The single entry point behind the "New Case" user gesture.
    ///
    /// Returns a watch receiver observing the run; the run itself continues
    /// past this call once creation has been dispatched. Calling again
    /// before the previous run reached a resting state is rejected.
    pub async fn perform(&self) -> Result<watch::Receiver<WorkflowState>, WorkflowError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(WorkflowError::AlreadyActive);
        }

        let (cell, rx) = StateCell::new();
        cell.advance(WorkflowState::AwaitingConflictConfirmation);

        let c = &self.collaborators;
        let guard = ConflictGuard::new(c.conflict.clone(), c.ui.clone());
        if guard.check_and_confirm().await == GuardDecision::Abort {
            info!("new-case workflow aborted at the conflict gate");
            cell.advance(WorkflowState::Idle);
            self.in_flight.store(false, Ordering::SeqCst);
            return Ok(rx);
        }

        // Busy only from here on: the gate itself must leave no trace.
        c.ui.set_busy(true);
        cell.advance(WorkflowState::WizardActive);

        let coordinator = WizardCoordinator::new(self.plan.clone(), c.host.clone());
        match coordinator.run().await {
            WizardRun::Finished(req) => {
                cell.advance(WorkflowState::Creating);
                let worker = CreationWorker::new(c.store.clone());
                let handler = OutcomeHandler::new(
                    c.ui.clone(),
                    c.store.clone(),
                    c.surface.clone(),
                    c.follow_on.clone(),
                );
                let in_flight = self.in_flight.clone();
                tokio::spawn(async move {
                    let outcome = worker.create(&req).await;
                    let succeeded = handler.handle(outcome, &req).await;
                    // Clear the flag before publishing the terminal state:
                    // a caller that has observed it may invoke again.
                    in_flight.store(false, Ordering::SeqCst);
                    cell.advance(if succeeded {
                        WorkflowState::Succeeded
                    } else {
                        WorkflowState::RolledBack
                    });
                });
            }
            WizardRun::Cancelled(partial) => {
                self.dispatch_rollback(cell, partial);
            }
        }

        Ok(rx)
    }

    /// Deletion may touch slow storage, so the cancellation path also
    /// leaves the caller's context.
    fn dispatch_rollback(&self, cell: StateCell, partial: Option<std::path::PathBuf>) {
        let rollback = RollbackHandler::new(
            self.collaborators.store.clone(),
            self.collaborators.ui.clone(),
        );
        let in_flight = self.in_flight.clone();
        tokio::spawn(async move {
            rollback.rollback(partial.as_deref()).await;
            in_flight.store(false, Ordering::SeqCst);
            cell.advance(WorkflowState::RolledBack);
        });
    }
}
