//! Pre-condition gate: confirm before interrupting a running ingest.

use std::sync::Arc;

use tracing::{error, info};

use crate::services::conflict::ConflictSource;
use crate::services::ui::{ConfirmPrompt, Confirmation, WorkflowUi};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Abort,
}

/// Checks whether the ingest pipeline is active and, if so, obtains
/// explicit user confirmation before the workflow may continue.
pub struct ConflictGuard {
    conflict: Arc<dyn ConflictSource>,
    ui: Arc<dyn WorkflowUi>,
}

impl ConflictGuard {
    pub fn new(conflict: Arc<dyn ConflictSource>, ui: Arc<dyn WorkflowUi>) -> Self {
        Self { conflict, ui }
    }

    /// No UI interaction at all when the ingest pipeline is idle.
    ///
    /// When it is active, the user is warned that creating a new case
    /// closes the current one and leaves ingest incomplete. On confirmation
    /// the pipeline is stopped gracefully; a stop failure is logged but does
    /// not abort, the user already opted in.
    pub async fn check_and_confirm(&self) -> GuardDecision {
        if !self.conflict.is_active() {
            return GuardDecision::Proceed;
        }

        let prompt = ConfirmPrompt::warning(
            "Ingest Is Running",
            "Ingest is still processing the current case. Creating a new case \
             will close it and leave ingest incomplete. Continue?",
        );
        match self.ui.confirm(prompt).await {
            Confirmation::Confirmed => {
                info!("user confirmed interrupting ingest for new case");
                if let Err(e) = self.conflict.force_stop() {
                    error!("best-effort ingest stop failed: {e}");
                }
                GuardDecision::Proceed
            }
            Confirmation::Declined => GuardDecision::Abort,
        }
    }
}
