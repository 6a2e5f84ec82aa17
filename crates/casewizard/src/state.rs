//! Workflow state machine.
//!
//! One `WorkflowState` instance is live per run. Transitions are strictly
//! forward until a terminal state is reached; the only backwards edge is
//! `AwaitingConflictConfirmation -> Idle` when the user declines to stop the
//! conflicting ingest pipeline.

use tokio::sync::watch;
use tracing::{debug, error};

/// Phases of a single new-case workflow run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum WorkflowState {
    Idle,
    AwaitingConflictConfirmation,
    WizardActive,
    Creating,
    Succeeded,
    RolledBack,
}

impl WorkflowState {
    /// Human-readable label (statuslines, log context).
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::AwaitingConflictConfirmation => "awaiting-conflict-confirmation",
            WorkflowState::WizardActive => "wizard-active",
            WorkflowState::Creating => "creating",
            WorkflowState::Succeeded => "succeeded",
            WorkflowState::RolledBack => "rolled-back",
        }
    }

    /// Terminal states carry no pending user-visible obligation.
    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkflowState::Succeeded | WorkflowState::RolledBack)
    }

    /// `Idle` and the terminal states are the only resting points.
    pub fn is_resting(&self) -> bool {
        matches!(self, WorkflowState::Idle) || self.is_terminal()
    }

    /// Legal transition table for a run.
    pub fn may_transition_to(&self, next: WorkflowState) -> bool {
        use WorkflowState::*;
        matches!(
            (self, next),
            (Idle, AwaitingConflictConfirmation)
                | (AwaitingConflictConfirmation, Idle)
                | (AwaitingConflictConfirmation, WizardActive)
                | (WizardActive, Creating)
                | (WizardActive, RolledBack)
                | (Creating, Succeeded)
                | (Creating, RolledBack)
        )
    }
}

/// Publishes the state of one run over a watch channel.
///
/// The cell enforces the transition table; an illegal transition is a
/// controller bug and is logged at error level without being applied, so a
/// misbehaving path can never resurrect a finished run.
pub struct StateCell {
    tx: watch::Sender<WorkflowState>,
}

impl StateCell {
    pub fn new() -> (Self, watch::Receiver<WorkflowState>) {
        let (tx, rx) = watch::channel(WorkflowState::Idle);
        (Self { tx }, rx)
    }

    pub fn current(&self) -> WorkflowState {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<WorkflowState> {
        self.tx.subscribe()
    }

    /// Apply a transition, returning whether it was legal.
    pub fn advance(&self, next: WorkflowState) -> bool {
        let current = self.current();
        if !current.may_transition_to(next) {
            error!("illegal workflow transition {current} -> {next}, ignored");
            debug_assert!(false, "illegal workflow transition {current} -> {next}");
            return false;
        }
        debug!("workflow state {current} -> {next}");
        // Receivers may all be gone (run finished unobserved); that is fine.
        let _ = self.tx.send(next);
        true
    }
}
