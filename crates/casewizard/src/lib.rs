//! Asynchronous case-creation workflow controller.
//!
//! Drives the new-case wizard end to end: a conflict gate against the
//! running ingest pipeline, the modal step sequence, off-thread creation of
//! the case workspace, and guaranteed rollback of anything partially
//! created when the user cancels or creation fails. Dialog rendering,
//! input-screen validation and case persistence stay behind the
//! collaborator traits in [`services`].

pub mod coordinator;
pub mod errors;
pub mod guard;
pub mod logging;
pub mod outcome;
pub mod plan;
pub mod properties;
pub mod request;
pub mod services;
pub mod state;
pub mod worker;
pub mod workflow;

pub use coordinator::{WizardCoordinator, WizardRun};
pub use errors::{CreationError, WorkflowError};
pub use guard::{ConflictGuard, GuardDecision};
pub use outcome::{OutcomeHandler, RollbackHandler};
pub use plan::{StepInfo, WizardPlan};
pub use properties::PropertyBag;
pub use request::{CaseHandle, CaseKind, CreationRequest};
pub use state::WorkflowState;
pub use worker::{CreationOutcome, CreationWorker};
pub use workflow::{Collaborators, NewCaseWorkflow};
