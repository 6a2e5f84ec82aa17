//! Workflow-level error taxonomy.
//!
//! Collaborator error types live next to their traits in `services`; this
//! module only covers the controller's own failures. Propagation policy:
//! every failure originating on the worker context is converted into a
//! typed outcome before crossing back to the UI-affinity context.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    /// A run is in flight; the triggering action should have been disabled.
    #[error("a case-creation workflow is already active")]
    AlreadyActive,

    /// The wizard host reported Finish but a required property is missing.
    /// Contract violation on the host side, handled as a cancellation.
    #[error("wizard finished without required property '{0}'")]
    MissingProperty(&'static str),
}

/// Failure of the creation primitive, surfaced to the user with the
/// original cause message and exactly one dialog per failed attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CreationError {
    message: String,
}

impl CreationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
