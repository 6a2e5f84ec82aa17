//! Query/control over the conflicting ingest pipeline.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ConflictError {
    #[error("failed to stop ingest: {0}")]
    StopFailed(String),
}

/// The long-running background process that must not be interrupted
/// silently. Stopping it is best-effort: a failed stop is logged by the
/// guard and never aborts the workflow, because the user already opted in.
pub trait ConflictSource: Send + Sync {
    fn is_active(&self) -> bool;

    fn force_stop(&self) -> Result<(), ConflictError>;
}
