//! Off-thread creation step.

use std::sync::Arc;

use futures::FutureExt;
use tracing::{error, info};

use crate::errors::CreationError;
use crate::request::{CaseHandle, CreationRequest};
use crate::services::store::CaseStore;

/// Tagged result of the creation step.
pub type CreationOutcome = Result<CaseHandle, CreationError>;

/// Executes the creation primitive on the worker context.
///
/// The contract is total: `create` always produces an outcome. Errors from
/// the store are wrapped with their original message preserved for display,
/// and even a panic inside the primitive is converted into a failure
/// instead of killing the detached task.
pub struct CreationWorker {
    store: Arc<dyn CaseStore>,
}

impl CreationWorker {
    pub fn new(store: Arc<dyn CaseStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, req: &CreationRequest) -> CreationOutcome {
        info!(
            "creating case '{}' ({}) at {}",
            req.name,
            req.kind,
            req.case_directory.display()
        );
        let result = std::panic::AssertUnwindSafe(self.store.create_case(req))
            .catch_unwind()
            .await;
        match result {
            Ok(Ok(handle)) => Ok(handle),
            Ok(Err(e)) => {
                error!("case creation failed: {e}");
                Err(CreationError::new(e.to_string()))
            }
            Err(panic) => {
                let message = panic
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "creation primitive panicked".to_string());
                error!("case creation panicked: {message}");
                Err(CreationError::new(message))
            }
        }
    }
}
