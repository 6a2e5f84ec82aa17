//! Case storage primitives.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info};

use crate::request::{CaseHandle, CreationRequest};

#[derive(Debug, Error)]
pub enum CaseStoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Storage collaborator: creation and deletion primitives plus the
/// "is any case open" query used when deciding whether to reopen the
/// startup surface after a failed creation.
#[async_trait]
pub trait CaseStore: Send + Sync {
    /// Create the case workspace described by `req`. Runs on the worker
    /// context; any error is wrapped into a creation failure by the caller.
    async fn create_case(&self, req: &CreationRequest) -> Result<CaseHandle, CaseStoreError>;

    /// Delete `dir` and everything under it. Best-effort: callers log
    /// failures and never re-raise them.
    async fn delete_case_directory(&self, dir: &Path) -> Result<(), CaseStoreError>;

    fn is_any_case_open(&self) -> bool;
}

/// Filesystem-backed store: the case workspace is a directory holding a
/// `case.json` metadata document. Used by the demo binary and the
/// integration tests.
#[derive(Debug, Default)]
pub struct FsCaseStore {
    open: AtomicBool,
}

impl FsCaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata file name inside a case directory.
    pub const METADATA_FILE: &'static str = "case.json";
}

#[async_trait]
impl CaseStore for FsCaseStore {
    async fn create_case(&self, req: &CreationRequest) -> Result<CaseHandle, CaseStoreError> {
        tokio::fs::create_dir_all(&req.case_directory).await?;
        let metadata = json!({
            "name": req.name,
            "number": req.number,
            "examiner": req.examiner,
            "kind": req.kind,
        });
        let path = req.case_directory.join(Self::METADATA_FILE);
        tokio::fs::write(&path, serde_json::to_vec_pretty(&metadata).map_err(|e| CaseStoreError::Other(e.to_string()))?).await?;
        self.open.store(true, Ordering::SeqCst);
        info!("created case '{}' at {}", req.name, req.case_directory.display());
        Ok(CaseHandle {
            directory: req.case_directory.clone(),
            name: req.name.clone(),
        })
    }

    async fn delete_case_directory(&self, dir: &Path) -> Result<(), CaseStoreError> {
        debug!("deleting case directory {}", dir.display());
        tokio::fs::remove_dir_all(dir).await?;
        Ok(())
    }

    fn is_any_case_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }
}
