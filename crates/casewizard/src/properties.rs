//! Shared property bag written by the wizard's input screens.
//!
//! The bag is a loose JSON map so host-side screens can stay decoupled from
//! this crate's types; the coordinator reads the well-known keys exactly
//! once when the wizard finishes.

use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::request::CaseKind;

/// Well-known property keys, written by the host's wizard screens.
pub mod keys {
    pub const CASE_NAME: &str = "case_name";
    pub const CASE_NUMBER: &str = "case_number";
    pub const CASE_EXAMINER: &str = "case_examiner";
    pub const CREATED_DIRECTORY: &str = "created_directory";
    pub const CASE_KIND: &str = "case_kind";
}

#[derive(Debug, Clone, Default)]
pub struct PropertyBag {
    values: Map<String, Value>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn set_kind(&mut self, kind: CaseKind) {
        // CaseKind serializes to a plain string; the expect cannot fire.
        self.values.insert(
            keys::CASE_KIND.to_string(),
            serde_json::to_value(kind).expect("CaseKind serializes infallibly"),
        );
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    pub fn get_path(&self, key: &str) -> Option<PathBuf> {
        self.get_str(key)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }

    pub fn get_kind(&self) -> Option<CaseKind> {
        self.values
            .get(keys::CASE_KIND)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Directory the wizard may have pre-created before the user backed out.
    pub fn partial_directory(&self) -> Option<PathBuf> {
        self.get_path(keys::CREATED_DIRECTORY)
    }
}
