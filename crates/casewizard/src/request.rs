//! Data carried through one workflow run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Storage flavor of a case workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum CaseKind {
    SingleUser,
    MultiUser,
}

/// Immutable parameters collected by the wizard once the user finishes.
///
/// Built exactly once per run and consumed exactly once by the creation
/// worker. `case_directory` is guaranteed non-empty whenever the wizard
/// reached the finish state (the wizard allocates it before finishing);
/// `number` and `examiner` come from the optional-information step and may
/// be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationRequest {
    pub case_directory: PathBuf,
    pub name: String,
    pub number: String,
    pub examiner: String,
    pub kind: CaseKind,
}

/// Opaque reference to a created case workspace.
///
/// Ownership conceptually transfers to the follow-on action on success; this
/// controller only logs the hand-off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseHandle {
    pub directory: PathBuf,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display_matches_variant_names() {
        assert_eq!(CaseKind::SingleUser.to_string(), "SingleUser");
        assert_eq!(CaseKind::MultiUser.to_string(), "MultiUser");
    }

    #[test]
    fn request_round_trips_through_json() {
        let req = CreationRequest {
            case_directory: PathBuf::from("/cases/c1"),
            name: "c1".into(),
            number: "001".into(),
            examiner: "jdoe".into(),
            kind: CaseKind::SingleUser,
        };
        let json = serde_json::to_string(&req).unwrap();
        let back: CreationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, back);
    }
}
