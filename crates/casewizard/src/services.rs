//! Collaborator interfaces consumed by the workflow.
//!
//! Everything user-visible (dialogs, busy indicator) and everything that
//! touches storage lives behind these traits; the controller only owns the
//! orchestration between them.

pub mod conflict;
pub mod followup;
pub mod store;
pub mod surface;
pub mod ui;
pub mod wizard_host;
