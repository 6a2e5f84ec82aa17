//! Follow-on action invoked after a successful creation.

/// Opaque next step, e.g. "begin adding evidence to the new case".
///
/// Invoked exactly once per successful run, on the UI-affinity context.
/// After the invocation the follow-on action owns the UI state, including
/// the busy indicator.
pub trait FollowOnAction: Send + Sync {
    fn invoke(&self);
}
