//! Modal wizard display.

use async_trait::async_trait;

use crate::plan::WizardPlan;
use crate::properties::PropertyBag;

/// The wizard's final user decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum TerminalSignal {
    Finish,
    Cancel,
}

/// Displays the step sequence modally and lets the input screens write into
/// the shared property bag. Runs on the UI-affinity context; the future
/// resolves when the modal closes.
///
/// Contract on `Finish`: the screens have written the required properties,
/// including the pre-created case directory. On `Cancel` the bag may still
/// carry a partially created directory from an earlier step.
#[async_trait]
pub trait WizardHost: Send + Sync {
    async fn run(&self, plan: &WizardPlan, bag: &mut PropertyBag) -> TerminalSignal;
}
