//! Wizard lifecycle: modal display, property extraction, finish/cancel.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info};

use crate::errors::WorkflowError;
use crate::plan::WizardPlan;
use crate::properties::{keys, PropertyBag};
use crate::request::CreationRequest;
use crate::services::wizard_host::{TerminalSignal, WizardHost};

/// Outcome of one modal wizard pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardRun {
    Finished(CreationRequest),
    /// The user backed out; an earlier step may already have created the
    /// case directory as a side effect.
    Cancelled(Option<PathBuf>),
}

pub struct WizardCoordinator {
    plan: Arc<WizardPlan>,
    host: Arc<dyn WizardHost>,
}

impl WizardCoordinator {
    pub fn new(plan: Arc<WizardPlan>, host: Arc<dyn WizardHost>) -> Self {
        Self { plan, host }
    }

    /// Display the wizard modally and collect its result.
    ///
    /// A host that reports Finish without honoring the property contract is
    /// degraded to a cancellation (logged at error level) so that whatever
    /// directory its steps already created still gets rolled back, and the
    /// user is never shown a failure they did not cause.
    pub async fn run(&self) -> WizardRun {
        let mut bag = PropertyBag::new();
        info!(
            "opening '{}' wizard ({} steps)",
            self.plan.title(),
            self.plan.steps().len()
        );
        match self.host.run(&self.plan, &mut bag).await {
            TerminalSignal::Finish => match Self::extract(&bag) {
                Ok(req) => WizardRun::Finished(req),
                Err(e) => {
                    error!("wizard host contract violation: {e}");
                    WizardRun::Cancelled(bag.partial_directory())
                }
            },
            TerminalSignal::Cancel => {
                let partial = bag.partial_directory();
                info!(
                    "wizard cancelled{}",
                    partial
                        .as_deref()
                        .map(|d| format!(", partial directory {}", d.display()))
                        .unwrap_or_default()
                );
                WizardRun::Cancelled(partial)
            }
        }
    }

    /// Pull the five request fields out of the bag. Name, directory and
    /// kind are required on finish; number and examiner are optional free
    /// text from the second step.
    fn extract(bag: &PropertyBag) -> Result<CreationRequest, WorkflowError> {
        let name = bag
            .get_str(keys::CASE_NAME)
            .filter(|s| !s.is_empty())
            .ok_or(WorkflowError::MissingProperty(keys::CASE_NAME))?
            .to_string();
        let case_directory = bag
            .partial_directory()
            .ok_or(WorkflowError::MissingProperty(keys::CREATED_DIRECTORY))?;
        let kind = bag
            .get_kind()
            .ok_or(WorkflowError::MissingProperty(keys::CASE_KIND))?;
        let number = bag.get_str(keys::CASE_NUMBER).unwrap_or_default().to_string();
        let examiner = bag
            .get_str(keys::CASE_EXAMINER)
            .unwrap_or_default()
            .to_string();
        Ok(CreationRequest {
            case_directory,
            name,
            number,
            examiner,
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::request::CaseKind;

    enum Script {
        FinishComplete,
        FinishWithoutDirectory,
        CancelAfterDirectory,
        CancelEarly,
    }

    struct ScriptedHost(Script);

    #[async_trait]
    impl WizardHost for ScriptedHost {
        async fn run(&self, plan: &WizardPlan, bag: &mut PropertyBag) -> TerminalSignal {
            assert_eq!(plan.steps().len(), 2);
            match self.0 {
                Script::FinishComplete => {
                    bag.set(keys::CASE_NAME, "c1");
                    bag.set(keys::CASE_NUMBER, "001");
                    bag.set(keys::CASE_EXAMINER, "jdoe");
                    bag.set(keys::CREATED_DIRECTORY, "/cases/c1");
                    bag.set_kind(CaseKind::SingleUser);
                    TerminalSignal::Finish
                }
                Script::FinishWithoutDirectory => {
                    bag.set(keys::CASE_NAME, "c1");
                    bag.set_kind(CaseKind::SingleUser);
                    TerminalSignal::Finish
                }
                Script::CancelAfterDirectory => {
                    bag.set(keys::CREATED_DIRECTORY, "/cases/partial");
                    TerminalSignal::Cancel
                }
                Script::CancelEarly => TerminalSignal::Cancel,
            }
        }
    }

    async fn run(script: Script) -> WizardRun {
        WizardCoordinator::new(WizardPlan::standard(), Arc::new(ScriptedHost(script)))
            .run()
            .await
    }

    #[tokio::test]
    async fn finish_yields_the_full_request() {
        let WizardRun::Finished(req) = run(Script::FinishComplete).await else {
            panic!("expected Finished");
        };
        assert_eq!(req.name, "c1");
        assert_eq!(req.number, "001");
        assert_eq!(req.examiner, "jdoe");
        assert_eq!(req.case_directory, PathBuf::from("/cases/c1"));
        assert_eq!(req.kind, CaseKind::SingleUser);
    }

    #[test]
    fn extraction_without_directory_is_a_contract_violation() {
        let mut bag = PropertyBag::new();
        bag.set(keys::CASE_NAME, "c1");
        bag.set_kind(CaseKind::SingleUser);
        let err = WizardCoordinator::extract(&bag).unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::MissingProperty(keys::CREATED_DIRECTORY)
        ));
    }

    #[tokio::test]
    async fn finish_without_directory_degrades_to_cancellation() {
        let result = run(Script::FinishWithoutDirectory).await;
        assert_eq!(result, WizardRun::Cancelled(None));
    }

    #[tokio::test]
    async fn cancel_carries_the_partial_directory() {
        let result = run(Script::CancelAfterDirectory).await;
        assert_eq!(
            result,
            WizardRun::Cancelled(Some(PathBuf::from("/cases/partial")))
        );
    }

    #[tokio::test]
    async fn early_cancel_has_nothing_to_roll_back() {
        let result = run(Script::CancelEarly).await;
        assert_eq!(result, WizardRun::Cancelled(None));
    }
}
