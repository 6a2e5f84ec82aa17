//! Immutable wizard step sequence.
//!
//! The step sequence carries no per-run state, so one plan is built at
//! startup and shared by value (`Arc`) across runs instead of hiding behind
//! a lazily initialized process-wide static.

use std::sync::Arc;

/// Presentation metadata for one wizard step. Step index and the full title
/// list are assigned by the plan for UI consistency; none of it influences
/// control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepInfo {
    pub index: usize,
    pub title: String,
    /// Render the step list alongside the content.
    pub content_displayed: bool,
    /// Number the steps in the rendered list.
    pub numbered: bool,
}

/// Ordered, immutable sequence of wizard steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardPlan {
    title: String,
    steps: Vec<StepInfo>,
}

impl WizardPlan {
    pub fn new(title: impl Into<String>, step_titles: &[&str]) -> Arc<Self> {
        let steps = step_titles
            .iter()
            .enumerate()
            .map(|(index, title)| StepInfo {
                index,
                title: (*title).to_string(),
                content_displayed: true,
                numbered: true,
            })
            .collect();
        Arc::new(Self {
            title: title.into(),
            steps,
        })
    }

    /// The standard two-step new-case sequence.
    pub fn standard() -> Arc<Self> {
        Self::new("New Case", &["Case information", "Optional information"])
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn steps(&self) -> &[StepInfo] {
        &self.steps
    }

    /// Full ordered title list, handed to every step for display.
    pub fn step_titles(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.title.as_str()).collect()
    }
}
