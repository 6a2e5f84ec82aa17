//! User-visible effects: confirmation dialog, busy indicator, error dialog.
//!
//! Implementations are responsible for marshalling these calls onto the
//! UI-affinity context when invoked from a worker task; the workflow calls
//! them from wherever it happens to be running.

use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// A modal yes/no question. The default answer is always the less
/// destructive choice, preselected to protect against accidental loss.
#[derive(Debug, Clone)]
pub struct ConfirmPrompt {
    pub title: String,
    pub question: String,
    pub default_answer: Confirmation,
}

impl ConfirmPrompt {
    /// Warning-style prompt defaulting to "no".
    pub fn warning(title: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            question: question.into(),
            default_answer: Confirmation::Declined,
        }
    }
}

#[async_trait]
pub trait WorkflowUi: Send + Sync {
    /// Present `prompt` modally and resolve once the user answers.
    /// Dismissing the dialog resolves to the default answer.
    async fn confirm(&self, prompt: ConfirmPrompt) -> Confirmation;

    /// Toggle the busy indicator (wait cursor / disabled affordances).
    fn set_busy(&self, busy: bool);

    /// Display one error dialog. The workflow raises at most one of these
    /// per failed creation attempt.
    fn show_error(&self, title: &str, message: &str);
}
