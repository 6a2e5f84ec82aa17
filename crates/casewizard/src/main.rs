mod cli;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use clap::Parser;
use color_eyre::Result;
use tracing::{error, info, warn};

use casewizard::properties::{keys, PropertyBag};
use casewizard::services::conflict::{ConflictError, ConflictSource};
use casewizard::services::followup::FollowOnAction;
use casewizard::services::store::{CaseStore, CaseStoreError, FsCaseStore};
use casewizard::services::surface::StartupSurface;
use casewizard::services::ui::{ConfirmPrompt, Confirmation, WorkflowUi};
use casewizard::services::wizard_host::{TerminalSignal, WizardHost};
use casewizard::{CaseHandle, CaseKind, Collaborators, CreationRequest, NewCaseWorkflow, WizardPlan};

/// Dialogs rendered as log lines; the confirmation is answered from flags.
struct ConsoleUi {
    auto_confirm: bool,
}

#[async_trait]
impl WorkflowUi for ConsoleUi {
    async fn confirm(&self, prompt: ConfirmPrompt) -> Confirmation {
        info!("{}: {}", prompt.title, prompt.question);
        if self.auto_confirm {
            info!("--auto-confirm: answering yes");
            Confirmation::Confirmed
        } else {
            info!("answering with the default ({})", prompt.default_answer);
            prompt.default_answer
        }
    }

    fn set_busy(&self, busy: bool) {
        info!("busy indicator: {busy}");
    }

    fn show_error(&self, title: &str, message: &str) {
        error!("{title}: {message}");
    }
}

struct StubIngest {
    active: bool,
}

impl ConflictSource for StubIngest {
    fn is_active(&self) -> bool {
        self.active
    }

    fn force_stop(&self) -> Result<(), ConflictError> {
        info!("stopping ingest pipeline");
        Ok(())
    }
}

/// Plays the wizard's input screens from command-line arguments. The first
/// step allocates the case directory, exactly like the interactive wizard
/// does before it can finish.
struct ScriptedHost {
    directory: std::path::PathBuf,
    name: String,
    number: String,
    examiner: String,
    kind: CaseKind,
    cancel: bool,
}

#[async_trait]
impl WizardHost for ScriptedHost {
    async fn run(&self, plan: &WizardPlan, bag: &mut PropertyBag) -> TerminalSignal {
        info!("wizard '{}': steps {:?}", plan.title(), plan.step_titles());
        if let Err(e) = tokio::fs::create_dir_all(&self.directory).await {
            warn!("could not allocate case directory: {e}");
            return TerminalSignal::Cancel;
        }
        bag.set(keys::CREATED_DIRECTORY, self.directory.to_string_lossy().as_ref());
        if self.cancel {
            info!("--cancel: backing out after the directory step");
            return TerminalSignal::Cancel;
        }
        bag.set(keys::CASE_NAME, self.name.as_str());
        bag.set(keys::CASE_NUMBER, self.number.as_str());
        bag.set(keys::CASE_EXAMINER, self.examiner.as_str());
        bag.set_kind(self.kind);
        TerminalSignal::Finish
    }
}

/// Wraps the real store but fails creation, for exercising the error path.
struct FailingStore {
    inner: FsCaseStore,
}

#[async_trait]
impl CaseStore for FailingStore {
    async fn create_case(&self, _req: &CreationRequest) -> Result<CaseHandle, CaseStoreError> {
        Err(CaseStoreError::Other("simulated creation failure".into()))
    }

    async fn delete_case_directory(&self, dir: &Path) -> Result<(), CaseStoreError> {
        self.inner.delete_case_directory(dir).await
    }

    fn is_any_case_open(&self) -> bool {
        self.inner.is_any_case_open()
    }
}

struct LogSurface;

impl StartupSurface for LogSurface {
    fn close(&self) {
        info!("startup window closed");
    }

    fn open(&self) {
        info!("startup window opened");
    }
}

struct LogFollowOn;

impl FollowOnAction for LogFollowOn {
    fn invoke(&self) {
        info!("case is ready; follow-on would now begin adding evidence");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    casewizard::logging::init()?;
    let args = cli::Cli::parse();

    let store: Arc<dyn CaseStore> = if args.fail_creation {
        Arc::new(FailingStore {
            inner: FsCaseStore::new(),
        })
    } else {
        Arc::new(FsCaseStore::new())
    };
    let collaborators = Collaborators {
        conflict: Arc::new(StubIngest {
            active: args.conflict_active,
        }),
        store,
        ui: Arc::new(ConsoleUi {
            auto_confirm: args.auto_confirm,
        }),
        host: Arc::new(ScriptedHost {
            directory: args.directory.clone(),
            name: args.name.clone(),
            number: args.number.clone(),
            examiner: args.examiner.clone(),
            kind: args.kind.into(),
            cancel: args.cancel,
        }),
        surface: Arc::new(LogSurface),
        follow_on: Arc::new(LogFollowOn),
    };

    let workflow = NewCaseWorkflow::new(WizardPlan::standard(), collaborators);
    let mut run = workflow.perform().await?;
    let final_state = *run.wait_for(|s| s.is_resting()).await?;
    info!("workflow finished: {final_state}");
    Ok(())
}
