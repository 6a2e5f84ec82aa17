// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use casewizard::CaseKind;

/// Headless driver for the new-case workflow: scripted wizard input,
/// filesystem-backed store, dialogs answered from flags.
#[derive(Parser)]
#[command(name = "casewizard", version, about = "New-case workflow demo driver")]
pub struct Cli {
    /// Directory to create the case workspace in.
    #[arg(long)]
    pub directory: PathBuf,

    /// Case display name.
    #[arg(long)]
    pub name: String,

    /// Optional case number.
    #[arg(long, default_value = "")]
    pub number: String,

    /// Optional examiner name.
    #[arg(long, default_value = "")]
    pub examiner: String,

    #[arg(long, value_enum, default_value_t = KindArg::Single)]
    pub kind: KindArg,

    /// Pretend the ingest pipeline is running.
    #[arg(long)]
    pub conflict_active: bool,

    /// Answer "yes" to the conflict confirmation (default answers "no").
    #[arg(long)]
    pub auto_confirm: bool,

    /// Cancel the wizard after the directory step, to exercise rollback.
    #[arg(long)]
    pub cancel: bool,

    /// Make the creation primitive fail, to exercise the failure path.
    #[arg(long)]
    pub fail_creation: bool,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum KindArg {
    Single,
    Multi,
}

impl From<KindArg> for CaseKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Single => CaseKind::SingleUser,
            KindArg::Multi => CaseKind::MultiUser,
        }
    }
}
