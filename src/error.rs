use std::{io, path::PathBuf};

/// Errors that can stop a provisioning run.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("No aliases found in {0}")]
    NoAliases(String),
    #[error("Git configuration error: {0}")]
    Git(#[from] git2::Error),
    #[error("{command} failed: {reason}")]
    External { command: String, reason: String },
    #[error("{} aliases could not be written ({}); {applied} applied", failed.len(), failed.join(", "))]
    PartialApply { failed: Vec<String>, applied: usize },
    #[error("{} has a prompt start marker without a matching end marker", path.display())]
    UnpairedMarker { path: PathBuf },
    #[error("Could not determine the home directory")]
    NoHomeDir,
    #[error("Unsupported shell: {0}")]
    UnsupportedShell(String),
}
