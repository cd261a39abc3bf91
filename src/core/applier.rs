use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{
    core::{external::ExternalCommand, parser::AliasRecord},
    error::SetupError,
    git::GitConfig,
};

/// Writes parsed aliases into Git configuration
pub trait ConfigApplier {
    /// Short name shown in the summary line
    fn backend(&self) -> &'static str;

    fn apply(&mut self, record: &AliasRecord) -> Result<(), SetupError>;

    /// Applies records in order, so a later duplicate overwrites an earlier one.
    ///
    /// A rejected record does not stop the run; every outcome is handed to
    /// `on_result` and the failures are counted in the summary.
    fn apply_all(
        &mut self,
        records: &[AliasRecord],
        on_result: &mut dyn FnMut(&AliasRecord, Option<&SetupError>),
    ) -> ApplySummary {
        let mut summary = ApplySummary::default();
        for record in records {
            match self.apply(record) {
                Ok(()) => {
                    summary.applied += 1;
                    on_result(record, None);
                }
                Err(e) => {
                    warn!(key = %record.config_key(), error = %e, "alias rejected");
                    summary.failed.push(record.name.clone());
                    on_result(record, Some(&e));
                }
            }
        }
        summary
    }
}

/// Outcome of one `apply_all` run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ApplySummary {
    pub applied: usize,
    /// Names of the aliases that could not be written, in input order
    pub failed: Vec<String>,
}

impl ApplySummary {
    pub fn into_result(self) -> Result<usize, SetupError> {
        if self.failed.is_empty() {
            Ok(self.applied)
        } else {
            Err(SetupError::PartialApply {
                failed: self.failed,
                applied: self.applied,
            })
        }
    }
}

/// Shells out to `git config`
pub struct GitCliApplier {
    runner: ExternalCommand,
    config_file: Option<PathBuf>,
}

impl GitCliApplier {
    /// `config_file` of `None` targets `--global`
    pub fn new(current_dir: PathBuf, config_file: Option<PathBuf>) -> Self {
        Self {
            runner: ExternalCommand::new(current_dir),
            config_file,
        }
    }

    /// Fails early when no `git` binary can be run
    pub fn ensure_available(&self) -> Result<(), SetupError> {
        if self.runner.is_available("git", &["--version"]) {
            Ok(())
        } else {
            Err(SetupError::External {
                command: "git".to_string(),
                reason: "not found on PATH (try --backend libgit2)".to_string(),
            })
        }
    }

    fn scope_args(&self) -> Vec<String> {
        match &self.config_file {
            Some(path) => vec!["--file".to_string(), path.display().to_string()],
            None => vec!["--global".to_string()],
        }
    }
}

impl ConfigApplier for GitCliApplier {
    fn backend(&self) -> &'static str {
        "git"
    }

    fn apply(&mut self, record: &AliasRecord) -> Result<(), SetupError> {
        let key = record.config_key();
        let mut args = vec!["config".to_string()];
        args.extend(self.scope_args());
        args.push(key.clone());
        args.push(record.command.clone());

        let args: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
        self.runner
            .execute("git", &args)
            .map_err(|e| SetupError::External {
                command: format!("git config {}", key),
                reason: e.to_string(),
            })
    }
}

/// Writes through libgit2 without spawning processes
pub struct Git2Applier {
    config: GitConfig,
}

impl Git2Applier {
    pub fn new(config: GitConfig) -> Self {
        Self { config }
    }

    pub fn global() -> Result<Self, SetupError> {
        GitConfig::global().map(Self::new)
    }

    pub fn open(path: &Path) -> Result<Self, SetupError> {
        GitConfig::open(path).map(Self::new)
    }
}

impl ConfigApplier for Git2Applier {
    fn backend(&self) -> &'static str {
        "libgit2"
    }

    fn apply(&mut self, record: &AliasRecord) -> Result<(), SetupError> {
        let key = record.config_key();
        if let Some(previous) = self.config.get(&key).filter(|v| *v != record.command) {
            debug!(key = %key, %previous, "overwriting existing alias");
        }
        debug!(path = %self.config.path().display(), key = %key, "setting alias");
        self.config.set(&key, &record.command)
    }
}

/// Records what would be written and touches nothing
#[derive(Default)]
pub struct DryRunApplier {
    pub planned: Vec<(String, String)>,
}

impl ConfigApplier for DryRunApplier {
    fn backend(&self) -> &'static str {
        "dry-run"
    }

    fn apply(&mut self, record: &AliasRecord) -> Result<(), SetupError> {
        self.planned
            .push((record.config_key(), record.command.clone()));
        Ok(())
    }
}
