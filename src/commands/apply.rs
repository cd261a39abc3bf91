use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use tracing::info;

use crate::core::{
    applier::{ConfigApplier, DryRunApplier, Git2Applier, GitCliApplier},
    command::{Command, CommandContext},
};
use crate::{config::Backend, error::SetupError, utils};

use super::{load_records, ProfileArgs};

/// Fetch alias definitions and write them into Git configuration
#[derive(Args, Debug, Clone)]
pub struct Apply {
    /// Alias file path or http(s) URL
    #[arg(short, long, env = "GITALIAS_SOURCE")]
    pub source: String,

    /// How aliases are written
    #[arg(long, value_enum, default_value_t = Backend::Git)]
    pub backend: Backend,

    /// Write to this file instead of the global config
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Show what would be written without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Also install the branch-aware shell prompt
    #[arg(long)]
    pub prompt: bool,

    #[command(flatten)]
    pub profile: ProfileArgs,
}

impl Apply {
    fn applier(&self, context: &CommandContext) -> Result<Box<dyn ConfigApplier>, SetupError> {
        if self.dry_run {
            return Ok(Box::new(DryRunApplier::default()));
        }

        let applier: Box<dyn ConfigApplier> = match (self.backend, &self.config_file) {
            (Backend::Git, config_file) => {
                let applier =
                    GitCliApplier::new(context.settings.current_dir.clone(), config_file.clone());
                applier.ensure_available()?;
                Box::new(applier)
            }
            (Backend::Libgit2, Some(path)) => Box::new(Git2Applier::open(path)?),
            (Backend::Libgit2, None) => Box::new(Git2Applier::global()?),
        };
        Ok(applier)
    }
}

impl Command for Apply {
    fn name(&self) -> &'static str {
        "apply"
    }

    fn execute(&self, context: &CommandContext) -> Result<(), SetupError> {
        let quiet = context.settings.quiet;
        let records = load_records(&self.source, quiet)?;
        let mut applier = self.applier(context)?;

        let dry_run = self.dry_run;
        let summary = applier.apply_all(&records, &mut |record, error| {
            if let Some(e) = error {
                eprintln!("{}", utils::format_failure(record, e));
            } else if !quiet {
                if dry_run {
                    println!("{}", utils::format_planned(record));
                } else {
                    println!("{}", utils::format_record(record));
                }
            }
        });

        info!(
            applied = summary.applied,
            failed = summary.failed.len(),
            backend = applier.backend(),
            "aliases applied"
        );
        if !quiet {
            println!("{}", utils::rule());
            let verb = if dry_run { "Would set" } else { "Set" };
            println!(
                "{} {} aliases ({})",
                verb,
                summary.applied.to_string().bold(),
                applier.backend()
            );
        }
        summary.into_result()?;

        if self.prompt && !self.dry_run {
            self.profile.patch(false, quiet)?;
        }

        Ok(())
    }
}
