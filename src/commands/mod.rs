mod apply;
mod check;
mod list;
mod prompt;

pub use apply::Apply;
pub use check::Check;
pub use list::List;
pub use prompt::Prompt;

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::{
    core::{
        parser::{parse, parse_with, AliasRecord},
        source::Source,
    },
    error::SetupError,
    profile::{self, PatchOutcome, Shell},
    utils,
};

/// Options shared by every command that touches a shell profile
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Shell to configure (defaults to $SHELL)
    #[arg(long)]
    pub shell: Option<Shell>,

    /// Startup file to patch (defaults to ~/.bashrc or ~/.zshrc)
    #[arg(long)]
    pub profile: Option<PathBuf>,
}

impl ProfileArgs {
    fn patch(&self, remove: bool, quiet: bool) -> Result<PatchOutcome, SetupError> {
        let shell = self.shell.unwrap_or_else(Shell::detect);
        let path = match &self.profile {
            Some(path) => path.clone(),
            None => profile::default_profile(shell)?,
        };

        let outcome = profile::patch_file(&path, shell, remove)?;
        if !quiet {
            let verb = match outcome {
                PatchOutcome::Inserted => "Added prompt block to",
                PatchOutcome::Replaced => "Updated prompt block in",
                PatchOutcome::Removed => "Removed prompt block from",
                PatchOutcome::Unchanged => "No changes needed in",
            };
            println!("{} {} ({})", verb, path.display(), shell);
        }
        Ok(outcome)
    }
}

/// Reads and parses a source, surfacing skipped lines on stderr.
///
/// With `quiet` set, skipped lines only reach the log.
///
/// An empty result is an error here even though the parser itself accepts it.
fn load_records(arg: &str, quiet: bool) -> Result<Vec<AliasRecord>, SetupError> {
    let source = Source::from_arg(arg);
    let content = source.read()?;
    debug!(%source, bytes = content.len(), "loaded alias definitions");

    let records = if quiet {
        parse(&content)
    } else {
        parse_with(&content, |diagnostic| {
            debug!(line = diagnostic.line(), "{}", diagnostic);
            eprintln!("{}", utils::format_diagnostic(&diagnostic));
        })
    };

    if records.is_empty() {
        return Err(SetupError::NoAliases(source.to_string()));
    }
    Ok(records)
}
