use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use crate::core::command::{Command, CommandContext};
use crate::{error::SetupError, git::GitConfig};

/// Show aliases currently set in Git configuration
#[derive(Args, Debug, Clone)]
pub struct List {
    /// Read this file instead of the global config
    #[arg(long)]
    pub config_file: Option<PathBuf>,
}

impl Command for List {
    fn name(&self) -> &'static str {
        "list"
    }

    fn execute(&self, _context: &CommandContext) -> Result<(), SetupError> {
        let config = match &self.config_file {
            Some(path) => GitConfig::open(path)?,
            None => GitConfig::global()?,
        };

        let aliases = config.aliases()?;
        if aliases.is_empty() {
            println!("No aliases configured in {}", config.path().display());
            return Ok(());
        }

        let width = aliases.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        for (name, value) in aliases {
            println!("{:width$} {}", name.bright_green(), value, width = width);
        }
        Ok(())
    }
}
