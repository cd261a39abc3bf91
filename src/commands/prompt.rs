use clap::Args;

use crate::core::command::{Command, CommandContext};
use crate::error::SetupError;

use super::ProfileArgs;

/// Add or remove the branch-aware prompt in a shell startup file
#[derive(Args, Debug, Clone)]
pub struct Prompt {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Strip the prompt block instead of adding it
    #[arg(long)]
    pub remove: bool,
}

impl Command for Prompt {
    fn name(&self) -> &'static str {
        "prompt"
    }

    fn execute(&self, context: &CommandContext) -> Result<(), SetupError> {
        self.profile.patch(self.remove, context.settings.quiet)?;
        Ok(())
    }
}
