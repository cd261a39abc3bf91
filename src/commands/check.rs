use clap::Args;

use crate::core::command::{Command, CommandContext};
use crate::{error::SetupError, utils};

use super::load_records;

/// Parse an alias file and show what it defines
#[derive(Args, Debug, Clone)]
pub struct Check {
    /// Alias file path or http(s) URL
    #[arg(short, long, env = "GITALIAS_SOURCE")]
    pub source: String,
}

impl Command for Check {
    fn name(&self) -> &'static str {
        "check"
    }

    fn execute(&self, context: &CommandContext) -> Result<(), SetupError> {
        let records = load_records(&self.source, context.settings.quiet)?;

        for record in &records {
            println!("{}", utils::format_record(record));
        }
        println!("{} aliases parsed", records.len());
        Ok(())
    }
}
