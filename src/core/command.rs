use crate::{config::Settings, error::SetupError};

pub struct CommandContext {
    pub settings: Settings,
}

pub trait Command {
    fn execute(&self, context: &CommandContext) -> Result<(), SetupError>;
    fn name(&self) -> &'static str;
}
