use std::{
    io::{self, Error, ErrorKind},
    path::PathBuf,
    process::{Command, Output},
};

use tracing::debug;

type CommandResult<T> = io::Result<T>;

/// Runs external programs from a fixed working directory and captures their output
#[derive(Debug, Clone)]
pub struct ExternalCommand {
    current_dir: PathBuf,
}

impl ExternalCommand {
    /// Creates a new ExternalCommand instance with the specified working directory
    pub fn new(current_dir: PathBuf) -> Self {
        Self { current_dir }
    }

    /// Runs a command to completion and fails on a non-zero exit status
    pub fn execute(&self, command: &str, args: &[&str]) -> CommandResult<()> {
        self.output(command, args).map(|_| ())
    }

    /// Runs a command to completion and returns its trimmed stdout
    pub fn output(&self, command: &str, args: &[&str]) -> CommandResult<String> {
        debug!(command, ?args, "running external command");
        let output = self.create_base_command(command, args).output()?;
        self.check_status(&output, command)?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Returns true when `command` can be spawned at all
    pub fn is_available(&self, command: &str, probe: &[&str]) -> bool {
        self.create_base_command(command, probe)
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    fn create_base_command(&self, command: &str, args: &[&str]) -> Command {
        let mut cmd = Command::new(command);
        cmd.args(args).current_dir(&self.current_dir);
        cmd
    }

    fn check_status(&self, output: &Output, context: &str) -> CommandResult<()> {
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let message = if stderr.is_empty() {
                format!("{} exited with status: {}", context, output.status)
            } else {
                format!("{} exited with status: {}: {}", context, output.status, stderr)
            };
            return Err(Error::new(ErrorKind::Other, message));
        }
        Ok(())
    }
}
