use std::path::PathBuf;

use clap::ValueEnum;

/// How aliases are written into Git configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Backend {
    /// Shell out to `git config`
    #[default]
    Git,
    /// Write the config file through libgit2
    Libgit2,
}

/// Process-wide options resolved once from flags and environment
#[derive(Debug, Clone)]
pub struct Settings {
    pub verbose: bool,
    pub quiet: bool,
    pub color: bool,
    pub current_dir: PathBuf,
}

impl Settings {
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "gitalias=debug,warn"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}
