use std::path::{Path, PathBuf};

use git2::Config;
use tracing::debug;

use crate::error::SetupError;

/// A single writable Git configuration file
pub struct GitConfig {
    config: Config,
    path: PathBuf,
}

impl GitConfig {
    /// Opens the user's global configuration, `~/.gitconfig` when none exists yet
    pub fn global() -> Result<Self, SetupError> {
        let path = match Config::find_global() {
            Ok(path) => path,
            Err(_) => dirs::home_dir()
                .ok_or(SetupError::NoHomeDir)?
                .join(".gitconfig"),
        };
        Self::open(&path)
    }

    /// Opens (or lazily creates) the configuration file at `path`
    pub fn open(path: &Path) -> Result<Self, SetupError> {
        debug!(path = %path.display(), "opening git config");
        let config = Config::open(path)?;
        Ok(Self {
            config,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), SetupError> {
        self.config.set_str(key, value)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get_string(key).ok()
    }

    /// Every `alias.*` entry, in file order, with the `alias.` prefix removed
    pub fn aliases(&self) -> Result<Vec<(String, String)>, SetupError> {
        let mut entries = self.config.entries(Some("alias\\..*"))?;
        let mut aliases = Vec::new();

        while let Some(entry) = entries.next() {
            let entry = entry?;
            let name = entry.name().unwrap_or_default();
            let name = name.strip_prefix("alias.").unwrap_or(name);
            aliases.push((name.to_string(), entry.value().unwrap_or_default().to_string()));
        }

        Ok(aliases)
    }
}
