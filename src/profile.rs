//! Branch-aware prompt block for shell startup files.
//!
//! The block is delimited by marker comments so it can be replaced or
//! removed on later runs without touching anything else in the file.

use std::{
    env, fmt, fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::SetupError;

const BEGIN_MARKER: &str = "# >>> gitalias prompt >>>";
const END_MARKER: &str = "# <<< gitalias prompt <<<";

const BASH_SNIPPET: &str = r#"__gitalias_branch() {
  git symbolic-ref --quiet --short HEAD 2>/dev/null | sed 's/.*/ (&)/'
}
PS1='\[\e[32m\]\u@\h\[\e[0m\]:\[\e[34m\]\w\[\e[33m\]$(__gitalias_branch)\[\e[0m\]\$ '"#;

const ZSH_SNIPPET: &str = r#"__gitalias_branch() {
  git symbolic-ref --quiet --short HEAD 2>/dev/null | sed 's/.*/ (&)/'
}
setopt PROMPT_SUBST
PROMPT='%F{green}%n@%m%f:%F{blue}%~%f%F{yellow}$(__gitalias_branch)%f%# '"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
}

impl Shell {
    /// Reads `$SHELL`, falling back to bash
    pub fn detect() -> Self {
        env::var("SHELL")
            .ok()
            .and_then(|shell| shell.parse().ok())
            .unwrap_or(Shell::Bash)
    }

    pub fn profile_name(&self) -> &'static str {
        match self {
            Shell::Bash => ".bashrc",
            Shell::Zsh => ".zshrc",
        }
    }

    fn snippet(&self) -> &'static str {
        match self {
            Shell::Bash => BASH_SNIPPET,
            Shell::Zsh => ZSH_SNIPPET,
        }
    }

    /// The complete managed block, markers included
    pub fn block(&self) -> String {
        format!("{}\n{}\n{}\n", BEGIN_MARKER, self.snippet(), END_MARKER)
    }
}

impl FromStr for Shell {
    type Err = SetupError;

    /// Accepts a bare name or a path such as `/usr/bin/zsh`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = Path::new(s.trim())
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        match name {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            _ => Err(SetupError::UnsupportedShell(s.to_string())),
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shell::Bash => write!(f, "bash"),
            Shell::Zsh => write!(f, "zsh"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Inserted,
    Replaced,
    Removed,
    Unchanged,
}

/// Startup file to patch for `shell`, `~/.bashrc` or `~/.zshrc`
pub fn default_profile(shell: Shell) -> Result<PathBuf, SetupError> {
    dirs::home_dir()
        .map(|home| home.join(shell.profile_name()))
        .ok_or(SetupError::NoHomeDir)
}

/// A start marker with no end marker after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnpairedMarker;

/// Byte range of the managed block including a trailing newline, if present
fn find_block(content: &str) -> Result<Option<(usize, usize)>, UnpairedMarker> {
    let Some(start) = content.find(BEGIN_MARKER) else {
        return Ok(None);
    };
    let end_rel = content[start..].find(END_MARKER).ok_or(UnpairedMarker)?;
    let mut end = start + end_rel + END_MARKER.len();
    if content[end..].starts_with('\n') {
        end += 1;
    }
    Ok(Some((start, end)))
}

/// Returns `content` with the managed block inserted or replaced
pub fn insert_block(content: &str, shell: Shell) -> Result<(String, PatchOutcome), UnpairedMarker> {
    let block = shell.block();

    if let Some((start, end)) = find_block(content)? {
        if content[start..end] == block {
            return Ok((content.to_string(), PatchOutcome::Unchanged));
        }
        let mut patched = String::with_capacity(content.len() + block.len());
        patched.push_str(&content[..start]);
        patched.push_str(&block);
        patched.push_str(&content[end..]);
        return Ok((patched, PatchOutcome::Replaced));
    }

    let mut patched = content.to_string();
    if !patched.is_empty() && !patched.ends_with('\n') {
        patched.push('\n');
    }
    // Blank separator line, taken back out by `remove_block`.
    if !patched.is_empty() {
        patched.push('\n');
    }
    patched.push_str(&block);
    Ok((patched, PatchOutcome::Inserted))
}

/// Returns `content` with the managed block and its separator line taken out
pub fn remove_block(content: &str) -> Result<(String, PatchOutcome), UnpairedMarker> {
    let Some((mut start, end)) = find_block(content)? else {
        return Ok((content.to_string(), PatchOutcome::Unchanged));
    };
    if content[..start].ends_with("\n\n") {
        start -= 1;
    }

    let mut patched = String::with_capacity(content.len());
    patched.push_str(&content[..start]);
    patched.push_str(&content[end..]);
    Ok((patched, PatchOutcome::Removed))
}

/// Applies the patch to the file at `path`, creating it if needed
pub fn patch_file(path: &Path, shell: Shell, remove: bool) -> Result<PatchOutcome, SetupError> {
    let current = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(source) => {
            return Err(SetupError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let patched = if remove {
        remove_block(&current)
    } else {
        insert_block(&current, shell)
    };
    let (patched, outcome) = patched.map_err(|UnpairedMarker| SetupError::UnpairedMarker {
        path: path.to_path_buf(),
    })?;

    if outcome == PatchOutcome::Unchanged {
        debug!(path = %path.display(), "profile already up to date");
        return Ok(outcome);
    }

    write_atomic(path, &patched)?;
    info!(path = %path.display(), ?outcome, "patched shell profile");
    Ok(outcome)
}

fn write_atomic(path: &Path, content: &str) -> Result<(), SetupError> {
    let to_error = |source| SetupError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(to_error)?;
    tmp.write_all(content.as_bytes()).map_err(to_error)?;
    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), metadata.permissions()).map_err(to_error)?;
    }
    tmp.persist(path).map_err(|e| to_error(e.error))?;
    Ok(())
}
