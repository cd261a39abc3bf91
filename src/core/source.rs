use std::{fmt, fs, path::PathBuf, time::Duration};

use tracing::{debug, info};

use crate::error::SetupError;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("gitalias/", env!("CARGO_PKG_VERSION"));

/// Where the alias definition text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Source {
    /// Interprets a command-line argument as a URL or a local path
    pub fn from_arg(arg: &str) -> Self {
        let arg = arg.trim();
        if arg.starts_with("http://") || arg.starts_with("https://") {
            Source::Url(arg.to_string())
        } else {
            Source::File(expand_tilde(arg))
        }
    }

    /// Reads the whole definition text
    pub fn read(&self) -> Result<String, SetupError> {
        match self {
            Source::File(path) => {
                debug!(path = %path.display(), "reading alias file");
                fs::read_to_string(path).map_err(|source| SetupError::Read {
                    path: path.clone(),
                    source,
                })
            }
            Source::Url(url) => fetch(url),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Url(url) => write!(f, "{}", url),
        }
    }
}

fn fetch(url: &str) -> Result<String, SetupError> {
    info!(url, "fetching alias definitions");
    let agent = ureq::AgentBuilder::new().timeout(FETCH_TIMEOUT).build();

    let response = agent
        .get(url)
        .set("User-Agent", USER_AGENT)
        .call()
        .map_err(|err| SetupError::Fetch {
            url: url.to_string(),
            reason: err.to_string(),
        })?;

    response.into_string().map_err(|err| SetupError::Fetch {
        url: url.to_string(),
        reason: err.to_string(),
    })
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    PathBuf::from(path)
}
