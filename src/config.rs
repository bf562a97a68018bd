use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    error::{ContentError, Result},
    github::GitHubSource,
    local::LocalSource,
    source::PostSource,
};

/// Which backend the process serves posts from
///
/// Chosen once at startup and turned into an explicit `PostSource` value
/// that gets injected into the resolver, rather than selected through a
/// module-level global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    GitHub {
        owner: String,
        repo: String,
        branch: String,
        content_dir: String,
        token: Option<String>,
    },
    Local {
        posts_dir: PathBuf,
    },
}

impl SourceConfig {
    /// Read the source selection from the environment
    ///
    /// `DATA_SOURCE=local` selects the local directory source (`POSTS_DIR`,
    /// defaulting to a `posts/` directory next to the running executable so
    /// a packaged build finds its content). Anything else selects GitHub,
    /// configured through `GITHUB_OWNER`, `GITHUB_REPO`, `GITHUB_BRANCH`
    /// (default `main`), `GITHUB_CONTENT_DIR` (default `posts`) and an
    /// optional `GITHUB_TOKEN`.
    pub fn from_env() -> Result<Self> {
        match env::var("DATA_SOURCE").ok().as_deref() {
            Some("local") => {
                let posts_dir = match env::var_os("POSTS_DIR") {
                    Some(dir) => PathBuf::from(dir),
                    None => default_posts_dir()?,
                };
                Ok(SourceConfig::Local { posts_dir })
            }
            Some("github") | None => Ok(SourceConfig::GitHub {
                owner: require_var("GITHUB_OWNER")?,
                repo: require_var("GITHUB_REPO")?,
                branch: env::var("GITHUB_BRANCH").unwrap_or_else(|_| "main".to_string()),
                content_dir: env::var("GITHUB_CONTENT_DIR")
                    .unwrap_or_else(|_| "posts".to_string()),
                token: env::var("GITHUB_TOKEN").ok(),
            }),
            Some(other) => Err(ContentError::InvalidConfig {
                message: format!(
                    "Unknown DATA_SOURCE value `{}` (expected `github` or `local`)",
                    other
                ),
            }),
        }
    }

    /// Construct the configured source
    pub fn build_source(&self) -> Arc<dyn PostSource> {
        match self {
            SourceConfig::GitHub {
                owner,
                repo,
                branch,
                content_dir,
                token,
            } => Arc::new(GitHubSource::new(
                owner.clone(),
                repo.clone(),
                branch.clone(),
                content_dir.clone(),
                token.clone(),
            )),
            SourceConfig::Local { posts_dir } => Arc::new(LocalSource::new(posts_dir.clone())),
        }
    }
}

fn require_var(key: &str) -> Result<String> {
    env::var(key).map_err(|_| ContentError::InvalidConfig {
        message: format!("Missing required environment variable {}", key),
    })
}

// Resolved relative to the deployed executable, not the source tree.
fn default_posts_dir() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(|e| ContentError::InvalidConfig {
        message: format!("Cannot locate the running executable: {}", e),
    })?;

    exe.parent()
        .map(|dir| dir.join("posts"))
        .ok_or_else(|| ContentError::InvalidConfig {
            message: "Executable path has no parent directory".to_string(),
        })
}
