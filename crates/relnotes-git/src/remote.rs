//! Remote operations and hosting URL derivation

use tracing::{info, instrument, warn};

use crate::repository::{GitRepo, Result};
use crate::types::HostingUrls;
use relnotes_core::error::GitError;

impl GitRepo {
    /// Get the URL for a remote
    pub fn remote_url(&self, name: &str) -> Result<Option<String>> {
        match self.repo.find_remote(name) {
            Ok(remote) => Ok(remote.url().map(|s| s.to_string())),
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                Err(GitError::RemoteNotFound(name.to_string()))
            }
            Err(e) => Err(GitError::Git2(e)),
        }
    }

    /// Derive web URLs from a remote, or None when the remote is missing
    /// or its URL shape is unrecognized
    pub fn remote_hosting_urls(&self, name: &str) -> Option<HostingUrls> {
        let url = match self.remote_url(name) {
            Ok(Some(url)) => url,
            _ => {
                warn!(remote = name, "no remote URL, links will be plain text");
                return None;
            }
        };
        hosting_urls(&url)
    }
}

/// Derive web URLs from a remote URL.
///
/// Supported shapes: `https://host/path`, `ssh://user@host[:port]/path`,
/// `user@host:path`, and bare `host:path`. Anything else yields None and
/// link decoration degrades to plain text.
pub fn hosting_urls(remote_url: &str) -> Option<HostingUrls> {
    let remote_url = remote_url.trim();

    let (host, path) = if let Some(rest) = remote_url
        .strip_prefix("https://")
        .or_else(|| remote_url.strip_prefix("http://"))
    {
        rest.split_once('/')?
    } else if let Some(rest) = remote_url.strip_prefix("ssh://") {
        let rest = rest.rsplit_once('@').map_or(rest, |(_, host)| host);
        let (host, path) = rest.split_once('/')?;
        // Drop an explicit port: `host:2222`
        let host = host.split_once(':').map_or(host, |(h, _)| h);
        (host, path)
    } else if let Some((host_part, path)) = remote_url.split_once(':') {
        // scp-like `user@host:path` or bare `host:path`
        let host = host_part.rsplit_once('@').map_or(host_part, |(_, h)| h);
        (host, path)
    } else {
        return None;
    };

    if host.is_empty() || path.is_empty() {
        return None;
    }

    let path = path.trim_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    if path.is_empty() {
        return None;
    }

    Some(HostingUrls {
        web_base: format!("https://{}/{}", host, path),
        profile_base: format!("https://{}", host),
    })
}

/// Fetch from a remote using the git CLI (more reliable for authentication)
#[instrument(fields(remote))]
pub fn git_fetch(remote: &str) -> Result<()> {
    let start = std::time::Instant::now();
    let output = std::process::Command::new("git")
        .args(["fetch", remote])
        .output()
        .map_err(|e| GitError::FetchFailed(e.to_string()))?;

    info!(
        remote,
        duration_ms = start.elapsed().as_millis(),
        success = output.status.success(),
        "git fetch (CLI)"
    );

    if !output.status.success() {
        return Err(GitError::FetchFailed(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }
    Ok(())
}
