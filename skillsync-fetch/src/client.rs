//! GitHub content client.
//!
//! Two endpoints, both GET:
//! - raw file bytes:  `<raw_base>/<repo>/<branch>/<path>`
//! - directory list:  `<api_base>/repos/<repo>/contents/<path>?ref=<branch>`
//!
//! Requests are strictly sequential and blocking, with one shared agent and
//! a 30-second per-request timeout. Failures are logged here (with the full
//! URL) and returned as [`FetchError`]; callers treat them as "no content".

use std::io::Read;
use std::time::Duration;

use serde::Deserialize;

use crate::error::FetchError;

/// Default REST API host. Overridable for GitHub Enterprise or tests.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
/// Default raw-content host.
pub const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Connection settings for the GitHub endpoints.
///
/// Built once at the program boundary and passed in explicitly; the client
/// never reads environment state itself.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub api_base: String,
    pub raw_base: String,
    /// Optional credential, sent as `Authorization: token <value>` on every request.
    pub token: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            raw_base: DEFAULT_RAW_BASE.to_string(),
            token: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Listing entries
// ---------------------------------------------------------------------------

/// A single entry from a contents-API directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteEntry {
    /// Full path within the repository.
    pub path: String,
    /// Base name of the entry.
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RemoteEntryKind,
}

/// Entry kind as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteEntryKind {
    File,
    Dir,
    /// Symlinks, submodules — listed by the API but never mirrored.
    #[serde(other)]
    Other,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Blocking GitHub client shared across one sync run.
pub struct GithubClient {
    agent: ureq::Agent,
    config: FetchConfig,
}

impl GithubClient {
    pub fn new(config: FetchConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("skillsync/", env!("CARGO_PKG_VERSION")))
            .build();
        Self { agent, config }
    }

    /// Raw-content URL for a single file.
    pub fn raw_url(&self, repo: &str, branch: &str, path: &str) -> String {
        format!("{}/{repo}/{branch}/{path}", self.config.raw_base)
    }

    /// Contents-API URL for a directory listing.
    pub fn api_url(&self, repo: &str, path: &str, branch: &str) -> String {
        format!(
            "{}/repos/{repo}/contents/{path}?ref={branch}",
            self.config.api_base
        )
    }

    /// Download a single file's exact bytes from the raw-content endpoint.
    pub fn fetch_file(&self, repo: &str, branch: &str, path: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.raw_url(repo, branch, path);
        let response = match self.request(&url).call() {
            Ok(response) => response,
            Err(err) => return Err(log_failure(&url, err.into())),
        };

        let mut bytes = Vec::new();
        if let Err(err) = response.into_reader().read_to_end(&mut bytes) {
            return Err(log_failure(&url, FetchError::Transport(err.to_string())));
        }
        Ok(bytes)
    }

    /// Fetch a directory listing, preserving the order the API returns.
    ///
    /// A structurally malformed listing is a [`FetchError::Decode`], not an
    /// empty result.
    pub fn fetch_dir(
        &self,
        repo: &str,
        path: &str,
        branch: &str,
    ) -> Result<Vec<RemoteEntry>, FetchError> {
        let url = self.api_url(repo, path, branch);
        let response = match self
            .request(&url)
            .set("Accept", "application/vnd.github.v3+json")
            .call()
        {
            Ok(response) => response,
            Err(err) => return Err(log_failure(&url, err.into())),
        };

        match response.into_json::<Vec<RemoteEntry>>() {
            Ok(entries) => Ok(entries),
            Err(err) => Err(log_failure(&url, FetchError::Decode(err.to_string()))),
        }
    }

    fn request(&self, url: &str) -> ureq::Request {
        let mut request = self.agent.get(url);
        if let Some(token) = &self.config.token {
            request = request.set("Authorization", &format!("token {token}"));
        }
        request
    }
}

fn log_failure(url: &str, err: FetchError) -> FetchError {
    tracing::warn!("  Error downloading {url}: {err}");
    err
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
