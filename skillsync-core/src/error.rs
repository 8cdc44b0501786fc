//! Error types for skillsync-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from manifest loading.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Underlying I/O failure (permission denied, unreadable file, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse manifest at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The manifest file did not exist at the expected path.
    #[error("manifest not found at {path}")]
    ManifestNotFound { path: PathBuf },
}
