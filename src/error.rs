// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network or HTTP-level failure for one version's page.
    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The page was fetched but the verifier section could not be located.
    #[error("could not parse {url}: {reason}")]
    Extract { url: String, reason: String },

    /// The HTTP client could not be set up; nothing can be fetched.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// No worker thread could be started.
    #[error("failed to spawn worker: {0}")]
    Spawn(#[source] std::io::Error),

    /// The worker for one version panicked or exited without reporting.
    #[error("worker for version {version} did not finish")]
    Worker { version: u32 },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

impl ScrapeError {
    /// Failures that only drop one version from the output.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ScrapeError::Fetch { .. } | ScrapeError::Extract { .. } | ScrapeError::Worker { .. }
        )
    }
}
