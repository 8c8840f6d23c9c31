use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while loading settings or reading/writing pair-state snapshots.
#[derive(Debug, Error)]
pub enum PortalError {
    /// A settings or snapshot file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// RON text did not describe the expected value.
    #[error("invalid RON: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// A value could not be written as RON.
    #[error("failed to serialize RON: {0}")]
    Serialize(#[from] ron::Error),
}
