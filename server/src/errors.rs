use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Enumerates high-level errors returned by this library. All of them are
/// load-time failures: once the catalog is built, nothing here can fail.
#[derive(Debug, Error)]
pub enum GuideError {
    /// Represents a content file that could not be read.
    #[error("failed to read content file {}", path.display())]
    UnreadableContent {
        path: PathBuf,
        source: io::Error,
    },

    /// Represents a content file that did not parse as its collection.
    #[error("malformed content file {}", path.display())]
    MalformedContent {
        path: PathBuf,
        source: serde_json::Error,
    },
}
