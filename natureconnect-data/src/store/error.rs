use std::io;

use camino::Utf8PathBuf;
use natureconnect_core::UserId;
use thiserror::Error;

/// Errors raised by [`UserStore`](super::UserStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data directory could not be created or opened.
    #[error("failed to open data directory {path}: {source}")]
    OpenDir {
        /// Directory being opened.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A profile document could not be read.
    #[error("failed to read profile {path}: {source}")]
    Read {
        /// Document being read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A profile document held malformed JSON.
    #[error("profile {path} is corrupt: {source}")]
    Corrupt {
        /// Document holding the bad JSON.
        path: Utf8PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// A profile document belongs to a different user.
    #[error("profile {path} belongs to user {owner}")]
    ForeignDocument {
        /// Document being read.
        path: Utf8PathBuf,
        /// User id recorded inside the document.
        owner: UserId,
    },
    /// A profile could not be encoded.
    #[error("failed to encode profile for user {user_id}: {source}")]
    Encode {
        /// Owner of the profile.
        user_id: UserId,
        /// Underlying encode error.
        #[source]
        source: serde_json::Error,
    },
    /// A profile document could not be written.
    #[error("failed to write profile {path}: {source}")]
    Write {
        /// Document being written.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
