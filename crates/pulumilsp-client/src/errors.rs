//! Error types surfaced by the bootstrap layer.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::session::ClientError;

/// Failure to resolve a server executable for an activation attempt.
///
/// Both variants have already been written to the diagnostic channel and
/// surfaced with `show` by the time they reach the caller; the attempt is
/// over and the user must act before trying again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocateError {
    /// The user configured a server path that does not exist on disk.
    ///
    /// No fallback to the bundled binary is attempted.
    #[error("no server binary found at the path set by `{setting}`: {path}")]
    ExplicitPathMissing {
        /// Fully-qualified name of the setting holding the bad path.
        setting: &'static str,
        /// The configured path that failed the existence check.
        path: Utf8PathBuf,
    },

    /// No explicit path is configured and the bundled executable is
    /// absent, which points at a corrupt or incomplete install.
    #[error("bundled Pulumi LSP server binary is missing (expected {expected})")]
    NoBundledBinary {
        /// Where the bundled executable was expected to live.
        expected: Utf8PathBuf,
    },
}

/// Failure of an activation attempt.
#[derive(Debug, Error)]
pub enum ActivateError {
    /// `activate` was called while a client session already exists.
    #[error("a client session is already active")]
    AlreadyActive,

    /// Server resolution failed; no client was constructed.
    #[error(transparent)]
    Locate(#[from] LocateError),

    /// The protocol client rejected its start; passed through unmodified.
    #[error("protocol client failed to start: {0}")]
    Start(#[source] ClientError),
}
