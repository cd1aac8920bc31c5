//! Seam between the bootstrap layer and the protocol-client library.

use std::error::Error;
use std::fmt;

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use lsp_types::DocumentFilter;
use pulumilsp_config::LogLevel;
use thiserror::Error;

/// Language identifier the protocol session is scoped to.
const TARGET_LANGUAGE: &str = "typescript";

/// The fixed document selector for a Pulumi diagnostics session.
///
/// Only on-disk files of the analysed language participate; other schemes
/// (untitled buffers, virtual documents) are excluded.
#[must_use]
pub fn document_selector() -> Vec<DocumentFilter> {
    vec![DocumentFilter {
        language: Some(TARGET_LANGUAGE.to_owned()),
        scheme: Some("file".to_owned()),
        pattern: None,
    }]
}

/// Errors reported by protocol-client implementations.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ClientError {
    message: String,
    #[source]
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl ClientError {
    /// Builds an error without an underlying source.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Builds an error that wraps an underlying source.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Human-friendly description without the optional source.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Everything needed to construct a protocol client for one session.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// Executable the client must spawn.
    pub command: Utf8PathBuf,
    /// Files the session operates on.
    pub document_selector: Vec<DocumentFilter>,
    /// Whether the client surfaces server initialisation progress to the
    /// user while the session comes up.
    pub progress_on_initialization: bool,
    /// Verbosity requested from the server.
    pub log_level: LogLevel,
}

/// Behaviour required from the protocol-client library.
///
/// The bootstrap layer treats the client as opaque beyond starting and
/// stopping it; transport and wire-protocol concerns live entirely behind
/// this trait.
#[async_trait]
pub trait ProtocolClient: Send + Sync {
    /// Launches the session.
    ///
    /// Resolves once the launch is underway; full server readiness is not
    /// awaited.
    async fn start(&self) -> Result<(), ClientError>;

    /// Stops the session, resolving once shutdown has settled.
    async fn stop(&self) -> Result<(), ClientError>;
}

impl fmt::Debug for dyn ProtocolClient {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ProtocolClient")
    }
}

/// Builds protocol clients bound to a resolved launch configuration.
pub trait ClientFactory: Send + Sync {
    /// Constructs a client for `launch` without starting it.
    fn build(&self, launch: LaunchConfig) -> Box<dyn ProtocolClient>;
}

/// One protocol client bound to one resolved executable.
///
/// At most one session exists at a time; a session is created by
/// activation, destroyed by deactivation, and never restarted in place.
#[derive(Debug)]
pub struct ClientSession {
    client: Box<dyn ProtocolClient>,
    command: Utf8PathBuf,
}

impl ClientSession {
    pub(crate) fn new(client: Box<dyn ProtocolClient>, command: Utf8PathBuf) -> Self {
        Self { client, command }
    }

    /// Executable this session was launched from.
    #[must_use]
    pub fn command(&self) -> &Utf8Path {
        self.command.as_path()
    }

    pub(crate) fn client(&self) -> &dyn ProtocolClient {
        self.client.as_ref()
    }
}
