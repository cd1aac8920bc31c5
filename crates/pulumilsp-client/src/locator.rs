//! Resolves the one server executable an activation should launch.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use pulumilsp_config::SERVER_PATH_SETTING;
use tracing::{debug, warn};

use crate::channel::DiagnosticChannel;
use crate::errors::LocateError;
use crate::resolver::ConfigResolver;

const LOCATOR_TARGET: &str = "pulumilsp_client::locator";

/// Base name of the bundled server executable.
pub const SERVER_BINARY: &str = "pulumilsp";

const ISSUE_TRACKER: &str = "https://github.com/corymhall/pulumilsp/issues";

/// Asynchronous existence oracle over the file system.
///
/// Every probe failure reads as "not found"; the locator never
/// distinguishes a missing file from an unreadable one.
#[async_trait]
pub trait FileProbe: Send + Sync {
    /// Whether something exists at `path`.
    async fn exists(&self, path: &Utf8Path) -> bool;
}

/// [`FileProbe`] backed by the real file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsProbe;

#[async_trait]
impl FileProbe for FsProbe {
    async fn exists(&self, path: &Utf8Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }
}

/// Where the bundled server executable is expected to live.
///
/// The name carries the platform executable suffix on the Windows family
/// and no suffix elsewhere.
#[must_use]
pub fn bundled_server_path(bundle_root: &Utf8Path) -> Utf8PathBuf {
    bundle_root.join(format!("{SERVER_BINARY}{}", std::env::consts::EXE_SUFFIX))
}

/// Decides which server executable an activation should launch.
///
/// An explicitly configured path always wins; a configured path that does
/// not exist is a hard error and never falls back to the bundled binary.
/// Failures are written to the diagnostic channel and surfaced with
/// `show` before being returned.
#[derive(Debug, Clone)]
pub struct ServerLocator<P = FsProbe> {
    probe: P,
}

impl ServerLocator<FsProbe> {
    /// Locator probing the real file system.
    #[must_use]
    pub fn new() -> Self {
        Self { probe: FsProbe }
    }
}

impl Default for ServerLocator<FsProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: FileProbe> ServerLocator<P> {
    /// Locator using a custom existence probe.
    #[must_use]
    pub fn with_probe(probe: P) -> Self {
        Self { probe }
    }

    /// Resolves the executable path for this activation attempt.
    ///
    /// The result is computed fresh on every call; nothing is cached
    /// across activations.
    pub async fn locate(
        &self,
        bundle_root: &Utf8Path,
        resolver: &ConfigResolver,
        channel: &DiagnosticChannel,
    ) -> Result<Utf8PathBuf, LocateError> {
        match resolver.server_path() {
            Some(path) => self.locate_explicit(path, channel).await,
            None => self.locate_bundled(bundle_root, channel).await,
        }
    }

    async fn locate_explicit(
        &self,
        path: Utf8PathBuf,
        channel: &DiagnosticChannel,
    ) -> Result<Utf8PathBuf, LocateError> {
        if self.probe.exists(&path).await {
            debug!(target: LOCATOR_TARGET, %path, "using explicitly configured server");
            channel.replace(&format!(
                "Launching server from explicitly provided path: {path}"
            ));
            return Ok(path);
        }

        warn!(target: LOCATOR_TARGET, %path, "configured server path does not exist");
        let error = LocateError::ExplicitPathMissing {
            setting: SERVER_PATH_SETTING,
            path,
        };
        channel.replace(&error.to_string());
        channel.show();
        Err(error)
    }

    async fn locate_bundled(
        &self,
        bundle_root: &Utf8Path,
        channel: &DiagnosticChannel,
    ) -> Result<Utf8PathBuf, LocateError> {
        let expected = bundled_server_path(bundle_root);
        if self.probe.exists(&expected).await {
            debug!(target: LOCATOR_TARGET, path = %expected, "using bundled server");
            channel.replace("Launching built-in Pulumi Diagnostics LSP Server");
            return Ok(expected);
        }

        warn!(target: LOCATOR_TARGET, path = %expected, "bundled server binary is missing");
        channel.replace(&missing_install_message(&expected));
        channel.show();
        Err(LocateError::NoBundledBinary { expected })
    }
}

fn missing_install_message(expected: &Utf8Path) -> String {
    format!(
        "No Pulumi LSP server binary was found.\n\
         Expected the bundled executable at: {expected}\n\
         Set `{SERVER_PATH_SETTING}` to the location of a {SERVER_BINARY} binary, \
         or reinstall the extension.\n\
         If the problem persists, file an issue at {ISSUE_TRACKER}"
    )
}
