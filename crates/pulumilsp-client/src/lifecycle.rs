//! Activation and deactivation of the client session.

use camino::Utf8Path;
use tracing::{debug, info};

use crate::channel::DiagnosticChannel;
use crate::errors::ActivateError;
use crate::locator::{FileProbe, FsProbe, ServerLocator};
use crate::resolver::ConfigResolver;
use crate::session::{
    ClientError, ClientFactory, ClientSession, LaunchConfig, document_selector,
};

const LIFECYCLE_TARGET: &str = "pulumilsp_client::lifecycle";

/// Phases the extension moves through between host calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LifecycleState {
    /// No session exists; both the initial and the terminal state.
    #[default]
    Inactive,
    /// Resolving the server and constructing the client.
    Activating,
    /// A client session is live.
    Running,
    /// Awaiting client shutdown.
    Stopping,
}

/// Owns the single client session for the extension's lifetime.
pub struct ClientLifecycle<P = FsProbe> {
    resolver: ConfigResolver,
    factory: Box<dyn ClientFactory>,
    locator: ServerLocator<P>,
    channel: DiagnosticChannel,
    session: Option<ClientSession>,
    state: LifecycleState,
}

impl ClientLifecycle<FsProbe> {
    /// Lifecycle probing the real file system.
    #[must_use]
    pub fn new(
        resolver: ConfigResolver,
        factory: Box<dyn ClientFactory>,
        channel: DiagnosticChannel,
    ) -> Self {
        Self::with_locator(resolver, factory, channel, ServerLocator::new())
    }
}

impl<P: FileProbe> ClientLifecycle<P> {
    /// Lifecycle with a custom server locator.
    #[must_use]
    pub fn with_locator(
        resolver: ConfigResolver,
        factory: Box<dyn ClientFactory>,
        channel: DiagnosticChannel,
        locator: ServerLocator<P>,
    ) -> Self {
        Self {
            resolver,
            factory,
            locator,
            channel,
            session: None,
            state: LifecycleState::Inactive,
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// The live session, if activation has completed.
    #[must_use]
    pub fn session(&self) -> Option<&ClientSession> {
        self.session.as_ref()
    }

    /// Resolves a server executable and starts a client bound to it.
    ///
    /// Resolution fully completes before any client is constructed. On
    /// resolution failure the locator has already written and surfaced the
    /// diagnostic message; the attempt ends without retry. A client start
    /// rejection is returned unmodified inside [`ActivateError::Start`].
    pub async fn activate(&mut self, bundle_root: &Utf8Path) -> Result<&ClientSession, ActivateError> {
        if self.session.is_some() {
            return Err(ActivateError::AlreadyActive);
        }

        self.state = LifecycleState::Activating;
        let command = match self
            .locator
            .locate(bundle_root, &self.resolver, &self.channel)
            .await
        {
            Ok(command) => command,
            Err(error) => {
                self.state = LifecycleState::Inactive;
                return Err(error.into());
            }
        };

        let launch = LaunchConfig {
            command: command.clone(),
            document_selector: document_selector(),
            progress_on_initialization: true,
            log_level: self.resolver.log_level(),
        };
        let client = self.factory.build(launch);
        let session = ClientSession::new(client, command);

        if let Err(error) = session.client().start().await {
            self.state = LifecycleState::Inactive;
            return Err(ActivateError::Start(error));
        }

        info!(target: LIFECYCLE_TARGET, command = %session.command(), "client session started");
        self.state = LifecycleState::Running;
        Ok(self.session.insert(session))
    }

    /// Stops the client session, if one exists.
    ///
    /// A lifecycle that never reached [`LifecycleState::Running`] returns
    /// immediately without touching any client. Otherwise the client's
    /// shutdown is awaited and its result returned unmodified; the session
    /// is dropped either way and a later activation builds a fresh one.
    pub async fn deactivate(&mut self) -> Result<(), ClientError> {
        let Some(session) = self.session.take() else {
            debug!(target: LIFECYCLE_TARGET, "deactivate without a live session");
            self.state = LifecycleState::Inactive;
            return Ok(());
        };

        self.state = LifecycleState::Stopping;
        let result = session.client().stop().await;
        self.state = LifecycleState::Inactive;
        if result.is_ok() {
            info!(target: LIFECYCLE_TARGET, "client session stopped");
        }
        result
    }
}
