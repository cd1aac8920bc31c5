//! Recording protocol-client doubles.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::session::{ClientError, ClientFactory, LaunchConfig, ProtocolClient};

/// Calls observed by a [`RecordingClient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCall {
    /// `start` was invoked.
    Start,
    /// `stop` was invoked.
    Stop,
}

#[derive(Default)]
struct ClientState {
    calls: Vec<ClientCall>,
    fail_start: Option<String>,
    fail_stop: Option<String>,
}

/// Protocol-client double that records start and stop calls.
///
/// Clones share state, so a test can keep one handle while the factory
/// hands another to the lifecycle under test.
#[derive(Clone, Default)]
pub struct RecordingClient {
    shared: Arc<Mutex<ClientState>>,
}

impl RecordingClient {
    /// Client whose start and stop both succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Client whose start fails with `message`.
    pub fn failing_start(message: impl Into<String>) -> Self {
        let client = Self::default();
        client.lock().fail_start = Some(message.into());
        client
    }

    /// Client whose stop fails with `message`.
    pub fn failing_stop(message: impl Into<String>) -> Self {
        let client = Self::default();
        client.lock().fail_stop = Some(message.into());
        client
    }

    /// Ordered list of calls the client observed.
    pub fn calls(&self) -> Vec<ClientCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, ClientState> {
        self.shared.lock().unwrap_or_else(|poison| poison.into_inner())
    }
}

#[async_trait]
impl ProtocolClient for RecordingClient {
    async fn start(&self) -> Result<(), ClientError> {
        let mut state = self.lock();
        state.calls.push(ClientCall::Start);
        match &state.fail_start {
            Some(message) => Err(ClientError::new(message.clone())),
            None => Ok(()),
        }
    }

    async fn stop(&self) -> Result<(), ClientError> {
        let mut state = self.lock();
        state.calls.push(ClientCall::Stop);
        match &state.fail_stop {
            Some(message) => Err(ClientError::new(message.clone())),
            None => Ok(()),
        }
    }
}

/// Factory double that records every build and returns handles onto one
/// shared [`RecordingClient`].
#[derive(Clone, Default)]
pub struct RecordingFactory {
    client: RecordingClient,
    launches: Arc<Mutex<Vec<LaunchConfig>>>,
}

impl RecordingFactory {
    /// Factory building well-behaved clients.
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory building handles onto `client`.
    pub fn returning(client: RecordingClient) -> Self {
        Self {
            client,
            launches: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The client every build hands out a handle to.
    pub fn client(&self) -> RecordingClient {
        self.client.clone()
    }

    /// Launch configurations observed so far, in order.
    pub fn launches(&self) -> Vec<LaunchConfig> {
        self.launches
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .clone()
    }
}

impl ClientFactory for RecordingFactory {
    fn build(&self, launch: LaunchConfig) -> Box<dyn ProtocolClient> {
        let mut launches = self
            .launches
            .lock()
            .unwrap_or_else(|poison| poison.into_inner());
        launches.push(launch);
        Box::new(self.client.clone())
    }
}
