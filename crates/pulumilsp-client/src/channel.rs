//! Process-wide diagnostic output channel.

use std::sync::{Arc, Mutex, MutexGuard};

use once_cell::sync::OnceCell;
use tracing::debug;

const CHANNEL_TARGET: &str = "pulumilsp_client::channel";

/// Name under which the host displays the diagnostic channel.
pub const CHANNEL_NAME: &str = "Pulumi LSP Server";

static OUTPUT_CHANNEL: OnceCell<DiagnosticChannel> = OnceCell::new();

/// Returns the process-wide diagnostic channel, creating it on first use.
///
/// Every call yields a handle onto the same underlying channel; exactly
/// one channel named [`CHANNEL_NAME`] exists per process regardless of how
/// often this is called. Safe to call before any other component is
/// initialised. The channel lives until process exit.
#[must_use]
pub fn output_channel() -> DiagnosticChannel {
    OUTPUT_CHANNEL
        .get_or_init(|| DiagnosticChannel::new(CHANNEL_NAME))
        .clone()
}

/// Named, user-visible, append-only log surface.
///
/// Handles are cheap to clone and share one buffer. Writes never fail;
/// the only side effect is visible diagnostic output.
#[derive(Debug, Clone)]
pub struct DiagnosticChannel {
    name: Arc<str>,
    shared: Arc<Mutex<ChannelState>>,
}

#[derive(Debug, Default)]
struct ChannelState {
    contents: String,
    times_shown: usize,
}

impl DiagnosticChannel {
    /// Creates a standalone channel with the given display name.
    ///
    /// Production code goes through [`output_channel`]; standalone
    /// channels serve tests and embedders that manage their own surface.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Arc::from(name.into()),
            shared: Arc::new(Mutex::new(ChannelState::default())),
        }
    }

    /// Display name of the channel.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends `text` to the channel, terminating it with a newline.
    pub fn append(&self, text: &str) {
        debug!(target: CHANNEL_TARGET, channel = %self.name, text, "append");
        let mut state = self.lock();
        state.contents.push_str(text);
        if !text.ends_with('\n') {
            state.contents.push('\n');
        }
    }

    /// Clears the channel and writes `text` as its entire contents.
    pub fn replace(&self, text: &str) {
        debug!(target: CHANNEL_TARGET, channel = %self.name, text, "replace");
        let mut state = self.lock();
        state.contents.clear();
        state.contents.push_str(text);
    }

    /// Requests that the host bring the channel to the user's attention.
    pub fn show(&self) {
        debug!(target: CHANNEL_TARGET, channel = %self.name, "show");
        let mut state = self.lock();
        state.times_shown += 1;
    }

    /// Current contents of the channel.
    #[must_use]
    pub fn contents(&self) -> String {
        self.lock().contents.clone()
    }

    /// How often [`show`](Self::show) has been called.
    #[must_use]
    pub fn times_shown(&self) -> usize {
        self.lock().times_shown
    }

    /// Whether `other` is a handle onto this channel's buffer.
    #[must_use]
    pub fn shares_state(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }

    fn lock(&self) -> MutexGuard<'_, ChannelState> {
        self.shared.lock().unwrap_or_else(|poison| poison.into_inner())
    }
}
