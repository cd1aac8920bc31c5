//! Reads the extension's settings and reacts to change notifications.

use std::sync::Arc;

use camino::Utf8PathBuf;
use pulumilsp_config::{
    ChangeNotifier, LOG_LEVEL_SETTING, LogLevel, NAMESPACE, SERVER_PATH_SETTING, SettingsStore,
    Subscription,
};
use tracing::debug;

use crate::channel::DiagnosticChannel;

const RESOLVER_TARGET: &str = "pulumilsp_client::resolver";

/// Message written when a relevant configuration change is observed.
///
/// Settings are only read at activation, so a change can only take effect
/// after a restart; the resolver reminds the user instead of reloading.
pub const RESTART_NOTICE: &str =
    "pulumilsp settings have changed. Restart the extension for the new settings to take effect.";

/// Reads settings under the `pulumilsp` namespace.
///
/// Constructed once per activation and kept for the extension's lifetime.
/// Owns the configuration-change subscription; dropping the resolver
/// releases it.
pub struct ConfigResolver {
    store: Arc<dyn SettingsStore>,
    _subscription: Subscription,
}

impl ConfigResolver {
    /// Builds a resolver bound to the host's settings store and change
    /// stream.
    ///
    /// The subscription is registered exactly once here. A change whose
    /// scope covers the `pulumilsp` namespace writes [`RESTART_NOTICE`] to
    /// `channel`; changes outside the namespace produce no output. The
    /// reaction is notify-only: the resolver never re-runs server
    /// discovery and never restarts the client.
    pub fn new(
        store: Arc<dyn SettingsStore>,
        notifier: &dyn ChangeNotifier,
        channel: DiagnosticChannel,
    ) -> Self {
        let subscription = notifier.subscribe(Box::new(move |change| {
            if !change.affects(NAMESPACE) {
                return;
            }
            debug!(target: RESOLVER_TARGET, "configuration change affects `{NAMESPACE}`");
            channel.replace(RESTART_NOTICE);
        }));

        Self {
            store,
            _subscription: subscription,
        }
    }

    /// Explicitly configured server path, if set to a non-empty string.
    #[must_use]
    pub fn server_path(&self) -> Option<Utf8PathBuf> {
        let value = self.store.get(SERVER_PATH_SETTING)?;
        let path = value.as_str()?;
        if path.is_empty() {
            return None;
        }
        Some(Utf8PathBuf::from(path))
    }

    /// Configured server log level, defaulting when unset or unparseable.
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.store
            .get(LOG_LEVEL_SETTING)
            .and_then(|value| value.as_str().and_then(|text| text.parse().ok()))
            .unwrap_or_default()
    }
}
