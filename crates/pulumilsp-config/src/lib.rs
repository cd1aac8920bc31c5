//! Host-facing configuration surface for the Pulumi LSP client.
//!
//! Every setting the extension reads lives under the `pulumilsp`
//! namespace in the host's configuration store. This crate defines the
//! setting names, the read-only oracle over the store, the
//! change-notification plumbing, and the typed log-level setting. The
//! host is abstracted behind the [`SettingsStore`] and [`ChangeNotifier`]
//! traits so tests and embedders can supply lightweight implementations.

mod change;
mod logging;
mod settings;

pub use change::{
    ChangeBus, ChangeListener, ChangeNotifier, ConfigurationChange, ScopedChange, Subscription,
};
pub use logging::{LogLevel, LogLevelParseError};
pub use settings::{
    LOG_LEVEL_KEY, LOG_LEVEL_SETTING, MemorySettings, NAMESPACE, SERVER_PATH_KEY,
    SERVER_PATH_SETTING, SettingsStore,
};
