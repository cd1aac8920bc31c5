//! Setting names and the host settings oracle.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

/// Namespace grouping every setting this extension reads.
pub const NAMESPACE: &str = "pulumilsp";

/// Key of the explicit server path setting, relative to [`NAMESPACE`].
pub const SERVER_PATH_KEY: &str = "server.path";

/// Fully-qualified name of the explicit server path setting.
pub const SERVER_PATH_SETTING: &str = "pulumilsp.server.path";

/// Key of the server log level setting, relative to [`NAMESPACE`].
pub const LOG_LEVEL_KEY: &str = "logLevel";

/// Fully-qualified name of the server log level setting.
pub const LOG_LEVEL_SETTING: &str = "pulumilsp.logLevel";

/// Read-only view of the host's configuration store.
///
/// Settings are addressed by their fully-qualified name, such as
/// `pulumilsp.server.path`. Values arrive as loosely-typed JSON; callers
/// decide how strictly to interpret them.
pub trait SettingsStore: Send + Sync {
    /// Returns the stored value for `setting`, if any.
    fn get(&self, setting: &str) -> Option<Value>;
}

/// Mutable in-memory [`SettingsStore`] for tests and simple embedders.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: Mutex<HashMap<String, Value>>,
}

impl MemorySettings {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `setting` to `value`, replacing any previous value.
    pub fn set(&self, setting: impl Into<String>, value: impl Into<Value>) {
        let mut values = lock(&self.values);
        values.insert(setting.into(), value.into());
    }

    /// Removes `setting` from the store.
    pub fn unset(&self, setting: &str) {
        let mut values = lock(&self.values);
        values.remove(setting);
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, setting: &str) -> Option<Value> {
        let values = lock(&self.values);
        values.get(setting).cloned()
    }
}

fn lock(values: &Mutex<HashMap<String, Value>>) -> std::sync::MutexGuard<'_, HashMap<String, Value>> {
    values.lock().unwrap_or_else(|poison| poison.into_inner())
}
