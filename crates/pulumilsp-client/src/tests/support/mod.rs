//! Shared fixtures and doubles for bootstrap tests.

mod probe;
mod recording_client;

use std::sync::Arc;

use pulumilsp_config::{ChangeBus, MemorySettings, SERVER_PATH_SETTING};

pub use probe::StaticProbe;
pub use recording_client::{ClientCall, RecordingClient, RecordingFactory};

use crate::channel::DiagnosticChannel;
use crate::resolver::ConfigResolver;

/// Standalone channel so tests never touch the process-wide one.
pub fn test_channel() -> DiagnosticChannel {
    DiagnosticChannel::new("test channel")
}

/// Resolver over an in-memory store, optionally holding an explicit
/// server path.
pub fn resolver_with_path(path: Option<&str>, channel: &DiagnosticChannel) -> ConfigResolver {
    let store = Arc::new(MemorySettings::new());
    if let Some(path) = path {
        store.set(SERVER_PATH_SETTING, path);
    }
    let bus = ChangeBus::new();
    ConfigResolver::new(store, &bus, channel.clone())
}
