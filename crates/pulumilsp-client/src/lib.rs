//! Editor-side bootstrap for the Pulumi diagnostics language server.
#![deny(missing_docs)]
//!
//! The crate decides which server executable an activation should launch,
//! starts a protocol client bound to it, reacts to configuration changes,
//! and provides a clean shutdown path. The protocol client itself, the
//! host's settings store, and the file system are kept behind narrow
//! traits ([`ProtocolClient`], [`pulumilsp_config::SettingsStore`],
//! [`FileProbe`]) so tests and embedders can inject lightweight
//! implementations without spawning a real server.
//!
//! Activation flows through a strict sequential pipeline: the
//! [`ConfigResolver`] is constructed, the [`ServerLocator`] resolves one
//! executable path (explicit setting first, bundled binary as fallback),
//! and only then does the [`ClientLifecycle`] construct and start the
//! client. Resolution failures are written to the process-wide
//! [`DiagnosticChannel`] and end the attempt; there are no retries.

mod channel;
mod errors;
mod lifecycle;
mod locator;
mod resolver;
mod session;

#[cfg(test)]
mod tests;

pub use channel::{CHANNEL_NAME, DiagnosticChannel, output_channel};
pub use errors::{ActivateError, LocateError};
pub use lifecycle::{ClientLifecycle, LifecycleState};
pub use locator::{FileProbe, FsProbe, SERVER_BINARY, ServerLocator, bundled_server_path};
pub use resolver::{ConfigResolver, RESTART_NOTICE};
pub use session::{
    ClientError, ClientFactory, ClientSession, LaunchConfig, ProtocolClient, document_selector,
};
