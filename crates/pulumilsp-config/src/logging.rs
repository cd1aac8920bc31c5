//! The server log level setting.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Verbosity levels understood by the Pulumi LSP server.
///
/// Read from the `pulumilsp.logLevel` setting and handed to the server at
/// launch. Unrecognised values fall back to [`LogLevel::Info`].
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogLevel {
    /// Verbose output for troubleshooting the server itself.
    Debug,
    /// Routine operational messages.
    #[default]
    Info,
    /// Recoverable problems worth surfacing.
    Warn,
    /// Failures only.
    Error,
}

/// Errors encountered while parsing a [`LogLevel`] from text.
pub type LogLevelParseError = strum::ParseError;
