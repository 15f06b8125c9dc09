//! Error types for the identify CLI.

use thiserror::Error;

use crate::error::{ClientError, ConfigError};

/// Errors surfaced by the CLI parsing and identify flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognized.
        value: String,
    },
    /// Settings could not be loaded from the environment.
    #[error("failed to load settings: {message}")]
    Settings {
        /// Loader error message.
        message: String,
    },
    /// The loaded settings did not form a valid client configuration.
    #[error("invalid configuration: {source}")]
    Config {
        /// Underlying configuration error.
        #[from]
        #[source]
        source: ConfigError,
    },
    /// The identify call failed.
    #[error("{source}")]
    Client {
        /// Underlying client error.
        #[from]
        #[source]
        source: ClientError,
    },
    /// The response could not be rendered as JSON.
    #[error("failed to render response: {message}")]
    Render {
        /// Serializer error message.
        message: String,
    },
}
