//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised while constructing a [`Cache`](crate::cache::Cache).
///
/// `put` and `get` are total, so construction is the only fallible step.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CacheError {
    /// Sweep interval must be strictly positive
    #[error("Invalid cache interval: {0:?} (must be greater than zero)")]
    InvalidInterval(Duration),

    /// The reaper needs a tokio runtime to be spawned on
    #[error("Cache must be created inside a tokio runtime")]
    NoRuntime,
}

// == Client Error Enum ==
/// Errors raised while talking to the remote catalog.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status
    #[error("Catalog returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The configured catalog base URL cannot have path segments appended
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// The payload was not the JSON shape we expected
    #[error("Failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

// == Command Error Enum ==
/// Errors surfaced to the user by REPL commands.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A command that needs an argument was called without one
    #[error("{command} requires {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    /// First word of the line is not a command
    #[error("Invalid selection")]
    UnknownCommand(String),

    /// `mapb` on the first page
    #[error("trying to navigate to before the beginning of the list")]
    NoPreviousPage,

    #[error(transparent)]
    Client(#[from] ClientError),

    /// Writing command output failed
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Aliases ==
/// Convenience Result type for catalog calls.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Convenience Result type for command handlers.
pub type CommandResult<T> = std::result::Result<T, CommandError>;
