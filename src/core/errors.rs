// src/core/errors.rs

//! Defines the primary error type for the client crate.

use std::num::ParseIntError;
use std::sync::Arc;
use thiserror::Error;

/// The main error enum, representing all possible failures in the client.
/// Using `thiserror` allows for clean error definitions and automatic `From` trait implementations.
///
/// The variants fall into three classes:
/// - argument validation (`InvalidArgument`), raised before any network I/O;
/// - reply decoding (`Decode`, `NotAnInteger`, `UnexpectedReply`), raised after
///   a successful call when the payload is unusable;
/// - transport (`Io`, `Timeout`, `ConnectionClosed`, `IncompleteData`,
///   `SyntaxError`, `CommandError`), surfaced unchanged from the connection.
#[derive(Error, Debug, Clone)]
pub enum JsonClientError {
    #[error("IO Error: {0}")]
    Io(Arc<std::io::Error>),

    #[error("Incomplete data in stream")]
    IncompleteData,

    #[error("Timed out waiting for a reply")]
    Timeout,

    #[error("Connection closed by peer")]
    ConnectionClosed,

    #[error("Syntax error")]
    SyntaxError,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// An error reply (`-ERR ...`) sent by the store for a command.
    #[error("Store error: {0}")]
    CommandError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("JSON decode error: {0}")]
    Decode(String),

    #[error("Value is not an integer or out of range")]
    NotAnInteger,

    #[error("Unexpected reply: {0}")]
    UnexpectedReply(String),
}

impl PartialEq for JsonClientError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsonClientError::Io(e1), JsonClientError::Io(e2)) => e1.to_string() == e2.to_string(),
            (JsonClientError::InvalidRequest(s1), JsonClientError::InvalidRequest(s2)) => s1 == s2,
            (JsonClientError::CommandError(s1), JsonClientError::CommandError(s2)) => s1 == s2,
            (JsonClientError::InvalidArgument(s1), JsonClientError::InvalidArgument(s2)) => {
                s1 == s2
            }
            (JsonClientError::Decode(s1), JsonClientError::Decode(s2)) => s1 == s2,
            (JsonClientError::UnexpectedReply(s1), JsonClientError::UnexpectedReply(s2)) => {
                s1 == s2
            }
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

// --- From trait implementations for easy error conversion ---

impl From<std::io::Error> for JsonClientError {
    fn from(e: std::io::Error) -> Self {
        JsonClientError::Io(Arc::new(e))
    }
}

impl From<serde_json::Error> for JsonClientError {
    fn from(e: serde_json::Error) -> Self {
        JsonClientError::Decode(e.to_string())
    }
}

impl From<ParseIntError> for JsonClientError {
    fn from(_: ParseIntError) -> Self {
        JsonClientError::NotAnInteger
    }
}

impl From<std::str::Utf8Error> for JsonClientError {
    fn from(_: std::str::Utf8Error) -> Self {
        JsonClientError::Decode("reply is not valid UTF-8".to_string())
    }
}

impl From<std::string::FromUtf8Error> for JsonClientError {
    fn from(_: std::string::FromUtf8Error) -> Self {
        JsonClientError::Decode("reply is not valid UTF-8".to_string())
    }
}
