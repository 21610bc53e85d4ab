//! Error types for GlazeWM IPC operations

use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Errors that can occur when communicating with the GlazeWM IPC endpoint
#[derive(Debug, Error)]
pub enum GlazeWmError {
    /// Failed to establish the WebSocket connection
    #[error("failed to connect to GlazeWM at {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: tungstenite::Error,
    },

    /// Failed to send the command frame
    #[error("failed to send command to GlazeWM: {0}")]
    Send(#[source] tungstenite::Error),

    /// The reply stream yielded a transport error
    #[error("failed to receive reply from GlazeWM: {0}")]
    Receive(#[source] tungstenite::Error),

    /// Connection was closed before a reply arrived
    #[error("connection to GlazeWM closed before a reply arrived")]
    ConnectionClosed,

    /// The reply was not valid JSON, or did not fit the expected shape
    #[error("failed to decode GlazeWM reply: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// The decoded reply lacked the mandatory `success` key
    ///
    /// Indicates a peer or protocol-version mismatch; the raw reply is
    /// kept for diagnostics.
    #[error("reply is missing the `success` key: {raw}")]
    Protocol { raw: serde_json::Value },

    /// GlazeWM reported that the command failed
    ///
    /// Only surfaced when `raise_on_command_failure` is enabled; otherwise
    /// the failed [`Response`](crate::Response) is returned as a value.
    #[error("GlazeWM rejected the command: {0}")]
    Command(String),

    /// A client-side argument check failed, before any I/O was attempted
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A query reply did not carry the expected list payload
    #[error("query contract violated: {0}")]
    ContractViolation(String),

    /// The blocking facade could not build its async runtime
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
