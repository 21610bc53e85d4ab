//! Shared capture server for the integration tests
//!
//! Binds a real WebSocket listener on a loopback port, records every text
//! frame it receives, and answers each one with a canned JSON reply. This
//! exercises the full connect/send/receive/decode path without a running
//! window manager.

use std::net::SocketAddr;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

/// Reply GlazeWM sends for an accepted imperative command.
pub fn command_success() -> String {
    serde_json::json!({
        "success": true,
        "messageType": "command_success",
        "data": null,
        "error": null,
        "clientMessage": ""
    })
    .to_string()
}

/// Spawn a capture server that answers every text frame with `reply`.
///
/// Returns the bound address and a channel yielding each received frame.
/// The server accepts connections in sequence, matching the client's
/// connection-per-call behavior.
pub async fn spawn_server(reply: String) -> (SocketAddr, mpsc::UnboundedReceiver<String>) {
    // Opt-in log output while debugging failures (RUST_LOG=glazewm_client=trace).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let mut ws = accept_async(stream).await.unwrap();
            while let Some(Ok(message)) = ws.next().await {
                if let Message::Text(text) = message {
                    // The receiver may be gone if the test only cares about
                    // the client-side result.
                    let _ = tx.send(text);
                    if ws.send(Message::Text(reply.clone())).await.is_err() {
                        break;
                    }
                }
            }
        }
    });

    (addr, rx)
}

pub fn url(addr: SocketAddr) -> String {
    format!("ws://{addr}")
}
