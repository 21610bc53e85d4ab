//! Client library for the GlazeWM window manager's WebSocket IPC protocol
//!
//! GlazeWM listens on a WebSocket endpoint (`ws://localhost:6123` by
//! default) and accepts textual messages: bare query topics (`monitors`,
//! `workspaces`, `windows`) and imperative actions wrapped as
//! `command "<text>"`. Every message is answered by a single JSON reply.
//!
//! This crate provides:
//!
//! - [`GlazeClient`]: the async client — one short-lived connection per
//!   call, one method per supported action, typed decoding of query replies
//! - [`blocking::GlazeClient`]: the same surface with blocking semantics
//! - [`GlazeWmError`]: the error taxonomy for everything that can go wrong
//!   between the call and the decoded reply
//!
//! ## Example
//!
//! ```ignore
//! use glazewm_client::{Direction, GlazeClient};
//!
//! let client = GlazeClient::new("ws://localhost:6123");
//! client.focus(Direction::Left).await?;
//! for monitor in client.get_monitors().await? {
//!     println!("{}: {}x{}", monitor.device_name, monitor.width, monitor.height);
//! }
//! ```

pub mod blocking;
mod client;
mod error;
mod types;

pub use client::GlazeClient;
pub use error::GlazeWmError;
pub use types::{
    BorderDelta, Dimension, Direction, FloatingPlacement, Monitor, Response, ResponseData,
    TilingDirection, Window, WindowState, Workspace, WorkspaceTarget,
};
