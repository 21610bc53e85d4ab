//! Async GlazeWM IPC client
//!
//! GlazeWM accepts textual messages over a WebSocket endpoint: bare query
//! topics (`monitors`, `workspaces`, `windows`) and imperative actions
//! wrapped as `command "<text>"`. Every message is answered by exactly one
//! JSON reply.
//!
//! The client opens one short-lived connection per call: connect, send one
//! text frame, await one reply frame, decode, close. There is no session
//! state and no retry logic, so a [`GlazeClient`] is nothing more than the
//! endpoint configuration and can be cloned and shared freely; concurrent
//! calls each own their connection exclusively.

use futures_util::{SinkExt, StreamExt};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, trace};

use crate::error::GlazeWmError;
use crate::types::{
    BorderDelta, Dimension, Direction, Monitor, Response, ResponseData, TilingDirection, Window,
    WindowState, Workspace, WorkspaceTarget,
};

/// Client for the GlazeWM WebSocket IPC endpoint
///
/// # Example
///
/// ```ignore
/// let client = GlazeClient::new("ws://localhost:6123");
/// client.focus(Direction::Left).await?;
/// let monitors = client.get_monitors().await?;
/// ```
#[derive(Debug, Clone)]
pub struct GlazeClient {
    url: String,
    raise_on_command_failure: bool,
}

impl GlazeClient {
    /// Create a client for the given endpoint, e.g. `ws://localhost:6123`.
    ///
    /// No connection is attempted until the first call.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            raise_on_command_failure: false,
        }
    }

    /// When enabled, a reply with `success: false` is surfaced as
    /// [`GlazeWmError::Command`] instead of being returned as a [`Response`].
    ///
    /// Defaults to `false`.
    pub fn raise_on_command_failure(mut self, raise: bool) -> Self {
        self.raise_on_command_failure = raise;
        self
    }

    /// The configured endpoint address.
    pub fn url(&self) -> &str {
        &self.url
    }

    // ── State queries ────────────────────────────────────────────────────────

    /// Query all monitors, with their nested workspaces and windows.
    ///
    /// # Errors
    ///
    /// Any transport error from [`send_raw`](Self::send_raw), or
    /// [`GlazeWmError::ContractViolation`] if the reply carries no list
    /// payload.
    pub async fn get_monitors(&self) -> Result<Vec<Monitor>, GlazeWmError> {
        self.query("monitors").await
    }

    /// Query all workspaces, with their nested windows.
    pub async fn get_workspaces(&self) -> Result<Vec<Workspace>, GlazeWmError> {
        self.query("workspaces").await
    }

    /// Query all managed windows.
    pub async fn get_windows(&self) -> Result<Vec<Window>, GlazeWmError> {
        self.query("windows").await
    }

    // ── Commands ─────────────────────────────────────────────────────────────

    /// Switch to a binding mode.
    pub async fn binding_mode(&self, mode: &str) -> Result<Response, GlazeWmError> {
        self.command(&format!("binding mode {mode}")).await
    }

    /// Launch a program or shell command.
    pub async fn execute(&self, cmd: &str) -> Result<Response, GlazeWmError> {
        self.command(&format!("exec {cmd}")).await
    }

    /// Set the state of the focused window.
    pub async fn set_window_state(&self, state: WindowState) -> Result<Response, GlazeWmError> {
        self.command(&format!("set {state}")).await
    }

    /// Set one dimension of the focused window.
    ///
    /// `size` must carry a `px` or `%` unit (e.g. `"500px"`, `"30%"`);
    /// anything else fails with [`GlazeWmError::InvalidArgument`] before any
    /// connection is attempted.
    pub async fn set_window_size(
        &self,
        dimension: Dimension,
        size: &str,
    ) -> Result<Response, GlazeWmError> {
        ensure_sized("size", size)?;
        self.command(&format!("set {dimension} {size}")).await
    }

    /// Toggle the maximized state of the focused window.
    pub async fn toggle_maximized(&self) -> Result<Response, GlazeWmError> {
        self.command("toggle maximized").await
    }

    /// Toggle the floating state of the focused window.
    pub async fn toggle_floating(&self) -> Result<Response, GlazeWmError> {
        self.command("toggle floating").await
    }

    /// Toggle focus between tiling and floating windows.
    pub async fn focus_mode_toggle(&self) -> Result<Response, GlazeWmError> {
        self.command("focus mode toggle").await
    }

    /// Focus the next window in a direction.
    pub async fn focus(&self, direction: Direction) -> Result<Response, GlazeWmError> {
        self.command(&format!("focus {direction}")).await
    }

    /// Focus a workspace by index, or the most recent one.
    pub async fn focus_workspace(
        &self,
        workspace: impl Into<WorkspaceTarget>,
    ) -> Result<Response, GlazeWmError> {
        self.command(&format!("focus workspace {}", workspace.into()))
            .await
    }

    /// Move the focused window to a workspace by index, or the most
    /// recent one.
    pub async fn move_to_workspace(
        &self,
        workspace: impl Into<WorkspaceTarget>,
    ) -> Result<Response, GlazeWmError> {
        self.command(&format!("move to workspace {}", workspace.into()))
            .await
    }

    /// Set or toggle the tiling direction.
    pub async fn tiling_direction(
        &self,
        direction: TilingDirection,
    ) -> Result<Response, GlazeWmError> {
        self.command(&format!("tiling direction {direction}")).await
    }

    /// Reload the GlazeWM configuration file.
    pub async fn reload_config(&self) -> Result<Response, GlazeWmError> {
        self.command("reload config").await
    }

    /// Exit GlazeWM cleanly.
    pub async fn exit_wm(&self) -> Result<Response, GlazeWmError> {
        self.command("exit wm").await
    }

    /// Unmanage the focused window; GlazeWM will ignore it from now on.
    pub async fn ignore(&self) -> Result<Response, GlazeWmError> {
        self.command("ignore").await
    }

    /// Resize the borders of the focused window.
    ///
    /// Edges left at their [`Default`] stay unchanged (`0px`):
    ///
    /// ```ignore
    /// client.resize_borders(BorderDelta { top: 5, ..Default::default() }).await?;
    /// // sends: command "resize borders 5px 0px 0px 0px"
    /// ```
    pub async fn resize_borders(&self, delta: BorderDelta) -> Result<Response, GlazeWmError> {
        self.command(&format!(
            "resize borders {}px {}px {}px {}px",
            delta.top, delta.left, delta.right, delta.bottom
        ))
        .await
    }

    /// Resize the focused window along one dimension.
    ///
    /// `amount` must carry a `px` or `%` unit (e.g. `resize height 3%`,
    /// `resize width 20px`), checked client-side like
    /// [`set_window_size`](Self::set_window_size).
    pub async fn resize(
        &self,
        dimension: Dimension,
        amount: &str,
    ) -> Result<Response, GlazeWmError> {
        ensure_sized("amount", amount)?;
        self.command(&format!("resize {dimension} {amount}")).await
    }

    // ── Low level ────────────────────────────────────────────────────────────

    /// Send an imperative action, wrapped as `command "<cmd>"`.
    ///
    /// Every command method above funnels through here; use it directly for
    /// actions this client has no dedicated method for.
    pub async fn command(&self, cmd: &str) -> Result<Response, GlazeWmError> {
        self.send_raw(&format!("command \"{cmd}\"")).await
    }

    /// Send a raw message and decode the single reply.
    ///
    /// Opens a fresh connection, sends `message` as one text frame, awaits
    /// exactly one data frame back, and validates it. The connection is
    /// released on every exit path.
    ///
    /// # Errors
    ///
    /// - [`GlazeWmError::Connection`] if the endpoint is unreachable
    /// - [`GlazeWmError::Send`] / [`GlazeWmError::Receive`] on transport
    ///   failures mid-exchange
    /// - [`GlazeWmError::ConnectionClosed`] if the peer closes before
    ///   replying
    /// - [`GlazeWmError::MalformedResponse`] if the reply is not valid JSON
    ///   or does not fit [`Response`]
    /// - [`GlazeWmError::Protocol`] if the reply lacks the `success` key
    /// - [`GlazeWmError::Command`] if the peer reports failure and
    ///   `raise_on_command_failure` is enabled
    pub async fn send_raw(&self, message: &str) -> Result<Response, GlazeWmError> {
        debug!(url = %self.url, %message, "sending IPC message");

        let (mut ws, _) =
            connect_async(self.url.as_str())
                .await
                .map_err(|source| GlazeWmError::Connection {
                    url: self.url.clone(),
                    source,
                })?;

        ws.send(Message::Text(message.to_owned()))
            .await
            .map_err(GlazeWmError::Send)?;

        // The peer may interleave control frames before the reply; wait for
        // the first data frame.
        let decoded = loop {
            match ws.next().await {
                Some(Ok(Message::Text(text))) => break serde_json::from_str::<Value>(&text),
                Some(Ok(Message::Binary(bytes))) => break serde_json::from_slice::<Value>(&bytes),
                Some(Ok(Message::Ping(_) | Message::Pong(_) | Message::Frame(_))) => continue,
                Some(Ok(Message::Close(_))) | None => return Err(GlazeWmError::ConnectionClosed),
                Some(Err(source)) => return Err(GlazeWmError::Receive(source)),
            }
        };

        // The exchange is over either way; failure to close cleanly is not
        // worth surfacing.
        let _ = ws.close(None).await;

        let raw = decoded.map_err(GlazeWmError::MalformedResponse)?;
        trace!(reply = %raw, "received IPC reply");

        if raw.get("success").is_none() {
            return Err(GlazeWmError::Protocol { raw });
        }

        let response: Response =
            serde_json::from_value(raw).map_err(GlazeWmError::MalformedResponse)?;

        if self.raise_on_command_failure && !response.success {
            return Err(GlazeWmError::Command(
                response.error.unwrap_or_default(),
            ));
        }

        Ok(response)
    }

    /// Send a bare query topic and decode each element of the list payload.
    async fn query<T: DeserializeOwned>(&self, topic: &str) -> Result<Vec<T>, GlazeWmError> {
        let response = self.send_raw(topic).await?;

        let items = match response.data {
            Some(ResponseData::Items(items)) => items,
            _ => {
                return Err(GlazeWmError::ContractViolation(format!(
                    "`{topic}` reply did not carry a list payload"
                )))
            }
        };

        items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(GlazeWmError::MalformedResponse))
            .collect()
    }
}

/// Check that a size argument carries a `px` or `%` unit.
fn ensure_sized(argument: &str, value: &str) -> Result<(), GlazeWmError> {
    if value.contains('%') || value.contains("px") {
        Ok(())
    } else {
        Err(GlazeWmError::InvalidArgument(format!(
            "{argument} `{value}` must include a `px` or `%` unit"
        )))
    }
}
