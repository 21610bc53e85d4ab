//! Blocking facade over the async client
//!
//! Mirrors every [`crate::GlazeClient`] operation under the same name and
//! signature, minus `async`, for callers that do not run an event loop. The
//! facade owns a current-thread tokio runtime and drives one async call to
//! completion per invocation, so each call blocks the invoking thread for
//! its duration and still opens and closes its own connection.
//!
//! Calls made through one facade instance serialize on the calling thread;
//! this does not stop other threads from making concurrent async calls with
//! their own clients.

use tokio::runtime;

use crate::error::GlazeWmError;
use crate::types::{
    BorderDelta, Dimension, Direction, Monitor, Response, TilingDirection, Window, WindowState,
    Workspace, WorkspaceTarget,
};

/// Blocking counterpart of [`crate::GlazeClient`]
///
/// # Example
///
/// ```ignore
/// let client = blocking::GlazeClient::new("ws://localhost:6123")?;
/// client.focus(Direction::Left)?;
/// ```
#[derive(Debug)]
pub struct GlazeClient {
    inner: crate::GlazeClient,
    runtime: runtime::Runtime,
}

impl GlazeClient {
    /// Create a blocking client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GlazeWmError::Runtime`] if the backing runtime cannot be
    /// built.
    pub fn new(url: impl Into<String>) -> Result<Self, GlazeWmError> {
        let runtime = runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(GlazeWmError::Runtime)?;

        Ok(Self {
            inner: crate::GlazeClient::new(url),
            runtime,
        })
    }

    /// See [`crate::GlazeClient::raise_on_command_failure`].
    pub fn raise_on_command_failure(mut self, raise: bool) -> Self {
        self.inner = self.inner.raise_on_command_failure(raise);
        self
    }

    /// The configured endpoint address.
    pub fn url(&self) -> &str {
        self.inner.url()
    }

    pub fn get_monitors(&self) -> Result<Vec<Monitor>, GlazeWmError> {
        self.runtime.block_on(self.inner.get_monitors())
    }

    pub fn get_workspaces(&self) -> Result<Vec<Workspace>, GlazeWmError> {
        self.runtime.block_on(self.inner.get_workspaces())
    }

    pub fn get_windows(&self) -> Result<Vec<Window>, GlazeWmError> {
        self.runtime.block_on(self.inner.get_windows())
    }

    pub fn binding_mode(&self, mode: &str) -> Result<Response, GlazeWmError> {
        self.runtime.block_on(self.inner.binding_mode(mode))
    }

    pub fn execute(&self, cmd: &str) -> Result<Response, GlazeWmError> {
        self.runtime.block_on(self.inner.execute(cmd))
    }

    pub fn set_window_state(&self, state: WindowState) -> Result<Response, GlazeWmError> {
        self.runtime.block_on(self.inner.set_window_state(state))
    }

    pub fn set_window_size(
        &self,
        dimension: Dimension,
        size: &str,
    ) -> Result<Response, GlazeWmError> {
        self.runtime
            .block_on(self.inner.set_window_size(dimension, size))
    }

    pub fn toggle_maximized(&self) -> Result<Response, GlazeWmError> {
        self.runtime.block_on(self.inner.toggle_maximized())
    }

    pub fn toggle_floating(&self) -> Result<Response, GlazeWmError> {
        self.runtime.block_on(self.inner.toggle_floating())
    }

    pub fn focus_mode_toggle(&self) -> Result<Response, GlazeWmError> {
        self.runtime.block_on(self.inner.focus_mode_toggle())
    }

    pub fn focus(&self, direction: Direction) -> Result<Response, GlazeWmError> {
        self.runtime.block_on(self.inner.focus(direction))
    }

    pub fn focus_workspace(
        &self,
        workspace: impl Into<WorkspaceTarget>,
    ) -> Result<Response, GlazeWmError> {
        self.runtime.block_on(self.inner.focus_workspace(workspace))
    }

    pub fn move_to_workspace(
        &self,
        workspace: impl Into<WorkspaceTarget>,
    ) -> Result<Response, GlazeWmError> {
        self.runtime
            .block_on(self.inner.move_to_workspace(workspace))
    }

    pub fn tiling_direction(&self, direction: TilingDirection) -> Result<Response, GlazeWmError> {
        self.runtime.block_on(self.inner.tiling_direction(direction))
    }

    pub fn reload_config(&self) -> Result<Response, GlazeWmError> {
        self.runtime.block_on(self.inner.reload_config())
    }

    pub fn exit_wm(&self) -> Result<Response, GlazeWmError> {
        self.runtime.block_on(self.inner.exit_wm())
    }

    pub fn ignore(&self) -> Result<Response, GlazeWmError> {
        self.runtime.block_on(self.inner.ignore())
    }

    pub fn resize_borders(&self, delta: BorderDelta) -> Result<Response, GlazeWmError> {
        self.runtime.block_on(self.inner.resize_borders(delta))
    }

    pub fn resize(&self, dimension: Dimension, amount: &str) -> Result<Response, GlazeWmError> {
        self.runtime.block_on(self.inner.resize(dimension, amount))
    }

    pub fn command(&self, cmd: &str) -> Result<Response, GlazeWmError> {
        self.runtime.block_on(self.inner.command(cmd))
    }

    pub fn send_raw(&self, message: &str) -> Result<Response, GlazeWmError> {
        self.runtime.block_on(self.inner.send_raw(message))
    }
}
