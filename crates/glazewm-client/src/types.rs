//! Wire types for GlazeWM IPC data
//!
//! GlazeWM replies use camel-case JSON keys and loosely typed containers.
//! The structs here form the deserialization boundary: every camel-case wire
//! key is mapped onto its snake-case field through an explicit
//! `#[serde(rename)]` attribute, so the wire-to-model mapping is a fixed
//! table rather than implicit coercion.
//!
//! The enums at the bottom are the command vocabulary. They are never
//! transmitted as JSON; their `Display` impls yield the exact literals the
//! command grammar expects.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// One decoded server reply.
///
/// Every exchange produces exactly one of these. `success` reports whether
/// the peer accepted the message; `error` is populated when it did not.
/// `client_message` echoes the message that was sent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Response {
    pub success: bool,
    #[serde(rename = "messageType")]
    pub message_type: String,
    pub data: Option<ResponseData>,
    pub error: Option<String>,
    #[serde(rename = "clientMessage")]
    pub client_message: String,
}

/// Payload of a reply: a plain string, or the list returned by state queries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ResponseData {
    Text(String),
    Items(Vec<Value>),
}

/// Rectangle a window would occupy when toggled to floating layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FloatingPlacement {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Per-edge adjustment applied to a window's border relative to its
/// nominal bounds.
///
/// Also the argument type of
/// [`GlazeClient::resize_borders`](crate::GlazeClient::resize_borders);
/// `Default` leaves every edge at zero so callers set only the edges they
/// care about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct BorderDelta {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// A managed window as reported by the `windows` query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Window {
    pub id: String,
    /// Container type discriminator (wire key `type`).
    #[serde(rename = "type")]
    pub container_type: String,
    /// Native OS window handle.
    pub handle: i64,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    #[serde(rename = "focusIndex")]
    pub focus_index: i32,
    #[serde(rename = "floatingPlacement")]
    pub floating_placement: FloatingPlacement,
    #[serde(rename = "borderDelta")]
    pub border_delta: BorderDelta,
    /// Windows nest no further container in practice, so elements stay
    /// untyped.
    pub children: Vec<Value>,
}

/// A workspace and the windows it contains.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Workspace {
    pub id: String,
    #[serde(rename = "type")]
    pub container_type: String,
    pub name: String,
    pub layout: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    #[serde(rename = "focusIndex")]
    pub focus_index: i32,
    #[serde(rename = "sizePercentage")]
    pub size_percentage: i32,
    pub children: Vec<Window>,
}

/// A monitor and the workspaces it hosts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Monitor {
    pub id: String,
    #[serde(rename = "type")]
    pub container_type: String,
    #[serde(rename = "deviceName")]
    pub device_name: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    #[serde(rename = "focusIndex")]
    pub focus_index: i32,
    pub children: Vec<Workspace>,
}

/// Direction of a focus movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Down,
    Up,
    Right,
}

impl Direction {
    /// The literal used in the command grammar.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target state for `set <state>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowState {
    Maximized,
    Minimized,
    Floating,
    Tiling,
}

impl WindowState {
    pub fn as_str(self) -> &'static str {
        match self {
            WindowState::Maximized => "maximized",
            WindowState::Minimized => "minimized",
            WindowState::Floating => "floating",
            WindowState::Tiling => "tiling",
        }
    }
}

impl fmt::Display for WindowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Argument of `tiling direction <direction>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TilingDirection {
    Horizontal,
    Vertical,
    Toggle,
}

impl TilingDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TilingDirection::Horizontal => "horizontal",
            TilingDirection::Vertical => "vertical",
            TilingDirection::Toggle => "toggle",
        }
    }
}

impl fmt::Display for TilingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis selector for the size commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Width => "width",
            Dimension::Height => "height",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workspace selector: a numeric index, or the most recently focused one.
///
/// `From<u32>` lets call sites pass a bare index:
///
/// ```ignore
/// client.focus_workspace(3).await?;
/// client.focus_workspace(WorkspaceTarget::Recent).await?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkspaceTarget {
    Index(u32),
    Recent,
}

impl From<u32> for WorkspaceTarget {
    fn from(index: u32) -> Self {
        WorkspaceTarget::Index(index)
    }
}

impl fmt::Display for WorkspaceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkspaceTarget::Index(index) => write!(f, "{index}"),
            WorkspaceTarget::Recent => f.write_str("recent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Wire-shaped window object with the given id and focus index
    fn wire_window(id: &str, focus_index: i32) -> Value {
        json!({
            "id": id,
            "type": "window",
            "handle": 197_686_i64,
            "x": 10,
            "y": 20,
            "width": 800,
            "height": 600,
            "focusIndex": focus_index,
            "floatingPlacement": {
                "left": 100, "top": 50, "right": 900, "bottom": 650,
                "x": 100, "y": 50, "width": 800, "height": 600
            },
            "borderDelta": { "left": 7, "top": 0, "right": 7, "bottom": 7 },
            "children": []
        })
    }

    #[test]
    fn test_window_decodes_camel_case_keys() {
        let window: Window = serde_json::from_value(wire_window("w1", 2)).unwrap();

        assert_eq!(window.id, "w1");
        assert_eq!(window.container_type, "window");
        assert_eq!(window.handle, 197_686);
        assert_eq!(window.focus_index, 2);
        assert_eq!(window.floating_placement.width, 800);
        assert_eq!(window.border_delta.left, 7);
        assert!(window.children.is_empty());
    }

    #[test]
    fn test_workspace_decodes_nested_windows() {
        let workspace: Workspace = serde_json::from_value(json!({
            "id": "ws1",
            "type": "workspace",
            "name": "1",
            "layout": "horizontal",
            "x": 0, "y": 0, "width": 1920, "height": 1040,
            "focusIndex": 0,
            "sizePercentage": 100,
            "children": [wire_window("w1", 0)]
        }))
        .unwrap();

        assert_eq!(workspace.size_percentage, 100);
        assert_eq!(workspace.children.len(), 1);
        assert_eq!(workspace.children[0].id, "w1");
    }

    #[test]
    fn test_monitor_decodes_device_name() {
        let monitor: Monitor = serde_json::from_value(json!({
            "id": "m1",
            "type": "monitor",
            "deviceName": r"\\.\DISPLAY1",
            "x": 0, "y": 0, "width": 1920, "height": 1080,
            "focusIndex": 0,
            "children": []
        }))
        .unwrap();

        assert_eq!(monitor.device_name, r"\\.\DISPLAY1");
        assert!(monitor.children.is_empty());
    }

    #[test]
    fn test_window_rejects_missing_required_field() {
        let mut raw = wire_window("w1", 0);
        raw.as_object_mut().unwrap().remove("borderDelta");

        assert!(serde_json::from_value::<Window>(raw).is_err());
    }

    #[test]
    fn test_response_data_distinguishes_text_and_items() {
        let response: Response = serde_json::from_value(json!({
            "success": true,
            "messageType": "client_response",
            "data": "subscribed",
            "error": null,
            "clientMessage": "subscribe window_focus"
        }))
        .unwrap();
        assert_eq!(response.data, Some(ResponseData::Text("subscribed".into())));

        let response: Response = serde_json::from_value(json!({
            "success": true,
            "messageType": "client_response",
            "data": [1, 2],
            "error": null,
            "clientMessage": "windows"
        }))
        .unwrap();
        assert!(matches!(response.data, Some(ResponseData::Items(ref items)) if items.len() == 2));

        let response: Response = serde_json::from_value(json!({
            "success": true,
            "messageType": "command_success",
            "data": null,
            "error": null,
            "clientMessage": "focus left"
        }))
        .unwrap();
        assert_eq!(response.data, None);
    }

    #[test]
    fn test_direction_literals() {
        assert_eq!(Direction::Left.to_string(), "left");
        assert_eq!(Direction::Down.to_string(), "down");
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Right.to_string(), "right");
    }

    #[test]
    fn test_window_state_literals() {
        assert_eq!(WindowState::Maximized.to_string(), "maximized");
        assert_eq!(WindowState::Minimized.to_string(), "minimized");
        assert_eq!(WindowState::Floating.to_string(), "floating");
        assert_eq!(WindowState::Tiling.to_string(), "tiling");
    }

    #[test]
    fn test_tiling_direction_and_dimension_literals() {
        assert_eq!(TilingDirection::Horizontal.to_string(), "horizontal");
        assert_eq!(TilingDirection::Vertical.to_string(), "vertical");
        assert_eq!(TilingDirection::Toggle.to_string(), "toggle");
        assert_eq!(Dimension::Width.to_string(), "width");
        assert_eq!(Dimension::Height.to_string(), "height");
    }

    #[test]
    fn test_workspace_target_renders_index_or_recent() {
        assert_eq!(WorkspaceTarget::from(3).to_string(), "3");
        assert_eq!(WorkspaceTarget::Recent.to_string(), "recent");
    }

    #[test]
    fn test_border_delta_defaults_to_zero() {
        let delta = BorderDelta {
            top: 5,
            ..BorderDelta::default()
        };

        assert_eq!(delta.top, 5);
        assert_eq!(delta.left, 0);
        assert_eq!(delta.right, 0);
        assert_eq!(delta.bottom, 0);
    }
}
