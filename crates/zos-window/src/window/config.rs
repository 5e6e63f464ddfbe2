//! Window construction configuration

use serde::Deserialize;

use crate::error::WindowResult;
use crate::view::ContentNode;

/// Default window title
pub const DEFAULT_TITLE: &str = "Untitled Window";
/// Default window width in pixels
pub const DEFAULT_WIDTH: i32 = 400;
/// Default window height in pixels
pub const DEFAULT_HEIGHT: i32 = 200;
/// Stacking order every window starts at
pub const DEFAULT_Z: i32 = 10000;

/// Configuration for creating a new window
///
/// Every field is optional in serialized form. A zero width or height is
/// treated as unset and falls back to the default.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Extra classes for the root element, whitespace separated
    pub classname: String,
    pub width: i32,
    pub height: i32,
    pub x: i32,
    pub y: i32,
    /// Node appended into the content region at construction
    pub content: Option<ContentNode>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            classname: String::new(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            x: 0,
            y: 0,
            content: None,
        }
    }
}

impl WindowConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> WindowResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Width to apply, falling back to the default when unset
    pub(crate) fn effective_width(&self) -> i32 {
        if self.width == 0 {
            DEFAULT_WIDTH
        } else {
            self.width
        }
    }

    /// Height to apply, falling back to the default when unset
    pub(crate) fn effective_height(&self) -> i32 {
        if self.height == 0 {
            DEFAULT_HEIGHT
        } else {
            self.height
        }
    }
}
