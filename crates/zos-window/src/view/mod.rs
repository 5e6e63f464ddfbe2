//! Rendering capability consumed by the window core
//!
//! The core never creates or styles elements itself. It drives a [`View`]:
//! class toggling, visibility, geometry style and the content region.
//! [`MemoryView`] is a headless implementation so the whole state machine
//! runs and tests without a browser.

mod memory;
mod part;

pub use memory::MemoryView;
pub use part::{Part, Selector};

use serde::{Deserialize, Serialize};

/// Class names the core toggles on the window root element
pub mod class {
    /// Window has focus
    pub const ACTIVE: &str = "active";
    /// Window ignores focus, drag, resize and title-bar actions
    pub const DISABLED: &str = "disabled";
    /// Open animation in flight
    pub const OPENING: &str = "opening";
    /// Close animation in flight
    pub const CLOSING: &str = "closing";
    /// Close animation finished
    pub const CLOSED: &str = "closed";
    /// Maximize transition in flight (spelling is part of the stylesheet contract)
    pub const MAXIMIZING: &str = "maximazing";
    /// Minimize transition in flight
    pub const MINIMIZING: &str = "minimizing";
    /// Drag session active
    pub const MOVE: &str = "move";
    /// Resize session active
    pub const RESIZING: &str = "resizing";
}

/// Style properties backing the window position and stacking order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Style {
    /// `left`, the x offset from the container origin
    Left,
    /// `top`, the y offset from the container origin
    Top,
    /// `z-index`
    ZIndex,
}

/// An externally supplied content node, appended into the content region
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentNode(String);

impl ContentNode {
    /// Create a content node from markup
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The node's markup
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the node carries no markup
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ContentNode {
    fn from(markup: &str) -> Self {
        Self::new(markup)
    }
}

impl From<String> for ContentNode {
    fn from(markup: String) -> Self {
        Self(markup)
    }
}

/// The rendered window element tree
///
/// Geometry getters report what is rendered, which may be fractional;
/// the window coerces them to integers.
pub trait View: std::fmt::Debug {
    /// Set the title bar text
    fn set_title(&mut self, title: &str);

    /// Add a class to the root element (no-op if present)
    fn add_class(&mut self, class: &str);

    /// Remove a class from the root element (no-op if absent)
    fn remove_class(&mut self, class: &str);

    /// Whether the root element carries a class
    fn has_class(&self, class: &str) -> bool;

    /// Make the element visible
    fn show(&mut self);

    /// Hide the element
    fn hide(&mut self);

    /// Whether the element is visible
    fn is_visible(&self) -> bool;

    /// Rendered width in pixels
    fn width(&self) -> f64;

    /// Apply a width in pixels
    fn set_width(&mut self, value: i32);

    /// Rendered height in pixels
    fn height(&self) -> f64;

    /// Apply a height in pixels
    fn set_height(&mut self, value: i32);

    /// Computed value of a positional style property
    fn style(&self, property: Style) -> f64;

    /// Apply a positional style property
    fn set_style(&mut self, property: Style, value: i32);

    /// Append a node into the cached content region
    fn append_content(&mut self, node: ContentNode);

    /// Nodes appended to the content region, in order
    fn content(&self) -> &[ContentNode];
}
