//! Window entity
//!
//! Geometry model, lifecycle state machine, drag/resize sessions and the
//! route tables that feed them.

mod attach;
mod config;
mod events;
mod flags;
mod interaction;
mod lifecycle;
#[allow(clippy::module_inception)]
mod window;

pub use attach::SpaceBinding;
pub use config::{WindowConfig, DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH, DEFAULT_Z};
pub use events::{SPACE_ROUTES, WINDOW_ROUTES};
pub use flags::{Flag, Flags};
pub use lifecycle::Restore;
pub use window::{Window, WindowHandle, WindowState};
