//! Pointer input and event routing
//!
//! Events reach a window at two scopes:
//!
//! - **window**: the window's own element tree. Routes are scoped by a
//!   [`Selector`](crate::view::Selector) and delegated from the target up
//!   to the root, so a title button can stop the title bar from also
//!   starting a drag.
//! - **space**: the container the window is mounted into. Pointer move and
//!   release are observed there so a drag or resize keeps tracking when the
//!   pointer leaves the window.

mod event;
mod router;

pub use event::{EventType, PointerEvent};
pub use router::{dispatch, dispatch_direct, Handler, Route};
