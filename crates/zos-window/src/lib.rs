//! Window Core for Zero OS
//!
//! This crate models a single desktop window:
//! - Geometry (position, size, stacking order) read live from the rendered view
//! - Lifecycle transitions (open, close, maximize, minimize, focus) gated on
//!   visual-effect completion
//! - Drag and resize sessions driven by pointer events
//! - Restore snapshots captured when a maximize or minimize begins
//!
//! ## Architecture
//!
//! - [`math`]: Integer geometry types (`Point`, `Size`)
//! - [`view`]: The rendering capability the core drives, plus a headless `MemoryView`
//! - [`transition`]: One-shot effect completion tokens
//! - [`signal`]: Outward notifications for the window manager
//! - [`input`]: Pointer events and declarative route tables
//! - [`window`]: The `Window` entity
//! - [`space`]: Containers and their container-scoped event registry
//!
//! ```text
//! host pointer events ──► Window::dispatch ─────┐   (title, buttons, resize handle)
//!                                               ├──► sessions / lifecycle ──► View
//! host pointer events ──► Space::dispatch ──────┘   (move, release anywhere)
//!                                                         │
//!                                                         └──► signals ──► window manager
//! ```
//!
//! ## Example
//!
//! ```rust
//! use zos_window::{PointerEvent, Part, Space, Window, WindowConfig};
//!
//! let window = Window::new(WindowConfig {
//!     title: "Notes".to_string(),
//!     ..Default::default()
//! })
//! .into_handle();
//!
//! let mut space = Space::new(1);
//! Window::attach(&window, &mut space);
//! window.borrow_mut().open();
//!
//! // Drag by the title bar
//! window.borrow_mut().dispatch(&mut PointerEvent::mouse_down(Part::Title, 20, 10));
//! space.pointer_move(120, 60);
//! space.pointer_up(120, 60);
//!
//! assert_eq!(window.borrow().x(), 100);
//! assert_eq!(window.borrow().y(), 50);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Explicit transitions**: Flags change through `Window::transition`, never a hidden setter
//! 3. **Host-driven time**: Effect completion is delivered by the host, never polled

pub mod input;
pub mod math;
pub mod signal;
pub mod space;
pub mod transition;
pub mod view;
pub mod window;

mod error;

pub use error::{WindowError, WindowResult};
pub use input::{EventType, PointerEvent, Route};
pub use math::{Point, Size};
pub use signal::{Emitter, Signal, SignalKind};
pub use space::{Container, EventScope, Mount, Space, SpaceId, SubscriptionId};
pub use transition::{EffectKind, EffectToken};
pub use view::{ContentNode, MemoryView, Part, Selector, View};
pub use window::{
    Flag, Flags, Restore, SpaceBinding, Window, WindowConfig, WindowHandle, WindowState,
};
