//! Window entity and its geometry model

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use tracing::trace;

use super::attach::SpaceBinding;
use super::config::{WindowConfig, DEFAULT_Z};
use super::flags::{Flag, Flags};
use super::lifecycle::Restore;
use crate::math::{Point, Size};
use crate::signal::{Emitter, Signal, SignalKind};
use crate::space::{Mount, SpaceId};
use crate::transition::{Effects, PendingEffect};
use crate::view::{ContentNode, MemoryView, Style, View};

/// Shared handle to a window mounted into a space
///
/// Spaces hold windows through this handle so container-scoped pointer
/// events can reach them.
pub type WindowHandle = Rc<RefCell<Window>>;

/// A movable, resizable, focusable window
///
/// Geometry is not cached: every getter reads the rendered view, so it
/// always reports what is on screen. Flags change only through
/// [`Window::transition`] and the lifecycle operations built on it.
#[derive(Debug)]
pub struct Window {
    pub(crate) view: Box<dyn View>,
    title: String,
    classname: String,
    pub(crate) flags: Flags,
    /// Pointer offset from the window origin while dragging
    pub(crate) moving: Option<Point>,
    /// Size minus pointer position while resizing
    pub(crate) resizing: Option<Size>,
    pub(crate) restore: Option<Restore>,
    pub(crate) effects: Effects,
    signals: Emitter,
    pub(crate) binding: Option<SpaceBinding>,
    pub(crate) mount: Mount,
}

impl Window {
    /// Create a window rendered into a headless [`MemoryView`]
    pub fn new(config: WindowConfig) -> Self {
        Self::with_view(config, Box::new(MemoryView::new()))
    }

    /// Create a window rendered into the given view
    ///
    /// Flags start at their defaults without running any transition, so
    /// construction emits nothing.
    pub fn with_view(config: WindowConfig, view: Box<dyn View>) -> Self {
        let width = config.effective_width();
        let height = config.effective_height();

        let mut window = Self {
            view,
            title: config.title.clone(),
            classname: config.classname.clone(),
            flags: Flags::default(),
            moving: None,
            resizing: None,
            restore: None,
            effects: Effects::new(),
            signals: Emitter::new(),
            binding: None,
            mount: Mount::default(),
        };

        window.view.set_title(&config.title);
        for class in config.classname.split_whitespace() {
            window.view.add_class(class);
        }
        if let Some(content) = config.content.filter(|c| !c.is_empty()) {
            window.append(content);
        }

        window
            .resize(width, height)
            .move_to(config.x, config.y)
            .set_z(DEFAULT_Z);
        window
    }

    /// Wrap the window in a shared handle for mounting into a space
    pub fn into_handle(self) -> WindowHandle {
        Rc::new(RefCell::new(self))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn classname(&self) -> &str {
        &self.classname
    }

    /// The rendered view
    pub fn view(&self) -> &dyn View {
        self.view.as_ref()
    }

    /// Nodes appended to the content region
    pub fn content(&self) -> &[ContentNode] {
        self.view.content()
    }

    /// Append a node into the content region
    pub fn append(&mut self, node: impl Into<ContentNode>) -> &mut Self {
        self.view.append_content(node.into());
        self
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    pub fn width(&self) -> i32 {
        to_px(self.view.width())
    }

    pub fn set_width(&mut self, value: i32) -> &mut Self {
        self.view.set_width(value);
        self
    }

    pub fn height(&self) -> i32 {
        to_px(self.view.height())
    }

    pub fn set_height(&mut self, value: i32) -> &mut Self {
        self.view.set_height(value);
        self
    }

    /// Horizontal offset from the container origin
    pub fn x(&self) -> i32 {
        to_px(self.view.style(Style::Left))
    }

    pub fn set_x(&mut self, value: i32) -> &mut Self {
        self.view.set_style(Style::Left, value);
        self
    }

    /// Vertical offset from the container origin
    pub fn y(&self) -> i32 {
        to_px(self.view.style(Style::Top))
    }

    pub fn set_y(&mut self, value: i32) -> &mut Self {
        self.view.set_style(Style::Top, value);
        self
    }

    /// Stacking order
    pub fn z(&self) -> i32 {
        to_px(self.view.style(Style::ZIndex))
    }

    pub fn set_z(&mut self, value: i32) -> &mut Self {
        self.view.set_style(Style::ZIndex, value);
        self
    }

    pub fn position(&self) -> Point {
        Point::new(self.x(), self.y())
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Set width and height
    pub fn resize(&mut self, width: i32, height: i32) -> &mut Self {
        trace!(width, height, "resize");
        self.set_width(width).set_height(height)
    }

    /// Set x and y
    pub fn move_to(&mut self, x: i32, y: i32) -> &mut Self {
        trace!(x, y, "move");
        self.set_x(x).set_y(y)
    }

    /// Convert a container-space point into window-local space
    pub fn to_local(&self, coord: Point) -> Point {
        coord - self.position()
    }

    /// Convert a window-local point into container space
    pub fn to_global(&self, coord: Point) -> Point {
        coord + self.position()
    }

    // =========================================================================
    // Flags and session state
    // =========================================================================

    /// Snapshot of every flag
    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn flag(&self, flag: Flag) -> bool {
        self.flags.get(flag)
    }

    pub fn is_opened(&self) -> bool {
        self.flags.opened
    }

    pub fn is_closed(&self) -> bool {
        self.flags.closed
    }

    pub fn is_enabled(&self) -> bool {
        self.flags.enabled
    }

    pub fn is_active(&self) -> bool {
        self.flags.active
    }

    pub fn is_maximized(&self) -> bool {
        self.flags.maximized
    }

    pub fn is_minimized(&self) -> bool {
        self.flags.minimized
    }

    pub fn is_movable(&self) -> bool {
        self.flags.movable
    }

    pub fn is_resizable(&self) -> bool {
        self.flags.resizable
    }

    /// Whether a drag session is in progress
    pub fn is_moving(&self) -> bool {
        self.moving.is_some()
    }

    /// Whether a resize session is in progress
    pub fn is_resizing(&self) -> bool {
        self.resizing.is_some()
    }

    /// Whether [`Window::restore`] would change anything
    pub fn has_restore(&self) -> bool {
        self.restore.is_some()
    }

    /// Space this window was last attached to
    pub fn space(&self) -> Option<SpaceId> {
        self.binding.map(|b| b.space)
    }

    /// Effects waiting for their completion notification
    pub fn pending_effects(&self) -> &[PendingEffect] {
        self.effects.pending()
    }

    /// Serializable snapshot of geometry, flags and session state
    pub fn state(&self) -> WindowState {
        WindowState {
            title: self.title.clone(),
            x: self.x(),
            y: self.y(),
            z: self.z(),
            width: self.width(),
            height: self.height(),
            flags: self.flags,
            moving: self.is_moving(),
            resizing: self.is_resizing(),
        }
    }

    // =========================================================================
    // Signals
    // =========================================================================

    /// Subscribe to a signal
    pub fn on<F>(&mut self, kind: SignalKind, listener: F) -> &mut Self
    where
        F: FnMut(&mut Window, &Signal) + 'static,
    {
        self.signals.on(kind, listener);
        self
    }

    /// Deliver a signal to listeners, passing them this window
    ///
    /// Listeners subscribed while the signal is being delivered are kept and
    /// run from the next signal on.
    pub(crate) fn emit(&mut self, signal: Signal) {
        let mut signals = std::mem::take(&mut self.signals);
        signals.emit(self, &signal);
        let mut added = std::mem::replace(&mut self.signals, signals);
        self.signals.append(&mut added);
    }
}

/// Coerce a rendered length to whole pixels, truncating toward zero
fn to_px(value: f64) -> i32 {
    value as i32
}

/// Serializable view of a window
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WindowState {
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub width: i32,
    pub height: i32,
    pub flags: Flags,
    pub moving: bool,
    pub resizing: bool,
}
