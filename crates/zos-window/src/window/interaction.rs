//! Drag and resize sessions
//!
//! A session starts with a pointer press on the window (title bar for a
//! drag, resize handle for a resize) and continues with pointer motion
//! observed by the container, so it keeps tracking when the pointer leaves
//! the window. The next release anywhere in the container ends it.
//!
//! The two sessions key off independent fields. They never overlap in
//! practice because the title bar and the resize handle are disjoint and
//! input is single-pointer.

use tracing::debug;

use super::window::Window;
use crate::math::{Point, Size};
use crate::view::class;

impl Window {
    /// Start a drag session with the pointer at `pointer` (container space)
    ///
    /// Ignored unless the window is enabled and movable. Returns whether a
    /// session started.
    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        if !self.flags.enabled || !self.flags.movable {
            return false;
        }

        let offset = self.to_local(pointer);
        debug!(?pointer, ?offset, "drag start");
        self.moving = Some(offset);
        self.view.add_class(class::MOVE);
        true
    }

    /// Start a resize session with the pointer at `pointer` (container space)
    ///
    /// Guarded by `movable`, not `resizable`: a window that cannot be moved
    /// cannot be resized by its handle, while `resizable` is not consulted.
    pub fn begin_resize(&mut self, pointer: Point) -> bool {
        if !self.flags.enabled || !self.flags.movable {
            return false;
        }

        let delta = Size::new(
            self.width().wrapping_sub(pointer.x),
            self.height().wrapping_sub(pointer.y),
        );
        debug!(?pointer, ?delta, "resize start");
        self.resizing = Some(delta);
        self.view.add_class(class::RESIZING);
        true
    }

    /// Continue any active session with the pointer at `pointer`
    pub fn track_pointer(&mut self, pointer: Point) {
        if let Some(offset) = self.moving {
            let target = pointer - offset;
            self.move_to(target.x, target.y);
        }

        if let Some(delta) = self.resizing {
            self.resize(
                pointer.x.wrapping_add(delta.width),
                pointer.y.wrapping_add(delta.height),
            );
        }
    }

    /// End any active session
    ///
    /// Ending a resize also drops the captured restore geometry.
    pub fn release_pointer(&mut self) {
        if self.moving.take().is_some() {
            self.view.remove_class(class::MOVE);
            debug!(position = ?self.position(), "drag end");
        }

        if self.resizing.take().is_some() {
            self.view.remove_class(class::RESIZING);
            self.restore = None;
            debug!(size = ?self.size(), "resize end");
        }
    }
}
