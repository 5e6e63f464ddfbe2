//! Containers windows are mounted into
//!
//! A window's drag and resize sessions continue on pointer motion anywhere
//! in its container, not just over the window. The container exposes that
//! through an [`EventScope`]: windows register into it when attached and
//! the container forwards every move and release to each registration, in
//! registration order.
//!
//! Windows mounted into the same space share its scope. Each session only
//! mutates its own window, so no coordination between windows happens here;
//! focus and z-order arbitration belong to the window manager.
//!
//! A window is mounted into one container at a time. It keeps a [`Mount`]
//! back-reference to its container's children and leaves them when mounted
//! elsewhere; its registration in the old event scope stays.

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use tracing::{trace, warn};

use crate::input::PointerEvent;
use crate::window::{Window, WindowHandle};

/// Unique space identifier
pub type SpaceId = u32;

/// Identifies one window registration in an [`EventScope`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Back-reference from a mounted window to its container's children
#[derive(Clone, Debug, Default)]
pub struct Mount(Weak<RefCell<Vec<WindowHandle>>>);

impl Mount {
    /// Take the window out of the children it was mounted into
    ///
    /// Returns false if it was not there, or the container is gone or busy.
    pub fn unmount(&self, window: &WindowHandle) -> bool {
        let Some(children) = self.0.upgrade() else {
            return false;
        };
        let Ok(mut children) = children.try_borrow_mut() else {
            warn!("container busy, window left mounted");
            return false;
        };
        let before = children.len();
        children.retain(|w| !Rc::ptr_eq(w, window));
        children.len() != before
    }
}

/// A surface windows can be attached to
pub trait Container {
    fn id(&self) -> SpaceId;

    /// Mount the window's element into this container
    ///
    /// Runs while the window is mutably borrowed. Returns the back-reference
    /// the window keeps so that mounting it elsewhere takes it out of here.
    fn append(&mut self, window: &WindowHandle) -> Mount;

    /// Unmount a window; returns false if it was not mounted here
    fn remove(&mut self, window: &WindowHandle) -> bool;

    /// Container-scoped pointer event registry, if this container has one
    ///
    /// Attaching to a container without one is refused.
    fn event_scope(&mut self) -> Option<&mut EventScope>;
}

/// Container-scoped pointer event registry
///
/// Holds windows weakly: a dropped window stops receiving events without
/// having to unsubscribe.
#[derive(Debug, Default)]
pub struct EventScope {
    next_id: u64,
    observers: Vec<(SubscriptionId, Weak<RefCell<Window>>)>,
}

impl EventScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a window for container-scoped routes
    pub fn observe(&mut self, window: &WindowHandle) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Rc::downgrade(window)));
        id
    }

    /// Remove a registration; returns false if it was not present
    pub fn unobserve(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Number of registrations whose window is still alive
    pub fn len(&self) -> usize {
        self.observers
            .iter()
            .filter(|(_, window)| window.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forward an event to every registered window
    ///
    /// Each window gets its own copy of the event. A window that is already
    /// borrowed (the event was raised from inside one of its own handlers)
    /// is skipped. Returns the number of handlers that ran.
    pub fn dispatch(&mut self, event: &PointerEvent) -> usize {
        self.observers.retain(|(_, window)| window.strong_count() > 0);

        let mut fired = 0;
        for (id, observer) in &self.observers {
            let Some(window) = observer.upgrade() else {
                continue;
            };
            let Ok(mut window) = window.try_borrow_mut() else {
                warn!(subscription = id.0, "window busy, skipping space event");
                continue;
            };
            let mut event = event.clone();
            fired += window.dispatch_space(&mut event);
        }
        trace!(event = ?event.event_type, fired, "space dispatch");
        fired
    }
}

/// A container surface with its own event scope
#[derive(Debug)]
pub struct Space {
    id: SpaceId,
    children: Rc<RefCell<Vec<WindowHandle>>>,
    scope: EventScope,
}

impl Space {
    pub fn new(id: SpaceId) -> Self {
        Self {
            id,
            children: Rc::default(),
            scope: EventScope::new(),
        }
    }

    /// Mounted windows, in mount order
    pub fn windows(&self) -> Ref<'_, [WindowHandle]> {
        Ref::map(self.children.borrow(), Vec::as_slice)
    }

    /// Whether the window is mounted here
    pub fn contains(&self, window: &WindowHandle) -> bool {
        self.children.borrow().iter().any(|w| Rc::ptr_eq(w, window))
    }

    fn mount(&self) -> Mount {
        Mount(Rc::downgrade(&self.children))
    }

    pub fn scope(&self) -> &EventScope {
        &self.scope
    }

    /// Forward a container-level pointer event to attached windows
    pub fn dispatch(&mut self, event: &PointerEvent) -> usize {
        self.scope.dispatch(event)
    }

    /// Pointer moved to `(x, y)` somewhere over the space
    pub fn pointer_move(&mut self, x: i32, y: i32) -> usize {
        self.dispatch(&PointerEvent::mouse_move(x, y))
    }

    /// Pointer released at `(x, y)` somewhere over the space
    pub fn pointer_up(&mut self, x: i32, y: i32) -> usize {
        self.dispatch(&PointerEvent::mouse_up(x, y))
    }
}

impl Container for Space {
    fn id(&self) -> SpaceId {
        self.id
    }

    fn append(&mut self, window: &WindowHandle) -> Mount {
        if !self.contains(window) {
            self.children.borrow_mut().push(Rc::clone(window));
        }
        self.mount()
    }

    fn remove(&mut self, window: &WindowHandle) -> bool {
        self.mount().unmount(window)
    }

    fn event_scope(&mut self) -> Option<&mut EventScope> {
        Some(&mut self.scope)
    }
}
