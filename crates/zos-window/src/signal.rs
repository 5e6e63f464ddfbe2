//! Outward notifications
//!
//! A window never arbitrates z-order or focus across windows. It announces
//! what happened to it and the surrounding window manager reacts. Listeners
//! receive the emitting window mutably, so a manager can restack or resize
//! it in place; compare with [`std::ptr::eq`] to tell windows apart.
//!
//! Listeners run while the window is mutably borrowed: reach the window
//! through the listener argument, never through its
//! [`WindowHandle`](crate::WindowHandle). Signals raised from inside a
//! listener are not delivered.

use crate::input::PointerEvent;
use crate::window::Window;

/// A notification emitted by a window
#[derive(Clone, Debug, PartialEq)]
pub enum Signal {
    /// The window was clicked; carries the originating event
    Select(PointerEvent),
    /// The window became active
    Focus,
    /// The window stopped being active
    Blur,
    /// The window was opened
    Open,
    /// The window was closed
    Close,
    /// The window was maximized
    Maximize,
    /// The window was minimized
    Minimize,
    /// The window left the maximized or minimized state
    Restore,
}

impl Signal {
    /// The kind used to subscribe to this signal
    pub fn kind(&self) -> SignalKind {
        match self {
            Signal::Select(_) => SignalKind::Select,
            Signal::Focus => SignalKind::Focus,
            Signal::Blur => SignalKind::Blur,
            Signal::Open => SignalKind::Open,
            Signal::Close => SignalKind::Close,
            Signal::Maximize => SignalKind::Maximize,
            Signal::Minimize => SignalKind::Minimize,
            Signal::Restore => SignalKind::Restore,
        }
    }
}

/// Signal discriminant, used for subscriptions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Select,
    Focus,
    Blur,
    Open,
    Close,
    Maximize,
    Minimize,
    Restore,
}

impl SignalKind {
    /// Event name as seen by window manager integrations
    pub fn name(self) -> &'static str {
        match self {
            SignalKind::Select => "select",
            SignalKind::Focus => "focus",
            SignalKind::Blur => "blur",
            SignalKind::Open => "open",
            SignalKind::Close => "close",
            SignalKind::Maximize => "maximize",
            SignalKind::Minimize => "minimize",
            SignalKind::Restore => "restore",
        }
    }
}

/// Signal listener
pub type Listener = Box<dyn FnMut(&mut Window, &Signal)>;

/// Listener registry owned by a window
#[derive(Default)]
pub struct Emitter {
    listeners: Vec<(SignalKind, Listener)>,
}

impl Emitter {
    /// Create an emitter with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to one kind of signal
    pub fn on<F>(&mut self, kind: SignalKind, listener: F)
    where
        F: FnMut(&mut Window, &Signal) + 'static,
    {
        self.listeners.push((kind, Box::new(listener)));
    }

    /// Move every listener of `other` after this emitter's own
    pub fn append(&mut self, other: &mut Emitter) {
        self.listeners.append(&mut other.listeners);
    }

    /// Deliver a signal to its listeners in subscription order
    ///
    /// Returns the number of listeners invoked.
    pub fn emit(&mut self, window: &mut Window, signal: &Signal) -> usize {
        let kind = signal.kind();
        let mut delivered = 0;
        for (_, listener) in self.listeners.iter_mut().filter(|(k, _)| *k == kind) {
            listener(&mut *window, signal);
            delivered += 1;
        }
        delivered
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
