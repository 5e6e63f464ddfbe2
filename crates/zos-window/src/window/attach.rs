//! Mounting a window into a space

use tracing::{debug, error};

use super::window::{Window, WindowHandle};
use crate::error::{WindowError, WindowResult};
use crate::space::{Container, SpaceId, SubscriptionId};

/// Where a window was last attached
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpaceBinding {
    pub space: SpaceId,
    /// Registration of the window's space-scoped routes
    pub subscription: SubscriptionId,
}

impl Window {
    /// Mount a window into a container and bind its space-scoped routes
    ///
    /// A container without an event scope is refused, as is a window that is
    /// borrowed elsewhere: the failure is logged and nothing is mounted.
    /// Attaching elsewhere later takes the window out of the previous
    /// container but leaves its event scope bound, so it keeps forwarding
    /// pointer events until the caller removes the old subscription.
    pub fn attach(window: &WindowHandle, container: &mut dyn Container) {
        if let Err(err) = try_attach(window, container) {
            error!(%err, "attach aborted");
        }
    }

    /// The space and subscription of the last successful attach
    pub fn binding(&self) -> Option<SpaceBinding> {
        self.binding
    }
}

fn try_attach(window: &WindowHandle, container: &mut dyn Container) -> WindowResult<SpaceBinding> {
    let space = container.id();
    if container.event_scope().is_none() {
        return Err(WindowError::MissingEventScope { space });
    }
    let mut w = window
        .try_borrow_mut()
        .map_err(|_| WindowError::WindowBusy { space })?;

    if w.mount.unmount(window) {
        debug!(from = ?w.space(), to = space, "left previous space");
    }
    w.mount = container.append(window);
    let subscription = container
        .event_scope()
        .map(|scope| scope.observe(window))
        .ok_or(WindowError::MissingEventScope { space })?;

    let binding = SpaceBinding {
        space,
        subscription,
    };
    w.binding = Some(binding);
    debug!(space, ?subscription, "attached");
    Ok(binding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::{EventScope, Mount, Space};
    use crate::window::WindowConfig;

    struct Bare {
        mounted: usize,
    }

    impl Container for Bare {
        fn id(&self) -> SpaceId {
            9
        }

        fn append(&mut self, _: &WindowHandle) -> Mount {
            self.mounted += 1;
            Mount::default()
        }

        fn remove(&mut self, _: &WindowHandle) -> bool {
            false
        }

        fn event_scope(&mut self) -> Option<&mut EventScope> {
            None
        }
    }

    #[test]
    fn test_attach_mounts_and_binds() {
        let window = Window::new(WindowConfig::default()).into_handle();
        let mut space = Space::new(3);

        Window::attach(&window, &mut space);

        assert!(space.contains(&window));
        assert_eq!(space.scope().len(), 1);
        assert_eq!(window.borrow().space(), Some(3));
        assert_eq!(window.borrow().binding().map(|b| b.space), Some(3));
    }

    #[test]
    fn test_attach_refuses_container_without_scope() {
        let window = Window::new(WindowConfig::default()).into_handle();
        let mut bare = Bare { mounted: 0 };

        Window::attach(&window, &mut bare);

        assert_eq!(bare.mounted, 0);
        assert!(window.borrow().space().is_none());
    }

    #[test]
    fn test_try_attach_reports_error() {
        let window = Window::new(WindowConfig::default()).into_handle();
        let err = try_attach(&window, &mut Bare { mounted: 0 }).unwrap_err();
        assert_eq!(err, WindowError::MissingEventScope { space: 9 });
    }

    #[test]
    fn test_attach_refuses_borrowed_window() {
        let window = Window::new(WindowConfig::default()).into_handle();
        let mut space = Space::new(3);

        let guard = window.borrow();
        let err = try_attach(&window, &mut space).unwrap_err();
        assert_eq!(err, WindowError::WindowBusy { space: 3 });
        drop(guard);

        assert!(!space.contains(&window));
        assert!(space.scope().is_empty());
        assert!(window.borrow().space().is_none());
    }

    #[test]
    fn test_reattach_moves_between_spaces() {
        let window = Window::new(WindowConfig::default()).into_handle();
        let mut first = Space::new(1);
        let mut second = Space::new(2);

        Window::attach(&window, &mut first);
        Window::attach(&window, &mut second);

        assert!(!first.contains(&window));
        assert!(second.contains(&window));
        assert_eq!(first.scope().len(), 1);
        assert_eq!(window.borrow().space(), Some(2));
    }

    #[test]
    fn test_reattach_same_space_mounts_once() {
        let window = Window::new(WindowConfig::default()).into_handle();
        let mut space = Space::new(1);

        Window::attach(&window, &mut space);
        Window::attach(&window, &mut space);

        assert_eq!(space.windows().len(), 1);
        assert_eq!(window.borrow().space(), Some(1));
    }
}
