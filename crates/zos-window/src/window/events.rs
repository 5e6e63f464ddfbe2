//! Route tables binding pointer events to window behavior

use super::window::Window;
use crate::input::{self, EventType, PointerEvent, Route};
use crate::signal::Signal;
use crate::view::Selector;

/// Routes bound on the window's own element tree
pub const WINDOW_ROUTES: &[Route<Window>] = &[
    Route {
        selector: None,
        event_type: EventType::Click,
        handler: on_click,
    },
    Route {
        selector: None,
        event_type: EventType::MouseDown,
        handler: on_mouse_down,
    },
    Route {
        selector: Some(Selector::Title),
        event_type: EventType::MouseDown,
        handler: on_title_mouse_down,
    },
    Route {
        selector: Some(Selector::Title),
        event_type: EventType::DblClick,
        handler: on_title_dbl_click,
    },
    Route {
        selector: Some(Selector::CloseButton),
        event_type: EventType::Click,
        handler: on_close_click,
    },
    Route {
        selector: Some(Selector::MaximizeButton),
        event_type: EventType::Click,
        handler: on_maximize_click,
    },
    Route {
        selector: Some(Selector::MinimizeButton),
        event_type: EventType::Click,
        handler: on_minimize_click,
    },
    Route {
        selector: Some(Selector::TitleButton),
        event_type: EventType::MouseDown,
        handler: swallow,
    },
    Route {
        selector: Some(Selector::ResizeHandle),
        event_type: EventType::MouseDown,
        handler: on_resize_mouse_down,
    },
];

/// Routes bound on the space the window is mounted into
pub const SPACE_ROUTES: &[Route<Window>] = &[
    Route {
        selector: None,
        event_type: EventType::MouseMove,
        handler: on_space_mouse_move,
    },
    Route {
        selector: None,
        event_type: EventType::MouseUp,
        handler: on_space_mouse_up,
    },
];

impl Window {
    /// Deliver a pointer event that landed on this window
    ///
    /// Returns the number of handlers that ran.
    pub fn dispatch(&mut self, event: &mut PointerEvent) -> usize {
        input::dispatch(WINDOW_ROUTES, self, event)
    }

    /// Deliver a pointer event observed by the space this window is mounted into
    pub fn dispatch_space(&mut self, event: &mut PointerEvent) -> usize {
        input::dispatch_direct(SPACE_ROUTES, self, event)
    }
}

fn on_click(window: &mut Window, event: &mut PointerEvent) {
    window.emit(Signal::Select(event.clone()));
}

fn on_mouse_down(window: &mut Window, _: &mut PointerEvent) {
    if window.is_enabled() {
        window.focus();
    }
}

fn on_title_mouse_down(window: &mut Window, event: &mut PointerEvent) {
    window.begin_drag(event.client);
}

fn on_title_dbl_click(window: &mut Window, _: &mut PointerEvent) {
    if window.is_enabled() {
        window.maximize();
    }
}

fn on_close_click(window: &mut Window, event: &mut PointerEvent) {
    swallow(window, event);
    if window.is_enabled() {
        window.close();
    }
}

fn on_maximize_click(window: &mut Window, event: &mut PointerEvent) {
    swallow(window, event);
    if window.is_enabled() {
        window.maximize();
    }
}

fn on_minimize_click(window: &mut Window, event: &mut PointerEvent) {
    swallow(window, event);
    if window.is_enabled() {
        window.minimize();
    }
}

/// Keep title button presses from reaching the title bar and the frame
fn swallow(_: &mut Window, event: &mut PointerEvent) {
    event.stop_propagation();
    event.prevent_default();
}

fn on_resize_mouse_down(window: &mut Window, event: &mut PointerEvent) {
    window.begin_resize(event.client);
}

fn on_space_mouse_move(window: &mut Window, event: &mut PointerEvent) {
    window.track_pointer(event.client);
}

fn on_space_mouse_up(window: &mut Window, _: &mut PointerEvent) {
    window.release_pointer();
}
