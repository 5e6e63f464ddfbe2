//! Window Integration Tests
//!
//! Whole gestures and lifecycles driven through the public API: pointer
//! events into the window and its space, effect completion from the host,
//! signals out to a window manager.

use std::cell::RefCell;
use std::rc::Rc;

use zos_window::view::class;
use zos_window::{
    EffectKind, Flag, Part, Point, PointerEvent, Signal, SignalKind, Size, Space, Window,
    WindowConfig, WindowHandle,
};

/// Collect every signal a window emits, by kind
fn record(window: &WindowHandle) -> Rc<RefCell<Vec<SignalKind>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut w = window.borrow_mut();
    for kind in [
        SignalKind::Select,
        SignalKind::Focus,
        SignalKind::Blur,
        SignalKind::Open,
        SignalKind::Close,
        SignalKind::Maximize,
        SignalKind::Minimize,
        SignalKind::Restore,
    ] {
        let log = log.clone();
        w.on(kind, move |_, signal| log.borrow_mut().push(signal.kind()));
    }
    log
}

fn mounted(config: WindowConfig, space: &mut Space) -> WindowHandle {
    let window = Window::new(config).into_handle();
    Window::attach(&window, space);
    window
}

/// Construct, move, resize, minimize, then restore the captured geometry.
#[test]
fn test_minimize_restore_scenario() {
    let window = Window::new(WindowConfig {
        width: 400,
        height: 200,
        x: 0,
        y: 0,
        ..Default::default()
    })
    .into_handle();
    let log = record(&window);
    let mut w = window.borrow_mut();

    w.move_to(50, 60);
    assert_eq!((w.x(), w.y()), (50, 60));

    w.resize(300, 150);
    assert_eq!((w.width(), w.height()), (300, 150));

    w.minimize();
    assert!(w.is_minimized());
    assert_eq!(*log.borrow(), vec![SignalKind::Minimize]);

    // The manager collapses the window, later the caller restores it
    w.resize(0, 0).move_to(0, 900);
    w.restore();
    assert_eq!(w.size(), Size::new(300, 150));
    assert_eq!(w.position(), Point::new(50, 60));
}

/// Maximize true then false, then invoke the captured restore.
#[test]
fn test_maximize_round_trip_restores_geometry() {
    let mut window = Window::new(WindowConfig {
        x: 40,
        y: 30,
        width: 640,
        height: 480,
        ..Default::default()
    });

    window.transition(Flag::Maximized, true);
    window.move_to(0, 0).resize(1920, 1032);
    window.transition(Flag::Maximized, false);
    window.restore();

    assert_eq!(window.position(), Point::new(40, 30));
    assert_eq!(window.size(), Size::new(640, 480));
}

/// A title-bar drag continues through the space even off the window.
#[test]
fn test_drag_through_space() {
    let mut space = Space::new(1);
    let window = mounted(
        WindowConfig {
            x: 100,
            y: 100,
            ..Default::default()
        },
        &mut space,
    );

    window
        .borrow_mut()
        .dispatch(&mut PointerEvent::mouse_down(Part::Title, 120, 105));
    assert!(window.borrow().view().has_class(class::MOVE));

    // Far outside the window's rectangle
    space.pointer_move(1120, 905);
    assert_eq!(window.borrow().position(), Point::new(1100, 900));

    space.pointer_up(1120, 905);
    assert!(!window.borrow().is_moving());
    assert!(!window.borrow().view().has_class(class::MOVE));

    space.pointer_move(0, 0);
    assert_eq!(window.borrow().position(), Point::new(1100, 900));
}

/// Drag by (dx, dy) moves the window by exactly (dx, dy).
#[test]
fn test_drag_delta_is_exact() {
    let mut space = Space::new(1);
    let window = mounted(
        WindowConfig {
            x: 37,
            y: -12,
            ..Default::default()
        },
        &mut space,
    );

    let (cx, cy) = (90, 3);
    let (dx, dy) = (-55, 210);
    window
        .borrow_mut()
        .dispatch(&mut PointerEvent::mouse_down(Part::Title, cx, cy));
    space.pointer_move(cx + dx, cy + dy);

    assert_eq!(window.borrow().position(), Point::new(37 + dx, -12 + dy));
}

/// Resize by the handle, continued and ended by the space.
#[test]
fn test_resize_through_space() {
    let mut space = Space::new(1);
    let window = mounted(WindowConfig::default(), &mut space);
    window.borrow_mut().stamp();

    window
        .borrow_mut()
        .dispatch(&mut PointerEvent::mouse_down(Part::ResizeHandle, 395, 195));
    assert!(window.borrow().is_resizing());

    space.pointer_move(505, 295);
    assert_eq!(window.borrow().size(), Size::new(510, 300));
    assert_eq!(window.borrow().position(), Point::ZERO);

    space.pointer_up(505, 295);
    let w = window.borrow();
    assert!(!w.is_resizing());
    assert!(!w.view().has_class(class::RESIZING));
    assert!(!w.has_restore());
}

/// Disabled windows ignore drag, double-click maximize and focus-on-press.
#[test]
fn test_disabled_window_ignores_interaction() {
    let mut space = Space::new(1);
    let window = mounted(WindowConfig::default(), &mut space);
    let log = record(&window);
    window.borrow_mut().transition(Flag::Enabled, false);

    window
        .borrow_mut()
        .dispatch(&mut PointerEvent::mouse_down(Part::Title, 10, 10));
    space.pointer_move(300, 300);
    window
        .borrow_mut()
        .dispatch(&mut PointerEvent::dbl_click(Part::Title, 10, 10));
    window
        .borrow_mut()
        .dispatch(&mut PointerEvent::mouse_down(Part::Content, 50, 50));

    let w = window.borrow();
    assert!(!w.is_moving());
    assert_eq!(w.position(), Point::ZERO);
    assert!(!w.is_maximized());
    assert!(!w.is_active());
    assert!(log.borrow().is_empty());
}

/// Click still selects while disabled.
#[test]
fn test_disabled_window_still_selects() {
    let window = Window::new(WindowConfig::default()).into_handle();
    let log = record(&window);
    window.borrow_mut().transition(Flag::Enabled, false);

    window
        .borrow_mut()
        .dispatch(&mut PointerEvent::click(Part::Content, 1, 1));
    assert_eq!(*log.borrow(), vec![SignalKind::Select]);
}

/// Closing emits once; completion leaves a hidden, closed element.
#[test]
fn test_close_lifecycle() {
    let window = Window::new(WindowConfig::default()).into_handle();
    let log = record(&window);
    let mut w = window.borrow_mut();

    w.open();
    assert!(w.view().is_visible());
    w.effect_finished(EffectKind::Animation);

    w.dispatch(&mut PointerEvent::click(Part::CloseButton, 0, 0));
    assert!(w.is_closed());
    assert!(w.view().has_class(class::CLOSING));

    assert_eq!(w.effect_finished(EffectKind::Animation), 1);
    assert!(!w.view().is_visible());
    assert!(w.view().has_class(class::CLOSED));
    assert!(!w.view().has_class(class::CLOSING));

    // A stray completion later changes nothing
    assert_eq!(w.effect_finished(EffectKind::Animation), 0);
    assert!(w.view().has_class(class::CLOSED));

    assert_eq!(*log.borrow(), vec![SignalKind::Open, SignalKind::Close]);
}

/// Listeners see the emitting window itself.
#[test]
fn test_signals_carry_window_identity() {
    let first = Window::new(WindowConfig::default()).into_handle();
    let second = Window::new(WindowConfig::default()).into_handle();
    let hits = Rc::new(RefCell::new(Vec::new()));

    for (index, handle) in [&first, &second].into_iter().enumerate() {
        let target = handle.as_ptr() as *const Window;
        let hits = hits.clone();
        handle.borrow_mut().on(SignalKind::Focus, move |w, _| {
            hits.borrow_mut().push((index, std::ptr::eq(&*w, target)));
        });
    }

    second.borrow_mut().focus();
    first.borrow_mut().focus();
    assert_eq!(*hits.borrow(), vec![(1, true), (0, true)]);
}

/// A manager raises whichever window was last selected.
#[test]
fn test_manager_restacks_on_select() {
    let top = Rc::new(RefCell::new(10_000));
    let windows: Vec<WindowHandle> = (0..2)
        .map(|_| Window::new(WindowConfig::default()).into_handle())
        .collect();
    for window in &windows {
        let top = top.clone();
        window.borrow_mut().on(SignalKind::Select, move |w, _| {
            *top.borrow_mut() += 1;
            w.set_z(*top.borrow());
        });
    }

    windows[1]
        .borrow_mut()
        .dispatch(&mut PointerEvent::click(Part::Content, 5, 5));
    windows[0]
        .borrow_mut()
        .dispatch(&mut PointerEvent::click(Part::Title, 5, 5));

    assert_eq!(windows[1].borrow().z(), 10_001);
    assert_eq!(windows[0].borrow().z(), 10_002);
}

/// The select signal carries the originating event.
#[test]
fn test_select_carries_event() {
    let mut window = Window::new(WindowConfig::default());
    let seen = Rc::new(RefCell::new(None));
    let slot = seen.clone();
    window.on(SignalKind::Select, move |_, signal| {
        if let Signal::Select(event) = signal {
            *slot.borrow_mut() = Some(event.client);
        }
    });

    window.dispatch(&mut PointerEvent::click(Part::Title, 64, 12));
    assert_eq!(*seen.borrow(), Some(Point::new(64, 12)));
}

/// Two windows in one space only move while their own session runs.
#[test]
fn test_sessions_are_per_window() {
    let mut space = Space::new(1);
    let left = mounted(WindowConfig::default(), &mut space);
    let right = mounted(
        WindowConfig {
            x: 500,
            ..Default::default()
        },
        &mut space,
    );
    assert_eq!(space.windows().len(), 2);

    right
        .borrow_mut()
        .dispatch(&mut PointerEvent::mouse_down(Part::Title, 510, 5));
    space.pointer_move(610, 105);
    space.pointer_up(610, 105);

    assert_eq!(left.borrow().position(), Point::ZERO);
    assert_eq!(right.borrow().position(), Point::new(600, 100));
}

/// Re-attaching moves the window but keeps the previous space bound.
#[test]
fn test_reattach_keeps_previous_space_bound() {
    let mut first = Space::new(1);
    let mut second = Space::new(2);
    let window = mounted(WindowConfig::default(), &mut first);
    Window::attach(&window, &mut second);

    assert_eq!(window.borrow().space(), Some(2));
    assert!(!first.contains(&window));
    assert!(first.windows().is_empty());
    assert!(second.contains(&window));
    assert_eq!(first.scope().len(), 1);
    assert_eq!(second.scope().len(), 1);

    window
        .borrow_mut()
        .dispatch(&mut PointerEvent::mouse_down(Part::Title, 0, 0));
    first.pointer_move(25, 25);
    assert_eq!(window.borrow().position(), Point::new(25, 25));
    second.pointer_up(25, 25);
    assert!(!window.borrow().is_moving());
}

/// Resize is gated by `movable`; `resizable` is never consulted.
#[test]
fn test_resize_gated_by_movable_not_resizable() {
    let mut space = Space::new(1);
    let window = mounted(WindowConfig::default(), &mut space);

    window.borrow_mut().transition(Flag::Resizable, false);
    window
        .borrow_mut()
        .dispatch(&mut PointerEvent::mouse_down(Part::ResizeHandle, 400, 200));
    assert!(window.borrow().is_resizing());
    space.pointer_up(400, 200);

    window.borrow_mut().transition(Flag::Resizable, true);
    window.borrow_mut().transition(Flag::Movable, false);
    window
        .borrow_mut()
        .dispatch(&mut PointerEvent::mouse_down(Part::ResizeHandle, 400, 200));
    assert!(!window.borrow().is_resizing());
}

/// Repeated same-value transitions re-run their side effects.
#[test]
fn test_repeated_transitions_are_not_deduplicated() {
    let window = Window::new(WindowConfig::default()).into_handle();
    let log = record(&window);
    let mut w = window.borrow_mut();

    w.blur().blur();
    w.transition(Flag::Minimized, false);
    w.close().close();

    assert_eq!(
        *log.borrow(),
        vec![
            SignalKind::Blur,
            SignalKind::Blur,
            SignalKind::Restore,
            SignalKind::Close,
            SignalKind::Close,
        ]
    );
    // The re-triggered close still finalizes once
    assert_eq!(w.pending_effects().len(), 1);
}
