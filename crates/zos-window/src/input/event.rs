use crate::math::Point;
use crate::view::Part;

/// Pointer event types the core reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    DblClick,
    MouseDown,
    MouseMove,
    MouseUp,
}

/// A pointer event delivered by the host
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointerEvent {
    pub event_type: EventType,
    /// Pointer position in container space
    pub client: Point,
    /// Element of the window tree under the pointer, `None` when outside it
    pub target: Option<Part>,
    propagation_stopped: bool,
    default_prevented: bool,
}

impl PointerEvent {
    /// Create an event
    pub fn new(event_type: EventType, target: Option<Part>, client: Point) -> Self {
        Self {
            event_type,
            client,
            target,
            propagation_stopped: false,
            default_prevented: false,
        }
    }

    /// Click on a part of the window
    pub fn click(target: Part, x: i32, y: i32) -> Self {
        Self::new(EventType::Click, Some(target), Point::new(x, y))
    }

    /// Double-click on a part of the window
    pub fn dbl_click(target: Part, x: i32, y: i32) -> Self {
        Self::new(EventType::DblClick, Some(target), Point::new(x, y))
    }

    /// Button press on a part of the window
    pub fn mouse_down(target: Part, x: i32, y: i32) -> Self {
        Self::new(EventType::MouseDown, Some(target), Point::new(x, y))
    }

    /// Pointer motion anywhere in the container
    pub fn mouse_move(x: i32, y: i32) -> Self {
        Self::new(EventType::MouseMove, None, Point::new(x, y))
    }

    /// Button release anywhere in the container
    pub fn mouse_up(x: i32, y: i32) -> Self {
        Self::new(EventType::MouseUp, None, Point::new(x, y))
    }

    /// Stop delegation to enclosing elements
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Suppress the host's default action
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
