//! Declarative route tables
//!
//! A route binds `(selector, event type)` to a handler. Tables are plain
//! `const` slices so the full interaction surface of a window reads in one
//! place.

use tracing::trace;

use super::event::{EventType, PointerEvent};
use crate::view::{Part, Selector};

/// Route handler
pub type Handler<T> = fn(&mut T, &mut PointerEvent);

/// One entry of a route table
pub struct Route<T> {
    /// Element scope; `None` binds to the root of the scope itself
    pub selector: Option<Selector>,
    pub event_type: EventType,
    pub handler: Handler<T>,
}

impl<T> Route<T> {
    /// Whether this route fires for an event of `event_type` reaching `part`
    fn matches(&self, event_type: EventType, part: Part) -> bool {
        if self.event_type != event_type {
            return false;
        }
        match self.selector {
            Some(selector) => selector.matches(part),
            None => part == Part::Root,
        }
    }
}

/// Deliver an event through a delegated route table
///
/// Walks from the event target up to the root. At each element every
/// matching route runs in table order; once a handler stops propagation
/// no enclosing element is visited. Events without a target are ignored.
///
/// Returns the number of handlers that ran.
pub fn dispatch<T>(routes: &[Route<T>], target: &mut T, event: &mut PointerEvent) -> usize {
    let Some(origin) = event.target else {
        return 0;
    };

    let event_type = event.event_type;
    let mut fired = 0;
    for part in origin.path() {
        for route in routes.iter().filter(|r| r.matches(event_type, part)) {
            trace!(
                event = ?event_type,
                selector = route.selector.map(Selector::css),
                "route"
            );
            (route.handler)(target, event);
            fired += 1;
        }
        if event.propagation_stopped() {
            break;
        }
    }
    fired
}

/// Deliver an event to the selector-less routes of a table, wherever it landed
///
/// Used for container-scoped routes, which observe the whole surface.
pub fn dispatch_direct<T>(routes: &[Route<T>], target: &mut T, event: &mut PointerEvent) -> usize {
    let event_type = event.event_type;
    let mut fired = 0;
    for route in routes
        .iter()
        .filter(|r| r.selector.is_none() && r.event_type == event_type)
    {
        (route.handler)(target, event);
        fired += 1;
    }
    fired
}
