//! Lifecycle state machine
//!
//! Every flag change goes through [`Window::transition`], which always runs
//! the enter/exit behavior for the requested value. There is no equality
//! short-circuit: setting a flag to its current value re-emits its signal
//! and re-triggers its effect.
//!
//! Opening, closing, maximizing and minimizing add a transient class and
//! leave finalization to the host's effect completion notification, see
//! [`Window::effect_finished`].

use serde::Serialize;
use tracing::debug;

use super::flags::Flag;
use super::window::Window;
use crate::math::{Point, Size};
use crate::signal::Signal;
use crate::transition::{Completion, EffectKind, EffectToken};
use crate::view::class;

/// Geometry captured when a maximize or minimize begins
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Restore {
    pub size: Size,
    pub position: Point,
}

impl Window {
    /// Set a flag, running its enter or exit behavior
    ///
    /// Listeners run before the new value is stored, so a listener reading
    /// the flag sees its previous value.
    pub fn transition(&mut self, flag: Flag, value: bool) -> &mut Self {
        debug!(?flag, value, "transition");

        match flag {
            Flag::Opened => {
                if value {
                    self.view.show();
                    self.start_effect(EffectKind::Animation, class::OPENING, Completion::RemoveClass);
                    self.emit(Signal::Open);
                }
            }
            Flag::Closed => {
                if value {
                    self.emit(Signal::Close);
                    self.start_effect(EffectKind::Animation, class::CLOSING, Completion::FinishClose);
                }
            }
            Flag::Maximized => {
                if value {
                    self.stamp();
                    self.emit(Signal::Maximize);
                } else {
                    self.emit(Signal::Restore);
                }
            }
            Flag::Minimized => {
                if value {
                    self.stamp();
                    self.emit(Signal::Minimize);
                } else {
                    self.emit(Signal::Restore);
                }
            }
            Flag::Active => {
                if value {
                    self.emit(Signal::Focus);
                    self.view.add_class(class::ACTIVE);
                } else {
                    self.emit(Signal::Blur);
                    self.view.remove_class(class::ACTIVE);
                }
            }
            Flag::Enabled => {
                if value {
                    self.view.remove_class(class::DISABLED);
                } else {
                    self.view.add_class(class::DISABLED);
                }
            }
            Flag::Movable | Flag::Resizable => {}
        }

        self.flags.set(flag, value);
        self
    }

    pub fn open(&mut self) -> &mut Self {
        self.transition(Flag::Opened, true)
    }

    pub fn close(&mut self) -> &mut Self {
        self.transition(Flag::Closed, true)
    }

    pub fn focus(&mut self) -> &mut Self {
        self.transition(Flag::Active, true)
    }

    pub fn blur(&mut self) -> &mut Self {
        self.transition(Flag::Active, false)
    }

    /// Toggle maximized, animating through the maximize transition class
    ///
    /// Leaving the maximized state only announces `restore`; applying the
    /// captured geometry is up to the caller via [`Window::restore`].
    pub fn maximize(&mut self) -> &mut Self {
        self.start_effect(EffectKind::Transition, class::MAXIMIZING, Completion::RemoveClass);
        let value = !self.flags.maximized;
        self.transition(Flag::Maximized, value)
    }

    /// Toggle minimized, animating through the minimize transition class
    pub fn minimize(&mut self) -> &mut Self {
        self.start_effect(EffectKind::Transition, class::MINIMIZING, Completion::RemoveClass);
        let value = !self.flags.minimized;
        self.transition(Flag::Minimized, value)
    }

    /// Capture the current size and position for [`Window::restore`]
    pub fn stamp(&mut self) -> &mut Self {
        let captured = Restore {
            size: self.size(),
            position: self.position(),
        };
        debug!(?captured, "stamp");
        self.restore = Some(captured);
        self
    }

    /// Reapply the geometry captured by the last stamp; no-op if none
    pub fn restore(&mut self) -> &mut Self {
        if let Some(Restore { size, position }) = self.restore {
            self.resize(size.width, size.height)
                .move_to(position.x, position.y);
        }
        self
    }

    /// Deliver an animation-end or transition-end notification
    ///
    /// Fires every effect of that kind still waiting, once, and detaches
    /// it. Returns the number of effects finalized.
    pub fn effect_finished(&mut self, kind: EffectKind) -> usize {
        let fired = self.effects.take(kind);
        if fired.is_empty() {
            debug!(?kind, "effect completion with nothing pending");
            return 0;
        }

        for effect in &fired {
            self.view.remove_class(effect.class);
            if effect.completion == Completion::FinishClose {
                self.view.add_class(class::CLOSED);
                self.view.hide();
            }
            debug!(class = effect.class, ?kind, "effect finished");
        }
        fired.len()
    }

    /// Drop a pending effect without finalizing it
    ///
    /// Only the transient class is removed: a close cancelled this way never
    /// reaches the hidden, closed state. Returns false if the token already
    /// fired or was superseded.
    pub fn cancel_effect(&mut self, token: EffectToken) -> bool {
        match self.effects.cancel(token) {
            Some(effect) => {
                self.view.remove_class(effect.class);
                debug!(class = effect.class, "effect cancelled");
                true
            }
            None => false,
        }
    }

    fn start_effect(&mut self, kind: EffectKind, class: &'static str, completion: Completion) {
        self.view.add_class(class);
        self.effects.register(kind, class, completion);
    }
}
