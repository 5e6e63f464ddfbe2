//! Visual-effect completion tracking
//!
//! Lifecycle transitions add a transient class and must finalize only once
//! the host reports that the resulting animation or CSS transition ended.
//! Completion arrives on a later turn of the event loop, so each transition
//! registers a one-shot token here and the window resolves it when the host
//! calls [`Window::effect_finished`](crate::Window::effect_finished).

mod effect;

pub use effect::{Completion, EffectKind, EffectToken, Effects, PendingEffect};
