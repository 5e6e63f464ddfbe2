//! One-shot effect completion tokens

use tracing::trace;

/// Which completion notification an effect waits for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// `animationend`
    Animation,
    /// `transitionend`
    Transition,
}

/// What the window does once an effect completes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Drop the transient class
    RemoveClass,
    /// Drop the transient class, mark the view closed and hide it
    FinishClose,
}

/// Identifies a registered effect
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EffectToken(u64);

/// An effect waiting for its completion notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingEffect {
    pub token: EffectToken,
    pub kind: EffectKind,
    /// Transient class the effect was started with
    pub class: &'static str,
    pub completion: Completion,
}

/// Registry of in-flight effects for one window
///
/// At most one effect per class is pending: registering a class again
/// before its completion fired cancels the stale token, so a re-triggered
/// transition finalizes exactly once.
#[derive(Clone, Debug, Default)]
pub struct Effects {
    next_token: u64,
    pending: Vec<PendingEffect>,
}

impl Effects {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a one-shot completion for `class`
    pub fn register(
        &mut self,
        kind: EffectKind,
        class: &'static str,
        completion: Completion,
    ) -> EffectToken {
        if let Some(pos) = self.pending.iter().position(|p| p.class == class) {
            let stale = self.pending.remove(pos);
            trace!(token = stale.token.0, class, "superseded pending effect");
        }

        let token = EffectToken(self.next_token);
        self.next_token += 1;
        self.pending.push(PendingEffect {
            token,
            kind,
            class,
            completion,
        });
        token
    }

    /// Detach a pending effect without firing it
    ///
    /// Returns `None` if the token already fired or was superseded.
    pub fn cancel(&mut self, token: EffectToken) -> Option<PendingEffect> {
        let pos = self.pending.iter().position(|p| p.token == token)?;
        Some(self.pending.remove(pos))
    }

    /// Detach and return every effect waiting on `kind`, oldest first
    pub fn take(&mut self, kind: EffectKind) -> Vec<PendingEffect> {
        let (fired, remaining) = self.pending.drain(..).partition(|p| p.kind == kind);
        self.pending = remaining;
        fired
    }

    /// Effects still waiting, oldest first
    pub fn pending(&self) -> &[PendingEffect] {
        &self.pending
    }

    /// Whether a given token is still waiting
    pub fn is_pending(&self, token: EffectToken) -> bool {
        self.pending.iter().any(|p| p.token == token)
    }

    /// Whether nothing is in flight
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
