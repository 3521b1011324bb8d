//! Timer contract shared by the page's animated state.
//!
//! A [`TimedState`] owns at most one timer at a time: whatever its current
//! value reports through [`TimedState::pending`]. The driver cancels the
//! armed timer whenever the value changes or the owner is disposed, then
//! arms the new value's timer. An unchanged value never re-arms, so
//! repeated no-op inputs cannot stack timers.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deferred {
    pub delay_ms: u32,
}

impl Deferred {
    pub fn after(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

pub trait TimedState: Clone + PartialEq {
    /// The one timer this value wants armed, if any.
    fn pending(&self) -> Option<Deferred>;

    /// The value after the pending timer fires. Returns an equal value when
    /// nothing is pending.
    fn elapsed(&self) -> Self;
}
