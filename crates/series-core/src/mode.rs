// File: crates/series-core/src/mode.rs
// Summary: Two-state display mode toggle; selection is pure and idempotent.

/// Active display mode for a chart.
/// `select` is the only transition; there is no terminal state and
/// re-selecting the active mode is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeState<M: Copy + PartialEq> {
    active: M,
}

impl<M: Copy + PartialEq> ModeState<M> {
    pub fn new(initial: M) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> M {
        self.active
    }

    /// Switch to `mode`. Returns true when the active mode changed.
    pub fn select(&mut self, mode: M) -> bool {
        if mode == self.active {
            return false;
        }
        self.active = mode;
        true
    }
}
