//! Shift-end sequence — a linear, non-cancellable phase machine.
//!
//! Triggered by clock expiry or a confirmed early clock-out; both take the
//! same path. The active shift run is detached before the first phase, so
//! the clock and spawner are inert for the whole sequence, and the exit
//! choice cannot reopen mid-fade. Phases that wait on the presentation
//! layer hold an explicit awaiting marker until the matching engine
//! callback arrives; callbacks in the wrong phase are ignored.

/// Where the shift-end sequence currently waits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EndPhase {
    /// Fade to black issued; awaiting `on_fade_complete`.
    AwaitFade,
    /// Completion cue playing; awaiting `on_cue_complete`.
    AwaitCue,
    /// Summary message on screen; counts down via `tick`.
    SummaryPause { remaining: f32 },
}

/// State of an in-flight shift-end sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndSequence {
    pub phase: EndPhase,
    /// Index of the shift that just ended.
    pub ended_shift: usize,
}

impl EndSequence {
    pub fn new(ended_shift: usize) -> Self {
        Self {
            phase: EndPhase::AwaitFade,
            ended_shift,
        }
    }
}
