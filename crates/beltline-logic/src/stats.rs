//! Bounded operator stat pair — quota vs. suspicion.
//!
//! Each verdict nudges one bar up and the other down by a fixed step, each
//! independently clamped to `[0, STAT_MAX]`.

use crate::choice::Verdict;
use crate::constants::{STAT_MAX, STAT_STEP};

/// Which stat bar a value belongs to, for the presentation sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    /// Raised by accepting items.
    Quota,
    /// Raised by rejecting items.
    Suspicion,
}

/// The two bounded counters the operator is judged by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatPair {
    pub quota: f32,
    pub suspicion: f32,
}

impl StatPair {
    pub fn new() -> Self {
        Self {
            quota: 0.0,
            suspicion: 0.0,
        }
    }

    /// Apply a verdict's stat step and return both updated bars for the
    /// presentation layer.
    pub fn apply(&mut self, verdict: Verdict) -> [(StatKind, f32); 2] {
        match verdict {
            Verdict::Accept => {
                self.quota = (self.quota + STAT_STEP).clamp(0.0, STAT_MAX);
                self.suspicion = (self.suspicion - STAT_STEP).clamp(0.0, STAT_MAX);
            }
            Verdict::Reject => {
                self.suspicion = (self.suspicion + STAT_STEP).clamp(0.0, STAT_MAX);
                self.quota = (self.quota - STAT_STEP).clamp(0.0, STAT_MAX);
            }
        }
        [
            (StatKind::Quota, self.quota),
            (StatKind::Suspicion, self.suspicion),
        ]
    }
}

impl Default for StatPair {
    fn default() -> Self {
        Self::new()
    }
}
