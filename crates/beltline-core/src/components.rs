//! Components attached to item entities on the belt.

use beltline_logic::classify::Classification;

/// Movement state of an item on the conveyor axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conveyed {
    /// Current coordinate along the belt.
    pub position: f32,
    /// Stop target. Raised by one queue offset per queue advance.
    pub target: f32,
    /// Settled items do not move. Set on arrival, and forced on by
    /// inspection (freezes the item mid-travel).
    pub settled: bool,
}

impl Conveyed {
    pub fn new(position: f32, target: f32) -> Self {
        Self {
            position,
            target,
            settled: position >= target,
        }
    }
}

/// Classification and dialogue assigned at spawn.
#[derive(Debug, Clone)]
pub struct Inspectable {
    /// 1-based spawn order within the shift.
    pub ordinal: u32,
    pub classification: Classification,
    pub dialogue: String,
}
