//! Conveyor geometry, pacing, and stat tunables.
//!
//! All coordinates are along the single conveyor axis, increasing toward
//! the inspection point. Units are world units and seconds.

/// Conveyor entry point where new items appear.
pub const SPAWN_POINT: f32 = 0.0;

/// Where the frontmost item stops for inspection.
pub const INSPECTION_POINT: f32 = 240.0;

/// Fixed spacing between queued item stop targets.
pub const QUEUE_OFFSET: f32 = 40.0;

/// Belt travel speed for items (units per second).
pub const ITEM_SPEED: f32 = 60.0;

/// An item closer than this to the spawn point still occupies the entry
/// area; spawning while it does would overlap, so the belt jams instead.
pub const JAM_DISTANCE: f32 = 48.0;

/// Step applied to the raised stat bar on each verdict (the opposite bar
/// drops by the same amount).
pub const STAT_STEP: f32 = 10.0;

/// Upper clamp for each stat bar.
pub const STAT_MAX: f32 = 100.0;

/// Displayed shift window in hours (midnight to 6 AM) regardless of the
/// configured real-time duration.
pub const SHIFT_DISPLAY_HOURS: u32 = 6;

/// Shift-end screen fade duration in seconds.
pub const END_FADE_SECS: f32 = 2.0;

/// Hold time on the shift-summary message before teardown, in seconds.
pub const END_SUMMARY_PAUSE_SECS: f32 = 3.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_is_consistent() {
        // The queue must hold at least one item between spawn and inspection.
        assert!(INSPECTION_POINT > SPAWN_POINT + QUEUE_OFFSET);
        // Jam detection must trip before a new item would overlap the slot
        // directly above the spawn point.
        assert!(JAM_DISTANCE > QUEUE_OFFSET);
    }
}
