//! Pure item movement along the conveyor axis.
//!
//! Motion is linear and deterministic: given position, target, speed, and
//! delta time, the outcome is fully defined. There is no easing; an item
//! that would reach or pass its target this step snaps exactly onto it
//! and settles.

use crate::constants::{INSPECTION_POINT, QUEUE_OFFSET};

/// Result of advancing an item by one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionStep {
    /// Still traveling; new position.
    Moving(f32),
    /// Reached (snapped to) the target this step.
    Arrived,
}

/// Stop target for an item joining the queue at the given depth.
///
/// Depth 0 stops at the inspection point; each deeper slot sits one
/// queue offset further back toward the spawn point.
pub fn slot_target(queue_depth: u32) -> f32 {
    INSPECTION_POINT - queue_depth as f32 * QUEUE_OFFSET
}

/// Advance toward `target` at `speed` for `delta_seconds`.
pub fn advance(position: f32, target: f32, speed: f32, delta_seconds: f32) -> MotionStep {
    if position >= target {
        return MotionStep::Arrived;
    }
    let step = speed * delta_seconds.max(0.0);
    if position + step >= target {
        MotionStep::Arrived
    } else {
        MotionStep::Moving(position + step)
    }
}

/// Queue-advance reactivation rule: a settled item resumes motion only
/// when its target moved forward and it has not already passed the new
/// target (an item frozen mid-travel by inspection counts too).
pub fn should_resume(position: f32, old_target: f32, new_target: f32) -> bool {
    new_target > old_target && position < new_target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_targets_step_back_by_offset() {
        assert_eq!(slot_target(0), INSPECTION_POINT);
        assert_eq!(slot_target(1), INSPECTION_POINT - QUEUE_OFFSET);
        assert_eq!(slot_target(3), INSPECTION_POINT - 3.0 * QUEUE_OFFSET);
    }

    #[test]
    fn test_advance_partial_step() {
        match advance(0.0, 100.0, 60.0, 0.5) {
            MotionStep::Moving(p) => assert!((p - 30.0).abs() < 1e-5),
            other => panic!("expected Moving, got {:?}", other),
        }
    }

    #[test]
    fn test_advance_snaps_on_overshoot() {
        // Step of 60 would pass a target 10 away: snap, don't overshoot.
        assert_eq!(advance(90.0, 100.0, 60.0, 1.0), MotionStep::Arrived);
    }

    #[test]
    fn test_advance_exact_landing_settles() {
        assert_eq!(advance(40.0, 100.0, 60.0, 1.0), MotionStep::Arrived);
    }

    #[test]
    fn test_advance_at_or_past_target_is_arrived() {
        assert_eq!(advance(100.0, 100.0, 60.0, 1.0), MotionStep::Arrived);
        assert_eq!(advance(120.0, 100.0, 60.0, 1.0), MotionStep::Arrived);
    }

    #[test]
    fn test_resume_requires_forward_retarget() {
        // Target moved forward, item behind it: resume.
        assert!(should_resume(100.0, 100.0, 140.0));
        // Target unchanged: stay settled.
        assert!(!should_resume(100.0, 100.0, 100.0));
        // Item already at or past the new target: stay settled.
        assert!(!should_resume(140.0, 100.0, 140.0));
    }
}
