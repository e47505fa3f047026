//! Queue coordinator — spawn cadence, jam detection, belt movement, and
//! dismissal.
//!
//! All live items are hecs entities owned by the engine's world; every
//! mutation of their positions and targets flows through the functions
//! here. Dismissal despawns the entity immediately — the visual exit
//! animation belongs to the presentation layer, so frontmost and
//! queue-advance scans only ever see live items.

use hecs::{Entity, World};

use beltline_logic::clock::ShiftClock;
use beltline_logic::constants::{ITEM_SPEED, JAM_DISTANCE, SPAWN_POINT};
use beltline_logic::motion::{self, MotionStep};
use beltline_logic::{classify, constants::QUEUE_OFFSET};

use crate::catalog::ShiftConfig;
use crate::components::{Conveyed, Inspectable};
use crate::presentation::{Presentation, SoundCue};

/// Mutable state of one shift run. Created at shift start, detached (and
/// dropped) when the shift-end sequence begins.
#[derive(Debug, Clone)]
pub struct ShiftRun {
    pub shift_index: usize,
    pub clock: ShiftClock,
    /// Seconds since the last successful spawn. Starts at the spawn
    /// interval so the first tick of a shift spawns immediately.
    pub since_spawn: f32,
    pub jammed: bool,
    pub spawn_count: u32,
    pub queue_depth: u32,
    /// Most recent spawn, tracked for jam detection.
    pub last_spawned: Option<Entity>,
}

impl ShiftRun {
    pub fn new(shift_index: usize, config: &ShiftConfig) -> Self {
        Self {
            shift_index,
            clock: ShiftClock::new(config.duration_secs),
            since_spawn: config.spawn_interval_secs,
            jammed: false,
            spawn_count: 0,
            queue_depth: 0,
            last_spawned: None,
        }
    }
}

/// Advance every unsettled item toward its target. Items that arrive snap
/// to the target, settle, and silence their belt audio.
pub fn convey_system(world: &mut World, delta_seconds: f32, sink: &mut dyn Presentation) {
    // Collect updates (can't mutate while iterating)
    let mut updates: Vec<(Entity, f32, bool)> = Vec::new();

    for (entity, conveyed) in world.query::<&Conveyed>().iter() {
        if conveyed.settled {
            continue;
        }
        match motion::advance(conveyed.position, conveyed.target, ITEM_SPEED, delta_seconds) {
            MotionStep::Moving(position) => updates.push((entity, position, false)),
            MotionStep::Arrived => updates.push((entity, conveyed.target, true)),
        }
    }

    for (entity, position, arrived) in updates {
        if let Ok(mut conveyed) = world.get::<&mut Conveyed>(entity) {
            conveyed.position = position;
            if arrived {
                conveyed.settled = true;
            }
        }
        if arrived {
            sink.play_sound(SoundCue::ConveyorStop);
        }
    }
}

/// Attempt to introduce a new item at the spawn point.
///
/// No-ops while jammed. If the most recent spawn has not yet cleared the
/// entry area, the belt jams instead of spawning: the jam is surfaced and
/// the caller must leave the spawn timer un-reset so the attempt repeats
/// once the obstruction is gone. Returns the new entity on success.
pub fn try_spawn(
    world: &mut World,
    run: &mut ShiftRun,
    config: &ShiftConfig,
    sink: &mut dyn Presentation,
) -> Option<Entity> {
    if run.jammed {
        return None;
    }

    if let Some(last) = run.last_spawned {
        if let Ok(conveyed) = world.get::<&Conveyed>(last) {
            if (conveyed.position - SPAWN_POINT).abs() < JAM_DISTANCE {
                run.jammed = true;
                log::warn!(
                    "belt jammed: item still {}u from spawn point",
                    conveyed.position - SPAWN_POINT
                );
                sink.play_sound(SoundCue::JamWarning);
                sink.set_dialogue_text("The belt grinds to a halt. Clear the jam.");
                return None;
            }
        }
    }

    let ordinal = run.spawn_count + 1;
    let classification = config.rule.classify(ordinal);
    let dialogue = config
        .dialogue_override(ordinal)
        .unwrap_or_else(|| classify::default_dialogue(classification))
        .to_string();
    let target = motion::slot_target(run.queue_depth);

    let entity = world.spawn((
        Conveyed::new(SPAWN_POINT, target),
        Inspectable {
            ordinal,
            classification,
            dialogue,
        },
    ));

    run.last_spawned = Some(entity);
    run.spawn_count = ordinal;
    run.queue_depth += 1;
    log::debug!(
        "spawned item #{} ({:?}) targeting {}",
        ordinal,
        classification,
        target
    );
    Some(entity)
}

/// The non-dismissed item with the greatest belt position — the only one
/// eligible for a verdict. None when the belt is empty.
pub fn frontmost(world: &World) -> Option<Entity> {
    let mut best: Option<(Entity, f32)> = None;
    for (entity, conveyed) in world.query::<&Conveyed>().iter() {
        match best {
            Some((_, pos)) if pos >= conveyed.position => {}
            _ => best = Some((entity, conveyed.position)),
        }
    }
    best.map(|(entity, _)| entity)
}

/// Dismiss an item with the operator's verdict: despawn it, clear jam
/// tracking if it was the obstruction, and advance the rest of the queue
/// into the gap. No-op (returns false) if the entity is already gone.
pub fn dismiss(
    world: &mut World,
    run: &mut ShiftRun,
    entity: Entity,
    accepted: bool,
    sink: &mut dyn Presentation,
) -> bool {
    if world.despawn(entity).is_err() {
        return false;
    }

    sink.play_sound(if accepted {
        SoundCue::ItemAccepted
    } else {
        SoundCue::ItemRejected
    });

    // The obstructing item leaving always unblocks the belt; the flag must
    // never be left stuck.
    if run.last_spawned == Some(entity) {
        run.last_spawned = None;
        run.jammed = false;
    }

    run.queue_depth = run.queue_depth.saturating_sub(1);
    advance_queue(world);
    log::debug!(
        "item dismissed ({}), queue depth now {}",
        if accepted { "accepted" } else { "rejected" },
        run.queue_depth
    );
    true
}

/// Move every remaining item's target forward by one queue offset and
/// wake the ones that can now travel again.
fn advance_queue(world: &mut World) {
    for (_, conveyed) in world.query_mut::<&mut Conveyed>() {
        let new_target = conveyed.target + QUEUE_OFFSET;
        if motion::should_resume(conveyed.position, conveyed.target, new_target) {
            conveyed.settled = false;
        }
        conveyed.target = new_target;
    }
}

/// Shift-boundary teardown: drop every live item.
pub fn clear_items(world: &mut World) {
    let entities: Vec<Entity> = world
        .query::<&Conveyed>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();
    for entity in entities {
        let _ = world.despawn(entity);
    }
}
