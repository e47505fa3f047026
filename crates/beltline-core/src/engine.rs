//! Shift engine - main entry point for running the simulation.
//!
//! Owns the item world, the active shift run, the modal choice state, and
//! the shift-end sequence. Each simulation tick advances the clock, the
//! belt, and the spawn timer; input events from the (external) input layer
//! arrive as discrete semantic events through [`ShiftEngine::handle_input`].

use hecs::{Entity, World};

use beltline_logic::choice::{ChoiceEffect, ChoiceState, SelectDir};
use beltline_logic::clock::ClockTick;
use beltline_logic::constants::{END_FADE_SECS, END_SUMMARY_PAUSE_SECS};
use beltline_logic::stats::StatPair;

use crate::catalog::{ShiftCatalog, ShiftConfig};
use crate::components::{Conveyed, Inspectable};
use crate::presentation::{ChoiceUi, FadeTarget, Presentation, SoundCue};
use crate::queue::{self, ShiftRun};
use crate::sequence::{EndPhase, EndSequence};

/// De-duplicated semantic input events from the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveSelectLeft,
    MoveSelectRight,
    Confirm,
    Cancel,
    InteractWithItem(Entity),
    InteractWithExit,
}

/// Rendering snapshot of one item on the belt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemView {
    pub id: Entity,
    pub position: f32,
    pub settled: bool,
}

/// Main simulation engine for one play session.
pub struct ShiftEngine {
    /// ECS world containing all live item entities.
    world: World,
    catalog: ShiftCatalog,
    /// Active shift run; `None` while idle or during the end sequence.
    run: Option<ShiftRun>,
    choice: ChoiceState,
    stats: StatPair,
    ending: Option<EndSequence>,
    /// Terminal state: every configured shift has been played.
    complete: bool,
}

impl ShiftEngine {
    pub fn new(catalog: ShiftCatalog) -> Self {
        Self {
            world: World::new(),
            catalog,
            run: None,
            choice: ChoiceState::Idle,
            stats: StatPair::new(),
            ending: None,
            complete: false,
        }
    }

    /// Begin shift `index`. Silently no-ops when the catalog has no such
    /// entry or a shift-end sequence is still playing out.
    pub fn start_shift(&mut self, index: usize, sink: &mut dyn Presentation) {
        if self.ending.is_some() {
            return;
        }
        let Some(config) = self.catalog.get(index) else {
            log::warn!("no shift configured at index {}", index);
            return;
        };

        queue::clear_items(&mut self.world);
        self.run = Some(ShiftRun::new(index, config));
        self.choice = ChoiceState::Idle;
        self.complete = false;

        log::info!("shift {} ({}) started", index, config.name);
        sink.set_dialogue_text(&config.narrative);
        sink.run_fade(FadeTarget::Clear, END_FADE_SECS);
    }

    /// Advance the simulation by one tick. Never blocks: every per-tick
    /// operation completes within the tick.
    pub fn tick(&mut self, delta_seconds: f32, sink: &mut dyn Presentation) {
        if self.ending.is_some() {
            self.tick_end_sequence(delta_seconds, sink);
            return;
        }

        let Some(mut run) = self.run.take() else {
            return;
        };

        if run.clock.tick(delta_seconds) == ClockTick::JustExpired {
            log::info!("shift {} clock expired", run.shift_index);
            self.run = Some(run);
            self.begin_shift_end(sink);
            return;
        }

        queue::convey_system(&mut self.world, delta_seconds, sink);

        run.since_spawn += delta_seconds;
        // Missing configuration means spawning silently stops.
        if let Some(config) = self.catalog.get(run.shift_index) {
            if run.since_spawn >= config.spawn_interval_secs {
                // The timer is only reset on a successful spawn; a jam
                // leaves it primed so the belt resumes as soon as the jam
                // clears.
                if queue::try_spawn(&mut self.world, &mut run, config, sink).is_some() {
                    run.since_spawn = 0.0;
                }
            }
        }

        self.run = Some(run);
    }

    /// Route a semantic input event through the modal choice machine.
    pub fn handle_input(&mut self, event: InputEvent, sink: &mut dyn Presentation) {
        // The end sequence accepts no input at all.
        if self.ending.is_some() {
            return;
        }
        match event {
            InputEvent::MoveSelectLeft => self.move_select(SelectDir::Left, sink),
            InputEvent::MoveSelectRight => self.move_select(SelectDir::Right, sink),
            InputEvent::Confirm => {
                let (next, effect) = self.choice.confirm();
                self.choice = next;
                self.apply_effect(effect, sink);
            }
            InputEvent::Cancel => {
                let (next, effect) = self.choice.cancel();
                self.choice = next;
                self.apply_effect(effect, sink);
            }
            InputEvent::InteractWithItem(entity) => self.open_item_choice(entity, sink),
            InputEvent::InteractWithExit => self.open_exit_choice(sink),
        }
    }

    fn move_select(&mut self, dir: SelectDir, sink: &mut dyn Presentation) {
        if self.choice.move_select(dir) {
            sink.play_sound(SoundCue::SelectMove);
        }
    }

    /// Interacting with a live item freezes it in place and presents its
    /// dialogue. Only the frontmost item gets the verdict toggle.
    fn open_item_choice(&mut self, entity: Entity, sink: &mut dyn Presentation) {
        // A rejected transition must leave the item untouched, so the
        // modal gate comes before any mutation.
        if self.run.is_none() || self.choice.is_modal() {
            return;
        }
        let Ok(mut conveyed) = self.world.get::<&mut Conveyed>(entity) else {
            return; // item already dismissed
        };
        conveyed.settled = true;
        drop(conveyed);

        let is_frontmost = queue::frontmost(&self.world) == Some(entity);
        let Some(next) = self.choice.open_item(entity.to_bits().get(), is_frontmost) else {
            return;
        };
        self.choice = next;

        if let Ok(inspectable) = self.world.get::<&Inspectable>(entity) {
            sink.set_dialogue_text(&inspectable.dialogue);
        }
        if is_frontmost {
            sink.show_choice_ui(ChoiceUi::ItemVerdict);
        }
    }

    fn open_exit_choice(&mut self, sink: &mut dyn Presentation) {
        if self.run.is_none() {
            return;
        }
        let Some(next) = self.choice.open_exit() else {
            return;
        };
        self.choice = next;
        sink.show_choice_ui(ChoiceUi::ExitConfirm);
    }

    fn apply_effect(&mut self, effect: ChoiceEffect, sink: &mut dyn Presentation) {
        match effect {
            ChoiceEffect::None => {}
            ChoiceEffect::Close => sink.hide_choice_ui(),
            ChoiceEffect::Dismiss { subject, accepted } => {
                sink.hide_choice_ui();
                self.dismiss_subject(subject, accepted, sink);
            }
            ChoiceEffect::BeginShiftEnd => self.begin_shift_end(sink),
        }
    }

    /// Dismiss the confirmed subject, but only while it is still the live
    /// frontmost item; anything staler is a silent no-op.
    fn dismiss_subject(&mut self, subject: u64, accepted: bool, sink: &mut dyn Presentation) {
        let Some(run) = self.run.as_mut() else {
            return;
        };
        let Some(entity) = Entity::from_bits(subject) else {
            return;
        };
        if queue::frontmost(&self.world) != Some(entity) {
            return;
        }
        if !queue::dismiss(&mut self.world, run, entity, accepted, sink) {
            return;
        }

        let verdict = if accepted {
            beltline_logic::choice::Verdict::Accept
        } else {
            beltline_logic::choice::Verdict::Reject
        };
        for (kind, value) in self.stats.apply(verdict) {
            sink.set_stat_bar(kind, value);
        }
    }

    // ── Shift-end sequence ──────────────────────────────────────────────

    /// Freeze the simulation and start the end sequence. Detaching the run
    /// makes clock expiry and operator clock-out mutually exclusive.
    fn begin_shift_end(&mut self, sink: &mut dyn Presentation) {
        let Some(run) = self.run.take() else {
            return;
        };
        self.choice = ChoiceState::Idle;
        self.ending = Some(EndSequence::new(run.shift_index));

        sink.hide_choice_ui();
        sink.run_fade(FadeTarget::Black, END_FADE_SECS);
    }

    /// Presentation layer reports the screen fade finished.
    pub fn on_fade_complete(&mut self, sink: &mut dyn Presentation) {
        let Some(ending) = self.ending.as_mut() else {
            return;
        };
        if ending.phase != EndPhase::AwaitFade {
            return;
        }
        ending.phase = EndPhase::AwaitCue;
        sink.stop_music();
        sink.play_sound(SoundCue::ShiftComplete);
    }

    /// Presentation layer reports the completion cue finished.
    pub fn on_cue_complete(&mut self, sink: &mut dyn Presentation) {
        let Some(ending) = self.ending.as_mut() else {
            return;
        };
        if ending.phase != EndPhase::AwaitCue {
            return;
        }
        let name = self
            .catalog
            .get(ending.ended_shift)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        ending.phase = EndPhase::SummaryPause {
            remaining: END_SUMMARY_PAUSE_SECS,
        };
        sink.set_dialogue_text(&format!("{} complete. Clocking out.", name));
    }

    fn tick_end_sequence(&mut self, delta_seconds: f32, sink: &mut dyn Presentation) {
        let Some(ending) = self.ending.as_mut() else {
            return;
        };
        let EndPhase::SummaryPause { remaining } = &mut ending.phase else {
            return; // awaiting an external completion callback
        };
        *remaining -= delta_seconds;
        if *remaining > 0.0 {
            return;
        }

        let ended_shift = ending.ended_shift;
        self.ending = None;
        queue::clear_items(&mut self.world);

        if self.catalog.has_next(ended_shift) {
            self.start_shift(ended_shift + 1, sink);
        } else {
            self.complete = true;
            log::info!("all {} shifts complete", self.catalog.len());
            sink.set_dialogue_text("All shifts complete. Go home.");
            sink.run_fade(FadeTarget::Clear, END_FADE_SECS);
        }
    }

    // ── Accessors for collaborators ─────────────────────────────────────

    /// True while any modal choice is open; the input layer must suspend
    /// ordinary player movement.
    pub fn is_modal(&self) -> bool {
        self.choice.is_modal()
    }

    pub fn choice(&self) -> &ChoiceState {
        &self.choice
    }

    pub fn stats(&self) -> &StatPair {
        &self.stats
    }

    /// Clock-face label for the HUD, e.g. "3 AM". None when no shift runs.
    pub fn clock_display(&self) -> Option<String> {
        self.run.as_ref().map(|r| r.clock.display_label())
    }

    pub fn run(&self) -> Option<&ShiftRun> {
        self.run.as_ref()
    }

    /// Configuration of the active shift (narrative, atmosphere tint).
    pub fn current_config(&self) -> Option<&ShiftConfig> {
        self.run.as_ref().and_then(|r| self.catalog.get(r.shift_index))
    }

    pub fn frontmost(&self) -> Option<Entity> {
        queue::frontmost(&self.world)
    }

    /// Snapshot of every live item for the rendering layer.
    pub fn items(&self) -> Vec<ItemView> {
        let mut items: Vec<ItemView> = self
            .world
            .query::<&Conveyed>()
            .iter()
            .map(|(id, c)| ItemView {
                id,
                position: c.position,
                settled: c.settled,
            })
            .collect();
        items.sort_by(|a, b| {
            b.position
                .partial_cmp(&a.position)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        items
    }

    pub fn item_count(&self) -> usize {
        self.world.query::<&Conveyed>().iter().count()
    }

    pub fn is_ending(&self) -> bool {
        self.ending.is_some()
    }

    pub fn all_complete(&self) -> bool {
        self.complete
    }
}
