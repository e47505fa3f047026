//! End-to-end shift flow tests against a recording presentation sink.

use beltline_core::engine::{InputEvent, ShiftEngine};
use beltline_core::presentation::{ChoiceUi, FadeTarget, Presentation, SoundCue, StatKind};
use beltline_logic::constants::{END_SUMMARY_PAUSE_SECS, JAM_DISTANCE, SPAWN_POINT};

/// Every call the core pushed at the presentation layer, in order.
#[derive(Debug, Clone, PartialEq)]
enum Call {
    Sound(SoundCue),
    Dialogue(String),
    ShowChoice(ChoiceUi),
    HideChoice,
    Fade(FadeTarget),
    StatBar(StatKind, f32),
    StopMusic,
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl Presentation for Recorder {
    fn play_sound(&mut self, cue: SoundCue) {
        self.calls.push(Call::Sound(cue));
    }
    fn set_dialogue_text(&mut self, text: &str) {
        self.calls.push(Call::Dialogue(text.to_string()));
    }
    fn show_choice_ui(&mut self, ui: ChoiceUi) {
        self.calls.push(Call::ShowChoice(ui));
    }
    fn hide_choice_ui(&mut self) {
        self.calls.push(Call::HideChoice);
    }
    fn run_fade(&mut self, target: FadeTarget, _duration_secs: f32) {
        self.calls.push(Call::Fade(target));
    }
    fn set_stat_bar(&mut self, kind: StatKind, value: f32) {
        self.calls.push(Call::StatBar(kind, value));
    }
    fn stop_music(&mut self) {
        self.calls.push(Call::StopMusic);
    }
}

impl Recorder {
    fn position_of(&self, call: &Call) -> Option<usize> {
        self.calls.iter().position(|c| c == call)
    }
}

fn started_engine(sink: &mut Recorder) -> ShiftEngine {
    let mut engine = ShiftEngine::new(beltline_core::catalog::ShiftCatalog::builtin());
    engine.start_shift(0, sink);
    engine
}

#[test]
fn shift_start_presents_narrative() {
    let mut sink = Recorder::default();
    let engine = started_engine(&mut sink);

    let narrative = engine.current_config().unwrap().narrative.clone();
    assert!(sink.calls.contains(&Call::Dialogue(narrative)));
    assert!(sink.calls.contains(&Call::Fade(FadeTarget::Clear)));
}

#[test]
fn settling_item_silences_the_belt() {
    let mut sink = Recorder::default();
    let mut engine = started_engine(&mut sink);

    for _ in 0..60 {
        engine.tick(0.1, &mut sink); // item spawns and reaches inspection
    }
    assert!(sink.calls.contains(&Call::Sound(SoundCue::ConveyorStop)));
}

#[test]
fn verdict_confirm_pushes_both_stat_bars() {
    let mut sink = Recorder::default();
    let mut engine = started_engine(&mut sink);
    for _ in 0..60 {
        engine.tick(0.1, &mut sink);
    }
    let front = engine.frontmost().unwrap();

    engine.handle_input(InputEvent::InteractWithItem(front), &mut sink);
    assert!(sink.calls.contains(&Call::ShowChoice(ChoiceUi::ItemVerdict)));

    engine.handle_input(InputEvent::MoveSelectRight, &mut sink);
    engine.handle_input(InputEvent::Confirm, &mut sink);

    assert!(sink.calls.contains(&Call::Sound(SoundCue::ItemRejected)));
    assert!(sink
        .calls
        .iter()
        .any(|c| matches!(c, Call::StatBar(StatKind::Suspicion, v) if *v > 0.0)));
    assert!(sink
        .calls
        .iter()
        .any(|c| matches!(c, Call::StatBar(StatKind::Quota, _))));
}

#[test]
fn jam_is_surfaced_and_recovers_after_dismissals() {
    let mut sink = Recorder::default();
    let mut engine = started_engine(&mut sink);

    // Let the queue back up until the belt jams (no interactions).
    for _ in 0..1200 {
        engine.tick(0.1, &mut sink);
        if engine.run().map(|r| r.jammed).unwrap_or(false) {
            break;
        }
    }
    let run = engine.run().unwrap();
    assert!(run.jammed, "belt never jammed with a full queue");
    assert!(sink.calls.contains(&Call::Sound(SoundCue::JamWarning)));

    // The item blocking the spawn area is the most recent spawn.
    let obstruction = engine
        .items()
        .into_iter()
        .min_by(|a, b| a.position.partial_cmp(&b.position).unwrap())
        .unwrap();
    assert!((obstruction.position - SPAWN_POINT).abs() < JAM_DISTANCE);

    // Work the queue down from the front until the obstruction leaves.
    let spawned_before = engine.run().unwrap().spawn_count;
    while engine.run().map(|r| r.jammed).unwrap_or(false) {
        let front = engine.frontmost().expect("jammed belt cannot be empty");
        engine.handle_input(InputEvent::InteractWithItem(front), &mut sink);
        engine.handle_input(InputEvent::Confirm, &mut sink);
        engine.tick(0.1, &mut sink);
    }

    // Cleared: spawning resumes without waiting a full interval.
    engine.tick(0.1, &mut sink);
    assert!(engine.run().unwrap().spawn_count > spawned_before);
}

#[test]
fn end_sequence_calls_arrive_in_contract_order() {
    let mut sink = Recorder::default();
    let mut engine = started_engine(&mut sink);
    engine.tick(0.1, &mut sink);

    engine.handle_input(InputEvent::InteractWithExit, &mut sink);
    engine.handle_input(InputEvent::Confirm, &mut sink);
    engine.on_fade_complete(&mut sink);
    engine.on_cue_complete(&mut sink);
    engine.tick(END_SUMMARY_PAUSE_SECS, &mut sink);

    let hide = sink.position_of(&Call::HideChoice).unwrap();
    let fade_out = sink.position_of(&Call::Fade(FadeTarget::Black)).unwrap();
    let music = sink.position_of(&Call::StopMusic).unwrap();
    let cue = sink
        .position_of(&Call::Sound(SoundCue::ShiftComplete))
        .unwrap();
    let summary = sink
        .calls
        .iter()
        .position(|c| matches!(c, Call::Dialogue(t) if t.contains("complete")))
        .unwrap();

    assert!(hide < fade_out, "choice UI must hide before the fade");
    assert!(fade_out < music, "fade completes before music stops");
    assert!(music < cue, "music stops before the completion cue");
    assert!(cue < summary, "summary text follows the cue");

    // And the next shift actually started afterwards.
    assert_eq!(engine.run().unwrap().shift_index, 1);
    let night_two = engine.current_config().unwrap().narrative.clone();
    let next_story = sink.position_of(&Call::Dialogue(night_two)).unwrap();
    assert!(summary < next_story);
}

#[test]
fn clock_display_runs_midnight_to_six() {
    let mut sink = Recorder::default();
    let mut engine = started_engine(&mut sink);
    assert_eq!(engine.clock_display().unwrap(), "12 AM");

    for _ in 0..90 {
        engine.tick(1.0, &mut sink); // half of the 180s shift
    }
    assert_eq!(engine.clock_display().unwrap(), "3 AM");
}
