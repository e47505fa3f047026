//! Presentation sink — the contract between the core and the rendering /
//! audio layer.
//!
//! The core only pushes side effects through this trait; it never reads
//! results back. Long-running effects (the shift-end fade and completion
//! cue) report back through explicit engine callbacks
//! ([`crate::engine::ShiftEngine::on_fade_complete`] and
//! [`crate::engine::ShiftEngine::on_cue_complete`]), not through this
//! trait.

pub use beltline_logic::stats::StatKind;

/// Audio cues the core triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// An item settled; silence its belt rumble.
    ConveyorStop,
    /// The belt jammed at the spawn point.
    JamWarning,
    /// Selection toggled inside an open choice.
    SelectMove,
    ItemAccepted,
    ItemRejected,
    /// Shift-complete sting (the engine awaits its finish).
    ShiftComplete,
}

/// Which modal choice widget to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceUi {
    /// Accept/Reject toggle over the frontmost item.
    ItemVerdict,
    /// Yes/No clock-out confirmation.
    ExitConfirm,
}

/// Screen fade destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeTarget {
    Black,
    Clear,
}

/// Side-effect sink implemented by the presentation layer.
pub trait Presentation {
    fn play_sound(&mut self, cue: SoundCue);
    fn set_dialogue_text(&mut self, text: &str);
    fn show_choice_ui(&mut self, ui: ChoiceUi);
    fn hide_choice_ui(&mut self);
    /// Start a screen fade. Completion flows back via
    /// `ShiftEngine::on_fade_complete`.
    fn run_fade(&mut self, target: FadeTarget, duration_secs: f32);
    fn set_stat_bar(&mut self, kind: StatKind, value: f32);
    fn stop_music(&mut self);
}

/// Discards every call. For headless runs and tests that don't inspect
/// presentation output.
pub struct NullPresentation;

impl Presentation for NullPresentation {
    fn play_sound(&mut self, _cue: SoundCue) {}
    fn set_dialogue_text(&mut self, _text: &str) {}
    fn show_choice_ui(&mut self, _ui: ChoiceUi) {}
    fn hide_choice_ui(&mut self) {}
    fn run_fade(&mut self, _target: FadeTarget, _duration_secs: f32) {}
    fn set_stat_bar(&mut self, _kind: StatKind, _value: f32) {}
    fn stop_music(&mut self) {}
}
