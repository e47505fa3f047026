//! Modal choice state machine.
//!
//! At most one modal choice is ever open: the accept/reject verdict on an
//! item, or the leave-early exit confirmation. Mutual exclusion is
//! structural — the whole interaction mode is one tagged enum, not a pair
//! of booleans. Transitions are pure; they return a [`ChoiceEffect`]
//! describing what the engine should do, and never mutate anything else.

/// Operator verdict on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject,
}

/// Answer to the "clock out early?" exit prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitAnswer {
    Yes,
    No,
}

/// What an open item dialogue offers the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSelection {
    /// Item is not frontmost: dialogue only, no verdict offered.
    Blocked,
    /// Frontmost item: a live accept/reject toggle.
    Offer(Verdict),
}

/// Direction of a selection-toggle input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectDir {
    Left,
    Right,
}

/// The single source of truth for "what modal choice is currently open."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceState {
    /// No choice open; ordinary movement allowed.
    Idle,
    /// Dialogue open on an item. `subject` is the item's stable id.
    Item {
        subject: u64,
        selection: ItemSelection,
    },
    /// Exit confirmation open.
    Exit { selected: ExitAnswer },
}

/// What the engine must do after a confirm/cancel transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceEffect {
    /// Nothing happened (input arrived in a state that ignores it).
    None,
    /// Close the dialogue with no simulation side effects.
    Close,
    /// Dismiss the subject item with the chosen verdict.
    Dismiss { subject: u64, accepted: bool },
    /// Operator confirmed clocking out: begin the shift-end sequence.
    BeginShiftEnd,
}

impl ChoiceState {
    /// True while any choice is open; ordinary player input is suspended.
    pub fn is_modal(&self) -> bool {
        !matches!(self, ChoiceState::Idle)
    }

    /// Open an item dialogue. Only the frontmost item gets the verdict
    /// toggle; anything else is blocked (dialogue only). Returns `None`
    /// if a choice is already open.
    pub fn open_item(&self, subject: u64, frontmost: bool) -> Option<ChoiceState> {
        if self.is_modal() {
            return None;
        }
        let selection = if frontmost {
            ItemSelection::Offer(Verdict::Accept)
        } else {
            ItemSelection::Blocked
        };
        Some(ChoiceState::Item { subject, selection })
    }

    /// Open the exit confirmation, defaulting to Yes. Returns `None` if a
    /// choice is already open.
    pub fn open_exit(&self) -> Option<ChoiceState> {
        if self.is_modal() {
            return None;
        }
        Some(ChoiceState::Exit {
            selected: ExitAnswer::Yes,
        })
    }

    /// Toggle the two-way selection. Left selects Accept / Yes, right
    /// selects Reject / No; moving onto the already-selected side is a
    /// no-op. Returns true when the selection actually changed.
    pub fn move_select(&mut self, dir: SelectDir) -> bool {
        match self {
            ChoiceState::Item {
                selection: ItemSelection::Offer(verdict),
                ..
            } => {
                let wanted = match dir {
                    SelectDir::Left => Verdict::Accept,
                    SelectDir::Right => Verdict::Reject,
                };
                if *verdict == wanted {
                    false
                } else {
                    *verdict = wanted;
                    true
                }
            }
            ChoiceState::Exit { selected } => {
                let wanted = match dir {
                    SelectDir::Left => ExitAnswer::Yes,
                    SelectDir::Right => ExitAnswer::No,
                };
                if *selected == wanted {
                    false
                } else {
                    *selected = wanted;
                    true
                }
            }
            _ => false,
        }
    }

    /// Confirm the current choice.
    pub fn confirm(&self) -> (ChoiceState, ChoiceEffect) {
        match *self {
            ChoiceState::Idle => (ChoiceState::Idle, ChoiceEffect::None),
            ChoiceState::Item {
                selection: ItemSelection::Blocked,
                ..
            } => (ChoiceState::Idle, ChoiceEffect::Close),
            ChoiceState::Item {
                subject,
                selection: ItemSelection::Offer(verdict),
            } => (
                ChoiceState::Idle,
                ChoiceEffect::Dismiss {
                    subject,
                    accepted: verdict == Verdict::Accept,
                },
            ),
            ChoiceState::Exit { selected } => match selected {
                ExitAnswer::Yes => (ChoiceState::Idle, ChoiceEffect::BeginShiftEnd),
                ExitAnswer::No => (ChoiceState::Idle, ChoiceEffect::Close),
            },
        }
    }

    /// Cancel the current choice.
    pub fn cancel(&self) -> (ChoiceState, ChoiceEffect) {
        match self {
            ChoiceState::Idle => (ChoiceState::Idle, ChoiceEffect::None),
            _ => (ChoiceState::Idle, ChoiceEffect::Close),
        }
    }
}
