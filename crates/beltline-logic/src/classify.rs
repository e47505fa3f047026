//! Spawn-order classification — which items on the belt are wrong.
//!
//! Each shift selects a [`ClassifyRule`] declaratively; the rule maps an
//! item's 1-based spawn ordinal within the shift to a [`Classification`].
//! Classification in turn picks one of two stock dialogue lines; shifts
//! may override the line per ordinal through the catalog.

use serde::{Deserialize, Serialize};

/// Whether an item is what it claims to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Good,
    Evil,
}

/// Per-shift rule mapping spawn order to classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassifyRule {
    /// Only the third item spawned is evil (tutorial pacing).
    DebutThird,
    /// Every odd-numbered spawn is evil.
    AlternatingOdd,
    /// Nothing is evil; scripted shifts drive everything via overrides.
    AllGood,
}

impl ClassifyRule {
    /// Default rule for a shift index when the catalog does not pick one.
    pub fn for_shift(shift_index: usize) -> Self {
        match shift_index {
            0 => ClassifyRule::DebutThird,
            1 => ClassifyRule::AlternatingOdd,
            _ => ClassifyRule::AllGood,
        }
    }

    /// Classify the `ordinal`-th item spawned this shift (1-based).
    pub fn classify(&self, ordinal: u32) -> Classification {
        match self {
            ClassifyRule::DebutThird => {
                if ordinal == 3 {
                    Classification::Evil
                } else {
                    Classification::Good
                }
            }
            ClassifyRule::AlternatingOdd => {
                if ordinal % 2 == 1 {
                    Classification::Evil
                } else {
                    Classification::Good
                }
            }
            ClassifyRule::AllGood => Classification::Good,
        }
    }
}

/// Stock dialogue line attached to an item of the given classification.
pub fn default_dialogue(classification: Classification) -> &'static str {
    match classification {
        Classification::Good => "Just a regular toy. Nothing off about this one.",
        Classification::Evil => "Something is wrong with this one. Look closer.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_zero_only_third_is_evil() {
        let rule = ClassifyRule::for_shift(0);
        assert_eq!(rule, ClassifyRule::DebutThird);
        for n in [1, 2, 4, 5, 6, 10] {
            assert_eq!(rule.classify(n), Classification::Good, "ordinal {}", n);
        }
        assert_eq!(rule.classify(3), Classification::Evil);
    }

    #[test]
    fn test_shift_one_alternates_on_odd() {
        let rule = ClassifyRule::for_shift(1);
        for n in 1..=10 {
            let expected = if n % 2 == 1 {
                Classification::Evil
            } else {
                Classification::Good
            };
            assert_eq!(rule.classify(n), expected, "ordinal {}", n);
        }
    }

    #[test]
    fn test_later_shifts_are_all_good() {
        for shift in 2..6 {
            let rule = ClassifyRule::for_shift(shift);
            for n in 1..=8 {
                assert_eq!(rule.classify(n), Classification::Good);
            }
        }
    }

    #[test]
    fn test_dialogue_differs_by_classification() {
        assert_ne!(
            default_dialogue(Classification::Good),
            default_dialogue(Classification::Evil)
        );
    }
}
