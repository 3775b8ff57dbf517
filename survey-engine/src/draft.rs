//! In-progress input for the question on screen, and submit enablement.
//!
//! Validation here is preventive: it decides which controls are interactive and
//! whether submit is enabled. Nothing is rejected after the fact.

use std::collections::BTreeSet;

use survey_engine_types::{AnswerValue, ChosenAnswer, QuestionKind};

/// Cut `text` to at most `max` characters. Characters past the bound are dropped.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// What the respondent has entered so far for the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draft {
    /// Rating or single select.
    Choice {
        selected: Option<u32>,
        other_text: String,
    },

    /// Multi select. Ordered so the submitted answer is ascending by ordinal.
    Choices {
        selected: BTreeSet<u32>,
        other_text: String,
    },

    /// Open text.
    Text(String),

    /// Nothing can be entered.
    Empty,
}

impl Draft {
    /// A blank draft matching the question kind.
    pub fn for_kind(kind: &QuestionKind) -> Self {
        match kind {
            QuestionKind::Rating(_) | QuestionKind::SingleSelect(_) => Self::Choice {
                selected: None,
                other_text: String::new(),
            },
            QuestionKind::MultiSelect(_) => Self::Choices {
                selected: BTreeSet::new(),
                other_text: String::new(),
            },
            QuestionKind::OpenText(_) => Self::Text(String::new()),
            QuestionKind::Unsupported(_) => Self::Empty,
        }
    }

    /// Check if an option is currently selected.
    pub fn is_selected(&self, answer_ordinal: u32) -> bool {
        match self {
            Self::Choice { selected, .. } => *selected == Some(answer_ordinal),
            Self::Choices { selected, .. } => selected.contains(&answer_ordinal),
            Self::Text(_) | Self::Empty => false,
        }
    }

    /// Number of selected options.
    pub fn selected_count(&self) -> usize {
        match self {
            Self::Choice { selected, .. } => usize::from(selected.is_some()),
            Self::Choices { selected, .. } => selected.len(),
            Self::Text(_) | Self::Empty => 0,
        }
    }

    /// The "other" write-in text, empty for drafts without one.
    pub fn other_text(&self) -> &str {
        match self {
            Self::Choice { other_text, .. } | Self::Choices { other_text, .. } => other_text,
            Self::Text(_) | Self::Empty => "",
        }
    }

    /// The open text entered so far.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            _ => "",
        }
    }

    /// Check if clicking this option would do anything.
    ///
    /// Once a multi select reaches `max_choices`, every unselected option is
    /// disabled, "other" included; selected ones stay enabled for deselection.
    pub fn option_enabled(&self, kind: &QuestionKind, answer_ordinal: u32) -> bool {
        if kind.choice(answer_ordinal).is_none() {
            return false;
        }
        match (self, kind) {
            (Self::Choice { .. }, QuestionKind::Rating(_) | QuestionKind::SingleSelect(_)) => true,
            (Self::Choices { selected, .. }, QuestionKind::MultiSelect(multi)) => {
                selected.contains(&answer_ordinal) || !multi.is_full(selected.len())
            }
            _ => false,
        }
    }

    /// Check if the "other" write-in input accepts text.
    pub fn other_input_enabled(&self, kind: &QuestionKind) -> bool {
        kind.choices()
            .iter()
            .find(|choice| choice.is_other)
            .is_some_and(|other| self.is_selected(other.answer_ordinal))
    }

    /// Select (or, for multi select, toggle) an option.
    ///
    /// Returns `false` without changing anything when the option is disabled.
    pub(crate) fn select(&mut self, kind: &QuestionKind, answer_ordinal: u32) -> bool {
        if !self.option_enabled(kind, answer_ordinal) {
            return false;
        }
        match self {
            Self::Choice { selected, .. } => {
                *selected = Some(answer_ordinal);
                true
            }
            Self::Choices { selected, .. } => {
                if !selected.remove(&answer_ordinal) {
                    selected.insert(answer_ordinal);
                }
                true
            }
            Self::Text(_) | Self::Empty => false,
        }
    }

    /// Replace the write-in text, truncated to `max` characters.
    ///
    /// Returns `false` while the "other" option is not selected.
    pub(crate) fn set_other_text(&mut self, kind: &QuestionKind, text: &str, max: usize) -> bool {
        if !self.other_input_enabled(kind) {
            return false;
        }
        match self {
            Self::Choice { other_text, .. } | Self::Choices { other_text, .. } => {
                *other_text = truncate_chars(text, max);
                true
            }
            Self::Text(_) | Self::Empty => false,
        }
    }

    /// Replace the open text, truncated to `max` characters.
    pub(crate) fn set_text(&mut self, text: &str, max: usize) -> bool {
        match self {
            Self::Text(current) => {
                *current = truncate_chars(text, max);
                true
            }
            _ => false,
        }
    }

    /// Check if the submit control is enabled.
    pub fn can_submit(&self, kind: &QuestionKind) -> bool {
        self.to_answer(kind).is_some()
    }

    /// The answer this draft would submit, or `None` while submit is disabled.
    pub fn to_answer(&self, kind: &QuestionKind) -> Option<AnswerValue> {
        match (self, kind) {
            (
                Self::Choice {
                    selected,
                    other_text,
                },
                QuestionKind::Rating(_) | QuestionKind::SingleSelect(_),
            ) => {
                let choice = kind.choice((*selected)?)?;
                chosen(choice.answer_ordinal, choice.is_other, other_text).map(AnswerValue::Choice)
            }
            (
                Self::Choices {
                    selected,
                    other_text,
                },
                QuestionKind::MultiSelect(multi),
            ) => {
                if !multi.accepts(selected.len()) {
                    return None;
                }
                selected
                    .iter()
                    .map(|&ordinal| {
                        let choice = kind.choice(ordinal)?;
                        chosen(ordinal, choice.is_other, other_text)
                    })
                    .collect::<Option<Vec<_>>>()
                    .map(AnswerValue::Choices)
            }
            (Self::Text(text), QuestionKind::OpenText(_)) => {
                (!text.trim().is_empty()).then(|| AnswerValue::Text(text.clone()))
            }
            _ => None,
        }
    }
}

fn chosen(answer_ordinal: u32, is_other: bool, other_text: &str) -> Option<ChosenAnswer> {
    if !is_other {
        return Some(ChosenAnswer::new(answer_ordinal));
    }
    if other_text.trim().is_empty() {
        return None;
    }
    Some(ChosenAnswer::with_text(answer_ordinal, other_text))
}
