//! Which completion to show once the questions run out.

use survey_engine_types::{Answers, Completion, TriggerCondition};

use crate::NoMatchPolicy;

/// How a completion was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// Its trigger conditions all hold.
    Triggered(&'a Completion),

    /// No trigger matched; this is the first completion without conditions.
    Fallback(&'a Completion),

    /// No trigger matched and there is no fallback; chosen by `NoMatchPolicy`.
    NoMatch(&'a Completion),
}

impl<'a> Selection<'a> {
    /// The chosen completion.
    pub fn completion(&self) -> &'a Completion {
        match self {
            Self::Triggered(c) | Self::Fallback(c) | Self::NoMatch(c) => c,
        }
    }
}

/// Choose exactly one completion, or none.
///
/// The first completion (in definition order) whose non-empty trigger list is
/// fully satisfied wins. Otherwise the first completion with an empty trigger
/// list is used. Otherwise `policy` decides.
pub fn select_completion<'a>(
    completions: &'a [Completion],
    answers: &Answers,
    policy: NoMatchPolicy,
) -> Option<Selection<'a>> {
    if let Some(triggered) = completions.iter().find(|completion| {
        !completion.is_fallback()
            && TriggerCondition::all_satisfied(&completion.trigger_condition, answers)
    }) {
        return Some(Selection::Triggered(triggered));
    }

    if let Some(fallback) = completions.iter().find(|completion| completion.is_fallback()) {
        return Some(Selection::Fallback(fallback));
    }

    match policy {
        NoMatchPolicy::FirstCompletion => completions.first().map(Selection::NoMatch),
        NoMatchPolicy::RenderNothing => None,
    }
}
