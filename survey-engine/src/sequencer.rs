//! Which question to ask next.

use survey_engine_types::{Answers, SurveyDefinition, TriggerCondition};

/// Where the sequence stands, given the answers recorded so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Ask the question with this ordinal.
    Ask(u32),

    /// Nothing left to ask; select a completion.
    Complete,
}

/// Decide the next step.
///
/// Once there are as many answers as questions the sequence is complete, which
/// is what lets a remounted survey resume at its completion. Otherwise the next
/// question is the first one, in definition order, that has never been answered
/// and whose own trigger conditions (if any) hold.
pub fn next_step(definition: &SurveyDefinition, answers: &Answers) -> Step {
    if answers.len() >= definition.len() {
        return Step::Complete;
    }

    definition
        .questions()
        .iter()
        .find(|question| {
            !answers.contains(question.ordinal())
                && TriggerCondition::all_satisfied(question.trigger_condition(), answers)
        })
        .map_or(Step::Complete, |question| Step::Ask(question.ordinal()))
}
